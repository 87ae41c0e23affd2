// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::paginate::{from_one_based, slice, total_pages, Page};

#[test]
fn test_slice_middle_page() {
    let items = ['a', 'b', 'c', 'd', 'e', 'f'];
    assert_eq!(slice(&items, 1, 2), &['c', 'd']);
}

#[test]
fn test_slice_partial_last_page() {
    let items = [1, 2, 3, 4, 5, 6, 7];
    assert_eq!(slice(&items, 1, 5), &[6, 7]);
}

#[test]
fn test_slice_out_of_range_is_empty() {
    let items = [1, 2, 3];
    assert!(slice(&items, 1, 3).is_empty());
    assert!(slice(&items, 10, 2).is_empty());
    assert!(slice(&items, usize::MAX, usize::MAX).is_empty());
    assert!(slice::<u8>(&[], 0, 5).is_empty());
}

#[test]
fn test_total_pages() {
    assert_eq!(total_pages(0, 5), 0);
    assert_eq!(total_pages(1, 5), 1);
    assert_eq!(total_pages(5, 5), 1);
    assert_eq!(total_pages(6, 5), 2);
    assert_eq!(total_pages(12, 5), 3);
    assert_eq!(total_pages(3, 0), 0);
}

#[test]
fn test_pages_reconstruct_sequence() {
    let items: Vec<u32> = (0..23).collect();
    for size in 1..=25 {
        let mut rebuilt = Vec::new();
        for index in 0..total_pages(items.len(), size) {
            let page = slice(&items, index, size);
            assert!(!page.is_empty(), "page {} of size {} is empty", index, size);
            rebuilt.extend_from_slice(page);
        }
        assert_eq!(rebuilt, items, "size {}", size);
        assert!(slice(&items, total_pages(items.len(), size), size).is_empty());
    }
}

#[test]
fn test_one_based_adapter() {
    assert_eq!(from_one_based(0), None);
    assert_eq!(from_one_based(1), Some(0));
    assert_eq!(from_one_based(2), Some(1));
}

#[test]
fn test_page_view() {
    let items: Vec<u32> = (0..12).collect();
    let first = Page::new(&items, 0, 5);
    assert_eq!(first.items, &[0, 1, 2, 3, 4]);
    assert_eq!(first.total_pages, 3);
    assert_eq!(first.total_items, 12);
    assert!(first.has_next());
    assert!(!first.has_previous());

    let last = Page::new(&items, 2, 5);
    assert_eq!(last.items, &[10, 11]);
    assert!(!last.has_next());
    assert!(last.has_previous());

    let beyond = Page::new(&items, 7, 5);
    assert!(beyond.is_empty());
    assert_eq!(beyond.total_pages, 3);
}
