use rolodex_cli::browser::Browser;
use rolodex_cli::commands::{browse, duplicates, keys, list, search};
use rolodex_cli::render::Layout;
use rolodex_core::{RecordStore, StoreHandle};
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::tempdir;

const CLIENTS: &str = r#"[
    {"id": 1, "full_name": "John Doe", "email": "john.doe@gmail.com"},
    {"id": 2, "full_name": "Jane Smith", "email": "jane.smith@yahoo.com"},
    {"id": 3, "full_name": "Alex Johnson", "email": "alex.johnson@hotmail.com"},
    {"id": 4, "full_name": "Michael Williams", "email": "michael.williams@outlook.com"},
    {"id": 5, "full_name": "Emily Brown", "email": "emily.brown@aol.com"},
    {"id": 6, "full_name": "William Davis", "email": "william.davis@icloud.com"},
    {"id": 7, "full_name": "Olivia Miller", "email": "olivia.miller@protonmail.com"},
    {"id": 8, "full_name": "James Wilson", "email": "james.wilson@yandex.com"},
    {"id": 9, "full_name": "Ava Taylor", "email": "ava.taylor@mail.com"},
    {"id": 10, "full_name": "Another Jane Smith", "email": "jane.smith@yahoo.com"},
    {"id": 11, "full_name": "Daniel Anderson", "email": "daniel.anderson@gmail.com"},
    {"id": 12, "full_name": "Sophia Thomas", "email": "sophia.thomas@hotmail.com"}
]"#;

fn write_clients(dir: &Path) -> PathBuf {
    let path = dir.join("clients.json");
    std::fs::write(&path, CLIENTS).unwrap();
    path
}

/// Runs a scripted session and returns everything the browser printed.
fn session(path: &Path, script: &str) -> String {
    let (handle, _) = StoreHandle::open(path);
    let mut browser = Browser::new(Arc::new(handle), Cursor::new(script.to_string()), Vec::new(), 5);
    browser.run().unwrap();
    String::from_utf8(browser.into_output()).unwrap()
}

#[test]
fn test_list_all_navigation() {
    let dir = tempdir().unwrap();
    let path = write_clients(dir.path());

    // Next past the last page stays on it; previous steps back.
    let out = session(&path, "3\nn\nn\nn\np\nq\n5\n");
    assert!(out.contains("All Clients:"));
    assert_eq!(out.matches("--- Page 1 of 3 ---").count(), 1);
    assert_eq!(out.matches("--- Page 3 of 3 ---").count(), 2);
    assert_eq!(out.matches("--- Page 2 of 3 ---").count(), 2);
    assert!(out.contains("sophia.thomas@hotmail.com"));
    assert!(out.contains("(n)ext, (p)revious, (q)uit"));
}

#[test]
fn test_previous_on_first_page_stays() {
    let dir = tempdir().unwrap();
    let path = write_clients(dir.path());
    let out = session(&path, "3\nP\nq\n5\n");
    assert_eq!(out.matches("--- Page 1 of 3 ---").count(), 2);
}

#[test]
fn test_search_by_selected_field() {
    let dir = tempdir().unwrap();
    let path = write_clients(dir.path());

    let out = session(&path, "1\n2\nJANE\nq\n5\n");
    assert!(out.contains("Fields available for search:"));
    assert!(out.contains("  1. id"));
    assert!(out.contains("  2. full_name"));
    assert!(out.contains("  3. email"));
    assert!(out.contains("Enter search query for 'full_name': "));
    assert!(out.contains("--- Page 1 of 1 ---"));
    assert_eq!(out.matches("jane.smith@yahoo.com").count(), 2);
    assert!(!out.contains("john.doe@gmail.com"));
}

#[test]
fn test_search_without_matches() {
    let dir = tempdir().unwrap();
    let path = write_clients(dir.path());
    let out = session(&path, "1\n3\nnobody@nowhere\n5\n");
    assert!(out.contains("No results found."));
    assert!(!out.contains("--- Page"));
}

#[test]
fn test_invalid_field_selection() {
    let dir = tempdir().unwrap();
    let path = write_clients(dir.path());
    for choice in ["0", "4", "abc"] {
        let out = session(&path, &format!("1\n{}\n5\n", choice));
        assert!(
            out.contains("Invalid field selection. Please enter a number between 1 and 3."),
            "choice {}",
            choice
        );
        assert!(!out.contains("Enter search query"));
    }
}

#[test]
fn test_duplicates() {
    let dir = tempdir().unwrap();
    let path = write_clients(dir.path());
    let out = session(&path, "2\nq\n5\n");
    assert!(out.contains("Duplicate Emails:"));
    assert!(out.contains("--- Page 1 of 1 ---"));
    assert_eq!(out.matches("jane.smith@yahoo.com").count(), 2);
    assert!(!out.contains("ava.taylor@mail.com"));
}

#[test]
fn test_invalid_inputs_are_reported() {
    let dir = tempdir().unwrap();
    let path = write_clients(dir.path());
    let out = session(&path, "7\n3\nx\nq\n5\n");
    assert!(out.contains("Invalid choice. Try again."));
    assert!(out.contains("Invalid input."));
}

#[test]
fn test_end_of_input_exits() {
    let dir = tempdir().unwrap();
    let path = write_clients(dir.path());

    // Input ends inside the pagination loop, then at the menu.
    let out = session(&path, "3\n");
    assert!(out.contains("--- Page 1 of 3 ---"));
    assert!(out.ends_with("> \n"));
}

#[test]
fn test_refresh_picks_up_new_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("clients.json");
    let (handle, _) = StoreHandle::open(&path);
    let handle = Arc::new(handle);

    // Empty store at first.
    let mut browser = Browser::new(Arc::clone(&handle), Cursor::new("3\n"), Vec::new(), 5);
    browser.run().unwrap();
    let out = String::from_utf8(browser.into_output()).unwrap();
    assert!(out.contains("No results found."));

    std::fs::write(&path, CLIENTS).unwrap();
    let mut browser = Browser::new(Arc::clone(&handle), Cursor::new("4\n3\nq\n5\n"), Vec::new(), 5);
    browser.run().unwrap();
    let out = String::from_utf8(browser.into_output()).unwrap();
    assert!(out.contains("Refreshing client data from"));
    assert!(out.contains("Loaded 12 clients (3 fields), fingerprint "));
    assert!(out.contains("Done!"));
    assert!(out.contains("--- Page 1 of 3 ---"));
    assert_eq!(handle.snapshot().len(), 12);
}

#[test]
fn test_refresh_reports_missing_file() {
    let dir = tempdir().unwrap();
    let path = write_clients(dir.path());
    let (handle, _) = StoreHandle::open(&path);
    std::fs::remove_file(&path).unwrap();

    let mut browser = Browser::new(Arc::new(handle), Cursor::new("4\n1\n5\n"), Vec::new(), 5);
    browser.run().unwrap();
    let out = String::from_utf8(browser.into_output()).unwrap();
    assert!(out.contains("File not found:"));
    assert!(out.contains("No fields available. Try refreshing the client data."));
}

#[test]
fn test_custom_page_size() {
    let dir = tempdir().unwrap();
    let path = write_clients(dir.path());
    let (handle, _) = StoreHandle::open(&path);
    let mut out = Vec::new();
    browse::run(Arc::new(handle), Cursor::new("3\nq\n5\n"), &mut out, 4).unwrap();
    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("--- Page 1 of 3 ---"));
    assert!(out.contains("michael.williams@outlook.com"));
    assert!(!out.contains("emily.brown@aol.com"));
}

#[test]
fn test_one_shot_commands() {
    let dir = tempdir().unwrap();
    let path = write_clients(dir.path());
    let (store, outcome) = RecordStore::load(&path);
    assert!(outcome.is_ok());

    let mut out = Vec::new();
    keys::run(&mut out, &store).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Searchable Fields"));
    assert!(text.contains("full_name"));

    let mut out = Vec::new();
    list::run(&mut out, &store, 3, 5, Layout::Table).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Page 3 of 3 (12 total)"));
    assert!(text.contains("daniel.anderson@gmail.com"));

    let mut out = Vec::new();
    list::run(&mut out, &store, 9, 5, Layout::Table).unwrap();
    assert!(String::from_utf8(out).unwrap().contains("past the end"));

    let mut out = Vec::new();
    assert!(list::run(&mut out, &store, 0, 5, Layout::Table).is_err());

    let mut out = Vec::new();
    search::run(&mut out, &store, "email", "GMAIL", 1, 5, Layout::Table).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Page 1 of 1 (2 total)"));

    let mut out = Vec::new();
    search::run(&mut out, &store, "phone", "555", 1, 5, Layout::Table).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("No client has a 'phone' field"));
    assert!(text.contains("No results found."));

    let mut out = Vec::new();
    duplicates::run(&mut out, &store, 1, 5, Layout::Table).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Page 1 of 1 (2 total)"));
}

#[test]
fn test_plain_layout_prints_one_line_per_record() {
    let dir = tempdir().unwrap();
    let path = write_clients(dir.path());
    let (store, _) = RecordStore::load(&path);

    let mut out = Vec::new();
    duplicates::run(&mut out, &store, 1, 5, Layout::Lines).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("1. id: 2, full_name: Jane Smith, email: jane.smith@yahoo.com\n"));
    assert!(text.contains("2. id: 10, full_name: Another Jane Smith, email: jane.smith@yahoo.com\n"));
    assert!(text.contains("Page 1 of 1 (2 total)"));

    // Numbering continues across pages.
    let mut out = Vec::new();
    list::run(&mut out, &store, 3, 5, Layout::Lines).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("11. id: 11, full_name: Daniel Anderson"));
    assert!(!text.contains('│'));
}
