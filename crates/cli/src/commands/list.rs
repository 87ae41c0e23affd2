use rolodex_core::paginate::{from_one_based, Page};
use rolodex_core::{Record, RecordStore};
use std::io::Write;

use crate::render::{write_page, Layout};

pub fn run<W: Write>(
    out: &mut W,
    store: &RecordStore,
    page: usize,
    per_page: usize,
    layout: Layout,
) -> anyhow::Result<()> {
    let index = from_one_based(page).ok_or_else(|| anyhow::anyhow!("Pages are numbered from 1"))?;
    let all: Vec<&Record> = store.records().iter().collect();
    write_page(out, "All Clients", &Page::new(&all, index, per_page), layout)?;
    Ok(())
}
