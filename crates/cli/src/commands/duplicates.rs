use rolodex_core::paginate::{from_one_based, Page};
use rolodex_core::search::duplicate_emails;
use rolodex_core::RecordStore;
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
    let dups = duplicate_emails(store);
    write_page(out, "Duplicate Emails", &Page::new(&dups, index, per_page), layout)?;
    Ok(())
}
