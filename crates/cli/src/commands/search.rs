use rolodex_core::paginate::{from_one_based, Page};
use rolodex_core::search::search_by_field;
use rolodex_core::RecordStore;
use std::io::Write;

use crate::render::{write_page, Layout};

pub fn run<W: Write>(
    out: &mut W,
    store: &RecordStore,
    field: &str,
    query: &str,
    page: usize,
    per_page: usize,
    layout: Layout,
) -> anyhow::Result<()> {
    let index = from_one_based(page).ok_or_else(|| anyhow::anyhow!("Pages are numbered from 1"))?;

    if !store.is_empty() && !store.has_field(field) {
        // Not an error: the scan just finds nothing. Say why.
        writeln!(
            out,
            "\nNo client has a '{}' field. Known fields: {}",
            field,
            store.field_names().join(", ")
        )?;
    }

    let hits = search_by_field(store, field, query);
    let title = format!("Clients with '{}' matching '{}'", field, query);
    write_page(out, &title, &Page::new(&hits, index, per_page), layout)?;
    Ok(())
}
