use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use rolodex_core::paginate::Page;
use rolodex_core::Record;
use std::io::Write;

/// How the one-shot commands print a page of records.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Layout {
    #[default]
    Table,
    /// One numbered `key: value, ...` line per record.
    Lines,
}

/// One row per record. Columns are `#` plus every field seen on these
/// records, first-seen order; a record without a field gets a blank cell.
pub fn records_table(records: &[&Record], first_position: usize) -> Table {
    let mut columns: Vec<&str> = Vec::new();
    for name in records.iter().flat_map(|r| r.field_names()) {
        if !columns.contains(&name) {
            columns.push(name);
        }
    }

    let mut header = vec!["#".to_string()];
    header.extend(columns.iter().map(|c| c.to_string()));

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);

    for (offset, record) in records.iter().enumerate() {
        let mut row = vec![(first_position + offset).to_string()];
        row.extend(
            columns
                .iter()
                .map(|c| record.get(c).map(|v| v.to_string()).unwrap_or_default()),
        );
        table.add_row(row);
    }
    table
}

/// Table for one page, numbered by position in the whole result.
pub fn page_table(page: &Page<'_, &Record>) -> Table {
    records_table(page.items, page.index * page.size + 1)
}

/// Prints a page for the one-shot commands, which number pages from 1.
pub fn write_page<W: Write>(
    out: &mut W,
    title: &str,
    page: &Page<'_, &Record>,
    layout: Layout,
) -> std::io::Result<()> {
    writeln!(out, "\n{}\n", title)?;
    if page.total_items == 0 {
        writeln!(out, "No results found.\n")?;
        return Ok(());
    }
    if page.is_empty() {
        writeln!(
            out,
            "Page {} is past the end ({} pages, {} total).\n",
            page.index + 1,
            page.total_pages,
            page.total_items
        )?;
        return Ok(());
    }
    match layout {
        Layout::Table => writeln!(out, "{}", page_table(page))?,
        Layout::Lines => {
            let first = page.index * page.size + 1;
            for (offset, record) in page.items.iter().enumerate() {
                writeln!(out, "{}. {}", first + offset, record.render())?;
            }
            writeln!(out)?;
        }
    }
    writeln!(
        out,
        "Page {} of {} ({} total)\n",
        page.index + 1,
        page.total_pages,
        page.total_items
    )
}
