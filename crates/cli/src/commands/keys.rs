use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use rolodex_core::RecordStore;
use std::io::Write;

pub fn run<W: Write>(out: &mut W, store: &RecordStore) -> anyhow::Result<()> {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["#", "Field", "Records"]);

    for (i, field) in store.field_names().iter().enumerate() {
        let carrying = store
            .records()
            .iter()
            .filter(|r| r.get(field).is_some())
            .count();
        table.add_row(vec![(i + 1).to_string(), field.clone(), carrying.to_string()]);
    }

    writeln!(out, "\nSearchable Fields\n")?;
    writeln!(out, "{table}\n")?;
    Ok(())
}
