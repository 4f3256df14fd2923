//! `pform presets` -- list the built-in presets.

use anyhow::Result;
use comfy_table::{presets as table_presets, Cell, Color, ContentArrangement, Table};
use console::style;

use promptform_core::presets::PresetRegistry;

/// Print the preset table (or JSON summaries with `--json`).
pub fn list_presets(registry: &PresetRegistry, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&registry.infos())?);
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(table_presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Name").fg(Color::White),
        Cell::new("Title").fg(Color::White),
        Cell::new("Fields").fg(Color::White),
    ]);

    for preset in registry.iter() {
        let fields: Vec<&str> = preset.fields.iter().map(|f| f.name.as_str()).collect();
        table.add_row(vec![
            Cell::new(&preset.name).fg(Color::Cyan),
            Cell::new(&preset.title),
            Cell::new(fields.join(", ")).fg(Color::DarkGrey),
        ]);
    }

    println!();
    println!("{table}");
    println!();
    println!(
        "  Serve forms with: {}",
        style("pform serve").yellow()
    );
    println!();

    Ok(())
}
