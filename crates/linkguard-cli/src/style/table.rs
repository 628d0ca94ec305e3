//! Table formatting using comfy-table.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};
use linkguard::CrcPreset;

const PRESET_COLUMNS: [&str; 8] = [
    "Preset", "Poly", "Init", "XorOut", "RefIn", "RefOut", "Check", "Verified",
];

/// Builds the preset listing; each row carries whether its check value matched.
pub fn preset_table(rows: &[(CrcPreset, bool)]) -> Table {
    let mut table = Table::new();

    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let header_cells: Vec<Cell> = PRESET_COLUMNS
        .iter()
        .map(|col| {
            if super::no_color() {
                Cell::new(col)
            } else {
                Cell::new(col)
                    .add_attribute(Attribute::Bold)
                    .fg(Color::Cyan)
            }
        })
        .collect();
    table.set_header(header_cells);

    for (preset, verified) in rows {
        let params = preset.params();
        table.add_row(vec![
            preset.name().to_string(),
            format!("{:#06X}", params.polynomial),
            format!("{:#06X}", params.initial_value),
            format!("{:#06X}", params.final_xor),
            params.reflect_input.to_string(),
            params.reflect_output.to_string(),
            format!("{:#06X}", preset.check()),
            if *verified { "✓" } else { "✗" }.to_string(),
        ]);
    }

    table
}

/// Prints the preset listing.
pub fn print_preset_table(rows: &[(CrcPreset, bool)]) {
    println!("{}", preset_table(rows));
}
