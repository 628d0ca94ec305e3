//! Presets command implementation.

use anyhow::{Result, bail};
use linkguard::CrcPreset;

use crate::style::{Status, print_preset_table};

const CHECK_INPUT: &[u8] = b"123456789";

pub fn run() -> Result<()> {
    let rows: Vec<(CrcPreset, bool)> = CrcPreset::ALL
        .iter()
        .map(|&preset| (preset, preset.checksum(CHECK_INPUT) == preset.check()))
        .collect();

    print_preset_table(&rows);

    let failed: Vec<_> = rows
        .iter()
        .filter(|(_, ok)| !ok)
        .map(|(p, _)| p.name())
        .collect();
    if failed.is_empty() {
        Status::Pass.print("All check values verified against \"123456789\"");
        Ok(())
    } else {
        Status::Fail.print(format_args!("Check value mismatch: {}", failed.join(", ")));
        bail!("{} preset(s) failed verification", failed.len())
    }
}
