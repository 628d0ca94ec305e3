//! Version command implementation.

use linkguard::CrcPreset;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn run() {
    println!("linkguard {VERSION}");
    println!();
    println!("CRC-16 checksums and bounded staging for binary links.");
    println!();
    println!("Build info:");
    println!("  Target:       {}", std::env::consts::ARCH);
    println!("  OS:           {}", std::env::consts::OS);
    println!(
        "  Presets:      {}",
        CrcPreset::ALL
            .iter()
            .map(|p| p.name())
            .collect::<Vec<_>>()
            .join(", ")
    );
}
