//! Status lines and aligned field listings.

use std::fmt::Display;

use linkguard::CrcParameters;

use super::colors::SemanticStyle;

/// Outcome marker for a one-line status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Pass,
    Fail,
    Warn,
    Hint,
}

impl Status {
    fn marker(self) -> String {
        match self {
            Self::Pass => "✓".success(),
            Self::Fail => "✗".error(),
            Self::Warn => "⚠".warning(),
            Self::Hint => "→".muted(),
        }
    }

    /// Formats `msg` behind this status's marker.
    pub fn render(self, msg: impl Display) -> String {
        match self {
            Self::Hint => format!("{} {}", self.marker(), msg.muted()),
            _ => format!("{} {msg}", self.marker()),
        }
    }

    /// Prints the rendered line; failures go to stderr.
    pub fn print(self, msg: impl Display) {
        let line = self.render(msg);
        match self {
            Self::Fail => eprintln!("{line}"),
            _ => println!("{line}"),
        }
    }
}

/// Formats one indented `label: value` line.
pub fn render_field(label: &str, value: impl Display) -> String {
    format!("  {}: {value}", label.muted())
}

pub fn print_field(label: &str, value: impl Display) {
    println!("{}", render_field(label, value));
}

/// Lists the five CRC model fields, registers in `0x` hex.
pub fn print_parameters(params: &CrcParameters) {
    print_field("Polynomial", format_args!("{:#06X}", params.polynomial));
    print_field("Init", format_args!("{:#06X}", params.initial_value));
    print_field("XorOut", format_args!("{:#06X}", params.final_xor));
    print_field("RefIn", params.reflect_input);
    print_field("RefOut", params.reflect_output);
}
