//! Console output helpers
//!
//! Formatting for swatch listings and the log writer that tees log lines
//! to stderr and a file.

use crate::color::{HexColor, Rgb};
use std::io::Write;

/// Print a header section with a box
pub fn print_header(title: &str) {
    let width = 60;
    let title_padded = format!("{:^width$}", title, width = width - 2);
    println!();
    println!("╔{}╗", "═".repeat(width - 2));
    println!("║{}║", title_padded);
    println!("╚{}╝", "═".repeat(width - 2));
}

/// Print a section divider with a label
pub fn print_section(label: &str) {
    println!();
    println!("── {} {}", label, "─".repeat(56usize.saturating_sub(label.len())));
}

/// A 24-bit ANSI background block previewing the color
pub fn swatch(color: &HexColor) -> String {
    let Rgb { r, g, b } = color.to_rgb();
    format!("\x1b[48;2;{};{};{}m    \x1b[0m", r, g, b)
}

/// One aligned `swatch name value` line
pub fn format_token_line(name: &str, color: &HexColor, with_swatch: bool) -> String {
    if with_swatch {
        format!("  {} {:<26} {}", swatch(color), name, color)
    } else {
        format!("  {:<26} {}", name, color)
    }
}

/// Writer that duplicates log output to stderr and a file
pub struct DualWriter {
    pub console: std::io::Stderr,
    pub file: std::fs::File,
}

impl Write for DualWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let _ = self.console.write(buf);
        self.file.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        let _ = self.console.flush();
        self.file.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_token_line_plain() {
        let color = HexColor::parse("#6750a4").unwrap();
        let line = format_token_line("primary", &color, false);
        assert!(line.starts_with("  primary"));
        assert!(line.ends_with("#6750a4"));
        assert!(!line.contains('\x1b'));
    }

    #[test]
    fn test_swatch_uses_color_channels() {
        let color = HexColor::parse("#ff8000").unwrap();
        assert!(swatch(&color).contains("48;2;255;128;0m"));
    }

    #[test]
    fn test_dual_writer_writes_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("log.txt");
        let mut writer = DualWriter {
            console: std::io::stderr(),
            file: std::fs::File::create(&path).unwrap(),
        };
        writer.write_all(b"hello\n").unwrap();
        writer.flush().unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello\n");
    }
}
