//! CLI output formatting.
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.
//!
//! ```text
//! 001 a.txt  2024-01-05
//! 002 b.txt  2024-03-10
//!
//! Generated contents/index.html (2 files)
//! ```

use crate::generate::Summary;
use crate::list::Entry;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Format the listing: one line per entry, name column padded so the
/// dates line up.
pub fn format_listing(entries: &[Entry]) -> Vec<String> {
    if entries.is_empty() {
        return vec!["No files listed".to_string()];
    }

    let width = entries.iter().map(|e| e.name.len()).max().unwrap_or(0);
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            format!(
                "{} {:<width$}  {}",
                format_index(i + 1),
                entry.name,
                entry.modified
            )
        })
        .collect()
}

/// Format build output: the listing plus a summary trailer naming the
/// written file.
pub fn format_build_output(summary: &Summary) -> Vec<String> {
    let mut lines = format_listing(&summary.entries);
    lines.push(String::new());
    lines.push(format!(
        "Generated {} ({} {})",
        summary.output_path.display(),
        summary.entries.len(),
        if summary.entries.len() == 1 {
            "file"
        } else {
            "files"
        }
    ));
    lines
}

/// Print the listing to stdout.
pub fn print_listing(entries: &[Entry]) {
    for line in format_listing(entries) {
        println!("{}", line);
    }
}

/// Print build output to stdout.
pub fn print_build_output(summary: &Summary) {
    for line in format_build_output(summary) {
        println!("{}", line);
    }
}
