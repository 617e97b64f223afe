//! Output formatting for locate results, ripgrep style or JSON

use crate::tree::TreeStats;
use crate::utils::LineMap;
use serde::Serialize;
use std::io::{self, Write};
use termcolor::{Color, ColorSpec, WriteColor};

/// Occurrences of one pattern
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternHits {
    pub pattern: String,
    /// Total number of occurrences, before any limit
    pub count: usize,
    /// Ascending start offsets, possibly truncated to a limit
    pub positions: Vec<usize>,
}

impl PatternHits {
    pub fn new(pattern: &str, mut positions: Vec<usize>, limit: Option<usize>) -> Self {
        let count = positions.len();
        if let Some(limit) = limit {
            positions.truncate(limit);
        }
        Self {
            pattern: pattern.to_string(),
            count,
            positions,
        }
    }
}

/// Everything a `locate` run reports
#[derive(Debug, Clone, Serialize)]
pub struct LocateReport {
    pub file: String,
    pub text_len: usize,
    pub results: Vec<PatternHits>,
}

/// Print every hit as `pattern:line:column:offset:` followed by the line,
/// with the match highlighted
pub fn print_hits<W: WriteColor>(
    out: &mut W,
    report: &LocateReport,
    text: &[u8],
) -> io::Result<()> {
    let lines = LineMap::new(text);

    for hits in &report.results {
        for &offset in &hits.positions {
            let (line_num, column) = lines.position(offset);
            let line = lines.line_range(line_num - 1, text);

            out.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)).set_bold(true))?;
            write!(out, "{}", hits.pattern)?;
            out.reset()?;
            write!(out, ":")?;

            out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
            write!(out, "{}", line_num)?;
            out.reset()?;
            write!(out, ":{}:{}:", column, offset)?;

            // A match may run past the end of its line
            let match_end = (offset + hits.pattern.len()).min(line.end);

            out.write_all(&text[line.start..offset])?;
            if match_end > offset {
                out.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
                out.write_all(&text[offset..match_end])?;
                out.reset()?;
            }
            out.write_all(&text[match_end..line.end])?;
            writeln!(out)?;
        }

        if hits.count > hits.positions.len() {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
            writeln!(
                out,
                "{}: {} more occurrence(s) not shown",
                hits.pattern,
                hits.count - hits.positions.len()
            )?;
            out.reset()?;
        }
    }

    Ok(())
}

/// Print only the number of occurrences per pattern (for -c flag)
pub fn print_counts<W: WriteColor>(out: &mut W, report: &LocateReport) -> io::Result<()> {
    for hits in &report.results {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)))?;
        write!(out, "{}", hits.pattern)?;
        out.reset()?;
        write!(out, ":")?;
        out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        writeln!(out, "{}", hits.count)?;
        out.reset()?;
    }
    Ok(())
}

/// Print a value as pretty JSON followed by a newline
pub fn print_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).map_err(io::Error::other)?;
    writeln!(out)
}

/// Print tree statistics as a table
pub fn print_stats<W: Write>(out: &mut W, file: &str, stats: &TreeStats) -> io::Result<()> {
    writeln!(out, "Suffix Tree Statistics")?;
    writeln!(out, "======================")?;
    writeln!(out)?;
    writeln!(out, "File:             {}", file)?;
    writeln!(out, "Text length:      {}", format_size(stats.text_len as u64))?;
    writeln!(out, "Nodes:            {}", stats.node_count)?;
    writeln!(out, "Leaves:           {}", stats.leaf_count)?;
    writeln!(out, "Internal nodes:   {}", stats.internal_count)?;
    writeln!(out, "Max depth:        {}", stats.max_depth)?;
    Ok(())
}

/// Print one suffix array entry per line
pub fn print_suffix_array<W: Write>(out: &mut W, sa: &[usize]) -> io::Result<()> {
    for pos in sa {
        writeln!(out, "{}", pos)?;
    }
    Ok(())
}

/// Format byte size to human readable
fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}
