//! One-shot output of a rendered list to stdout

use anyhow::Result;
use clap::ValueEnum;
use std::io::Write;

use crate::render::SegmentList;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// One item per line, prefixed by the marker
    Plain,
    /// Separator and keyed items as JSON
    Json,
    /// A <div> wrapping one <li> per item
    Markup,
}

pub fn write_list<W: Write>(out: &mut W, list: &SegmentList, format: Format, marker: &str) -> Result<()> {
    match format {
        Format::Plain => {
            for node in list.iter() {
                if marker.is_empty() {
                    writeln!(out, "{}", node.content)?;
                } else {
                    writeln!(out, "{} {}", marker, node.content)?;
                }
            }
        }
        Format::Json => {
            serde_json::to_writer(&mut *out, list)?;
            writeln!(out)?;
        }
        Format::Markup => {
            writeln!(out, "<div>")?;
            for node in list.iter() {
                writeln!(out, "  <li>{}</li>", escape_markup(&node.content))?;
            }
            writeln!(out, "</div>")?;
        }
    }
    Ok(())
}

fn escape_markup(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
