// Rendering the site map for screens, documents and downstream tools

use crate::error::RenderError;
use crate::tree::{Node, PathTree};
use colored::Colorize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapFormat {
    Text,
    Json,
    Markdown,
}

impl MapFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" => Some(MapFormat::Text),
            "json" => Some(MapFormat::Json),
            "markdown" | "md" => Some(MapFormat::Markdown),
            _ => None,
        }
    }
}

/// Render the whole tree. Colour only applies to the text format.
pub fn render(tree: &PathTree, format: MapFormat, color: bool) -> Result<String, RenderError> {
    match format {
        MapFormat::Text => Ok(render_text(tree, color)),
        MapFormat::Json => render_json(tree.structure()),
        MapFormat::Markdown => Ok(render_markdown(tree.structure())),
    }
}

/// Pretty JSON array of `{"Name", "Children"}` objects.
pub fn render_json(nodes: &[Node]) -> Result<String, RenderError> {
    Ok(serde_json::to_string_pretty(nodes)?)
}

pub fn render_text(tree: &PathTree, color: bool) -> String {
    let mut report = String::new();
    report.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");
    report.push_str(&format!(
        "  Hosts: {}  Nodes: {}\n",
        tree.host_count(),
        tree.len()
    ));
    report.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n\n");

    if tree.is_empty() {
        report.push_str("  (empty)\n");
        return report;
    }

    for host in tree.structure() {
        if color {
            report.push_str(&format!("{}\n", host.name().bright_blue().bold()));
        } else {
            report.push_str(host.name());
            report.push('\n');
        }
        push_branches(&mut report, host.children(), "");
    }

    report
}

fn push_branches(out: &mut String, nodes: &[Node], indent: &str) {
    for (i, node) in nodes.iter().enumerate() {
        let is_last = i == nodes.len() - 1;
        let (prefix, continuation) = if is_last {
            ("└── ", "    ")
        } else {
            ("├── ", "│   ")
        };

        out.push_str(indent);
        out.push_str(prefix);
        out.push_str(node.name());
        out.push('\n');

        push_branches(out, node.children(), &format!("{}{}", indent, continuation));
    }
}

/// Nested bullet list, two spaces of indent per level.
pub fn render_markdown(nodes: &[Node]) -> String {
    let mut out = String::new();
    push_bullets(&mut out, nodes, 0);
    out
}

fn push_bullets(out: &mut String, nodes: &[Node], level: usize) {
    for node in nodes {
        out.push_str(&"  ".repeat(level));
        out.push_str(&format!("- {}\n", code_span(node.name())));
        push_bullets(out, node.children(), level + 1);
    }
}

// A fence longer than any backtick run inside the name keeps the span
// intact; names touching a backtick get padded with spaces.
fn code_span(name: &str) -> String {
    let longest_run = name
        .split(|c| c != '`')
        .map(str::len)
        .max()
        .unwrap_or(0);
    let fence = "`".repeat(longest_run + 1);

    if name.starts_with('`') || name.ends_with('`') {
        format!("{fence} {name} {fence}")
    } else {
        format!("{fence}{name}{fence}")
    }
}

pub fn save_map(content: &str, path: &Path) -> Result<(), RenderError> {
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}
