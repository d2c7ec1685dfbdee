//! Terminal implementations of the render and toast surfaces.

use std::collections::HashMap;

use colored::Colorize;

use fest_views::{Node, NoticeKind, Notifier, RegionId, RenderSurface};

/// Buffers the latest committed tree per region and prints everything once
/// at the end of the command, so intermediate renders (filter passes) never
/// clutter the output.
#[derive(Debug, Default)]
pub struct TerminalSurface {
    names: HashMap<RegionId, String>,
    committed: Vec<(RegionId, Vec<Node>)>,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Labels a region for the flushed output.
    pub fn label(&mut self, region: RegionId, name: impl Into<String>) {
        self.names.insert(region, name.into());
    }

    /// Prints the latest tree of every committed region, in commit order.
    pub fn flush(&mut self) {
        let regions: Vec<RegionId> = {
            let mut seen = Vec::new();
            for (region, _) in &self.committed {
                if !seen.contains(region) {
                    seen.push(*region);
                }
            }
            seen
        };
        for region in regions {
            if let Some((_, nodes)) = self.committed.iter().rev().find(|(r, _)| *r == region) {
                if let Some(name) = self.names.get(&region) {
                    println!("{}", name.bold().underline());
                }
                for node in nodes {
                    print_node(node, 1);
                }
                println!();
            }
        }
        self.committed.clear();
    }
}

impl RenderSurface for TerminalSurface {
    fn commit(&mut self, region: RegionId, nodes: Vec<Node>) {
        self.committed.push((region, nodes));
    }
}

fn print_node(node: &Node, depth: usize) {
    let indent = "  ".repeat(depth);
    if let Some(text) = &node.text {
        let line = match node.class {
            "error-message" => text.red().to_string(),
            "retry-action" => format!("({text})").dimmed().to_string(),
            "empty-state" => text.dimmed().to_string(),
            class if class.ends_with("-name") || class.ends_with("-title") => {
                text.bold().to_string()
            }
            _ => text.clone(),
        };
        println!("{indent}{line}");
    }
    for child in &node.children {
        print_node(child, depth + 1);
    }
}

/// Toasts go to stderr with a colored severity tag.
#[derive(Debug, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, message: &str, kind: NoticeKind) {
        let tag = match kind {
            NoticeKind::Success => "OK".green(),
            NoticeKind::Error => "FEHLER".red(),
            NoticeKind::Warning => "WARNUNG".yellow(),
            NoticeKind::Info => "INFO".blue(),
        };
        eprintln!("[{tag}] {message}");
    }
}
