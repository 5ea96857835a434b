pub mod intersection;
pub mod mesh;
pub mod plan;
pub mod proximity;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use pubmed_pairwise::{GeneratedQuery, LinkRenderer, LinkStyle};

/// Link output style
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkArg {
    /// Do not print a link
    None,
    /// Bare URL
    Plain,
    /// HTML anchor
    Html,
    /// Markdown link
    Markdown,
}

impl LinkArg {
    fn style(self) -> Option<LinkStyle> {
        match self {
            LinkArg::None => None,
            LinkArg::Plain => Some(LinkStyle::Plain),
            LinkArg::Html => Some(LinkStyle::Html),
            LinkArg::Markdown => Some(LinkStyle::Markdown),
        }
    }
}

/// Options shared by every command
#[derive(Debug, Clone)]
pub struct OutputOptions {
    pub link: LinkArg,
    pub output: Option<PathBuf>,
    pub json: bool,
    pub spreadsheet: bool,
}

/// Render results as plain text
///
/// A heading line per result is only added when there is more than one.
pub fn render_text(results: &[GeneratedQuery], options: &OutputOptions) -> String {
    let mut blocks = Vec::with_capacity(results.len());

    for result in results {
        let mut lines = Vec::new();
        if results.len() > 1 {
            lines.push(format!("# {} ({} pairs)", result.name, result.pair_count));
        }

        let search = match (&result.spreadsheet, options.spreadsheet) {
            (Some(spreadsheet), true) => spreadsheet,
            _ => &result.query,
        };
        lines.push(search.clone());

        if let Some(style) = options.link.style() {
            lines.push(style.render(&result.url, &result.name));
        }
        blocks.push(lines.join("\n"));
    }

    blocks.join("\n\n")
}

/// Format results and print them or save them to `options.output`
pub fn write_results(results: &[GeneratedQuery], options: &OutputOptions) -> Result<()> {
    let content = if options.json {
        match results {
            [single] => serde_json::to_string_pretty(single)?,
            _ => serde_json::to_string_pretty(results)?,
        }
    } else {
        render_text(results, options)
    };

    match &options.output {
        Some(path) => {
            fs::write(path, format!("{content}\n"))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "Results saved to file");
        }
        None => {
            println!("{content}");
        }
    }
    Ok(())
}
