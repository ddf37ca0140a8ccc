use anyhow::{Context, Result, bail};
use clap::ArgMatches;
use colored::Colorize;
use sitetree_core::render::{render, save_map};
use sitetree_core::{MapFormat, PathTree, parse_target};
use std::fs;
use std::io::{self, BufRead, IsTerminal};
use std::path::{Path, PathBuf};
use tracing::warn;
use url::Url;

// Helper functions for the map handler

/// Gather targets from `--url` values, a hosts file and stdin, in that order.
pub fn collect_targets(
    urls: &[String],
    hosts_file: Option<&Path>,
    read_stdin: bool,
) -> Result<Vec<Url>> {
    if urls.is_empty() && hosts_file.is_none() && !read_stdin {
        bail!("Either --url, --hosts-file or --stdin must be provided");
    }

    let mut targets = Vec::new();
    for url in urls {
        let parsed = parse_target(url).with_context(|| format!("Invalid --url '{}'", url))?;
        targets.push(parsed);
    }

    if let Some(path) = hosts_file {
        targets.extend(load_urls_from_file(path)?);
    }

    if read_stdin {
        targets.extend(load_urls_from_reader(io::stdin().lock())?);
    }

    if targets.is_empty() {
        bail!("No valid URLs provided");
    }

    Ok(targets)
}

/// Load and parse URLs from a newline-delimited file
pub fn load_urls_from_file(path: &Path) -> Result<Vec<Url>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read hosts file {}", path.display()))?;

    let urls = parse_lines(content.lines());
    if urls.is_empty() {
        bail!("No valid URLs found in {}", path.display());
    }

    Ok(urls)
}

/// Load URLs from any line-oriented reader. Blank and invalid lines are skipped.
pub fn load_urls_from_reader<R: BufRead>(reader: R) -> Result<Vec<Url>> {
    let lines = reader
        .lines()
        .collect::<io::Result<Vec<String>>>()
        .context("Failed to read URLs")?;

    Ok(parse_lines(lines.iter().map(String::as_str)))
}

fn parse_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<Url> {
    lines
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| parse_url_line(line.trim()))
        .collect()
}

/// Parse a single line as a URL, trying to add http:// if needed
pub fn parse_url_line(line: &str) -> Option<Url> {
    match parse_target(line) {
        Ok(url) => Some(url),
        Err(e) => {
            warn!("Skipping invalid URL '{}': {}", line, e);
            None
        }
    }
}

/// Record every target, in order, into a fresh tree.
pub fn build_tree(targets: &[Url]) -> PathTree {
    let mut tree = PathTree::new();
    for url in targets {
        tree.record_url(url);
    }
    tree
}

/// Render the map for output, always ending in a newline.
pub fn render_map(tree: &PathTree, format: MapFormat, color: bool) -> Result<String> {
    let mut content = render(tree, format, color)?;
    if !content.ends_with('\n') {
        content.push('\n');
    }
    Ok(content)
}

pub fn handle_map(args: &ArgMatches, quiet: bool) -> Result<()> {
    let urls: Vec<String> = args
        .get_many::<String>("url")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();
    let hosts_file = args
        .get_one::<String>("hosts-file")
        .map(|path| PathBuf::from(shellexpand::tilde(path).as_ref()));
    let read_stdin = args.get_flag("stdin");
    let format_name = args
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("text");
    let format = MapFormat::from_str(format_name)
        .with_context(|| format!("Unknown format '{}'", format_name))?;
    let output = args
        .get_one::<String>("output")
        .map(|path| PathBuf::from(shellexpand::tilde(path).as_ref()));

    let targets = collect_targets(&urls, hosts_file.as_deref(), read_stdin)?;
    let tree = build_tree(&targets);

    match output {
        Some(path) => {
            let content = render_map(&tree, format, false)?;
            save_map(&content, &path)
                .with_context(|| format!("Failed to write map to {}", path.display()))?;
            if !quiet {
                eprintln!(
                    "{} Map saved to {}",
                    "✓".green().bold(),
                    path.display().to_string().bright_white()
                );
            }
        }
        None => {
            let color = format == MapFormat::Text && io::stdout().is_terminal();
            print!("{}", render_map(&tree, format, color)?);
        }
    }

    if !quiet {
        eprintln!(
            "{} {} targets → {} hosts, {} nodes",
            "✓".green().bold(),
            targets.len(),
            tree.host_count(),
            tree.len()
        );
    }

    Ok(())
}
