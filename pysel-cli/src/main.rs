//! pysel command-line interface.
//!
//! Queries Python source files with CSS-like selectors: parses the
//! selector once, then parses and matches each file independently. A bad
//! selector is fatal; a file that fails to parse is reported on stderr
//! and skipped.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use owo_colors::OwoColorize;
use walkdir::WalkDir;

use pysel_query::{SelectorList, matches, parse_selector};

/// Query Python source files with CSS-like selectors.
#[derive(Debug, Parser)]
#[command(name = "pysel", version, about)]
struct Cli {
    /// Selector to match, e.g. 'class:extends(#Base) > def'
    selector: String,

    /// Files or directories to search; directories are walked
    /// recursively for *.py files
    #[arg(default_value = ".")]
    paths: Vec<PathBuf>,

    /// Print only the names of files containing matches
    #[arg(short = 'l', long = "files-only")]
    files_only: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let list = parse_selector(&cli.selector)
        .with_context(|| format!("invalid selector '{}'", cli.selector))?;

    for path in collect_files(&cli.paths)? {
        search_file(&list, &path, cli.files_only);
    }

    Ok(())
}

/// Resolve the positional paths into the list of files to search.
///
/// Explicit file paths are taken as-is; directories are walked
/// recursively, in sorted order, collecting files with a `.py`
/// extension. A missing first path is fatal; later missing paths are
/// reported on stderr and skipped.
fn collect_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for (index, path) in paths.iter().enumerate() {
        if path.is_file() {
            files.push(path.clone());
        } else if path.is_dir() {
            for entry in WalkDir::new(path).sort_by_file_name() {
                let entry = entry.with_context(|| format!("failed to walk {}", path.display()))?;
                if entry.file_type().is_file() && is_python_file(entry.path()) {
                    files.push(entry.into_path());
                }
            }
        } else if index == 0 {
            bail!("no such file or directory: {}", path.display());
        } else {
            eprintln!("pysel: no such file or directory: {}", path.display());
        }
    }

    Ok(files)
}

fn is_python_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "py")
}

/// Parse one file and print its matches. Unreadable or unparsable files
/// are reported on stderr and skipped.
fn search_file(list: &SelectorList, path: &Path, files_only: bool) {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("pysel: {}: {e}", path.display());
            return;
        }
    };

    let tree = match pysel_python::parse_module(&source) {
        Ok(tree) => tree,
        Err(e) => {
            eprintln!("pysel: {}: {e}", path.display());
            return;
        }
    };

    let mut found = matches(list, &tree).peekable();

    if files_only {
        if found.peek().is_some() {
            println!("{}", path.display());
        }
        return;
    }

    let lines: Vec<&str> = source.lines().collect();
    for hit in found {
        let text = lines.get(hit.line.saturating_sub(1)).unwrap_or(&"");
        println!(
            "{}:{}  {}",
            path.display().cyan(),
            hit.line,
            text.trim_start().green()
        );
    }
}
