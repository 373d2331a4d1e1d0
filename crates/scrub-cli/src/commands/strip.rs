//! `scrub strip` - remove EXAMPLE marker blocks from text files.

use std::path::{Path, PathBuf};

use scrub_core::domain::{has_example_markers, strip_example_content};
use tracing::{debug, instrument, warn};
use walkdir::{DirEntry, WalkDir};

use crate::{
    cli::{OutputFormat, StripArgs},
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

#[instrument(skip_all, fields(path = %args.path.display(), write = args.write))]
pub fn execute(args: StripArgs, output: OutputManager) -> CliResult<()> {
    if !args.path.exists() {
        return Err(CliError::PathNotFound { path: args.path });
    }

    // A single file without --write is a filter: stripped text to stdout.
    if args.path.is_file() && !args.write {
        let text = read_text(&args.path)?;
        output.data(&strip_example_content(&text))?;
        return Ok(());
    }

    let changed = strip_tree(&args.path, args.write)?;

    if output.format() == OutputFormat::Json {
        let paths: Vec<String> = changed.iter().map(|p| p.display().to_string()).collect();
        return output.json(&paths);
    }

    for path in &changed {
        output.print(&path.display().to_string())?;
    }
    match (changed.len(), args.write) {
        (0, _) => output.info("No example markers found")?,
        (n, true) => output.success(&format!("Stripped example content from {n} file(s)"))?,
        (n, false) => output.info(&format!(
            "{n} file(s) contain example markers; rerun with --write to strip them"
        ))?,
    }
    Ok(())
}

fn read_text(path: &Path) -> CliResult<String> {
    std::fs::read_to_string(path).with_cli_context(|| format!("Failed to read '{}'", path.display()))
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_str().is_some_and(|name| name.starts_with('.'))
}

/// Every file under `root` whose content carries markers, rewritten when
/// `write` is set. Hidden entries below the root are skipped.
fn strip_tree(root: &Path, write: bool) -> CliResult<Vec<PathBuf>> {
    let mut changed = Vec::new();

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(error = %e, "Skipping unreadable entry");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let Ok(text) = std::fs::read_to_string(entry.path()) else {
            debug!(path = %entry.path().display(), "Skipping non-text file");
            continue;
        };
        if !has_example_markers(&text) {
            continue;
        }

        if write {
            std::fs::write(entry.path(), strip_example_content(&text))
                .with_cli_context(|| format!("Failed to write '{}'", entry.path().display()))?;
        }
        changed.push(entry.into_path());
    }

    Ok(changed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const MARKED: &str = "a\n// EXAMPLE: remove me\nb\n";

    #[test]
    fn reports_without_writing() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("one.ts"), MARKED).unwrap();
        std::fs::write(dir.path().join("two.ts"), "clean\n").unwrap();

        let changed = strip_tree(dir.path(), false).unwrap();
        assert_eq!(changed, vec![dir.path().join("one.ts")]);
        assert_eq!(std::fs::read_to_string(dir.path().join("one.ts")).unwrap(), MARKED);
    }

    #[test]
    fn writes_and_skips_hidden_dirs() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join(".git")).unwrap();
        std::fs::write(dir.path().join(".git/config"), MARKED).unwrap();
        std::fs::write(dir.path().join("page.html"), MARKED).unwrap();

        let changed = strip_tree(dir.path(), true).unwrap();
        assert_eq!(changed, vec![dir.path().join("page.html")]);
        assert_eq!(
            std::fs::read_to_string(dir.path().join("page.html")).unwrap(),
            "a\nb\n"
        );
        assert_eq!(std::fs::read_to_string(dir.path().join(".git/config")).unwrap(), MARKED);
    }
}
