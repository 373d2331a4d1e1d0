//! `scrub storage` - clear the areas of a storage snapshot file.

use scrub_adapters::StorageSnapshot;
use serde_json::json;
use tracing::instrument;

use crate::{
    cli::{OutputFormat, StorageArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all, fields(snapshot = %args.snapshot.display(), mode = ?args.mode))]
pub fn execute(args: StorageArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    if !args.snapshot.exists() {
        return Err(CliError::PathNotFound {
            path: args.snapshot,
        });
    }

    let options = args
        .mode
        .options(&config.storage.preserve_keys)
        .exclude(args.exclude.iter().cloned());

    let before = StorageSnapshot::load(&args.snapshot)?;
    let areas = before.areas();
    let cleaner = areas.cleaner();
    let plan = cleaner.plan(&options)?;

    if args.dry_run {
        if output.format() == OutputFormat::Json {
            let rows: Vec<_> = plan
                .iter()
                .map(|p| json!({ "area": p.area.as_str(), "key": p.key }))
                .collect();
            return output.json(&rows);
        }
        output.header("Would remove:")?;
        for removal in &plan {
            output.print(&format!("  {}: {}", removal.area, removal.key))?;
        }
        output.info(&format!("Dry run: {} key(s) would be removed", plan.len()))?;
        return Ok(());
    }

    cleaner.clear(&options);
    let removed = areas.removed(&plan)?;
    let after = areas.snapshot()?;
    after.save(&args.snapshot)?;

    for header in after.expired_cookies.iter().skip(before.expired_cookies.len()) {
        output.info(&format!("Set-Cookie: {header}"))?;
    }
    if removed < plan.len() {
        output.warning(&format!(
            "{} key(s) could not be removed",
            plan.len() - removed
        ))?;
    }
    output.success(&format!(
        "Cleared {removed} key(s) from {}",
        args.snapshot.display()
    ))?;
    Ok(())
}
