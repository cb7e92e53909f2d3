//! Migrate command implementation

use anyhow::Result;

use crate::cli::GlobalArgs;
use crate::commands::default_runner;
use crate::context::RuntimeContext;

/// Execute the migrate command
pub fn execute(global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global)?;
    ctx.verbose(&format!(
        "running migrations for '{}' against {}",
        ctx.config.name,
        ctx.db.dialect()
    ));

    let report = default_runner().run_pending(ctx.db.as_ref())?;

    if report.applied.is_empty() {
        println!(
            "Schema up to date ({} unit(s) already applied)",
            report.skipped.len()
        );
    } else {
        for name in &report.applied {
            println!("  Applied: {name}");
        }
        println!("Applied {} migration unit(s)", report.applied.len());
    }
    Ok(())
}
