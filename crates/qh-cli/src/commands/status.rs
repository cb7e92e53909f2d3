//! Status command implementation

use anyhow::Result;

use crate::cli::{GlobalArgs, StatusArgs, StatusOutput};
use crate::commands::default_runner;
use crate::context::RuntimeContext;

/// Execute the status command
pub fn execute(args: &StatusArgs, global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global)?;
    let statuses = default_runner().status(ctx.db.as_ref())?;

    match args.output {
        StatusOutput::Json => {
            let rows: Vec<serde_json::Value> = statuses
                .iter()
                .map(|s| {
                    serde_json::json!({
                        "unit": s.name,
                        "applied": s.applied,
                        "applied_at": s.applied_at,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        StatusOutput::Table => {
            println!("{:<24} {:<8} APPLIED AT", "UNIT", "STATE");
            for s in &statuses {
                let state = if s.applied { "applied" } else { "pending" };
                println!(
                    "{:<24} {:<8} {}",
                    s.name,
                    state,
                    s.applied_at.as_deref().unwrap_or("-")
                );
            }
        }
    }
    Ok(())
}
