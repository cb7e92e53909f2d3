//! Rollback command implementation

use anyhow::Result;

use crate::cli::{GlobalArgs, RollbackArgs};
use crate::commands::default_runner;
use crate::context::RuntimeContext;

/// Execute the rollback command.
///
/// Reverses a single named unit; dependents are not cascaded, so the
/// operator must reverse them first.
pub fn execute(args: &RollbackArgs, global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global)?;
    default_runner().rollback(ctx.db.as_ref(), &args.unit)?;
    println!("Reversed migration unit '{}'", args.unit);
    Ok(())
}
