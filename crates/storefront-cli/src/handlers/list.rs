//! List command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;

/// Execute the list command.
///
/// The page, size and sort were applied at bootstrap; the presenter prints
/// the table once the page arrives.
pub async fn execute(ctx: &CliContext) -> Result<()> {
    ctx.controller().refresh().await?;
    Ok(())
}
