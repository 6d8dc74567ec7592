//! Delete command handler.

use anyhow::Result;
use storefront_admin::DeleteOutcome;
use storefront_core::ProductId;

use crate::bootstrap::CliContext;

/// Execute the delete command.
///
/// Confirmation is asked by the interaction, which answers yes on its own
/// when `--yes` was given.
pub async fn execute(ctx: &CliContext, id: ProductId) -> Result<()> {
    if ctx.controller().delete(id).await? == DeleteOutcome::Cancelled {
        println!("Delete cancelled.");
    }
    Ok(())
}
