//! Edit command handler.

use anyhow::Result;
use storefront_admin::EditOutcome;
use storefront_core::ProductId;

use crate::bootstrap::CliContext;

/// Execute the edit command.
///
/// Prompts for each field with the current value as default and sends
/// only the fields that changed.
pub async fn execute(ctx: &CliContext, id: ProductId) -> Result<()> {
    match ctx.controller().edit(id).await? {
        EditOutcome::Updated(product) => {
            println!("  Name:  {}", product.name);
            println!("  Price: {}", product.price);
        }
        EditOutcome::Unchanged => {}
        EditOutcome::Cancelled => println!("Edit cancelled."),
    }
    Ok(())
}
