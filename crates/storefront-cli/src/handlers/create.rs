//! Create command handler.

use anyhow::Result;
use storefront_core::ProductForm;

use crate::bootstrap::CliContext;

/// Execute the create command.
///
/// Input is validated before anything is sent; a stock record is created
/// only for an initial quantity above zero.
pub async fn execute(ctx: &CliContext, form: &ProductForm) -> Result<()> {
    let product = ctx.controller().create(form).await?;
    println!("  Name:  {}", product.name);
    println!("  Price: {}", product.price);
    Ok(())
}
