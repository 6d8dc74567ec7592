//! Show command handler.

use anyhow::Result;
use storefront_core::ProductId;

use crate::bootstrap::CliContext;
use crate::presentation::display_product_detail;

/// Execute the show command: product fields plus stock on hand.
pub async fn execute(ctx: &CliContext, id: ProductId) -> Result<()> {
    let detail = ctx.controller().detail(id).await?;
    display_product_detail(&detail);
    Ok(())
}
