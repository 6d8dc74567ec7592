//! Stock command handlers.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::commands::StockCommand;

/// Execute a stock subcommand.
pub async fn execute(ctx: &CliContext, command: StockCommand) -> Result<()> {
    let controller = ctx.controller();
    match command {
        StockCommand::Get { id } => {
            let detail = controller.detail(id).await?;
            match detail.stock {
                Some(stock) => println!("Product #{id}: {} in stock", stock.quantity),
                None => println!("Product #{id} has no stock record."),
            }
        }
        StockCommand::Create { id, quantity } => {
            controller.create_stock(id, quantity).await?;
        }
        StockCommand::Set { id, quantity } => {
            controller.set_stock(id, quantity).await?;
        }
        StockCommand::Adjust { id, delta } => {
            controller.adjust_stock(id, delta).await?;
        }
    }
    Ok(())
}
