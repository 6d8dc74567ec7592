//! Main commands enum and stock subcommands.

use clap::Subcommand;
use storefront_core::{ProductId, SortSpec};

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// List products one page at a time
    List {
        /// Zero-based page number
        #[arg(long, default_value_t = 0)]
        page: u32,
        /// Products per page (overrides --page-size)
        #[arg(long)]
        size: Option<u32>,
        /// Sort order as `field,direction`, e.g. `price,asc`
        #[arg(long)]
        sort: Option<SortSpec>,
    },

    /// Show a product with its stock
    Show {
        /// Product ID
        id: ProductId,
    },

    /// Create a product
    Create {
        /// Display name
        #[arg(long)]
        name: String,
        /// Price in the smallest currency unit
        #[arg(long, allow_negative_numbers = true)]
        price: i64,
        /// Optional description
        #[arg(long)]
        description: Option<String>,
        /// Initial stock quantity; no stock record is created when omitted or zero
        #[arg(long, allow_negative_numbers = true)]
        stock: Option<i64>,
    },

    /// Edit a product interactively
    Edit {
        /// Product ID
        id: ProductId,
    },

    /// Delete a product
    Delete {
        /// Product ID
        id: ProductId,
        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Manage the stock of a product
    Stock {
        #[command(subcommand)]
        command: StockCommand,
    },

    /// Browse the catalog interactively
    Browse,
}

/// Stock subcommands.
#[derive(Subcommand)]
pub enum StockCommand {
    /// Show the stock of a product
    Get {
        /// Product ID
        id: ProductId,
    },

    /// Create the stock record of a product
    Create {
        /// Product ID
        id: ProductId,
        /// Initial quantity
        quantity: u64,
    },

    /// Set the stock of a product to an absolute quantity
    Set {
        /// Product ID
        id: ProductId,
        /// New quantity
        quantity: u64,
    },

    /// Change the stock of a product by a signed amount
    Adjust {
        /// Product ID
        id: ProductId,
        /// Amount to add (negative to remove)
        #[arg(allow_negative_numbers = true)]
        delta: i64,
    },
}
