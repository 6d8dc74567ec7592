//! Shared CLI presentation utilities.
//!
//! Table formatting, product display and the terminal [`Presenter`]
//! implementation used by every command.
//!
//! [`Presenter`]: storefront_admin::Presenter

pub mod product_display;
pub mod tables;
pub mod terminal;

// Re-export commonly used items
pub use product_display::{display_product_detail, print_product_table};
pub use tables::{format_optional, format_price, print_separator, truncate_string};
pub use terminal::TerminalPresenter;
