//! Browse command handler: an interactive session over the listing.
//!
//! Each line read from stdin is one command. Failed operations have already
//! been reported by the presenter, so the session simply continues.

use anyhow::Result;
use storefront_admin::{AdminError, RefreshOutcome};
use storefront_core::{ProductForm, ProductId, SortSpec};
use tokio::task;
use tracing::debug;

use crate::bootstrap::CliContext;
use crate::presentation::display_product_detail;
use crate::utils::input;

const HELP: &str = "\
Commands:
  n, next              next page (also Enter)
  p, prev              previous page
  g, page <n>          go to page n (1-based)
  size <n>             change page size
  sort <field,dir>     sort by id, name, price, description or createdAt
  r, refresh           reload the current page
  show <id>            product details with stock
  new                  create a product
  edit <id>            edit a product
  del <id>             delete a product
  stock <id> <n>       set stock to n
  adjust <id> <+/-n>   change stock by n
  h, help              this help
  q, quit              leave";

/// A parsed session command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseCommand {
    Next,
    Previous,
    /// Zero-based page index.
    GoTo(u32),
    Size(u32),
    Sort(SortSpec),
    Refresh,
    Show(ProductId),
    New,
    Edit(ProductId),
    Delete(ProductId),
    SetStock(ProductId, u64),
    AdjustStock(ProductId, i64),
    Help,
    Quit,
}

fn arg<T: std::str::FromStr>(value: Option<&str>, what: &str) -> Result<T, String> {
    let value = value.ok_or_else(|| format!("Missing {what}"))?;
    value
        .parse()
        .map_err(|_| format!("Invalid {what}: '{value}'"))
}

/// Parse one input line.
pub fn parse_command(line: &str) -> Result<BrowseCommand, String> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(BrowseCommand::Next);
    };
    let first = words.next();
    let second = words.next();

    let command = match verb.to_lowercase().as_str() {
        "n" | "next" => BrowseCommand::Next,
        "p" | "prev" | "previous" => BrowseCommand::Previous,
        "g" | "page" => {
            let page: u32 = arg(first, "page number")?;
            if page == 0 {
                return Err("Pages start at 1".to_string());
            }
            BrowseCommand::GoTo(page - 1)
        }
        "size" => BrowseCommand::Size(arg(first, "page size")?),
        "sort" => {
            let spec = first.ok_or("Missing sort order")?;
            BrowseCommand::Sort(spec.parse::<SortSpec>().map_err(|e| e.to_string())?)
        }
        "r" | "refresh" => BrowseCommand::Refresh,
        "show" => BrowseCommand::Show(arg(first, "product ID")?),
        "new" | "create" => BrowseCommand::New,
        "edit" => BrowseCommand::Edit(arg(first, "product ID")?),
        "del" | "delete" => BrowseCommand::Delete(arg(first, "product ID")?),
        "stock" => BrowseCommand::SetStock(arg(first, "product ID")?, arg(second, "quantity")?),
        "adjust" => BrowseCommand::AdjustStock(
            arg(first, "product ID")?,
            arg(second.map(|d| d.trim_start_matches('+')), "amount")?,
        ),
        "h" | "help" | "?" => BrowseCommand::Help,
        "q" | "quit" | "exit" => BrowseCommand::Quit,
        other => return Err(format!("Unknown command '{other}' (type 'help')")),
    };
    Ok(command)
}

fn prompt_form() -> Result<ProductForm> {
    let name = input::prompt_string("Name")?;
    let price = input::prompt_integer_with_default("Price", 0)?;
    let description = input::prompt_optional_with_default("Description", None)?;
    let initial_stock = input::prompt_integer_with_default("Initial stock", 0)?;

    Ok(ProductForm {
        name,
        price,
        description,
        initial_stock: Some(initial_stock),
    })
}

async fn read_line() -> Result<String> {
    task::spawn_blocking(|| input::prompt_string("browse")).await?
}

fn report_skipped(
    outcome: Result<RefreshOutcome, AdminError>,
    message: &str,
) -> Result<(), AdminError> {
    if outcome? == RefreshOutcome::Skipped {
        println!("{message}");
    }
    Ok(())
}

/// Run one command. Returns `false` when the session should end.
async fn dispatch(ctx: &CliContext, command: BrowseCommand) -> Result<bool> {
    let controller = ctx.controller();
    let result: Result<(), AdminError> = match command {
        BrowseCommand::Next => {
            report_skipped(controller.next_page().await, "Already on the last page.")
        }
        BrowseCommand::Previous => {
            report_skipped(controller.previous_page().await, "Already on the first page.")
        }
        BrowseCommand::GoTo(page) => controller.go_to_page(page).await.map(drop),
        BrowseCommand::Size(size) => controller.set_page_size(size).await.map(drop),
        BrowseCommand::Sort(sort) => controller.set_sort(sort).await.map(drop),
        BrowseCommand::Refresh => controller.refresh().await.map(drop),
        BrowseCommand::Show(id) => controller
            .detail(id)
            .await
            .map(|detail| display_product_detail(&detail)),
        BrowseCommand::New => match task::spawn_blocking(prompt_form).await? {
            Ok(form) => controller.create(&form).await.map(drop),
            Err(e) => {
                debug!(error = %e, "Create prompt failed");
                println!("Create cancelled.");
                Ok(())
            }
        },
        BrowseCommand::Edit(id) => controller.edit(id).await.map(drop),
        BrowseCommand::Delete(id) => controller.delete(id).await.map(drop),
        BrowseCommand::SetStock(id, quantity) => {
            controller.set_stock(id, quantity).await.map(drop)
        }
        BrowseCommand::AdjustStock(id, delta) => {
            controller.adjust_stock(id, delta).await.map(drop)
        }
        BrowseCommand::Help => {
            println!("{HELP}");
            Ok(())
        }
        BrowseCommand::Quit => return Ok(false),
    };

    if let Err(e) = result {
        debug!(?command, error = %e, "Browse command failed");
    }
    Ok(true)
}

/// Execute the browse command.
///
/// Ends on `quit` or when stdin is closed.
pub async fn execute(ctx: &CliContext) -> Result<()> {
    println!("Type 'help' for commands.");
    if let Err(e) = ctx.controller().refresh().await {
        debug!(error = %e, "Initial load failed");
    }

    loop {
        let line = match read_line().await {
            Ok(line) => line,
            Err(e) => {
                debug!(error = %e, "Input ended");
                break;
            }
        };

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(message) => {
                eprintln!("{message}");
                continue;
            }
        };

        if !dispatch(ctx, command).await? {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_commands() {
        assert_eq!(parse_command(""), Ok(BrowseCommand::Next));
        assert_eq!(parse_command("n"), Ok(BrowseCommand::Next));
        assert_eq!(parse_command("PREV"), Ok(BrowseCommand::Previous));
        assert_eq!(parse_command("g 3"), Ok(BrowseCommand::GoTo(2)));
        assert_eq!(parse_command("size 50"), Ok(BrowseCommand::Size(50)));
        assert_eq!(parse_command("q"), Ok(BrowseCommand::Quit));
    }

    #[test]
    fn test_page_numbers_are_one_based() {
        assert!(parse_command("page 0").is_err());
    }

    #[test]
    fn test_sort_command() {
        let Ok(BrowseCommand::Sort(spec)) = parse_command("sort name,desc") else {
            panic!("expected sort command");
        };
        assert_eq!(spec.to_string(), "name,desc");
        assert!(parse_command("sort weight,asc").is_err());
    }

    #[test]
    fn test_product_commands() {
        assert_eq!(parse_command("show 4"), Ok(BrowseCommand::Show(4)));
        assert_eq!(parse_command("edit 4"), Ok(BrowseCommand::Edit(4)));
        assert_eq!(parse_command("del 4"), Ok(BrowseCommand::Delete(4)));
        assert_eq!(parse_command("new"), Ok(BrowseCommand::New));
    }

    #[test]
    fn test_stock_commands() {
        assert_eq!(
            parse_command("stock 2 10"),
            Ok(BrowseCommand::SetStock(2, 10))
        );
        assert_eq!(
            parse_command("adjust 2 +5"),
            Ok(BrowseCommand::AdjustStock(2, 5))
        );
        assert_eq!(
            parse_command("adjust 2 -5"),
            Ok(BrowseCommand::AdjustStock(2, -5))
        );
    }

    #[test]
    fn test_missing_or_bad_arguments() {
        assert_eq!(
            parse_command("show"),
            Err("Missing product ID".to_string())
        );
        assert_eq!(
            parse_command("stock 2 -1"),
            Err("Invalid quantity: '-1'".to_string())
        );
        assert!(parse_command("dance").is_err());
    }
}
