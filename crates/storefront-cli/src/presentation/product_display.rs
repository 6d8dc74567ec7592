//! Product listing and detail display for CLI output.

use storefront_admin::{ListView, ProductDetail};
use storefront_core::Product;

use super::tables::{format_optional, format_price, print_separator, truncate_string};

const TABLE_WIDTH: usize = 88;

fn created_date(product: &Product) -> &str {
    product
        .created_at
        .get(..10)
        .unwrap_or(product.created_at.as_str())
}

/// Header, rows and footer of a listing table.
pub fn product_table_lines(view: &ListView) -> Vec<String> {
    let mut lines = vec![format!(
        "{:<6} {:<28} {:>12} {:>7}  {:<10}  Description",
        "ID", "Name", "Price", "Stock", "Created"
    )];

    for product in &view.page.content {
        lines.push(format!(
            "{:<6} {:<28} {:>12} {:>7}  {:<10}  {}",
            product.id,
            truncate_string(&product.name, 27),
            format_price(product.price),
            view.quantity(product.id),
            created_date(product),
            truncate_string(product.description.as_deref().unwrap_or(""), 20),
        ));
    }

    lines
}

/// Print the current page as a table followed by the paging summary.
pub fn print_product_table(view: &ListView) {
    println!();
    if view.page.is_empty() {
        println!("No products found.");
    } else {
        let lines = product_table_lines(view);
        if let Some((header, rows)) = lines.split_first() {
            println!("{header}");
            print_separator(TABLE_WIDTH);
            for row in rows {
                println!("{row}");
            }
            print_separator(TABLE_WIDTH);
        }
    }
    println!(
        "{}  (sort: {}, size: {})",
        view.summary(),
        view.paging.sort,
        view.paging.size
    );
}

/// Field lines of a product detail view.
pub fn detail_lines(detail: &ProductDetail) -> Vec<String> {
    let product = &detail.product;
    vec![
        format!("  ID:          {}", product.id),
        format!("  Name:        {}", product.name),
        format!("  Price:       {}", format_price(product.price)),
        format!(
            "  Description: {}",
            format_optional(product.description.as_ref(), "--")
        ),
        format!("  Created:     {}", product.created_at),
        format!(
            "  Stock:       {}",
            format_optional(detail.stock.as_ref().map(|s| s.quantity).as_ref(), "no stock record")
        ),
    ]
}

/// Display a product with its stock to stdout.
pub fn display_product_detail(detail: &ProductDetail) {
    println!("Product #{}:", detail.product.id);
    for line in detail_lines(detail) {
        println!("{line}");
    }
}
