//! Stdin implementation of the controller's input side.

use anyhow::Result;
use async_trait::async_trait;
use storefront_admin::Interaction;
use storefront_core::{Product, ProductEdit};
use tokio::task;
use tracing::warn;

use crate::utils::input;

/// Answers confirmations and edit prompts from stdin.
///
/// Prompts block, so they run on the blocking thread pool. A read failure
/// (including closed stdin) counts as cancelling.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinInteraction {
    assume_yes: bool,
}

impl StdinInteraction {
    pub const fn new() -> Self {
        Self { assume_yes: false }
    }

    /// Answer every confirmation with yes without prompting.
    pub const fn assume_yes() -> Self {
        Self { assume_yes: true }
    }
}

fn prompt_edit(current: &Product) -> Result<ProductEdit> {
    println!("Editing product #{} (Enter keeps the current value)", current.id);
    let name = input::prompt_string_with_default("Name", Some(&current.name))?;
    let price = input::prompt_integer_with_default("Price", current.price)?;
    let description =
        input::prompt_optional_with_default("Description", current.description.as_deref())?;

    Ok(ProductEdit {
        name,
        price,
        description,
    })
}

#[async_trait]
impl Interaction for StdinInteraction {
    async fn confirm(&self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }

        let prompt = prompt.to_string();
        match task::spawn_blocking(move || input::prompt_confirmation(&prompt)).await {
            Ok(Ok(answer)) => answer,
            Ok(Err(e)) => {
                warn!(error = %e, "Confirmation prompt failed");
                false
            }
            Err(e) => {
                warn!(error = %e, "Confirmation prompt task failed");
                false
            }
        }
    }

    async fn edit_product(&self, current: &Product) -> Option<ProductEdit> {
        let current = current.clone();
        match task::spawn_blocking(move || prompt_edit(&current)).await {
            Ok(Ok(edit)) => Some(edit),
            Ok(Err(e)) => {
                warn!(error = %e, "Edit prompt failed");
                None
            }
            Err(e) => {
                warn!(error = %e, "Edit prompt task failed");
                None
            }
        }
    }
}
