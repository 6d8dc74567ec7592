//! Terminal implementation of the controller's output side.

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use storefront_admin::{ListView, Notice, NoticeLevel, Presenter};

use super::product_display::print_product_table;

/// Prints listings and notices, and shows a spinner while requests are in flight.
pub struct TerminalPresenter {
    spinner: Mutex<Option<ProgressBar>>,
    show_listing: bool,
}

impl TerminalPresenter {
    /// Presenter that prints every rendered listing.
    pub const fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
            show_listing: true,
        }
    }

    /// Presenter for one-shot commands: notices only, no listing after mutations.
    pub const fn quiet() -> Self {
        Self {
            spinner: Mutex::new(None),
            show_listing: false,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.spinner().is_some()
    }

    fn spinner(&self) -> MutexGuard<'_, Option<ProgressBar>> {
        self.spinner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn create_spinner() -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message("Loading...");
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }

    /// Run `f` with the spinner hidden so output does not interleave with it.
    fn suspended(&self, f: impl FnOnce()) {
        let spinner = self.spinner();
        match spinner.as_ref() {
            Some(pb) => pb.suspend(f),
            None => f(),
        }
    }
}

impl Default for TerminalPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Presenter for TerminalPresenter {
    fn render(&self, view: &ListView) {
        if self.show_listing {
            self.suspended(|| print_product_table(view));
        }
    }

    fn notify(&self, notice: &Notice) {
        self.suspended(|| match notice.level {
            NoticeLevel::Info => println!("{}", notice.message),
            NoticeLevel::Success => println!("✅ {}", notice.message),
            NoticeLevel::Error => eprintln!("❌ {}", notice.message),
        });
    }

    fn set_loading(&self, loading: bool) {
        let mut spinner = self.spinner();
        if loading {
            if spinner.is_none() {
                *spinner = Some(Self::create_spinner());
            }
        } else if let Some(pb) = spinner.take() {
            pb.finish_and_clear();
        }
    }
}
