//! CLI entry point.
//!
//! Loads `.env`, parses arguments, bootstraps the context and dispatches to
//! the command handlers. All wiring lives in `bootstrap`.

use std::sync::Arc;

use clap::{CommandFactory, Parser};
use storefront_admin::{AdminError, Interaction, Presenter};
use storefront_cli::{
    Cli, CliConfig, CliError, Commands, StdinInteraction, TerminalPresenter, bootstrap, handlers,
};
use storefront_core::ProductForm;
use tracing_subscriber::EnvFilter;

/// `-v` forces debug output; otherwise `RUST_LOG` applies, defaulting to warnings.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Exit code and whether the user has already seen the message.
fn classify(err: &anyhow::Error) -> (i32, bool) {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        return (cli_err.exit_code(), cli_err.is_reported());
    }
    if let Some(admin_err) = err.downcast_ref::<AdminError>() {
        let cli_err = CliError::from(admin_err.clone());
        return (cli_err.exit_code(), cli_err.is_reported());
    }
    (1, false)
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = CliConfig::from_cli(&cli);

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    if let Commands::List { page, size, sort } = &command {
        config = config.with_listing(*page, *size, *sort);
    }

    // Listings are printed only where they are the point of the command.
    let presenter: Arc<dyn Presenter> = match command {
        Commands::List { .. } | Commands::Browse => Arc::new(TerminalPresenter::new()),
        _ => Arc::new(TerminalPresenter::quiet()),
    };
    let interaction: Arc<dyn Interaction> = match command {
        Commands::Delete { yes: true, .. } => Arc::new(StdinInteraction::assume_yes()),
        _ => Arc::new(StdinInteraction::new()),
    };

    let ctx = bootstrap(&config, presenter, interaction).await?;

    match command {
        Commands::List { .. } => handlers::list::execute(&ctx).await?,
        Commands::Show { id } => handlers::show::execute(&ctx, id).await?,
        Commands::Create {
            name,
            price,
            description,
            stock,
        } => {
            let form = ProductForm {
                name,
                price,
                description,
                initial_stock: stock,
            };
            handlers::create::execute(&ctx, &form).await?;
        }
        Commands::Edit { id } => handlers::edit::execute(&ctx, id).await?,
        Commands::Delete { id, .. } => handlers::delete::execute(&ctx, id).await?,
        Commands::Stock { command } => handlers::stock::execute(&ctx, command).await?,
        Commands::Browse => handlers::browse::execute(&ctx).await?,
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before parsing so env-backed flags see it
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli).await {
        let (code, reported) = classify(&err);
        if !reported {
            eprintln!("Error: {err:#}");
        }
        std::process::exit(code);
    }
    Ok(())
}
