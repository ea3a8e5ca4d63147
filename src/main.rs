use clap::Parser;
use govuk_form_builder::cli::commands::{cmd_ids, cmd_render};
use govuk_form_builder::cli::config::{Cli, Commands, load_config};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(cli.config.as_deref());

    match cli.command {
        Commands::Render { form, output } => {
            cmd_render(&form, output.as_deref(), &config)?;
        }
        Commands::Ids {
            object,
            attribute,
            value,
        } => {
            cmd_ids(&object, &attribute, value.as_deref())?;
        }
    }

    Ok(())
}

/// RUST_LOG wins; otherwise -v/-vv/-vvv raise the level from warn.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
