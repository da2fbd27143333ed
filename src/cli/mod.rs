pub mod commands;
pub mod logging;
pub mod types;

use clap::Parser;
use log::error;
use std::path::PathBuf;

/// Run the command-line interface, returning the process exit code
pub fn run() -> i32 {
    let cli = types::Cli::parse();

    // Initialize logging system
    logging::init_logging(cli.debug);

    // Configure backtrace
    logging::configure_backtrace(cli.trace);

    let source = cli.source.clone().unwrap_or_else(|| PathBuf::from("./"));
    let config_file = cli.config.clone();

    let result = match &cli.command {
        types::Commands::Render {
            input,
            output,
            template,
        } => commands::handle_render_command(
            input,
            output.as_ref(),
            template.as_ref(),
            &source,
            config_file,
        ),
        types::Commands::Toc { input, json } => {
            commands::handle_toc_command(input, *json, &source, config_file)
        }
        types::Commands::Config { page } => {
            commands::handle_config_command(page.as_ref(), &source, config_file)
        }
    };

    match result {
        Ok(()) => 0,
        Err(e) => {
            error!("{}", e);
            1
        }
    }
}
