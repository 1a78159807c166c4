use clap::Parser;

use shortener::cli::{Cli, Commands};
use shortener::config::init_config;
use shortener::runtime::{run_cli, run_server};
use shortener::system::init_logging;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = init_config(cli.config.as_deref());

    match cli.command {
        None | Some(Commands::Serve) => {
            let _guard = init_logging(&config.logging)?;
            run_server(&config).await
        }
        Some(Commands::Cli(command)) => {
            if let Err(e) = run_cli(command, &config).await {
                eprintln!("{}", e.format_colored());
                std::process::exit(1);
            }
            Ok(())
        }
    }
}
