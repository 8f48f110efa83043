use anyhow::Result;
use clap::Parser;
use log::info;

use parkplan::app::Application;
use parkplan::cli::Cli;
use parkplan::commands::{self, Session};

#[tokio::main]
async fn main() -> Result<()> {
    parkplan::init_logger();
    let cli = Cli::parse();

    let mut session = Session::open(cli.park.as_deref())?;
    match cli.command {
        Some(command) => commands::execute(&mut session, command).await,
        None => {
            info!("No subcommand given, entering interactive mode");
            Application::new(session).run().await
        }
    }
}
