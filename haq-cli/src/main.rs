//! HAQ CLI - inspect the dashboard's dataset and boundary files.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "haq-cli",
    version,
    about = "HAQ Index dashboard data toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: haq_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    haq_cmd::run(cli.command).await
}
