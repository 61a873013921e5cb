use anyhow::Result;
use clap::Parser;

use chat_timeline::{app, cli};

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    app::run(cli)
}
