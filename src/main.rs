use crate::engine::workflow::launch;
use anyhow::Result;
use clap::Parser;

mod cli;
mod config;
mod engine;
mod llm;
mod utils;

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Args::parse();
    let config = args.into_config();

    launch(&config).await
}
