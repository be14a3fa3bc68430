use std::{process::ExitCode, sync::Arc};

use clap::Parser;
use labelscan_core::{application::create_client, domain::common::LabelScanConfig};

use crate::{
    application::{commands, logging::init_tracing},
    args::{Args, Command},
};

mod application;
mod args;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode, anyhow::Error> {
    dotenv::dotenv().ok();

    let args = Args::parse();
    init_tracing(&args.log)?;

    let config = LabelScanConfig::from(args.clone());
    let client = Arc::new(create_client(&config)?);

    match &args.command {
        Command::Analyze(analyze_args) => {
            commands::analyze::execute(client, analyze_args, args.format).await
        }
        Command::Health => Ok(commands::health::execute(client.as_ref()).await),
    }
}
