use anyhow::Context;
use blockscout_service_launcher::{launcher::ConfigSettings, tracing};
use clap::Parser;
use hr_schema_cli::{run, Args, Settings};

const SERVICE_NAME: &str = "hr_schema";

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let args = Args::parse();
    let settings = Settings::build().context("failed to read config")?;

    tracing::init_logs(SERVICE_NAME, &settings.tracing, &settings.jaeger)?;

    run(args, settings).await
}
