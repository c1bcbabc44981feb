// src/main.rs

use fswatch::errors::ConfigError;
use fswatch::{cli, logging, run};

#[tokio::main]
async fn main() {
    if let Err(err) = run_main().await {
        if err.downcast_ref::<ConfigError>().is_some() {
            eprintln!("{}", cli::USAGE);
        } else {
            eprintln!("fswatch error: {err:?}");
        }
        std::process::exit(1);
    }
}

async fn run_main() -> anyhow::Result<()> {
    let args = cli::parse();
    logging::init_logging()?;
    run(args).await
}
