//! `carpentry`: command-line front end for the job board, customers and inventory.

use carpentry_records::transport::cli::{self, CliResponse, Command};
use carpentry_records::RecordService;
use tracing_subscriber::EnvFilter;

fn usage_and_exit() -> ! {
    eprintln!("{}", cli::USAGE);
    std::process::exit(2);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() || args.iter().any(|a| a == "-h" || a == "--help") {
        usage_and_exit();
    }

    let command = match Command::parse(&args) {
        Ok(command) => command,
        Err(e) => {
            let response = CliResponse::failed(e.to_string());
            println!("{}", serde_json::to_string_pretty(&response)?);
            std::process::exit(2);
        }
    };

    let service = RecordService::new().await?;
    let response = cli::execute(&service, command).await;
    service.close().await;

    let response = response?;
    println!("{}", serde_json::to_string_pretty(&response)?);
    if !response.success {
        std::process::exit(1);
    }
    Ok(())
}
