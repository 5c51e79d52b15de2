//! csvmeta: run the CSV metadata pipeline from the command line.
//!
//! Configuration comes from the environment (LOCALSTACK_ENDPOINT, S3_BUCKET,
//! DYNAMO_TABLE, SNS_TOPIC_ARN, AWS_REGION, STORAGE_BACKEND, LOCAL_STORAGE_PATH).

use anyhow::Context;
use clap::{Parser, Subcommand};
use csvmeta_cli::{build_handler, inspect_file, parse_delimiter};
use csvmeta_core::{Config, S3Event};
use csvmeta_processing::{CsvScanner, HandlerResponse};
use std::io::Read;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "csvmeta", about = "Extract, store and announce CSV metadata")]
struct Cli {
    /// Field delimiter (use "\t" for tabs)
    #[arg(long, global = true, default_value = ",", value_parser = parse_delimiter)]
    delimiter: u8,

    /// Keep metadata in memory and log notifications instead of publishing
    #[arg(long, global = true)]
    dry_run: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a storage event document through the pipeline
    Handle {
        /// Path to the event JSON (reads stdin when omitted)
        #[arg(long)]
        event: Option<std::path::PathBuf>,
    },
    /// Process one object, building the event from bucket and key
    Process {
        /// Object key
        key: String,
        /// Bucket name (defaults to S3_BUCKET)
        #[arg(long)]
        bucket: Option<String>,
    },
    /// Print metadata for a local CSV file without storing it
    Inspect {
        /// Path to the CSV file
        file: std::path::PathBuf,
    },
}

fn read_event(path: Option<&std::path::Path>) -> anyhow::Result<serde_json::Value> {
    let raw = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read event file {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read event from stdin")?;
            buf
        }
    };
    serde_json::from_str(&raw).context("Event is not valid JSON")
}

fn print_response(response: &HandlerResponse) -> anyhow::Result<ExitCode> {
    let out = serde_json::to_string_pretty(response).context("Serialize response")?;
    println!("{}", out);
    Ok(if response.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    if let Err(e) = csvmeta_infra::init_tracing() {
        eprintln!("Failed to initialize tracing: {}", e);
    }

    let cli = Cli::parse();
    let scanner = CsvScanner::new().with_delimiter(cli.delimiter);

    match cli.command {
        Commands::Inspect { file } => {
            let metadata = inspect_file(&file, scanner).await?;
            println!("{}", metadata.to_pretty_json()?);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Handle { event } => {
            let config = load_config()?;
            let event = read_event(event.as_deref())?;
            let handler = build_handler(&config, scanner, cli.dry_run).await?;
            print_response(&handler.handle(&event).await)
        }
        Commands::Process { key, bucket } => {
            let config = load_config()?;
            let bucket = bucket.unwrap_or_else(|| config.s3_bucket.clone());
            let event = serde_json::to_value(S3Event::for_object(bucket, key))?;
            let handler = build_handler(&config, scanner, cli.dry_run).await?;
            print_response(&handler.handle(&event).await)
        }
    }
}

fn load_config() -> anyhow::Result<Config> {
    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;
    Ok(config)
}
