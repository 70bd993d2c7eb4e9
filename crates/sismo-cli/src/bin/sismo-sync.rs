use std::path::PathBuf;
use std::process;

use clap::Parser;
use sismo::{S3Settings, S3Store, read_snapshot, synchronize};
use sismo_cli::{LogLevel, init_logging, render_updated};

#[derive(Parser)]
#[command(name = "sismo-sync")]
#[command(
    about = "Check, read and write the latest earthquake snapshot in S3",
    long_about = None
)]
struct Cli {
    #[arg(short = 'b', long = "bucket-name", help = "Name of the S3 bucket")]
    bucket_name: String,

    #[arg(short = 'f', long = "file-key", help = "Key of the snapshot object")]
    file_key: String,

    #[arg(
        short = 'l',
        long = "local-file",
        help = "Snapshot produced earlier in the pipeline by sismo-fetch"
    )]
    local_file: PathBuf,

    #[arg(long, help = "AWS region, overrides the ambient configuration")]
    region: Option<String>,

    #[arg(long, help = "Custom endpoint for S3-compatible services")]
    endpoint_url: Option<String>,

    #[arg(long, help = "Address buckets as path segments instead of subdomains")]
    force_path_style: bool,

    #[arg(
        long = "log-level",
        value_enum,
        default_value = "info",
        help = "Set the logging level"
    )]
    log_level: LogLevel,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_level.clone());

    let local_content = read_snapshot(&cli.local_file).await.unwrap_or_else(|e| {
        log::error!("{}", e);
        process::exit(1);
    });

    let settings = S3Settings {
        region: cli.region,
        endpoint_url: cli.endpoint_url,
        force_path_style: cli.force_path_style,
    };
    let store = S3Store::connect(cli.bucket_name, &settings).await;

    log::info!(
        "Synchronizing {} with s3://{}/{}",
        cli.local_file.display(),
        store.bucket(),
        cli.file_key
    );

    let outcome = synchronize(&store, &cli.file_key, &local_content)
        .await
        .unwrap_or_else(|e| {
            log::error!("Error synchronizing snapshot: {}", e);
            process::exit(1);
        });

    log::info!("Snapshot {}", outcome);
    println!("{}", render_updated(outcome.updated()));
}
