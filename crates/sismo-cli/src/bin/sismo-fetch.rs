use std::process;

use clap::Parser;
use sismo::{SeismicScraper, TableLayout};
use sismo_cli::{LogLevel, OutputFormat, init_logging, render_records};

#[derive(Parser)]
#[command(name = "sismo-fetch")]
#[command(
    about = "Get data from the last earthquakes felt in Costa Rica",
    long_about = None
)]
struct Cli {
    #[arg(
        short = 'u',
        long = "ovsicori-url",
        help = "URL of the 'Sismos Sentidos' table on the OVSICORI website"
    )]
    ovsicori_url: String,

    #[arg(
        short = 'n',
        long,
        default_value_t = 1,
        value_parser = clap::value_parser!(u16).range(1..),
        help = "Number of rows to read after the header row"
    )]
    rows: u16,

    #[arg(long, default_value = "tr", help = "Tag of the table rows")]
    header_tag: String,

    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value = "json",
        help = "Output format"
    )]
    format: OutputFormat,

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

    let scraper = SeismicScraper::new().unwrap_or_else(|e| {
        log::error!("Error creating scraper: {}", e);
        process::exit(1);
    });

    let layout = TableLayout::new(cli.header_tag, usize::from(cli.rows));

    let records = match scraper.fetch_latest(&cli.ovsicori_url, &layout).await {
        Ok(records) => records,
        Err(e) if e.is_fetch_failure() => {
            log::error!("Error fetching seismic data: {}", e);
            log::warn!(
                "Emitting an empty snapshot; syncing it will overwrite the cached record"
            );
            Vec::new()
        }
        Err(e) => {
            log::error!("Seismic table no longer matches the expected layout: {}", e);
            process::exit(1);
        }
    };

    log::info!("Fetched {} seismic record(s)", records.len());
    match render_records(&records, &cli.format) {
        Ok(output) if output.is_empty() => {}
        Ok(output) => println!("{}", output),
        Err(e) => {
            log::error!("Error serializing to JSON: {}", e);
            process::exit(1);
        }
    }
}
