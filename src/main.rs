use clap::Parser;
use tracing::error;

use price_list_converter::config::{self, ConverterConfig};
use price_list_converter::converter;
use price_list_converter::logging;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "price_list_converter")]
#[command(about = "Converts the master price list spreadsheet to JSON")]
#[command(version = "0.1.0")]
struct Cli {
    /// Spreadsheet to read
    #[arg(long, default_value = config::DEFAULT_SOURCE_PATH)]
    source: PathBuf,

    /// JSON file to write
    #[arg(long, default_value = config::DEFAULT_OUTPUT_PATH)]
    output: PathBuf,
}

fn main() {
    logging::init_logging();

    let cli = Cli::parse();
    let config = ConverterConfig {
        source_path: cli.source,
        output_path: cli.output,
    };

    match converter::convert(&config) {
        Ok(report) => {
            println!(
                "Converted {} rows to {}",
                report.written_rows,
                config.output_path.display()
            );
        }
        Err(e) => {
            error!("Conversion failed: {}", e);
            eprintln!("❌ Conversion failed: {e}");
            std::process::exit(1);
        }
    }
}
