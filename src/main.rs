use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sl20_rs::constants::DEFAULT_TIMESTAMP_FORMAT;
use sl20_rs::{
    decode_telemetry_with_format, format_timestamp_with, init_logger, log_info, Telegram,
};
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sl20-cli")]
#[command(about = "CLI tool for decoding SL20 telemetry telegrams")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a telegram envelope to JSON
    Decode {
        /// Telegram JSON file; reads stdin when omitted
        file: Option<PathBuf>,
        #[arg(short, long)]
        pretty: bool,
        #[arg(long, default_value = DEFAULT_TIMESTAMP_FORMAT)]
        timestamp_format: String,
    },
    /// Dump the named register values from a telegram
    Registers {
        /// Telegram JSON file; reads stdin when omitted
        file: Option<PathBuf>,
    },
    /// Render a Unix epoch as a telegram timestamp
    Timestamp {
        epoch: i64,
        #[arg(long, default_value = DEFAULT_TIMESTAMP_FORMAT)]
        format: String,
    },
}

fn main() -> Result<()> {
    init_logger();

    let cli = Cli::parse();

    match cli.command {
        Commands::Decode {
            file,
            pretty,
            timestamp_format,
        } => {
            let telegram = read_telegram(file.as_deref())?;
            let decoded = decode_telemetry_with_format(&telegram, &timestamp_format)?;
            let rendered = if pretty {
                serde_json::to_string_pretty(&decoded)?
            } else {
                serde_json::to_string(&decoded)?
            };
            println!("{rendered}");
        }
        Commands::Registers { file } => {
            let telegram = read_telegram(file.as_deref())?;
            let registers = sl20_rs::RegisterSet::from_hex(telegram.pg_hex()?)?;
            for (name, value) in registers.iter() {
                println!("{name:<14} 0x{value:02X} ({value})");
            }
        }
        Commands::Timestamp { epoch, format } => {
            let rendered = format_timestamp_with(epoch, &format)?;
            log_info(&format!("Timestamp: {rendered}"));
            println!("{rendered}");
        }
    }

    Ok(())
}

fn read_telegram(file: Option<&std::path::Path>) -> Result<Telegram> {
    let payload = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading telegram file {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("reading telegram from stdin")?;
            buffer
        }
    };

    Ok(Telegram::from_json_str(&payload)?)
}
