#![warn(rust_2018_idioms)]

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use mjsoul_tenhou::app::{Converter, FileSource};
use mjsoul_tenhou::util::dictionary::Dictionary;
use mjsoul_tenhou::util::misc::write_to_file;

#[derive(Debug, Parser)]
#[command(name = "mjsoul_tenhou", about = "Convert Mahjong Soul game records to Tenhou logs")]
struct Cli {
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Subcommand)]
enum Mode {
    /// Convert a record to a Tenhou log (JSON)
    Convert {
        /// Record file, or a directory containing records named by id
        #[arg(short, long)]
        input: PathBuf,
        /// Record id (uuid)
        #[arg(long, default_value = "")]
        id: String,
        /// Dictionary JSON overriding the built-in tables
        #[arg(long)]
        dict: Option<PathBuf>,
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[arg(long)]
        pretty: bool,
    },
    /// Print the decoded round events as JSON lines
    Events {
        #[arg(short, long)]
        input: PathBuf,
        #[arg(long, default_value = "")]
        id: String,
    },
}

fn load_dictionary(path: Option<&PathBuf>) -> anyhow::Result<Dictionary> {
    let dict = Dictionary::builtin();
    Ok(match path {
        Some(p) => {
            let other = Dictionary::from_path(p)
                .map_err(|e| anyhow::anyhow!(e))
                .with_context(|| format!("failed to load dictionary: {}", p.display()))?;
            dict.merge(other)
        }
        None => dict,
    })
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .init();

    let cli = Cli::parse();
    match cli.mode {
        Mode::Convert {
            input,
            id,
            dict,
            output,
            pretty,
        } => {
            let dict = load_dictionary(dict.as_ref())?;
            let converter = Converter::new(FileSource::new(input), Arc::new(dict));
            let res = converter.convert(&id);
            let json = if pretty {
                serde_json::to_string_pretty(&res)?
            } else {
                serde_json::to_string(&res)?
            };
            match output {
                Some(path) => {
                    write_to_file(&path, &json)
                        .with_context(|| format!("failed to write: {}", path.display()))?;
                    info!("write log: {}", path.display());
                }
                None => println!("{}", json),
            }
            if res.is_error {
                std::process::exit(1);
            }
        }
        Mode::Events { input, id } => {
            let converter = Converter::new(FileSource::new(input), Arc::new(Dictionary::builtin()));
            for ev in converter.events(&id)? {
                println!("{}", serde_json::to_string(&ev)?);
            }
        }
    }
    Ok(())
}
