use clap::{Args, Parser, Subcommand};
use std::net::SocketAddr;

use crate::error::MetagrabError;
use crate::extractor::MetadataExtractor;
use crate::log::ActivityLogger;
use crate::serve;
use crate::types::{ApiResponse, Domain, ScrapeRequest};

#[derive(Parser)]
#[command(name = "metagrab", version, about = "Product metadata scraping (JSON only)")]
pub struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scrape metadata from a URL and print the result
    Scrape(ScrapeArgs),
    /// Run the HTTP scraping endpoint
    Serve(ServeArgs),
    /// Show recent activity log entries
    Logs(LogsArgs),
}

#[derive(Args)]
struct ScrapeArgs {
    /// The URL to scrape. A missing scheme is assumed to be https.
    url: String,
}

#[derive(Args)]
struct ServeArgs {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1:8787")]
    addr: String,
}

#[derive(Args)]
struct LogsArgs {
    /// Only show error entries
    #[arg(long)]
    errors: bool,
    /// Only show entries for this domain
    #[arg(long)]
    domain: Option<String>,
}

pub fn run() {
    let cli = Cli::parse();
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("failed to build runtime");

    match cli.cmd {
        Command::Scrape(args) => {
            let result = runtime.block_on(async {
                let extractor = MetadataExtractor::new()?;
                Ok::<_, MetagrabError>(extractor.extract(&ScrapeRequest { url: args.url }).await)
            });
            finish(result);
        }
        Command::Serve(args) => {
            let addr = match args.addr.parse::<SocketAddr>() {
                Ok(addr) => addr,
                Err(e) => {
                    return print_json(ApiResponse::<()>::err(format!(
                        "invalid --addr {}: {e}",
                        args.addr
                    )));
                }
            };
            if let Err(e) = runtime.block_on(serve::run(addr)) {
                print_json(ApiResponse::<()>::err(e.to_string()));
            }
        }
        Command::Logs(args) => {
            let domain = args.domain.as_deref().map(|d| Domain::from_raw(d).0);
            let result = ActivityLogger::new()
                .and_then(|logger| logger.read_logs(domain.as_deref(), args.errors));
            finish(result);
        }
    }
}

fn finish<T: serde::Serialize>(res: crate::error::Result<T>) {
    match res {
        Ok(v) => print_json(ApiResponse::ok(v)),
        Err(e) => print_json(ApiResponse::<()>::err(e.to_string())),
    }
}

fn print_json<T: serde::Serialize>(val: T) {
    // pretty JSON output
    println!("{}", serde_json::to_string_pretty(&val).unwrap());
}
