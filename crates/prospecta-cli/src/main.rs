mod search;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "prospecta")]
#[command(about = "French B2B company prospecting from a sector keyword")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search companies for a sector keyword
    Search {
        /// Sector keyword (e.g. "plomberie")
        keyword: String,
        /// Maximum number of companies to return
        #[arg(long, default_value = "30")]
        limit: usize,
        /// Newline-delimited file of already-known company names to exclude
        #[arg(long)]
        existing: Option<PathBuf>,
        /// Look up SIREN and NAF codes in the company registry
        #[arg(long)]
        enrich: bool,
        /// Print results without writing the .xlsx workbook
        #[arg(long)]
        no_export: bool,
    },
    /// Print the search variants generated for a keyword
    Variants {
        keyword: String,
        /// Maximum number of variants
        #[arg(long, default_value_t = prospecta_pipeline::DEFAULT_MAX_VARIANTS)]
        max: usize,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Search {
            keyword,
            limit,
            existing,
            enrich,
            no_export,
        }) => {
            let config = prospecta_core::load_app_config()?;
            init_tracing(&config.log_level)?;
            let args = search::SearchArgs {
                keyword,
                limit,
                existing,
                enrich,
                export: !no_export,
            };
            search::run_search(&config, &args).await?;
        }
        Some(Commands::Variants { keyword, max }) => {
            for variant in prospecta_pipeline::generate_variants(&keyword, max) {
                println!("{variant}");
            }
        }
        None => println!("prospecta: run `prospecta search <KEYWORD>` or `prospecta --help`"),
    }

    Ok(())
}

fn init_tracing(default_level: &str) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_level))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
    Ok(())
}
