use anyhow::Result;
use clap::{Parser, Subcommand};
use claimcheck_rs::config::Config;
use claimcheck_rs::error::ClaimCheckError;
use claimcheck_rs::report::render_plain_text;
use claimcheck_rs::server::{run_server, Engine};
use claimcheck_rs::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "claimcheck", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
    /// YAML config file (defaults to $CLAIMCHECK_CONFIG_PATH or ./claimcheck.yaml)
    #[arg(long)]
    config: Option<String>,
}

#[derive(Subcommand)]
enum Cmd {
    /// Score every claim record in a JSONL file
    Evaluate {
        #[arg(long)] input_file: String,
        /// Write results here instead of stdout
        #[arg(long)] output_file: Option<String>,
        /// Score records as given, even without a product name
        #[arg(long)] no_fallback: bool,
    },
    /// Print the plain-text summary report for one record (demo if omitted)
    Report { #[arg(long)] input_file: Option<String> },
    /// Print the demo record and its evaluation
    Demo,
    /// Serve the evaluation API
    Serve { #[arg(long)] addr: Option<String> },
}

fn read(path: &str) -> Result<String, ClaimCheckError> {
    std::fs::read_to_string(path).map_err(|source| ClaimCheckError::Io { path: path.into(), source })
}

fn write(path: &str, contents: &str) -> Result<(), ClaimCheckError> {
    std::fs::write(path, contents).map_err(|source| ClaimCheckError::Io { path: path.into(), source })
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = Config::from_env(cli.config.as_deref());

    match cli.cmd {
        Cmd::Evaluate { input_file, output_file, no_fallback } => {
            let records = ClaimRecord::parse_jsonl(&read(&input_file)?)?;
            let fallback = config.server.fallback_to_demo && !no_fallback;
            let mut out = String::new();
            for rec in records {
                let rec = if fallback { resolve_form_data(Some(rec)) } else { rec };
                out.push_str(&serde_json::to_string(&evaluate_claim(&rec)).map_err(ClaimCheckError::from)?);
                out.push('\n');
            }
            match output_file {
                Some(path) => {
                    write(&path, &out)?;
                    tracing::info!(path = %path, "Wrote evaluations");
                }
                None => print!("{out}"),
            }
        }
        Cmd::Report { input_file } => {
            let candidate = match input_file {
                Some(path) => Some(serde_json::from_str::<ClaimRecord>(&read(&path)?).map_err(ClaimCheckError::from)?),
                None => None,
            };
            let rec = resolve_form_data(candidate);
            let result = evaluate_claim(&rec);
            println!("{}", render_plain_text(&rec, &result, chrono::Local::now().date_naive()));
        }
        Cmd::Demo => {
            let rec = resolve_form_data(None);
            let body = serde_json::json!({ "record": rec, "evaluation": evaluate_claim(&rec) });
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
        Cmd::Serve { addr } => {
            let addr = addr.unwrap_or_else(|| config.bind_addr());
            let engine = Engine { fallback_to_demo: config.server.fallback_to_demo };
            run_server(engine, &addr).await?;
        }
    }
    Ok(())
}
