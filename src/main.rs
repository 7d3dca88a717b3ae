use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use pdir::{DirectoryClient, PatientBrowser, SortKey, format_patient_table, visible_patients};

#[derive(Parser)]
#[command(
    name = "pdir",
    version,
    about = "Terminal client for browsing a patient directory API",
    long_about = None
)]
struct Cli {
    /// Base URL of the directory service
    #[arg(long, env = "PDIR_URL", default_value = "http://localhost:3000")]
    url: String,

    /// Show only patients whose name contains this text (case-insensitive)
    #[arg(long, default_value = "")]
    filter: String,

    /// Sort key: name, id, dateOfBirth or dateOfRegistration
    #[arg(short, long)]
    sort: Option<SortKey>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Interactive browser mode
    #[arg(short, long)]
    interactive: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing();

    let client = DirectoryClient::new(cli.url);

    if cli.interactive {
        let mut browser = PatientBrowser::new(client);
        return browser.run();
    }

    let patients = client.fetch_patients()?;
    let visible = visible_patients(&patients, &cli.filter, cli.sort)?;

    match cli.format {
        OutputFormat::Text => print!("{}", format_patient_table(&visible)),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&visible).context("Failed to serialize patients")?
        ),
    }

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::prelude::*;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pdir=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
