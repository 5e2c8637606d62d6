use clap::Parser;
use miette::{IntoDiagnostic, Result, miette};
use std::fs::File;
use std::path::PathBuf;
use tbk_audit::interfaces::csv::record_reader::{RecordReader, ReplayRecord};
use tbk_audit::{HandlerConfig, Logger, OfficialHandler};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Replays payment, confirmation and error records into Transbank's
/// official log files.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input records CSV file
    input: PathBuf,

    /// Directory the TBK_EVN and tbk_bitacora files are written to.
    #[arg(long)]
    dir: Option<PathBuf>,

    /// Notification URL reported in confirmation and error blocks.
    #[arg(long)]
    notification_url: Option<String>,

    /// JSON handler configuration. `--dir` and `--notification-url` override it.
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Cli {
    fn handler_config(&self) -> Result<HandlerConfig> {
        let mut config = match (&self.config, &self.dir) {
            (Some(path), _) => HandlerConfig::from_path(path).into_diagnostic()?,
            (None, Some(dir)) => HandlerConfig::new(dir),
            (None, None) => return Err(miette!("either --dir or --config is required")),
        };
        if let Some(dir) = &self.dir {
            config.path = dir.clone();
        }
        if let Some(url) = &self.notification_url {
            config.notification_url = url.clone();
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.handler_config()?;
    info!(path = %config.path.display(), "writing audit logs");

    let logger = Logger::new(Box::new(OfficialHandler::from_config(&config)));

    let file = File::open(&cli.input).into_diagnostic()?;
    let reader = RecordReader::new(file);
    let (mut logged, mut failed) = (0usize, 0usize);
    for record in reader.records().into_diagnostic()? {
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                error!("Error reading record: {}", e);
                failed += 1;
                continue;
            }
        };
        let result = match &record {
            ReplayRecord::Payment(payment) => logger.payment(payment),
            ReplayRecord::Confirmation(confirmation) => logger.confirmation(confirmation),
            ReplayRecord::Error(confirmation) => logger.error(confirmation),
        };
        match result {
            Ok(()) => logged += 1,
            Err(e) => {
                error!("Error logging record: {}", e);
                failed += 1;
            }
        }
    }

    println!("logged={} failed={}", logged, failed);
    Ok(())
}
