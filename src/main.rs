use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use sqd_monitor::config::{AppConfig, ConfigError};
use sqd_monitor::error::AppError;
use sqd_monitor::telemetry;
use sqd_monitor::workflows::alerts::{AlertEngine, Notification};
use sqd_monitor::workflows::scorecard::{ScorecardExtractor, ScorecardSummary, SupplierRecord};
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Parser, Debug)]
#[command(
    name = "SQD Monitor",
    about = "Extract supplier quality scorecards and evaluate alert rules",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract one scorecard document into a normalized record
    Extract(ExtractArgs),
    /// Extract documents and evaluate the alert rules over the batch
    Alerts(AlertsArgs),
}

#[derive(Args, Debug)]
struct ExtractArgs {
    /// Path to the raw scorecard document
    file: PathBuf,
    /// Source identifier for the record (defaults to the file stem)
    #[arg(long)]
    source_id: Option<String>,
    /// Evaluation date, YYYY-MM-DD (defaults to today)
    #[arg(long, value_parser = parse_date)]
    today: Option<NaiveDate>,
}

#[derive(Args, Debug)]
struct AlertsArgs {
    /// Paths to raw scorecard documents, one per supplier
    #[arg(required = true)]
    files: Vec<PathBuf>,
    /// Recipient address for the composed notifications (overrides ALERT_RECIPIENT)
    #[arg(long)]
    recipient: Option<String>,
    /// Evaluation date, YYYY-MM-DD (defaults to today)
    #[arg(long, value_parser = parse_date)]
    today: Option<NaiveDate>,
    /// Emit JSON instead of the human-readable listing
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct AlertRunOutput {
    today: NaiveDate,
    summary: ScorecardSummary,
    notifications: Vec<Notification>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    match cli.command {
        Command::Extract(args) => run_extract(args),
        Command::Alerts(args) => run_alerts(args, &config),
    }
}

fn run_extract(args: ExtractArgs) -> Result<(), AppError> {
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let source_id = args.source_id.unwrap_or_else(|| source_id_for(&args.file));

    let raw = std::fs::read_to_string(&args.file)?;
    let record = ScorecardExtractor::extract(&source_id, &raw, today)?;

    println!("{}", serde_json::to_string_pretty(&record.to_view())?);
    Ok(())
}

fn run_alerts(args: AlertsArgs, config: &AppConfig) -> Result<(), AppError> {
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let recipient = args
        .recipient
        .or_else(|| config.alerts.recipient.clone())
        .ok_or(ConfigError::MissingRecipient)?;

    // Unextractable documents are excluded from the batch, never padded in
    // as all-default records.
    let mut records: Vec<SupplierRecord> = Vec::new();
    for file in &args.files {
        let source_id = source_id_for(file);
        let raw = std::fs::read_to_string(file)?;
        match ScorecardExtractor::extract(&source_id, &raw, today) {
            Ok(record) => records.push(record),
            Err(err) => warn!(source = %err.source_id(), "excluding unextractable document"),
        }
    }

    let engine = AlertEngine::new(recipient, config.alerts.scorecard_base_url.clone());
    let notifications = engine.evaluate(&records, today);
    let summary = ScorecardSummary::from_records(&records);

    if args.json {
        let output = AlertRunOutput {
            today,
            summary,
            notifications,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        render_alert_run(today, &summary, &notifications);
    }

    Ok(())
}

fn render_alert_run(today: NaiveDate, summary: &ScorecardSummary, notifications: &[Notification]) {
    println!("Scorecard alert run (evaluated {today})");

    if notifications.is_empty() {
        println!("\nNotifications: none");
    } else {
        println!("\nNotifications");
        for notification in notifications {
            println!(
                "- [{}] {} ({})",
                notification.priority.label(),
                notification.subject,
                notification.kind.tag()
            );
        }
    }

    println!("\nBatch summary");
    println!("- suppliers: {}", summary.suppliers);
    println!("- QPM over 50: {}", summary.qpm_over_50);
    println!("- PPM over 50: {}", summary.ppm_over_50);
    println!(
        "- QPM trend: {} up, {} down",
        summary.qpm_trending_up, summary.qpm_trending_down
    );
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

fn source_id_for(path: &Path) -> String {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("scorecard")
        .to_string()
}
