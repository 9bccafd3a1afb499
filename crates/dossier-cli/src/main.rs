//! `dossier`: command-line front end for investigation reports.
//!
//! # Usage
//!
//! ```
//! dossier new --output caso.json
//! dossier render caso.json --output relazione.md
//! dossier status caso.json
//! dossier vocab
//! ```
//!
//! Settings are read from `dossier.toml` (or `--config FILE`) and from
//! `DOSSIER_*` environment variables.

mod sample;

use std::{
  fs,
  io::{self, Write},
  path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use dossier_core::{
  CompletionStats, InvestigationDocument,
  document::{DOCUMENT_TYPES, INVESTIGATION_TYPES},
  missing_required,
};
use dossier_report::{
  DEFAULT_AGENCY_NAME, MarkdownExporter, ReportExporter, ReportOptions, project,
};
use serde::Deserialize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "dossier", version, about = "Investigation report builder")]
struct Args {
  /// Path to a TOML config file.
  #[arg(short, long, value_name = "FILE", default_value = "dossier.toml")]
  config: PathBuf,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Write a blank document as JSON.
  New {
    /// Destination file; stdout when omitted.
    #[arg(short, long)]
    output: Option<PathBuf>,
  },
  /// Write a filled-in example document as JSON.
  Sample {
    #[arg(short, long)]
    output: Option<PathBuf>,
  },
  /// Render a document as a Markdown report.
  Render {
    /// The document JSON.
    document: PathBuf,

    /// Destination file; stdout when omitted. Pass a directory to use the
    /// exporter's file name.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Compilation date printed on the report (default: today).
    #[arg(long, value_name = "YYYY-MM-DD")]
    date: Option<NaiveDate>,

    /// Print the digest of the report body instead of the report.
    #[arg(long, conflicts_with_all = ["output", "strict"])]
    digest: bool,

    /// Fail when a required field is blank.
    #[arg(long)]
    strict: bool,
  },
  /// Show how much of a document is filled in.
  Status {
    document: PathBuf,
  },
  /// List the suggested identity document and investigation types.
  Vocab,
}

// ─── Config ───────────────────────────────────────────────────────────────────

#[derive(Deserialize, Debug)]
struct CliConfig {
  #[serde(default = "default_agency_name")]
  agency_name: String,
}

fn default_agency_name() -> String { DEFAULT_AGENCY_NAME.to_string() }

fn load_config(path: &Path) -> Result<CliConfig> {
  let settings = config::Config::builder()
    .add_source(config::File::from(path).required(false))
    .add_source(config::Environment::with_prefix("DOSSIER"))
    .build()
    .with_context(|| format!("failed to read config file {}", path.display()))?;

  settings
    .try_deserialize()
    .context("failed to deserialise dossier config")
}

// ─── Entry point ──────────────────────────────────────────────────────────────

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_writer(io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let args = Args::parse();
  let config = load_config(&args.config)?;

  match args.command {
    Command::New { output } => {
      let json = InvestigationDocument::default().to_json_pretty()?;
      write_output(output.as_deref(), json.as_bytes())
    }
    Command::Sample { output } => {
      let json = sample::build().to_json_pretty()?;
      write_output(output.as_deref(), json.as_bytes())
    }
    Command::Render {
      document,
      output,
      date,
      digest,
      strict,
    } => {
      let doc = read_document(&document)?;
      let options = match date {
        Some(date) => ReportOptions::new(date),
        None => ReportOptions::today(),
      }
      .with_agency_name(config.agency_name);

      if digest {
        let report = project(&doc, &options);
        println!("{}", report.body_digest());
        return Ok(());
      }

      let mut exporter = MarkdownExporter::new(options);
      if strict {
        exporter = exporter.strict();
      }
      let file = exporter.export(&doc)?;

      match output {
        Some(dir) if dir.is_dir() => {
          write_output(Some(dir.join(&file.file_name).as_path()), &file.bytes)
        }
        other => write_output(other.as_deref(), &file.bytes),
      }
    }
    Command::Status { document } => {
      let doc = read_document(&document)?;
      let stats = CompletionStats::of(&doc);
      println!(
        "Completamento: {}% ({}/{})",
        stats.percentage, stats.completed, stats.total
      );
      for field in missing_required(&doc) {
        println!("  manca: {field}");
      }
      Ok(())
    }
    Command::Vocab => {
      write_vocab(&mut io::stdout().lock()).context("writing to stdout")
    }
  }
}

fn read_document(path: &Path) -> Result<InvestigationDocument> {
  let raw = fs::read_to_string(path)
    .with_context(|| format!("reading document {}", path.display()))?;
  InvestigationDocument::from_json(&raw)
    .with_context(|| format!("parsing document {}", path.display()))
}

fn write_vocab(out: &mut impl Write) -> io::Result<()> {
  for (heading, values) in [
    ("Tipi di documento", DOCUMENT_TYPES),
    ("Tipi di indagine", INVESTIGATION_TYPES),
  ] {
    writeln!(out, "{heading}:")?;
    for value in values {
      writeln!(out, "  {value}")?;
    }
  }
  Ok(())
}

fn write_output(path: Option<&Path>, bytes: &[u8]) -> Result<()> {
  match path {
    Some(path) => {
      if path.is_dir() {
        bail!("{} is a directory", path.display());
      }
      fs::write(path, bytes)
        .with_context(|| format!("writing {}", path.display()))?;
      tracing::info!(path = %path.display(), bytes = bytes.len(), "wrote file");
    }
    None => {
      let mut stdout = io::stdout().lock();
      stdout.write_all(bytes).context("writing to stdout")?;
      if !bytes.ends_with(b"\n") {
        stdout.write_all(b"\n").context("writing to stdout")?;
      }
    }
  }
  Ok(())
}
