//! The hand-off point for report exporters.
//!
//! An exporter takes the finished document and returns a downloadable file,
//! or fails. A PDF renderer plugs in here; the in-tree implementation writes
//! Markdown.

use bytes::Bytes;
use dossier_core::{InvestigationDocument, missing_required};

use crate::{Error, ReportOptions, Result, project};

/// A rendered artifact ready to be saved or offered for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
  pub file_name:  String,
  pub media_type: &'static str,
  pub bytes:      Bytes,
}

pub trait ReportExporter {
  type Error: std::error::Error + Send + Sync + 'static;

  fn export(
    &self,
    document: &InvestigationDocument,
  ) -> Result<ExportedFile, Self::Error>;
}

/// Writes the projected report as a Markdown file.
#[derive(Debug, Clone)]
pub struct MarkdownExporter {
  options: ReportOptions,
  strict:  bool,
}

impl MarkdownExporter {
  pub fn new(options: ReportOptions) -> Self {
    Self {
      options,
      strict: false,
    }
  }

  /// Refuse to export while any required field is blank.
  pub fn strict(mut self) -> Self {
    self.strict = true;
    self
  }
}

impl ReportExporter for MarkdownExporter {
  type Error = Error;

  fn export(&self, document: &InvestigationDocument) -> Result<ExportedFile> {
    if self.strict {
      let missing = missing_required(document);
      if !missing.is_empty() {
        return Err(Error::MissingRequired(missing));
      }
    }

    let report = project(document, &self.options);
    Ok(ExportedFile {
      file_name:  file_name(document, &self.options),
      media_type: "text/markdown",
      bytes:      Bytes::from(report.to_string()),
    })
  }
}

/// `relazione-<subject>-<yyyymmdd>.md`, with the subject slugged to ASCII.
fn file_name(document: &InvestigationDocument, options: &ReportOptions) -> String {
  let slug: Vec<String> = document
    .investigated_info
    .full_name
    .split_whitespace()
    .map(|word| {
      word
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect::<String>()
    })
    .filter(|word| !word.is_empty())
    .collect();

  let date = options.generated_on.format("%Y%m%d");
  if slug.is_empty() {
    format!("relazione-{date}.md")
  } else {
    format!("relazione-{}-{date}.md", slug.join("-"))
  }
}
