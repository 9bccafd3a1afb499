//! The rendered report and its Markdown form.

use std::fmt::{self, Write};

use chrono::NaiveDate;
use sha2::{Digest, Sha256};

use crate::format::format_short;

/// Label of the one line that carries the compilation date.
pub const GENERATED_ON_LABEL: &str = "Data di compilazione:";

/// One element of a report section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
  /// A sub-heading inside a section, e.g. one observation day.
  Heading(String),
  /// A labelled value, e.g. `Nome: Maria Rossi`.
  Field { label: String, value: String },
  Paragraph(String),
  Bullet(String),
}

impl Block {
  pub fn field(label: impl Into<String>, value: impl Into<String>) -> Self {
    Self::Field {
      label: label.into(),
      value: value.into(),
    }
  }

  fn is_list_item(&self) -> bool {
    matches!(self, Self::Field { .. } | Self::Bullet(_))
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSection {
  pub title:  String,
  pub blocks: Vec<Block>,
}

impl ReportSection {
  pub fn new(title: impl Into<String>) -> Self {
    Self {
      title:  title.into(),
      blocks: Vec::new(),
    }
  }

  pub(crate) fn push(&mut self, block: Block) { self.blocks.push(block); }

  /// Push a field only when its value is non-empty.
  pub(crate) fn push_field(&mut self, label: &str, value: &str) {
    if !value.trim().is_empty() {
      self.push(Block::field(label, value));
    }
  }
}

/// The projected report. [`Display`](fmt::Display) writes it as Markdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedReport {
  pub title:        String,
  pub subtitle:     String,
  pub generated_on: NaiveDate,
  pub sections:     Vec<ReportSection>,
  pub footer:       Vec<String>,
}

impl RenderedReport {
  /// Titles of the rendered sections, in order.
  pub fn section_titles(&self) -> Vec<&str> {
    self.sections.iter().map(|s| s.title.as_str()).collect()
  }

  pub fn section(&self, title: &str) -> Option<&ReportSection> {
    self.sections.iter().find(|s| s.title == title)
  }

  /// The line naming the compilation date, exactly as it appears in the
  /// Markdown output.
  pub fn generated_on_line(&self) -> String {
    format!("{GENERATED_ON_LABEL} {}", format_short(self.generated_on))
  }

  /// The Markdown output without the compilation-date line. Two renders of an
  /// unchanged document produce the same body.
  pub fn body(&self) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = self.write_markdown(&mut out, false);
    out
  }

  /// SHA-256 hex digest of [`body`](Self::body).
  pub fn body_digest(&self) -> String {
    hex::encode(Sha256::digest(self.body().as_bytes()))
  }

  fn write_markdown(&self, out: &mut impl Write, stamp: bool) -> fmt::Result {
    writeln!(out, "# {}", self.title)?;
    writeln!(out)?;
    writeln!(out, "**{}**", self.subtitle)?;
    writeln!(out)?;
    if stamp {
      writeln!(out, "{}", self.generated_on_line())?;
      writeln!(out)?;
    }
    writeln!(out, "---")?;

    for section in &self.sections {
      writeln!(out)?;
      writeln!(out, "## {}", section.title)?;
      let mut prev_list = false;
      for block in &section.blocks {
        if !(prev_list && block.is_list_item()) {
          writeln!(out)?;
        }
        match block {
          Block::Heading(text) => writeln!(out, "### {text}")?,
          Block::Field { label, value } => {
            writeln!(out, "- **{label}:** {value}")?
          }
          Block::Paragraph(text) => writeln!(out, "{text}")?,
          Block::Bullet(text) => writeln!(out, "- {text}")?,
        }
        prev_list = block.is_list_item();
      }
    }

    writeln!(out)?;
    writeln!(out, "---")?;
    writeln!(out)?;
    for line in &self.footer {
      writeln!(out, "{line}")?;
    }
    Ok(())
  }
}

impl fmt::Display for RenderedReport {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.write_markdown(f, true)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn report() -> RenderedReport {
    let mut section = ReportSection::new("INFORMAZIONI CLIENTE");
    section.push_field("Nome", "Maria Rossi");
    section.push_field("Indirizzo", "");
    section.push_field("Luogo di nascita", "Roma");
    section.push(Block::Heading("Giorno 1".into()));
    section.push(Block::Paragraph("Testo.".into()));
    RenderedReport {
      title:        "AGENZIA".into(),
      subtitle:     "Relazione".into(),
      generated_on: NaiveDate::from_ymd_opt(2026, 10, 18).unwrap(),
      sections:     vec![section],
      footer:       vec!["piè di pagina".into()],
    }
  }

  #[test]
  fn markdown_layout() {
    let out = report().to_string();
    assert!(out.starts_with("# AGENZIA\n\n**Relazione**\n"), "got:\n{out}");
    assert!(out.contains("\nData di compilazione: 18/10/2026\n"), "got:\n{out}");
    assert!(
      out.contains("## INFORMAZIONI CLIENTE\n\n- **Nome:** Maria Rossi\n- **Luogo di nascita:** Roma\n\n### Giorno 1\n\nTesto.\n"),
      "got:\n{out}"
    );
    assert!(!out.contains("Indirizzo"), "empty field rendered:\n{out}");
    assert!(out.trim_end().ends_with("piè di pagina"));
  }

  #[test]
  fn body_differs_from_output_only_by_the_stamp() {
    let report = report();
    let full = report.to_string();
    let stamp = report.generated_on_line();
    assert_eq!(full.matches(&stamp).count(), 1);

    let without: String = full
      .lines()
      .filter(|l| *l != stamp)
      .map(|l| format!("{l}\n"))
      .collect();
    // The stamp line is followed by a blank separator line in the full form.
    assert_eq!(without.replace("\n\n\n", "\n\n"), report.body());
  }

  #[test]
  fn digest_ignores_the_compilation_date() {
    let a = report();
    let mut b = report();
    b.generated_on = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
    assert_eq!(a.body_digest(), b.body_digest());
    assert_eq!(a.body_digest().len(), 64);

    b.sections[0].push(Block::Bullet("altro".into()));
    assert_ne!(a.body_digest(), b.body_digest());
  }
}
