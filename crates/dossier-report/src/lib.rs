//! Report projection for investigation documents.
//!
//! Turns an [`InvestigationDocument`] into a [`RenderedReport`]: a sectioned
//! Italian narrative with dates in `it-IT` form. Pure synchronous; the only
//! clock reading happens in [`ReportOptions::today`].
//!
//! # Quick start
//!
//! ```no_run
//! use dossier_core::InvestigationDocument;
//! use dossier_report::{ReportOptions, project};
//!
//! let doc = InvestigationDocument::default();
//! let report = project(&doc, &ReportOptions::today());
//! println!("{report}");
//! ```

pub mod error;
pub mod export;
mod format;
mod project;
mod render;

use chrono::{Local, NaiveDate};
pub use dossier_core::InvestigationDocument;
pub use error::{Error, Result};
pub use export::{ExportedFile, MarkdownExporter, ReportExporter};
pub use project::{
  CLIENT, CONCLUSIONS, GAMBLING, INVESTIGATED, MANDATE, NOTES, OBSERVATION,
  PHOTOS, PRIVACY,
};
pub use render::{Block, GENERATED_ON_LABEL, RenderedReport, ReportSection};

pub const DEFAULT_AGENCY_NAME: &str = "Falco Investigation";

// ─── Options ─────────────────────────────────────────────────────────────────

/// Everything the projection needs besides the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
  /// Shown upper-cased as the report title and in the footer.
  pub agency_name:  String,
  /// Date printed on the compilation line.
  pub generated_on: NaiveDate,
}

impl ReportOptions {
  pub fn new(generated_on: NaiveDate) -> Self {
    Self {
      agency_name: DEFAULT_AGENCY_NAME.to_string(),
      generated_on,
    }
  }

  /// Options stamped with the local calendar date.
  pub fn today() -> Self { Self::new(Local::now().date_naive()) }

  pub fn with_agency_name(mut self, name: impl Into<String>) -> Self {
    self.agency_name = name.into();
    self
  }
}

// ─── Public API ──────────────────────────────────────────────────────────────

/// Project `document` into a report.
///
/// Sections appear only when they have content, except privacy and the
/// footer, which always render. Calling this twice on the same document and
/// options yields equal reports.
pub fn project(
  document: &InvestigationDocument,
  options: &ReportOptions,
) -> RenderedReport {
  project::project(document, options)
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use dossier_core::{
    CompletionStats, Edit, InvestigationStore,
    document::{GamblingActivity, Location, ObservationDay, Photo, PhotoStrategy, Vehicle},
    edit::{ClientInfoField, ObservationDayEdit, ObservationDayField, LocationField},
  };

  use super::*;

  fn options() -> ReportOptions {
    ReportOptions::new(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap())
  }

  fn render(doc: &InvestigationDocument) -> String {
    project(doc, &options()).to_string()
  }

  /// The scenario from the field notes: one morning at Bar Centrale.
  fn bar_centrale() -> InvestigationDocument {
    let mut store = InvestigationStore::default();
    store.apply(Edit::ClientInfo(ClientInfoField::FullName("Maria Rossi".into())));
    let day = store.apply(Edit::ObservationDays(ObservationDayEdit::Add)).unwrap();
    for field in [
      ObservationDayField::Date("2024-03-10".into()),
      ObservationDayField::StartTime("09:00".into()),
      ObservationDayField::EndTime("12:00".into()),
    ] {
      store.apply(Edit::ObservationDays(ObservationDayEdit::Update(day, field)));
    }
    let location = store
      .apply(Edit::ObservationDays(ObservationDayEdit::AddLocation { day }))
      .unwrap();
    for field in [
      LocationField::PlaceName("Bar Centrale".into()),
      LocationField::Address("Via Roma 1".into()),
    ] {
      store.apply(Edit::ObservationDays(ObservationDayEdit::UpdateLocation {
        day,
        location,
        field,
      }));
    }
    store.document().clone()
  }

  // ── Section presence ────────────────────────────────────────────────────

  #[test]
  fn blank_document_renders_privacy_and_footer_only() {
    let report = project(&InvestigationDocument::default(), &options());
    assert_eq!(report.section_titles(), [PRIVACY]);
    let out = report.to_string();
    assert!(out.contains("GDPR 679/2016"), "got:\n{out}");
    assert!(out.contains("Falco Investigation - Agenzia Investigativa Professionale"));
    assert!(out.starts_with("# FALCO INVESTIGATION\n"), "got:\n{out}");
  }

  #[test]
  fn client_section_requires_a_name() {
    let mut doc = InvestigationDocument::default();
    doc.client_info.address = "Via Roma 1".into();
    doc.client_info.document_number = "CA12345AB".into();
    let out = render(&doc);
    assert!(!out.contains(CLIENT), "got:\n{out}");
    assert!(!out.contains("Via Roma 1"), "got:\n{out}");
  }

  #[test]
  fn client_section_lists_present_fields() {
    let mut doc = InvestigationDocument::default();
    doc.client_info.full_name = "Maria Rossi".into();
    doc.client_info.birth_date = "1980-05-02".into();
    doc.client_info.document_number = "CA12345AB".into();
    let out = render(&doc);
    assert!(out.contains(&format!("## {CLIENT}")), "got:\n{out}");
    assert!(out.contains("- **Nome:** Maria Rossi\n"), "got:\n{out}");
    assert!(out.contains("- **Data di nascita:** 02/05/1980\n"), "got:\n{out}");
    assert!(out.contains("- **Carta d'Identità:** CA12345AB\n"), "got:\n{out}");
    assert!(!out.contains("Indirizzo"), "blank address rendered:\n{out}");
    assert!(!out.contains("Luogo di nascita"), "got:\n{out}");
  }

  #[test]
  fn sections_follow_document_order() {
    let mut doc = bar_centrale();
    doc.investigated_info.full_name = "Luca Bianchi".into();
    doc.mandate_details.assignment_date = "2024-03-01".into();
    doc.gambling_activities.push(GamblingActivity::new());
    doc.photos.push(Photo::new());
    doc.additional_notes.notes = "Nota".into();
    doc.conclusions.text = "Conclusione".into();
    let report = project(&doc, &options());
    assert_eq!(report.section_titles(), [
      CLIENT,
      INVESTIGATED,
      MANDATE,
      OBSERVATION,
      GAMBLING,
      PHOTOS,
      NOTES,
      CONCLUSIONS,
      PRIVACY,
    ]);
  }

  #[test]
  fn conclusions_and_mandate_need_content() {
    let mut doc = InvestigationDocument::default();
    doc.mandate_details.purpose = "Verifica".into();
    let report = project(&doc, &options());
    assert!(report.section(CONCLUSIONS).is_none());
    assert!(report.section(MANDATE).is_none());
  }

  #[test]
  fn whitespace_values_count_as_present() {
    let mut doc = InvestigationDocument::default();
    doc.client_info.full_name = " ".into();
    doc.conclusions.text = "  ".into();
    let report = project(&doc, &options());
    assert_eq!(report.section_titles(), [CLIENT, CONCLUSIONS, PRIVACY]);
    assert_eq!(CompletionStats::of(&doc).completed, 2);
  }

  // ── Observation days ────────────────────────────────────────────────────

  #[test]
  fn synthesized_day_narration() {
    let out = render(&bar_centrale());
    assert!(out.contains("### Giorno 1 - 10/03/2024\n"), "got:\n{out}");
    assert!(
      out.contains(
        "In data domenica 10 marzo 2024, dalle ore 09:00 alle ore 12:00, lo \
         scrivente ha svolto attività di osservazione presso Bar Centrale \
         (Via Roma 1)."
      ),
      "got:\n{out}"
    );
  }

  #[test]
  fn authored_description_is_kept_with_locations_clause() {
    let mut doc = bar_centrale();
    doc.observation_days[0].description =
      "Il soggetto è rimasto all'interno per tre ore.".into();
    let mut second = Location::new();
    second.place_name = "Sala Bingo".into();
    doc.observation_days[0].locations.push(second);

    let out = render(&doc);
    assert!(
      out.contains(
        "Il soggetto è rimasto all'interno per tre ore. Luoghi visitati: \
         Bar Centrale (Via Roma 1) e Sala Bingo."
      ),
      "got:\n{out}"
    );
    assert!(!out.contains("lo scrivente"), "synthesized text leaked:\n{out}");
  }

  #[test]
  fn authored_description_without_locations_is_verbatim() {
    let mut day = ObservationDay::new();
    day.description = "Nessun movimento rilevato.  ".into();
    let mut doc = InvestigationDocument::default();
    doc.observation_days.push(day);
    let out = render(&doc);
    assert!(out.contains("\nNessun movimento rilevato.  \n"), "got:\n{out}");
    assert!(out.contains("### Giorno 1\n"), "got:\n{out}");
  }

  #[test]
  fn undated_day_still_narrates() {
    let mut doc = InvestigationDocument::default();
    let mut day = ObservationDay::new();
    day.end_time = "18:30".into();
    doc.observation_days.push(day);
    let out = render(&doc);
    assert!(
      out.contains(
        "In data non specificata, fino alle ore 18:30, lo scrivente ha svolto \
         attività di osservazione."
      ),
      "got:\n{out}"
    );
  }

  // ── Photos ──────────────────────────────────────────────────────────────

  fn with_photos(count: usize, strategy: PhotoStrategy) -> RenderedReport {
    let mut doc = InvestigationDocument::default();
    for i in 0..count {
      let mut photo = Photo::new();
      photo.description = format!("Scatto numero {i}");
      doc.photos.push(photo);
    }
    doc.photo_management.photo_strategy = strategy;
    project(&doc, &options())
  }

  #[test]
  fn separate_dossier_is_one_summary_sentence() {
    let report = with_photos(3, PhotoStrategy::SeparateDossier);
    let section = report.section(PHOTOS).unwrap();
    assert_eq!(section.blocks, [Block::Paragraph(
      "Le 3 fotografie acquisite sono raccolte nel fascicolo fotografico \
       allegato alla presente relazione."
        .into()
    )]);
    let out = report.to_string();
    assert!(!out.contains("Scatto numero"), "per-photo line in:\n{out}");
  }

  #[test]
  fn per_day_states_the_count() {
    let report = with_photos(2, PhotoStrategy::PerDay);
    let section = report.section(PHOTOS).unwrap();
    let [Block::Paragraph(text)] = section.blocks.as_slice() else {
      panic!("unexpected blocks: {:?}", section.blocks)
    };
    assert!(text.contains("sono state acquisite 2 fotografie"), "got: {text}");
    assert!(!text.contains("fascicolo"), "got: {text}");

    let single = with_photos(1, PhotoStrategy::PerDay);
    let out = single.to_string();
    assert!(out.contains("acquisita 1 fotografia"), "got:\n{out}");
  }

  // ── Lists ───────────────────────────────────────────────────────────────

  #[test]
  fn vehicles_render_one_line_each_in_order() {
    let mut doc = InvestigationDocument::default();
    doc.investigated_info.full_name = "Luca Bianchi".into();
    let specs = [
      ("Fiat Panda", "Bianco", "AB123CD"),
      ("", "", "ZZ999ZZ"),
      ("Vespa", "", ""),
    ];
    for (model, color, plate) in specs {
      let mut vehicle = Vehicle::new();
      vehicle.model = model.into();
      vehicle.color = color.into();
      vehicle.license_plate = plate.into();
      doc.investigated_info.vehicles.push(vehicle);
    }
    let out = render(&doc);
    assert!(
      out.contains(
        "### Veicoli utilizzati\n\n- Fiat Panda Bianco - Targa: AB123CD\n- \
         Targa: ZZ999ZZ\n- Vespa\n"
      ),
      "got:\n{out}"
    );
  }

  #[test]
  fn gambling_lines_omit_empty_fields() {
    let mut doc = InvestigationDocument::default();
    let mut full = GamblingActivity::new();
    full.location = "Sala Slot Jolly".into();
    full.address = "Via Milano 4".into();
    full.start_time = "21:00".into();
    full.end_time = "23:15".into();
    full.description = "Gioca alle slot machine.".into();
    let mut sparse = GamblingActivity::new();
    sparse.location = "Tabaccheria".into();
    doc.gambling_activities = vec![full, sparse];

    let section = project(&doc, &options()).section(GAMBLING).cloned().unwrap();
    assert_eq!(section.blocks, [
      Block::Bullet(
        "Sala Slot Jolly (Via Milano 4), dalle ore 21:00 alle ore 23:15: Gioca \
         alle slot machine."
          .into()
      ),
      Block::Bullet("Tabaccheria".into()),
    ]);
  }

  // ── Stability ───────────────────────────────────────────────────────────

  #[test]
  fn projection_is_idempotent_apart_from_the_stamp() {
    let doc = bar_centrale();
    let first = project(&doc, &options());
    let second = project(&doc, &options());
    assert_eq!(first.to_string(), second.to_string());

    let later = project(&doc, &ReportOptions::today());
    assert_eq!(first.body(), later.body());
    assert_eq!(first.body_digest(), later.body_digest());

    let stamp_lines = |out: String| {
      out
        .lines()
        .filter(|l| l.starts_with(GENERATED_ON_LABEL))
        .count()
    };
    assert_eq!(stamp_lines(first.to_string()), 1);
    assert_eq!(stamp_lines(first.body()), 0);
  }

  #[test]
  fn agency_name_is_configurable() {
    let opts = options().with_agency_name("Agenzia Nord");
    let out = project(&InvestigationDocument::default(), &opts).to_string();
    assert!(out.starts_with("# AGENZIA NORD\n"), "got:\n{out}");
    assert!(out.contains("Agenzia Nord - Agenzia Investigativa Professionale"));
    assert!(out.contains("Data di compilazione: 15/03/2024"), "got:\n{out}");
  }

  #[test]
  fn malformed_dates_render_verbatim() {
    let mut doc = InvestigationDocument::default();
    doc.mandate_details.assignment_date = "inizio marzo".into();
    let out = render(&doc);
    assert!(out.contains("- **Data conferimento:** inizio marzo\n"), "got:\n{out}");
  }
}
