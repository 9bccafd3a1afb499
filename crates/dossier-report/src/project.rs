//! Projection of an investigation document into a [`RenderedReport`].
//!
//! Pure: the only input besides the document is [`ReportOptions`], which also
//! carries the compilation date.

use dossier_core::document::{
  ClientInfo, GamblingActivity, InvestigatedInfo, InvestigationDocument,
  MandateDetails, ObservationDay, ObservationKind, Photo, PhotoStrategy,
  Privacy, Vehicle,
};

use crate::{
  ReportOptions,
  format::{join_list, long_date, place, short_date, time_range},
  render::{Block, RenderedReport, ReportSection},
};

// ─── Section titles ──────────────────────────────────────────────────────────

pub const CLIENT: &str = "INFORMAZIONI CLIENTE";
pub const INVESTIGATED: &str = "SOGGETTO INVESTIGATO";
pub const MANDATE: &str = "DETTAGLI MANDATO";
pub const OBSERVATION: &str = "ATTIVITÀ DI OSSERVAZIONE";
pub const GAMBLING: &str = "ATTIVITÀ DI GIOCO E SCOMMESSE";
pub const PHOTOS: &str = "DOCUMENTAZIONE FOTOGRAFICA";
pub const NOTES: &str = "NOTE AGGIUNTIVE";
pub const CONCLUSIONS: &str = "CONCLUSIONI";
pub const PRIVACY: &str = "PRIVACY E RISERVATEZZA";

const SUBTITLE: &str = "Relazione Investigativa Confidenziale";

pub fn project(doc: &InvestigationDocument, options: &ReportOptions) -> RenderedReport {
  let sections = [
    client_section(&doc.client_info),
    investigated_section(&doc.investigated_info),
    mandate_section(&doc.mandate_details),
    observation_section(&doc.observation_days),
    gambling_section(&doc.gambling_activities),
    photo_section(&doc.photos, doc.photo_management.photo_strategy),
    text_section(NOTES, &doc.additional_notes.notes),
    text_section(CONCLUSIONS, &doc.conclusions.text),
    Some(privacy_section(&doc.privacy)),
  ]
  .into_iter()
  .flatten()
  .collect();

  RenderedReport {
    title: options.agency_name.to_uppercase(),
    subtitle: SUBTITLE.to_string(),
    generated_on: options.generated_on,
    sections,
    footer: vec![
      format!("{} - Agenzia Investigativa Professionale", options.agency_name),
      "Relazione redatta in conformità alla normativa vigente".to_string(),
      "Documento confidenziale - Vietata la riproduzione e divulgazione a \
       terzi non autorizzati"
        .to_string(),
    ],
  }
}

// ─── People ──────────────────────────────────────────────────────────────────

fn client_section(client: &ClientInfo) -> Option<ReportSection> {
  if client.full_name.is_empty() {
    return None;
  }
  let mut section = ReportSection::new(CLIENT);
  section.push_field("Nome", &client.full_name);
  section.push_field("Indirizzo", &client.address);
  section.push_field("Data di nascita", &short_date(&client.birth_date));
  section.push_field("Luogo di nascita", &client.birth_place);
  let document_label = match client.document_type.trim() {
    "" => "Documento",
    label => label,
  };
  section.push_field(document_label, &client.document_number);
  Some(section)
}

fn investigated_section(info: &InvestigatedInfo) -> Option<ReportSection> {
  if info.full_name.is_empty() {
    return None;
  }
  let mut section = ReportSection::new(INVESTIGATED);
  section.push_field("Nome", &info.full_name);
  section.push_field("Indirizzo", &info.address);
  section.push_field("Data di nascita", &short_date(&info.birth_date));
  section.push_field("Luogo di nascita", &info.birth_place);

  if !info.vehicles.is_empty() {
    section.push(Block::Heading("Veicoli utilizzati".into()));
    for vehicle in &info.vehicles {
      section.push(Block::Bullet(vehicle_line(vehicle)));
    }
  }
  Some(section)
}

fn vehicle_line(vehicle: &Vehicle) -> String {
  let description: Vec<&str> = [vehicle.model.trim(), vehicle.color.trim()]
    .into_iter()
    .filter(|s| !s.is_empty())
    .collect();
  let plate = vehicle.license_plate.trim();

  match (description.is_empty(), plate.is_empty()) {
    (true, true) => "Veicolo non specificato".to_string(),
    (false, true) => description.join(" "),
    (true, false) => format!("Targa: {plate}"),
    (false, false) => format!("{} - Targa: {plate}", description.join(" ")),
  }
}

// ─── Mandate ─────────────────────────────────────────────────────────────────

fn mandate_section(mandate: &MandateDetails) -> Option<ReportSection> {
  if mandate.assignment_date.is_empty() {
    return None;
  }
  let mut section = ReportSection::new(MANDATE);
  section.push_field("Data conferimento", &short_date(&mandate.assignment_date));
  section.push_field("Tipo indagine", &mandate.investigation_type);
  section.push_field("Finalità", &mandate.purpose);
  section.push_field("Diritti tutelati", &mandate.protected_rights);
  Some(section)
}

// ─── Observation days ────────────────────────────────────────────────────────

fn observation_section(days: &[ObservationDay]) -> Option<ReportSection> {
  if days.is_empty() {
    return None;
  }
  let mut section = ReportSection::new(OBSERVATION);
  for (index, day) in days.iter().enumerate() {
    let heading = match day.date.trim() {
      "" => format!("Giorno {}", index + 1),
      date => format!("Giorno {} - {}", index + 1, short_date(date)),
    };
    section.push(Block::Heading(heading));
    section.push(Block::field("Tipo osservazione", kind_label(day.kind)));
    section.push(Block::Paragraph(narrate_day(day)));
  }
  Some(section)
}

fn kind_label(kind: ObservationKind) -> &'static str {
  match kind {
    ObservationKind::Single => "Singolo giorno",
    ObservationKind::Multiple => "Più giorni",
    ObservationKind::General => "Generale",
  }
}

/// The authored description when there is one, otherwise a sentence built
/// from the day's date, times and places.
fn narrate_day(day: &ObservationDay) -> String {
  let places: Vec<String> = day
    .locations
    .iter()
    .filter_map(|l| place(&l.place_name, &l.address))
    .collect();

  if !day.description.trim().is_empty() {
    if places.is_empty() {
      return day.description.clone();
    }
    return format!(
      "{} Luoghi visitati: {}.",
      day.description.trim_end(),
      join_list(&places)
    );
  }

  let mut sentence = match day.date.trim() {
    "" => "In data non specificata".to_string(),
    date => format!("In data {}", long_date(date)),
  };
  if let Some(times) = time_range(&day.start_time, &day.end_time) {
    sentence.push_str(", ");
    sentence.push_str(&times);
  }
  sentence.push_str(", lo scrivente ha svolto attività di osservazione");
  if !places.is_empty() {
    sentence.push_str(" presso ");
    sentence.push_str(&join_list(&places));
  }
  sentence.push('.');
  sentence
}

// ─── Gambling activities ─────────────────────────────────────────────────────

fn gambling_section(activities: &[GamblingActivity]) -> Option<ReportSection> {
  if activities.is_empty() {
    return None;
  }
  let mut section = ReportSection::new(GAMBLING);
  for activity in activities {
    section.push(Block::Bullet(activity_line(activity)));
  }
  Some(section)
}

fn activity_line(activity: &GamblingActivity) -> String {
  let mut line = place(&activity.location, &activity.address)
    .unwrap_or_else(|| "Locale non specificato".to_string());
  if let Some(times) = time_range(&activity.start_time, &activity.end_time) {
    line.push_str(", ");
    line.push_str(&times);
  }
  let description = activity.description.trim();
  if !description.is_empty() {
    line.push_str(": ");
    line.push_str(description);
  }
  line
}

// ─── Photos ──────────────────────────────────────────────────────────────────

fn photo_section(photos: &[Photo], strategy: PhotoStrategy) -> Option<ReportSection> {
  if photos.is_empty() {
    return None;
  }
  let mut section = ReportSection::new(PHOTOS);
  section.push(Block::Paragraph(narrate_photos(photos.len(), strategy)));
  Some(section)
}

fn narrate_photos(count: usize, strategy: PhotoStrategy) -> String {
  match (strategy, count) {
    (PhotoStrategy::SeparateDossier, 1) => "1 fotografia acquisita è raccolta \
      nel fascicolo fotografico allegato alla presente relazione."
      .to_string(),
    (PhotoStrategy::SeparateDossier, n) => format!(
      "Le {n} fotografie acquisite sono raccolte nel fascicolo fotografico \
       allegato alla presente relazione."
    ),
    (PhotoStrategy::PerDay, 1) => "Durante le attività di osservazione è \
      stata acquisita 1 fotografia, associata al relativo giorno di \
      osservazione."
      .to_string(),
    (PhotoStrategy::PerDay, n) => format!(
      "Durante le attività di osservazione sono state acquisite {n} \
       fotografie, associate ai rispettivi giorni di osservazione."
    ),
  }
}

// ─── Free text ───────────────────────────────────────────────────────────────

fn text_section(title: &str, text: &str) -> Option<ReportSection> {
  if text.is_empty() {
    return None;
  }
  let mut section = ReportSection::new(title);
  section.push(Block::Paragraph(text.to_string()));
  Some(section)
}

fn privacy_section(privacy: &Privacy) -> ReportSection {
  let mut section = ReportSection::new(PRIVACY);
  for text in [&privacy.standard_message, &privacy.custom_notes] {
    if !text.trim().is_empty() {
      section.push(Block::Paragraph(text.clone()));
    }
  }
  section
}
