//! The investigation document tree.
//!
//! One [`InvestigationDocument`] owns every section outright; sections never
//! reference each other. Scalar values are kept exactly as entered: dates are
//! `YYYY-MM-DD` and times `HH:MM` by convention only, and nothing here
//! validates them.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
  Result,
  resource::{DisplayUrl, PhotoFile},
};

/// Boilerplate confidentiality notice every new document starts with.
pub const PRIVACY_NOTICE: &str = "La presente relazione è strettamente \
  confidenziale e riservata. I dati contenuti sono stati raccolti nel \
  rispetto della normativa sulla privacy (GDPR 679/2016) e del Codice \
  Deontologico degli Investigatori Privati. È vietata la divulgazione a \
  terzi non autorizzati.";

/// Document type preselected for the client.
pub const DEFAULT_DOCUMENT_TYPE: &str = "Carta d'Identità";

/// Identity documents offered for the client. The field stays free text.
pub const DOCUMENT_TYPES: &[&str] = &[
  "Carta d'Identità",
  "Patente di Guida",
  "Passaporto",
  "Permesso di Soggiorno",
];

/// Investigation types offered for the mandate. The field stays free text.
pub const INVESTIGATION_TYPES: &[&str] = &[
  "Infedeltà coniugale",
  "Controllo patrimonio",
  "Pedinamento",
  "Verifica comportamenti",
  "Indagini aziendali",
  "Controllo dipendenti",
  "Ricerca persone",
  "Altro",
];

// ─── Records addressed by id ─────────────────────────────────────────────────

/// A list element that is addressed and removed by its id.
pub trait Record {
  fn id(&self) -> Uuid;
}

macro_rules! impl_record {
  ($($ty:ty),* $(,)?) => {
    $(impl Record for $ty {
      fn id(&self) -> Uuid { self.id }
    })*
  };
}

// ─── People ──────────────────────────────────────────────────────────────────

/// The person who commissioned the investigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientInfo {
  pub full_name:       String,
  pub address:         String,
  pub birth_date:      String,
  pub birth_place:     String,
  pub document_type:   String,
  pub document_number: String,
}

impl Default for ClientInfo {
  fn default() -> Self {
    Self {
      full_name:       String::new(),
      address:         String::new(),
      birth_date:      String::new(),
      birth_place:     String::new(),
      document_type:   DEFAULT_DOCUMENT_TYPE.to_string(),
      document_number: String::new(),
    }
  }
}

/// A vehicle the investigated person was seen using.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
  pub id:            Uuid,
  pub model:         String,
  pub color:         String,
  pub license_plate: String,
}

impl Vehicle {
  pub fn new() -> Self {
    Self {
      id:            Uuid::new_v4(),
      model:         String::new(),
      color:         String::new(),
      license_plate: String::new(),
    }
  }
}

/// The person under investigation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestigatedInfo {
  pub full_name:   String,
  pub address:     String,
  pub birth_date:  String,
  pub birth_place: String,
  pub vehicles:    Vec<Vehicle>,
}

// ─── Mandate ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MandateDetails {
  pub assignment_date:    String,
  pub investigation_type: String,
  pub purpose:            String,
  pub protected_rights:   String,
}

// ─── Observation days ────────────────────────────────────────────────────────

/// How an observation entry is scoped in time.
#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
  strum::Display,
  strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ObservationKind {
  #[default]
  Single,
  Multiple,
  General,
}

/// A place visited during an observation day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
  pub id:         Uuid,
  pub place_name: String,
  pub address:    String,
}

impl Location {
  pub fn new() -> Self {
    Self {
      id:         Uuid::new_v4(),
      place_name: String::new(),
      address:    String::new(),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObservationDay {
  pub id:          Uuid,
  pub kind:        ObservationKind,
  pub date:        String,
  pub start_time:  String,
  pub end_time:    String,
  pub locations:   Vec<Location>,
  /// Authored narration. When empty, the report synthesizes one.
  pub description: String,
}

impl ObservationDay {
  pub fn new() -> Self {
    Self {
      id:          Uuid::new_v4(),
      kind:        ObservationKind::default(),
      date:        String::new(),
      start_time:  String::new(),
      end_time:    String::new(),
      locations:   Vec::new(),
      description: String::new(),
    }
  }
}

// ─── Photos ──────────────────────────────────────────────────────────────────

/// A photograph attached to the report.
///
/// `file` and `url` live only for the session: they are skipped when the
/// document is serialized. The url is acquired from a
/// [`DisplayRegistry`](crate::resource::DisplayRegistry) when the file is
/// attached and is released by the store when the record leaves the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
  pub id:          Uuid,
  #[serde(skip)]
  pub file:        Option<PhotoFile>,
  pub description: String,
  pub time:        String,
  pub location:    String,
  #[serde(skip)]
  pub url:         Option<DisplayUrl>,
}

impl Photo {
  pub fn new() -> Self {
    Self {
      id:          Uuid::new_v4(),
      file:        None,
      description: String::new(),
      time:        String::new(),
      location:    String::new(),
      url:         None,
    }
  }
}

// ─── Gambling activities ─────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GamblingActivity {
  pub id:          Uuid,
  /// Name of the venue, e.g. a betting shop or slot hall.
  pub location:    String,
  pub address:     String,
  pub start_time:  String,
  pub end_time:    String,
  pub description: String,
}

impl GamblingActivity {
  pub fn new() -> Self {
    Self {
      id:          Uuid::new_v4(),
      location:    String::new(),
      address:     String::new(),
      start_time:  String::new(),
      end_time:    String::new(),
      description: String::new(),
    }
  }
}

impl_record!(Vehicle, Location, ObservationDay, Photo, GamblingActivity);

// ─── Free-text and settings sections ─────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionalNotes {
  pub notes: String,
}

/// Where photos are narrated in the report.
#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
  strum::Display,
  strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum PhotoStrategy {
  /// Photos belong to the observation days they were taken on.
  #[default]
  PerDay,
  /// Photos are collected in a dossier attached to the report.
  SeparateDossier,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoManagement {
  pub photo_strategy: PhotoStrategy,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conclusions {
  pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Privacy {
  pub standard_message: String,
  pub custom_notes:     String,
}

impl Default for Privacy {
  fn default() -> Self {
    Self {
      standard_message: PRIVACY_NOTICE.to_string(),
      custom_notes:     String::new(),
    }
  }
}

// ─── Document ────────────────────────────────────────────────────────────────

/// The whole investigation record for one editing session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InvestigationDocument {
  pub client_info:         ClientInfo,
  pub investigated_info:   InvestigatedInfo,
  pub mandate_details:     MandateDetails,
  pub observation_days:    Vec<ObservationDay>,
  pub photos:              Vec<Photo>,
  pub gambling_activities: Vec<GamblingActivity>,
  pub additional_notes:    AdditionalNotes,
  pub photo_management:    PhotoManagement,
  pub conclusions:         Conclusions,
  pub privacy:             Privacy,
}

impl InvestigationDocument {
  /// Load a document from its JSON form. Missing sections take their
  /// defaults.
  pub fn from_json(input: &str) -> Result<Self> {
    Ok(serde_json::from_str(input)?)
  }

  /// Serialize the document as pretty-printed JSON. Photo files and display
  /// urls are not included.
  pub fn to_json_pretty(&self) -> Result<String> {
    Ok(serde_json::to_string_pretty(self)?)
  }

  /// Every display url currently held by a photo, in list order.
  pub fn display_urls(&self) -> impl Iterator<Item = &DisplayUrl> {
    self.photos.iter().filter_map(|p| p.url.as_ref())
  }
}

#[cfg(test)]
mod tests {
  use std::str::FromStr;

  use super::*;

  #[test]
  fn default_document_is_blank_apart_from_boilerplate() {
    let doc = InvestigationDocument::default();
    assert!(doc.client_info.full_name.is_empty());
    assert_eq!(doc.client_info.document_type, DEFAULT_DOCUMENT_TYPE);
    assert!(DOCUMENT_TYPES.contains(&DEFAULT_DOCUMENT_TYPE));
    assert!(doc.observation_days.is_empty());
    assert!(doc.photos.is_empty());
    assert_eq!(doc.photo_management.photo_strategy, PhotoStrategy::PerDay);
    assert_eq!(doc.privacy.standard_message, PRIVACY_NOTICE);
    assert!(doc.privacy.custom_notes.is_empty());
  }

  #[test]
  fn new_records_get_distinct_ids() {
    let a = ObservationDay::new();
    let b = ObservationDay::new();
    assert_ne!(a.id, b.id);
    assert_ne!(Photo::new().id, Photo::new().id);
  }

  #[test]
  fn enums_use_kebab_case_on_the_wire() {
    assert_eq!(PhotoStrategy::SeparateDossier.to_string(), "separate-dossier");
    assert_eq!(
      PhotoStrategy::from_str("per-day").unwrap(),
      PhotoStrategy::PerDay
    );
    let json = serde_json::to_string(&ObservationKind::Multiple).unwrap();
    assert_eq!(json, "\"multiple\"");
  }

  #[test]
  fn json_skips_session_only_photo_fields() {
    let mut doc = InvestigationDocument::default();
    let mut photo = Photo::new();
    photo.description = "ingresso".into();
    photo.url = Some(DisplayUrl::new("blob:test"));
    doc.photos.push(photo);

    let json = doc.to_json_pretty().unwrap();
    assert!(!json.contains("blob:test"), "url leaked into:\n{json}");

    let back = InvestigationDocument::from_json(&json).unwrap();
    assert_eq!(back.photos.len(), 1);
    assert_eq!(back.photos[0].description, "ingresso");
    assert!(back.photos[0].url.is_none());
  }

  #[test]
  fn partial_json_fills_missing_sections() {
    let doc = InvestigationDocument::from_json(
      r#"{ "clientInfo": { "fullName": "Maria Rossi", "address": "",
           "birthDate": "", "birthPlace": "", "documentType": "Passaporto",
           "documentNumber": "" } }"#,
    )
    .unwrap();
    assert_eq!(doc.client_info.full_name, "Maria Rossi");
    assert_eq!(doc.privacy.standard_message, PRIVACY_NOTICE);
  }
}
