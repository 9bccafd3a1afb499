//! The investigation store: one owned document plus the registry backing its
//! photo display urls.
//!
//! Callers hold the store explicitly and pass it where edits happen. All
//! operations are synchronous and total.

use std::collections::HashSet;

use tracing::{debug, warn};
use uuid::Uuid;

use crate::{
  document::{
    AdditionalNotes, ClientInfo, Conclusions, GamblingActivity,
    InvestigatedInfo, InvestigationDocument, MandateDetails, ObservationDay,
    Photo, PhotoManagement, Privacy, Record,
  },
  edit::{self, Edit, GamblingActivityEdit, ObservationDayEdit, PhotoEdit},
  resource::{DisplayRegistry, DisplayUrl, MemoryRegistry, PhotoFile},
};

// ─── Partial update ──────────────────────────────────────────────────────────

/// A set of whole-section replacements. Sections left as `None` are not
/// touched by [`InvestigationStore::update`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentPatch {
  pub client_info:         Option<ClientInfo>,
  pub investigated_info:   Option<InvestigatedInfo>,
  pub mandate_details:     Option<MandateDetails>,
  pub observation_days:    Option<Vec<ObservationDay>>,
  pub photos:              Option<Vec<Photo>>,
  pub gambling_activities: Option<Vec<GamblingActivity>>,
  pub additional_notes:    Option<AdditionalNotes>,
  pub photo_management:    Option<PhotoManagement>,
  pub conclusions:         Option<Conclusions>,
  pub privacy:             Option<Privacy>,
}

impl DocumentPatch {
  /// Names of the sections this patch replaces, in document order.
  pub fn sections(&self) -> Vec<&'static str> {
    let present = [
      ("clientInfo", self.client_info.is_some()),
      ("investigatedInfo", self.investigated_info.is_some()),
      ("mandateDetails", self.mandate_details.is_some()),
      ("observationDays", self.observation_days.is_some()),
      ("photos", self.photos.is_some()),
      ("gamblingActivities", self.gambling_activities.is_some()),
      ("additionalNotes", self.additional_notes.is_some()),
      ("photoManagement", self.photo_management.is_some()),
      ("conclusions", self.conclusions.is_some()),
      ("privacy", self.privacy.is_some()),
    ];
    present
      .into_iter()
      .filter_map(|(name, some)| some.then_some(name))
      .collect()
  }

  pub fn is_empty(&self) -> bool { self.sections().is_empty() }
}

impl From<InvestigationDocument> for DocumentPatch {
  /// A patch that replaces every section.
  fn from(doc: InvestigationDocument) -> Self {
    Self {
      client_info:         Some(doc.client_info),
      investigated_info:   Some(doc.investigated_info),
      mandate_details:     Some(doc.mandate_details),
      observation_days:    Some(doc.observation_days),
      photos:              Some(doc.photos),
      gambling_activities: Some(doc.gambling_activities),
      additional_notes:    Some(doc.additional_notes),
      photo_management:    Some(doc.photo_management),
      conclusions:         Some(doc.conclusions),
      privacy:             Some(doc.privacy),
    }
  }
}

// ─── Store ───────────────────────────────────────────────────────────────────

pub struct InvestigationStore<R: DisplayRegistry = MemoryRegistry> {
  document: InvestigationDocument,
  registry: R,
}

impl Default for InvestigationStore<MemoryRegistry> {
  fn default() -> Self { Self::new(MemoryRegistry::new()) }
}

impl<R: DisplayRegistry> InvestigationStore<R> {
  /// Start a session with the default document.
  pub fn new(registry: R) -> Self {
    Self {
      document: InvestigationDocument::default(),
      registry,
    }
  }

  pub fn document(&self) -> &InvestigationDocument { &self.document }

  pub fn registry(&self) -> &R { &self.registry }

  /// Replace every section named in `patch`; leave the rest untouched.
  ///
  /// When photos are replaced, display urls held by the outgoing list and
  /// absent from the incoming one are released.
  pub fn update(&mut self, patch: DocumentPatch) {
    debug!(sections = ?patch.sections(), "updating investigation document");

    let DocumentPatch {
      client_info,
      investigated_info,
      mandate_details,
      observation_days,
      photos,
      gambling_activities,
      additional_notes,
      photo_management,
      conclusions,
      privacy,
    } = patch;

    if let Some(photos) = photos {
      let kept: HashSet<&DisplayUrl> =
        photos.iter().filter_map(|p| p.url.as_ref()).collect();
      let dropped: Vec<DisplayUrl> = self
        .document
        .display_urls()
        .filter(|url| !kept.contains(url))
        .cloned()
        .collect();
      for url in &dropped {
        self.release(url);
      }
      self.document.photos = photos;
    }

    let doc = &mut self.document;
    if let Some(v) = client_info {
      doc.client_info = v;
    }
    if let Some(v) = investigated_info {
      doc.investigated_info = v;
    }
    if let Some(v) = mandate_details {
      doc.mandate_details = v;
    }
    if let Some(v) = observation_days {
      doc.observation_days = v;
    }
    if let Some(v) = gambling_activities {
      doc.gambling_activities = v;
    }
    if let Some(v) = additional_notes {
      doc.additional_notes = v;
    }
    if let Some(v) = photo_management {
      doc.photo_management = v;
    }
    if let Some(v) = conclusions {
      doc.conclusions = v;
    }
    if let Some(v) = privacy {
      doc.privacy = v;
    }
  }

  /// Discard all edits and return to the default document, releasing every
  /// display url still held by a photo.
  pub fn reset(&mut self) {
    let outstanding: Vec<DisplayUrl> =
      self.document.display_urls().cloned().collect();
    debug!(released = outstanding.len(), "resetting investigation document");
    for url in &outstanding {
      self.release(url);
    }
    self.document = InvestigationDocument::default();
  }

  /// Run one edit through its section editor and merge the result.
  ///
  /// Returns the id of the record the edit created, if it created one.
  pub fn apply(&mut self, edit: Edit) -> Option<Uuid> {
    let doc = &self.document;
    let mut created = None;

    let patch = match edit {
      Edit::ClientInfo(field) => DocumentPatch {
        client_info: Some(edit::edit_client_info(&doc.client_info, field)),
        ..Default::default()
      },
      Edit::InvestigatedInfo(e) => {
        let adds = matches!(e, edit::InvestigatedEdit::AddVehicle);
        let info = edit::edit_investigated_info(&doc.investigated_info, e);
        if adds {
          created = info.vehicles.last().map(Record::id);
        }
        DocumentPatch {
          investigated_info: Some(info),
          ..Default::default()
        }
      }
      Edit::MandateDetails(field) => DocumentPatch {
        mandate_details: Some(edit::edit_mandate_details(
          &doc.mandate_details,
          field,
        )),
        ..Default::default()
      },
      Edit::ObservationDays(e) => {
        let added_to = match &e {
          ObservationDayEdit::Add => Some(None),
          ObservationDayEdit::AddLocation { day } => Some(Some(*day)),
          _ => None,
        };
        let days = edit::edit_observation_days(&doc.observation_days, e);
        created = match added_to {
          Some(None) => days.last().map(Record::id),
          Some(Some(day)) => days
            .iter()
            .find(|d| d.id == day)
            .and_then(|d| d.locations.last())
            .map(Record::id),
          None => None,
        };
        DocumentPatch {
          observation_days: Some(days),
          ..Default::default()
        }
      }
      Edit::Photos(e) => {
        let adds = matches!(e, PhotoEdit::Add);
        let photos = edit::edit_photos(&doc.photos, e);
        if adds {
          created = photos.last().map(Record::id);
        }
        DocumentPatch {
          photos: Some(photos),
          ..Default::default()
        }
      }
      Edit::GamblingActivities(e) => {
        let adds = matches!(e, GamblingActivityEdit::Add);
        let activities =
          edit::edit_gambling_activities(&doc.gambling_activities, e);
        if adds {
          created = activities.last().map(Record::id);
        }
        DocumentPatch {
          gambling_activities: Some(activities),
          ..Default::default()
        }
      }
      Edit::AdditionalNotes(notes) => DocumentPatch {
        additional_notes: Some(AdditionalNotes { notes }),
        ..Default::default()
      },
      Edit::PhotoStrategy(photo_strategy) => DocumentPatch {
        photo_management: Some(PhotoManagement { photo_strategy }),
        ..Default::default()
      },
      Edit::Conclusions(text) => DocumentPatch {
        conclusions: Some(Conclusions { text }),
        ..Default::default()
      },
      Edit::Privacy(field) => DocumentPatch {
        privacy: Some(edit::edit_privacy(&doc.privacy, field)),
        ..Default::default()
      },
    };

    self.update(patch);
    created
  }

  /// Attach `file` to the photo with `photo_id`, replacing any earlier file.
  ///
  /// A fresh display url is acquired for the new file; the previous url, if
  /// any, is released. Returns `false` without touching the registry when no
  /// photo has that id.
  pub fn attach_photo_file(&mut self, photo_id: Uuid, file: PhotoFile) -> bool {
    if !self.document.photos.iter().any(|p| p.id == photo_id) {
      debug!(%photo_id, "ignoring file for unknown photo");
      return false;
    }

    let url = self.registry.acquire(&file);
    let photos = edit::update(&self.document.photos, photo_id, |p| {
      p.file = Some(file);
      p.url = Some(url);
    });
    self.update(DocumentPatch {
      photos: Some(photos),
      ..Default::default()
    });
    true
  }

  fn release(&mut self, url: &DisplayUrl) {
    if let Err(error) = self.registry.release(url) {
      warn!(%url, %error, "failed to release photo display url");
    }
  }
}
