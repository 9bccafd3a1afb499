//! Section editors.
//!
//! Each editor reads the current value of one section and returns its
//! replacement; the store merges that replacement as a partial update. Field
//! changes are closed enums per section, so an edit can only ever touch a
//! field that exists.
//!
//! Collection sections share three operations: [`add`], [`remove`] and
//! [`update`]. New records go to the end, removal keeps the relative order of
//! the rest, and an unknown id leaves the collection as it was.

use uuid::Uuid;

use crate::document::{
  ClientInfo, GamblingActivity, InvestigatedInfo, Location, MandateDetails,
  ObservationDay, ObservationKind, Photo, PhotoStrategy, Privacy, Record,
  Vehicle,
};

// ─── Collection operations ───────────────────────────────────────────────────

/// Append `record` and return the updated collection.
pub fn add<T: Record + Clone>(items: &[T], record: T) -> Vec<T> {
  let mut out = items.to_vec();
  out.push(record);
  out
}

/// Drop the record with `id`, if any.
pub fn remove<T: Record + Clone>(items: &[T], id: Uuid) -> Vec<T> {
  items.iter().filter(|r| r.id() != id).cloned().collect()
}

/// Apply `change` to the record with `id`, if any.
pub fn update<T, F>(items: &[T], id: Uuid, change: F) -> Vec<T>
where
  T: Record + Clone,
  F: FnOnce(&mut T),
{
  let mut out = items.to_vec();
  if let Some(record) = out.iter_mut().find(|r| r.id() == id) {
    change(record);
  }
  out
}

// ─── Field changes ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientInfoField {
  FullName(String),
  Address(String),
  BirthDate(String),
  BirthPlace(String),
  DocumentType(String),
  DocumentNumber(String),
}

impl ClientInfoField {
  fn apply(self, info: &mut ClientInfo) {
    match self {
      Self::FullName(v) => info.full_name = v,
      Self::Address(v) => info.address = v,
      Self::BirthDate(v) => info.birth_date = v,
      Self::BirthPlace(v) => info.birth_place = v,
      Self::DocumentType(v) => info.document_type = v,
      Self::DocumentNumber(v) => info.document_number = v,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvestigatedField {
  FullName(String),
  Address(String),
  BirthDate(String),
  BirthPlace(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VehicleField {
  Model(String),
  Color(String),
  LicensePlate(String),
}

impl VehicleField {
  fn apply(self, vehicle: &mut Vehicle) {
    match self {
      Self::Model(v) => vehicle.model = v,
      Self::Color(v) => vehicle.color = v,
      Self::LicensePlate(v) => vehicle.license_plate = v,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MandateField {
  AssignmentDate(String),
  InvestigationType(String),
  Purpose(String),
  ProtectedRights(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObservationDayField {
  Kind(ObservationKind),
  Date(String),
  StartTime(String),
  EndTime(String),
  Description(String),
}

impl ObservationDayField {
  fn apply(self, day: &mut ObservationDay) {
    match self {
      Self::Kind(v) => day.kind = v,
      Self::Date(v) => day.date = v,
      Self::StartTime(v) => day.start_time = v,
      Self::EndTime(v) => day.end_time = v,
      Self::Description(v) => day.description = v,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationField {
  PlaceName(String),
  Address(String),
}

impl LocationField {
  fn apply(self, location: &mut Location) {
    match self {
      Self::PlaceName(v) => location.place_name = v,
      Self::Address(v) => location.address = v,
    }
  }
}

/// Text fields of a photo. Files are attached through
/// [`InvestigationStore::attach_photo_file`](crate::store::InvestigationStore::attach_photo_file).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhotoField {
  Description(String),
  Time(String),
  Location(String),
}

impl PhotoField {
  fn apply(self, photo: &mut Photo) {
    match self {
      Self::Description(v) => photo.description = v,
      Self::Time(v) => photo.time = v,
      Self::Location(v) => photo.location = v,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GamblingActivityField {
  Location(String),
  Address(String),
  StartTime(String),
  EndTime(String),
  Description(String),
}

impl GamblingActivityField {
  fn apply(self, activity: &mut GamblingActivity) {
    match self {
      Self::Location(v) => activity.location = v,
      Self::Address(v) => activity.address = v,
      Self::StartTime(v) => activity.start_time = v,
      Self::EndTime(v) => activity.end_time = v,
      Self::Description(v) => activity.description = v,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrivacyField {
  StandardMessage(String),
  CustomNotes(String),
}

// ─── Section edits ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvestigatedEdit {
  Field(InvestigatedField),
  AddVehicle,
  RemoveVehicle(Uuid),
  UpdateVehicle(Uuid, VehicleField),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObservationDayEdit {
  Add,
  Remove(Uuid),
  Update(Uuid, ObservationDayField),
  AddLocation { day: Uuid },
  RemoveLocation { day: Uuid, location: Uuid },
  UpdateLocation {
    day:      Uuid,
    location: Uuid,
    field:    LocationField,
  },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhotoEdit {
  Add,
  Remove(Uuid),
  Update(Uuid, PhotoField),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GamblingActivityEdit {
  Add,
  Remove(Uuid),
  Update(Uuid, GamblingActivityField),
}

/// One user edit, addressed to a single section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
  ClientInfo(ClientInfoField),
  InvestigatedInfo(InvestigatedEdit),
  MandateDetails(MandateField),
  ObservationDays(ObservationDayEdit),
  Photos(PhotoEdit),
  GamblingActivities(GamblingActivityEdit),
  AdditionalNotes(String),
  PhotoStrategy(PhotoStrategy),
  Conclusions(String),
  Privacy(PrivacyField),
}

// ─── Editors ─────────────────────────────────────────────────────────────────

pub fn edit_client_info(info: &ClientInfo, field: ClientInfoField) -> ClientInfo {
  let mut out = info.clone();
  field.apply(&mut out);
  out
}

pub fn edit_investigated_info(
  info: &InvestigatedInfo,
  edit: InvestigatedEdit,
) -> InvestigatedInfo {
  let mut out = info.clone();
  match edit {
    InvestigatedEdit::Field(field) => match field {
      InvestigatedField::FullName(v) => out.full_name = v,
      InvestigatedField::Address(v) => out.address = v,
      InvestigatedField::BirthDate(v) => out.birth_date = v,
      InvestigatedField::BirthPlace(v) => out.birth_place = v,
    },
    InvestigatedEdit::AddVehicle => {
      out.vehicles = add(&info.vehicles, Vehicle::new());
    }
    InvestigatedEdit::RemoveVehicle(id) => {
      out.vehicles = remove(&info.vehicles, id);
    }
    InvestigatedEdit::UpdateVehicle(id, field) => {
      out.vehicles = update(&info.vehicles, id, |v| field.apply(v));
    }
  }
  out
}

pub fn edit_mandate_details(
  mandate: &MandateDetails,
  field: MandateField,
) -> MandateDetails {
  let mut out = mandate.clone();
  match field {
    MandateField::AssignmentDate(v) => out.assignment_date = v,
    MandateField::InvestigationType(v) => out.investigation_type = v,
    MandateField::Purpose(v) => out.purpose = v,
    MandateField::ProtectedRights(v) => out.protected_rights = v,
  }
  out
}

pub fn edit_observation_days(
  days: &[ObservationDay],
  edit: ObservationDayEdit,
) -> Vec<ObservationDay> {
  match edit {
    ObservationDayEdit::Add => add(days, ObservationDay::new()),
    ObservationDayEdit::Remove(id) => remove(days, id),
    ObservationDayEdit::Update(id, field) => {
      update(days, id, |d| field.apply(d))
    }
    ObservationDayEdit::AddLocation { day } => update(days, day, |d| {
      d.locations = add(&d.locations, Location::new());
    }),
    ObservationDayEdit::RemoveLocation { day, location } => {
      update(days, day, |d| d.locations = remove(&d.locations, location))
    }
    ObservationDayEdit::UpdateLocation {
      day,
      location,
      field,
    } => update(days, day, |d| {
      d.locations = update(&d.locations, location, |l| field.apply(l));
    }),
  }
}

pub fn edit_photos(photos: &[Photo], edit: PhotoEdit) -> Vec<Photo> {
  match edit {
    PhotoEdit::Add => add(photos, Photo::new()),
    PhotoEdit::Remove(id) => remove(photos, id),
    PhotoEdit::Update(id, field) => update(photos, id, |p| field.apply(p)),
  }
}

pub fn edit_gambling_activities(
  activities: &[GamblingActivity],
  edit: GamblingActivityEdit,
) -> Vec<GamblingActivity> {
  match edit {
    GamblingActivityEdit::Add => add(activities, GamblingActivity::new()),
    GamblingActivityEdit::Remove(id) => remove(activities, id),
    GamblingActivityEdit::Update(id, field) => {
      update(activities, id, |a| field.apply(a))
    }
  }
}

pub fn edit_privacy(privacy: &Privacy, field: PrivacyField) -> Privacy {
  let mut out = privacy.clone();
  match field {
    PrivacyField::StandardMessage(v) => out.standard_message = v,
    PrivacyField::CustomNotes(v) => out.custom_notes = v,
  }
  out
}
