//! A filled-in example document, assembled through the same edit events the
//! form produces.

use bytes::Bytes;
use dossier_core::{
  Edit, InvestigationDocument, InvestigationStore,
  document::{ObservationKind, PhotoStrategy},
  edit::{
    ClientInfoField, GamblingActivityEdit, GamblingActivityField,
    InvestigatedEdit, InvestigatedField, LocationField, MandateField,
    ObservationDayEdit, ObservationDayField, PhotoEdit, PhotoField,
    VehicleField,
  },
  resource::PhotoFile,
};

pub fn build() -> InvestigationDocument {
  let mut store = InvestigationStore::default();

  for field in [
    ClientInfoField::FullName("Maria Rossi".into()),
    ClientInfoField::Address("Via Garibaldi 12, 20121 Milano".into()),
    ClientInfoField::BirthDate("1978-09-21".into()),
    ClientInfoField::BirthPlace("Bergamo".into()),
    ClientInfoField::DocumentNumber("CA12345AB".into()),
  ] {
    store.apply(Edit::ClientInfo(field));
  }

  for field in [
    InvestigatedField::FullName("Paolo Rossi".into()),
    InvestigatedField::Address("Via Garibaldi 12, 20121 Milano".into()),
  ] {
    store.apply(Edit::InvestigatedInfo(InvestigatedEdit::Field(field)));
  }
  if let Some(vehicle) =
    store.apply(Edit::InvestigatedInfo(InvestigatedEdit::AddVehicle))
  {
    for field in [
      VehicleField::Model("Fiat Panda".into()),
      VehicleField::Color("Bianco".into()),
      VehicleField::LicensePlate("AB123CD".into()),
    ] {
      store.apply(Edit::InvestigatedInfo(InvestigatedEdit::UpdateVehicle(
        vehicle, field,
      )));
    }
  }

  for field in [
    MandateField::AssignmentDate("2024-03-01".into()),
    MandateField::InvestigationType("Verifica comportamenti".into()),
    MandateField::Purpose(
      "Accertare la frequentazione abituale di sale da gioco.".into(),
    ),
    MandateField::ProtectedRights("Tutela del patrimonio familiare.".into()),
  ] {
    store.apply(Edit::MandateDetails(field));
  }

  if let Some(day) = store.apply(Edit::ObservationDays(ObservationDayEdit::Add))
  {
    for field in [
      ObservationDayField::Kind(ObservationKind::Single),
      ObservationDayField::Date("2024-03-10".into()),
      ObservationDayField::StartTime("09:00".into()),
      ObservationDayField::EndTime("12:00".into()),
    ] {
      store.apply(Edit::ObservationDays(ObservationDayEdit::Update(day, field)));
    }
    if let Some(location) =
      store.apply(Edit::ObservationDays(ObservationDayEdit::AddLocation { day }))
    {
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
    }
  }

  if let Some(activity) =
    store.apply(Edit::GamblingActivities(GamblingActivityEdit::Add))
  {
    for field in [
      GamblingActivityField::Location("Sala Slot Jolly".into()),
      GamblingActivityField::Address("Via Milano 4".into()),
      GamblingActivityField::StartTime("21:00".into()),
      GamblingActivityField::EndTime("23:15".into()),
    ] {
      store.apply(Edit::GamblingActivities(GamblingActivityEdit::Update(
        activity, field,
      )));
    }
  }

  if let Some(photo) = store.apply(Edit::Photos(PhotoEdit::Add)) {
    store.apply(Edit::Photos(PhotoEdit::Update(
      photo,
      PhotoField::Description("Ingresso del Bar Centrale".into()),
    )));
    store.attach_photo_file(
      photo,
      PhotoFile::new("ingresso.jpg", "image/jpeg", Bytes::from_static(b"\xff\xd8\xff")),
    );
  }

  store.apply(Edit::PhotoStrategy(PhotoStrategy::SeparateDossier));
  store.apply(Edit::Conclusions(
    "Il soggetto frequenta con regolarità locali dedicati al gioco.".into(),
  ));

  // Handles belong to this store's registry, which is dropped here.
  let mut doc = store.document().clone();
  for photo in &mut doc.photos {
    photo.file = None;
    photo.url = None;
  }
  doc
}
