//! Progress of a report towards completion.

use serde::Serialize;

use crate::document::InvestigationDocument;

/// How many of the report's milestones are filled in.
///
/// The milestones are the client's name, the investigated person's name, the
/// mandate's assignment date, at least one observation day, and the
/// conclusions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CompletionStats {
  pub completed:  usize,
  pub total:      usize,
  /// `completed / total` as a whole percentage, rounded half up.
  pub percentage: u8,
}

impl CompletionStats {
  pub fn of(doc: &InvestigationDocument) -> Self {
    let milestones = [
      !doc.client_info.full_name.is_empty(),
      !doc.investigated_info.full_name.is_empty(),
      !doc.mandate_details.assignment_date.is_empty(),
      !doc.observation_days.is_empty(),
      !doc.conclusions.text.is_empty(),
    ];
    let total = milestones.len();
    let completed = milestones.iter().filter(|done| **done).count();
    let percentage = ((completed * 200 + total) / (total * 2)) as u8;
    Self {
      completed,
      total,
      percentage,
    }
  }

  pub fn is_complete(&self) -> bool { self.completed == self.total }
}

/// Fields the form marks as required, by their document path.
pub const REQUIRED_FIELDS: &[&str] = &[
  "clientInfo.fullName",
  "clientInfo.address",
  "investigatedInfo.fullName",
  "mandateDetails.assignmentDate",
  "mandateDetails.investigationType",
  "mandateDetails.purpose",
  "conclusions.text",
];

/// Required fields that are still blank, in [`REQUIRED_FIELDS`] order.
pub fn missing_required(doc: &InvestigationDocument) -> Vec<&'static str> {
  let values = [
    &doc.client_info.full_name,
    &doc.client_info.address,
    &doc.investigated_info.full_name,
    &doc.mandate_details.assignment_date,
    &doc.mandate_details.investigation_type,
    &doc.mandate_details.purpose,
    &doc.conclusions.text,
  ];
  REQUIRED_FIELDS
    .iter()
    .zip(values)
    .filter(|(_, value)| value.trim().is_empty())
    .map(|(path, _)| *path)
    .collect()
}
