//! Document model and editing state for investigation reports.
//!
//! An [`InvestigationStore`] owns one [`InvestigationDocument`] for the length
//! of an editing session. Edits arrive as typed [`Edit`] values, are turned
//! into whole-section replacements by the editors in [`edit`], and are merged
//! by [`InvestigationStore::update`]. Rendering lives in `dossier-report`.

pub mod completion;
pub mod document;
pub mod edit;
pub mod error;
pub mod resource;
pub mod store;

pub use completion::{CompletionStats, missing_required};
pub use document::InvestigationDocument;
pub use edit::Edit;
pub use error::{Error, Result};
pub use store::{DocumentPatch, InvestigationStore};
