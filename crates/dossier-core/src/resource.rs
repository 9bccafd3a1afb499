//! Photo files and the display handles derived from them.
//!
//! A [`DisplayUrl`] stands in for a preview reference backed by some outside
//! resource (a browser object url, a temp file, a cache slot). It is acquired
//! from a [`DisplayRegistry`] when a file is attached to a photo and must be
//! released exactly once, when the photo leaves the document or its file is
//! replaced. The store in [`crate::store`] is the only caller of `release`.

use std::{collections::HashMap, fmt};

use bytes::Bytes;
use uuid::Uuid;

use crate::{Error, Result};

/// An opaque, revocable reference to a displayable photo.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DisplayUrl(String);

impl DisplayUrl {
  pub fn new(url: impl Into<String>) -> Self { Self(url.into()) }
}

impl fmt::Display for DisplayUrl {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

/// The binary content of an attached photo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoFile {
  /// Original file name as supplied by the user.
  pub name:       String,
  pub media_type: String,
  pub bytes:      Bytes,
}

impl PhotoFile {
  pub fn new(
    name: impl Into<String>,
    media_type: impl Into<String>,
    bytes: impl Into<Bytes>,
  ) -> Self {
    Self {
      name:       name.into(),
      media_type: media_type.into(),
      bytes:      bytes.into(),
    }
  }

  pub fn len(&self) -> usize { self.bytes.len() }

  pub fn is_empty(&self) -> bool { self.bytes.is_empty() }
}

// ─── Registry ────────────────────────────────────────────────────────────────

/// Hands out display urls for photo files and takes them back.
pub trait DisplayRegistry {
  /// Create a new display reference for `file`. Every call yields a url that
  /// has never been handed out before.
  fn acquire(&mut self, file: &PhotoFile) -> DisplayUrl;

  /// Revoke a reference previously returned by [`acquire`](Self::acquire).
  fn release(&mut self, url: &DisplayUrl) -> Result<()>;
}

/// In-process registry that keeps a copy of each live file keyed by its url.
#[derive(Debug, Default)]
pub struct MemoryRegistry {
  live:     HashMap<DisplayUrl, PhotoFile>,
  released: usize,
}

impl MemoryRegistry {
  pub fn new() -> Self { Self::default() }

  /// Number of urls acquired and not yet released.
  pub fn live_count(&self) -> usize { self.live.len() }

  /// Number of successful releases so far.
  pub fn released_count(&self) -> usize { self.released }

  pub fn is_live(&self, url: &DisplayUrl) -> bool {
    self.live.contains_key(url)
  }

  /// The file a live url points at, as a preview would fetch it.
  pub fn resolve(&self, url: &DisplayUrl) -> Option<&PhotoFile> {
    self.live.get(url)
  }
}

impl DisplayRegistry for MemoryRegistry {
  fn acquire(&mut self, file: &PhotoFile) -> DisplayUrl {
    let url = DisplayUrl::new(format!("blob:dossier/{}", Uuid::new_v4()));
    self.live.insert(url.clone(), file.clone());
    url
  }

  fn release(&mut self, url: &DisplayUrl) -> Result<()> {
    match self.live.remove(url) {
      Some(_) => {
        self.released += 1;
        Ok(())
      }
      None => Err(Error::ReleaseFailed(url.clone())),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn jpeg() -> PhotoFile {
    PhotoFile::new("ingresso.jpg", "image/jpeg", &b"\xff\xd8\xff"[..])
  }

  #[test]
  fn acquire_hands_out_fresh_urls() {
    let mut registry = MemoryRegistry::new();
    let a = registry.acquire(&jpeg());
    let b = registry.acquire(&jpeg());
    assert_ne!(a, b);
    assert_eq!(registry.live_count(), 2);
    assert_eq!(registry.resolve(&a).map(PhotoFile::len), Some(3));
  }

  #[test]
  fn release_is_accepted_once() {
    let mut registry = MemoryRegistry::new();
    let url = registry.acquire(&jpeg());

    registry.release(&url).unwrap();
    assert!(!registry.is_live(&url));
    assert_eq!(registry.released_count(), 1);

    let err = registry.release(&url).unwrap_err();
    assert!(matches!(err, Error::ReleaseFailed(u) if u == url));
    assert_eq!(registry.released_count(), 1);
  }
}
