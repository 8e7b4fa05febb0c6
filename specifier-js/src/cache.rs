use crate::session::Rewrite;
use ahash::HashMap;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct CacheKey {
  dir: PathBuf,
  specifier: String,
}

/// Memoized rewrites keyed by importing directory and raw specifier.
///
/// Entries are never invalidated; the filesystem is assumed not to change for
/// the lifetime of the owning session.
#[derive(Debug, Default)]
pub struct ResolutionCache {
  entries: HashMap<CacheKey, Rewrite>,
  hits: u64,
  misses: u64,
}

impl ResolutionCache {
  pub fn new() -> Self {
    Self::default()
  }

  /// Returns the cached rewrite, running `compute` only if the pair has not
  /// been seen before.
  pub fn get_or_compute<F>(&mut self, dir: &Path, specifier: &str, compute: F) -> Rewrite
  where
    F: FnOnce() -> Rewrite,
  {
    let key = CacheKey {
      dir: dir.to_path_buf(),
      specifier: specifier.to_string(),
    };
    if let Some(cached) = self.entries.get(&key) {
      self.hits += 1;
      tracing::trace!(specifier, dir = %dir.display(), "resolution cache hit");
      return cached.clone();
    }
    self.misses += 1;
    let computed = compute();
    self.entries.insert(key, computed.clone());
    computed
  }

  pub fn get(&self, dir: &Path, specifier: &str) -> Option<&Rewrite> {
    self.entries.get(&CacheKey {
      dir: dir.to_path_buf(),
      specifier: specifier.to_string(),
    })
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  pub fn hits(&self) -> u64 {
    self.hits
  }

  pub fn misses(&self) -> u64 {
    self.misses
  }
}
