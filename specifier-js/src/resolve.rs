//! Module resolution against a host filesystem.
//!
//! The rewrite pipeline only depends on [`ModuleResolve`]; [`FsResolver`] is the
//! built-in implementation, following Node's `resolve` algorithm for relative
//! and absolute specifiers over a pluggable [`ResolveFs`].

use crate::path::{is_path_specifier, normalize_lexical};
use ahash::HashMap;
use serde_json::Value;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
  #[error("cannot find module `{specifier}` from `{}`", base_dir.display())]
  NotFound {
    specifier: String,
    base_dir: PathBuf,
  },
  #[error("`{specifier}` is not a relative or absolute specifier")]
  NonRelative { specifier: String },
  #[error("{0}")]
  Io(#[from] std::io::Error),
}

/// The external resolution function: find the file `specifier` refers to from
/// `base_dir`, trying each of `extensions` in order.
///
/// Implementations must return an absolute path on success.
pub trait ModuleResolve {
  fn resolve(
    &self,
    base_dir: &Path,
    specifier: &str,
    extensions: &[String],
  ) -> Result<PathBuf, ResolveError>;
}

impl<F> ModuleResolve for F
where
  F: Fn(&Path, &str, &[String]) -> Result<PathBuf, ResolveError>,
{
  fn resolve(
    &self,
    base_dir: &Path,
    specifier: &str,
    extensions: &[String],
  ) -> Result<PathBuf, ResolveError> {
    self(base_dir, specifier, extensions)
  }
}

/// The filesystem queries [`FsResolver`] makes while looking for a module file.
pub trait ResolveFs {
  fn is_file(&self, path: &Path) -> bool;
  fn is_dir(&self, path: &Path) -> bool;
  /// Only used for `package.json`; hosts without manifests can leave it.
  fn read_to_string(&self, _path: &Path) -> Option<String> {
    None
  }
  /// Used when symlinks are not preserved. The default keeps paths lexical.
  fn canonicalize(&self, path: &Path) -> Option<PathBuf> {
    Some(path.to_path_buf())
  }
}

/// Disk-backed queries.
#[derive(Clone, Debug, Default)]
pub struct RealFs;

impl ResolveFs for RealFs {
  fn is_file(&self, path: &Path) -> bool {
    path.is_file()
  }

  fn is_dir(&self, path: &Path) -> bool {
    path.is_dir()
  }

  fn read_to_string(&self, path: &Path) -> Option<String> {
    std::fs::read_to_string(path).ok()
  }

  fn canonicalize(&self, path: &Path) -> Option<PathBuf> {
    std::fs::canonicalize(path).ok()
  }
}

/// In-memory file tree. Directories exist implicitly as ancestors of files.
#[derive(Clone, Debug, Default)]
pub struct MemoryFs {
  files: HashMap<PathBuf, String>,
}

impl MemoryFs {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn insert(&mut self, path: impl Into<PathBuf>, contents: impl Into<String>) {
    self
      .files
      .insert(normalize_lexical(&path.into()), contents.into());
  }

  pub fn with_file(mut self, path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
    self.insert(path, contents);
    self
  }
}

impl ResolveFs for MemoryFs {
  fn is_file(&self, path: &Path) -> bool {
    self.files.contains_key(&normalize_lexical(path))
  }

  fn is_dir(&self, path: &Path) -> bool {
    let dir = normalize_lexical(path);
    self
      .files
      .keys()
      .any(|file| file != &dir && file.starts_with(&dir))
  }

  fn read_to_string(&self, path: &Path) -> Option<String> {
    self.files.get(&normalize_lexical(path)).cloned()
  }
}

#[derive(Clone, Copy, Debug)]
pub struct ResolveOptions {
  /// Keep resolved paths as joined rather than following symlinks.
  pub preserve_symlinks: bool,
}

impl Default for ResolveOptions {
  fn default() -> Self {
    Self {
      preserve_symlinks: true,
    }
  }
}

#[derive(Clone, Debug, Default)]
pub struct FsResolver<F = RealFs> {
  fs: F,
  options: ResolveOptions,
}

impl FsResolver<RealFs> {
  pub fn new(options: ResolveOptions) -> Self {
    Self { fs: RealFs, options }
  }
}

impl<F: ResolveFs> FsResolver<F> {
  pub fn with_fs(fs: F, options: ResolveOptions) -> Self {
    Self { fs, options }
  }

  fn finish(&self, found: PathBuf) -> PathBuf {
    if self.options.preserve_symlinks {
      return found;
    }
    self.fs.canonicalize(&found).unwrap_or(found)
  }

  fn load_as_file(&self, path: &Path, extensions: &[String]) -> Option<PathBuf> {
    if self.fs.is_file(path) {
      return Some(path.to_path_buf());
    }
    extensions.iter().find_map(|ext| {
      let candidate = with_suffix(path, ext);
      self.fs.is_file(&candidate).then_some(candidate)
    })
  }

  fn load_index(&self, dir: &Path, extensions: &[String]) -> Option<PathBuf> {
    extensions.iter().find_map(|ext| {
      let candidate = dir.join(format!("index{ext}"));
      self.fs.is_file(&candidate).then_some(candidate)
    })
  }

  fn load_as_directory(&self, dir: &Path, extensions: &[String]) -> Option<PathBuf> {
    if let Some(main) = self.package_main(dir) {
      let main = normalize_lexical(&dir.join(main));
      if let Some(found) = self.load_as_file(&main, extensions) {
        return Some(found);
      }
      if let Some(found) = self.load_index(&main, extensions) {
        return Some(found);
      }
    }
    self.load_index(dir, extensions)
  }

  fn package_main(&self, dir: &Path) -> Option<String> {
    let manifest = dir.join("package.json");
    if !self.fs.is_file(&manifest) {
      return None;
    }
    let raw = self.fs.read_to_string(&manifest)?;
    // A malformed manifest is ignored, like a missing `main`.
    let parsed: Value = serde_json::from_str(&raw).ok()?;
    match parsed.get("main")? {
      Value::String(main) if !main.is_empty() => Some(main.clone()),
      _ => None,
    }
  }
}

impl<F: ResolveFs> ModuleResolve for FsResolver<F> {
  fn resolve(
    &self,
    base_dir: &Path,
    specifier: &str,
    extensions: &[String],
  ) -> Result<PathBuf, ResolveError> {
    if !is_path_specifier(specifier) {
      return Err(ResolveError::NonRelative {
        specifier: specifier.to_string(),
      });
    }
    let target = normalize_lexical(&base_dir.join(specifier));
    let directory_only = specifier == "." || specifier == ".." || specifier.ends_with('/');
    if !directory_only {
      if let Some(found) = self.load_as_file(&target, extensions) {
        return Ok(self.finish(found));
      }
    }
    if self.fs.is_dir(&target) {
      if let Some(found) = self.load_as_directory(&target, extensions) {
        return Ok(self.finish(found));
      }
    }
    Err(ResolveError::NotFound {
      specifier: specifier.to_string(),
      base_dir: base_dir.to_path_buf(),
    })
  }
}

/// Appends `suffix` to the final component, e.g. `foo` + `.ts` = `foo.ts`.
fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
  let mut raw: OsString = path.as_os_str().to_owned();
  raw.push(suffix);
  PathBuf::from(raw)
}
