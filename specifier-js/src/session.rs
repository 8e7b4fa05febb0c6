use crate::cache::ResolutionCache;
use crate::options::{ExtensionMap, RewriteOptions};
use crate::output::{map_output_path, relativize};
use crate::resolve::{FsResolver, ModuleResolve, RealFs, ResolveOptions};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// The replacement chosen for one specifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rewrite {
  /// Resolved, mapped to the output file, and made relative again.
  Resolved(String),
  /// Resolution miss; carries the original specifier unchanged.
  Miss(String),
}

impl Rewrite {
  pub fn specifier(&self) -> &str {
    match self {
      Rewrite::Resolved(s) | Rewrite::Miss(s) => s,
    }
  }

  pub fn is_miss(&self) -> bool {
    matches!(self, Rewrite::Miss(_))
  }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SessionStats {
  /// Eligible declarations seen.
  pub eligible: u64,
  /// Eligible declarations whose specifier text changed.
  pub rewritten: u64,
  /// Eligible declarations whose specifier could not be resolved.
  pub misses: u64,
  pub cache_hits: u64,
}

/// State for one compilation run. Create one per run and drop it afterwards;
/// the cache assumes the filesystem does not change while it is alive.
pub struct RewriteSession<R = FsResolver<RealFs>> {
  extension_map: ExtensionMap,
  extensions: Vec<String>,
  resolver: R,
  cache: ResolutionCache,
  stats: SessionStats,
}

impl RewriteSession<FsResolver<RealFs>> {
  /// A session resolving against the real filesystem.
  pub fn new(options: RewriteOptions) -> Self {
    Self::with_resolver(options, FsResolver::new(ResolveOptions::default()))
  }
}

impl<R: ModuleResolve> RewriteSession<R> {
  pub fn with_resolver(options: RewriteOptions, resolver: R) -> Self {
    let extension_map = options.extension_mapping;
    Self {
      extensions: extension_map.source_extensions(),
      extension_map,
      resolver,
      cache: ResolutionCache::new(),
      stats: SessionStats::default(),
    }
  }

  pub fn extension_map(&self) -> &ExtensionMap {
    &self.extension_map
  }

  pub fn resolver(&self) -> &R {
    &self.resolver
  }

  pub fn cache(&self) -> &ResolutionCache {
    &self.cache
  }

  pub fn stats(&self) -> SessionStats {
    SessionStats {
      cache_hits: self.cache.hits(),
      ..self.stats
    }
  }

  /// Computes the replacement for an eligible `specifier` imported from a file
  /// in `source_dir`, consulting the cache first.
  pub fn rewrite_specifier(&mut self, source_dir: &Path, specifier: &str) -> Rewrite {
    let Self {
      extension_map,
      extensions,
      resolver,
      cache,
      stats,
    } = self;
    let rewrite = cache.get_or_compute(source_dir, specifier, || {
      compute_rewrite(resolver, extension_map, extensions, source_dir, specifier)
    });
    stats.eligible += 1;
    if rewrite.is_miss() {
      stats.misses += 1;
    } else if rewrite.specifier() != specifier {
      stats.rewritten += 1;
    }
    rewrite
  }
}

/// Resolution outcome of a single lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolved {
  File(PathBuf),
  Miss,
}

/// Asks `resolver` for the file behind `specifier`. Errors and non-absolute
/// answers both count as a miss.
pub fn resolve_specifier<R: ModuleResolve + ?Sized>(
  resolver: &R,
  base_dir: &Path,
  specifier: &str,
  extensions: &[String],
) -> Resolved {
  match resolver.resolve(base_dir, specifier, extensions) {
    Ok(path) if path.is_absolute() => Resolved::File(path),
    Ok(path) => {
      tracing::debug!(
        specifier,
        dir = %base_dir.display(),
        resolved = %path.display(),
        "resolver returned a relative path; treating as resolution miss"
      );
      Resolved::Miss
    }
    Err(error) => {
      tracing::debug!(
        specifier,
        dir = %base_dir.display(),
        %error,
        "resolution miss"
      );
      Resolved::Miss
    }
  }
}

fn compute_rewrite<R: ModuleResolve>(
  resolver: &R,
  extension_map: &ExtensionMap,
  extensions: &[String],
  source_dir: &Path,
  specifier: &str,
) -> Rewrite {
  match resolve_specifier(resolver, source_dir, specifier, extensions) {
    Resolved::File(path) => {
      let output = map_output_path(&path, extension_map);
      Rewrite::Resolved(relativize(source_dir, &output))
    }
    Resolved::Miss => Rewrite::Miss(specifier.to_string()),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::resolve::{MemoryFs, ResolveError};
  use std::cell::Cell;

  fn memory_session(fs: MemoryFs) -> RewriteSession<FsResolver<MemoryFs>> {
    RewriteSession::with_resolver(
      RewriteOptions::default(),
      FsResolver::with_fs(fs, ResolveOptions::default()),
    )
  }

  #[test]
  fn rewrites_to_output_extension() {
    let mut session = memory_session(MemoryFs::new().with_file("/proj/src/foo.ts", ""));
    assert_eq!(
      session.rewrite_specifier(Path::new("/proj/src"), "./foo"),
      Rewrite::Resolved("./foo.js".to_string())
    );
    assert_eq!(session.extension_map(), &ExtensionMap::default());
    assert_eq!(
      session
        .resolver()
        .resolve(Path::new("/proj/src"), "./foo", &[".ts".to_string()])
        .unwrap(),
      PathBuf::from("/proj/src/foo.ts")
    );
  }

  #[test]
  fn miss_keeps_original_text() {
    let mut session = memory_session(MemoryFs::new());
    let rewrite = session.rewrite_specifier(Path::new("/proj/src"), "./missing");
    assert_eq!(rewrite, Rewrite::Miss("./missing".to_string()));
    assert_eq!(session.stats().misses, 1);
  }

  #[test]
  fn unmapped_extension_keeps_resolved_file_name() {
    let mut session = memory_session(MemoryFs::new().with_file("/proj/lib/data", ""));
    assert_eq!(
      session.rewrite_specifier(Path::new("/proj/src"), "../lib/data"),
      Rewrite::Resolved("../lib/data".to_string())
    );
    let stats = session.stats();
    assert_eq!((stats.eligible, stats.rewritten, stats.misses), (1, 0, 0));
  }

  #[test]
  fn resolver_runs_once_per_directory_and_specifier() {
    let calls = Cell::new(0);
    let resolver = |dir: &Path, specifier: &str, _: &[String]| -> Result<PathBuf, ResolveError> {
      calls.set(calls.get() + 1);
      Ok(dir.join(format!("{}.ts", specifier.trim_start_matches("./"))))
    };
    let mut session = RewriteSession::with_resolver(RewriteOptions::default(), resolver);
    let src = Path::new("/proj/src");
    let lib = Path::new("/proj/lib");
    assert_eq!(session.rewrite_specifier(src, "./a").specifier(), "./a.js");
    assert_eq!(session.rewrite_specifier(src, "./a").specifier(), "./a.js");
    assert_eq!(session.rewrite_specifier(lib, "./a").specifier(), "./a.js");
    assert_eq!(calls.get(), 2);
    let stats = session.stats();
    assert_eq!((stats.eligible, stats.rewritten, stats.cache_hits), (3, 3, 1));
  }

  #[test]
  fn relative_resolver_answer_is_a_miss() {
    let resolver =
      |_: &Path, _: &str, _: &[String]| -> Result<PathBuf, ResolveError> { Ok(PathBuf::from("foo.ts")) };
    assert_eq!(
      resolve_specifier(&resolver, Path::new("/proj"), "./foo", &[]),
      Resolved::Miss
    );
  }

  #[test]
  fn resolver_errors_are_misses() {
    let resolver = |_: &Path, _: &str, _: &[String]| -> Result<PathBuf, ResolveError> {
      Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into())
    };
    let mut session = RewriteSession::with_resolver(RewriteOptions::default(), resolver);
    assert!(session
      .rewrite_specifier(Path::new("/proj"), "./locked")
      .is_miss());
  }
}
