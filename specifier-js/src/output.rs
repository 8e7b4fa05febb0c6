use crate::options::ExtensionMap;
use crate::path::{relative_path, to_specifier_string};
use std::path::{Path, PathBuf};

/// Maps a resolved source file to the file the compiler will emit for it.
///
/// The first entry of `map` whose source extension ends the file name is
/// replaced by its output extension. Relative paths (unresolved specifiers) and
/// files matching no entry are returned unchanged.
pub fn map_output_path(path: &Path, map: &ExtensionMap) -> PathBuf {
  if !path.is_absolute() {
    return path.to_path_buf();
  }
  let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
    return path.to_path_buf();
  };
  for (source, output) in map.iter() {
    if let Some(stem) = name.strip_suffix(source) {
      // A file named exactly like the extension keeps its whole name.
      let stem = if stem.is_empty() { name } else { stem };
      return path.with_file_name(format!("{stem}{output}"));
    }
  }
  path.to_path_buf()
}

/// Expresses `path` as a specifier relative to `source_dir`, always starting
/// with `./` or `../`. Relative inputs are returned verbatim.
pub fn relativize(source_dir: &Path, path: &Path) -> String {
  if !path.is_absolute() {
    return to_specifier_string(path);
  }
  let relative = relative_path(source_dir, path);
  // `.baz/index.js` starts with a dot but is not relative; it still needs `./`.
  if relative == ".." || relative.starts_with("../") || relative.starts_with("./") {
    relative
  } else {
    format!("./{relative}")
  }
}
