//! Lexical path helpers for module specifiers.
//!
//! Specifiers always use `/` as the separator regardless of platform, so these
//! helpers work on strings where the input is a specifier and on
//! [`Path`] components where the input is a filesystem path.

use std::path::{Component, Path, PathBuf};

/// Whether the specifier is relative to the importing file (`./` or `../`).
pub fn is_relative_specifier(specifier: &str) -> bool {
  specifier.starts_with("./") || specifier.starts_with("../")
}

/// Whether the specifier names a filesystem location rather than a package.
///
/// This is broader than [`is_relative_specifier`]: `.`, `..` and absolute paths
/// also count.
pub fn is_path_specifier(specifier: &str) -> bool {
  specifier == "."
    || specifier == ".."
    || is_relative_specifier(specifier)
    || specifier.starts_with('/')
    || specifier.starts_with('\\')
    || starts_with_drive_letter(specifier)
}

fn starts_with_drive_letter(specifier: &str) -> bool {
  let bytes = specifier.as_bytes();
  bytes.len() >= 3
    && bytes[0].is_ascii_alphabetic()
    && bytes[1] == b':'
    && (bytes[2] == b'/' || bytes[2] == b'\\')
}

/// Returns the extension of the last segment of a specifier, including the
/// leading dot, or an empty string.
///
/// A dot that begins the segment does not start an extension (`.baz` has none),
/// and neither do the `.`/`..` segments. Trailing slashes are ignored.
pub fn extname(specifier: &str) -> &str {
  let trimmed = specifier.trim_end_matches('/');
  let base = match trimmed.rfind('/') {
    Some(i) => &trimmed[i + 1..],
    None => trimmed,
  };
  if base == ".." {
    return "";
  }
  match base.rfind('.') {
    None | Some(0) => "",
    Some(i) => &base[i..],
  }
}

/// Removes `.` segments and resolves `..` segments without touching the
/// filesystem. `..` never climbs above the root.
pub fn normalize_lexical(path: &Path) -> PathBuf {
  let mut normalized = PathBuf::new();
  for component in path.components() {
    match component {
      Component::CurDir => {}
      Component::ParentDir => {
        let popped = matches!(
          normalized.components().next_back(),
          Some(Component::Normal(_))
        );
        if popped {
          normalized.pop();
        } else if !normalized.has_root() {
          normalized.push("..");
        }
      }
      other => normalized.push(other.as_os_str()),
    }
  }
  normalized
}

/// Computes the `/`-separated path from directory `from` to `to`.
///
/// Both paths are normalized first. Equal paths produce an empty string. Paths
/// on different roots (e.g. different Windows drives) cannot be expressed
/// relatively; `to` is returned in full.
pub fn relative_path(from: &Path, to: &Path) -> String {
  let from = normalize_lexical(from);
  let to = normalize_lexical(to);
  let from_parts: Vec<Component<'_>> = from.components().collect();
  let to_parts: Vec<Component<'_>> = to.components().collect();

  let shared_root = match (from_parts.first(), to_parts.first()) {
    (Some(Component::Prefix(a)), Some(Component::Prefix(b))) => a == b,
    (Some(Component::Prefix(_)), _) | (_, Some(Component::Prefix(_))) => false,
    _ => true,
  };
  if !shared_root {
    return to_specifier_string(&to);
  }

  let common = from_parts
    .iter()
    .zip(to_parts.iter())
    .take_while(|(a, b)| a == b)
    .count();

  let mut segments: Vec<String> = Vec::new();
  for _ in common..from_parts.len() {
    segments.push("..".to_string());
  }
  for part in &to_parts[common..] {
    segments.push(part.as_os_str().to_string_lossy().into_owned());
  }
  segments.join("/")
}

/// Renders a path with `/` separators.
pub fn to_specifier_string(path: &Path) -> String {
  let rendered = path.to_string_lossy();
  if std::path::MAIN_SEPARATOR == '/' {
    rendered.into_owned()
  } else {
    rendered.replace(std::path::MAIN_SEPARATOR, "/")
  }
}
