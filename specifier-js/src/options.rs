use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

#[derive(Debug, thiserror::Error)]
pub enum OptionsError {
  #[error("source extension must not be empty")]
  EmptySourceExtension,
  #[error("extension `{0}` must start with `.`")]
  MissingDot(String),
  #[error("source extension `{0}` is mapped more than once")]
  DuplicateSourceExtension(String),
  #[error("invalid options: {0}")]
  Json(#[from] serde_json::Error),
}

/// Ordered mapping from source file extension to compiled output extension.
///
/// Order is significant: when a file name ends with more than one configured
/// source extension, the first entry wins, so put longer suffixes (`.d.ts`)
/// before shorter ones (`.ts`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtensionMap {
  entries: Vec<(String, String)>,
}

impl ExtensionMap {
  pub fn new() -> Self {
    Self {
      entries: Vec::new(),
    }
  }

  pub fn from_pairs<I, S, T>(pairs: I) -> Result<Self, OptionsError>
  where
    I: IntoIterator<Item = (S, T)>,
    S: Into<String>,
    T: Into<String>,
  {
    let mut map = Self::new();
    for (source, output) in pairs {
      map.insert(source, output)?;
    }
    Ok(map)
  }

  /// Appends a mapping after the existing entries.
  pub fn insert(
    &mut self,
    source: impl Into<String>,
    output: impl Into<String>,
  ) -> Result<(), OptionsError> {
    let source = source.into();
    let output = output.into();
    if source.is_empty() {
      return Err(OptionsError::EmptySourceExtension);
    }
    if !source.starts_with('.') {
      return Err(OptionsError::MissingDot(source));
    }
    if !output.starts_with('.') {
      return Err(OptionsError::MissingDot(output));
    }
    if self.output_for(&source).is_some() {
      return Err(OptionsError::DuplicateSourceExtension(source));
    }
    self.entries.push((source, output));
    Ok(())
  }

  pub fn output_for(&self, source: &str) -> Option<&str> {
    self
      .entries
      .iter()
      .find(|(s, _)| s == source)
      .map(|(_, o)| o.as_str())
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
    self.entries.iter().map(|(s, o)| (s.as_str(), o.as_str()))
  }

  /// Source extensions in configured order; these are the candidates tried
  /// during resolution.
  pub fn source_extensions(&self) -> Vec<String> {
    self.entries.iter().map(|(s, _)| s.clone()).collect()
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

impl Default for ExtensionMap {
  fn default() -> Self {
    Self {
      entries: vec![
        (".ts".to_string(), ".js".to_string()),
        (".tsx".to_string(), ".js".to_string()),
      ],
    }
  }
}

impl Serialize for ExtensionMap {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(self.entries.len()))?;
    for (source, output) in &self.entries {
      map.serialize_entry(source, output)?;
    }
    map.end()
  }
}

struct ExtensionMapVisitor;

impl<'de> Visitor<'de> for ExtensionMapVisitor {
  type Value = ExtensionMap;

  fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("an object mapping source extensions to output extensions")
  }

  fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
    // Entries are visited in document order, which is the priority order.
    let mut map = ExtensionMap::new();
    while let Some((source, output)) = access.next_entry::<String, String>()? {
      map
        .insert(source, output)
        .map_err(serde::de::Error::custom)?;
    }
    Ok(map)
  }
}

impl<'de> Deserialize<'de> for ExtensionMap {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    deserializer.deserialize_map(ExtensionMapVisitor)
  }
}

/// Options accepted by the rewrite transform, in the JSON shape passed to
/// compiler plugins.
///
/// ```
/// use specifier_js::RewriteOptions;
///
/// let options = RewriteOptions::from_json(r#"{ "extensionMapping": { ".mts": ".mjs" } }"#).unwrap();
/// assert_eq!(options.extension_mapping.output_for(".mts"), Some(".mjs"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct RewriteOptions {
  pub extension_mapping: ExtensionMap,
}

impl RewriteOptions {
  pub fn new(extension_mapping: ExtensionMap) -> Self {
    Self { extension_mapping }
  }

  pub fn from_json(source: &str) -> Result<Self, OptionsError> {
    Ok(serde_json::from_str(source)?)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_maps_ts_and_tsx_to_js() {
    let map = ExtensionMap::default();
    assert_eq!(
      map.iter().collect::<Vec<_>>(),
      vec![(".ts", ".js"), (".tsx", ".js")]
    );
    assert_eq!(map.source_extensions(), vec![".ts", ".tsx"]);
  }

  #[test]
  fn missing_mapping_uses_default() {
    let options = RewriteOptions::from_json("{}").unwrap();
    assert_eq!(options.extension_mapping, ExtensionMap::default());
  }

  #[test]
  fn json_order_is_priority_order() {
    let options = RewriteOptions::from_json(
      r#"{ "extensionMapping": { ".d.ts": ".d.js", ".ts": ".js", ".cts": ".cjs" } }"#,
    )
    .unwrap();
    assert_eq!(
      options.extension_mapping.source_extensions(),
      vec![".d.ts", ".ts", ".cts"]
    );
  }

  #[test]
  fn rejects_invalid_entries() {
    assert!(matches!(
      ExtensionMap::from_pairs([("", ".js")]),
      Err(OptionsError::EmptySourceExtension)
    ));
    assert!(matches!(
      ExtensionMap::from_pairs([("ts", ".js")]),
      Err(OptionsError::MissingDot(ext)) if ext == "ts"
    ));
    assert!(matches!(
      ExtensionMap::from_pairs([(".ts", ".js"), (".ts", ".mjs")]),
      Err(OptionsError::DuplicateSourceExtension(ext)) if ext == ".ts"
    ));
    let err = RewriteOptions::from_json(r#"{ "extensionMapping": { "ts": ".js" } }"#).unwrap_err();
    assert!(err.to_string().contains("must start with `.`"));
  }

  #[test]
  fn rejects_unknown_fields() {
    assert!(RewriteOptions::from_json(r#"{ "extensions": {} }"#).is_err());
  }

  #[test]
  fn serializes_as_object() {
    let options = RewriteOptions::default();
    assert_eq!(
      serde_json::to_value(&options).unwrap(),
      serde_json::json!({ "extensionMapping": { ".ts": ".js", ".tsx": ".js" } })
    );
  }
}
