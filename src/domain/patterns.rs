//! Pattern library: named RLE seeds the presentation layer can stamp.
//!
//! Ships with a built-in table; an alternative library can be loaded from
//! a JSON bundle at runtime (source unspecified here - the engine never
//! fetches anything). Every entry is decoded eagerly at construction so a
//! malformed bundle fails the whole load and leaves the active library
//! untouched.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::rle::{self, Pattern};

/// (key, display name, rle)
const BUILTIN_PATTERNS: &[(&str, &str, &str)] = &[
    ("glider", "Glider", "bo$2bo$3o!"),
    ("blinker", "Blinker", "3o!"),
    ("toad", "Toad", "b3o$3o!"),
    (
        "pulsar",
        "Pulsar",
        "2b3o3b3o$$o4bobo4bo$o4bobo4bo$o4bobo4bo$2b3o3b3o$$2b3o3b3o$o4bobo4bo$o4bobo4bo$o4bobo4bo$$2b3o3b3o!",
    ),
    ("acorn", "Acorn", "bo5b$3bo3b$2o2b3o!"),
    ("diehard", "Diehard", "6bob$2o6b$bo3b3o!"),
    ("r_pentomino", "R-Pentomino", "b2o$2o$bo!"),
    (
        "gosper_glider_gun",
        "Gosper Glider Gun",
        "24bo$22bobo$12b2o6b2o12b2o$11bo3bo4b2o12b2o$2o8bo5bo3b2o$2o8bo3bob2o4bobo$10bo5bo7bo$11bo3bo$12b2o!",
    ),
    (
        "queen_bee_shuttle",
        "Queen Bee Shuttle",
        "9bo12b$7bobo12b$6bobo13b$2o3bo2bo11b2o$2o4bobo11b2o$7bobo12b$9bo12b!",
    ),
];

#[derive(Clone, Debug)]
pub struct PatternLibrary {
    patterns: Vec<Pattern>,
    key_to_idx: HashMap<String, usize>,
    manifest: Vec<PatternManifestEntry>,
}

impl PatternLibrary {
    /// The built-in pattern table. The table is compile-time constant and
    /// covered by tests, so a decode failure here is a programming error.
    pub fn builtin() -> Self {
        let entries = BUILTIN_PATTERNS
            .iter()
            .map(|(key, name, text)| BundlePattern {
                key: key.to_string(),
                name: Some(name.to_string()),
                rle: text.to_string(),
            })
            .collect();
        Self::from_entries(entries).expect("built-in pattern table must decode")
    }

    pub fn from_bundle_json(json: &str) -> Result<Self, String> {
        let bundle: BundleRoot = serde_json::from_str(json).map_err(|e| e.to_string())?;
        Self::from_entries(bundle.patterns)
    }

    pub fn get(&self, key: &str) -> Option<&Pattern> {
        self.key_to_idx.get(key).map(|&idx| &self.patterns[idx])
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.manifest.iter().map(|entry| entry.key.as_str())
    }

    /// Serialized list of key / display name / dimensions, for the
    /// presentation layer to build its pattern menu from
    pub fn manifest_json(&self) -> String {
        let out = PatternManifest {
            format_version: 1,
            patterns: &self.manifest,
        };
        serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
    }

    fn from_entries(entries: Vec<BundlePattern>) -> Result<Self, String> {
        let mut patterns = Vec::with_capacity(entries.len());
        let mut key_to_idx = HashMap::new();
        let mut manifest = Vec::with_capacity(entries.len());

        for entry in entries {
            let pattern = rle::decode(&entry.rle)
                .map_err(|e| format!("pattern {}: {}", entry.key, e))?;

            if key_to_idx.contains_key(&entry.key) {
                return Err(format!("duplicate pattern key: {}", entry.key));
            }

            manifest.push(PatternManifestEntry {
                key: entry.key.clone(),
                name: entry.name.unwrap_or_else(|| entry.key.clone()),
                width: pattern.width() as u32,
                height: pattern.height() as u32,
            });
            key_to_idx.insert(entry.key, patterns.len());
            patterns.push(pattern);
        }

        Ok(Self {
            patterns,
            key_to_idx,
            manifest,
        })
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PatternManifest<'a> {
    format_version: u32,
    patterns: &'a [PatternManifestEntry],
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PatternManifestEntry {
    key: String,
    name: String,
    width: u32,
    height: u32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BundleRoot {
    patterns: Vec<BundlePattern>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BundlePattern {
    key: String,
    #[serde(default)]
    name: Option<String>,
    rle: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_decodes_with_expected_shapes() {
        let library = PatternLibrary::builtin();
        let expect = [
            ("glider", 3, 3, 5),
            ("blinker", 3, 1, 3),
            ("toad", 4, 2, 6),
            ("pulsar", 13, 13, 48),
            ("acorn", 7, 3, 7),
            ("diehard", 8, 3, 7),
            ("r_pentomino", 3, 3, 5),
            ("gosper_glider_gun", 36, 9, 36),
            ("queen_bee_shuttle", 22, 7, 20),
        ];
        assert_eq!(library.len(), expect.len());
        for (key, width, height, cells) in expect {
            let pattern = library.get(key).unwrap_or_else(|| panic!("missing {}", key));
            assert_eq!(pattern.width(), width, "{} width", key);
            assert_eq!(pattern.height(), height, "{} height", key);
            assert_eq!(pattern.alive_count(), cells, "{} population", key);
        }
    }

    #[test]
    fn bundle_load_rejects_bad_rle_and_duplicates() {
        let bad_rle = r#"{"patterns":[{"key":"empty","rle":"!"}]}"#;
        assert!(PatternLibrary::from_bundle_json(bad_rle).is_err());

        let dupe = r#"{"patterns":[{"key":"x","rle":"o!"},{"key":"x","rle":"o!"}]}"#;
        let err = PatternLibrary::from_bundle_json(dupe).unwrap_err();
        assert!(err.contains("duplicate pattern key"));
    }

    #[test]
    fn manifest_lists_every_key() {
        let library = PatternLibrary::builtin();
        let manifest = library.manifest_json();
        for key in library.keys() {
            assert!(manifest.contains(key), "manifest missing {}", key);
        }
    }
}
