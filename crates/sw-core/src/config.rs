//! Loaded configuration: replacement rules plus the relationship graph
//!
//! A [`ConfigModel`] is built once and never mutated afterwards. It holds no
//! interior mutability, so a single instance can be shared by reference or
//! `Arc` across any number of concurrent rewrites.

use crate::error::{CoreError, CoreResult};
use crate::keyword_key::KeywordKey;
use crate::relation::RelationshipGraph;
use crate::replace::{ReplacementConfig, ReplacementRule};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Directory under a plugin root that holds the two configuration documents.
pub const PROPS_DIR: &str = "props";

/// Stem of the replacement document (`replaceProp.json`).
pub const REPLACE_STEM: &str = "replaceProp";

/// Stem of the relationship document (`tableRelationProp.json`).
pub const RELATION_STEM: &str = "tableRelationProp";

/// Serialization format of a configuration document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfigFormat {
    /// JSON (default)
    #[default]
    Json,
    /// YAML
    Yaml,
}

impl ConfigFormat {
    /// Pick the format from a file extension; anything but `.yml`/`.yaml` is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yml") | Some("yaml") => ConfigFormat::Yaml,
            _ => ConfigFormat::Json,
        }
    }
}

/// Raw text of one configuration document.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Document text
    pub text: String,
    /// How to parse `text`
    pub format: ConfigFormat,
}

impl ConfigSource {
    /// A JSON document
    pub fn json(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            format: ConfigFormat::Json,
        }
    }

    /// A YAML document
    pub fn yaml(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            format: ConfigFormat::Yaml,
        }
    }

    /// Read a document from disk, picking the format from the extension.
    pub fn read(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let text = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        Ok(Self {
            text,
            format: ConfigFormat::from_path(path),
        })
    }

    fn parse<T: DeserializeOwned>(&self) -> CoreResult<T> {
        match self.format {
            ConfigFormat::Json => Ok(serde_json::from_str(&self.text)?),
            ConfigFormat::Yaml => Ok(serde_yaml::from_str(&self.text)?),
        }
    }
}

/// Immutable configuration shared by every rewrite.
#[derive(Debug, Clone)]
pub struct ConfigModel {
    language: String,
    rules: Vec<ReplacementRule>,
    index: HashMap<KeywordKey, usize>,
    graph: RelationshipGraph,
}

impl ConfigModel {
    /// Build a model from parsed documents, validating rules and key uniqueness.
    pub fn new(replace: ReplacementConfig, graph: RelationshipGraph) -> CoreResult<Self> {
        let mut index = HashMap::with_capacity(replace.replace_cols.len());
        for (position, rule) in replace.replace_cols.iter().enumerate() {
            rule.validate()?;
            if index.insert(rule.key.clone(), position).is_some() {
                return Err(CoreError::DuplicateKey {
                    key: rule.key.to_string(),
                });
            }
        }

        let model = Self {
            language: replace.language,
            rules: replace.replace_cols,
            index,
            graph,
        };
        model.log_summary();
        Ok(model)
    }

    /// Parse both documents and build the model.
    pub fn from_sources(replace: &ConfigSource, relation: &ConfigSource) -> CoreResult<Self> {
        let replace_config: ReplacementConfig = replace.parse()?;
        let graph: RelationshipGraph = relation.parse()?;
        Self::new(replace_config, graph)
    }

    /// Build the model from two JSON strings.
    pub fn from_json_strs(replace: &str, relation: &str) -> CoreResult<Self> {
        Self::from_sources(&ConfigSource::json(replace), &ConfigSource::json(relation))
    }

    /// Load both documents from explicit paths.
    pub fn load(replace_path: &Path, relation_path: &Path) -> CoreResult<Self> {
        let replace = ConfigSource::read(replace_path)?;
        let relation = ConfigSource::read(relation_path)?;
        Self::from_sources(&replace, &relation)
    }

    /// Load configuration from a plugin directory.
    ///
    /// Looks for `props/replaceProp.json` and `props/tableRelationProp.json`,
    /// accepting `.yml`/`.yaml` variants of either.
    pub fn load_from_dir(dir: &Path) -> CoreResult<Self> {
        let props = dir.join(PROPS_DIR);
        let replace_path = find_document(&props, REPLACE_STEM)?;
        let relation_path = find_document(&props, RELATION_STEM)?;
        Self::load(&replace_path, &relation_path)
    }

    /// Rule configured for `key` (exact, case-sensitive match).
    pub fn rule_for(&self, key: &str) -> Option<&ReplacementRule> {
        self.index.get(key).map(|&position| &self.rules[position])
    }

    /// Whether `key` is a configured keyword.
    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// The relationship graph
    pub fn relationship_graph(&self) -> &RelationshipGraph {
        &self.graph
    }

    /// Language the replacement rules target
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Rules in declared order
    pub fn rules(&self) -> &[ReplacementRule] {
        &self.rules
    }

    /// Number of replacement rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no replacement rule is configured
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    fn log_summary(&self) {
        log::debug!(
            "Loaded {} replacement rules ({}) and {} relations from graph '{}'",
            self.rules.len(),
            self.language,
            self.graph.relations().len(),
            self.graph.name()
        );

        for cycle in self.graph.cycles() {
            log::debug!("Relationship graph contains a cycle: {}", cycle.join(" <-> "));
        }

        if self.graph.is_empty() {
            return;
        }
        let known = self.graph.tables();
        for rule in &self.rules {
            if !known.contains(&rule.table.canonical()) {
                log::warn!(
                    "Keyword '{}' belongs to table '{}', which has no declared relation",
                    rule.key,
                    rule.table
                );
            }
        }
    }
}

fn find_document(dir: &Path, stem: &str) -> CoreResult<PathBuf> {
    ["json", "yml", "yaml"]
        .iter()
        .map(|ext| dir.join(format!("{stem}.{ext}")))
        .find(|path| path.exists())
        .ok_or_else(|| CoreError::ConfigNotFound {
            path: dir.join(format!("{stem}.json")).display().to_string(),
        })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
