//! Configuration for thesaurus expansion.

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analysis::thesaurus::RelationKind;
use crate::analysis::token_filter::label_expansion::DEFAULT_MAX_LABEL_LENGTH;
use crate::error::{Result, SkosError};

/// What the incoming tokens refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpansionType {
    /// Tokens are concept URIs.
    Uri,
    /// Tokens are free text matched against preferred labels.
    #[default]
    Label,
}

/// Configuration for a thesaurus expansion analyzer.
///
/// Every field has a default, so a JSON document only needs the fields it
/// changes:
///
/// ```
/// use skos_analysis::analysis::config::{ExpansionConfig, ExpansionType};
///
/// let config = ExpansionConfig::from_json_str(r#"{ "expansion_type": "uri" }"#).unwrap();
/// assert_eq!(config.expansion_type, ExpansionType::Uri);
/// assert_eq!(config.max_label_length, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpansionConfig {
    /// Whether tokens are URIs or label text.
    pub expansion_type: ExpansionType,
    /// Relations URI expansion emits; empty means the default set.
    pub expand_to: BTreeSet<RelationKind>,
    /// Longest label, in tokens, that label expansion can match.
    pub max_label_length: usize,
}

impl Default for ExpansionConfig {
    fn default() -> Self {
        Self {
            expansion_type: ExpansionType::default(),
            expand_to: RelationKind::default_set(),
            max_label_length: DEFAULT_MAX_LABEL_LENGTH,
        }
    }
}

impl ExpansionConfig {
    /// Configuration for URI expansion to the given relations.
    pub fn uri<I>(relations: I) -> Self
    where
        I: IntoIterator<Item = RelationKind>,
    {
        Self {
            expansion_type: ExpansionType::Uri,
            expand_to: relations.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Configuration for label expansion with the given window size.
    pub fn label(max_label_length: usize) -> Self {
        Self {
            expansion_type: ExpansionType::Label,
            max_label_length,
            ..Self::default()
        }
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            SkosError::invalid_config(format!(
                "failed to read '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json_str(&content)
    }

    /// Check the configuration for values no filter can work with.
    pub fn validate(&self) -> Result<()> {
        if self.max_label_length == 0 {
            return Err(SkosError::invalid_config(
                "max_label_length must be at least 1",
            ));
        }
        Ok(())
    }

    /// The effective expand-to set.
    pub fn relations(&self) -> BTreeSet<RelationKind> {
        RelationKind::resolve_set(self.expand_to.iter().copied())
    }
}
