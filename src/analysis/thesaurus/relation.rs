//! Thesaurus relation kinds.
//!
//! A [`RelationKind`] names how an expansion token relates to the concept it
//! was expanded from. Its ordinal is stable and is what gets written to the
//! token payload, so variants must never be reordered.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use byteorder::{BigEndian, ByteOrder};
use serde::{Deserialize, Serialize};

use crate::analysis::thesaurus::engine::ThesaurusEngine;
use crate::error::{Result, SkosError};

/// Size in bytes of an encoded relation payload.
pub const PAYLOAD_LEN: usize = 4;

/// Relations between a concept and the labels or concepts expanded from it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum RelationKind {
    /// Preferred label
    Pref,
    /// Alternative label
    Alt,
    /// Hidden label
    Hidden,
    /// Directly broader concept
    Broader,
    /// Any ancestor concept
    BroaderTransitive,
    /// Directly narrower concept
    Narrower,
    /// Any descendant concept
    NarrowerTransitive,
}

impl RelationKind {
    /// Every relation kind, in ordinal order.
    pub const ALL: [RelationKind; 7] = [
        RelationKind::Pref,
        RelationKind::Alt,
        RelationKind::Hidden,
        RelationKind::Broader,
        RelationKind::BroaderTransitive,
        RelationKind::Narrower,
        RelationKind::NarrowerTransitive,
    ];

    /// The order in which URI expansion consults the thesaurus.
    ///
    /// Hidden labels are never emitted as expansions.
    pub const URI_EXPANSION_ORDER: [RelationKind; 6] = [
        RelationKind::Pref,
        RelationKind::Alt,
        RelationKind::Broader,
        RelationKind::BroaderTransitive,
        RelationKind::Narrower,
        RelationKind::NarrowerTransitive,
    ];

    /// The relations used when no expand-to set is configured.
    pub const DEFAULT_EXPANSION: [RelationKind; 3] =
        [RelationKind::Pref, RelationKind::Alt, RelationKind::Broader];

    /// The stable integer ordinal of this relation.
    pub fn ordinal(self) -> i32 {
        self as i32
    }

    /// Look up a relation by ordinal.
    pub fn from_ordinal(ordinal: i32) -> Option<Self> {
        usize::try_from(ordinal)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
    }

    /// Encode the ordinal as a big-endian payload.
    pub fn to_payload(self) -> Vec<u8> {
        let mut buf = vec![0u8; PAYLOAD_LEN];
        BigEndian::write_i32(&mut buf, self.ordinal());
        buf
    }

    /// Decode a payload written by [`RelationKind::to_payload`].
    pub fn from_payload(payload: &[u8]) -> Result<Self> {
        if payload.len() != PAYLOAD_LEN {
            return Err(SkosError::invalid_argument(format!(
                "relation payload must be {} bytes, got {}",
                PAYLOAD_LEN,
                payload.len()
            )));
        }
        let ordinal = BigEndian::read_i32(payload);
        Self::from_ordinal(ordinal).ok_or_else(|| {
            SkosError::invalid_argument(format!("unknown relation ordinal {ordinal}"))
        })
    }

    /// The default expand-to set.
    pub fn default_set() -> BTreeSet<RelationKind> {
        Self::DEFAULT_EXPANSION.into_iter().collect()
    }

    /// Resolve a configured expand-to set, falling back to the default when empty.
    pub fn resolve_set<I>(relations: I) -> BTreeSet<RelationKind>
    where
        I: IntoIterator<Item = RelationKind>,
    {
        let set: BTreeSet<_> = relations.into_iter().collect();
        if set.is_empty() {
            Self::default_set()
        } else {
            set
        }
    }

    /// Fetch the labels reachable from `uri` through this relation.
    pub fn labels(self, engine: &dyn ThesaurusEngine, uri: &str) -> Result<Vec<String>> {
        match self {
            RelationKind::Pref => engine.pref_labels(uri),
            RelationKind::Alt => engine.alt_labels(uri),
            RelationKind::Hidden => engine.hidden_labels(uri),
            RelationKind::Broader => engine.broader_labels(uri),
            RelationKind::BroaderTransitive => engine.broader_transitive_labels(uri),
            RelationKind::Narrower => engine.narrower_labels(uri),
            RelationKind::NarrowerTransitive => engine.narrower_transitive_labels(uri),
        }
    }

    /// The configuration name of this relation.
    pub fn as_str(self) -> &'static str {
        match self {
            RelationKind::Pref => "pref",
            RelationKind::Alt => "alt",
            RelationKind::Hidden => "hidden",
            RelationKind::Broader => "broader",
            RelationKind::BroaderTransitive => "broader_transitive",
            RelationKind::Narrower => "narrower",
            RelationKind::NarrowerTransitive => "narrower_transitive",
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RelationKind {
    type Err = SkosError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pref" => Ok(RelationKind::Pref),
            "alt" => Ok(RelationKind::Alt),
            "hidden" => Ok(RelationKind::Hidden),
            "broader" => Ok(RelationKind::Broader),
            "broader_transitive" | "broadertransitive" => Ok(RelationKind::BroaderTransitive),
            "narrower" => Ok(RelationKind::Narrower),
            "narrower_transitive" | "narrowertransitive" => Ok(RelationKind::NarrowerTransitive),
            other => Err(SkosError::invalid_argument(format!(
                "unknown relation kind '{other}'"
            ))),
        }
    }
}

impl TryFrom<String> for RelationKind {
    type Error = SkosError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}
