//! # Identity Newtypes
//!
//! Domain-primitive newtypes for identifiers throughout the CSRD Stack.
//! Each identifier is a distinct type — you cannot pass a [`LedgerEntryId`]
//! where a [`RemediationId`] is expected.
//!
//! ## Reproducibility
//!
//! Output identifiers ([`LedgerEntryId`], [`RemediationId`]) are UUIDv5 values
//! derived from the owning topic id under fixed namespaces. A determination
//! run never draws randomness, so repeated runs over identical inputs emit
//! byte-identical reports. [`TopicId`] is the string key that links claims,
//! obligations, ledger entries, and recommendations: the short machine token
//! extracted from a disclosure requirement label (for example `E1-6`).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Topic identifiers (string-based, caller-facing)
// ---------------------------------------------------------------------------

/// Machine identifier for one disclosure topic, e.g. `E1-1` or `S1-14`.
///
/// Topic ids key the claims map supplied by the extraction pipeline and every
/// per-topic output the engine produces. The prefix before the first `-` is
/// the topic family (`E1`, `S1`, ...), used for core-family prioritization.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TopicId(String);

impl TopicId {
    /// Create a topic id from its string form.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw string form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The topic family: the prefix before the first `-`.
    ///
    /// `E1-6` → `E1`. An id with no `-` is its own family.
    pub fn family(&self) -> &str {
        match self.0.find('-') {
            Some(pos) => &self.0[..pos],
            None => &self.0,
        }
    }
}

impl std::fmt::Display for TopicId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TopicId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

// ---------------------------------------------------------------------------
// UUID-based identifiers (derived, reproducible)
// ---------------------------------------------------------------------------

/// Namespace for ledger entry identifiers.
const LEDGER_ENTRY_NAMESPACE: Uuid = Uuid::from_u128(0x7c2b_90de_41a3_4c5f_9b1e_6d84_a02f_57e1);

/// A unique identifier for one obligation ledger entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LedgerEntryId(Uuid);

impl LedgerEntryId {
    /// Derive the identifier for the ledger entry covering `topic`.
    pub fn from_topic(topic: &TopicId) -> Self {
        Self(Uuid::new_v5(&LEDGER_ENTRY_NAMESPACE, topic.as_str().as_bytes()))
    }

    /// Create a ledger entry identifier from an existing UUID.
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for LedgerEntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Namespace for remediation item identifiers.
const REMEDIATION_NAMESPACE: Uuid = Uuid::from_u128(0x3f81_5a6c_d927_4b01_87c2_aa40_e65b_9d24);

/// A unique identifier for one remediation item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RemediationId(Uuid);

impl RemediationId {
    /// Derive the identifier for the remediation item covering `topic`.
    pub fn from_topic(topic: &TopicId) -> Self {
        Self(Uuid::new_v5(&REMEDIATION_NAMESPACE, topic.as_str().as_bytes()))
    }

    /// Create a remediation identifier from an existing UUID.
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for RemediationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
