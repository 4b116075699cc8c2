// 🪪 Record Envelope - identity + provenance around domain fields
//
// Every stored value is a Record<T>:
// - id: server-assigned UUID, never changes after creation
// - fields: the kind-specific domain values (flattened on the wire)
// - created_at / updated_at: UTC timestamps, updated_at >= created_at

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// ============================================================================
// ENTITY KIND
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Person,
    Address,
    Tuition,
    Scholarship,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Person => "person",
            EntityKind::Address => "address",
            EntityKind::Tuition => "tuition",
            EntityKind::Scholarship => "scholarship",
        }
    }

    /// Human-facing label used in error details
    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::Person => "Person",
            EntityKind::Address => "Address",
            EntityKind::Tuition => "Tuition record",
            EntityKind::Scholarship => "Scholarship",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// IDENTIFIER / TIMESTAMP HELPERS
// ============================================================================

/// Fresh server-assigned identifier
pub fn new_id() -> Uuid {
    Uuid::new_v4()
}

/// Current UTC time
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Refresh time for a record last touched at `previous`.
///
/// Never moves backwards, so a clock step back cannot break updated_at >= created_at.
pub fn refreshed(previous: DateTime<Utc>) -> DateTime<Utc> {
    now().max(previous)
}

// ============================================================================
// RECORD
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record<T> {
    /// Stable identity - NEVER changes
    pub id: Uuid,

    #[serde(flatten)]
    pub fields: T,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl<T> Record<T> {
    /// Wrap freshly created fields with a new id and matching timestamps
    pub fn new(fields: T) -> Self {
        let now = now();

        Record {
            id: new_id(),
            fields,
            created_at: now,
            updated_at: now,
        }
    }

    /// Same record with updated_at refreshed and nothing else touched
    pub fn touched(mut self) -> Self {
        self.updated_at = refreshed(self.updated_at);
        self
    }

    /// Full replace: keeps id and created_at, swaps every domain field
    pub fn replaced(&self, fields: T) -> Self {
        Record {
            id: self.id,
            fields,
            created_at: self.created_at,
            updated_at: refreshed(self.updated_at),
        }
    }
}
