// Error types for the record core.
//
// Both variants are terminal: no retry, no internal recovery.

use thiserror::Error;
use uuid::Uuid;

use crate::record::EntityKind;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("{} not found", .kind.label())]
    NotFound { kind: EntityKind, id: Uuid },

    #[error("{} with this ID already exists", .kind.label())]
    Conflict { kind: EntityKind, id: Uuid },
}

impl StoreError {
    pub fn kind(&self) -> EntityKind {
        match self {
            StoreError::NotFound { kind, .. } | StoreError::Conflict { kind, .. } => *kind,
        }
    }

    pub fn id(&self) -> Uuid {
        match self {
            StoreError::NotFound { id, .. } | StoreError::Conflict { id, .. } => *id,
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let id = Uuid::new_v4();

        let not_found = StoreError::NotFound { kind: EntityKind::Tuition, id };
        assert_eq!(not_found.to_string(), "Tuition record not found");

        let conflict = StoreError::Conflict { kind: EntityKind::Address, id };
        assert_eq!(conflict.to_string(), "Address with this ID already exists");
        assert_eq!(conflict.id(), id);
        assert_eq!(conflict.kind(), EntityKind::Address);
    }
}
