use std::fmt;

/// The kinds of record the store holds, used to label errors and log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Account,
    Category,
    FamilyMember,
    Transaction,
    Scenario,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Account => "account",
            Self::Category => "category",
            Self::FamilyMember => "family member",
            Self::Transaction => "transaction",
            Self::Scenario => "scenario",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Failures reported by a [`crate::storage::Storage`] backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("could not encode records: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("storage quota exceeded writing \"{key}\": needs {needed} bytes, {available} available")]
    QuotaExceeded {
        key: String,
        needed: usize,
        available: usize,
    },
}

/// Everything a store operation can fail with.
///
/// All variants except [`StoreError::Persistence`] are raised before any
/// state changes. A `Persistence` error means the mutation was applied in
/// memory but could not be written to storage, so it may not survive a
/// reload.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A required field is missing or malformed.
    #[error("invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    /// A foreign id does not resolve, or resolves to a record of the wrong type.
    #[error("{field} \"{id}\" {reason}")]
    Reference {
        field: &'static str,
        id: String,
        reason: String,
    },

    /// Removing the record would orphan a dependent or drop the last admin.
    #[error("cannot remove {entity} \"{id}\": {reason}")]
    ReferentialIntegrity {
        entity: EntityKind,
        id: String,
        reason: String,
    },

    #[error("{entity} \"{id}\" not found")]
    NotFound { entity: EntityKind, id: String },

    #[error("failed to persist \"{key}\": {source}")]
    Persistence {
        key: &'static str,
        #[source]
        source: StorageError,
    },
}

impl StoreError {
    pub(crate) fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }

    pub(crate) fn reference(
        field: &'static str,
        id: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::Reference {
            field,
            id: id.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn integrity(
        entity: EntityKind,
        id: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::ReferentialIntegrity {
            entity,
            id: id.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn not_found(entity: EntityKind, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }

    /// True when the in-memory mutation stands but the durable write failed.
    pub fn is_persistence(&self) -> bool {
        matches!(self, Self::Persistence { .. })
    }
}

pub type Result<T, E = StoreError> = std::result::Result<T, E>;
