use std::collections::HashSet;
use std::fmt::Display;
use std::hash::Hash;

/// Raised when a store would violate record identity.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("duplicate {store} id '{id}'")]
    DuplicateId { store: &'static str, id: String },
}

/// Failure while hydrating a store from an external CSV or JSON export.
#[derive(Debug, thiserror::Error)]
pub enum CatalogLoadError {
    #[error("failed to read catalog source: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid catalog CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid catalog JSON data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid value in row {row}: {reason}")]
    InvalidRow { row: usize, reason: String },
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Rejected caller input for roles, sort keys, and directions.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum QueryParseError {
    #[error("unknown role '{0}' (expected buyer, seller, or admin)")]
    Role(String),
    #[error("unknown sort key '{0}'")]
    SortKey(String),
    #[error("sort key '{0}' does not apply to this listing")]
    UnsupportedSort(&'static str),
    #[error("unknown sort direction '{0}' (expected asc or desc)")]
    Direction(String),
    #[error("unknown lead status '{0}'")]
    LeadStatus(String),
}

pub(crate) fn ensure_unique_ids<I, K>(store: &'static str, ids: I) -> Result<(), StoreError>
where
    I: IntoIterator<Item = K>,
    K: Eq + Hash + Display,
{
    let mut seen = HashSet::new();
    for id in ids {
        let rendered = id.to_string();
        if !seen.insert(id) {
            return Err(StoreError::DuplicateId {
                store,
                id: rendered,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_ids_pass() {
        assert!(ensure_unique_ids("provider", [1, 2, 3]).is_ok());
    }

    #[test]
    fn duplicate_id_is_reported() {
        let err = ensure_unique_ids("faq", ["login-issues", "refunds", "login-issues"])
            .expect_err("duplicate detected");
        assert_eq!(
            err,
            StoreError::DuplicateId {
                store: "faq",
                id: "login-issues".to_string(),
            }
        );
    }
}
