/// Curated catalog errors.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("unknown catalog role key: {key}")]
    UnknownRoleKey { key: String },

    #[error("failed to load catalog from {path}: {reason}")]
    LoadFailed { path: String, reason: String },

    #[error("corpus file unreadable at {path}: {reason}")]
    CorpusUnreadable { path: String, reason: String },
}
