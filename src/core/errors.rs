use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Expected validation outcomes of tree commands. The store keeps the most
/// recent one in its last-error slot; nothing here is a panic path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("missing required field `{field}`")]
    MissingField { field: &'static str },
    #[error("unable to locate entry `{id}`")]
    NotFound { id: String },
    #[error("`{id}` does not resolve to a folder")]
    NotAFolder { id: String },
    #[error("an entry named `{name}` already exists in this folder")]
    NameConflict { name: String },
    #[error("the root folder cannot be deleted")]
    RootDeletionForbidden,
    #[error("invalid file system data: {0}")]
    InvalidData(String),
}
