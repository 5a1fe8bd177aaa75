use thiserror::Error;

#[derive(Error, Debug)]
pub enum CartzError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("A list with id {0} already exists")]
    DuplicateListId(u32),

    #[error("List {list_id} already has a product named '{name}'")]
    DuplicateProduct { list_id: u32, name: String },

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, CartzError>;
