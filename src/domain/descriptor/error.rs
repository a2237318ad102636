/// Descriptor schema error.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("Malformed descriptor document: {0}")]
    Malformed(String),

    #[error("Dependency '{dependency}' is missing required field '{field}'")]
    MissingField { dependency: String, field: String },

    #[error("Dependency '{dependency}' has an invalid git repository '{repository}'")]
    InvalidRepository { dependency: String, repository: String },
}
