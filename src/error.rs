use thiserror::Error;

#[derive(Error, Debug)]
pub enum LexigenError {
    /// The synthesis loop hit its attempt ceiling before reaching the
    /// requested dictionary size.
    #[error("catalog exhausted after {attempts} attempts: {have} of {want} words")]
    CatalogExhausted {
        attempts: u64,
        have: usize,
        want: usize,
    },

    /// Invalid generation parameters.
    #[error("config error: {0}")]
    Config(String),

    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
