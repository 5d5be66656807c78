use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Rank {rank} out of bounds for distribution of length {len}")]
    RankOutOfBounds { rank: usize, len: usize },

    #[error("{officer} has no {capability} implementation")]
    UnimplementedCapability {
        officer: &'static str,
        capability: &'static str,
    },

    #[error("Unknown officer: {0}")]
    UnknownOfficer(String),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CalcError>;
