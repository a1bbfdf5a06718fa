use thiserror::Error;

/// Zone-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ZoneError {
    /// A zone with this name is already published
    #[error("Zone already exists: {0}")]
    AlreadyExists(String),

    /// A published zone has no SOA record set at its apex
    #[error("SOA record for zone {0} was not present")]
    MissingSoa(String),

    /// A published zone has more than one SOA record set at its apex
    #[error("Zone {0} contains duplicate SOA records")]
    DuplicateSoa(String),

    /// Record set builder was given incomplete or mismatched input
    #[error("Invalid record set: {0}")]
    InvalidRecordSet(String),

    /// Record data builder was given incomplete input
    #[error("Invalid record data: {0}")]
    InvalidRecordData(String),
}

/// Broad classification of a [`ZoneError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller asked for something the current state forbids
    Precondition,
    /// Stored data broke an invariant; indicates a bug, not a runtime condition
    Consistency,
    /// A value could not be constructed from the given input
    InvalidInput,
}

impl ZoneError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::AlreadyExists(_) => ErrorKind::Precondition,
            Self::MissingSoa(_) | Self::DuplicateSoa(_) => ErrorKind::Consistency,
            Self::InvalidRecordSet(_) | Self::InvalidRecordData(_) => ErrorKind::InvalidInput,
        }
    }
}

pub type Result<T> = std::result::Result<T, ZoneError>;
