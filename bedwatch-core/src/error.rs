/// Errors raised at the fallible edges of the crate: feed parsing, lookups,
/// configuration and the simulated bed request.
///
/// Filtering and classification never fail and do not use this type.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BedwatchError {
    #[error("input is missing the minimum required data")]
    MissingData,
    #[error("could not read data: {0}")]
    Parse(String),
    #[error("unknown hospital category: {0}")]
    UnknownCategory(String),
    #[error("unknown charge type: {0}")]
    UnknownCharges(String),
    #[error("record {id} has invalid coordinates ({latitude}, {longitude})")]
    InvalidCoordinates {
        id: String,
        latitude: f64,
        longitude: f64,
    },
    #[error("duplicate hospital id: {0}")]
    DuplicateId(String),
    #[error("no hospital with id {0}")]
    NotFound(String),
    #[error("{0} has no vacant beds")]
    NoVacancy(String),
    #[error("invalid configuration: {0}")]
    Config(String),
}
