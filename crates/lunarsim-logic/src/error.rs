//! Errors reported before a simulation is constructed.

use thiserror::Error;

/// Rejected run configuration. Raised before any truck or station exists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid value passed for number of trucks ({0}): value must be > 0")]
    InvalidTruckCount(i64),
    #[error("invalid value passed for number of stations ({0}): value must be > 0")]
    InvalidStationCount(i64),
}
