// Source trait for temperature data access
use crate::domain::temperature::{RawReading, TimeRange, TimestampError};
use async_trait::async_trait;

/// Everything that can go wrong between issuing a read and holding parsed points.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("data source answered {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed payload: {0}")]
    Payload(String),

    #[error(transparent)]
    Timestamp(#[from] TimestampError),
}

#[async_trait]
pub trait TemperatureSource: Send + Sync {
    /// Read every reading the source holds for `range`, in source order.
    async fn read_range(&self, range: &TimeRange) -> Result<Vec<RawReading>, FetchError>;
}
