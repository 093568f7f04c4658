use alloy::primitives::utils::UnitsError;

#[derive(Debug, thiserror::Error)]
pub enum DisplayError {
    #[error("No conversion rate available for {0}")]
    MissingConversionRate(String),
    #[error("Invalid conversion rate {rate}: {reason}")]
    InvalidConversionRate { rate: String, reason: String },
    #[error("Amount overflow while converting to {0}")]
    AmountOverflow(String),
    #[error("Unit formatting failed: {0}")]
    UnitFormat(#[from] UnitsError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Snapshot read error: {0}")]
    SnapshotRead(#[from] std::io::Error),
}
