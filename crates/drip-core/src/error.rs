use thiserror::Error;

use crate::domain::{AssetId, TradeDate};

/// Validation and configuration errors exposed by `drip-core`.
///
/// Plan configuration is validated eagerly at construction so a bad plan
/// fails at startup instead of producing a degenerate schedule.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("asset id cannot be empty")]
    EmptyAssetId,
    #[error("asset id length {len} exceeds max {max}")]
    AssetIdTooLong { len: usize, max: usize },
    #[error("asset id contains invalid character '{ch}' at index {index}")]
    AssetIdInvalidChar { ch: char, index: usize },

    #[error("basket must contain at least one asset")]
    EmptyBasket,
    #[error("basket contains duplicate asset '{id}'")]
    DuplicateAsset { id: String },

    #[error("currency must be a 3-letter code: '{value}'")]
    InvalidCurrency { value: String },

    #[error("date must be ISO-8601 YYYY-MM-DD: '{value}'")]
    InvalidDate { value: String },
    #[error("end date {end} precedes lump-sum date {start}")]
    EndBeforeStart { start: TradeDate, end: TradeDate },

    #[error("recurrence interval must be at least one day")]
    NonPositiveInterval,

    #[error("field '{field}' must be finite")]
    NonFiniteValue { field: &'static str },
    #[error("field '{field}' must be positive")]
    NonPositiveValue { field: &'static str },
    #[error("field '{field}' must be non-negative")]
    NegativeValue { field: &'static str },
}

/// Why a single price lookup failed.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PriceLookupCause {
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("upstream returned status {0}")]
    UpstreamStatus(u16),
    #[error("malformed response: {0}")]
    MalformedResponse(String),
    #[error("no '{currency}' price in response")]
    MissingPrice { currency: String },
    #[error("non-positive price {price}")]
    InvalidPrice { price: f64 },
}

/// A failed price lookup aborts the whole valuation run: the basket needs
/// every asset priced on a date before that date's value means anything.
/// No retry, no partial snapshot.
#[derive(Debug, Error, Clone, PartialEq)]
#[error("price lookup for '{asset}' on {date} failed: {cause}")]
pub struct PriceLookupError {
    pub asset: AssetId,
    pub date: TradeDate,
    pub cause: PriceLookupCause,
}

impl PriceLookupError {
    pub fn new(asset: AssetId, date: TradeDate, cause: PriceLookupCause) -> Self {
        Self { asset, date, cause }
    }
}

/// Top-level error type for core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    PriceLookup(#[from] PriceLookupError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
