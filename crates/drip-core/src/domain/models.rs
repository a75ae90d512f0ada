use serde::Serialize;

use crate::{TradeDate, ValidationError};

/// A single planned purchase: a calendar date and a positive spend in the
/// quote currency. Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BuyEvent {
    pub date: TradeDate,
    pub amount: f64,
}

impl BuyEvent {
    pub fn new(date: TradeDate, amount: f64) -> Result<Self, ValidationError> {
        validate_positive("amount", amount)?;
        Ok(Self { date, amount })
    }
}

/// Price of one unit of an asset in the quote currency on a given date.
/// Fetched, used, discarded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceQuote(f64);

impl PriceQuote {
    pub fn new(price: f64) -> Result<Self, ValidationError> {
        validate_positive("price", price)?;
        Ok(Self(price))
    }

    pub const fn value(self) -> f64 {
        self.0
    }
}

/// Point-in-time record of cumulative capital in versus computed basket
/// value. One per buy event, in schedule order; never mutated after
/// creation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Snapshot {
    pub date: TradeDate,
    pub invested: f64,
    pub value: f64,
}

impl Snapshot {
    pub fn new(date: TradeDate, invested: f64, value: f64) -> Result<Self, ValidationError> {
        validate_positive("invested", invested)?;
        validate_non_negative("value", value)?;
        Ok(Self {
            date,
            invested,
            value,
        })
    }
}

pub(crate) fn validate_positive(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteValue { field });
    }
    if value <= 0.0 {
        return Err(ValidationError::NonPositiveValue { field });
    }
    Ok(())
}

pub(crate) fn validate_non_negative(
    field: &'static str,
    value: f64,
) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteValue { field });
    }
    if value < 0.0 {
        return Err(ValidationError::NegativeValue { field });
    }
    Ok(())
}
