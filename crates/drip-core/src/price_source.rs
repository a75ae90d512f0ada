//! Price-lookup capability consumed by the portfolio valuator.
//!
//! The valuation loop never talks to a concrete API: it depends on
//! [`PriceSource`], so the algorithm can be exercised deterministically with
//! a stub and wired to any query-by-date price source in production.

use std::future::Future;
use std::pin::Pin;

use crate::domain::{AssetId, PriceQuote, TradeDate};
use crate::error::{PriceLookupError, ValidationError};

/// One historical price lookup, keyed by asset, calendar date, and quote
/// currency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceRequest {
    pub asset: AssetId,
    pub date: TradeDate,
    pub currency: String,
}

impl PriceRequest {
    pub fn new(asset: AssetId, date: TradeDate, currency: impl Into<String>) -> Self {
        Self {
            asset,
            date,
            currency: currency.into(),
        }
    }
}

/// Query-by-date price source contract.
///
/// Lookups are issued strictly sequentially by the caller; implementations
/// do not need their own concurrency control.
pub trait PriceSource: Send + Sync {
    /// Stable identifier used in log lines.
    fn id(&self) -> &'static str;

    /// Fetch the price of one unit of `asset` on `date` in the quote
    /// currency.
    ///
    /// # Errors
    ///
    /// Any transport failure, non-success status, or missing price is a hard
    /// [`PriceLookupError`]. Absence of data is never an empty or zero quote.
    fn daily_price<'a>(
        &'a self,
        request: PriceRequest,
    ) -> Pin<Box<dyn Future<Output = Result<PriceQuote, PriceLookupError>> + Send + 'a>>;
}

/// Deterministic source quoting the same price for every asset and date.
///
/// Used for offline runs and for exercising the valuation arithmetic: under
/// a constant price, every snapshot's value equals its event's amount.
#[derive(Debug, Clone, Copy)]
pub struct FixedPriceSource {
    quote: PriceQuote,
}

impl FixedPriceSource {
    pub fn new(price: f64) -> Result<Self, ValidationError> {
        Ok(Self {
            quote: PriceQuote::new(price)?,
        })
    }
}

impl PriceSource for FixedPriceSource {
    fn id(&self) -> &'static str {
        "fixed"
    }

    fn daily_price<'a>(
        &'a self,
        request: PriceRequest,
    ) -> Pin<Box<dyn Future<Output = Result<PriceQuote, PriceLookupError>> + Send + 'a>> {
        let _ = request;
        let quote = self.quote;
        Box::pin(async move { Ok(quote) })
    }
}
