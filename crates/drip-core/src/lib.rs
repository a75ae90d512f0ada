//! # drip-core
//!
//! Core contracts for the drip dollar-cost-averaging simulator.
//!
//! A run is one linear pipeline: a validated [`PlanConfig`] is turned into
//! an ordered buy schedule, optionally narrowed to a set of checkpoints,
//! then valued event by event against an injected [`PriceSource`] under a
//! named [`PacingPolicy`]. The result is an ordered sequence of
//! [`Snapshot`]s (cumulative invested capital vs. computed basket value),
//! foldable into a [`ChartSeries`] for whatever renders it.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`adapters`] | Price-source adapters (CoinGecko) |
//! | [`chart`] | Ordered series contract for rendering collaborators |
//! | [`config`] | Validated plan configuration |
//! | [`domain`] | Domain types (AssetId, TradeDate, BuyEvent, Snapshot) |
//! | [`error`] | Core error types |
//! | [`http_client`] | HTTP transport abstraction |
//! | [`pacing`] | Rate-limit policy and suspension points |
//! | [`price_source`] | Price-lookup capability |
//! | [`schedule`] | Schedule builder and checkpoint selection |
//! | [`valuator`] | Portfolio valuation loop |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use drip_core::{
//!     build_schedule, select_events, AssetId, CoinGeckoSource, PacingPolicy,
//!     PlanConfig, PortfolioValuator, QuotaPacer, TradeDate,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let plan = PlanConfig::new(
//!         vec![AssetId::parse("solana")?, AssetId::parse("dogecoin")?],
//!         "aud",
//!         TradeDate::parse("2025-06-28")?,
//!         TradeDate::parse("2025-07-04")?,
//!         TradeDate::parse("2026-06-28")?,
//!         14,
//!         50.0,
//!     )?;
//!
//!     let schedule = build_schedule(&plan);
//!     let checkpoints = select_events(&schedule, &[0, 6, 13, 25]);
//!
//!     let valuator = PortfolioValuator::new(
//!         Arc::new(CoinGeckoSource::new()),
//!         Arc::new(QuotaPacer::new(&PacingPolicy::coingecko_default())),
//!     );
//!     let snapshots = valuator.value_schedule(&plan, &checkpoints).await?;
//!
//!     for snapshot in &snapshots {
//!         println!("{} {:.2} {:.2}", snapshot.date, snapshot.invested, snapshot.value);
//!     }
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod chart;
pub mod config;
pub mod domain;
pub mod error;
pub mod http_client;
pub mod pacing;
pub mod price_source;
pub mod schedule;
pub mod valuator;

// Re-export commonly used types at crate root for convenience

// Adapter implementations
pub use adapters::{CoinGeckoSource, COINGECKO_API_BASE};

// Chart series contract
pub use chart::ChartSeries;

// Plan configuration
pub use config::PlanConfig;

// Domain models
pub use domain::{validate_currency_code, AssetId, BuyEvent, PriceQuote, Snapshot, TradeDate};

// Error types
pub use error::{CoreError, PriceLookupCause, PriceLookupError, ValidationError};

// HTTP client types
pub use http_client::{
    HttpClient, HttpError, HttpRequest, HttpResponse, NoopHttpClient, ReqwestHttpClient,
};

// Pacing
pub use pacing::{NoopPacer, Pacer, PacingPolicy, QuotaPacer};

// Price source contract
pub use price_source::{FixedPriceSource, PriceRequest, PriceSource};

// Schedule construction
pub use schedule::{build_schedule, select_events};

// Valuation
pub use valuator::{NullSnapshotLog, PortfolioValuator, SnapshotLog};
