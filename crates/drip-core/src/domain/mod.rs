mod asset;
mod date;
mod models;

pub use asset::{validate_currency_code, AssetId};
pub use date::TradeDate;
pub use models::{BuyEvent, PriceQuote, Snapshot};

pub(crate) use models::validate_positive;
