mod coingecko;

pub use coingecko::{CoinGeckoSource, COINGECKO_API_BASE};
