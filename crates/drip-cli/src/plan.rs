//! The built-in plan: fixed at build time, validated at startup.

use drip_core::{AssetId, PlanConfig, TradeDate, ValidationError};

/// CoinGecko ids of the basket, in purchase order.
const BASKET: [&str; 6] = [
    "solana",
    "avalanche-2",
    "dogecoin",
    "pepe",
    "bonk",
    "injective-protocol",
];

/// Fortnightly AUD crypto plan: a lump sum on 2025-06-28, then 50 AUD every
/// 14 days from 2025-07-04 through one year after the lump sum.
pub fn builtin_plan() -> Result<PlanConfig, ValidationError> {
    let basket = BASKET
        .iter()
        .map(|id| AssetId::parse(id))
        .collect::<Result<Vec<_>, _>>()?;

    PlanConfig::new(
        basket,
        "aud",
        TradeDate::parse("2025-06-28")?,
        TradeDate::parse("2025-07-04")?,
        TradeDate::parse("2026-06-28")?,
        14,
        50.0,
    )
}
