use crate::domain::{validate_currency_code, validate_positive, AssetId, TradeDate};
use crate::ValidationError;

/// Validated DCA plan: what to buy, how often, for how much, and in which
/// quote currency.
///
/// All fields are checked eagerly in [`PlanConfig::new`]; a constructed plan
/// can always be turned into a schedule. `first_recurrence` earlier than
/// `lump_sum_date` is deliberately accepted: the lump sum is still emitted
/// first and never reordered, since insertion order is part of the schedule
/// builder's observable contract.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanConfig {
    pub basket: Vec<AssetId>,
    pub currency: String,
    pub lump_sum_date: TradeDate,
    pub first_recurrence: TradeDate,
    pub end_date: TradeDate,
    pub interval_days: u32,
    pub buy_amount: f64,
}

impl PlanConfig {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        basket: Vec<AssetId>,
        currency: impl AsRef<str>,
        lump_sum_date: TradeDate,
        first_recurrence: TradeDate,
        end_date: TradeDate,
        interval_days: u32,
        buy_amount: f64,
    ) -> Result<Self, ValidationError> {
        if basket.is_empty() {
            return Err(ValidationError::EmptyBasket);
        }
        for (index, id) in basket.iter().enumerate() {
            if basket[..index].contains(id) {
                return Err(ValidationError::DuplicateAsset {
                    id: id.as_str().to_owned(),
                });
            }
        }

        if interval_days == 0 {
            return Err(ValidationError::NonPositiveInterval);
        }
        validate_positive("buy_amount", buy_amount)?;

        if end_date < lump_sum_date {
            return Err(ValidationError::EndBeforeStart {
                start: lump_sum_date,
                end: end_date,
            });
        }

        Ok(Self {
            basket,
            currency: validate_currency_code(currency.as_ref())?,
            lump_sum_date,
            first_recurrence,
            end_date,
            interval_days,
            buy_amount,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn basket(ids: &[&str]) -> Vec<AssetId> {
        ids.iter()
            .map(|id| AssetId::parse(id).expect("valid id"))
            .collect()
    }

    fn date(input: &str) -> TradeDate {
        TradeDate::parse(input).expect("valid date")
    }

    #[test]
    fn accepts_a_valid_plan() {
        let plan = PlanConfig::new(
            basket(&["solana", "dogecoin"]),
            "AUD",
            date("2025-06-28"),
            date("2025-07-04"),
            date("2026-06-28"),
            14,
            50.0,
        )
        .expect("plan should validate");

        assert_eq!(plan.currency, "aud");
        assert_eq!(plan.basket.len(), 2);
    }

    #[test]
    fn rejects_empty_basket() {
        let err = PlanConfig::new(
            Vec::new(),
            "aud",
            date("2025-06-28"),
            date("2025-07-04"),
            date("2026-06-28"),
            14,
            50.0,
        )
        .expect_err("must fail");
        assert!(matches!(err, ValidationError::EmptyBasket));
    }

    #[test]
    fn rejects_duplicate_assets() {
        let err = PlanConfig::new(
            basket(&["solana", "solana"]),
            "aud",
            date("2025-06-28"),
            date("2025-07-04"),
            date("2026-06-28"),
            14,
            50.0,
        )
        .expect_err("must fail");
        assert!(matches!(err, ValidationError::DuplicateAsset { .. }));
    }

    #[test]
    fn rejects_zero_interval() {
        let err = PlanConfig::new(
            basket(&["solana"]),
            "aud",
            date("2025-06-28"),
            date("2025-07-04"),
            date("2026-06-28"),
            0,
            50.0,
        )
        .expect_err("must fail");
        assert!(matches!(err, ValidationError::NonPositiveInterval));
    }

    #[test]
    fn rejects_end_before_lump_sum() {
        let err = PlanConfig::new(
            basket(&["solana"]),
            "aud",
            date("2025-06-28"),
            date("2025-07-04"),
            date("2025-06-01"),
            14,
            50.0,
        )
        .expect_err("must fail");
        assert!(matches!(err, ValidationError::EndBeforeStart { .. }));
    }

    #[test]
    fn accepts_first_recurrence_before_lump_sum() {
        // Permissive on purpose: the lump sum stays first, unordered
        // relative to the recurring buys.
        let plan = PlanConfig::new(
            basket(&["solana"]),
            "aud",
            date("2025-07-04"),
            date("2025-06-28"),
            date("2026-06-28"),
            14,
            50.0,
        );
        assert!(plan.is_ok());
    }
}
