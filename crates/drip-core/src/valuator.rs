//! Portfolio valuation: walks the buy schedule in order, prices the basket
//! per event, and accumulates invested capital against computed value.

use std::sync::Arc;

use crate::config::PlanConfig;
use crate::domain::{BuyEvent, Snapshot};
use crate::error::PriceLookupError;
use crate::pacing::Pacer;
use crate::price_source::{PriceRequest, PriceSource};

/// Observer receiving one record per completed snapshot, in emission order,
/// plus the terminal failure if the run aborts. Append-only.
pub trait SnapshotLog: Send + Sync {
    fn record(&self, snapshot: &Snapshot);
    fn record_failure(&self, error: &PriceLookupError);
}

/// Log sink that drops everything.
#[derive(Debug, Default)]
pub struct NullSnapshotLog;

impl SnapshotLog for NullSnapshotLog {
    fn record(&self, _snapshot: &Snapshot) {}
    fn record_failure(&self, _error: &PriceLookupError) {}
}

/// Values a buy schedule against an injected price source.
///
/// One logical task: lookups are issued strictly sequentially, within an
/// event's asset loop and across events, to respect the source's rate
/// limit. There is no cancellation; a run proceeds to completion or first
/// failure.
pub struct PortfolioValuator {
    source: Arc<dyn PriceSource>,
    pacer: Arc<dyn Pacer>,
    log: Arc<dyn SnapshotLog>,
}

impl PortfolioValuator {
    pub fn new(source: Arc<dyn PriceSource>, pacer: Arc<dyn Pacer>) -> Self {
        Self {
            source,
            pacer,
            log: Arc::new(NullSnapshotLog),
        }
    }

    pub fn with_log(mut self, log: Arc<dyn SnapshotLog>) -> Self {
        self.log = log;
        self
    }

    /// Produce one snapshot per buy event, preserving input order.
    ///
    /// Each event's amount is split evenly across the basket and every asset
    /// is priced at the event's own date, in basket order. The units/price
    /// round trip per asset folds back to exactly the allocated spend under
    /// a same-date quote; it is kept in that form because pricing the same
    /// units at any other date's quote is what moves `value` away from
    /// `invested`.
    ///
    /// # Errors
    ///
    /// Aborts on the first failed lookup: no snapshot for that event, no
    /// further events, no retry. The failure reaches the log before the
    /// error is returned.
    pub async fn value_schedule(
        &self,
        config: &PlanConfig,
        events: &[BuyEvent],
    ) -> Result<Vec<Snapshot>, PriceLookupError> {
        let asset_count = config.basket.len() as f64;
        let mut snapshots = Vec::with_capacity(events.len());
        let mut invested = 0.0_f64;

        for event in events {
            invested += event.amount;
            let per_asset_spend = event.amount / asset_count;
            let mut value = 0.0_f64;

            for asset in &config.basket {
                self.pacer.before_lookup().await;

                let request =
                    PriceRequest::new(asset.clone(), event.date, config.currency.clone());
                let quote = match self.source.daily_price(request).await {
                    Ok(quote) => quote,
                    Err(error) => {
                        self.log.record_failure(&error);
                        return Err(error);
                    }
                };

                let units_bought = per_asset_spend / quote.value();
                value += units_bought * quote.value();
            }

            let snapshot = Snapshot {
                date: event.date,
                invested,
                value,
            };
            self.log.record(&snapshot);
            snapshots.push(snapshot);

            self.pacer.between_events().await;
        }

        Ok(snapshots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AssetId, PriceQuote, TradeDate};
    use crate::error::PriceLookupCause;
    use crate::pacing::NoopPacer;
    use std::collections::VecDeque;
    use std::future::Future;
    use std::pin::Pin;
    use std::sync::Mutex;

    struct ScriptedSource {
        script: Mutex<VecDeque<Result<f64, PriceLookupCause>>>,
    }

    impl ScriptedSource {
        fn new(script: Vec<Result<f64, PriceLookupCause>>) -> Self {
            Self {
                script: Mutex::new(script.into()),
            }
        }
    }

    impl PriceSource for ScriptedSource {
        fn id(&self) -> &'static str {
            "scripted"
        }

        fn daily_price<'a>(
            &'a self,
            request: PriceRequest,
        ) -> Pin<Box<dyn Future<Output = Result<PriceQuote, PriceLookupError>> + Send + 'a>>
        {
            let next = self
                .script
                .lock()
                .expect("script should not be poisoned")
                .pop_front();
            Box::pin(async move {
                match next {
                    Some(Ok(price)) => Ok(PriceQuote::new(price).expect("scripted prices are positive")),
                    Some(Err(cause)) => {
                        Err(PriceLookupError::new(request.asset, request.date, cause))
                    }
                    None => Err(PriceLookupError::new(
                        request.asset,
                        request.date,
                        PriceLookupCause::Transport(String::from("script exhausted")),
                    )),
                }
            })
        }
    }

    fn two_asset_plan() -> PlanConfig {
        PlanConfig::new(
            vec![
                AssetId::parse("solana").expect("valid id"),
                AssetId::parse("dogecoin").expect("valid id"),
            ],
            "aud",
            TradeDate::parse("2025-06-28").expect("valid date"),
            TradeDate::parse("2025-07-04").expect("valid date"),
            TradeDate::parse("2026-06-28").expect("valid date"),
            14,
            50.0,
        )
        .expect("plan should validate")
    }

    #[tokio::test]
    async fn two_assets_at_100_and_50_value_a_50_buy_at_exactly_50() {
        let plan = two_asset_plan();
        let source = Arc::new(ScriptedSource::new(vec![Ok(100.0), Ok(50.0)]));
        let valuator = PortfolioValuator::new(source, Arc::new(NoopPacer));

        let event = BuyEvent::new(plan.lump_sum_date, 50.0).expect("valid event");
        let snapshots = valuator
            .value_schedule(&plan, &[event])
            .await
            .expect("run should succeed");

        // 25 AUD buys 0.25 units at 100 and 0.5 units at 50.
        assert_eq!(snapshots.len(), 1);
        assert!((snapshots[0].value - 50.0).abs() < 1e-9);
        assert!((snapshots[0].invested - 50.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn aborts_without_a_snapshot_when_a_lookup_fails() {
        let plan = two_asset_plan();
        let source = Arc::new(ScriptedSource::new(vec![
            Ok(100.0),
            Err(PriceLookupCause::UpstreamStatus(500)),
        ]));
        let valuator = PortfolioValuator::new(source, Arc::new(NoopPacer));

        let event = BuyEvent::new(plan.lump_sum_date, 50.0).expect("valid event");
        let error = valuator
            .value_schedule(&plan, &[event])
            .await
            .expect_err("run should abort");

        assert_eq!(error.asset.as_str(), "dogecoin");
        assert_eq!(error.date, plan.lump_sum_date);
    }
}
