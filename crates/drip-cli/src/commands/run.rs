use std::sync::Arc;

use drip_core::{
    build_schedule, select_events, ChartSeries, CoinGeckoSource, FixedPriceSource, NoopPacer,
    Pacer, PacingPolicy, PortfolioValuator, PriceLookupError, PriceSource, QuotaPacer, Snapshot,
    SnapshotLog,
};

use crate::cli::{Cli, RunArgs};
use crate::error::CliError;
use crate::output;
use crate::plan::builtin_plan;

/// Progress log on stderr, keeping stdout clean for the rendered result.
struct StderrSnapshotLog;

impl SnapshotLog for StderrSnapshotLog {
    fn record(&self, snapshot: &Snapshot) {
        eprintln!(
            "{} invested {:.2} value {:.2}",
            snapshot.date, snapshot.invested, snapshot.value
        );
    }

    fn record_failure(&self, error: &PriceLookupError) {
        eprintln!("aborting: {error}");
    }
}

pub async fn execute(cli: &Cli, args: &RunArgs) -> Result<(), CliError> {
    let plan = builtin_plan()?;
    let schedule = build_schedule(&plan);
    let scheduled = schedule.len();
    let events = if args.full {
        schedule
    } else {
        select_events(&schedule, &args.checkpoints)
    };

    let (source, pacer): (Arc<dyn PriceSource>, Arc<dyn Pacer>) = if args.offline {
        (
            Arc::new(FixedPriceSource::new(args.price)?),
            Arc::new(NoopPacer),
        )
    } else {
        (
            Arc::new(CoinGeckoSource::new()),
            Arc::new(QuotaPacer::new(&PacingPolicy::coingecko_default())),
        )
    };

    eprintln!(
        "valuing {} of {} buys via {}",
        events.len(),
        scheduled,
        source.id()
    );

    let valuator =
        PortfolioValuator::new(source, pacer).with_log(Arc::new(StderrSnapshotLog));
    let snapshots = valuator.value_schedule(&plan, &events).await?;

    let series = ChartSeries::from_snapshots(&snapshots);
    output::render_series(&series, cli.format, cli.pretty)
}
