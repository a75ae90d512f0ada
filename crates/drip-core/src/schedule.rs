//! Schedule generation: one lump-sum buy followed by fixed-interval
//! recurring buys.

use crate::config::PlanConfig;
use crate::domain::BuyEvent;

/// Build the ordered buy schedule for a plan.
///
/// The lump-sum event always comes first, independent of the recurrence
/// cadence. Recurring events start at `first_recurrence` and repeat every
/// `interval_days`; a buy landing exactly on `end_date` is kept, anything
/// strictly after it is dropped. Output is insertion order with no
/// deduplication and no reordering.
///
/// Pure and deterministic: no I/O, no clock.
pub fn build_schedule(config: &PlanConfig) -> Vec<BuyEvent> {
    let mut events = vec![BuyEvent {
        date: config.lump_sum_date,
        amount: config.buy_amount,
    }];

    let mut date = config.first_recurrence;
    while date <= config.end_date {
        events.push(BuyEvent {
            date,
            amount: config.buy_amount,
        });
        match date.plus_days(config.interval_days) {
            Some(next) => date = next,
            None => break,
        }
    }

    events
}

/// Keep only the events whose schedule position is in `indices`, preserving
/// schedule order.
///
/// Positions past the end of the schedule are skipped silently, never an
/// error: callers use this to pick optional checkpoints without knowing the
/// schedule length.
pub fn select_events(schedule: &[BuyEvent], indices: &[usize]) -> Vec<BuyEvent> {
    schedule
        .iter()
        .enumerate()
        .filter(|(index, _)| indices.contains(index))
        .map(|(_, event)| *event)
        .collect()
}
