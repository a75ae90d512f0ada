//! Rendering of schedules and chart series as tables or JSON.

use drip_core::{BuyEvent, ChartSeries};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::CliError;

#[derive(Serialize)]
struct ScheduleRow<'a> {
    index: usize,
    date: &'a str,
    amount: f64,
}

/// Print the buy schedule in the requested format.
pub fn render_schedule(
    events: &[BuyEvent],
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Table => {
            println!("{:>5}  {:<10}  {:>10}", "index", "date", "amount");
            for (index, event) in events.iter().enumerate() {
                println!(
                    "{index:>5}  {:<10}  {:>10.2}",
                    event.date.to_string(),
                    event.amount
                );
            }
            println!();
            println!("{} buys scheduled", events.len());
        }
        OutputFormat::Json => {
            let dates: Vec<String> = events.iter().map(|e| e.date.to_string()).collect();
            let rows: Vec<ScheduleRow<'_>> = events
                .iter()
                .enumerate()
                .map(|(index, event)| ScheduleRow {
                    index,
                    date: &dates[index],
                    amount: event.amount,
                })
                .collect();
            print_json(&rows, pretty)?;
        }
    }
    Ok(())
}

/// Print the valuation result in the requested format.
pub fn render_series(series: &ChartSeries, format: OutputFormat, pretty: bool) -> Result<(), CliError> {
    match format {
        OutputFormat::Table => {
            println!("{:<10}  {:>12}  {:>12}", "date", "invested", "value");
            for index in 0..series.len() {
                println!(
                    "{:<10}  {:>12.2}  {:>12.2}",
                    series.labels[index], series.invested[index], series.value[index]
                );
            }
        }
        OutputFormat::Json => print_json(series, pretty)?,
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<(), CliError> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{rendered}");
    Ok(())
}
