//! Demo: feeding the monitor through a channel
//!
//! Shows how to drive glucowatch from your own producer (a meter driver, a
//! message queue consumer, a test harness) by pushing values into a
//! [`ChannelSource`] and ticking a [`MonitorCore`] yourself.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example channel_feed
//! ```

use std::thread;
use std::time::Duration;

use glucowatch::{ChannelSource, MonitorConfig, MonitorCore, MonitorError, SeverityBand};

/// A morning that drifts low, recovers, then spikes after breakfast.
const READINGS: &[f64] = &[
    92.0, 84.5, 71.0, 66.2, 63.8, 78.0, 101.3, 125.0, 148.6, 171.2, 188.9, 195.4, 176.0, 150.2,
    131.7,
];

fn main() -> anyhow::Result<()> {
    let (tx, mut source) = ChannelSource::create("demo-meter");
    let mut core = MonitorCore::new(MonitorConfig::default())?;

    // Producer thread: one reading every 200ms, then hang up
    let producer = thread::spawn(move || {
        for &value in READINGS {
            if tx.blocking_send(value).is_err() {
                break; // Receiver dropped
            }
            thread::sleep(Duration::from_millis(200));
        }
    });

    println!("Receiving readings from a channel...\n");

    loop {
        match core.tick(&mut source) {
            Ok(update) => {
                let reading = update.reading;
                print!(
                    "{}  {:>6.1} mg/dL  {:<4}",
                    reading.time_label(),
                    reading.value,
                    update.band().symbol()
                );
                match update.advice() {
                    Some(advice) => println!("  {}", advice),
                    None => println!(),
                }
            }
            Err(MonitorError::SourceUnavailable(reason)) if reason == "channel closed" => break,
            Err(MonitorError::SourceUnavailable(_)) => {
                // Nothing pushed yet
                thread::sleep(Duration::from_millis(50));
            }
            Err(e) => return Err(e.into()),
        }
    }

    let _ = producer.join();

    println!("\nRecent alerts:");
    for band in SeverityBand::LOGGABLE {
        let values: Vec<String> = core
            .ledger_snapshot(band)
            .iter()
            .map(|r| format!("{}", r.value))
            .collect();
        println!("  {:<8} {}", band.history_title(), values.join(", "));
    }

    Ok(())
}
