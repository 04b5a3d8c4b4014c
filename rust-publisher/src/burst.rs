//! The publish loop.
//!
//! Publishes `retries` bodies of the form `"{message} #{n}"` in order. A single
//! deadline, computed once before the first publish, bounds the whole loop:
//! slow early publishes eat into the budget of later ones.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use tokio::time::{timeout_at, Instant};
use tracing::info;

use crate::config::SendConfig;
use crate::queue::{message_body, MessageSink, PublishError, PublishFlags, PublishResult};

/// Outcome of a completed publish loop.
#[derive(Debug, Clone)]
pub struct BurstReport {
    /// Number of messages published
    pub sent: u64,
    /// Wall-clock time the loop started
    pub started_at: SystemTime,
    /// Wall-clock time the loop finished
    pub finished_at: SystemTime,
    pub elapsed: Duration,
}

impl BurstReport {
    /// Log the timing summary.
    pub fn log(&self) {
        info!(
            sent = self.sent,
            started_at_ms = unix_millis(self.started_at),
            finished_at_ms = unix_millis(self.finished_at),
            elapsed_ms = self.elapsed.as_millis() as u64,
            "burst_timing"
        );
    }
}

fn unix_millis(at: SystemTime) -> u64 {
    at.duration_since(UNIX_EPOCH).unwrap_or_default().as_millis() as u64
}

/// Publish every message of the burst to `routing_key`.
///
/// Stops at the first failure, including the shared deadline elapsing.
pub async fn publish_burst<S: MessageSink>(
    sink: &mut S,
    routing_key: &str,
    send: &SendConfig,
) -> PublishResult<BurstReport> {
    let flags = PublishFlags::from(send);
    let budget = send.deadline();
    // A deadline past the end of the clock is no deadline.
    let deadline = budget.and_then(|d| Instant::now().checked_add(d).map(|at| (at, d)));

    let started_at = SystemTime::now();
    let clock = Instant::now();
    let mut sent = 0u64;

    info!(
        retries = send.retries,
        exchange = %send.exchange,
        routing_key = %routing_key,
        deadline_secs = ?budget.map(|d| d.as_secs()),
        "burst_starting"
    );

    for sequence in 1..=send.retries {
        let body = message_body(&send.message, sequence);
        let publish = sink.publish(&send.exchange, routing_key, flags, body.as_bytes());

        match deadline {
            Some((at, budget)) => timeout_at(at, publish)
                .await
                .map_err(|_| PublishError::DeadlineElapsed {
                    sequence,
                    deadline: budget,
                })??,
            None => publish.await?,
        }

        sent += 1;
        info!(sequence = sequence, body = %body, "message_sent");
    }

    let report = BurstReport {
        sent,
        started_at,
        finished_at: SystemTime::now(),
        elapsed: clock.elapsed(),
    };

    if sent > 0 {
        report.log();
    }

    Ok(report)
}
