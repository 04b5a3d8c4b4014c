//! Broker error types. Every variant is fatal to the run.

use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    #[error("Failed to connect to RabbitMQ: {0}")]
    Connect(#[source] lapin::Error),

    #[error("Failed to open a channel: {0}")]
    Channel(#[source] lapin::Error),

    #[error("Failed to declare a queue: {0}")]
    Declare(#[source] lapin::Error),

    #[error("Failed to publish a message: {0}")]
    Publish(#[source] lapin::Error),

    #[error("Failed to confirm a publish: {0}")]
    Confirm(#[source] lapin::Error),

    #[error("Publish deadline of {}s elapsed before message #{sequence}", deadline.as_secs())]
    DeadlineElapsed { sequence: i64, deadline: Duration },
}

/// Result type for broker operations
pub type PublishResult<T> = Result<T, PublishError>;
