//! amqp-burst - disposable RabbitMQ test publisher.
//!
//! Reads a JSON config, connects to the broker, declares a queue and
//! publishes a fixed number of numbered text messages to it.
//!
//! ## Flow
//!
//! ```text
//! config.json → connect → queue.declare → publish × retries → close
//! ```

pub mod burst;
pub mod config;
pub mod queue;

// Re-export commonly used types
pub use burst::{publish_burst, BurstReport};
pub use config::{Config, ConfigError, ConsumeConfig, QueueConfig, SendConfig};
pub use queue::{MessageSink, PublishError, PublishFlags, Publisher};
