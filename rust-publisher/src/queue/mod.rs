//! Queue module for RabbitMQ operations.
//!
//! This module provides:
//! - The broker session (connect, declare, publish, close)
//! - The `MessageSink` seam the publish loop is written against
//! - Message body and flag types

pub mod error;
pub mod publisher;
pub mod types;

pub use error::{PublishError, PublishResult};
pub use publisher::{describe_endpoint, MessageSink, Publisher};
pub use types::{message_body, PublishFlags, CONTENT_TYPE};
