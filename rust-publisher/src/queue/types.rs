//! Message types shared by the publish loop and the broker session.

use lapin::options::BasicPublishOptions;

use crate::config::SendConfig;

/// Content type attached to every published body.
pub const CONTENT_TYPE: &str = "text/plain";

/// Delivery flags for `basic.publish`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PublishFlags {
    /// Return the message if no queue is bound
    pub mandatory: bool,
    /// Return the message if no consumer can take it right away
    pub immediate: bool,
}

impl From<&SendConfig> for PublishFlags {
    fn from(send: &SendConfig) -> Self {
        Self {
            mandatory: send.mandatory,
            immediate: send.immediate,
        }
    }
}

impl From<PublishFlags> for BasicPublishOptions {
    fn from(flags: PublishFlags) -> Self {
        BasicPublishOptions {
            mandatory: flags.mandatory,
            immediate: flags.immediate,
        }
    }
}

/// Build the body for the `sequence`-th message: `"{message} #{sequence}"`.
pub fn message_body(message: &str, sequence: i64) -> String {
    format!("{message} #{sequence}")
}
