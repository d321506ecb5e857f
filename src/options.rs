use std::fmt;

use serde::Deserialize;

use crate::client::SharedQueueClient;

mod config;
mod resolver;

pub use config::DefaultConfig;
pub use resolver::{FlagMerge, OptionsResolver, QueueIdentityRule, ResolverPolicy};

/// Upper bound SQS accepts for long polling, in seconds.
pub const MAX_WAIT_TIME_SECONDS: i32 = 20;

/// Upper bound SQS accepts for messages returned by one receive call.
pub const MAX_NUMBER_OF_MESSAGES: i32 = 10;

/// Value supplied for the destroy-on-received flag.
///
/// Options loaded from a loosely typed document can carry anything in this
/// slot, so a non-boolean value stays representable until validation rejects it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FlagValue {
    Bool(bool),
    Other(serde_json::Value),
}

impl FlagValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FlagValue::Bool(b) => Some(*b),
            FlagValue::Other(_) => None,
        }
    }
}

impl From<bool> for FlagValue {
    fn from(b: bool) -> Self {
        FlagValue::Bool(b)
    }
}

impl fmt::Display for FlagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlagValue::Bool(b) => write!(f, "{}", b),
            FlagValue::Other(v) => write!(f, "{}", v),
        }
    }
}

/// Options a worker supplies before resolution.
///
/// Every field is optional. Absent fields are filled from [`DefaultConfig`]
/// by [`OptionsResolver::resolve`].
///
/// ```rust
/// use rs_sqs_options::options::RawOptions;
///
/// let raw = RawOptions::new()
///     .with_queue_name("orders")
///     .with_wait_time_seconds(10)
///     .with_destroy_on_received(true);
/// assert!(!raw.is_empty());
/// ```
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawOptions {
    /// Per-worker client. Never read from documents; attach it with [`RawOptions::with_client`].
    #[serde(skip)]
    pub client: Option<SharedQueueClient>,

    pub queue_url: Option<String>,

    pub queue_name: Option<String>,

    /// Long polling wait time, in seconds.
    pub wait_time_seconds: Option<i32>,

    /// Maximum number of messages per receive call.
    pub max_number_of_messages: Option<i32>,

    /// Whether a message is deleted as soon as it is received rather than
    /// after it was processed.
    pub destroy_on_received: Option<FlagValue>,
}

impl RawOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses options from a JSON document such as
    /// `{"queue_name": "orders", "wait_time_seconds": 10}`.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn with_client(mut self, client: SharedQueueClient) -> Self {
        self.client = Some(client);
        self
    }

    pub fn with_queue_url(mut self, queue_url: impl Into<String>) -> Self {
        self.queue_url = Some(queue_url.into());
        self
    }

    pub fn with_queue_name(mut self, queue_name: impl Into<String>) -> Self {
        self.queue_name = Some(queue_name.into());
        self
    }

    pub fn with_wait_time_seconds(mut self, wait_time_seconds: i32) -> Self {
        self.wait_time_seconds = Some(wait_time_seconds);
        self
    }

    pub fn with_max_number_of_messages(mut self, max_number_of_messages: i32) -> Self {
        self.max_number_of_messages = Some(max_number_of_messages);
        self
    }

    pub fn with_destroy_on_received(mut self, destroy_on_received: impl Into<FlagValue>) -> Self {
        self.destroy_on_received = Some(destroy_on_received.into());
        self
    }

    /// Returns `true` when no option was supplied at all.
    ///
    /// A key present with a `null` value, such as `{"queue_url": null}`,
    /// counts as not supplied, so a document holding only nulls is empty.
    pub fn is_empty(&self) -> bool {
        self.client.is_none()
            && self.queue_url.is_none()
            && self.queue_name.is_none()
            && self.wait_time_seconds.is_none()
            && self.max_number_of_messages.is_none()
            && self.destroy_on_received.is_none()
    }
}

impl fmt::Debug for RawOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawOptions")
            .field("client", &self.client.as_ref().map(|_| "<client>"))
            .field("queue_url", &self.queue_url)
            .field("queue_name", &self.queue_name)
            .field("wait_time_seconds", &self.wait_time_seconds)
            .field("max_number_of_messages", &self.max_number_of_messages)
            .field("destroy_on_received", &self.destroy_on_received)
            .finish()
    }
}

/// Fully resolved options handed to the consumer.
///
/// Only [`OptionsResolver`] builds this value and it cannot be changed
/// afterwards. The queue URL is never blank.
#[derive(Clone)]
pub struct ResolvedOptions {
    client: SharedQueueClient,
    queue_url: String,
    queue_name: Option<String>,
    wait_time_seconds: i32,
    max_number_of_messages: i32,
    destroy_on_received: FlagValue,
}

impl ResolvedOptions {
    pub fn client(&self) -> &SharedQueueClient {
        &self.client
    }

    pub fn queue_url(&self) -> &str {
        &self.queue_url
    }

    pub fn queue_name(&self) -> Option<&str> {
        self.queue_name.as_deref()
    }

    pub fn wait_time_seconds(&self) -> i32 {
        self.wait_time_seconds
    }

    pub fn max_number_of_messages(&self) -> i32 {
        self.max_number_of_messages
    }

    pub fn destroy_on_received(&self) -> &FlagValue {
        &self.destroy_on_received
    }

    /// Returns `true` only when the flag is exactly `true`.
    pub fn should_destroy_on_received(&self) -> bool {
        self.destroy_on_received == FlagValue::Bool(true)
    }
}

impl fmt::Debug for ResolvedOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedOptions")
            .field("client", &"<client>")
            .field("queue_url", &self.queue_url)
            .field("queue_name", &self.queue_name)
            .field("wait_time_seconds", &self.wait_time_seconds)
            .field("max_number_of_messages", &self.max_number_of_messages)
            .field("destroy_on_received", &self.destroy_on_received)
            .finish()
    }
}

pub(crate) fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}
