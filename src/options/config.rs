use std::{env, fmt, str::FromStr};

use crate::{
    client::{SharedQueueClient, create_sqs_client_from_env},
    errors::SqsOptionsError,
};

use super::{MAX_NUMBER_OF_MESSAGES, MAX_WAIT_TIME_SECONDS};

/// Process-wide fallback values for worker options.
///
/// Built once at startup and shared read-only with every [`OptionsResolver`](super::OptionsResolver).
///
/// # Fields
/// - `client`: The queue client used when a worker does not bring its own.
/// - `wait_time_seconds`: The wait time for long polling, in seconds.
/// - `max_number_of_messages`: The maximum number of messages to receive in a single request.
/// - `destroy_on_received`: Whether messages are deleted as soon as they are received.
#[derive(Clone)]
pub struct DefaultConfig {
    pub client: Option<SharedQueueClient>,

    /// The wait time for long polling, in seconds.
    pub wait_time_seconds: i32,

    /// The maximum number of messages to receive in a single request.
    pub max_number_of_messages: i32,

    pub destroy_on_received: bool,
}

impl Default for DefaultConfig {
    fn default() -> Self {
        DefaultConfig {
            client: None,
            wait_time_seconds: MAX_WAIT_TIME_SECONDS,
            max_number_of_messages: MAX_NUMBER_OF_MESSAGES,
            destroy_on_received: false,
        }
    }
}

impl DefaultConfig {
    pub const WAIT_TIME_SECONDS_ENV: &'static str = "SQS_WAIT_TIME_SECONDS";
    pub const MAX_NUMBER_OF_MESSAGES_ENV: &'static str = "SQS_MAX_NUMBER_OF_MESSAGES";
    pub const DESTROY_ON_RECEIVED_ENV: &'static str = "SQS_DESTROY_ON_RECEIVED";

    /// Builds defaults with an AWS client loaded from the environment.
    ///
    /// `SQS_WAIT_TIME_SECONDS`, `SQS_MAX_NUMBER_OF_MESSAGES` and
    /// `SQS_DESTROY_ON_RECEIVED` override the built-in values when set.
    pub async fn from_env() -> Result<Self, SqsOptionsError> {
        let client = create_sqs_client_from_env().await;
        Self::default().with_client(client).apply_env_overrides()
    }

    /// Applies the `SQS_*` environment overrides without touching the client.
    pub fn apply_env_overrides(self) -> Result<Self, SqsOptionsError> {
        self.apply_overrides(|key| env::var(key).ok())
    }

    /// Applies overrides read through `lookup`, keyed by the `SQS_*` names.
    ///
    /// Values that do not parse, or numbers above the SQS limits, are
    /// rejected with [`SqsOptionsError::InvalidDefault`].
    pub fn apply_overrides<F>(mut self, lookup: F) -> Result<Self, SqsOptionsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = parse_override(&lookup, Self::WAIT_TIME_SECONDS_ENV)? {
            self.wait_time_seconds = v;
        }
        if let Some(v) = parse_override(&lookup, Self::MAX_NUMBER_OF_MESSAGES_ENV)? {
            self.max_number_of_messages = v;
        }
        if let Some(v) = parse_override(&lookup, Self::DESTROY_ON_RECEIVED_ENV)? {
            self.destroy_on_received = v;
        }
        self.check_limits()?;
        tracing::debug!(defaults = ?self, "loaded SQS option defaults");
        Ok(self)
    }

    /// Fails when a numeric default is above what SQS accepts.
    pub fn check_limits(&self) -> Result<(), SqsOptionsError> {
        if self.wait_time_seconds > MAX_WAIT_TIME_SECONDS {
            return Err(SqsOptionsError::InvalidDefault {
                key: Self::WAIT_TIME_SECONDS_ENV.to_string(),
                value: self.wait_time_seconds.to_string(),
            });
        }
        if self.max_number_of_messages > MAX_NUMBER_OF_MESSAGES {
            return Err(SqsOptionsError::InvalidDefault {
                key: Self::MAX_NUMBER_OF_MESSAGES_ENV.to_string(),
                value: self.max_number_of_messages.to_string(),
            });
        }
        Ok(())
    }

    pub fn with_client(mut self, client: SharedQueueClient) -> Self {
        self.client = Some(client);
        self
    }

    pub fn with_wait_time_seconds(mut self, wait_time_seconds: i32) -> Self {
        self.wait_time_seconds = wait_time_seconds;
        self
    }

    pub fn with_max_number_of_messages(mut self, max_number_of_messages: i32) -> Self {
        self.max_number_of_messages = max_number_of_messages;
        self
    }

    pub fn with_destroy_on_received(mut self, destroy_on_received: bool) -> Self {
        self.destroy_on_received = destroy_on_received;
        self
    }
}

impl fmt::Debug for DefaultConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultConfig")
            .field("client", &self.client.as_ref().map(|_| "<client>"))
            .field("wait_time_seconds", &self.wait_time_seconds)
            .field("max_number_of_messages", &self.max_number_of_messages)
            .field("destroy_on_received", &self.destroy_on_received)
            .finish()
    }
}

fn parse_override<T, F>(lookup: &F, key: &str) -> Result<Option<T>, SqsOptionsError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    let parsed = raw.trim().parse::<T>();
    match parsed {
        Ok(v) => Ok(Some(v)),
        Err(_) => Err(SqsOptionsError::InvalidDefault {
            key: key.to_string(),
            value: raw,
        }),
    }
}
