use thiserror::Error;

/// Error types for SQS options validation and resolution.
///
/// Every variant except [`SqsOptionsError::QueueUrlLookup`] and
/// [`SqsOptionsError::InvalidDefault`] is a configuration
/// validity failure. Those are fatal to the current resolution attempt and are
/// never retried.
#[derive(Debug, Error)]
pub enum SqsOptionsError {
    /// No options were supplied at all.
    #[error("you must supply SQS options for the worker")]
    MissingOptions,

    /// The queue identity is under-specified.
    #[error(
        "you must provide either a SQS queue URL or queue name, like `queue_url: \"url\"` or `queue_name: \"name\"`"
    )]
    MissingQueueIdentity,

    /// Neither the options nor the process defaults carry a client.
    #[error("you must provide a SQS client")]
    MissingClient,

    #[error("invalid wait time {value}: provide a valid wait time like `wait_time_seconds: 20`")]
    InvalidWaitTime { value: i32 },

    #[error(
        "invalid max number of messages {value}: provide a valid max number of messages like `max_number_of_messages: 10`"
    )]
    InvalidBatchSize { value: i32 },

    #[error(
        "invalid destroy on received {value}: provide a valid destroy on received like `destroy_on_received: true`"
    )]
    InvalidDestroyFlag { value: String },

    /// A process default read from the environment could not be parsed.
    #[error("invalid default for {key}: {value:?}")]
    InvalidDefault { key: String, value: String },

    /// The queue client failed to translate a queue name into a URL.
    ///
    /// The client's error is carried unchanged.
    #[error("failed to look up URL for queue {queue_name}: {source}")]
    QueueUrlLookup {
        queue_name: String,
        #[source]
        source: GenericError,
    },
}

impl SqsOptionsError {
    /// Returns `true` for configuration validity failures, `false` for errors
    /// that came from the queue client or the environment.
    pub fn is_validation(&self) -> bool {
        !matches!(
            self,
            SqsOptionsError::QueueUrlLookup { .. } | SqsOptionsError::InvalidDefault { .. }
        )
    }
}

/// Generic error type for handling unexpected errors.
#[derive(Debug, Error)]
pub struct GenericError(String);

impl GenericError {
    /// Creates a new `GenericError` with the provided message.
    pub fn new(message: String) -> Self {
        GenericError(message)
    }
}

impl std::fmt::Display for GenericError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for GenericError {
    fn from(s: String) -> Self {
        GenericError::new(s)
    }
}
