use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::errors::{GenericError, SqsOptionsError};

use super::{
    DefaultConfig, FlagValue, MAX_NUMBER_OF_MESSAGES, MAX_WAIT_TIME_SECONDS, RawOptions,
    ResolvedOptions, is_blank,
};

/// When a missing queue identity is reported by [`OptionsResolver::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueueIdentityRule {
    /// Legacy check: fails only when the URL is blank and the name is not.
    ///
    /// Options with neither a URL nor a name pass validation under this rule.
    /// [`OptionsResolver::resolve`] still refuses them, so no resolved value
    /// ever carries a blank URL.
    #[default]
    Literal,

    /// Fails when both the URL and the name are blank.
    RequireEither,
}

/// How an explicitly supplied destroy flag is merged with the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlagMerge {
    /// Legacy "value or default": an explicit `false` counts as unset and the
    /// default replaces it.
    #[default]
    Truthiness,

    /// Any explicitly supplied value, `false` included, is kept.
    Presence,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResolverPolicy {
    pub queue_identity: QueueIdentityRule,
    pub flag_merge: FlagMerge,
}

/// Validates raw worker options and resolves them against process defaults.
///
/// The defaults are injected and only ever read, so one resolver can be
/// shared by every worker of the process.
///
/// # Example
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use rs_sqs_options::options::{DefaultConfig, OptionsResolver, RawOptions};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let defaults = DefaultConfig::from_env().await?;
///     let resolver = OptionsResolver::new(Arc::new(defaults));
///
///     let options = resolver
///         .validate_and_resolve(RawOptions::new().with_queue_url("https://sqs.region.amazonaws.com/account/orders"))
///         .await?;
///     println!("polling {}", options.queue_url());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct OptionsResolver {
    defaults: Arc<DefaultConfig>,
    policy: ResolverPolicy,
}

impl OptionsResolver {
    pub fn new(defaults: Arc<DefaultConfig>) -> Self {
        OptionsResolver {
            defaults,
            policy: ResolverPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: ResolverPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn defaults(&self) -> &DefaultConfig {
        &self.defaults
    }

    pub fn policy(&self) -> ResolverPolicy {
        self.policy
    }

    /// Checks raw options and reports the first violated rule.
    ///
    /// Rules run in a fixed order: options present, queue identity, client,
    /// wait time, batch size, destroy flag. Only upper bounds are enforced on
    /// the numeric options.
    pub fn validate(&self, raw: &RawOptions) -> Result<(), SqsOptionsError> {
        let result = self.check(raw);
        if let Err(e) = &result {
            warn!(error = %e, options = ?raw, "invalid SQS options");
        }
        result
    }

    fn check(&self, raw: &RawOptions) -> Result<(), SqsOptionsError> {
        if raw.is_empty() {
            return Err(SqsOptionsError::MissingOptions);
        }

        let url_blank = is_blank(raw.queue_url.as_deref());
        let name_blank = is_blank(raw.queue_name.as_deref());
        let identity_missing = match self.policy.queue_identity {
            QueueIdentityRule::Literal => url_blank && !name_blank,
            QueueIdentityRule::RequireEither => url_blank && name_blank,
        };
        if identity_missing {
            return Err(SqsOptionsError::MissingQueueIdentity);
        }

        if self.defaults.client.is_none() && raw.client.is_none() {
            return Err(SqsOptionsError::MissingClient);
        }

        if let Some(value) = raw.wait_time_seconds.filter(|v| *v > MAX_WAIT_TIME_SECONDS) {
            return Err(SqsOptionsError::InvalidWaitTime { value });
        }

        if let Some(value) = raw
            .max_number_of_messages
            .filter(|v| *v > MAX_NUMBER_OF_MESSAGES)
        {
            return Err(SqsOptionsError::InvalidBatchSize { value });
        }

        match &raw.destroy_on_received {
            Some(flag @ FlagValue::Other(_)) => Err(SqsOptionsError::InvalidDestroyFlag {
                value: flag.to_string(),
            }),
            _ => Ok(()),
        }
    }

    /// Merges defaults into raw options and looks up the queue URL if needed.
    ///
    /// Expects options that already passed [`OptionsResolver::validate`]; it
    /// does not validate them again. Defaults that are actually used are
    /// checked against the SQS limits and reported as
    /// [`SqsOptionsError::InvalidDefault`]. When a queue name is given without a URL the
    /// client is asked for the URL on every call, nothing is cached. A lookup
    /// failure is returned as [`SqsOptionsError::QueueUrlLookup`] with the
    /// client's error unchanged. A blank URL from the client is reported the same
    /// way.
    pub async fn resolve(&self, raw: RawOptions) -> Result<ResolvedOptions, SqsOptionsError> {
        let RawOptions {
            client,
            queue_url,
            queue_name,
            wait_time_seconds,
            max_number_of_messages,
            destroy_on_received,
        } = raw;

        let client = client
            .or_else(|| self.defaults.client.clone())
            .ok_or(SqsOptionsError::MissingClient)?;
        let wait_time_seconds = match wait_time_seconds {
            Some(v) => v,
            None => checked_default(
                self.defaults.wait_time_seconds,
                MAX_WAIT_TIME_SECONDS,
                DefaultConfig::WAIT_TIME_SECONDS_ENV,
            )?,
        };
        let max_number_of_messages = match max_number_of_messages {
            Some(v) => v,
            None => checked_default(
                self.defaults.max_number_of_messages,
                MAX_NUMBER_OF_MESSAGES,
                DefaultConfig::MAX_NUMBER_OF_MESSAGES_ENV,
            )?,
        };
        let destroy_on_received = self.merge_destroy_flag(destroy_on_received);

        debug!(
            wait_time_seconds,
            max_number_of_messages,
            destroy_on_received = %destroy_on_received,
            "merged SQS option defaults"
        );

        let queue_url = match queue_url {
            Some(url) if !is_blank(Some(url.as_str())) => url,
            _ => match queue_name.as_deref() {
                Some(name) if !is_blank(Some(name)) => {
                    let url = client.get_queue_url(name).await.map_err(|source| {
                        SqsOptionsError::QueueUrlLookup {
                            queue_name: name.to_string(),
                            source,
                        }
                    })?;
                    if is_blank(Some(url.as_str())) {
                        return Err(SqsOptionsError::QueueUrlLookup {
                            queue_name: name.to_string(),
                            source: GenericError::new(format!(
                                "empty queue URL returned for {}",
                                name
                            )),
                        });
                    }
                    info!(queue_name = name, queue_url = %url, "resolved SQS queue URL");
                    url
                }
                _ => return Err(SqsOptionsError::MissingQueueIdentity),
            },
        };

        Ok(ResolvedOptions {
            client,
            queue_url,
            queue_name,
            wait_time_seconds,
            max_number_of_messages,
            destroy_on_received,
        })
    }

    /// Runs [`OptionsResolver::validate`] and then [`OptionsResolver::resolve`].
    pub async fn validate_and_resolve(
        &self,
        raw: RawOptions,
    ) -> Result<ResolvedOptions, SqsOptionsError> {
        self.validate(&raw)?;
        self.resolve(raw).await
    }

    fn merge_destroy_flag(&self, supplied: Option<FlagValue>) -> FlagValue {
        let default = FlagValue::Bool(self.defaults.destroy_on_received);
        match (supplied, self.policy.flag_merge) {
            (None, _) => default,
            (Some(FlagValue::Bool(false)), FlagMerge::Truthiness) => default,
            (Some(flag), _) => flag,
        }
    }
}

fn checked_default(value: i32, max: i32, key: &str) -> Result<i32, SqsOptionsError> {
    if value > max {
        return Err(SqsOptionsError::InvalidDefault {
            key: key.to_string(),
            value: value.to_string(),
        });
    }
    Ok(value)
}
