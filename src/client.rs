use std::sync::Arc;

use async_trait::async_trait;
use aws_config::Region;
use aws_sdk_sqs::config::SharedCredentialsProvider;

use crate::errors::GenericError;

/// Capability the options resolver needs from a queue service client.
///
/// Transport, retries, timeouts and authentication belong to the
/// implementation. The resolver awaits the call and surfaces any error as-is.
#[async_trait]
pub trait QueueUrlLookup: Send + Sync {
    /// Translates a queue name into its queue URL.
    ///
    /// # Arguments
    ///
    /// * `queue_name` - The human readable name of the queue
    async fn get_queue_url(&self, queue_name: &str) -> Result<String, GenericError>;
}

/// Client handle shared between per-worker options and process defaults.
pub type SharedQueueClient = Arc<dyn QueueUrlLookup>;

#[async_trait]
impl QueueUrlLookup for aws_sdk_sqs::Client {
    async fn get_queue_url(&self, queue_name: &str) -> Result<String, GenericError> {
        let output = aws_sdk_sqs::Client::get_queue_url(self)
            .queue_name(queue_name)
            .send()
            .await
            .map_err(|e| GenericError::from(format!("{:?}", e)))?;

        output
            .queue_url()
            .map(str::to_string)
            .ok_or_else(|| format!("no queue URL returned for {}", queue_name).into())
    }
}

/// Creates an AWS SQS client using credentials and configuration from the environment.
///
/// This function loads AWS configuration from environment variables such as:
/// - `AWS_ACCESS_KEY_ID`
/// - `AWS_SECRET_ACCESS_KEY`
/// - `AWS_REGION`
/// - `AWS_PROFILE`
///
/// # Example
///
/// ```rust,no_run
/// use rs_sqs_options::client::create_sqs_client_from_env;
///
/// #[tokio::main]
/// async fn main() {
///     let client = create_sqs_client_from_env().await;
///     // Hand the client to `DefaultConfig::with_client` or `RawOptions::with_client`.
/// }
/// ```
pub async fn create_sqs_client_from_env() -> SharedQueueClient {
    let config = aws_config::load_from_env().await;
    Arc::new(aws_sdk_sqs::Client::new(&config))
}

/// Creates an AWS SQS client with explicitly provided credentials and region.
///
/// Useful for workers that read from a queue in another account or region
/// than the process default client.
///
/// # Arguments
///
/// * `access_key_id` - The AWS access key ID
/// * `secret_access_key` - The AWS secret access key
/// * `region` - The AWS region (e.g., "us-east-1", "eu-west-1")
pub fn create_sqs_client_with_credentials(
    access_key_id: &str,
    secret_access_key: &str,
    region: &str,
) -> SharedQueueClient {
    let credentials =
        aws_sdk_sqs::config::Credentials::new(access_key_id, secret_access_key, None, None, "aws");

    let shared_credentials = SharedCredentialsProvider::new(credentials);

    let config = aws_sdk_sqs::config::Builder::new()
        .behavior_version(aws_sdk_sqs::config::BehaviorVersion::latest())
        .region(Region::new(region.to_string()))
        .credentials_provider(shared_credentials)
        .build();

    Arc::new(aws_sdk_sqs::Client::from_conf(config))
}
