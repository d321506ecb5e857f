//! # SQS Options
//!
//! Validation and resolution of the options an AWS SQS consuming worker runs with.
//!
//! A worker supplies [`options::RawOptions`]: a queue URL or queue name, an optional
//! client and optional polling parameters. An [`options::OptionsResolver`] checks them,
//! fills the gaps from the process-wide [`options::DefaultConfig`], looks up the queue
//! URL when only a name was given, and returns an immutable [`options::ResolvedOptions`].
//!
//! ## Features
//!
//! - Ordered validation that reports the first violated rule
//! - Process defaults injected into the resolver, never read from a global
//! - Queue name to queue URL lookup through the [`client::QueueUrlLookup`] trait,
//!   implemented for `aws_sdk_sqs::Client`
//! - Explicit policies for the legacy queue identity check and destroy flag merge
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use rs_sqs_options::{
//!     client::create_sqs_client_from_env,
//!     options::{DefaultConfig, OptionsResolver, RawOptions},
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = create_sqs_client_from_env().await;
//!     let resolver = OptionsResolver::new(Arc::new(DefaultConfig::default().with_client(client)));
//!
//!     let options = resolver
//!         .validate_and_resolve(
//!             RawOptions::new()
//!                 .with_queue_url("https://sqs.region.amazonaws.com/account/orders")
//!                 .with_wait_time_seconds(10),
//!         )
//!         .await?;
//!
//!     println!(
//!         "polling {} for up to {} messages",
//!         options.queue_url(),
//!         options.max_number_of_messages()
//!     );
//!     Ok(())
//! }
//! ```
//!
//! Under the default [`options::QueueIdentityRule::Literal`] rule, options that carry a
//! queue name but no queue URL fail validation with `MissingQueueIdentity`. To work from
//! a queue name, opt into [`options::QueueIdentityRule::RequireEither`]:
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use rs_sqs_options::options::{
//!     DefaultConfig, OptionsResolver, QueueIdentityRule, RawOptions, ResolverPolicy,
//! };
//!
//! # async fn example(defaults: DefaultConfig) -> Result<(), Box<dyn std::error::Error>> {
//! let resolver = OptionsResolver::new(Arc::new(defaults)).with_policy(ResolverPolicy {
//!     queue_identity: QueueIdentityRule::RequireEither,
//!     ..ResolverPolicy::default()
//! });
//!
//! let options = resolver
//!     .validate_and_resolve(RawOptions::new().with_queue_name("orders"))
//!     .await?;
//! println!("orders lives at {}", options.queue_url());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod errors;
pub mod options;
