use rs_sqs_options::{errors::SqsOptionsError, options::DefaultConfig};
use std::collections::HashMap;

fn overrides(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_overrides_apply() {
    let vars = overrides(&[
        (DefaultConfig::WAIT_TIME_SECONDS_ENV, "5"),
        (DefaultConfig::MAX_NUMBER_OF_MESSAGES_ENV, " 3 "),
        (DefaultConfig::DESTROY_ON_RECEIVED_ENV, "true"),
    ]);

    let defaults = DefaultConfig::default()
        .apply_overrides(|key| vars.get(key).cloned())
        .unwrap();
    assert_eq!(defaults.wait_time_seconds, 5);
    assert_eq!(defaults.max_number_of_messages, 3);
    assert!(defaults.destroy_on_received);
    assert!(defaults.client.is_none());
}

#[test]
fn test_no_overrides_keep_builtin_defaults() {
    let defaults = DefaultConfig::default().apply_overrides(|_| None).unwrap();
    assert_eq!(defaults.wait_time_seconds, 20);
    assert_eq!(defaults.max_number_of_messages, 10);
    assert!(!defaults.destroy_on_received);
}

#[test]
fn test_unparsable_override_is_rejected() {
    let vars = overrides(&[(DefaultConfig::DESTROY_ON_RECEIVED_ENV, "sometimes")]);

    let err = DefaultConfig::default()
        .apply_overrides(|key| vars.get(key).cloned())
        .unwrap_err();
    match err {
        SqsOptionsError::InvalidDefault { key, value } => {
            assert_eq!(key, "SQS_DESTROY_ON_RECEIVED");
            assert_eq!(value, "sometimes");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_override_above_sqs_limits_is_rejected() {
    let vars = overrides(&[(DefaultConfig::WAIT_TIME_SECONDS_ENV, "60")]);
    let err = DefaultConfig::default()
        .apply_overrides(|key| vars.get(key).cloned())
        .unwrap_err();
    assert!(matches!(
        err,
        SqsOptionsError::InvalidDefault { ref key, ref value }
            if key == "SQS_WAIT_TIME_SECONDS" && value == "60"
    ));

    let vars = overrides(&[(DefaultConfig::MAX_NUMBER_OF_MESSAGES_ENV, "11")]);
    let err = DefaultConfig::default()
        .apply_overrides(|key| vars.get(key).cloned())
        .unwrap_err();
    assert!(matches!(
        err,
        SqsOptionsError::InvalidDefault { ref key, ref value }
            if key == "SQS_MAX_NUMBER_OF_MESSAGES" && value == "11"
    ));
}

#[test]
fn test_check_limits_on_built_defaults() {
    assert!(DefaultConfig::default().check_limits().is_ok());
    assert!(
        DefaultConfig::default()
            .with_max_number_of_messages(50)
            .check_limits()
            .is_err()
    );
}
