//! Classified RPC errors and the retry contract they imply.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog;
use crate::rules::{self, Parameter};

/// Raw `rpc_error` payload as the server sends it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcErrorSignal {
    pub code: i32,
    pub message: String,
}

/// An RPC failure after classification: the canonical templated name, the
/// catalogued description and the value extracted from the raw message.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("[{name}] {description} (code {code})")]
pub struct RpcError {
    pub code: i32,
    pub name: String,
    pub description: String,
    pub parameter: Option<Parameter>,
}

impl RpcError {
    /// Classify a raw error message received under the given code.
    pub fn classify(code: i32, message: &str) -> Self {
        let (name, parameter) = rules::normalize(message);
        let description = catalog::resolve(&name, parameter.as_ref());
        Self { code, name, description, parameter }
    }

    /// What a client should do about this error: names ending in `_WAIT_X`
    /// carry a wait in seconds (`_WAIT_XMIN` in minutes), names ending in
    /// `_MIGRATE_X` point at the data center to reconnect to. Everything
    /// else is surfaced to the caller unchanged.
    pub fn retry_advice(&self) -> RetryAdvice {
        let value = match self.parameter {
            Some(Parameter::Integer(value)) => value,
            _ => return RetryAdvice::Surface,
        };
        if self.name.ends_with("_WAIT_XMIN") {
            let secs = (value.max(0) as u64).saturating_mul(60);
            return RetryAdvice::SleepFor(Duration::from_secs(secs));
        }
        if self.name.ends_with("_WAIT_X") {
            return RetryAdvice::SleepFor(Duration::from_secs(value.max(0) as u64));
        }
        if self.name.ends_with("_MIGRATE_X") {
            return RetryAdvice::MigrateTo(value);
        }
        RetryAdvice::Surface
    }
}

impl From<RpcErrorSignal> for RpcError {
    fn from(signal: RpcErrorSignal) -> Self {
        Self::classify(signal.code, &signal.message)
    }
}

/// Client-side handling implied by a classified error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryAdvice {
    /// Wait this long, then repeat the request.
    SleepFor(Duration),
    /// Reconnect to the given data center, then repeat the request.
    MigrateTo(i64),
    /// Not retryable here; report to the caller.
    Surface,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_flood_wait() {
        let err = RpcError::classify(420, "FLOOD_WAIT_30");
        assert_eq!(err.code, 420);
        assert_eq!(err.name, "FLOOD_WAIT_X");
        assert_eq!(err.parameter, Some(Parameter::Integer(30)));
        assert_eq!(err.description, "A wait of 30 seconds is required");
    }

    #[test]
    fn test_classify_plain_name() {
        let err = RpcError::classify(400, "USER_DEACTIVATED");
        assert_eq!(err.name, "USER_DEACTIVATED");
        assert_eq!(err.parameter, None);
        assert_eq!(err.description, "The user has been deleted/deactivated");
    }

    #[test]
    fn test_classify_infix_parameter() {
        let err = RpcError::classify(400, "FILE_PART_5_MISSING");
        assert_eq!(err.name, "FILE_PART_X_MISSING");
        assert_eq!(err.parameter, Some(Parameter::Integer(5)));
        assert_eq!(err.description, "Part 5 of the file is missing from storage");
    }

    #[test]
    fn test_classify_unknown_name_passes_through() {
        let err = RpcError::classify(500, "TOTALLY_UNKNOWN_CODE");
        assert_eq!(err.name, "TOTALLY_UNKNOWN_CODE");
        assert_eq!(err.parameter, None);
        assert_eq!(err.description, "TOTALLY_UNKNOWN_CODE");
    }

    #[test]
    fn test_classify_minutes_variant() {
        let err = RpcError::classify(420, "PREVIOUS_CHAT_IMPORT_ACTIVE_WAIT_12MIN");
        assert_eq!(err.name, "PREVIOUS_CHAT_IMPORT_ACTIVE_WAIT_XMIN");
        assert_eq!(err.description, "Similar to a flood wait, must wait 12 minutes");
    }

    #[test]
    fn test_display_format() {
        let err = RpcError::classify(420, "FLOOD_WAIT_30");
        assert_eq!(
            err.to_string(),
            "[FLOOD_WAIT_X] A wait of 30 seconds is required (code 420)"
        );
    }

    #[test]
    fn test_from_signal() {
        let signal = RpcErrorSignal { code: 303, message: "PHONE_MIGRATE_4".into() };
        let err = RpcError::from(signal);
        assert_eq!(err.name, "PHONE_MIGRATE_X");
        assert_eq!(err.parameter, Some(Parameter::Integer(4)));
    }

    #[test]
    fn test_signal_deserializes_from_wire_json() {
        let signal: RpcErrorSignal =
            serde_json::from_str(r#"{"code":420,"message":"FLOOD_WAIT_30"}"#).unwrap();
        let err = RpcError::from(signal);
        assert_eq!(err.code, 420);
        assert_eq!(err.name, "FLOOD_WAIT_X");
    }

    #[test]
    fn test_serializes_parameter_untagged() {
        let err = RpcError::classify(400, "FILE_PART_5_MISSING");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["name"], "FILE_PART_X_MISSING");
        assert_eq!(json["parameter"], 5);
    }

    #[test]
    fn test_retry_advice_flood_wait_sleeps() {
        let err = RpcError::classify(420, "FLOOD_WAIT_30");
        assert_eq!(err.retry_advice(), RetryAdvice::SleepFor(Duration::from_secs(30)));
    }

    #[test]
    fn test_retry_advice_slowmode_sleeps() {
        let err = RpcError::classify(420, "SLOWMODE_WAIT_7");
        assert_eq!(err.retry_advice(), RetryAdvice::SleepFor(Duration::from_secs(7)));
    }

    #[test]
    fn test_retry_advice_minutes_scale_to_seconds() {
        let err = RpcError::classify(420, "PREVIOUS_CHAT_IMPORT_ACTIVE_WAIT_12MIN");
        assert_eq!(err.retry_advice(), RetryAdvice::SleepFor(Duration::from_secs(720)));
    }

    #[test]
    fn test_retry_advice_migrate_points_at_dc() {
        let err = RpcError::classify(303, "PHONE_MIGRATE_4");
        assert_eq!(err.retry_advice(), RetryAdvice::MigrateTo(4));
    }

    #[test]
    fn test_retry_advice_surfaces_plain_errors() {
        let err = RpcError::classify(400, "USER_DEACTIVATED");
        assert_eq!(err.retry_advice(), RetryAdvice::Surface);
    }

    #[test]
    fn test_retry_advice_surfaces_non_wait_parameters() {
        let err = RpcError::classify(500, "INTERDC_2_CALL_ERROR");
        assert_eq!(err.parameter, Some(Parameter::Integer(2)));
        assert_eq!(err.retry_advice(), RetryAdvice::Surface);
    }

    #[test]
    fn test_retry_advice_negative_wait_clamps_to_zero() {
        let err = RpcError::classify(420, "FLOOD_WAIT_-5");
        assert_eq!(err.retry_advice(), RetryAdvice::SleepFor(Duration::ZERO));
    }

    #[test]
    fn test_retry_advice_surfaces_wait_with_undecoded_parameter() {
        let err = RpcError::classify(420, "FLOOD_WAIT_LATER");
        assert_eq!(err.name, "FLOOD_WAIT_X");
        assert_eq!(err.parameter, None);
        assert_eq!(err.retry_advice(), RetryAdvice::Surface);
    }
}
