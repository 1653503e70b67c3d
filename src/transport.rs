//! Transport-level integrity failures (`bad_msg_notification`).
//!
//! These arrive in place of a normal RPC result when a sent message fails
//! the server's msg_id, sequence number or salt checks. Reference:
//! <https://core.telegram.org/mtproto/service_messages_about_messages#notice-of-ignored-error-message>

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Service notification reporting which message failed and why.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadMsgNotification {
    pub bad_msg_id: i64,
    pub bad_msg_seqno: i32,
    pub code: u8,
}

/// Documented integrity failure codes. Discriminants mirror the wire values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[repr(u8)]
pub enum BadMessageCode {
    MsgIdTooLow = 16,
    MsgIdTooHigh = 17,
    IncorrectMsgIdBits = 18,
    WrongContainerMsgId = 19,
    MessageTooOld = 20,
    SeqNoTooLow = 32,
    SeqNoTooHigh = 33,
    SeqNoExpectedEven = 34,
    SeqNoExpectedOdd = 35,
    ServerSaltIncorrect = 48,
    InvalidContainer = 64,
}

impl BadMessageCode {
    /// Decode a raw notification code. Codes outside the documented table
    /// yield `None`.
    pub fn from_code(code: u8) -> Option<Self> {
        Some(match code {
            16 => Self::MsgIdTooLow,
            17 => Self::MsgIdTooHigh,
            18 => Self::IncorrectMsgIdBits,
            19 => Self::WrongContainerMsgId,
            20 => Self::MessageTooOld,
            32 => Self::SeqNoTooLow,
            33 => Self::SeqNoTooHigh,
            34 => Self::SeqNoExpectedEven,
            35 => Self::SeqNoExpectedOdd,
            48 => Self::ServerSaltIncorrect,
            64 => Self::InvalidContainer,
            _ => return None,
        })
    }

    /// The documented meaning of this code.
    pub fn description(self) -> &'static str {
        match self {
            Self::MsgIdTooLow => "msg_id too low (most likely, client time is wrong; it would be worthwhile to synchronize it using msg_id notifications and re-send the original message with the “correct” msg_id or wrap it in a container with a new msg_id if the original message had waited too long on the client to be transmitted)",
            Self::MsgIdTooHigh => "msg_id too high (similar to the previous case, the client time has to be synchronized, and the message re-sent with the correct msg_id",
            Self::IncorrectMsgIdBits => "incorrect two lower order msg_id bits (the server expects client message msg_id to be divisible by 4)",
            Self::WrongContainerMsgId => "container msg_id is the same as msg_id of a previously received message (this must never happen)",
            Self::MessageTooOld => "message too old, and it cannot be verified whether the server has received a message with this msg_id or not",
            Self::SeqNoTooLow => "msg_seqno too low (the server has already received a message with a lower msg_id but with either a higher or an equal and odd seqno)",
            Self::SeqNoTooHigh => "msg_seqno too high (similarly, there is a message with a higher msg_id but with either a lower or an equal and odd seqno)",
            Self::SeqNoExpectedEven => "an even msg_seqno expected (irrelevant message), but odd received",
            Self::SeqNoExpectedOdd => "odd msg_seqno expected (relevant message), but even received",
            Self::ServerSaltIncorrect => "incorrect server salt (in this case, the bad_server_salt response is received with the correct salt, and the message is to be re-sent with it)",
            Self::InvalidContainer => "invalid container",
        }
    }
}

/// Integrity failure decoded into a reportable error.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[error("{description} (code {})", .notification.code)]
pub struct BadMessageError {
    pub notification: BadMsgNotification,
    pub kind: Option<BadMessageCode>,
    pub description: &'static str,
}

impl BadMessageError {
    /// Decode a notification. Codes outside the documented table keep an
    /// empty description but are still carried with their raw code.
    pub fn classify(notification: BadMsgNotification) -> Self {
        let kind = BadMessageCode::from_code(notification.code);
        Self {
            notification,
            kind,
            description: kind.map_or("", BadMessageCode::description),
        }
    }
}

impl From<BadMsgNotification> for BadMessageError {
    fn from(notification: BadMsgNotification) -> Self {
        Self::classify(notification)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notification(code: u8) -> BadMsgNotification {
        BadMsgNotification { bad_msg_id: 0x5122_ad33_71a0_9c00, bad_msg_seqno: 3, code }
    }

    #[test]
    fn test_every_documented_code_decodes() {
        for code in [16u8, 17, 18, 19, 20, 32, 33, 34, 35, 48, 64] {
            let kind = BadMessageCode::from_code(code);
            assert!(kind.is_some(), "code {code} missing from the table");
            assert!(!kind.unwrap().description().is_empty());
        }
    }

    #[test]
    fn test_server_salt_code() {
        let err = BadMessageError::classify(notification(48));
        assert_eq!(err.kind, Some(BadMessageCode::ServerSaltIncorrect));
        assert!(err.description.starts_with("incorrect server salt"));
    }

    #[test]
    fn test_unknown_code_keeps_empty_description() {
        let err = BadMessageError::classify(notification(99));
        assert_eq!(err.kind, None);
        assert_eq!(err.description, "");
        assert_eq!(err.to_string(), " (code 99)");
    }

    #[test]
    fn test_display_names_code() {
        let err = BadMessageError::from(notification(64));
        assert_eq!(err.to_string(), "invalid container (code 64)");
    }

    #[test]
    fn test_discriminants_mirror_wire_codes() {
        assert_eq!(BadMessageCode::ServerSaltIncorrect as u8, 48);
        assert_eq!(BadMessageCode::InvalidContainer as u8, 64);
    }

    #[test]
    fn test_notification_deserializes_from_wire_json() {
        let raw = r#"{"bad_msg_id":6170438140550021120,"bad_msg_seqno":2,"code":48}"#;
        let parsed: BadMsgNotification = serde_json::from_str(raw).unwrap();
        let err = BadMessageError::classify(parsed);
        assert_eq!(err.kind, Some(BadMessageCode::ServerSaltIncorrect));
    }
}
