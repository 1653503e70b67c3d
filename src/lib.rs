//! Classification engine for MTProto RPC errors.
//!
//! The server reports failures as bare strings plus a numeric code. Many of
//! those strings embed a value in the name itself (`FLOOD_WAIT_30`,
//! `FILE_PART_5_MISSING`). [`RpcError::classify`] normalizes such a string
//! to its canonical templated name, extracts the embedded value and attaches
//! the catalogued human description:
//!
//! ```
//! use mtproto_errors::{Parameter, RpcError};
//!
//! let err = RpcError::classify(420, "FLOOD_WAIT_30");
//! assert_eq!(err.name, "FLOOD_WAIT_X");
//! assert_eq!(err.parameter, Some(Parameter::Integer(30)));
//! assert_eq!(err.description, "A wait of 30 seconds is required");
//! ```
//!
//! Transport-level integrity failures (`bad_msg_notification`) never carry a
//! name at all, only a code; [`BadMessageError::classify`] decodes those
//! separately.

#![deny(unsafe_code)]

mod catalog;
pub mod rules;
pub mod rpc;
pub mod transport;

pub use rules::{Parameter, ParameterKind};
pub use rpc::{RetryAdvice, RpcError, RpcErrorSignal};
pub use transport::{BadMessageCode, BadMessageError, BadMsgNotification};
