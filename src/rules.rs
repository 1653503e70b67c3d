//! Pattern rules for templated error names.
//!
//! Names like `FLOOD_WAIT_30` carry a variable payload between fixed literal
//! boundaries. Each rule describes one such family; scanning is in table
//! order and the first matching rule wins.

use std::fmt;
use std::sync::OnceLock;

use serde::Serialize;
use tracing::warn;

use crate::catalog;

/// How a rule's extracted payload is decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterKind {
    /// Base-10 signed integer: wait seconds, DC ids, part indexes.
    Integer,
    /// Verbatim text.
    Text,
}

/// Dynamic value extracted from a templated error name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Parameter {
    Integer(i64),
    Text(String),
}

impl Parameter {
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Parameter::Integer(n) => Some(*n),
            Parameter::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Parameter::Integer(_) => None,
            Parameter::Text(s) => Some(s),
        }
    }

    /// Which kind of value this parameter holds.
    pub fn kind(&self) -> ParameterKind {
        match self {
            Parameter::Integer(_) => ParameterKind::Integer,
            Parameter::Text(_) => ParameterKind::Text,
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parameter::Integer(n) => write!(f, "{n}"),
            Parameter::Text(s) => f.write_str(s),
        }
    }
}

/// One (prefix, suffix, kind) template.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PatternRule {
    prefix: &'static str,
    suffix: &'static str,
    kind: ParameterKind,
}

impl PatternRule {
    const fn int(prefix: &'static str, suffix: &'static str) -> Self {
        Self {
            prefix,
            suffix,
            kind: ParameterKind::Integer,
        }
    }

    /// Prefix and suffix may overlap on very short inputs; that still counts
    /// as a match and the payload degrades to empty or garbled text.
    fn matches(&self, raw: &str) -> bool {
        raw.starts_with(self.prefix) && raw.ends_with(self.suffix)
    }

    fn canonical_name(&self) -> String {
        format!("{}X{}", self.prefix, self.suffix)
    }

    /// Strip the prefix, then the suffix. Either strip is a no-op when its
    /// affix is no longer present after the previous one.
    fn payload<'a>(&self, raw: &'a str) -> &'a str {
        let rest = raw.strip_prefix(self.prefix).unwrap_or(raw);
        rest.strip_suffix(self.suffix).unwrap_or(rest)
    }

    fn decode(&self, payload: &str) -> Option<Parameter> {
        match self.kind {
            ParameterKind::Integer => match payload.parse::<i64>() {
                Ok(n) => Some(Parameter::Integer(n)),
                Err(err) => {
                    warn!(payload, error = %err, "error name payload is not an integer");
                    None
                }
            },
            ParameterKind::Text => Some(Parameter::Text(payload.to_string())),
        }
    }
}

/// Ordered rule table. Order is load-bearing: `INTERDC_` appears twice with
/// different suffixes and the earlier entry must win a tie.
const RULES: &[PatternRule] = &[
    PatternRule::int("EMAIL_UNCONFIRMED_", ""),
    PatternRule::int("FILE_MIGRATE_", ""),
    PatternRule::int("FILE_PART_", "_MISSING"),
    PatternRule::int("FLOOD_TEST_PHONE_WAIT_", ""),
    PatternRule::int("FLOOD_WAIT_", ""),
    PatternRule::int("INTERDC_", "_CALL_ERROR"),
    PatternRule::int("INTERDC_", "_CALL_RICH_ERROR"),
    PatternRule::int("NETWORK_MIGRATE_", ""),
    PatternRule::int("PASSWORD_TOO_FRESH_", ""),
    PatternRule::int("PHONE_MIGRATE_", ""),
    PatternRule::int("SESSION_TOO_FRESH_", ""),
    PatternRule::int("SLOWMODE_WAIT_", ""),
    PatternRule::int("STATS_MIGRATE_", ""),
    PatternRule::int("TAKEOUT_INIT_DELAY_", ""),
    PatternRule::int("USER_MIGRATE_", ""),
    PatternRule::int("PREVIOUS_CHAT_IMPORT_ACTIVE_WAIT_", "MIN"),
];

fn validate(rules: &[PatternRule]) {
    for rule in rules {
        assert!(
            !(rule.prefix.is_empty() && rule.suffix.is_empty()),
            "rule with empty prefix and suffix would match every name"
        );
        debug_assert!(
            catalog::contains(&rule.canonical_name()),
            "no description for {}",
            rule.canonical_name()
        );
    }
}

/// The rule table, validated once on first use.
fn rules() -> &'static [PatternRule] {
    static VALIDATED: OnceLock<()> = OnceLock::new();
    VALIDATED.get_or_init(|| validate(RULES));
    RULES
}

/// Normalize a raw error name: find the first matching rule, decode its
/// payload, and replace the variable segment with `X`.
///
/// Names matching no rule pass through verbatim with no parameter. Never
/// fails; an undecodable payload is logged and dropped.
pub fn normalize(raw: &str) -> (String, Option<Parameter>) {
    match rules().iter().find(|rule| rule.matches(raw)) {
        Some(rule) => (rule.canonical_name(), rule.decode(rule.payload(raw))),
        None => (raw.to_string(), None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_prefix_rule() {
        let (name, param) = normalize("FLOOD_WAIT_30");
        assert_eq!(name, "FLOOD_WAIT_X");
        assert_eq!(param, Some(Parameter::Integer(30)));
    }

    #[test]
    fn test_normalize_prefix_suffix_rule() {
        let (name, param) = normalize("FILE_PART_5_MISSING");
        assert_eq!(name, "FILE_PART_X_MISSING");
        assert_eq!(param, Some(Parameter::Integer(5)));
    }

    #[test]
    fn test_normalize_suffix_without_separator() {
        let (name, param) = normalize("PREVIOUS_CHAT_IMPORT_ACTIVE_WAIT_12MIN");
        assert_eq!(name, "PREVIOUS_CHAT_IMPORT_ACTIVE_WAIT_XMIN");
        assert_eq!(param, Some(Parameter::Integer(12)));
    }

    #[test]
    fn test_normalize_no_match_passes_through() {
        let (name, param) = normalize("TOTALLY_UNKNOWN_CODE");
        assert_eq!(name, "TOTALLY_UNKNOWN_CODE");
        assert_eq!(param, None);
    }

    #[test]
    fn test_shared_prefix_resolved_by_suffix() {
        let (name, param) = normalize("INTERDC_2_CALL_ERROR");
        assert_eq!(name, "INTERDC_X_CALL_ERROR");
        assert_eq!(param, Some(Parameter::Integer(2)));

        let (name, param) = normalize("INTERDC_2_CALL_RICH_ERROR");
        assert_eq!(name, "INTERDC_X_CALL_RICH_ERROR");
        assert_eq!(param, Some(Parameter::Integer(2)));
    }

    #[test]
    fn test_scan_selects_earliest_matching_rule() {
        let table = [
            PatternRule::int("SYNC_", ""),
            PatternRule::int("SYNC_", "_DONE"),
        ];
        let hit = table.iter().find(|rule| rule.matches("SYNC_3_DONE"));
        assert_eq!(hit.map(|r| r.canonical_name()).as_deref(), Some("SYNC_X"));
    }

    #[test]
    fn test_overlapping_prefix_suffix_still_matches() {
        // The trailing underscore of FILE_PART_ is also the leading
        // underscore of _MISSING here. The match stands, the leftover
        // payload is not numeric, and only the parameter is dropped.
        let (name, param) = normalize("FILE_PART_MISSING");
        assert_eq!(name, "FILE_PART_X_MISSING");
        assert_eq!(param, None);
    }

    #[test]
    fn test_empty_payload_yields_no_parameter() {
        let (name, param) = normalize("FLOOD_WAIT_");
        assert_eq!(name, "FLOOD_WAIT_X");
        assert_eq!(param, None);
    }

    #[test]
    fn test_negative_payload_decodes_signed() {
        let (name, param) = normalize("FLOOD_WAIT_-5");
        assert_eq!(name, "FLOOD_WAIT_X");
        assert_eq!(param, Some(Parameter::Integer(-5)));
    }

    #[test]
    fn test_text_kind_decodes_verbatim() {
        let rule = PatternRule {
            prefix: "SENT_CODE_",
            suffix: "",
            kind: ParameterKind::Text,
        };
        assert_eq!(rule.decode("SMS"), Some(Parameter::Text("SMS".into())));
    }

    #[test]
    fn test_every_canonical_name_is_catalogued() {
        for rule in RULES {
            assert!(
                catalog::contains(&rule.canonical_name()),
                "missing description for {}",
                rule.canonical_name()
            );
        }
    }

    #[test]
    #[should_panic(expected = "match every name")]
    fn test_validate_rejects_empty_rule() {
        validate(&[PatternRule::int("", "")]);
    }

    #[test]
    fn test_tables_shared_across_threads() {
        let handles: Vec<_> = (0..8i64)
            .map(|i| {
                std::thread::spawn(move || {
                    let (name, param) = normalize(&format!("FLOOD_WAIT_{i}"));
                    assert_eq!(name, "FLOOD_WAIT_X");
                    assert_eq!(param, Some(Parameter::Integer(i)));
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
    }

    #[test]
    fn test_parameter_accessors() {
        assert_eq!(Parameter::Integer(4).as_integer(), Some(4));
        assert_eq!(Parameter::Integer(4).as_text(), None);
        assert_eq!(Parameter::Integer(4).kind(), ParameterKind::Integer);
        let text = Parameter::Text("abc".into());
        assert_eq!(text.as_text(), Some("abc"));
        assert_eq!(text.as_integer(), None);
        assert_eq!(text.kind(), ParameterKind::Text);
    }

    mod logging {
        use super::*;
        use std::io;
        use std::sync::{Arc, Mutex};
        use tracing_subscriber::fmt::MakeWriter;

        #[derive(Clone, Default)]
        struct Capture(Arc<Mutex<Vec<u8>>>);

        impl Capture {
            fn contents(&self) -> String {
                String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
            }
        }

        impl io::Write for Capture {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                self.0.lock().unwrap().extend_from_slice(buf);
                Ok(buf.len())
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        impl<'a> MakeWriter<'a> for Capture {
            type Writer = Capture;

            fn make_writer(&'a self) -> Self::Writer {
                self.clone()
            }
        }

        fn with_capture<T>(f: impl FnOnce() -> T) -> (T, String) {
            let capture = Capture::default();
            let subscriber = tracing_subscriber::fmt()
                .with_writer(capture.clone())
                .with_ansi(false)
                .finish();
            let out = tracing::subscriber::with_default(subscriber, f);
            let logs = capture.contents();
            (out, logs)
        }

        #[test]
        fn test_decode_failure_warns_once_and_still_classifies() {
            let ((name, param), logs) = with_capture(|| normalize("FLOOD_WAIT_FOREVER"));
            assert_eq!(name, "FLOOD_WAIT_X");
            assert_eq!(param, None);
            assert_eq!(logs.matches("WARN").count(), 1);
            assert!(logs.contains("FOREVER"));
        }

        #[test]
        fn test_successful_decode_is_silent() {
            let (_, logs) = with_capture(|| normalize("FLOOD_WAIT_30"));
            assert!(logs.is_empty());
        }

        #[test]
        fn test_no_match_is_silent() {
            let (_, logs) = with_capture(|| normalize("USER_DEACTIVATED"));
            assert!(logs.is_empty());
        }
    }
}
