//! Transcript entries and canonical transcript rendering
//!
//! Entries arrive in arbitrary order with string timestamps; the canonical
//! transcript is their stable chronological flattening, one line per utterance.

use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ServiceError;

/// Time span of one utterance; values are numeric strings (seconds)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeRange {
    pub begin: String,
    pub end: String,
}

/// One timestamped speaker utterance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub id: i64,
    pub time: TimeRange,
    pub name: String,
    pub text: String,
}

/// Which task the model performs over the transcript
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Summary,
    Qa,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Summary => "summary",
            Mode::Qa => "qa",
        }
    }
}

impl FromStr for Mode {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "summary" => Ok(Mode::Summary),
            "qa" => Ok(Mode::Qa),
            other => Err(ServiceError::Validation(format!(
                "unknown mode '{}', expected 'summary' or 'qa'",
                other
            ))),
        }
    }
}

/// Flatten entries into the canonical transcript.
///
/// Entries are sorted ascending by the parsed `begin` time (stable, so equal
/// timestamps keep their input order) and rendered one per line as
/// `[begin-end] speaker: text`, joined with `\n`. Pure function of the input.
pub fn canonical_transcript(entries: &[TranscriptEntry]) -> Result<String, ServiceError> {
    if entries.is_empty() {
        return Err(ServiceError::Validation(
            "no transcript entries provided".to_string(),
        ));
    }

    let mut keyed: Vec<(f64, &TranscriptEntry)> = Vec::with_capacity(entries.len());
    for entry in entries {
        let begin = entry.time.begin.trim().parse::<f64>().map_err(|_| {
            ServiceError::Validation(format!(
                "entry {}: begin time '{}' is not numeric",
                entry.id, entry.time.begin
            ))
        })?;
        keyed.push((begin, entry));
    }

    keyed.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));

    Ok(keyed
        .iter()
        .map(|(_, e)| format!("[{}-{}] {}: {}", e.time.begin, e.time.end, e.name, e.text))
        .collect::<Vec<_>>()
        .join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: i64, begin: &str, end: &str, name: &str, text: &str) -> TranscriptEntry {
        TranscriptEntry {
            id,
            time: TimeRange {
                begin: begin.to_string(),
                end: end.to_string(),
            },
            name: name.to_string(),
            text: text.to_string(),
        }
    }

    #[test]
    fn test_sorts_by_numeric_begin_time() {
        let entries = vec![
            entry(1, "100", "110", "A", "late"),
            entry(2, "9.5", "12", "B", "early"),
            entry(3, "20", "25", "C", "middle"),
        ];

        let transcript = canonical_transcript(&entries).unwrap();
        assert_eq!(
            transcript,
            "[9.5-12] B: early\n[20-25] C: middle\n[100-110] A: late"
        );
    }

    #[test]
    fn test_equal_begin_times_keep_input_order() {
        let entries = vec![
            entry(1, "5", "6", "A", "first"),
            entry(2, "5", "7", "B", "second"),
            entry(3, "5", "8", "C", "third"),
        ];

        let transcript = canonical_transcript(&entries).unwrap();
        assert_eq!(
            transcript,
            "[5-6] A: first\n[5-7] B: second\n[5-8] C: third"
        );
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let entries = vec![
            entry(1, "5", "10", "A", "hi"),
            entry(2, "0", "4", "B", "hello"),
        ];

        let first = canonical_transcript(&entries).unwrap();
        let second = canonical_transcript(&entries).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_chronological_fixture() {
        let entries = vec![
            entry(1, "5", "10", "A", "hi"),
            entry(2, "0", "4", "B", "hello"),
        ];

        let transcript = canonical_transcript(&entries).unwrap();
        assert_eq!(transcript, "[0-4] B: hello\n[5-10] A: hi");
    }

    #[test]
    fn test_empty_entry_list_is_rejected() {
        let err = canonical_transcript(&[]).unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[test]
    fn test_non_numeric_begin_time_is_rejected() {
        let entries = vec![entry(7, "abc", "4", "B", "hello")];
        let err = canonical_transcript(&entries).unwrap_err();
        match err {
            ServiceError::Validation(msg) => {
                assert!(msg.contains("entry 7"));
                assert!(msg.contains("abc"));
            }
            other => panic!("expected Validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_utterance_text_is_allowed() {
        let entries = vec![entry(1, "0", "1", "A", "")];
        let transcript = canonical_transcript(&entries).unwrap();
        assert_eq!(transcript, "[0-1] A: ");
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("summary".parse::<Mode>().unwrap(), Mode::Summary);
        assert_eq!("qa".parse::<Mode>().unwrap(), Mode::Qa);

        let err = "chitchat".parse::<Mode>().unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }
}
