//! Prompt templates and rendering
//!
//! Each mode owns one system instruction and one user template with a single
//! `{transcript}` substitution point. Templates are policy data: they come
//! from configuration and the built-in defaults are only a fallback.

use serde::{Deserialize, Serialize};

use crate::error::ServiceError;
use crate::transcript::Mode;

pub const TRANSCRIPT_PLACEHOLDER: &str = "{transcript}";

/// System instruction plus user template for one mode
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptTemplate {
    pub system: String,
    pub user: String,
}

/// Templates for both modes
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptSet {
    pub summary: PromptTemplate,
    pub qa: PromptTemplate,
}

impl Default for PromptSet {
    fn default() -> Self {
        Self {
            summary: PromptTemplate {
                system: "You are an assistant that writes meeting minutes. \
                    Work strictly from the transcript you are given and answer \
                    in the language the meeting was held in."
                    .to_string(),
                user: "Summarize the meeting transcript below, strictly in this format:\n\
                    # Date: [date]\n\
                    # Decisions:\n\
                    - [decision] (Owner: @name)\n\
                    # Open questions:\n\n\
                    Meeting transcript:\n{transcript}"
                    .to_string(),
            },
            qa: PromptTemplate {
                system: "You are an assistant that extracts question-answer chains \
                    from meeting transcripts. Skip filler questions that received \
                    no substantive answer."
                    .to_string(),
                user: "Extract the question-answer chains from the meeting transcript below. Format:\n\
                    - Question: ...\n\
                    \x20 Answer: ...\n\n\
                    Meeting transcript:\n{transcript}"
                    .to_string(),
            },
        }
    }
}

impl PromptSet {
    pub fn template(&self, mode: Mode) -> &PromptTemplate {
        match mode {
            Mode::Summary => &self.summary,
            Mode::Qa => &self.qa,
        }
    }
}

/// A prompt ready to send: fixed system instruction plus the user instruction
/// with the transcript substituted in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPrompt {
    pub system: String,
    pub user: String,
}

/// Substitute the canonical transcript into the template's user instruction.
///
/// Fails loudly on a malformed template: no `{transcript}` placeholder, an
/// unknown placeholder, or an unmatched brace all surface as `PromptRender`.
pub fn render(template: &PromptTemplate, transcript: &str) -> Result<RenderedPrompt, ServiceError> {
    let slots = count_transcript_slots(&template.user)?;
    if slots == 0 {
        return Err(ServiceError::PromptRender(
            "user prompt template has no {transcript} placeholder".to_string(),
        ));
    }

    Ok(RenderedPrompt {
        system: template.system.clone(),
        user: template.user.replace(TRANSCRIPT_PLACEHOLDER, transcript),
    })
}

/// Validate `{...}` placeholder syntax and count `{transcript}` occurrences.
/// Braces are ASCII, so byte scanning is UTF-8 safe here.
fn count_transcript_slots(template: &str) -> Result<usize, ServiceError> {
    let bytes = template.as_bytes();
    let mut slots = 0usize;
    let mut i = 0usize;

    while i < bytes.len() {
        match bytes[i] {
            b'{' => {
                let rest = &template[i + 1..];
                match rest.find(['{', '}']) {
                    Some(j) if rest.as_bytes()[j] == b'}' => {
                        let name = &rest[..j];
                        if name != "transcript" {
                            return Err(ServiceError::PromptRender(format!(
                                "unknown placeholder '{{{}}}' in prompt template",
                                name
                            )));
                        }
                        slots += 1;
                        i += j + 2;
                    }
                    _ => {
                        return Err(ServiceError::PromptRender(
                            "unmatched '{' in prompt template".to_string(),
                        ))
                    }
                }
            }
            b'}' => {
                return Err(ServiceError::PromptRender(
                    "unmatched '}' in prompt template".to_string(),
                ))
            }
            _ => i += 1,
        }
    }

    Ok(slots)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template(user: &str) -> PromptTemplate {
        PromptTemplate {
            system: "be brief".to_string(),
            user: user.to_string(),
        }
    }

    #[test]
    fn test_render_substitutes_transcript() {
        let rendered = render(&template("Transcript:\n{transcript}\nEnd."), "[0-1] A: hi").unwrap();
        assert_eq!(rendered.system, "be brief");
        assert_eq!(rendered.user, "Transcript:\n[0-1] A: hi\nEnd.");
    }

    #[test]
    fn test_missing_placeholder_fails() {
        let err = render(&template("no slot here"), "x").unwrap_err();
        assert!(matches!(err, ServiceError::PromptRender(_)));
    }

    #[test]
    fn test_unknown_placeholder_fails() {
        let err = render(&template("Summarize {notes}"), "x").unwrap_err();
        match err {
            ServiceError::PromptRender(msg) => assert!(msg.contains("{notes}")),
            other => panic!("expected PromptRender error, got {:?}", other),
        }
    }

    #[test]
    fn test_unmatched_braces_fail() {
        assert!(matches!(
            render(&template("Summarize {transcript"), "x").unwrap_err(),
            ServiceError::PromptRender(_)
        ));
        assert!(matches!(
            render(&template("Summarize transcript}"), "x").unwrap_err(),
            ServiceError::PromptRender(_)
        ));
        assert!(matches!(
            render(&template("Summarize {{transcript}"), "x").unwrap_err(),
            ServiceError::PromptRender(_)
        ));
    }

    #[test]
    fn test_braces_in_transcript_content_are_fine() {
        let rendered = render(&template("T:\n{transcript}"), "A said {hello}").unwrap();
        assert_eq!(rendered.user, "T:\nA said {hello}");
    }

    #[test]
    fn test_default_templates_render() {
        let prompts = PromptSet::default();
        let summary = render(prompts.template(Mode::Summary), "[0-1] A: hi").unwrap();
        let qa = render(prompts.template(Mode::Qa), "[0-1] A: hi").unwrap();

        assert!(summary.user.contains("[0-1] A: hi"));
        assert!(qa.user.contains("[0-1] A: hi"));
        // The two modes must never produce the same user prompt.
        assert_ne!(summary.user, qa.user);
        assert_ne!(summary.system, qa.system);
    }
}
