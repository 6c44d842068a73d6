//! Prompt templates for the two generation flows
//!
//! Provides the default prompts for summary/action-item extraction and for
//! per-item follow-up drafting, with `{placeholder}` substitution.

/// Default prompt templates
pub struct PromptTemplates;

impl PromptTemplates {
    /// Prompt for schema-constrained extraction of a summary and action items
    pub fn extraction() -> &'static str {
        r#"You are a professional meeting assistant. Analyze the following meeting transcript, extract the core conclusions (concise and to the point) and every action item, and identify the owner responsible for each action item.

Meeting transcript:
{transcript}"#
    }

    /// Prompt for drafting a follow-up message for one action item
    pub fn follow_up() -> &'static str {
        r#"You are a professional workplace assistant. Based on the following action item, draft a short follow-up/confirmation message to its owner.
Requirements: professional, polite and concise tone; state the task to be completed directly.
Action item: {task}
Owner: {owner}

Note: return only the message body, with no subject line and no extra explanatory text."#
    }

    /// Render the extraction prompt for a transcript
    pub fn render_extraction(transcript: &str) -> String {
        Self::extraction().replace("{transcript}", transcript)
    }

    /// Render the follow-up prompt for one action item
    pub fn render_follow_up(task: &str, owner: &str) -> String {
        Self::follow_up()
            .replace("{task}", task)
            .replace("{owner}", owner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extraction_template() {
        let prompt = PromptTemplates::extraction();
        assert!(prompt.contains("{transcript}"));
    }

    #[test]
    fn test_follow_up_template() {
        let prompt = PromptTemplates::follow_up();
        assert!(prompt.contains("{task}"));
        assert!(prompt.contains("{owner}"));
        assert!(prompt.contains("no subject line"));
    }

    #[test]
    fn test_render_substitutes_placeholders() {
        let prompt = PromptTemplates::render_extraction("line one\nline two");
        assert!(prompt.contains("line one\nline two"));
        assert!(!prompt.contains("{transcript}"));

        let prompt = PromptTemplates::render_follow_up("Submit proposal", "Engineering");
        assert!(prompt.contains("Submit proposal"));
        assert!(prompt.contains("Owner: Engineering"));
    }
}
