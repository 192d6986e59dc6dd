//! Deterministic prompt construction for classification and section content.

/// Build the prompt for one report section.
pub fn build_section_prompt(transcript: &str, heading: &str, instruction: &str) -> String {
    format!(
        "You are an assistant that writes concise, factual meeting reports.\n\
\n\
Write the content for the report section '{heading}'.\n\
Instruction: {instruction}\n\
\n\
Rules:\n\
- Use only information present in the transcript.\n\
- Return markdown body text only, without the section heading.\n\
- If the transcript contains nothing relevant to this section, write 'None'.\n\
\n\
Transcript:\n\
{transcript}"
    )
}

/// Build the single-word classification prompt.
pub fn build_classification_prompt(transcript: &str) -> String {
    format!(
        "Classify the following meeting transcript into exactly one category:\n\
- intro: a first meeting between Antler and one or more founders\n\
- followup: a later meeting with founders Antler already knows\n\
- general: any other meeting\n\
\n\
If the meeting both reintroduces founders and references earlier\n\
conversations, answer followup. When unsure, answer general.\n\
\n\
Answer with the single word intro, followup, or general.\n\
\n\
Transcript:\n\
{transcript}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_prompt_carries_heading_instruction_and_transcript() {
        let prompt = build_section_prompt("Ana: hello", "Next Steps", "One bullet per item.");

        assert!(prompt.contains("'Next Steps'"));
        assert!(prompt.contains("One bullet per item."));
        assert!(prompt.ends_with("Ana: hello"));
    }

    #[test]
    fn classification_prompt_lists_all_categories() {
        let prompt = build_classification_prompt("Ana: hello");

        for word in ["intro", "followup", "general"] {
            assert!(prompt.contains(word), "missing category {}", word);
        }
        assert!(prompt.ends_with("Ana: hello"));
    }
}
