//! Keyword-matching health assistant shown in the chat overlay.

/// First line of every transcript.
pub const GREETING: &str = "Hello! Ask me anything about blood sugar and health.";

const FALLBACK: &str =
    "Sorry, I don't have an answer for that. Try asking about sugar levels, symptoms, or tips.";

/// Checked in order; the first keyword found in the question wins.
const RULES: &[(&str, &str)] = &[
    (
        "normal",
        "Normal blood sugar levels range from 70 to 140 mg/dL depending on timing and meals.",
    ),
    (
        "high",
        "High blood sugar could indicate diabetes or stress. Drink water and consult a doctor.",
    ),
    (
        "low",
        "Low blood sugar may cause dizziness or sweating. Eat or drink something sugary quickly.",
    ),
    (
        "prevent",
        "Maintain a healthy diet, exercise regularly, and monitor your levels to prevent complications.",
    ),
    (
        "diabetes",
        "Diabetes is a condition where the body cannot regulate blood sugar properly. Management is key.",
    ),
];

/// Answer a question. Matching is case-insensitive substring search.
pub fn respond(question: &str) -> &'static str {
    let question = question.to_lowercase();
    RULES
        .iter()
        .find(|(keyword, _)| question.contains(keyword))
        .map(|(_, answer)| *answer)
        .unwrap_or(FALLBACK)
}

/// Who said a transcript line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Assistant,
}

impl Speaker {
    pub fn label(&self) -> &'static str {
        match self {
            Speaker::User => "You",
            Speaker::Assistant => "Assistant",
        }
    }
}

/// A running conversation.
#[derive(Debug, Clone)]
pub struct Assistant {
    transcript: Vec<(Speaker, String)>,
}

impl Default for Assistant {
    fn default() -> Self {
        Self::new()
    }
}

impl Assistant {
    pub fn new() -> Self {
        Self {
            transcript: vec![(Speaker::Assistant, GREETING.to_string())],
        }
    }

    /// Record a question and its answer. Blank questions are ignored.
    pub fn ask(&mut self, question: &str) -> Option<&'static str> {
        let question = question.trim();
        if question.is_empty() {
            return None;
        }
        let answer = respond(question);
        self.transcript.push((Speaker::User, question.to_string()));
        self.transcript.push((Speaker::Assistant, answer.to_string()));
        Some(answer)
    }

    pub fn transcript(&self) -> &[(Speaker, String)] {
        &self.transcript
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_keyword() {
        assert!(respond("What is NORMAL?").starts_with("Normal blood sugar"));
        assert!(respond("why is mine high").starts_with("High blood sugar"));
        assert!(respond("feeling low").starts_with("Low blood sugar"));
        assert!(respond("how to prevent it").starts_with("Maintain"));
        assert!(respond("what is diabetes").starts_with("Diabetes is"));
    }

    #[test]
    fn test_earlier_rules_take_priority() {
        // "normal" before "high"
        assert!(respond("is high normal?").starts_with("Normal"));
        // "high" before "diabetes"
        assert!(respond("high diabetes risk").starts_with("High"));
        // "low" before "prevent"
        assert!(respond("prevent low sugar").starts_with("Low"));
    }

    #[test]
    fn test_fallback() {
        assert_eq!(respond("hello"), FALLBACK);
        assert_eq!(respond(""), FALLBACK);
    }

    #[test]
    fn test_transcript() {
        let mut assistant = Assistant::new();
        assert_eq!(assistant.transcript().len(), 1);
        assert_eq!(assistant.transcript()[0].1, GREETING);

        assert!(assistant.ask("   ").is_none());
        assert_eq!(assistant.transcript().len(), 1);

        let answer = assistant.ask("  what is diabetes ").unwrap();
        assert!(answer.starts_with("Diabetes"));
        let transcript = assistant.transcript();
        assert_eq!(transcript.len(), 3);
        assert_eq!(transcript[1], (Speaker::User, "what is diabetes".to_string()));
        assert_eq!(transcript[2].0, Speaker::Assistant);
    }
}
