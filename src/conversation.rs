//! Conversation model and reconstruction
//!
//! The copy controls of the chat page are driven separately for questions
//! and answers, so the extraction stage yields two ordered lists. This module
//! pairs them back into a single, time-ordered sequence of turns.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Role
// ─────────────────────────────────────────────────────────────────────────────

/// Who authored a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// A question typed by the user
    User,
    /// An AI answer (Markdown)
    Assistant,
}

impl Role {
    /// Get the display label for this role.
    pub fn label(&self) -> &'static str {
        match self {
            Role::User => "user messages",
            Role::Assistant => "AI answers",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Turn
// ─────────────────────────────────────────────────────────────────────────────

/// One conversational unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub role: Role,
    /// Raw text for user turns, Markdown for assistant turns
    pub content: String,
    /// 1-based position among turns of the same role
    pub ordinal: usize,
}

impl Turn {
    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }

    pub fn is_assistant(&self) -> bool {
        self.role == Role::Assistant
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Conversation
// ─────────────────────────────────────────────────────────────────────────────

/// An ordered sequence of turns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conversation {
    turns: Vec<Turn>,
}

impl Conversation {
    /// Interleave questions and answers pairwise by index.
    ///
    /// Position `i` contributes the user turn at `i` (if present) followed by
    /// the assistant turn at `i` (if present), both with ordinal `i + 1`.
    /// Empty strings count as absent. Pairing is purely positional: when the
    /// extractor dropped a message the remaining ones shift and pair up with
    /// the wrong partner. That behavior is kept as-is.
    pub fn build(user_texts: &[String], answer_texts: &[String]) -> Self {
        let len = user_texts.len().max(answer_texts.len());
        let mut turns = Vec::with_capacity(user_texts.len() + answer_texts.len());

        for i in 0..len {
            if let Some(text) = user_texts.get(i).filter(|t| !t.is_empty()) {
                turns.push(Turn {
                    role: Role::User,
                    content: text.clone(),
                    ordinal: i + 1,
                });
            }
            if let Some(text) = answer_texts.get(i).filter(|t| !t.is_empty()) {
                turns.push(Turn {
                    role: Role::Assistant,
                    content: text.clone(),
                    ordinal: i + 1,
                });
            }
        }

        Self { turns }
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// The assistant turn directly after the turn at `index`, if any.
    pub fn answer_after(&self, index: usize) -> Option<&Turn> {
        self.turns.get(index + 1).filter(|t| t.is_assistant())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_build_equal_lengths_interleaves() {
        let users = strings(&["q1", "q2", "q3"]);
        let answers = strings(&["a1", "a2", "a3"]);
        let conv = Conversation::build(&users, &answers);

        assert_eq!(conv.len(), 6);
        for (i, turn) in conv.turns().iter().enumerate() {
            let expected_role = if i % 2 == 0 { Role::User } else { Role::Assistant };
            assert_eq!(turn.role, expected_role);
            assert_eq!(turn.ordinal, i / 2 + 1);
        }
        assert_eq!(conv.turns()[3].content, "a2");
    }

    #[test]
    fn test_build_fewer_answers() {
        let users = strings(&["q1", "q2", "q3"]);
        let answers = strings(&["a1"]);
        let conv = Conversation::build(&users, &answers);

        let summary: Vec<(Role, usize)> =
            conv.turns().iter().map(|t| (t.role, t.ordinal)).collect();
        assert_eq!(
            summary,
            vec![
                (Role::User, 1),
                (Role::Assistant, 1),
                (Role::User, 2),
                (Role::User, 3),
            ]
        );
    }

    #[test]
    fn test_build_fewer_questions() {
        let users = strings(&["q1"]);
        let answers = strings(&["a1", "a2"]);
        let conv = Conversation::build(&users, &answers);

        assert_eq!(conv.len(), 3);
        assert_eq!(conv.turns()[2].role, Role::Assistant);
        assert_eq!(conv.turns()[2].ordinal, 2);
    }

    #[test]
    fn test_build_skips_empty_entries_but_ordinal_advances() {
        let users = strings(&["q1", "", "q3"]);
        let answers = strings(&["a1", "a2", "a3"]);
        let conv = Conversation::build(&users, &answers);

        assert_eq!(conv.len(), 5);
        assert_eq!(conv.turns()[2].role, Role::Assistant);
        assert_eq!(conv.turns()[2].ordinal, 2);
        assert_eq!(conv.turns()[3].ordinal, 3);
        assert!(conv.turns()[3].is_user());
    }

    #[test]
    fn test_build_empty() {
        let conv = Conversation::build(&[], &[]);
        assert!(conv.is_empty());
    }

    #[test]
    fn test_answer_after() {
        let users = strings(&["q1", "q2"]);
        let answers = strings(&["a1"]);
        let conv = Conversation::build(&users, &answers);

        assert_eq!(conv.answer_after(0).map(|t| t.content.as_str()), Some("a1"));
        // q2 is the last turn
        assert!(conv.answer_after(2).is_none());
    }
}
