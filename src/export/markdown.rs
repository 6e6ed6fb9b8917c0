//! Markdown transcript generation
//!
//! Produces a plain `.md` document: a small header block with the title and
//! export time, then every question between decorative delimiters followed by
//! its answer. Question text is written verbatim, without Markdown escaping.

use super::timestamp::format_timestamp;
use crate::conversation::{Conversation, Role};
use chrono::NaiveDateTime;

/// Render the conversation as a Markdown transcript.
pub fn render_markdown(
    title: &str,
    conversation: &Conversation,
    exported_at: &NaiveDateTime,
) -> String {
    let mut md = String::new();

    // Header
    md.push_str("---\n");
    md.push_str(&format!("**Title:** {}\n", title));
    md.push_str(&format!("**Exported:** {}\n", format_timestamp(exported_at)));
    md.push_str("\n---\n");

    let turns = conversation.turns();
    for (idx, turn) in turns.iter().enumerate() {
        match turn.role {
            Role::User => {
                md.push_str(&format!("◤━━━━━━ Q{} ━━━━━◥\n", turn.ordinal));
                md.push_str(&turn.content);
                md.push('\n');
                md.push_str(&format!("◣━━━━━━ Q{} ━━━━━◢\n\n", turn.ordinal));
            }
            Role::Assistant => {
                md.push_str(&turn.content);
                md.push_str("\n\n");

                // Rule after each Q&A block, except at the very end
                if idx + 1 < turns.len() {
                    md.push_str("---\n\n");
                }
            }
        }
    }

    md
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
