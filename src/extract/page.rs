//! The chat page as seen by the extractor
//!
//! The extractor needs only three things from a host page: the message
//! containers for a role, a way to press a container's copy button, and the
//! clipboard that button writes to.

use super::clipboard::Clipboard;
use crate::conversation::Role;
use crate::error::Result;

/// One message container on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageHandle {
    pub role: Role,
    /// 0-based document position among containers of the same role
    pub position: usize,
    /// Whether the container has a discoverable copy button
    pub has_copy_control: bool,
}

/// A host page that exposes per-message copy controls.
pub trait ChatPage {
    /// All message containers for `role`, in document order.
    fn locate(&self, role: Role) -> Vec<MessageHandle>;

    /// Press the copy button of `handle`.
    ///
    /// The page reacts by writing the message text to `clipboard`.
    fn trigger_copy(&mut self, handle: &MessageHandle, clipboard: &mut dyn Clipboard)
        -> Result<()>;

    /// Visible text of the first user message, used for the default title.
    fn first_user_text(&self) -> Option<String> {
        None
    }
}
