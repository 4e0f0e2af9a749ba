//! UI Events
//!
//! Events emitted from the state layer to the UI layer for toasts and
//! other user-facing feedback.

use std::sync::Arc;

/// UI events for user feedback
#[derive(Clone, Debug)]
pub enum UIEvent {
    /// Display a toast notification
    Toast {
        /// Message to display
        message: Arc<str>,
        /// Whether this is an error (affects styling)
        is_error: bool,
    },

    /// A transaction was accepted by the dialog and added to the ledger
    TransactionRecorded {
        /// Transaction id
        id: Arc<str>,
    },
}

impl UIEvent {
    pub fn toast(message: impl Into<Arc<str>>) -> Self {
        Self::Toast {
            message: message.into(),
            is_error: false,
        }
    }

    pub fn error_toast(message: impl Into<Arc<str>>) -> Self {
        Self::Toast {
            message: message.into(),
            is_error: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_constructors() {
        assert!(matches!(
            UIEvent::toast("ok"),
            UIEvent::Toast { is_error: false, .. }
        ));
        match UIEvent::error_toast("Failed to fetch currency data.") {
            UIEvent::Toast { message, is_error } => {
                assert!(is_error);
                assert_eq!(message.as_ref(), "Failed to fetch currency data.");
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }
}
