//! Contracts for the things the sidebar talks to but does not own.

use serde::{Deserialize, Serialize};

/// Router lifecycle events. Only finished navigations drive the sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouterEvent {
    NavigationStart { url: String },
    NavigationEnd { url: String },
    NavigationCancel { url: String },
    NavigationError { url: String },
}

impl RouterEvent {
    /// The URL of a finished navigation, `None` for every other event.
    pub fn finished_url(&self) -> Option<&str> {
        match self {
            Self::NavigationEnd { url } => Some(url),
            _ => None,
        }
    }
}

pub trait Router {
    /// Keeps the registration alive; dropping it stops delivery.
    type Listener;

    fn current_url(&self) -> String;

    fn listen(&self, callback: Box<dyn Fn(&RouterEvent)>) -> Self::Listener;
}

/// Persisted session data (tokens, cached profile and so on).
pub trait SessionStore {
    fn clear_all(&self);
}

/// Full page navigation, dropping all in-memory application state.
pub trait Location {
    fn redirect(&self, href: &str);
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum PromptKind {
    #[default]
    #[display("question")]
    Question,
    #[display("warning")]
    Warning,
    #[display("info")]
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptRequest {
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub kind: PromptKind,
}

impl PromptRequest {
    pub fn logout() -> Self {
        Self {
            title: "Logout".into(),
            message: "Do you really want to logout".into(),
            kind: PromptKind::Question,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Confirmation {
    pub confirmed: bool,
}

/// A yes/no dialog. Resolves exactly once.
#[allow(async_fn_in_trait)]
pub trait ConfirmationPrompt {
    async fn confirm(&self, request: &PromptRequest) -> Confirmation;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finished_url() {
        let end = RouterEvent::NavigationEnd {
            url: "/country".into(),
        };
        assert_eq!(end.finished_url(), Some("/country"));

        let start = RouterEvent::NavigationStart {
            url: "/country".into(),
        };
        assert_eq!(start.finished_url(), None);
        let cancel = RouterEvent::NavigationCancel { url: "/city".into() };
        assert_eq!(cancel.finished_url(), None);
    }

    #[test]
    fn test_prompt_kind_serde() {
        let request: PromptRequest = serde_json::from_str(
            r#"{ "title": "Leave", "message": "Sure?", "kind": "warning" }"#,
        )
        .unwrap();
        assert_eq!(request.kind, PromptKind::Warning);
        assert_eq!(request.kind.to_string(), "warning");

        let defaulted: PromptRequest =
            serde_json::from_str(r#"{ "title": "a", "message": "b" }"#)
                .unwrap();
        assert_eq!(defaulted.kind, PromptKind::Question);
    }
}
