use crate::{ConfirmationPrompt, Location, PromptRequest, SessionStore};

/// Where logout lands after the session is cleared.
pub const LOGOUT_REDIRECT: &str = "/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoutOutcome {
    Cancelled,
    LoggedOut,
}

/// Ask for confirmation, then clear the session and reload at the root.
///
/// Nothing is touched until the prompt resolves, and a declined prompt leaves
/// the session as it was.
pub async fn logout(
    request: &PromptRequest,
    prompt: &impl ConfirmationPrompt,
    store: &impl SessionStore,
    location: &impl Location,
) -> LogoutOutcome {
    let confirmation = prompt.confirm(request).await;
    if !confirmation.confirmed {
        tracing::debug!("logout cancelled");
        return LogoutOutcome::Cancelled;
    }

    tracing::info!("logging out");
    store.clear_all();
    location.redirect(LOGOUT_REDIRECT);
    LogoutOutcome::LoggedOut
}
