//! Transient user-facing notifications (toasts).
//!
//! A [`Toast`] is a plain value: the presentation layer shows it for
//! `visibility` and, when it hides, navigates to `on_hide` if set.

use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use crate::navigation::Route;

/// Success or error styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A notification to show the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub kind: ToastKind,
    pub title: String,
    pub subtitle: Option<String>,
    /// How long the toast stays visible before auto-hiding.
    pub visibility: Duration,
    /// Route to navigate to once the toast hides.
    pub on_hide: Option<Route>,
}

impl Toast {
    /// An error toast.
    #[must_use]
    pub fn error(title: impl Into<String>, subtitle: impl Into<String>, visibility: Duration) -> Self {
        Self {
            kind: ToastKind::Error,
            title: title.into(),
            subtitle: Some(subtitle.into()),
            visibility,
            on_hide: None,
        }
    }

    /// A success toast.
    #[must_use]
    pub fn success(
        title: impl Into<String>,
        subtitle: impl Into<String>,
        visibility: Duration,
    ) -> Self {
        Self {
            kind: ToastKind::Success,
            ..Self::error(title, subtitle, visibility)
        }
    }

    /// Navigate to `route` when the toast hides.
    #[must_use]
    pub fn then(mut self, route: Route) -> Self {
        self.on_hide = Some(route);
        self
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.kind == ToastKind::Error
    }

    /// Title and subtitle on one line.
    #[must_use]
    pub fn text(&self) -> String {
        match &self.subtitle {
            Some(sub) => format!("{}: {sub}", self.title),
            None => self.title.clone(),
        }
    }
}

/// Fire-and-forget sink for toasts.
pub trait Notifier {
    fn show(&self, toast: Toast);
}

/// Notifier that keeps every toast it was given, in order.
#[derive(Debug, Default)]
pub struct ToastLog {
    shown: Mutex<Vec<Toast>>,
}

impl ToastLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove and return everything shown so far.
    pub fn drain(&self) -> Vec<Toast> {
        std::mem::take(&mut *self.shown.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl Notifier for ToastLog {
    fn show(&self, toast: Toast) {
        self.shown
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(toast);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_with_follow_up_route() {
        let toast = Toast::success("Account Created", "Redirecting...", Duration::from_secs(1))
            .then(Route::Login);
        assert_eq!(toast.kind, ToastKind::Success);
        assert_eq!(toast.on_hide, Some(Route::Login));
        assert_eq!(toast.text(), "Account Created: Redirecting...");
    }

    #[test]
    fn test_toast_log_drains_in_order() {
        let log = ToastLog::new();
        log.show(Toast::error("One", "a", Duration::from_secs(2)));
        log.show(Toast::error("Two", "b", Duration::from_secs(2)));

        let titles: Vec<String> = log.drain().into_iter().map(|t| t.title).collect();
        assert_eq!(titles, vec!["One", "Two"]);
        assert!(log.drain().is_empty());
    }
}
