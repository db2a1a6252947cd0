//! Caller-owned suggestion/notification state.
//!
//! The host app may surface a "SmartPaste has a suggestion" notice when the
//! clipboard changes. Throttling that notice needs a last-notified timestamp;
//! keeping it process-wide would make the core impure, so it is an explicit
//! value the caller owns and threads through each invocation. The core never
//! reads a clock — the caller supplies `now_ms`.

use serde::{Deserialize, Serialize};

/// Minimum quiet period between two notifications.
pub const MIN_NOTIFY_INTERVAL_MS: i64 = 2_000;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SuggestionState {
    /// User toggle; disabled means never notify.
    pub enabled: bool,
    /// Unix epoch millis of the last surfaced notification.
    pub last_notified_ms: Option<i64>,
}

impl Default for SuggestionState {
    fn default() -> Self {
        Self {
            enabled: true,
            last_notified_ms: None,
        }
    }
}

impl SuggestionState {
    /// Whether a notification may be surfaced at `now_ms`.
    pub fn should_notify(&self, now_ms: i64) -> bool {
        if !self.enabled {
            return false;
        }
        match self.last_notified_ms {
            Some(last) => now_ms.saturating_sub(last) >= MIN_NOTIFY_INTERVAL_MS,
            None => true,
        }
    }

    /// Record a notification at `now_ms`, returning the updated value. The
    /// input is left untouched; the caller decides what to keep.
    pub fn noted(self, now_ms: i64) -> Self {
        Self {
            last_notified_ms: Some(now_ms),
            ..self
        }
    }

    pub fn with_enabled(self, enabled: bool) -> Self {
        Self { enabled, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_notification_always_allowed() {
        assert!(SuggestionState::default().should_notify(0));
    }

    #[test]
    fn test_throttled_within_interval() {
        let state = SuggestionState::default().noted(1_000);
        assert!(!state.should_notify(1_000 + MIN_NOTIFY_INTERVAL_MS - 1));
        assert!(state.should_notify(1_000 + MIN_NOTIFY_INTERVAL_MS));
    }

    #[test]
    fn test_disabled_never_notifies() {
        let state = SuggestionState::default().with_enabled(false);
        assert!(!state.should_notify(i64::MAX));
    }

    #[test]
    fn test_noted_is_value_semantics() {
        let state = SuggestionState::default();
        let updated = state.noted(5);
        assert_eq!(state.last_notified_ms, None);
        assert_eq!(updated.last_notified_ms, Some(5));
        assert!(updated.enabled);
    }
}
