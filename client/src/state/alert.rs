//! Transient alert shown above the auth forms.

#[cfg(test)]
#[path = "alert_test.rs"]
mod alert_test;

/// Visual category of an alert.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    Info,
    Success,
    Error,
}

impl AlertKind {
    /// BEM modifier used by the stylesheet.
    #[must_use]
    pub fn modifier(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alert {
    pub message: String,
    pub kind: AlertKind,
}

impl Alert {
    pub fn info(message: impl Into<String>) -> Self {
        Self { message: message.into(), kind: AlertKind::Info }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self { message: message.into(), kind: AlertKind::Success }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { message: message.into(), kind: AlertKind::Error }
    }
}

/// Handle for dismissing one specific alert.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AlertId(u64);

/// Holds at most one visible alert.
///
/// A newer alert replaces the current one; dismissing by a stale id is a
/// no-op so an old timer cannot hide a newer message.
#[derive(Clone, Debug, Default)]
pub struct AlertSlot {
    current: Option<(AlertId, Alert)>,
    next_id: u64,
}

impl AlertSlot {
    pub fn show(&mut self, alert: Alert) -> AlertId {
        let id = AlertId(self.next_id);
        self.next_id += 1;
        self.current = Some((id, alert));
        id
    }

    /// Clear the alert if `id` is still the visible one.
    pub fn dismiss(&mut self, id: AlertId) -> bool {
        if self.current.as_ref().is_some_and(|(current, _)| *current == id) {
            self.current = None;
            return true;
        }
        false
    }

    #[must_use]
    pub fn current(&self) -> Option<&Alert> {
        self.current.as_ref().map(|(_, alert)| alert)
    }
}
