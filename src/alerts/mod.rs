//! Transient status banners.
//!
//! An alert enters, becomes visible shortly after, and closes itself after
//! [`AUTO_DISMISS_AFTER`]. Closing removes the visible state first and drops the
//! alert once the [`CLOSE_TRANSITION`] has elapsed. Manual and automatic dismissal
//! share that close path; a manual dismiss cancels the pending automatic one.

pub mod scheduler;

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use chrono::Utc;
use serde::Serialize;
use tokio::task::JoinHandle;

pub type AlertId = u64;

/// Delay before an inserted alert gets its visible state.
pub const ENTER_DELAY: Duration = Duration::from_millis(10);
/// Lifetime of an alert nobody dismisses.
pub const AUTO_DISMISS_AFTER: Duration = Duration::from_secs(5);
/// Time between losing the visible state and removal.
pub const CLOSE_TRANSITION: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Success,
    Danger,
    Info,
    Warning,
}

impl AlertKind {
    pub fn as_str(self) -> &'static str {
        match self {
            AlertKind::Success => "success",
            AlertKind::Danger => "danger",
            AlertKind::Info => "info",
            AlertKind::Warning => "warning",
        }
    }

    /// Material Symbols icon name.
    pub fn icon(self) -> &'static str {
        match self {
            AlertKind::Success => "check_circle",
            AlertKind::Danger => "error",
            AlertKind::Info => "info",
            AlertKind::Warning => "warning",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertPhase {
    Entering,
    Visible,
    Closing,
}

#[derive(Debug, Clone, Serialize)]
pub struct Alert {
    pub id: AlertId,
    pub kind: AlertKind,
    pub message: String,
    pub icon: &'static str,
    pub phase: AlertPhase,
    pub created_at: String,
}

impl Alert {
    pub fn css_class(&self) -> String {
        match self.phase {
            AlertPhase::Visible => format!("alert alert-{} show", self.kind.as_str()),
            _ => format!("alert alert-{}", self.kind.as_str()),
        }
    }
}

struct Entry {
    alert: Alert,
    auto_dismiss: Option<JoinHandle<()>>,
}

#[derive(Default)]
struct Inner {
    next_id: AlertId,
    entries: Vec<Entry>,
}

/// Shared alert list. Cloning yields another handle to the same alerts.
///
/// `show` and `dismiss` spawn tokio tasks and must run inside a runtime.
#[derive(Clone, Default)]
pub struct AlertCenter {
    inner: Arc<Mutex<Inner>>,
}

impl AlertCenter {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Insert an alert and schedule its enter and auto-dismiss steps.
    pub fn show(&self, message: impl Into<String>, kind: AlertKind) -> AlertId {
        let id = {
            let mut inner = self.lock();
            inner.next_id += 1;
            let id = inner.next_id;
            inner.entries.push(Entry {
                alert: Alert {
                    id,
                    kind,
                    message: message.into(),
                    icon: kind.icon(),
                    phase: AlertPhase::Entering,
                    created_at: Utc::now().to_rfc3339(),
                },
                auto_dismiss: None,
            });
            id
        };

        let handle = scheduler::spawn_lifecycle(self.clone(), id);
        let mut inner = self.lock();
        match inner.entries.iter_mut().find(|e| e.alert.id == id) {
            Some(entry) if entry.alert.phase != AlertPhase::Closing => entry.auto_dismiss = Some(handle),
            _ => handle.abort(),
        }
        id
    }

    /// Like `show`, but reuses an alert with the same message that is still on
    /// screen and not closing.
    pub fn show_unless_active(&self, message: &str, kind: AlertKind) -> AlertId {
        let existing = self
            .lock()
            .entries
            .iter()
            .find(|e| e.alert.message == message && e.alert.phase != AlertPhase::Closing)
            .map(|e| e.alert.id);
        match existing {
            Some(id) => id,
            None => self.show(message, kind),
        }
    }

    /// Manually close an alert. Returns false if it is unknown or already closing.
    pub fn dismiss(&self, id: AlertId) -> bool {
        self.close(id, true)
    }

    /// Alerts currently on screen, oldest first.
    pub fn active(&self) -> Vec<Alert> {
        self.lock().entries.iter().map(|e| e.alert.clone()).collect()
    }

    pub fn get(&self, id: AlertId) -> Option<Alert> {
        self.lock().entries.iter().find(|e| e.alert.id == id).map(|e| e.alert.clone())
    }

    pub(crate) fn mark_visible(&self, id: AlertId) {
        let mut inner = self.lock();
        if let Some(entry) = inner.entries.iter_mut().find(|e| e.alert.id == id) {
            if entry.alert.phase == AlertPhase::Entering {
                entry.alert.phase = AlertPhase::Visible;
            }
        }
    }

    /// Shared close path. `cancel_auto` aborts the pending auto-dismiss task;
    /// the auto-dismiss task itself passes false.
    pub(crate) fn close(&self, id: AlertId, cancel_auto: bool) -> bool {
        {
            let mut inner = self.lock();
            let Some(entry) = inner.entries.iter_mut().find(|e| e.alert.id == id) else {
                return false;
            };
            if entry.alert.phase == AlertPhase::Closing {
                return false;
            }
            if let Some(handle) = entry.auto_dismiss.take() {
                if cancel_auto {
                    handle.abort();
                }
            }
            entry.alert.phase = AlertPhase::Closing;
        }
        scheduler::spawn_removal(self.clone(), id);
        true
    }

    pub(crate) fn remove(&self, id: AlertId) {
        self.lock().entries.retain(|e| e.alert.id != id);
    }
}

impl std::fmt::Debug for AlertCenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlertCenter").field("active", &self.lock().entries.len()).finish()
    }
}
