//! Location and navigation capability.

use parking_lot::Mutex;

/// Injected view of the client's current location.
///
/// The request pipeline reads the current location and forces a navigation
/// when a session is invalidated; embedders supply whatever history
/// mechanism their environment has. Locations are full client-side paths
/// including query and fragment, e.g. `/dashboard/overview?period=7d`.
pub trait Navigator: Send + Sync {
    /// Current location (path + query + fragment).
    fn current_location(&self) -> String;

    /// Replace the current location.
    fn navigate(&self, target: &str);
}

/// In-memory history: tracks the current location behind a mutex.
///
/// Starts at `/`. Used by tests and by embedders that model client-side
/// history in-process.
pub struct HistoryNavigator {
    location: Mutex<String>,
}

impl HistoryNavigator {
    pub fn new() -> Self {
        Self::with_location("/")
    }

    pub fn with_location(location: &str) -> Self {
        Self {
            location: Mutex::new(location.to_string()),
        }
    }
}

impl Default for HistoryNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator for HistoryNavigator {
    fn current_location(&self) -> String {
        self.location.lock().clone()
    }

    fn navigate(&self, target: &str) {
        *self.location.lock() = target.to_string();
    }
}
