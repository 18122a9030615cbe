//! Session-wide status.
//!
//! Connectivity plus a single latest-error slot. Errors overwrite each
//! other and the next successful operation clears the slot; nothing here
//! is fatal and nothing is retried.

/// Backend connectivity as last observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Connectivity {
    #[default]
    Unknown,
    Connected,
    Disconnected,
}

impl Connectivity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Connectivity::Unknown => "unknown",
            Connectivity::Connected => "connected",
            Connectivity::Disconnected => "disconnected",
        }
    }
}

/// Process-lifetime session state.
#[derive(Debug, Default)]
pub struct SessionState {
    connectivity: Connectivity,
    last_error: Option<String>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn connectivity(&self) -> Connectivity {
        self.connectivity
    }

    pub fn set_connectivity(&mut self, connectivity: Connectivity) {
        self.connectivity = connectivity;
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Record a failure, overwriting any previous one.
    pub fn record_error(&mut self, message: impl Into<String>) {
        self.last_error = Some(message.into());
    }

    /// Called on every successful operation.
    pub fn clear_error(&mut self) {
        self.last_error = None;
    }
}
