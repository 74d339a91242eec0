//! Connectivity signal plumbing.
//!
//! The platform shell pushes connectivity changes into a
//! [`ConnectivityFeed`]; the orchestrator samples the paired watch
//! receiver, which doubles as the pull-style initial snapshot.

use tokio::sync::watch;

/// One sample of the platform connectivity signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectivityStatus {
    /// Whether a network interface is connected.
    pub connected: bool,
    /// Whether the internet was confirmed reachable; `None` when the
    /// platform has not probed yet.
    pub reachable: Option<bool>,
}

impl ConnectivityStatus {
    /// The optimistic startup assumption: connected, reachability unprobed.
    pub fn online() -> Self {
        Self {
            connected: true,
            reachable: None,
        }
    }

    /// Fully disconnected.
    pub fn disconnected() -> Self {
        Self {
            connected: false,
            reachable: None,
        }
    }

    /// Offline means not connected, or reachability explicitly refuted.
    /// Unknown reachability is treated as online.
    pub fn is_offline(&self) -> bool {
        !self.connected || self.reachable == Some(false)
    }
}

impl Default for ConnectivityStatus {
    fn default() -> Self {
        Self::online()
    }
}

/// Producer side of the connectivity signal.
pub struct ConnectivityFeed {
    tx: watch::Sender<ConnectivityStatus>,
}

impl ConnectivityFeed {
    /// Creates a feed with the given initial snapshot.
    pub fn new(initial: ConnectivityStatus) -> Self {
        let (tx, _) = watch::channel(initial);
        Self { tx }
    }

    /// Publishes a new sample, waking subscribed consumers.
    pub fn publish(&self, status: ConnectivityStatus) {
        self.tx.send_replace(status);
    }

    /// A receiver for the orchestrator (or anyone else) to sample.
    pub fn subscribe(&self) -> watch::Receiver<ConnectivityStatus> {
        self.tx.subscribe()
    }
}

impl Default for ConnectivityFeed {
    fn default() -> Self {
        Self::new(ConnectivityStatus::online())
    }
}

#[cfg(test)]
mod tests {
    use super::ConnectivityStatus;

    #[test]
    fn unknown_reachability_is_optimistically_online() {
        let status = ConnectivityStatus {
            connected: true,
            reachable: None,
        };

        assert!(!status.is_offline());
    }

    #[test]
    fn refuted_reachability_is_offline_even_when_connected() {
        let status = ConnectivityStatus {
            connected: true,
            reachable: Some(false),
        };

        assert!(status.is_offline());
    }

    #[test]
    fn disconnected_is_offline() {
        assert!(ConnectivityStatus::disconnected().is_offline());
    }
}
