//! Server state management

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Core server state
///
/// The server holds no draft state: drafts live in the presentation
/// client's session. Only liveness counters are tracked here.
#[derive(Debug)]
pub struct ServerState {
    pub bind_address: SocketAddr,
    pub start_time: Instant,
    articles_generated: AtomicU64,
    articles_published: AtomicU64,
}

impl ServerState {
    pub fn new(bind_address: SocketAddr) -> Self {
        Self {
            bind_address,
            start_time: Instant::now(),
            articles_generated: AtomicU64::new(0),
            articles_published: AtomicU64::new(0),
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    pub fn record_generated(&self) -> u64 {
        self.articles_generated.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn record_published(&self) -> u64 {
        self.articles_published.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn generated_count(&self) -> u64 {
        self.articles_generated.load(Ordering::Relaxed)
    }

    pub fn published_count(&self) -> u64 {
        self.articles_published.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{IpAddr, Ipv4Addr};

    #[test]
    fn counters_start_at_zero() {
        let state = ServerState::new(SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 8008));

        assert_eq!(state.generated_count(), 0);
        assert_eq!(state.published_count(), 0);
    }

    #[test]
    fn counters_track_independently() {
        let state = ServerState::new(SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 8008));

        assert_eq!(state.record_generated(), 1);
        assert_eq!(state.record_generated(), 2);
        assert_eq!(state.record_published(), 1);

        assert_eq!(state.generated_count(), 2);
        assert_eq!(state.published_count(), 1);
    }
}
