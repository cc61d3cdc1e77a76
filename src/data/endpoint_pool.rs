use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::{Result, bail};

/// Round-robin cursor over interchangeable REST base URLs.
///
/// Every clone shares the cursor, so a failover recorded by one request
/// steers every later request away from the bad host. The cursor only moves
/// on an explicit `advance`; back-to-back reads stick to the same endpoint.
#[derive(Clone)]
pub struct EndpointPool {
    endpoints: Arc<Vec<String>>,
    cursor: Arc<AtomicUsize>,
}

impl EndpointPool {
    pub fn new(endpoints: &[&str]) -> Result<Self> {
        if endpoints.is_empty() {
            bail!("endpoint pool needs at least one base URL");
        }

        Ok(Self {
            endpoints: Arc::new(endpoints.iter().map(|e| e.to_string()).collect()),
            cursor: Arc::new(AtomicUsize::new(0)),
        })
    }

    /// The base URL requests should currently target.
    pub fn current(&self) -> &str {
        &self.endpoints[self.cursor.load(Ordering::Relaxed)]
    }

    /// Rotates to the next endpoint, wrapping at the end of the list.
    pub fn advance(&self) {
        let len = self.endpoints.len();
        // fetch_update never fails with an always-Some closure
        let _ = self
            .cursor
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |i| Some((i + 1) % len));
    }

    /// Number of endpoints, which is also the retry budget for one request.
    pub fn size(&self) -> usize {
        self.endpoints.len()
    }
}
