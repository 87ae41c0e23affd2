// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Per-client sliding-window request limiter.

use std::collections::{HashMap, VecDeque};
use std::net::IpAddr;
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

/// Clients are keyed by IP. Requests without a peer address share the
/// `None` bucket.
pub struct Throttle {
    limit: usize,
    window: Duration,
    buckets: Mutex<Buckets>,
}

#[derive(Default)]
struct Buckets {
    hits: HashMap<Option<IpAddr>, VecDeque<Instant>>,
    last_sweep: Option<Instant>,
}

impl Buckets {
    /// Forgets clients with no hit inside the window. Runs at most once per
    /// window.
    fn sweep(&mut self, now: Instant, window: Duration) {
        match self.last_sweep {
            Some(last) if now.saturating_duration_since(last) <= window => {}
            Some(_) => {
                self.hits.retain(|_, recent| {
                    recent
                        .back()
                        .is_some_and(|&t| now.saturating_duration_since(t) <= window)
                });
                self.last_sweep = Some(now);
            }
            None => self.last_sweep = Some(now),
        }
    }
}

impl Throttle {
    pub fn new(limit: usize, window: Duration) -> Self {
        Self {
            limit,
            window,
            buckets: Mutex::new(Buckets::default()),
        }
    }

    /// Records a request and returns whether it is allowed.
    pub fn check(&self, client: Option<IpAddr>) -> bool {
        self.check_at(client, Instant::now())
    }

    pub(crate) fn check_at(&self, client: Option<IpAddr>, now: Instant) -> bool {
        let mut buckets = self.buckets.lock().unwrap_or_else(PoisonError::into_inner);
        buckets.sweep(now, self.window);
        let recent = buckets.hits.entry(client).or_default();

        // Drop hits that fell out of the window.
        while let Some(&oldest) = recent.front() {
            if now.saturating_duration_since(oldest) > self.window {
                recent.pop_front();
            } else {
                break;
            }
        }

        if recent.len() >= self.limit {
            return false;
        }
        recent.push_back(now);
        true
    }

    /// Number of clients currently holding a bucket.
    pub(crate) fn tracked_clients(&self) -> usize {
        self.buckets
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .hits
            .len()
    }
}
