// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use rolodex_core::config::{DEFAULT_DATA_PATH, DEFAULT_PAGE_SIZE};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct NodeConfig {
    pub bind_addr: SocketAddr,
    pub data_path: PathBuf,
    pub default_per_page: usize,
    pub max_per_page: usize,
    /// Requests allowed per client IP inside one throttle window.
    pub request_limit: usize,
    pub throttle_window_secs: u64,
    pub cors: bool,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 9292)),
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            default_per_page: DEFAULT_PAGE_SIZE,
            max_per_page: 100,
            request_limit: 60,
            throttle_window_secs: 60,
            cors: true,
        }
    }
}

impl NodeConfig {
    /// Defaults overridden by `ROLODEX_*` environment variables.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        override_from_env("ROLODEX_BIND_ADDR", &mut cfg.bind_addr);
        override_from_env("ROLODEX_DATA_PATH", &mut cfg.data_path);
        override_from_env("ROLODEX_MAX_PER_PAGE", &mut cfg.max_per_page);
        override_from_env("ROLODEX_REQUEST_LIMIT", &mut cfg.request_limit);
        override_from_env("ROLODEX_THROTTLE_WINDOW_SECS", &mut cfg.throttle_window_secs);
        cfg
    }
}

fn override_from_env<T>(key: &str, slot: &mut T)
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let Ok(raw) = std::env::var(key) else {
        return;
    };
    match raw.parse() {
        Ok(v) => *slot = v,
        Err(e) => tracing::warn!("Ignoring {}={:?}: {}", key, raw, e),
    }
}
