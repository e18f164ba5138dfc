use std::time::Duration;

use serde::{Deserialize, Serialize};
use sysinfo::System;

/// Fallback when the OS refuses to tell us who we are. Responses still go
/// out with a 200; a probe must never fail on a metadata read.
pub const UNKNOWN_HOST: &str = "unknown";

/// Minimum supported toolchain, baked in at compile time. Reported where the
/// original deployment surfaced its runtime version.
pub const RUNTIME_VERSION: &str = concat!("rust ", env!("CARGO_PKG_RUST_VERSION"));

/// Read-only bundle of host and runtime facts, recomputed on every request.
/// Nothing here is cached or shared; the snapshot lives on the handler's
/// stack frame and dies with the response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostSnapshot {
    pub hostname: String,
    pub platform: String,
    pub runtime_version: String,
    pub uptime_seconds: u64,
}

impl HostSnapshot {
    /// Captures the current host facts. `uptime` comes from the caller's
    /// monotonic process clock, so repeated captures never report a smaller
    /// value within one process lifetime.
    pub fn capture(uptime: Duration) -> Self {
        Self {
            hostname: System::host_name().unwrap_or_else(|| UNKNOWN_HOST.to_string()),
            platform: std::env::consts::OS.to_string(),
            runtime_version: RUNTIME_VERSION.to_string(),
            uptime_seconds: uptime.as_secs(),
        }
    }
}
