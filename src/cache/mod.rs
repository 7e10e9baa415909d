//! In-process response cache
//!
//! A generic TTL cache used to memoize synthetic dashboard sections within a
//! single run.

pub mod clock;
pub mod key;
pub mod memory;

use std::time::Duration;

/// Cache TTL per dashboard section
pub struct CacheTtl;

impl CacheTtl {
    // Pipelines and uptime flip often
    pub const GITLAB: Duration = Duration::from_secs(2 * 60); // 2 min
    pub const UPTIME: Duration = Duration::from_secs(60); // 1 min

    // Server metrics are sampled continuously
    pub const SERVERS: Duration = Duration::from_secs(30); // 30 sec

    // DNS answers carry their own TTLs, these rarely change
    pub const DNS: Duration = Duration::from_secs(60 * 60); // 1 hr

    pub const AUDIT: Duration = Duration::from_secs(5 * 60); // 5 min
}

pub use clock::{Clock, SystemClock};
pub use key::cache_key;
pub use memory::{Cache, CacheStats};
