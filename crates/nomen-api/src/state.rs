//! Application state management
//!
//! Author: hephaex@gmail.com

use nomen_core::config::AppConfig;
use nomen_extractor::InformationExtractor;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Application state shared across handlers
///
/// Built once at startup; the extractor and its pipeline are read-only
/// for the lifetime of the process.
pub struct AppState {
    /// Application configuration
    pub config: AppConfig,
    /// Surname extractor over the loaded NER pipeline
    pub extractor: InformationExtractor,
    /// Server start time
    pub start_time: Instant,
    /// Request counter
    pub request_count: AtomicU64,
    /// Requests that produced a name
    pub names_found: AtomicU64,
    /// Requests that completed without a name
    pub no_match: AtomicU64,
}

impl AppState {
    /// Create new application state with config and an initialized extractor
    pub fn new(config: AppConfig, extractor: InformationExtractor) -> Self {
        Self {
            config,
            extractor,
            start_time: Instant::now(),
            request_count: AtomicU64::new(0),
            names_found: AtomicU64::new(0),
            no_match: AtomicU64::new(0),
        }
    }

    /// Increment request counter
    pub fn increment_requests(&self) -> u64 {
        self.request_count.fetch_add(1, Ordering::SeqCst)
    }

    /// Get total request count
    pub fn get_request_count(&self) -> u64 {
        self.request_count.load(Ordering::SeqCst)
    }

    /// Record the outcome of a successful extraction
    pub fn record_extraction(&self, found: bool) {
        if found {
            self.names_found.fetch_add(1, Ordering::SeqCst);
        } else {
            self.no_match.fetch_add(1, Ordering::SeqCst);
        }
    }

    pub fn get_names_found(&self) -> u64 {
        self.names_found.load(Ordering::SeqCst)
    }

    pub fn get_no_match(&self) -> u64 {
        self.no_match.load(Ordering::SeqCst)
    }

    /// Get uptime in seconds
    pub fn uptime_secs(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
