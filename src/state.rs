//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the hero config every view animates from, plus a count of live
//! hero streams. Each stream owns its own `Animation`; nothing here is
//! mutated per tick.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::sequencer::SequencerConfig;

/// Clone is required by Axum; all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub hero: Arc<SequencerConfig>,
    hero_streams: Arc<AtomicUsize>,
}

impl AppState {
    #[must_use]
    pub fn new(hero: SequencerConfig) -> Self {
        Self { hero: Arc::new(hero), hero_streams: Arc::new(AtomicUsize::new(0)) }
    }

    /// Number of hero websocket streams currently open.
    #[must_use]
    pub fn hero_streams(&self) -> usize {
        self.hero_streams.load(Ordering::Relaxed)
    }

    /// Register an open stream; the count drops when the guard does.
    #[must_use]
    pub fn track_hero_stream(&self) -> StreamGuard {
        self.hero_streams.fetch_add(1, Ordering::Relaxed);
        StreamGuard { counter: Arc::clone(&self.hero_streams) }
    }
}

pub struct StreamGuard {
    counter: Arc<AtomicUsize>,
}

impl Drop for StreamGuard {
    fn drop(&mut self) {
        self.counter.fetch_sub(1, Ordering::Relaxed);
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
