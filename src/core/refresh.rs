//! Latest-wins coordination for background title refreshes.
//!
//! Every refresh takes a [`RefreshTicket`] from the shared [`RefreshGate`].
//! A ticket may only apply its result while it is the most recently issued
//! one, so a slow refresh finishing after a newer one never overwrites the
//! newer result.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

#[derive(Debug, Clone, Default)]
pub struct RefreshGate {
    latest: Arc<AtomicU64>,
    apply_lock: Arc<Mutex<()>>,
}

impl RefreshGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a refresh, superseding all earlier tickets
    pub fn begin(&self) -> RefreshTicket {
        let generation = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        log::debug!("Title refresh generation {generation} started");
        RefreshTicket {
            generation,
            gate: self.clone(),
        }
    }

    pub fn latest_generation(&self) -> u64 {
        self.latest.load(Ordering::SeqCst)
    }
}

#[derive(Debug)]
pub struct RefreshTicket {
    generation: u64,
    gate: RefreshGate,
}

impl RefreshTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_current(&self) -> bool {
        self.gate.latest_generation() == self.generation
    }

    /// Run `apply` if this ticket is still the latest. Returns whether it ran.
    pub fn apply<F: FnOnce()>(&self, apply: F) -> bool {
        let _guard = self
            .gate
            .apply_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if !self.is_current() {
            log::debug!("Dropping stale title refresh generation {}", self.generation);
            return false;
        }
        apply();
        true
    }
}
