//! Shared, read-only application state.

use std::sync::Arc;

use luach_calendar::{CalendarError, GregorianDate};
use luach_catalog::Catalog;
use luach_parasha::{Rite, Scheduler};

/// Source of "today" for requests without a `date` parameter.
pub type Clock = fn() -> Result<GregorianDate, CalendarError>;

/// Immutable state shared by every handler.
///
/// Built once before the server starts; never mutated afterwards.
#[derive(Debug, Clone)]
pub struct AppState {
    pub catalog: Catalog,
    pub scheduler: Scheduler,
    pub clock: Clock,
}

impl AppState {
    /// Creates state that reads the local system date.
    pub fn new(catalog: Catalog, rite: Rite) -> Self {
        Self {
            catalog,
            scheduler: Scheduler::new(rite),
            clock: GregorianDate::today,
        }
    }

    /// Replaces the clock, e.g. with a fixed date in tests.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Wraps the state for sharing across handlers.
    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}
