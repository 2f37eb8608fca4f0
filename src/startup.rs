use std::sync::atomic::{AtomicBool, Ordering};

/// One-shot latch guarding page initialisation, so a repeated init cannot
/// register duplicate listeners or start a second animation loop.
pub struct InitGuard {
    claimed: AtomicBool,
}

impl InitGuard {
    pub const fn new() -> Self {
        Self {
            claimed: AtomicBool::new(false),
        }
    }

    /// Returns true for the first caller only.
    #[inline]
    pub fn claim(&self) -> bool {
        !self.claimed.swap(true, Ordering::SeqCst)
    }
}

/// `document.readyState` is past `"loading"`, so the canvas element exists.
#[inline]
pub fn is_document_ready(ready_state: &str) -> bool {
    ready_state != "loading"
}
