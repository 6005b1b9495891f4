//! Bookkeeping for the progressive loading loop.
//!
//! Results pages lazy-load entries as the viewport approaches them, so the
//! extractor scrolls in fixed increments until the scrolled distance reaches
//! the document's current height. The height is re-read after every step
//! because it grows while results load. This type holds the counters; the
//! browser calls live in `search.rs`.

/// What the loop should do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollStep {
    /// Scroll by one increment, then re-read the height.
    Scroll,
    /// Scrolled distance has reached the document height.
    Settled,
    /// Step budget spent while the document kept growing.
    Exhausted,
}

#[derive(Debug, Clone)]
pub struct ScrollProgress {
    step_px: u64,
    max_steps: u32,
    scrolled_px: u64,
    steps: u32,
}

impl ScrollProgress {
    #[must_use]
    pub fn new(step_px: u32, max_steps: u32) -> Self {
        Self {
            step_px: u64::from(step_px),
            max_steps,
            scrolled_px: 0,
            steps: 0,
        }
    }

    /// Decide the next action given the latest document height, counting
    /// the scroll if one is due.
    pub fn next(&mut self, scroll_height: u64) -> ScrollStep {
        if self.scrolled_px >= scroll_height {
            return ScrollStep::Settled;
        }
        if self.steps >= self.max_steps {
            return ScrollStep::Exhausted;
        }
        self.steps += 1;
        self.scrolled_px += self.step_px;
        ScrollStep::Scroll
    }

    #[must_use]
    pub fn steps(&self) -> u32 {
        self.steps
    }

    #[must_use]
    pub fn scrolled_px(&self) -> u64 {
        self.scrolled_px
    }
}
