// Copyright 2025 the Clickthrough Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Briefly revealing all hotspots after a click that missed them.
//!
//! A click inside a hotspot-bearing region that lands on no hotspot shows every
//! hotspot, then hides them again after [`REVEAL_DELAY_MS`]. A newer reveal
//! supersedes the pending hide of an older one.
//!
//! The state does not own a timer. Hosts either schedule one for the returned
//! token's deadline and report it back through [`HotspotReveal::expire`], or
//! call [`HotspotReveal::poll`] on every tick.
//!
//! ```
//! use clickthrough_hotspots::HotspotReveal;
//!
//! let mut reveal = HotspotReveal::new();
//! let first = reveal.on_region_click(false, 1_000).unwrap();
//! let second = reveal.on_region_click(false, 1_200).unwrap();
//!
//! // The first hide was superseded.
//! assert!(!reveal.expire(first));
//! assert!(reveal.is_visible());
//! assert!(reveal.expire(second));
//! assert!(!reveal.is_visible());
//! ```

/// Delay before revealed hotspots are hidden again, in milliseconds.
pub const REVEAL_DELAY_MS: u64 = 500;

/// Handle for one pending hide.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct RevealToken {
    generation: u64,
    /// Time at which the hide is due, in milliseconds.
    pub deadline: u64,
}

/// Reveal state for one preview.
#[derive(Clone, Debug)]
pub struct HotspotReveal {
    delay: u64,
    generation: u64,
    pending: Option<RevealToken>,
}

impl Default for HotspotReveal {
    fn default() -> Self {
        Self::new()
    }
}

impl HotspotReveal {
    /// Reveal state using [`REVEAL_DELAY_MS`].
    pub const fn new() -> Self {
        Self::with_delay(REVEAL_DELAY_MS)
    }

    /// Reveal state with a custom hide delay.
    pub const fn with_delay(delay_ms: u64) -> Self {
        Self {
            delay: delay_ms,
            generation: 0,
            pending: None,
        }
    }

    /// Whether hotspots are currently revealed.
    pub const fn is_visible(&self) -> bool {
        self.pending.is_some()
    }

    /// Handle a click in a hotspot-bearing region at time `now`.
    ///
    /// Clicks on a hotspot are left to the hotspot and return `None`. Otherwise
    /// hotspots are revealed and the token of the new pending hide is returned.
    pub fn on_region_click(&mut self, on_hotspot: bool, now: u64) -> Option<RevealToken> {
        if on_hotspot {
            return None;
        }
        self.generation = self.generation.wrapping_add(1);
        let token = RevealToken {
            generation: self.generation,
            deadline: now.saturating_add(self.delay),
        };
        self.pending = Some(token);
        Some(token)
    }

    /// A host timer for `token` fired. Returns `true` if hotspots were hidden.
    ///
    /// Stale tokens are ignored.
    pub fn expire(&mut self, token: RevealToken) -> bool {
        if self.pending == Some(token) {
            self.pending = None;
            true
        } else {
            tracing::trace!(generation = token.generation, "ignoring stale reveal token");
            false
        }
    }

    /// Hide hotspots if the pending deadline has passed. Returns `true` if
    /// hotspots were hidden by this call.
    pub fn poll(&mut self, now: u64) -> bool {
        match self.pending {
            Some(token) if now >= token.deadline => self.expire(token),
            _ => false,
        }
    }

    /// Drop any pending hide, for example when the preview is torn down.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
