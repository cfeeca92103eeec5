//! Search entry points: single match, exhaustive multi-match and the
//! deadline-bounded wait helpers built on them.

use std::time::{Duration, Instant};

use crate::capture::{CapturedImage, ScreenCapture};
use crate::diagnostics::{Diagnostics, LogDiagnostics};
use crate::pattern::{MatchMode, Pattern};
use crate::settings::Settings;

use super::engine::{self, ScoreSurface};
use super::geometry::{Point, Rectangle};

/// Pattern search over a screen capture backend.
///
/// Every entry point returns a value-level result (sentinel [`Point`],
/// possibly-empty `Vec`, `Option`) for all expected runtime conditions:
/// absence, timeout and capture hiccups never surface as errors.
pub struct ImageSearch<C: ScreenCapture> {
    capture: C,
    diagnostics: Box<dyn Diagnostics>,
    settings: Settings,
}

impl<C: ScreenCapture> ImageSearch<C> {
    pub fn new(capture: C) -> Self {
        Self::with_diagnostics(capture, Settings::default(), Box::new(LogDiagnostics))
    }

    pub fn with_diagnostics(
        capture: C,
        settings: Settings,
        diagnostics: Box<dyn Diagnostics>,
    ) -> Self {
        Self {
            capture,
            diagnostics,
            settings,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn backend(&self) -> &C {
        &self.capture
    }

    /// Pre-flight check that the pattern can fit the search area at all.
    ///
    /// Returns false when either pattern dimension exceeds the region's (or
    /// the full screen's when no region is given), warning which dimension
    /// failed. Callers treat false as an immediate "not found" and skip the
    /// engine entirely.
    pub fn pattern_fits(&self, pattern: &Pattern, region: Option<&Rectangle>) -> bool {
        let (area_width, area_height) = match region {
            Some(region) => region.size(),
            None => self.capture.screen_size(),
        };
        let (pattern_width, pattern_height) = pattern.size();

        let mut fits = true;
        if pattern_width > area_width {
            self.diagnostics.warn(&format!(
                "pattern '{}' width ({pattern_width}) exceeds search area width ({area_width})",
                pattern.name()
            ));
            fits = false;
        }
        if pattern_height > area_height {
            self.diagnostics.warn(&format!(
                "pattern '{}' height ({pattern_height}) exceeds search area height ({area_height})",
                pattern.name()
            ));
            fits = false;
        }
        fits
    }

    /// Find the single best placement of `pattern`, capturing the region (or
    /// the whole screen) fresh.
    ///
    /// Returns [`Point::NOT_FOUND`] when the best score falls below the
    /// pattern's similarity threshold or when capture fails; a capture
    /// failure is logged and masked so polling callers keep retrying. A
    /// found point is screen-absolute and lies inside `region` when one was
    /// given.
    pub fn match_template(&self, pattern: &Pattern, region: Option<&Rectangle>) -> Point {
        self.diagnostics
            .debug(&format!("searching for pattern '{}'", pattern.name()));

        let stack = match self.capture.capture(region) {
            Ok(stack) => stack,
            Err(err) => {
                self.diagnostics.warn(&format!("screen capture failed: {err}"));
                return Point::NOT_FOUND;
            }
        };

        let surface = correlate(pattern, &stack);
        let (score, (x, y)) = surface.global_max();
        if score < pattern.similarity() {
            return Point::NOT_FOUND;
        }

        match region {
            Some(region) => Point::new((x + region.x) as i32, (y + region.y) as i32),
            None => Point::new(x as i32, y as i32),
        }
    }

    /// Extract every distinct placement scoring strictly between `threshold`
    /// and the pattern's own similarity threshold, in discovery order (best
    /// first).
    ///
    /// Capture happens once; each recorded match floors a pattern-sized
    /// window on the score surface so the next global maximum cannot land on
    /// or immediately beside it. Two intentional quirks: locations are
    /// relative to the searched region (not screen-absolute), and a
    /// placement scoring at or above the similarity threshold ends
    /// extraction without being reported. Capture failure yields an empty
    /// sequence.
    pub fn match_template_multiple(
        &self,
        pattern: &Pattern,
        region: Option<&Rectangle>,
        threshold: f32,
    ) -> Vec<Point> {
        self.diagnostics
            .debug(&format!("searching for all of pattern '{}'", pattern.name()));

        let stack = match self.capture.capture(region) {
            Ok(stack) => stack,
            Err(err) => {
                self.diagnostics.warn(&format!("screen capture failed: {err}"));
                return Vec::new();
            }
        };

        let mut surface = correlate(pattern, &stack);
        let mut matches = Vec::new();
        loop {
            let (score, location) = surface.global_max();
            if !(threshold < score && score < pattern.similarity()) {
                break;
            }
            matches.push(Point::new(location.0 as i32, location.1 as i32));
            surface.suppress_around(location);
        }
        matches
    }

    /// Poll for `pattern` until it appears or the timeout elapses.
    ///
    /// A `None` timeout uses [`Settings::auto_wait_timeout`]. Returns `None`
    /// both when the pattern cannot fit the search area and on timeout; the
    /// first successful match wins immediately. Each iteration captures a
    /// fresh frame; its capture-plus-match latency paces the loop.
    pub fn image_find(
        &self,
        pattern: &Pattern,
        timeout: Option<Duration>,
        region: Option<&Rectangle>,
    ) -> Option<Point> {
        if !self.pattern_fits(pattern, region) {
            return None;
        }

        let timeout = timeout.unwrap_or(self.settings.auto_wait_timeout);
        let deadline = Instant::now() + timeout;

        while Instant::now() < deadline {
            self.diagnostics.debug(&format!(
                "searching for '{}', {:?} remaining",
                pattern.name(),
                deadline.saturating_duration_since(Instant::now())
            ));
            let position = self.match_template(pattern, region);
            if position.is_found() {
                return Some(position);
            }
        }
        None
    }

    /// Poll until `pattern` is no longer visible.
    ///
    /// Returns `Some(true)` once an absence is observed, `Some(false)` when
    /// the deadline passes with the pattern still present, and `None` when
    /// the pattern cannot fit the search area. The `None` case marks the
    /// query as inapplicable, which is distinct from the `Some(false)`
    /// negative answer.
    pub fn image_vanish(
        &self,
        pattern: &Pattern,
        timeout: Option<Duration>,
        region: Option<&Rectangle>,
    ) -> Option<bool> {
        if !self.pattern_fits(pattern, region) {
            return None;
        }

        let timeout = timeout.unwrap_or(self.settings.auto_wait_timeout);
        let deadline = Instant::now() + timeout;

        let mut present = true;
        while present && Instant::now() < deadline {
            present = self.match_template(pattern, region).is_found();
        }
        Some(!present)
    }
}

fn correlate(pattern: &Pattern, stack: &CapturedImage) -> ScoreSurface {
    match pattern.mode() {
        MatchMode::Color => engine::correlate_color(stack.color(), pattern.color()),
        MatchMode::Grayscale => engine::correlate_gray(&stack.gray(), pattern.gray()),
    }
}
