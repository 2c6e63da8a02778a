//! Per-pass layout context: the injected text measurer, configuration and depth.

use core::fmt;

use css_text::{ApproxMeasurer, TextMeasurer};

use crate::config::LayoutConfig;

static APPROX: ApproxMeasurer = ApproxMeasurer;

/// Everything a layout call needs besides the node and its constraints.
///
/// Passed by reference through every algorithm. Descending into a child uses
/// [`LayoutContext::nested`], which only bumps the depth.
#[derive(Copy, Clone)]
pub struct LayoutContext<'measurer> {
    pub measurer: &'measurer dyn TextMeasurer,
    pub config: LayoutConfig,
    depth: usize,
}

impl<'measurer> LayoutContext<'measurer> {
    pub fn new(measurer: &'measurer dyn TextMeasurer) -> Self {
        Self {
            measurer,
            config: LayoutConfig::default(),
            depth: 0,
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: LayoutConfig) -> Self {
        self.config = config;
        self
    }

    /// Context for a child box.
    #[inline]
    #[must_use]
    pub fn nested(&self) -> Self {
        Self {
            depth: self.depth.saturating_add(1),
            ..*self
        }
    }

    #[inline]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// A call at depth zero begins a new layout pass.
    #[inline]
    pub const fn starts_pass(&self) -> bool {
        self.depth == 0
    }

    /// Past the configured depth bound.
    #[inline]
    pub const fn too_deep(&self) -> bool {
        self.depth > self.config.max_depth
    }
}

impl Default for LayoutContext<'static> {
    /// Approximate 0.6em-per-character measurement.
    fn default() -> Self {
        Self::new(&APPROX)
    }
}

impl fmt::Debug for LayoutContext<'_> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("LayoutContext")
            .field("config", &self.config)
            .field("depth", &self.depth)
            .finish_non_exhaustive()
    }
}
