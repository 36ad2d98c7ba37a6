//! Synchronous controller connecting UI control state, the filter pass and
//! the visualization adapter.
//!
//! This module keeps event orchestration out of the filter and search code,
//! so those remain independently testable pure functions. Every entry point
//! runs to completion on the calling thread; the dataset is read-only and
//! the working set is rebuilt whole, so there is nothing to observe
//! mid-update.

use tracing::{debug, info};

use crate::construct::Dataset;
use crate::filter::{FilterControls, FilterMode, FilterTarget, WorkingSet};

/// Operations the visualization layer exposes to this controller. What the
/// renderer does inside them (graph construction, physical layout) is its
/// own concern.
pub trait Renderer {
    fn reset_data(&mut self);
    fn create_graph(&mut self);
    fn set_layout(&mut self);
    fn toggle_view_mode(&mut self);
    fn change_layout_mode(&mut self, mode_index: usize);
}

/// A renderer that only writes to the log. Stands in for a real
/// visualization in headless runs.
#[derive(Debug, Default)]
pub struct LogRenderer;
impl Renderer for LogRenderer {
    fn reset_data(&mut self) {
        debug!("renderer: reset data");
    }
    fn create_graph(&mut self) {
        debug!("renderer: create graph");
    }
    fn set_layout(&mut self) {
        debug!("renderer: set layout");
    }
    fn toggle_view_mode(&mut self) {
        debug!("renderer: toggle view mode");
    }
    fn change_layout_mode(&mut self, mode_index: usize) {
        debug!(mode_index, "renderer: change layout mode");
    }
}

/// Owns the reference dataset, the current control state and the working
/// set derived from them, plus the renderer that consumes the result.
pub struct Controller<R: Renderer> {
    dataset: Dataset,
    controls: FilterControls,
    working: WorkingSet,
    renderer: R,
}

impl<R: Renderer> Controller<R> {
    /// The initial working set is derived from the given controls without
    /// touching the renderer; renderer calls happen on events only.
    pub fn new(dataset: Dataset, controls: FilterControls, renderer: R) -> Self {
        let working = WorkingSet::recompute(&dataset, &controls);
        Self {
            dataset,
            controls,
            working,
            renderer,
        }
    }
    /// Keystroke handler: replace the filter text and recompute.
    pub fn set_filter_text(&mut self, text: &str) {
        self.controls.text = text.to_owned();
        self.refilter();
    }
    /// Include/exclude toggle handler.
    pub fn set_filter_mode(&mut self, mode: FilterMode) {
        self.controls.mode = mode;
        self.refilter();
    }
    /// View-mode toggle handler. The renderer flips its view first, then
    /// the working set is recomputed against the new target.
    pub fn set_target(&mut self, target: FilterTarget) {
        self.renderer.toggle_view_mode();
        self.controls.target = target;
        self.refilter();
    }
    /// Arrangement selector handler. Only concerns the renderer's layout;
    /// the working set stays as it is.
    pub fn set_arrangement(&mut self, mode_index: usize) {
        self.renderer.change_layout_mode(mode_index);
    }
    /// Recompute the working set from the current controls and hand it to
    /// the renderer as a full reset-and-rebuild.
    pub fn refilter(&mut self) {
        self.working = WorkingSet::recompute(&self.dataset, &self.controls);
        self.renderer.reset_data();
        self.renderer.create_graph();
        self.renderer.set_layout();
        info!(
            people = self.working.people().len(),
            shows = self.working.shows().len(),
            "filter applied"
        );
    }
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }
    pub fn controls(&self) -> &FilterControls {
        &self.controls
    }
    pub fn working_set(&self) -> &WorkingSet {
        &self.working
    }
    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}
