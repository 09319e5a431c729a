//! Observable gradient store
//!
//! Thin wrapper that runs the [`GradientState`] operations inside an
//! [`Observable`]. Operations that turn out to be no-ops (missing id, stop
//! floor reached) leave the version untouched and wake nobody.

use crate::blend::{BlendSettings, BlendSettingsUpdate};
use crate::mesh::{MeshConfig, MeshNode, MeshNodeId, MeshNodeUpdate};
use crate::state::GradientState;
use crate::stops::{ColorStop, ColorStopUpdate, StopId};
use prism_core::{Observable, SubscriptionHandle, SubscriptionId};

#[derive(Debug)]
pub struct GradientStore {
    state: Observable<GradientState>,
    initial: GradientState,
}

impl GradientStore {
    pub fn new() -> Self {
        Self::with_state(GradientState::new())
    }

    /// Create a store seeded with `initial`; `reset` returns to it
    pub fn with_state(initial: GradientState) -> Self {
        Self {
            state: Observable::new(initial.clone()),
            initial,
        }
    }

    // =========================================================================
    // READS
    // =========================================================================

    pub fn state(&self) -> GradientState {
        self.state.get()
    }

    pub fn color_stops(&self) -> Vec<ColorStop> {
        self.state.with(|s| s.color_stops.clone())
    }

    pub fn color_stop(&self, id: StopId) -> Option<ColorStop> {
        self.state.with(|s| s.color_stop(id).cloned())
    }

    pub fn blend_settings(&self) -> BlendSettings {
        self.state.with(|s| s.blend.clone())
    }

    pub fn mesh_config(&self) -> MeshConfig {
        self.state.with(|s| s.mesh.clone())
    }

    pub fn mesh_nodes(&self) -> Vec<MeshNode> {
        self.state.with(|s| s.mesh_nodes.clone())
    }

    pub fn mesh_node(&self, id: MeshNodeId) -> Option<MeshNode> {
        self.state.with(|s| s.mesh_node(id).cloned())
    }

    pub fn selected_node(&self) -> Option<MeshNode> {
        self.state.with(|s| s.selected_node().cloned())
    }

    // =========================================================================
    // COLOR STOPS
    // =========================================================================

    pub fn add_color_stop(&self, color: impl Into<String>, position: Option<f32>) -> StopId {
        self.state.update_with(|s| s.add_color_stop(color, position))
    }

    pub fn remove_color_stop(&self, id: StopId) -> bool {
        self.state.update_if(|s| s.remove_color_stop(id))
    }

    pub fn update_color_stop(&self, id: StopId, update: ColorStopUpdate) -> bool {
        self.state.update_if(|s| s.update_color_stop(id, &update))
    }

    // =========================================================================
    // BLEND
    // =========================================================================

    pub fn update_blend_settings(&self, update: BlendSettingsUpdate) {
        self.state.update(|s| s.update_blend_settings(&update));
    }

    // =========================================================================
    // MESH
    // =========================================================================

    pub fn set_mesh_rows(&self, rows: u32) {
        self.state.update(|s| s.set_mesh_rows(rows));
    }

    pub fn set_mesh_columns(&self, columns: u32) {
        self.state.update(|s| s.set_mesh_columns(columns));
    }

    pub fn toggle_mesh_visibility(&self) -> bool {
        self.state.update_with(|s| s.toggle_mesh_visibility())
    }

    pub fn select_node(&self, id: Option<MeshNodeId>) {
        self.state.update(|s| s.select_node(id));
    }

    pub fn add_mesh_node(&self, node: MeshNode) {
        self.state.update(|s| s.add_mesh_node(node));
    }

    pub fn update_mesh_node(&self, id: MeshNodeId, update: MeshNodeUpdate) -> bool {
        self.state.update_if(|s| s.update_mesh_node(id, &update))
    }

    pub fn remove_mesh_node(&self, id: MeshNodeId) -> bool {
        self.state.update_if(|s| s.remove_mesh_node(id))
    }

    pub fn clear_mesh_nodes(&self) {
        self.state.update(|s| s.clear_mesh_nodes());
    }

    /// Snap auto-placed nodes onto the grid; returns how many moved
    pub fn auto_layout_mesh(&self) -> usize {
        let mut moved = 0;
        self.state.update_if(|s| {
            moved = s.auto_layout_mesh();
            moved > 0
        });
        moved
    }

    /// Restore the state the store was created with
    pub fn reset(&self) {
        self.state.set(self.initial.clone());
    }

    // =========================================================================
    // OBSERVATION
    // =========================================================================

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionHandle
    where
        F: Fn(&GradientState) + Send + Sync + 'static,
    {
        self.state.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.state.unsubscribe(id)
    }

    /// Apply several operations with a single notification
    pub fn batch<R>(&self, f: impl FnOnce(&Self) -> R) -> R {
        self.state.batch(|_| f(self))
    }

    pub fn version(&self) -> u64 {
        self.state.version()
    }
}

impl Default for GradientStore {
    fn default() -> Self {
        Self::new()
    }
}
