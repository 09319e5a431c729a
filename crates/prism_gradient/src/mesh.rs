//! Mesh-gradient grid: configuration and colored nodes
//!
//! Nodes are stored in insertion order. Callers supply ids; the store does
//! not check them for uniqueness, and every lookup acts on the first match.

use crate::state::GradientState;
use serde::{Deserialize, Serialize};

pub type MeshNodeId = u32;

pub const DEFAULT_MESH_ROWS: u32 = 6;
pub const DEFAULT_MESH_COLUMNS: u32 = 4;

/// One vertex of the mesh grid
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MeshNode {
    pub id: MeshNodeId,
    pub row: u32,
    pub col: u32,
    pub x: f32,
    pub y: f32,
    pub color: String,
    /// `Some(true)` once the user dragged the node away from its grid slot
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manually_moved: Option<bool>,
}

impl MeshNode {
    pub fn new(id: MeshNodeId, row: u32, col: u32, color: impl Into<String>) -> Self {
        Self {
            id,
            row,
            col,
            x: 0.0,
            y: 0.0,
            color: color.into(),
            manually_moved: None,
        }
    }

    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn is_manually_moved(&self) -> bool {
        self.manually_moved == Some(true)
    }
}

/// Partial update for a [`MeshNode`]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshNodeUpdate {
    pub id: Option<MeshNodeId>,
    pub row: Option<u32>,
    pub col: Option<u32>,
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub color: Option<String>,
    pub manually_moved: Option<bool>,
}

impl MeshNodeUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: MeshNodeId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn cell(mut self, row: u32, col: u32) -> Self {
        self.row = Some(row);
        self.col = Some(col);
        self
    }

    pub fn position(mut self, x: f32, y: f32) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn manually_moved(mut self, moved: bool) -> Self {
        self.manually_moved = Some(moved);
        self
    }

    fn apply(&self, node: &mut MeshNode) {
        if let Some(id) = self.id {
            node.id = id;
        }
        if let Some(row) = self.row {
            node.row = row;
        }
        if let Some(col) = self.col {
            node.col = col;
        }
        if let Some(x) = self.x {
            node.x = x;
        }
        if let Some(y) = self.y {
            node.y = y;
        }
        if let Some(color) = &self.color {
            node.color = color.clone();
        }
        if let Some(moved) = self.manually_moved {
            node.manually_moved = Some(moved);
        }
    }
}

/// Grid dimensions, visibility and the selection pointer
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MeshConfig {
    pub rows: u32,
    pub columns: u32,
    pub visible: bool,
    /// Not validated against the node list
    pub selected_node_id: Option<MeshNodeId>,
}

impl Default for MeshConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_MESH_ROWS,
            columns: DEFAULT_MESH_COLUMNS,
            visible: true,
            selected_node_id: None,
        }
    }
}

/// Normalized coordinate of slot `index` on an axis with `count` slots
fn grid_coordinate(index: u32, count: u32) -> f32 {
    if count <= 1 {
        0.0
    } else {
        index as f32 / (count - 1) as f32
    }
}

impl GradientState {
    pub fn set_mesh_rows(&mut self, rows: u32) {
        self.mesh.rows = rows;
    }

    pub fn set_mesh_columns(&mut self, columns: u32) {
        self.mesh.columns = columns;
    }

    /// Flip mesh visibility; returns the new value
    pub fn toggle_mesh_visibility(&mut self) -> bool {
        self.mesh.visible = !self.mesh.visible;
        self.mesh.visible
    }

    pub fn select_node(&mut self, id: Option<MeshNodeId>) {
        self.mesh.selected_node_id = id;
    }

    /// Append a node as given
    pub fn add_mesh_node(&mut self, node: MeshNode) {
        self.mesh_nodes.push(node);
    }

    /// Merge `update` into the first node with `id`
    pub fn update_mesh_node(&mut self, id: MeshNodeId, update: &MeshNodeUpdate) -> bool {
        match self.mesh_nodes.iter_mut().find(|node| node.id == id) {
            Some(node) => {
                update.apply(node);
                true
            }
            None => {
                tracing::debug!("update_mesh_node({}): no such node", id);
                false
            }
        }
    }

    /// Remove the first node with `id`
    pub fn remove_mesh_node(&mut self, id: MeshNodeId) -> bool {
        match self.mesh_nodes.iter().position(|node| node.id == id) {
            Some(index) => {
                self.mesh_nodes.remove(index);
                true
            }
            None => {
                tracing::debug!("remove_mesh_node({}): no such node", id);
                false
            }
        }
    }

    pub fn clear_mesh_nodes(&mut self) {
        self.mesh_nodes.clear();
    }

    /// Snap every node not moved by hand to its normalized grid slot
    ///
    /// Returns how many nodes were repositioned.
    pub fn auto_layout_mesh(&mut self) -> usize {
        let (rows, columns) = (self.mesh.rows, self.mesh.columns);
        let mut moved = 0;
        for node in self.mesh_nodes.iter_mut().filter(|n| !n.is_manually_moved()) {
            let x = grid_coordinate(node.col, columns);
            let y = grid_coordinate(node.row, rows);
            if node.x.to_bits() != x.to_bits() || node.y.to_bits() != y.to_bits() {
                node.x = x;
                node.y = y;
                moved += 1;
            }
        }
        moved
    }

    pub fn mesh_node(&self, id: MeshNodeId) -> Option<&MeshNode> {
        self.mesh_nodes.iter().find(|node| node.id == id)
    }

    /// The selected node, if the selection points at an existing node
    pub fn selected_node(&self) -> Option<&MeshNode> {
        self.mesh.selected_node_id.and_then(|id| self.mesh_node(id))
    }
}
