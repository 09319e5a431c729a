//! Editor Session Demo
//!
//! Drives both stores the way the editor UI would and logs every change.
//!
//! Run with: RUST_LOG=debug cargo run -p prism_studio --example session_demo [path/to/prism.toml]

use prism_animation::{Easing, Pattern};
use prism_core::Result;
use prism_gradient::{ColorStopUpdate, MeshNode, MeshNodeUpdate};
use prism_studio::{StudioConfig, StudioContext};
use std::path::Path;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => StudioConfig::load(Path::new(&path))?,
        None => StudioConfig::default(),
    };
    let ctx = StudioContext::new(config);

    let animation = ctx.animation();
    let _anim_sub = animation.subscribe(|state| {
        tracing::info!(
            "animation: speed={} pattern={} easing={} playing={}",
            state.speed,
            state.pattern,
            state.easing,
            state.is_playing
        );
    });

    let gradient = ctx.gradient();
    let _grad_sub = gradient.subscribe(|state| {
        let stops: Vec<String> = state
            .color_stops
            .iter()
            .map(|s| format!("{}@{:.2}", s.color, s.position))
            .collect();
        tracing::info!(
            "gradient: [{}] mesh {}x{} with {} node(s)",
            stops.join(", "),
            state.mesh.rows,
            state.mesh.columns,
            state.mesh_nodes.len()
        );
    });

    animation.update_speed(0.02);
    animation.update_pattern(Pattern::Cosine);
    animation.update_easing(Easing::EaseInOut);
    animation.toggle_playback();

    let green = gradient.add_color_stop("#00ff00", Some(0.3));
    gradient.update_color_stop(green, ColorStopUpdate::new().position(0.7));
    // The second removal is refused, two stops is the floor
    gradient.remove_color_stop(1);
    gradient.remove_color_stop(2);

    gradient.batch(|g| {
        let config = g.mesh_config();
        for row in 0..config.rows {
            for col in 0..config.columns {
                g.add_mesh_node(MeshNode::new(row * config.columns + col, row, col, "#ffffff"));
            }
        }
        g.auto_layout_mesh();
    });
    gradient.select_node(Some(5));
    gradient.update_mesh_node(5, MeshNodeUpdate::new().position(0.4, 0.25).manually_moved(true));
    gradient.auto_layout_mesh();

    if let Some(node) = gradient.selected_node() {
        tracing::info!("selected node {} at ({}, {})", node.id, node.x, node.y);
    }

    gradient.clear_mesh_nodes();
    Ok(())
}
