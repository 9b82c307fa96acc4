//! Top-level rendering coordinator.
//!
//! Rendering is two steps: `AppState::compute_viewmodel` turns state into a
//! [`UIViewModel`](crate::ui::viewmodel::UIViewModel), then the components
//! print it as ANSI-styled text.

use crate::app::AppState;
use crate::ui::components;

/// Renders the plugin pane to stdout.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let _span = tracing::trace_span!("render", rows, cols).entered();

    let viewmodel = state.compute_viewmodel(rows, cols);
    components::render_layout(&viewmodel, &state.theme, cols, rows);
}
