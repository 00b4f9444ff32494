//! Main render/view function (View in TEA pattern)

use ratatui::Frame;

use gelato_app::{AppState, MenuPhase};

use super::{layout, widgets};

/// Render the complete UI (View function in TEA)
///
/// Pure with respect to state: reads the model, never mutates it. The
/// loading overlay draws last so it sits on top of the body.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let areas = layout::create(area);

    frame.render_widget(widgets::Header::new(), areas.header);

    match state.phase {
        MenuPhase::Populated if !state.flavors.is_empty() => {
            let panes = layout::split_body(areas.body);
            frame.render_widget(widgets::FlavorGrid::new(state), panes.menu);
            frame.render_widget(widgets::DetailPane::new(state.detail.as_ref()), panes.detail);
        }
        // Idle, Loading, Failed, and an empty menu use the full width
        _ => {
            frame.render_widget(widgets::FlavorGrid::new(state), areas.body);
        }
    }

    frame.render_widget(widgets::StatusBar::new(state), areas.status);

    if state.is_loading() {
        frame.render_widget(widgets::LoadingOverlay::new(state), area);
    }
}
