use crate::config::LayerMode;
use gtk::prelude::*;
use gtk4 as gtk;
use gtk4_layer_shell::{Edge, KeyboardMode, Layer, LayerShell};

fn shell_layer(mode: LayerMode) -> Option<Layer> {
    match mode {
        LayerMode::Window => None,
        LayerMode::Background => Some(Layer::Background),
        LayerMode::Bottom => Some(Layer::Bottom),
        LayerMode::Overlay => Some(Layer::Overlay),
    }
}

/// Turns the window into a full-output layer surface unless it should stay a plain toplevel.
/// Falls back to a toplevel when the compositor lacks layer-shell support.
pub fn init_layer_shell(window: &gtk::ApplicationWindow, mode: LayerMode) {
    let Some(layer) = shell_layer(mode) else {
        return;
    };
    if !gtk4_layer_shell::is_supported() {
        log::warn!("Layer shell unsupported, opening a regular window instead of {mode}");
        return;
    }

    window.init_layer_shell();
    window.set_layer(layer);
    window.set_namespace(Some("gnostic-circle"));
    window.set_exclusive_zone(-1);
    for edge in [Edge::Left, Edge::Right, Edge::Top, Edge::Bottom] {
        window.set_anchor(edge, true);
    }
    // only the overlay can take keys, so Escape still closes it
    window.set_keyboard_mode(match mode {
        LayerMode::Overlay => KeyboardMode::OnDemand,
        _ => KeyboardMode::None,
    });
    window.set_decorated(false);
}
