//
// placement.rs
// Copyright (C) 2022 gmg137 <gmg137 AT live.com>
// Distributed under terms of the GPL-3.0-or-later license.
//
use crate::{
    gui::style::TOAST_WIDTH,
    model::{Position, ScreenBounds},
};
use gtk::{gdk, prelude::*};

/// Who ends up deciding where the toast is shown.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Backend {
    // anchored through the Wayland layer-shell protocol
    LayerShell,
    // GTK 4 cannot move toplevels, the compositor picks the spot
    Compositor,
}

impl Backend {
    /// `display_type` is the GType name of the GDK display, e.g. `GdkWaylandDisplay`.
    pub fn detect(display_type: &str) -> Self {
        if cfg!(feature = "layer-shell") && display_type == "GdkWaylandDisplay" {
            Backend::LayerShell
        } else {
            Backend::Compositor
        }
    }
}

/// GDK has no notion of a primary monitor, the first one listed stands in for it.
pub fn primary_monitor() -> Option<gdk::Monitor> {
    let display = gdk::Display::default()?;
    display.monitors().item(0)?.downcast::<gdk::Monitor>().ok()
}

/// Moves `window` to the corner named by `position`.
pub fn place(window: &gtk::Window, position: Position) {
    let Some(monitor) = primary_monitor() else {
        log::warn!("No monitor found, the compositor decides where the toast goes");
        return;
    };

    let bounds = ScreenBounds::from(&monitor.geometry());
    let origin = position.origin(bounds, TOAST_WIDTH);
    let display = monitor.display();
    let display_type = display.type_().name();

    match Backend::detect(display_type) {
        Backend::LayerShell => {
            log::debug!(
                "Placing toast at {:?} on a {}x{} screen",
                origin,
                bounds.width,
                bounds.height
            );
            anchor(window, &monitor, origin);
        }
        Backend::Compositor => log::warn!(
            "{display_type} cannot place the toast at {origin:?} or keep it above, the compositor decides"
        ),
    }
}

#[cfg(feature = "layer-shell")]
fn anchor(window: &gtk::Window, monitor: &gdk::Monitor, (x, y): (i32, i32)) {
    use gtk4_layer_shell::{Edge, KeyboardMode, Layer, LayerShell};

    window.init_layer_shell();
    window.set_namespace("toast");
    window.set_layer(Layer::Overlay);
    window.set_monitor(monitor);
    window.set_keyboard_mode(KeyboardMode::None);
    window.set_anchor(Edge::Left, true);
    window.set_anchor(Edge::Top, true);
    window.set_margin(Edge::Left, x);
    window.set_margin(Edge::Top, y);
}

#[cfg(not(feature = "layer-shell"))]
fn anchor(_window: &gtk::Window, _monitor: &gdk::Monitor, origin: (i32, i32)) {
    log::warn!("Built without layer-shell, origin {origin:?} is left to the compositor");
}
