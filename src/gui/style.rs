//
// style.rs
// Copyright (C) 2022 gmg137 <gmg137 AT live.com>
// Distributed under terms of the GPL-3.0-or-later license.
//
use crate::model::DEFAULT_BG_COLOR;
use gtk::{gdk, CssProvider};

pub const TOAST_WIDTH: i32 = 400;
pub const ICON_SIZE: i32 = 100;

/// Falls back to the default grey when `color` is not a valid CSS color.
pub fn resolve_bg_color(color: &str) -> String {
    match gdk::RGBA::parse(color) {
        Ok(rgba) => rgba.to_str().to_string(),
        Err(err) => {
            log::warn!("Background color {color:?} is invalid, using {DEFAULT_BG_COLOR}: {err}");
            DEFAULT_BG_COLOR.to_owned()
        }
    }
}

pub fn stylesheet(bg_color: &str) -> String {
    let radius = ICON_SIZE / 2;
    format!(
        "window.toast {{ background: transparent; }}
.toast-box {{ background-color: {bg_color}; padding: 5px; }}
.toast-title {{ font-family: Cochin; font-size: 20px; }}
.toast-message {{ font-family: Didot; font-size: 15px; }}
.toast-app-name {{ font-family: Dialog; font-size: 10px; }}
.toast-icon.circle {{ border-radius: {radius}px; }}
"
    )
}

pub fn load_css(bg_color: &str) {
    let Some(display) = gdk::Display::default() else {
        log::warn!("No display, toast styles not loaded");
        return;
    };

    let provider = CssProvider::new();
    provider.load_from_data(&stylesheet(&resolve_bg_color(bg_color)));

    gtk::style_context_add_provider_for_display(
        &display,
        &provider,
        gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stylesheet_carries_background_and_radius() {
        let css = stylesheet("rgb(12,34,56)");
        assert!(css.contains(".toast-box { background-color: rgb(12,34,56); padding: 5px; }"));
        assert!(css.contains(".toast-icon.circle { border-radius: 50px; }"));
        assert!(css.contains("window.toast { background: transparent; }"));
    }

    #[test]
    fn stylesheet_fonts() {
        let css = stylesheet("#808080");
        assert!(css.contains("font-family: Cochin; font-size: 20px;"));
        assert!(css.contains("font-family: Didot; font-size: 15px;"));
        assert!(css.contains("font-family: Dialog; font-size: 10px;"));
    }
}
