//
// fade.rs
// Copyright (C) 2022 gmg137 <gmg137 AT live.com>
// Distributed under terms of the GPL-3.0-or-later license.
//
use adw::prelude::*;
use glib::clone;
use gtk::glib;

// milliseconds
pub const FADE_DURATION: u32 = 1500;

/// Opacity animation of `widget` from `from` to `to`. Nothing runs until `play()`.
pub fn fade(widget: &gtk::Widget, from: f64, to: f64) -> adw::TimedAnimation {
    let target = adw::CallbackAnimationTarget::new(clone!(@weak widget => move |opacity| {
        widget.set_opacity(opacity);
    }));

    let animation = adw::TimedAnimation::new(widget, from, to, FADE_DURATION, target);
    animation.set_easing(adw::Easing::EaseInOutCubic);
    animation
}
