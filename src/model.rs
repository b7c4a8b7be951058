//
// model.rs
// Copyright (C) 2022 gmg137 <gmg137 AT live.com>
// Distributed under terms of the GPL-3.0-or-later license.
//
use gtk::glib;
use std::time::Duration;

/// Distance kept between the toast and the screen edges.
pub const SHIFT: i32 = 10;
/// Bottom placements anchor this far above the lower screen edge.
pub const BOTTOM_OFFSET: i32 = 200;

pub const DEFAULT_IMAGE: &str =
    "https://avatars.mds.yandex.net/i?id=ee0a8cd0c69a411b7fee131fde2b4980-3732926-images-thumbs&n=13";
pub const DEFAULT_SOUND: &str = "https://clck.ru/32ReV2";
pub const DEFAULT_BG_COLOR: &str = "#808080";

#[derive(Debug, Clone, Copy, Eq, PartialEq, glib::Enum, clap::ValueEnum)]
#[repr(i32)]
#[enum_type(name = "ToastPosition")]
pub enum Position {
    RightBottom,
    RightTop,
    LeftBottom,
    LeftTop,
}

impl Default for Position {
    fn default() -> Self {
        Position::RightBottom
    }
}

impl Position {
    /// Top-left corner of a window `width` pixels wide placed on a screen of `bounds`.
    pub fn origin(self, bounds: ScreenBounds, width: i32) -> (i32, i32) {
        let right = bounds.width - width - SHIFT;
        let bottom = bounds.height - BOTTOM_OFFSET;
        match self {
            Position::LeftBottom => (SHIFT, bottom),
            Position::LeftTop => (SHIFT, SHIFT),
            Position::RightBottom => (right, bottom),
            Position::RightTop => (right, SHIFT),
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, glib::Enum, clap::ValueEnum)]
#[repr(i32)]
#[enum_type(name = "ToastImageStyle")]
pub enum ImageStyle {
    Circle,
    Rectangle,
}

impl Default for ImageStyle {
    fn default() -> Self {
        ImageStyle::Rectangle
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, glib::Enum)]
#[repr(i32)]
#[enum_type(name = "ToastCloseReason")]
pub enum CloseReason {
    // open time ran out
    Timeout,
    // close button or dismiss()
    Dismissed,
}

impl Default for CloseReason {
    fn default() -> Self {
        CloseReason::Timeout
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct ScreenBounds {
    pub width: i32,
    pub height: i32,
}

impl From<&gtk::gdk::Rectangle> for ScreenBounds {
    fn from(rect: &gtk::gdk::Rectangle) -> Self {
        Self {
            width: rect.width(),
            height: rect.height(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToastConfig {
    pub alpha: f64,
    pub open_time: Duration,
    pub image_style: ImageStyle,
    pub title: String,
    pub message: String,
    pub app_name: String,
    pub image: String,
    pub position: Position,
    pub sound: Option<String>,
    pub bg_color: String,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            alpha: 0.9,
            open_time: Duration::from_millis(17000),
            image_style: ImageStyle::default(),
            title: "TITLE".to_owned(),
            message: "MESSAGE".to_owned(),
            app_name: "APP NAME".to_owned(),
            image: DEFAULT_IMAGE.to_owned(),
            position: Position::default(),
            sound: Some(DEFAULT_SOUND.to_owned()),
            bg_color: DEFAULT_BG_COLOR.to_owned(),
        }
    }
}
