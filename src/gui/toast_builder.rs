//
// toast_builder.rs
// Copyright (C) 2022 gmg137 <gmg137 AT live.com>
// Distributed under terms of the GPL-3.0-or-later license.
//
use crate::{
    gui::Toast,
    model::{ImageStyle, Position, ToastConfig},
};
use gtk::prelude::*;
use std::time::Duration;

/// Collects display parameters for a [`Toast`]. Nothing is validated, the last value set wins.
#[derive(Debug, Clone, Default)]
pub struct ToastBuilder {
    config: ToastConfig,
}

impl ToastBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.config.title = title.into();
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.config.message = message.into();
        self
    }

    pub fn app_name(mut self, app_name: impl Into<String>) -> Self {
        self.config.app_name = app_name.into();
        self
    }

    pub fn position(mut self, position: Position) -> Self {
        self.config.position = position;
        self
    }

    pub fn style(mut self, style: ImageStyle) -> Self {
        self.config.image_style = style;
        self
    }

    pub fn alpha(mut self, alpha: f64) -> Self {
        self.config.alpha = alpha;
        self
    }

    pub fn open_time(mut self, open_time: Duration) -> Self {
        self.config.open_time = open_time;
        self
    }

    /// An empty location means no icon.
    pub fn image(mut self, location: impl Into<String>) -> Self {
        self.config.image = location.into();
        self
    }

    pub fn sound(mut self, location: impl Into<String>) -> Self {
        self.config.sound = Some(location.into());
        self
    }

    pub fn mute(mut self) -> Self {
        self.config.sound = None;
        self
    }

    pub fn bg_color(mut self, color: impl Into<String>) -> Self {
        self.config.bg_color = color.into();
        self
    }

    pub fn config(&self) -> &ToastConfig {
        &self.config
    }

    /// Creates the window, lays it out, places it and starts the sound.
    pub fn build(self, application: &impl IsA<gtk::Application>) -> Toast {
        Toast::new(application, self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DEFAULT_IMAGE;

    #[test]
    fn setters_in_any_order() {
        let a = ToastBuilder::new()
            .title("Title")
            .message("AppMessage")
            .app_name("AppName")
            .position(Position::RightTop)
            .style(ImageStyle::Circle);
        let b = ToastBuilder::new()
            .style(ImageStyle::Circle)
            .position(Position::RightTop)
            .app_name("AppName")
            .message("AppMessage")
            .title("Title");

        assert_eq!(a.config(), b.config());
        assert_eq!(a.config().title, "Title");
        assert_eq!(a.config().message, "AppMessage");
        assert_eq!(a.config().app_name, "AppName");
        assert_eq!(a.config().position, Position::RightTop);
        assert_eq!(a.config().image_style, ImageStyle::Circle);
    }

    #[test]
    fn last_write_wins() {
        let builder = ToastBuilder::new()
            .title("first")
            .position(Position::LeftTop)
            .title("second")
            .style(ImageStyle::Circle)
            .position(Position::LeftBottom)
            .style(ImageStyle::Rectangle);

        assert_eq!(builder.config().title, "second");
        assert_eq!(builder.config().position, Position::LeftBottom);
        assert_eq!(builder.config().image_style, ImageStyle::Rectangle);
    }

    #[test]
    fn accepts_anything() {
        let builder = ToastBuilder::new()
            .title("")
            .message("")
            .alpha(7.5)
            .image("not a url")
            .bg_color("chartreuse-ish");

        assert_eq!(builder.config().title, "");
        assert_eq!(builder.config().message, "");
        assert_eq!(builder.config().alpha, 7.5);
        assert_eq!(builder.config().image, "not a url");
        assert_eq!(builder.config().bg_color, "chartreuse-ish");
    }

    #[test]
    fn untouched_fields_keep_defaults() {
        let builder = ToastBuilder::new().title("only the title");
        let defaults = ToastConfig::default();

        assert_eq!(builder.config().message, defaults.message);
        assert_eq!(builder.config().open_time, Duration::from_millis(17000));
        assert_eq!(builder.config().image, DEFAULT_IMAGE);
        assert_eq!(builder.config().sound, defaults.sound);
    }

    #[test]
    fn mute_then_sound() {
        let muted = ToastBuilder::new().mute();
        assert_eq!(muted.config().sound, None);

        let unmuted = muted.sound("/tmp/ding.ogg");
        assert_eq!(unmuted.config().sound.as_deref(), Some("/tmp/ding.ogg"));
    }
}
