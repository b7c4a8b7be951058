//
// cli.rs
// Copyright (C) 2022 gmg137 <gmg137 AT live.com>
// Distributed under terms of the GPL-3.0-or-later license.
//
use clap::Parser;
use std::time::Duration;

use crate::{
    config::VERSION,
    gui::{Toast, ToastBuilder},
    model::{ImageStyle, Position},
};

/// Show a transient desktop notification popup
#[derive(Parser, Debug)]
#[command(name = "gtk-toast")]
#[command(version = VERSION)]
#[command(long_about = None)]
pub struct Cli {
    /// Headline of the toast
    #[arg(short, long)]
    pub title: Option<String>,

    /// Body text of the toast
    #[arg(short, long)]
    pub message: Option<String>,

    /// Name of the application the toast speaks for
    #[arg(short, long)]
    pub app_name: Option<String>,

    /// Screen corner to show the toast in
    #[arg(short, long, value_enum)]
    pub position: Option<Position>,

    /// Shape of the icon
    #[arg(short, long, value_enum)]
    pub style: Option<ImageStyle>,

    /// Opacity the toast fades in to
    #[arg(long)]
    pub alpha: Option<f64>,

    /// Time on screen before fading out
    #[arg(short = 'T', long, value_name = "MS")]
    pub open_time: Option<u32>,

    /// Icon image, URL or path. An empty value hides the icon
    #[arg(short, long, value_name = "URL")]
    pub image: Option<String>,

    /// Sound played when the toast appears, URL or path
    #[arg(long, value_name = "URL", conflicts_with = "mute")]
    pub sound: Option<String>,

    /// Do not play any sound
    #[arg(long)]
    pub mute: bool,

    /// Background color, any CSS color
    #[arg(short, long, value_name = "COLOR")]
    pub background: Option<String>,
}

impl Cli {
    pub fn into_builder(self) -> ToastBuilder {
        let mut builder = Toast::builder();
        if let Some(title) = self.title {
            builder = builder.title(title);
        }
        if let Some(message) = self.message {
            builder = builder.message(message);
        }
        if let Some(app_name) = self.app_name {
            builder = builder.app_name(app_name);
        }
        if let Some(position) = self.position {
            builder = builder.position(position);
        }
        if let Some(style) = self.style {
            builder = builder.style(style);
        }
        if let Some(alpha) = self.alpha {
            builder = builder.alpha(alpha);
        }
        if let Some(ms) = self.open_time {
            builder = builder.open_time(Duration::from_millis(u64::from(ms)));
        }
        if let Some(image) = self.image {
            builder = builder.image(image);
        }
        if let Some(sound) = self.sound {
            builder = builder.sound(sound);
        }
        if self.mute {
            builder = builder.mute();
        }
        if let Some(color) = self.background {
            builder = builder.bg_color(color);
        }
        builder
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ToastConfig;

    fn parse(args: &[&str]) -> ToastConfig {
        let cli = Cli::try_parse_from(std::iter::once("gtk-toast").chain(args.iter().copied()))
            .unwrap();
        cli.into_builder().config().clone()
    }

    #[test]
    fn no_arguments_keep_defaults() {
        assert_eq!(parse(&[]), ToastConfig::default());
    }

    #[test]
    fn arguments_reach_the_builder() {
        let config = parse(&[
            "--title",
            "Title",
            "-m",
            "AppMessage",
            "--app-name",
            "AppName",
            "--position",
            "right-top",
            "--style",
            "circle",
            "--open-time",
            "2500",
            "--alpha",
            "0.5",
            "-b",
            "#112233",
        ]);

        assert_eq!(config.title, "Title");
        assert_eq!(config.message, "AppMessage");
        assert_eq!(config.app_name, "AppName");
        assert_eq!(config.position, Position::RightTop);
        assert_eq!(config.image_style, ImageStyle::Circle);
        assert_eq!(config.open_time, Duration::from_millis(2500));
        assert_eq!(config.alpha, 0.5);
        assert_eq!(config.bg_color, "#112233");
    }

    #[test]
    fn empty_image_disables_icon() {
        assert_eq!(parse(&["--image", ""]).image, "");
    }

    #[test]
    fn mute_drops_sound() {
        assert_eq!(parse(&["--mute"]).sound, None);
        assert_eq!(
            parse(&["--sound", "/tmp/ding.ogg"]).sound.as_deref(),
            Some("/tmp/ding.ogg")
        );
    }

    #[test]
    fn sound_and_mute_conflict() {
        let result = Cli::try_parse_from(["gtk-toast", "--mute", "--sound", "/tmp/ding.ogg"]);
        assert!(result.is_err());
    }

    #[test]
    fn open_time_beyond_timer_range_is_rejected() {
        let too_long = (u64::from(u32::MAX) + 1).to_string();
        assert!(Cli::try_parse_from(["gtk-toast", "--open-time", too_long.as_str()]).is_err());

        let longest = u32::MAX.to_string();
        assert_eq!(
            parse(&["--open-time", longest.as_str()]).open_time,
            Duration::from_millis(u64::from(u32::MAX))
        );
    }

    #[test]
    fn every_option_has_help() {
        use clap::CommandFactory;

        let mut command = Cli::command();
        let help = command.render_help().to_string();
        assert!(help.contains("Headline of the toast"));
        assert!(help.contains("Body text of the toast"));
        for arg in Cli::command().get_arguments() {
            assert!(arg.get_help().is_some(), "--{} has no help", arg.get_id());
        }
    }

    #[test]
    fn unknown_position_is_rejected() {
        assert!(Cli::try_parse_from(["gtk-toast", "--position", "center"]).is_err());
    }
}
