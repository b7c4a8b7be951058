mod application;
mod assets;
mod cli;
mod config;
mod error;
mod gui;
mod lifecycle;
mod model;
mod utils;

use self::application::ToastApplication;
use self::cli::Cli;

use clap::Parser;
use config::{GETTEXT_PACKAGE, LOCALEDIR};
use gettextrs::{bind_textdomain_codeset, bindtextdomain, textdomain};
use gtk::glib;
use gtk::prelude::*;

fn init_gettext() -> anyhow::Result<()> {
    bindtextdomain(GETTEXT_PACKAGE, LOCALEDIR)?;
    bind_textdomain_codeset(GETTEXT_PACKAGE, "UTF-8")?;
    textdomain(GETTEXT_PACKAGE)?;
    Ok(())
}

fn main() -> glib::ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut builder = Cli::parse().into_builder();

    if let Err(err) = init_gettext() {
        log::warn!("Translations unavailable: {err:#}");
    }

    // Without GStreamer the toast still shows, it just stays silent.
    if let Err(err) = gstreamer::init() {
        log::warn!("GStreamer failed to initialize, sound disabled: {err}");
        builder = builder.mute();
    }

    let app = ToastApplication::new(builder);

    // Arguments are already consumed, GApplication must not parse them again.
    app.run_with_args::<&str>(&[])
}
