//
// toast.rs
// Copyright (C) 2022 gmg137 <gmg137 AT live.com>
// Distributed under terms of the GPL-3.0-or-later license.
//
use adw::prelude::*;
use glib::{clone, subclass::Signal, SignalHandlerId};
use gstreamer_play::{Play, PlaySignalAdapter, PlayVideoRenderer};
use gtk::{glib, subclass::prelude::*};
use once_cell::sync::Lazy;
use std::cell::RefCell;

use crate::{
    assets,
    gui::{
        fade::fade,
        placement,
        style::{self, ICON_SIZE, TOAST_WIDTH},
        ToastBuilder,
    },
    lifecycle::{Lifecycle, ToastState},
    model::{CloseReason, ImageStyle, ToastConfig},
    utils::{gettext_f, OneShotTimer},
};

glib::wrapper! {
    pub struct Toast(ObjectSubclass<imp::Toast>)
        @extends gtk::Widget, gtk::Window,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget, gtk::Native, gtk::Root, gtk::ShortcutManager;
}

impl Toast {
    pub fn builder() -> ToastBuilder {
        ToastBuilder::new()
    }

    pub(crate) fn new(application: &impl IsA<gtk::Application>, config: ToastConfig) -> Self {
        let toast: Toast = glib::Object::builder()
            .property("application", application.upcast_ref::<gtk::Application>())
            .build();
        toast.setup(config);
        toast
    }

    pub fn state(&self) -> ToastState {
        self.imp().lifecycle.borrow().state()
    }

    /// Shows the toast, fades it in and arms the auto-close timer.
    pub fn start(&self) {
        let imp = self.imp();
        if !imp.lifecycle.borrow_mut().show() {
            log::warn!("Toast already started ({:?})", self.state());
            return;
        }

        let Some(content) = imp.content.borrow().clone() else {
            return;
        };
        let (alpha, open_time) = {
            let config = imp.config.borrow();
            (config.alpha, config.open_time)
        };

        self.present();

        let animation = fade(content.upcast_ref(), 0.0, alpha);
        animation.connect_done(clone!(@weak self as toast => move |_| {
            toast.imp().lifecycle.borrow_mut().shown();
        }));
        imp.animation.replace(Some(animation.clone()));
        animation.play();

        imp.close_timer.schedule(
            open_time,
            clone!(@weak self as toast => move || {
                toast.fade_out(CloseReason::Timeout);
            }),
        );
    }

    /// Same as clicking the close button.
    pub fn dismiss(&self) {
        self.fade_out(CloseReason::Dismissed);
    }

    pub fn connect_closed<F: Fn(&Self, CloseReason) + 'static>(&self, f: F) -> SignalHandlerId {
        self.connect_local("closed", false, move |values| {
            let toast = values[0].get::<Self>().ok()?;
            let reason = values[1].get::<CloseReason>().ok()?;
            f(&toast, reason);
            None
        })
    }

    fn setup(&self, config: ToastConfig) {
        style::load_css(&config.bg_color);

        let content = gtk::Box::builder()
            .orientation(gtk::Orientation::Horizontal)
            .spacing(10)
            .width_request(TOAST_WIDTH)
            .css_classes(["toast-box"].map(String::from).to_vec())
            .build();
        content.set_opacity(0.0);

        if config.image.is_empty() {
            log::debug!("No image configured, toast has no icon");
        } else {
            let icon = icon_widget(config.image_style);
            content.append(&icon);
            self.load_icon(&icon, config.image.clone());
        }

        let vbox = gtk::Box::new(gtk::Orientation::Vertical, 0);
        vbox.append(&text_label(&config.title, "toast-title"));
        vbox.append(&text_label(&config.message, "toast-message"));
        vbox.append(&text_label(&config.app_name, "toast-app-name"));

        let close_button = gtk::Button::builder()
            .icon_name("window-close-symbolic")
            .halign(gtk::Align::Start)
            .tooltip_text(gettext_f("Dismiss {app}", &[("app", &config.app_name)]))
            .build();
        close_button.connect_clicked(clone!(@weak self as toast => move |_| {
            toast.dismiss();
        }));
        vbox.append(&close_button);
        content.append(&vbox);

        self.set_child(Some(&content));
        self.connect_close_request(|toast| match toast.state() {
            ToastState::Built | ToastState::Closed => glib::Propagation::Proceed,
            _ => {
                toast.dismiss();
                glib::Propagation::Stop
            }
        });

        placement::place(self.upcast_ref(), config.position);
        self.play_sound(config.sound.as_deref());

        let imp = self.imp();
        imp.content.replace(Some(content));
        imp.config.replace(config);
    }

    fn load_icon(&self, icon: &gtk::Image, location: String) {
        let ctx = glib::MainContext::default();
        ctx.spawn_local(clone!(@weak icon => async move {
            match assets::load_texture(&location).await {
                Ok(texture) => icon.set_from_paintable(Some(&texture)),
                Err(err) => {
                    log::warn!("Icon {location} unavailable, hiding it: {err}");
                    icon.set_visible(false);
                }
            }
        }));
    }

    fn play_sound(&self, location: Option<&str>) {
        let Some(location) = location.filter(|l| !l.is_empty()) else {
            log::debug!("Toast is muted");
            return;
        };

        let player = Play::new(None::<PlayVideoRenderer>);
        let player_signal = PlaySignalAdapter::new(&player);
        player_signal.connect_error(|adapter, err, _| {
            log::warn!("Sound unavailable, continuing silently: {err}");
            adapter.play().stop();
        });
        player_signal.connect_end_of_stream(|adapter| {
            adapter.play().stop();
        });

        player.set_uri(Some(&assets::sound_uri(location)));
        player.play();

        let imp = self.imp();
        imp.player.replace(Some(player));
        imp.player_signal.replace(Some(player_signal));
    }

    fn fade_out(&self, reason: CloseReason) {
        let imp = self.imp();
        if !imp.lifecycle.borrow_mut().begin_close(reason) {
            log::debug!("Ignoring {:?}, toast is {:?}", reason, self.state());
            return;
        }

        if imp.close_timer.cancel() {
            log::debug!("Auto-close cancelled");
        }
        if let Some(fade_in) = imp.animation.take() {
            fade_in.pause();
        }

        let Some(content) = imp.content.borrow().clone() else {
            return;
        };
        let animation = fade(content.upcast_ref(), content.opacity(), 0.0);
        animation.connect_done(clone!(@weak self as toast => move |_| {
            toast.finish_close();
        }));
        imp.animation.replace(Some(animation.clone()));
        animation.play();
    }

    fn finish_close(&self) {
        let imp = self.imp();
        if !imp.lifecycle.borrow_mut().finish_close() {
            return;
        }

        let reason = imp.lifecycle.borrow().close_reason().unwrap_or_default();
        imp.animation.take();
        if let Some(player) = imp.player.take() {
            player.stop();
        }
        imp.player_signal.take();

        log::info!("Toast closed ({:?})", reason);
        self.emit_by_name::<()>("closed", &[&reason]);
        self.close();
    }
}

fn icon_widget(style: ImageStyle) -> gtk::Image {
    let icon = gtk::Image::builder()
        .pixel_size(ICON_SIZE)
        .valign(gtk::Align::Center)
        .overflow(gtk::Overflow::Hidden)
        .css_classes(["toast-icon"].map(String::from).to_vec())
        .build();
    if style == ImageStyle::Circle {
        icon.add_css_class("circle");
    }
    icon
}

fn text_label(text: &str, class: &str) -> gtk::Label {
    let label = gtk::Label::builder()
        .label(text)
        .xalign(0.0)
        .wrap(true)
        .build();
    label.add_css_class(class);
    label
}

mod imp {

    use super::*;

    #[derive(Default)]
    pub struct Toast {
        pub config: RefCell<ToastConfig>,
        pub content: RefCell<Option<gtk::Box>>,
        pub player: RefCell<Option<Play>>,
        pub player_signal: RefCell<Option<PlaySignalAdapter>>,
        pub lifecycle: RefCell<Lifecycle>,
        pub close_timer: OneShotTimer,
        pub animation: RefCell<Option<adw::TimedAnimation>>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for Toast {
        const NAME: &'static str = "GtkToastWindow";
        type Type = super::Toast;
        type ParentType = gtk::Window;
    }

    impl ObjectImpl for Toast {
        fn constructed(&self) {
            self.parent_constructed();

            let obj = self.obj();
            obj.set_decorated(false);
            obj.set_resizable(true);
            obj.set_default_size(TOAST_WIDTH, -1);
            obj.add_css_class("toast");
        }

        fn signals() -> &'static [Signal] {
            static SIGNALS: Lazy<Vec<Signal>> = Lazy::new(|| {
                vec![Signal::builder("closed")
                    .param_types([CloseReason::static_type()])
                    .build()]
            });
            SIGNALS.as_ref()
        }

        fn dispose(&self) {
            self.close_timer.cancel();
            if let Some(player) = self.player.take() {
                player.stop();
            }
        }
    }

    impl WidgetImpl for Toast {}
    impl WindowImpl for Toast {}
}
