use adw::subclass::prelude::*;
use glib::{clone, WeakRef};
use gtk::{gio, glib, prelude::*};
use std::cell::RefCell;

use crate::{
    config::APP_ID,
    gui::{Toast, ToastBuilder},
};

mod imp {

    use super::*;

    #[derive(Default)]
    pub struct ToastApplication {
        pub builder: RefCell<Option<ToastBuilder>>,
        pub toast: WeakRef<Toast>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for ToastApplication {
        const NAME: &'static str = "GtkToastApplication";
        type Type = super::ToastApplication;
        type ParentType = adw::Application;
    }

    impl ObjectImpl for ToastApplication {}

    impl ApplicationImpl for ToastApplication {
        // A toast is single-use: the first activation builds and starts it,
        // any later activation only brings it back to the front.
        fn activate(&self) {
            self.parent_activate();
            let app = (*self.obj()).clone();

            if let Some(toast) = self.toast.upgrade() {
                toast.present();
                return;
            }

            let Some(builder) = self.builder.take() else {
                log::warn!("Activated without a toast to show");
                return;
            };

            log::debug!("Building toast {:?}", builder.config());
            let toast = builder.build(&app);
            toast.connect_closed(clone!(@weak app => move |_, reason| {
                log::debug!("Toast finished ({:?}), leaving", reason);
                app.quit();
            }));
            self.toast.set(Some(&toast));

            toast.start();
        }
    }

    impl GtkApplicationImpl for ToastApplication {}
    impl AdwApplicationImpl for ToastApplication {}
}

glib::wrapper! {
    pub struct ToastApplication(ObjectSubclass<imp::ToastApplication>)
        @extends gio::Application, gtk::Application, adw::Application,
        @implements gio::ActionGroup, gio::ActionMap;
}

impl ToastApplication {
    pub fn new(builder: ToastBuilder) -> Self {
        // NON_UNIQUE: several toasts may be on screen at once, each in its own process.
        let app: Self = glib::Object::builder()
            .property("application-id", APP_ID)
            .property("flags", gio::ApplicationFlags::NON_UNIQUE)
            .build();
        app.imp().builder.replace(Some(builder));
        app
    }
}
