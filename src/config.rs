//
// config.rs
// Copyright (C) 2022 gmg137 <gmg137 AT live.com>
// Distributed under terms of the GPL-3.0-or-later license.
//

pub const APP_ID: &str = "com.gitee.gmg137.GtkToast";
pub const GETTEXT_PACKAGE: &str = "gtk-toast";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const LOCALEDIR: &str = match option_env!("LOCALEDIR") {
    Some(dir) => dir,
    None => "/usr/share/locale",
};
