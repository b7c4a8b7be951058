//
// mod.rs
// Copyright (C) 2022 gmg137 <gmg137 AT live.com>
// Distributed under terms of the GPL-3.0-or-later license.
//

mod fade;
mod placement;
mod style;
mod toast;
mod toast_builder;

pub use toast::*;
pub use toast_builder::*;
