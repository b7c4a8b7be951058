//
// error.rs
// Copyright (C) 2022 gmg137 <gmg137 AT live.com>
// Distributed under terms of the GPL-3.0-or-later license.
//
use gtk::glib;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: isahc::Error,
    },
    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("invalid request: {0}")]
    Request(#[from] isahc::http::Error),
    #[error("failed to read response body: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to decode image: {0}")]
    Decode(#[from] glib::Error),
}

pub type AssetResult<T> = std::result::Result<T, AssetError>;
