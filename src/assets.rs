//
// assets.rs
// Copyright (C) 2022 gmg137 <gmg137 AT live.com>
// Distributed under terms of the GPL-3.0-or-later license.
//
use crate::error::{AssetError, AssetResult};
use gtk::{gdk, gdk_pixbuf::Pixbuf, gio, gio::prelude::FileExt, glib};
use isahc::{
    config::{Configurable, RedirectPolicy},
    AsyncReadResponseExt, Request,
};
use std::time::Duration;

pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location<'a> {
    Remote(&'a str),
    Local(&'a str),
}

impl<'a> Location<'a> {
    pub fn classify(location: &'a str) -> Self {
        let location = location.trim();
        let scheme = location
            .split_once("://")
            .map(|(scheme, _)| scheme.to_ascii_lowercase());
        match scheme.as_deref() {
            Some("http") | Some("https") => Location::Remote(location),
            _ => Location::Local(location),
        }
    }
}

/// Loads an image from an http(s) URL, a file URI or a local path.
pub async fn load_texture(location: &str) -> AssetResult<gdk::Texture> {
    match Location::classify(location) {
        Location::Remote(url) => {
            let bytes = fetch(url).await?;
            decode(bytes)
        }
        Location::Local(path) => {
            let file = gio::File::for_commandline_arg(path);
            Ok(gdk::Texture::from_file(&file)?)
        }
    }
}

/// GStreamer wants URIs, local paths are converted.
pub fn sound_uri(location: &str) -> String {
    match Location::classify(location) {
        Location::Remote(url) => url.to_owned(),
        Location::Local(path) => gio::File::for_commandline_arg(path).uri().to_string(),
    }
}

async fn fetch(url: &str) -> AssetResult<Vec<u8>> {
    let request = Request::get(url)
        .timeout(FETCH_TIMEOUT)
        .redirect_policy(RedirectPolicy::Follow)
        .body(())?;
    let mut response = isahc::send_async(request)
        .await
        .map_err(|source| AssetError::Http {
            url: url.to_owned(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(AssetError::Status {
            url: url.to_owned(),
            status: status.as_u16(),
        });
    }
    Ok(response.bytes().await?)
}

fn decode(bytes: Vec<u8>) -> AssetResult<gdk::Texture> {
    let stream = gio::MemoryInputStream::from_bytes(&glib::Bytes::from_owned(bytes));
    let pixbuf = Pixbuf::from_stream(&stream, gio::Cancellable::NONE)?;
    Ok(gdk::Texture::for_pixbuf(&pixbuf))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_locations() {
        assert_eq!(
            Location::classify("https://clck.ru/32ReV2"),
            Location::Remote("https://clck.ru/32ReV2")
        );
        assert_eq!(
            Location::classify("HTTP://example.com/a.png"),
            Location::Remote("HTTP://example.com/a.png")
        );
        assert_eq!(
            Location::classify("file:///tmp/a.png"),
            Location::Local("file:///tmp/a.png")
        );
        assert_eq!(
            Location::classify("/tmp/a.png"),
            Location::Local("/tmp/a.png")
        );
        assert_eq!(Location::classify(""), Location::Local(""));
    }

    #[test]
    fn remote_sound_is_passed_through() {
        assert_eq!(sound_uri("https://clck.ru/32ReV2"), "https://clck.ru/32ReV2");
    }

    #[test]
    fn local_sound_becomes_file_uri() {
        assert_eq!(sound_uri("/tmp/ding.ogg"), "file:///tmp/ding.ogg");
        assert_eq!(sound_uri("file:///tmp/ding.ogg"), "file:///tmp/ding.ogg");
    }

    #[test]
    fn undecodable_bytes_are_an_error() {
        let err = decode(b"not an image".to_vec()).unwrap_err();
        assert!(matches!(err, AssetError::Decode(_)));
    }
}
