// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host seam: capabilities the embedding application lends the viewer.
//!
//! The viewer never reaches for a clipboard, the network, or a window by
//! itself. It hands the host pre-computed values (an encoded deep link, the
//! image source, a suggested filename) and the host performs the platform
//! work behind [`ViewerHost`]. Anything that can fail reports a
//! [`HostError`] which the viewer turns into a transient status message.

use alloc::string::String;
use core::fmt;
use core::fmt::Write as _;

/// Why a host capability did not complete.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostError {
    /// The platform does not offer this capability.
    Unsupported,
    /// The capability exists but the attempt failed.
    Failed,
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsupported => f.write_str("capability not available on this platform"),
            Self::Failed => f.write_str("capability invocation failed"),
        }
    }
}

impl core::error::Error for HostError {}

/// Capabilities the embedding application provides to the viewer.
///
/// Implementations own every asynchronous or platform-specific step: a
/// browser host fetches image bytes and writes blobs to the clipboard, a
/// test host records calls. The viewer only observes success or failure.
pub trait ViewerHost {
    /// Writes plain text to the clipboard.
    fn copy_text(&mut self, text: &str) -> Result<(), HostError>;

    /// Fetches the image behind `source` and writes its bytes, with their
    /// MIME type, to the clipboard.
    fn copy_image(&mut self, source: &str) -> Result<(), HostError>;

    /// Triggers a download of `source` under the suggested `filename`.
    fn download(&mut self, source: &str, filename: &str) -> Result<(), HostError>;

    /// Opens a pre-encoded deep link (`mailto:`, `https://wa.me/...`).
    fn open_link(&mut self, url: &str) -> Result<(), HostError>;

    /// The "request another view" control was pressed. Purely delegated;
    /// the viewer keeps no related state.
    fn request_new_view(&mut self);
}

/// Builds a `mailto:` deep link whose body is the share target.
#[must_use]
pub fn mail_link(share_target: &str) -> String {
    let mut url = String::from("mailto:?body=");
    url.push_str(&encode_component(share_target));
    url
}

/// Builds a WhatsApp deep link whose text is the share target.
#[must_use]
pub fn whatsapp_link(share_target: &str) -> String {
    let mut url = String::from("https://wa.me/?text=");
    url.push_str(&encode_component(share_target));
    url
}

/// Percent-encodes a string for use inside a URL query component.
///
/// RFC 3986 unreserved characters pass through; every other byte of the
/// UTF-8 encoding is escaped as `%XX`.
#[must_use]
pub fn encode_component(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(byte as char);
            }
            _ => {
                let _ = write!(out, "%{:02X}", byte);
            }
        }
    }
    out
}

/// Suggests a download filename from the final path segment of `source`.
///
/// Query and fragment parts are stripped first; when nothing usable
/// remains the suggestion falls back to `"image"`.
#[must_use]
pub fn suggested_filename(source: &str) -> &str {
    let end = source.find(['?', '#']).unwrap_or(source.len());
    let base = &source[..end];
    let name = match base.rfind('/') {
        Some(i) => &base[i + 1..],
        None => base,
    };
    if name.is_empty() { "image" } else { name }
}
