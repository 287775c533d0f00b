// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The composed viewer: transform, gestures, source lifecycle, controls.

use alloc::string::String;

use lightbox_gestures::machine::{
    BUTTON_ZOOM_STEP, GestureEvent, GestureMachine, GesturePhase, InputEvent,
};
use lightbox_transform::{Transform, TransformState};

use crate::share::{ViewerHost, mail_link, suggested_filename, whatsapp_link};

/// How long a status message stays visible, in milliseconds.
pub const STATUS_TTL_MS: u64 = 2_000;

const LINK_COPIED: &str = "Link copied";
const LINK_COPY_FAILED: &str = "Could not copy link";
const IMAGE_COPIED: &str = "Image copied";
const IMAGE_COPY_FAILED: &str = "Could not copy image";
const DOWNLOAD_FAILED: &str = "Could not download image";
const SHARE_OPEN_FAILED: &str = "Could not open share link";

#[derive(Clone, Copy, Debug)]
struct Status {
    text: &'static str,
    shown_at_ms: u64,
}

/// The headless image viewport: one image source, one transform, one
/// gesture machine, and the controls around them.
///
/// Input events go through [`Viewer::on_event`]; the resulting view reaches
/// the screen through [`Viewer::image_style`] / [`Viewer::container_style`]
/// (or a custom binding over [`Viewer::transform`]). Share and download
/// controls call into a [`ViewerHost`] and report through
/// [`Viewer::status`] rather than returning errors.
#[derive(Clone, Debug)]
pub struct Viewer {
    source: String,
    share_target: Option<String>,
    state: TransformState,
    machine: GestureMachine,
    status: Option<Status>,
}

impl Viewer {
    /// Creates a viewer showing `source` at the identity transform.
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            share_target: None,
            state: TransformState::new(),
            machine: GestureMachine::new(),
            status: None,
        }
    }

    /// Returns the current image source.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Shows a different image source.
    ///
    /// A changed source identity resets the view so the new image never
    /// inherits the previous zoom or pan; setting the same source again
    /// leaves the view alone.
    pub fn set_source(&mut self, source: impl Into<String>) {
        let source = source.into();
        if self.source == source {
            return;
        }
        self.source = source;
        self.state.reset();
    }

    /// Sets or clears the share target URL behind the share controls.
    pub fn set_share_target(&mut self, target: Option<&str>) {
        self.share_target = target.map(String::from);
    }

    /// Returns the share target URL, if any.
    #[must_use]
    pub fn share_target(&self) -> Option<&str> {
        self.share_target.as_deref()
    }

    /// Returns the current view transform.
    #[must_use]
    pub fn transform(&self) -> Transform {
        self.state.transform()
    }

    /// Returns the current gesture phase.
    #[must_use]
    pub fn gesture_phase(&self) -> GesturePhase {
        self.machine.phase()
    }

    /// Returns `true` while a pan or pinch session is live.
    #[must_use]
    pub fn is_gesture_active(&self) -> bool {
        self.machine.is_active()
    }

    /// Sets the zoom scale limits; the current scale is clamped into them.
    pub fn set_scale_limits(&mut self, min_scale: f64, max_scale: f64) {
        self.state.set_scale_limits(min_scale, max_scale);
    }

    /// Feeds one input event through the gesture machine.
    pub fn on_event(&mut self, event: InputEvent) -> Option<GestureEvent> {
        self.machine.on_event(&mut self.state, event)
    }

    /// Steps the zoom in by the button step, pan held.
    pub fn zoom_in(&mut self) {
        self.state.zoom_by(1.0 + BUTTON_ZOOM_STEP);
    }

    /// Steps the zoom out by the button step, pan held.
    pub fn zoom_out(&mut self) {
        self.state.zoom_by(1.0 - BUTTON_ZOOM_STEP);
    }

    /// Returns the view to the identity transform.
    pub fn reset_view(&mut self) {
        self.state.reset();
    }

    /// Renders the inline style for the image element.
    #[must_use]
    pub fn image_style(&self) -> String {
        lightbox_css::image_style(self.state.transform(), self.machine.is_active())
    }

    /// Renders the inline style for the container element.
    #[must_use]
    pub fn container_style(&self) -> String {
        lightbox_css::container_style()
    }

    /// Copies the share target to the clipboard through the host.
    ///
    /// Does nothing without a share target (the control is not shown then).
    pub fn copy_link(&mut self, host: &mut impl ViewerHost, now_ms: u64) {
        let Some(target) = self.share_target.as_deref() else {
            return;
        };
        let message = match host.copy_text(target) {
            Ok(()) => LINK_COPIED,
            Err(_) => LINK_COPY_FAILED,
        };
        self.show_status(message, now_ms);
    }

    /// Copies the current image to the clipboard through the host.
    pub fn copy_image_to_clipboard(&mut self, host: &mut impl ViewerHost, now_ms: u64) {
        let message = match host.copy_image(&self.source) {
            Ok(()) => IMAGE_COPIED,
            Err(_) => IMAGE_COPY_FAILED,
        };
        self.show_status(message, now_ms);
    }

    /// Downloads the current image through the host.
    pub fn download_image(&mut self, host: &mut impl ViewerHost, now_ms: u64) {
        let filename = suggested_filename(&self.source);
        if host.download(&self.source, filename).is_err() {
            self.show_status(DOWNLOAD_FAILED, now_ms);
        }
    }

    /// Opens a mail draft sharing the target through the host.
    ///
    /// Does nothing without a share target.
    pub fn share_by_mail(&mut self, host: &mut impl ViewerHost, now_ms: u64) {
        let Some(target) = self.share_target.as_deref() else {
            return;
        };
        if host.open_link(&mail_link(target)).is_err() {
            self.show_status(SHARE_OPEN_FAILED, now_ms);
        }
    }

    /// Opens a WhatsApp share of the target through the host.
    ///
    /// Does nothing without a share target.
    pub fn share_by_whatsapp(&mut self, host: &mut impl ViewerHost, now_ms: u64) {
        let Some(target) = self.share_target.as_deref() else {
            return;
        };
        if host.open_link(&whatsapp_link(target)).is_err() {
            self.show_status(SHARE_OPEN_FAILED, now_ms);
        }
    }

    /// Forwards the "request another view" control to the host.
    pub fn request_new_view(&self, host: &mut impl ViewerHost) {
        host.request_new_view();
    }

    /// Returns the transient status message, if one is still fresh.
    #[must_use]
    pub fn status(&self, now_ms: u64) -> Option<&'static str> {
        self.status
            .as_ref()
            .filter(|s| now_ms.saturating_sub(s.shown_at_ms) < STATUS_TTL_MS)
            .map(|s| s.text)
    }

    fn show_status(&mut self, text: &'static str, now_ms: u64) {
        self.status = Some(Status {
            text,
            shown_at_ms: now_ms,
        });
    }
}
