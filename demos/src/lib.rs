// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared plumbing for the Lightbox demos.

use lightbox_viewer::{HostError, ViewerHost};

/// A host that narrates every action to stdout and always succeeds.
#[derive(Debug, Default)]
pub struct PrintHost;

impl ViewerHost for PrintHost {
    fn copy_text(&mut self, text: &str) -> Result<(), HostError> {
        println!("[host] copy text: {text}");
        Ok(())
    }

    fn copy_image(&mut self, source: &str) -> Result<(), HostError> {
        println!("[host] copy image: {source}");
        Ok(())
    }

    fn download(&mut self, source: &str, filename: &str) -> Result<(), HostError> {
        println!("[host] download {source} as {filename}");
        Ok(())
    }

    fn open_link(&mut self, url: &str) -> Result<(), HostError> {
        println!("[host] open: {url}");
        Ok(())
    }

    fn request_new_view(&mut self) {
        println!("[host] new view requested");
    }
}

/// A host whose clipboard and link actions always fail, for exercising the
/// viewer's status reporting.
#[derive(Debug, Default)]
pub struct OfflineHost;

impl ViewerHost for OfflineHost {
    fn copy_text(&mut self, _text: &str) -> Result<(), HostError> {
        Err(HostError::Unsupported)
    }

    fn copy_image(&mut self, _source: &str) -> Result<(), HostError> {
        Err(HostError::Unsupported)
    }

    fn download(&mut self, _source: &str, _filename: &str) -> Result<(), HostError> {
        Err(HostError::Failed)
    }

    fn open_link(&mut self, _url: &str) -> Result<(), HostError> {
        Err(HostError::Failed)
    }

    fn request_new_view(&mut self) {}
}
