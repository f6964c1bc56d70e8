// CamRoll - Typed Client for the Device Photo Library
// Copyright (C) 2025 CamRoll Contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published
// by the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.

//! Deprecated call forms kept for backward compatibility
//!
//! Each adapter wraps the modern operation in [`crate::client`] and emits
//! one WARN diagnostic per call on the `camroll::deprecated` target.
//! The adapters are kept separate from the core operations so the legacy
//! behavior stays explicit and isolated.

use crate::client::CameraRoll;
use crate::error::Result;
use camroll_model::{GetPhotosParams, MediaKind, PhotoQueryResult};
use std::sync::Arc;
use tracing::warn;

/// Legacy error callback; defaults to a no-op when omitted
pub type ErrorCallback = Box<dyn FnOnce(anyhow::Error) + Send>;

impl CameraRoll {
    /// Save an image by tag, always as a photo
    ///
    /// Behaves exactly like `save_to_camera_roll(tag, Some(MediaKind::Photo))`
    /// after emitting the deprecation diagnostic.
    #[deprecated(since = "0.2.0", note = "use `save_to_camera_roll` instead")]
    pub async fn save_image_with_tag(&self, tag: &str) -> Result<String> {
        warn!(
            target: "camroll::deprecated",
            "`save_image_with_tag` is deprecated, use `save_to_camera_roll` instead"
        );
        self.save_to_camera_roll(tag, Some(MediaKind::Photo)).await
    }

    /// Query the library, delivering results through legacy callbacks
    ///
    /// Routes one bridge invocation's resolution to `on_success` /
    /// `on_error` (`on_error` defaults to a no-op when `None`), delivered
    /// on a spawned task. A second, independent invocation produces the
    /// returned result, so the bridge is queried twice per call — the
    /// historical behavior of the callback form, reproduced as-is.
    #[deprecated(
        since = "0.2.0",
        note = "use the result returned by `get_photos` instead"
    )]
    pub async fn get_photos_with_callbacks<F>(
        &self,
        params: GetPhotosParams,
        on_success: F,
        on_error: Option<ErrorCallback>,
    ) -> Result<PhotoQueryResult>
    where
        F: FnOnce(PhotoQueryResult) + Send + 'static,
    {
        warn!(
            target: "camroll::deprecated",
            "callback-style `get_photos` is deprecated, use the returned result instead"
        );

        // Legacy side channel: its own invocation, resolution fanned out
        // to the callbacks.
        let bridge = Arc::clone(self.bridge());
        let legacy_params = params.clone();
        tokio::spawn(async move {
            match bridge.get_photos(&legacy_params).await {
                Ok(page) => on_success(page),
                Err(err) => {
                    if let Some(callback) = on_error {
                        callback(err);
                    }
                }
            }
        });

        // Primary path, always executed: a second independent invocation
        // whose result is returned to the caller.
        self.get_photos(params).await
    }
}
