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

//! The photo library client facade
//!
//! Every operation is a single stateless request forwarded to the
//! injected bridge. The client holds no mutable state, never retries,
//! and never orders calls relative to each other.

use crate::error::{Result, RollError};
use camroll_bridge::CameraRollBridge;
use camroll_model::{GetPhotosParams, MediaKind, PhotoQueryResult};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Typed, validated entry point to the device photo library
///
/// All actual work happens behind the injected [`CameraRollBridge`];
/// the client validates arguments, resolves the media kind for saves,
/// and relays asynchronous results unchanged.
#[derive(Debug, Clone)]
pub struct CameraRoll {
    bridge: Arc<dyn CameraRollBridge>,
}

impl CameraRoll {
    /// Create a client over an already-shared bridge handle
    pub fn new(bridge: Arc<dyn CameraRollBridge>) -> Self {
        CameraRoll { bridge }
    }

    /// Create a client owning the given bridge implementation
    pub fn with_bridge<B: CameraRollBridge + 'static>(bridge: B) -> Self {
        CameraRoll::new(Arc::new(bridge))
    }

    pub(crate) fn bridge(&self) -> &Arc<dyn CameraRollBridge> {
        &self.bridge
    }

    /// Delete media items by their opaque identifiers
    ///
    /// Identifiers are forwarded verbatim with no local validation; an
    /// empty list still reaches the bridge.
    ///
    /// # Errors
    ///
    /// Any failure from the native layer propagates unchanged as
    /// [`RollError::Bridge`].
    #[instrument(skip(self, photo_uris), fields(count = photo_uris.len()))]
    pub async fn delete_photos(&self, photo_uris: Vec<String>) -> Result<()> {
        Ok(self.bridge.delete_photos(&photo_uris).await?)
    }

    /// Save a photo or video to the camera roll
    ///
    /// `tag` is a file path or URI naming the media content. When `kind`
    /// is absent it is inferred from the tag's extension
    /// ([`MediaKind::infer_from_tag`]); an explicit kind always wins over
    /// the extension. Resolves to the saved item's identifier/URI.
    ///
    /// # Errors
    ///
    /// [`RollError::InvalidTag`] before any delegation when the tag is
    /// empty; otherwise whatever the native layer fails with.
    pub async fn save_to_camera_roll(&self, tag: &str, kind: Option<MediaKind>) -> Result<String> {
        if tag.is_empty() {
            return Err(RollError::invalid_tag("tag cannot be empty"));
        }

        let resolved = kind.unwrap_or_else(|| MediaKind::infer_from_tag(tag));
        debug!(%tag, kind = %resolved, "delegating save to native bridge");
        Ok(self.bridge.save_to_camera_roll(tag, resolved).await?)
    }

    /// Save with a string-typed kind hint, for callers holding dynamic input
    ///
    /// The hint must spell one of the wire tokens (`"photo"`, `"video"`)
    /// or be absent.
    ///
    /// # Errors
    ///
    /// [`RollError::InvalidTag`] or [`RollError::InvalidMediaKind`] before
    /// any delegation when a precondition fails.
    pub async fn save_to_camera_roll_with_hint(
        &self,
        tag: &str,
        hint: Option<&str>,
    ) -> Result<String> {
        if tag.is_empty() {
            return Err(RollError::invalid_tag("tag cannot be empty"));
        }
        let kind = match hint {
            Some(token) => Some(token.parse::<MediaKind>()?),
            None => None,
        };
        self.save_to_camera_roll(tag, kind).await
    }

    /// Query the library for a page of media items
    ///
    /// Delegates exactly once and relays the native result untouched.
    ///
    /// # Errors
    ///
    /// Any failure from the native layer propagates unchanged.
    #[instrument(skip(self, params), fields(first = params.first))]
    pub async fn get_photos(&self, params: GetPhotosParams) -> Result<PhotoQueryResult> {
        Ok(self.bridge.get_photos(&params).await?)
    }
}
