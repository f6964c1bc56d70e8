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

//! Native bridge abstraction for CamRoll
//!
//! This crate defines the boundary between the typed client and the
//! platform-native media library: a single async trait with exactly the
//! three operations the native side exposes, plus an in-memory mock for
//! tests.
//!
//! # Architecture
//!
//! The [`CameraRollBridge`] trait is the whole contract. Real
//! implementations live with their platform bindings; the client depends
//! only on `Arc<dyn CameraRollBridge>`, so any implementation can be
//! substituted, including [`mock::MockBridge`] in tests.
//!
//! Each call is independent: the bridge performs no retry, no caching,
//! applies no timeout, and once a call is delegated it cannot be aborted
//! from this layer.
//!
//! # Examples
//!
//! ```no_run
//! use camroll_bridge::{mock::MockBridge, CameraRollBridge};
//! use camroll_model::{GetPhotosParams, MediaKind};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let bridge = MockBridge::new();
//!
//!     let uri = bridge.save_to_camera_roll("img1.png", MediaKind::Photo).await?;
//!     let page = bridge.get_photos(&GetPhotosParams::new(10)).await?;
//!     println!("saved {uri}, library holds {} items", page.edges.len());
//!
//!     bridge.delete_photos(&[uri]).await?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod mock;

use async_trait::async_trait;
use camroll_model::{GetPhotosParams, MediaKind, PhotoQueryResult};
use std::fmt::Debug;

pub use error::{BridgeError, BridgeResult};
pub use mock::MockBridge;

/// Async trait over the platform-native media library
///
/// Implementations must be `Send + Sync` for safe concurrent use and
/// implement `Debug` for observability. All operations return
/// `anyhow::Result<T>` so platform errors can carry arbitrary context;
/// the client surfaces them unchanged.
#[async_trait]
pub trait CameraRollBridge: Send + Sync + Debug {
    /// Delete media items by their opaque identifiers
    ///
    /// Identifiers are forwarded verbatim; an empty list is still a valid
    /// call and reaches the native side.
    ///
    /// # Errors
    ///
    /// Returns an error if the native layer rejects the deletion (missing
    /// permission, unknown identifier, platform failure).
    async fn delete_photos(&self, photo_uris: &[String]) -> anyhow::Result<()>;

    /// Save a photo or video into the device library
    ///
    /// `tag` is a file path or URI naming the media content; `kind` is the
    /// already-resolved media kind. Resolves to the saved item's
    /// identifier/URI.
    ///
    /// # Errors
    ///
    /// Returns an error if the content cannot be read or the library
    /// rejects the save.
    async fn save_to_camera_roll(&self, tag: &str, kind: MediaKind) -> anyhow::Result<String>;

    /// Query the library for a page of media items
    ///
    /// The result is produced entirely by the native side; see
    /// [`PhotoQueryResult`] for the relayed shape.
    ///
    /// # Errors
    ///
    /// Returns an error if the native layer fails the query.
    async fn get_photos(&self, params: &GetPhotosParams) -> anyhow::Result<PhotoQueryResult>;
}
