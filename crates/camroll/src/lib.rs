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

//! Typed client for the device photo library
//!
//! `CameraRoll` provides saving to and querying from the local camera
//! roll, delegating all actual work to an injected
//! [`CameraRollBridge`] implementation. The client itself only validates
//! arguments, resolves a default media kind from the file extension, and
//! relays the bridge's asynchronous results unchanged.
//!
//! # Examples
//!
//! ```no_run
//! use camroll::{CameraRoll, GetPhotosParams, GroupType};
//! use camroll_bridge::mock::MockBridge;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), camroll::RollError> {
//!     let roll = CameraRoll::with_bridge(MockBridge::new());
//!
//!     // Kind is inferred from the extension when no hint is given.
//!     let uri = roll.save_to_camera_roll("holiday/clip.mp4", None).await?;
//!
//!     let page = roll
//!         .get_photos(GetPhotosParams::new(24).group_types(GroupType::SavedPhotos))
//!         .await?;
//!     println!("saved {uri}; first page holds {} items", page.edges.len());
//!
//!     roll.delete_photos(vec![uri]).await?;
//!     Ok(())
//! }
//! ```
//!
//! Deprecated call forms (`save_image_with_tag`, callback-style photo
//! queries) live in [`compat`] and emit a WARN diagnostic on the
//! `camroll::deprecated` target each time they are used.

pub mod client;
pub mod compat;
pub mod error;

pub use client::CameraRoll;
pub use compat::ErrorCallback;
pub use error::{Result, RollError};

// Re-export the model and bridge surface for caller convenience
pub use camroll_bridge::CameraRollBridge;
pub use camroll_model::{
    AssetType, GetPhotosParams, GroupType, MediaKind, PageInfo, PhotoEdge, PhotoImage,
    PhotoLocation, PhotoNode, PhotoQueryResult,
};
