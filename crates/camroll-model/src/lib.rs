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

//! Data model for the CamRoll photo library client
//!
//! This crate provides:
//! - Closed enumerations for library groups, asset filters, and media kinds
//! - The query parameter structure (with builder) for paginated photo queries
//! - The query result structures relayed verbatim from the native bridge
//! - Extension-based media kind inference for the save operation
//!
//! All wire-facing types serialize with the exact key spelling the native
//! layer speaks, so the model can be handed across the bridge unmodified.

pub mod asset;
pub mod error;
pub mod group;
pub mod kind;
pub mod query;
pub mod result;

// Re-export commonly used types
pub use asset::AssetType;
pub use error::{ModelError, Result};
pub use group::GroupType;
pub use kind::MediaKind;
pub use query::GetPhotosParams;
pub use result::{PageInfo, PhotoEdge, PhotoImage, PhotoLocation, PhotoNode, PhotoQueryResult};
