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

//! Query parameters for paginated photo library queries
//!
//! Parameters serialize with the camelCase key spelling the native layer
//! expects; absent optional fields are omitted entirely rather than sent
//! as null.

use crate::asset::AssetType;
use crate::group::GroupType;
use serde::{Deserialize, Serialize};

/// Parameters for a paginated photo library query
///
/// Construct with [`GetPhotosParams::new`] and the chained setters:
///
/// ```
/// use camroll_model::{AssetType, GetPhotosParams, GroupType};
///
/// let params = GetPhotosParams::new(24)
///     .group_types(GroupType::SavedPhotos)
///     .asset_type(AssetType::Photos)
///     .mime_types(vec!["image/jpeg".to_string()]);
/// assert_eq!(params.first, 24);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetPhotosParams {
    /// Page size: number of edges to fetch
    pub first: u32,

    /// Opaque cursor from a previous page's `end_cursor`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,

    /// Logical library group to query
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_types: Option<GroupType>,

    /// Specific group name (e.g. an album title) to scope the query to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,

    /// Filter results by media kind
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_type: Option<AssetType>,

    /// Filter results to these MIME types
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_types: Option<Vec<String>>,
}

impl GetPhotosParams {
    /// Create query parameters fetching the first `first` items
    ///
    /// All filters start unset; the native layer applies its own default
    /// group ([`GroupType::SavedPhotos`]) when none is given.
    pub fn new(first: u32) -> Self {
        GetPhotosParams {
            first,
            after: None,
            group_types: None,
            group_name: None,
            asset_type: None,
            mime_types: None,
        }
    }

    /// Resume after the given opaque cursor
    pub fn after<S: Into<String>>(mut self, cursor: S) -> Self {
        self.after = Some(cursor.into());
        self
    }

    /// Scope the query to a logical library group
    pub fn group_types(mut self, group: GroupType) -> Self {
        self.group_types = Some(group);
        self
    }

    /// Scope the query to a named group
    pub fn group_name<S: Into<String>>(mut self, name: S) -> Self {
        self.group_name = Some(name.into());
        self
    }

    /// Filter results by media kind
    pub fn asset_type(mut self, asset: AssetType) -> Self {
        self.asset_type = Some(asset);
        self
    }

    /// Filter results to the given MIME types
    pub fn mime_types(mut self, mime_types: Vec<String>) -> Self {
        self.mime_types = Some(mime_types);
        self
    }
}
