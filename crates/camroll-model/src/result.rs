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

//! Query result structures relayed verbatim from the native bridge
//!
//! The native payload mixes key conventions (snake_case on the node and
//! page info, camelCase inside the image descriptor); the renames below
//! mirror that payload exactly. The client asserts no invariants over this
//! data and performs no transformation.

use serde::{Deserialize, Serialize};

/// One page of photo library query results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoQueryResult {
    /// The items of this page, in library order
    pub edges: Vec<PhotoEdge>,
    /// Pagination state for fetching the next page
    pub page_info: PageInfo,
}

/// A single edge wrapping one media item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoEdge {
    /// The media item
    pub node: PhotoNode,
}

/// One media item of the library
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoNode {
    /// Native kind tag of the item
    #[serde(rename = "type")]
    pub kind: String,

    /// Name of the group the item belongs to
    pub group_name: String,

    /// Descriptor of the underlying image or video
    pub image: PhotoImage,

    /// Capture timestamp, seconds since the epoch
    pub timestamp: f64,

    /// Geolocation recorded at capture time, when available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<PhotoLocation>,
}

/// Descriptor of a stored image or video
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoImage {
    /// URI resolving to the media content
    pub uri: String,

    /// Pixel height
    pub height: f64,

    /// Pixel width
    pub width: f64,

    /// Whether the item is stored locally on the device
    #[serde(rename = "isStored", skip_serializing_if = "Option::is_none")]
    pub is_stored: Option<bool>,

    /// Playable duration in seconds; zero for still images
    #[serde(rename = "playableDuration")]
    pub playable_duration: f64,
}

/// Pagination state of a query result page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageInfo {
    /// Whether another page can be fetched
    pub has_next_page: bool,

    /// Opaque cursor of this page's first edge
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_cursor: Option<String>,

    /// Opaque cursor to pass as `after` for the next page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_cursor: Option<String>,
}

/// Geolocation recorded with a media item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PhotoLocation {
    /// Degrees north of the equator
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,

    /// Degrees east of the prime meridian
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,

    /// Meters above sea level
    #[serde(skip_serializing_if = "Option::is_none")]
    pub altitude: Option<f64>,

    /// Direction of travel in degrees
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<f64>,

    /// Speed in meters per second
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
}
