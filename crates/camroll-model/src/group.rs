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

//! Logical photo library groups
//!
//! A group names one logical collection of the device library that a query
//! can be scoped to. The set is closed and defined by the native layer; this
//! module only gives it a typed spelling.

use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Logical collection of the photo library to query
///
/// Serializes to the exact PascalCase token the native bridge expects
/// (`"SavedPhotos"`, `"PhotoStream"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum GroupType {
    /// A user-created album
    Album,
    /// Every group the library knows about
    All,
    /// An event-based group
    Event,
    /// A faces (people) group
    Faces,
    /// The whole library
    Library,
    /// The photo stream
    PhotoStream,
    /// The camera roll of locally saved items
    #[default]
    SavedPhotos,
}

impl GroupType {
    /// Wire token for this group type
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupType::Album => "Album",
            GroupType::All => "All",
            GroupType::Event => "Event",
            GroupType::Faces => "Faces",
            GroupType::Library => "Library",
            GroupType::PhotoStream => "PhotoStream",
            GroupType::SavedPhotos => "SavedPhotos",
        }
    }
}

impl fmt::Display for GroupType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GroupType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Album" => Ok(GroupType::Album),
            "All" => Ok(GroupType::All),
            "Event" => Ok(GroupType::Event),
            "Faces" => Ok(GroupType::Faces),
            "Library" => Ok(GroupType::Library),
            "PhotoStream" => Ok(GroupType::PhotoStream),
            "SavedPhotos" => Ok(GroupType::SavedPhotos),
            other => Err(ModelError::UnknownGroupType(other.to_string())),
        }
    }
}
