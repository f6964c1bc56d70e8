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

//! Asset kind filter for photo queries

use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Filters query results by media kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetType {
    /// Photos and videos alike
    All,
    /// Videos only
    Videos,
    /// Photos only
    Photos,
}

impl AssetType {
    /// Wire token for this asset filter
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetType::All => "All",
            AssetType::Videos => "Videos",
            AssetType::Photos => "Photos",
        }
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "All" => Ok(AssetType::All),
            "Videos" => Ok(AssetType::Videos),
            "Photos" => Ok(AssetType::Photos),
            other => Err(ModelError::UnknownAssetType(other.to_string())),
        }
    }
}
