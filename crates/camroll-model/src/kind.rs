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

//! Media kind of a saved item and its inference rule
//!
//! The save operation accepts an optional kind hint; when the hint is
//! absent the kind is inferred from the file reference's extension. The
//! inference rule is deliberately narrow and bug-compatible with the
//! behavior existing callers depend on: only the lowercase tokens `mov`
//! and `mp4` classify as video, everything else is a photo.

use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of media being saved to the library
///
/// Serializes to the lowercase wire token (`"photo"`, `"video"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// A still image
    Photo,
    /// A video clip
    Video,
}

impl MediaKind {
    /// Wire token for this media kind
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Photo => "photo",
            MediaKind::Video => "video",
        }
    }

    /// Infer the media kind from a file reference's extension
    ///
    /// Inspects the text after the final `.`: exactly `mov` or `mp4`
    /// classifies as [`MediaKind::Video`]; any other extension, or none at
    /// all, classifies as [`MediaKind::Photo`].
    ///
    /// The match is case-sensitive against the lowercase tokens only, so
    /// `clip.MP4` infers `Photo`. Preserved as-is for bug-compatibility
    /// with existing callers; pass an explicit kind to override.
    ///
    /// # Examples
    ///
    /// ```
    /// use camroll_model::MediaKind;
    ///
    /// assert_eq!(MediaKind::infer_from_tag("holiday/clip.mp4"), MediaKind::Video);
    /// assert_eq!(MediaKind::infer_from_tag("img1.png"), MediaKind::Photo);
    /// assert_eq!(MediaKind::infer_from_tag("clip1.MP4"), MediaKind::Photo);
    /// ```
    pub fn infer_from_tag(tag: &str) -> MediaKind {
        // rsplit yields the whole tag when no '.' is present, matching the
        // historical "last split segment" rule.
        match tag.rsplit('.').next() {
            Some("mov") | Some("mp4") => MediaKind::Video,
            _ => MediaKind::Photo,
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "photo" => Ok(MediaKind::Photo),
            "video" => Ok(MediaKind::Video),
            other => Err(ModelError::UnknownMediaKind(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_video_extensions() {
        assert_eq!(MediaKind::infer_from_tag("clip.mov"), MediaKind::Video);
        assert_eq!(MediaKind::infer_from_tag("clip.mp4"), MediaKind::Video);
        assert_eq!(
            MediaKind::infer_from_tag("a/b/c.with.dots.mp4"),
            MediaKind::Video
        );
    }

    #[test]
    fn test_photo_fallthrough() {
        assert_eq!(MediaKind::infer_from_tag("img1.png"), MediaKind::Photo);
        assert_eq!(MediaKind::infer_from_tag("img1.jpeg"), MediaKind::Photo);
        assert_eq!(MediaKind::infer_from_tag("noextension"), MediaKind::Photo);
        assert_eq!(MediaKind::infer_from_tag("trailing."), MediaKind::Photo);
        assert_eq!(MediaKind::infer_from_tag(""), MediaKind::Photo);
    }

    #[test]
    fn test_uppercase_extension_does_not_match() {
        // The match is case-sensitive; uppercase container extensions fall
        // through to photo.
        assert_eq!(MediaKind::infer_from_tag("clip1.MP4"), MediaKind::Photo);
        assert_eq!(MediaKind::infer_from_tag("clip1.MOV"), MediaKind::Photo);
        assert_eq!(MediaKind::infer_from_tag("clip1.Mp4"), MediaKind::Photo);
    }

    #[test]
    fn test_bare_token_counts_as_extension() {
        // "mov" with no dot is its own final segment, same as the
        // historical split rule.
        assert_eq!(MediaKind::infer_from_tag("mov"), MediaKind::Video);
    }

    #[test]
    fn test_parse_tokens() {
        assert_eq!("photo".parse::<MediaKind>().unwrap(), MediaKind::Photo);
        assert_eq!("video".parse::<MediaKind>().unwrap(), MediaKind::Video);
        assert!("Photo".parse::<MediaKind>().is_err());
        assert!("gif".parse::<MediaKind>().is_err());
        assert!("".parse::<MediaKind>().is_err());
    }

    #[test]
    fn test_serde_token_spelling() {
        assert_eq!(serde_json::to_string(&MediaKind::Video).unwrap(), "\"video\"");
        let parsed: MediaKind = serde_json::from_str("\"photo\"").unwrap();
        assert_eq!(parsed, MediaKind::Photo);
    }

    proptest! {
        /// Property: any tag whose final segment is neither "mov" nor "mp4"
        /// infers photo.
        #[test]
        fn proptest_non_video_extension_is_photo(stem in "[a-zA-Z0-9_/]{0,24}", ext in "[a-zA-Z0-9]{0,6}") {
            prop_assume!(ext != "mov" && ext != "mp4");
            let tag = format!("{stem}.{ext}");
            prop_assert_eq!(MediaKind::infer_from_tag(&tag), MediaKind::Photo);
        }

        /// Property: appending a lowercase video extension always infers video.
        #[test]
        fn proptest_video_extension_wins(stem in "[a-zA-Z0-9_/.]{0,24}") {
            prop_assert_eq!(MediaKind::infer_from_tag(&format!("{stem}.mov")), MediaKind::Video);
            prop_assert_eq!(MediaKind::infer_from_tag(&format!("{stem}.mp4")), MediaKind::Video);
        }

        /// Property: parsing rejects everything outside the two wire tokens.
        #[test]
        fn proptest_parse_closed(token in "[a-zA-Z]{0,8}") {
            prop_assume!(token != "photo" && token != "video");
            prop_assert!(token.parse::<MediaKind>().is_err());
        }
    }
}
