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

//! In-memory mock bridge for testing
//!
//! Provides a thread-safe implementation of
//! [`CameraRollBridge`](crate::CameraRollBridge) using `Arc<RwLock<…>>`
//! state. The mock records every delegated call so tests can assert
//! delegation counts and argument fidelity, serves a configurable canned
//! query result, and supports failure injection.
//!
//! # Examples
//!
//! ```no_run
//! use camroll_bridge::{mock::MockBridge, CameraRollBridge};
//! use camroll_model::MediaKind;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let bridge = MockBridge::new();
//!
//!     let uri = bridge.save_to_camera_roll("img1.png", MediaKind::Photo).await?;
//!     assert_eq!(uri, "content://camroll/1");
//!     assert_eq!(bridge.saved().await, vec![("img1.png".to_string(), MediaKind::Photo)]);
//!
//!     Ok(())
//! }
//! ```

use crate::CameraRollBridge;
use async_trait::async_trait;
use camroll_model::{GetPhotosParams, MediaKind, PageInfo, PhotoQueryResult};
use std::fmt;
use std::sync::Arc;
use tokio::sync::RwLock;

/// An empty query result page
fn empty_page() -> PhotoQueryResult {
    PhotoQueryResult {
        edges: Vec::new(),
        page_info: PageInfo {
            has_next_page: false,
            start_cursor: None,
            end_cursor: None,
        },
    }
}

#[derive(Debug)]
struct MockState {
    saved: Vec<(String, MediaKind)>,
    deleted: Vec<Vec<String>>,
    queries: Vec<GetPhotosParams>,
    photos: PhotoQueryResult,
    failure: Option<String>,
}

impl Default for MockState {
    fn default() -> Self {
        MockState {
            saved: Vec::new(),
            deleted: Vec::new(),
            queries: Vec::new(),
            photos: empty_page(),
            failure: None,
        }
    }
}

/// In-memory mock bridge for testing
///
/// Thread-safe and `Clone`; clones share state, so a test can hand one
/// handle to the client under test and keep another for assertions.
#[derive(Clone, Default)]
pub struct MockBridge {
    state: Arc<RwLock<MockState>>,
}

impl MockBridge {
    /// Create a new mock bridge with an empty library and no failure armed
    pub fn new() -> Self {
        MockBridge::default()
    }

    /// Create a mock bridge whose queries resolve to `photos`
    pub fn with_photos(photos: PhotoQueryResult) -> Self {
        MockBridge {
            state: Arc::new(RwLock::new(MockState {
                photos,
                ..MockState::default()
            })),
        }
    }

    /// Replace the canned query result
    pub async fn set_photos(&self, photos: PhotoQueryResult) {
        self.state.write().await.photos = photos;
    }

    /// Arm failure injection: every subsequent operation fails with `message`
    pub async fn fail_with<S: Into<String>>(&self, message: S) {
        self.state.write().await.failure = Some(message.into());
    }

    /// Disarm failure injection
    pub async fn clear_failure(&self) {
        self.state.write().await.failure = None;
    }

    /// Every `(tag, kind)` pair delegated to the save operation, in order
    pub async fn saved(&self) -> Vec<(String, MediaKind)> {
        self.state.read().await.saved.clone()
    }

    /// Every identifier batch delegated to the delete operation, in order
    ///
    /// Empty batches are recorded too; deletion is forwarded without any
    /// short-circuit.
    pub async fn deleted_batches(&self) -> Vec<Vec<String>> {
        self.state.read().await.deleted.clone()
    }

    /// Every query parameter set received, in order
    pub async fn queries(&self) -> Vec<GetPhotosParams> {
        self.state.read().await.queries.clone()
    }

    /// Number of times the query operation was delegated
    pub async fn query_count(&self) -> usize {
        self.state.read().await.queries.len()
    }

    /// Forget all recorded calls, keeping the canned result and failure state
    pub async fn clear(&self) {
        let mut state = self.state.write().await;
        state.saved.clear();
        state.deleted.clear();
        state.queries.clear();
    }

    async fn check_failure(&self) -> anyhow::Result<()> {
        match &self.state.read().await.failure {
            Some(message) => Err(anyhow::anyhow!("{message}")),
            None => Ok(()),
        }
    }
}

impl fmt::Debug for MockBridge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MockBridge").finish()
    }
}

#[async_trait]
impl CameraRollBridge for MockBridge {
    async fn delete_photos(&self, photo_uris: &[String]) -> anyhow::Result<()> {
        self.check_failure().await?;
        self.state.write().await.deleted.push(photo_uris.to_vec());
        Ok(())
    }

    async fn save_to_camera_roll(&self, tag: &str, kind: MediaKind) -> anyhow::Result<String> {
        self.check_failure().await?;
        let mut state = self.state.write().await;
        state.saved.push((tag.to_string(), kind));
        Ok(format!("content://camroll/{}", state.saved.len()))
    }

    async fn get_photos(&self, params: &GetPhotosParams) -> anyhow::Result<PhotoQueryResult> {
        self.check_failure().await?;
        let mut state = self.state.write().await;
        state.queries.push(params.clone());
        Ok(state.photos.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camroll_model::{PhotoEdge, PhotoImage, PhotoNode};

    fn one_photo_page() -> PhotoQueryResult {
        PhotoQueryResult {
            edges: vec![PhotoEdge {
                node: PhotoNode {
                    kind: "image".to_string(),
                    group_name: "Camera".to_string(),
                    image: PhotoImage {
                        uri: "content://media/1".to_string(),
                        height: 100.0,
                        width: 100.0,
                        is_stored: Some(true),
                        playable_duration: 0.0,
                    },
                    timestamp: 1.0,
                    location: None,
                },
            }],
            page_info: PageInfo {
                has_next_page: false,
                start_cursor: None,
                end_cursor: Some("c1".to_string()),
            },
        }
    }

    #[tokio::test]
    async fn test_save_records_and_synthesizes_uris() {
        let bridge = MockBridge::new();

        let uri1 = bridge
            .save_to_camera_roll("a.png", MediaKind::Photo)
            .await
            .unwrap();
        let uri2 = bridge
            .save_to_camera_roll("b.mp4", MediaKind::Video)
            .await
            .unwrap();

        assert_eq!(uri1, "content://camroll/1");
        assert_eq!(uri2, "content://camroll/2");
        assert_eq!(
            bridge.saved().await,
            vec![
                ("a.png".to_string(), MediaKind::Photo),
                ("b.mp4".to_string(), MediaKind::Video),
            ]
        );
    }

    #[tokio::test]
    async fn test_delete_records_batches_verbatim() {
        let bridge = MockBridge::new();

        bridge
            .delete_photos(&["u1".to_string(), "u2".to_string()])
            .await
            .unwrap();
        bridge.delete_photos(&[]).await.unwrap();

        let batches = bridge.deleted_batches().await;
        assert_eq!(batches.len(), 2);
        assert_eq!(batches[0], vec!["u1".to_string(), "u2".to_string()]);
        assert!(batches[1].is_empty());
    }

    #[tokio::test]
    async fn test_get_photos_serves_canned_result() {
        let bridge = MockBridge::new();
        bridge.set_photos(one_photo_page()).await;

        let page = bridge.get_photos(&GetPhotosParams::new(5)).await.unwrap();
        assert_eq!(page, one_photo_page());
        assert_eq!(bridge.query_count().await, 1);
        assert_eq!(bridge.queries().await[0].first, 5);
    }

    #[tokio::test]
    async fn test_failure_injection() {
        let bridge = MockBridge::new();
        bridge.fail_with("library locked").await;

        let err = bridge
            .save_to_camera_roll("a.png", MediaKind::Photo)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "library locked");
        assert!(bridge.get_photos(&GetPhotosParams::new(1)).await.is_err());
        assert!(bridge.delete_photos(&[]).await.is_err());

        // Failed calls are not recorded
        assert!(bridge.saved().await.is_empty());
        assert_eq!(bridge.query_count().await, 0);

        bridge.clear_failure().await;
        assert!(bridge.delete_photos(&[]).await.is_ok());
    }

    #[tokio::test]
    async fn test_clone_shares_state() {
        let bridge1 = MockBridge::new();
        let bridge2 = bridge1.clone();

        bridge1
            .save_to_camera_roll("a.png", MediaKind::Photo)
            .await
            .unwrap();
        assert_eq!(bridge2.saved().await.len(), 1);
    }

    #[tokio::test]
    async fn test_clear_keeps_canned_result() {
        let bridge = MockBridge::new();
        bridge.set_photos(one_photo_page()).await;
        bridge.get_photos(&GetPhotosParams::new(1)).await.unwrap();

        bridge.clear().await;
        assert_eq!(bridge.query_count().await, 0);
        let page = bridge.get_photos(&GetPhotosParams::new(1)).await.unwrap();
        assert_eq!(page.edges.len(), 1);
    }
}
