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

//! Deprecation diagnostics are WARN events on the `camroll::deprecated`
//! target: exactly one per deprecated call, none for the current forms.

#![allow(deprecated)]

use camroll::{CameraRoll, GetPhotosParams};
use camroll_bridge::mock::MockBridge;
use std::io;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

/// Captures formatted log output into a shared buffer
#[derive(Clone, Default)]
struct CaptureWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl CaptureWriter {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock().unwrap()).into_owned()
    }

    fn deprecation_count(&self) -> usize {
        self.contents()
            .lines()
            .filter(|line| line.contains("camroll::deprecated"))
            .count()
    }
}

impl io::Write for CaptureWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CaptureWriter {
    type Writer = CaptureWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn capture_subscriber() -> (CaptureWriter, impl tracing::Subscriber) {
    let writer = CaptureWriter::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(writer.clone())
        .with_ansi(false)
        .without_time()
        .finish();
    (writer, subscriber)
}

#[tokio::test]
async fn save_image_with_tag_warns_once_per_call() {
    let (writer, subscriber) = capture_subscriber();
    let _guard = tracing::subscriber::set_default(subscriber);
    let roll = CameraRoll::with_bridge(MockBridge::new());

    roll.save_image_with_tag("img1.png").await.unwrap();
    assert_eq!(writer.deprecation_count(), 1);

    roll.save_image_with_tag("img2.png").await.unwrap();
    assert_eq!(writer.deprecation_count(), 2);
}

#[tokio::test]
async fn get_photos_never_warns() {
    let (writer, subscriber) = capture_subscriber();
    let _guard = tracing::subscriber::set_default(subscriber);
    let mock = MockBridge::new();
    let roll = CameraRoll::with_bridge(mock.clone());

    roll.get_photos(GetPhotosParams::new(10)).await.unwrap();

    assert_eq!(writer.deprecation_count(), 0);
    assert_eq!(mock.query_count().await, 1);
}

#[tokio::test]
async fn callback_form_warns_once_per_call() {
    let (writer, subscriber) = capture_subscriber();
    let _guard = tracing::subscriber::set_default(subscriber);
    let mock = MockBridge::new();
    let roll = CameraRoll::with_bridge(mock.clone());

    roll.get_photos_with_callbacks(GetPhotosParams::new(3), |_page| {}, None)
        .await
        .unwrap();

    assert_eq!(writer.deprecation_count(), 1);
}

#[tokio::test]
async fn current_save_form_never_warns() {
    let (writer, subscriber) = capture_subscriber();
    let _guard = tracing::subscriber::set_default(subscriber);
    let roll = CameraRoll::with_bridge(MockBridge::new());

    roll.save_to_camera_roll("clip.mp4", None).await.unwrap();

    assert_eq!(writer.deprecation_count(), 0);
}
