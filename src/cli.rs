// SPDX-License-Identifier: GPL-3.0-only

//! CLI commands for camera operations
//!
//! This module provides command-line functionality for:
//! - Listing available cameras
//! - Checking camera and microphone access

use quickshot::backends::camera::types::{BackendError, CameraBackendType, CameraDevice};
use quickshot::backends::camera::get_backend;
use quickshot::backends::permissions;
use quickshot::errors::{AppError, AppResult, CameraError};
use serde::Serialize;

/// Camera entry as printed by `quickshot list --json`
#[derive(Debug, Serialize)]
struct CameraListing<'a> {
    index: usize,
    name: &'a str,
    path: &'a str,
    facing: String,
    rotation: u32,
}

impl<'a> CameraListing<'a> {
    fn new(index: usize, camera: &'a CameraDevice) -> Self {
        Self {
            index,
            name: &camera.name,
            path: &camera.path,
            facing: camera.facing.to_string(),
            rotation: camera.rotation.degrees(),
        }
    }
}

/// List all available cameras
pub fn list_cameras(backend_type: CameraBackendType, json: bool) -> AppResult<()> {
    init_gstreamer()?;

    let backend = get_backend(backend_type);
    if !backend.is_available() {
        let err = BackendError::NotAvailable(format!("{} backend is not available", backend_type));
        return Err(CameraError::from(err).into());
    }
    let cameras = backend.enumerate_cameras();

    if json {
        let listing: Vec<CameraListing<'_>> = cameras
            .iter()
            .enumerate()
            .map(|(index, camera)| CameraListing::new(index, camera))
            .collect();
        let text = serde_json::to_string_pretty(&listing)
            .map_err(|e| AppError::Other(format!("Failed to encode camera list: {}", e)))?;
        println!("{}", text);
        return Ok(());
    }

    if cameras.is_empty() {
        println!("No cameras found.");
        return Ok(());
    }

    println!("Available cameras ({}):", backend_type);
    println!();
    for (index, camera) in cameras.iter().enumerate() {
        println!("  [{}] {}", index, camera.name);
        println!("      Path: {}", camera.path);
        println!("      Facing: {}, rotation: {}", camera.facing, camera.rotation);
        println!();
    }

    Ok(())
}

/// Print camera and microphone access status
pub fn check_permissions() -> AppResult<()> {
    init_gstreamer()?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| AppError::Other(format!("Failed to start async runtime: {}", e)))?;
    let permissions = runtime.block_on(permissions::query_permissions());

    println!(
        "Sandboxed:  {}",
        if permissions::is_sandboxed() { "yes" } else { "no" }
    );
    println!("Camera:     {:?}", permissions.camera);
    println!("Microphone: {:?}", permissions.microphone);
    println!(
        "Video:      {}",
        if permissions.video_capable() {
            "available"
        } else {
            "unavailable"
        }
    );
    Ok(())
}

fn init_gstreamer() -> AppResult<()> {
    gstreamer::init().map_err(|e| CameraError::InitializationFailed(e.to_string()))?;
    Ok(())
}
