// SPDX-License-Identifier: MPL-2.0

//! Quickshot - A pocket camera for the COSMIC desktop environment
//!
//! This library provides the core functionality for the Quickshot application:
//! live preview, still capture, and an in-memory gallery with a full-screen viewer.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`app`]: Main application logic and UI
//! - [`backends`]: Camera, audio and permission backends
//! - [`pipelines`]: Photo capture pipeline
//! - [`gallery`]: Session gallery store, viewer state and swipe recognition
//! - [`config`]: User configuration handling
//!
//! # Example
//!
//! ```ignore
//! // This is a GUI application, typically run via:
//! // quickshot
//! ```

pub mod app;
pub mod backends;
pub mod config;
pub mod constants;
pub mod errors;
pub mod gallery;
pub mod i18n;
pub mod pipelines;

// Re-export commonly used types
pub use app::{AppModel, Message};
pub use config::Config;
pub use gallery::{CaptureId, CapturedImage, GallerySequence, GalleryStore, ViewerState};
