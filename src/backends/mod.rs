// SPDX-License-Identifier: MPL-2.0

//! Backend abstraction layer for camera access
//!
//! This module wraps everything the app needs from the platform:
//! - Camera enumeration and live frames via GStreamer
//! - Audio source discovery (gates the video capability flag)
//! - Camera access permission via the XDG desktop portal
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                  App Layer                   │
//! └────────────────────┬────────────────────────┘
//!                      │
//! ┌────────────────────┴────────────────────────┐
//! │              Backend Layer                   │
//! │  ┌─────────────┐  ┌────────┐  ┌──────────┐  │
//! │  │   Camera    │  │ Audio  │  │  Portal  │  │
//! │  │ (GStreamer) │  │        │  │  (zbus)  │  │
//! │  └─────────────┘  └────────┘  └──────────┘  │
//! └─────────────────────────────────────────────┘
//! ```

pub mod audio;
pub mod camera;
pub mod permissions;
