// SPDX-License-Identifier: MPL-2.0

//! Processing pipelines for captured media
//!
//! Heavy work runs in background tasks so the live preview stays smooth.
//!
//! ```text
//! ┌──────────────┐     ┌───────────────────┐     ┌──────────────┐
//! │ Camera Frame │ ──▶ │  Photo Pipeline   │ ──▶ │   Gallery    │
//! │   (RGBA)     │     │  - Row packing    │     │  (in memory) │
//! │              │     │  - Rotation       │     │              │
//! └──────────────┘     └───────────────────┘     └──────────────┘
//! ```
//!
//! # Modules
//!
//! - [`photo`]: Async still capture with orientation correction

pub mod photo;
