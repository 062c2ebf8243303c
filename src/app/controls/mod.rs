// SPDX-License-Identifier: MPL-2.0

//! Capture controls module
//!
//! This module handles UI components for still capture:
//! - Capture button

pub mod capture_button;
