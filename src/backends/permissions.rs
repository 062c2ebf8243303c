// SPDX-License-Identifier: GPL-3.0-only

//! Camera and microphone access status
//!
//! Unsandboxed desktop apps have no per-app camera permission, so access is
//! granted implicitly. Inside Flatpak the camera goes through the XDG camera portal
//! (`org.freedesktop.portal.Camera.AccessCamera`), which may show a prompt.
//! Microphone availability only gates the video capability flag and is derived
//! from the presence of an audio source.

use crate::errors::{AppError, AppResult};
use futures::StreamExt;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info, warn};
use zbus::zvariant::{OwnedObjectPath, OwnedValue, Value};

const PORTAL_DESTINATION: &str = "org.freedesktop.portal.Desktop";
const PORTAL_PATH: &str = "/org/freedesktop/portal/desktop";
const CAMERA_INTERFACE: &str = "org.freedesktop.portal.Camera";
const REQUEST_INTERFACE: &str = "org.freedesktop.portal.Request";

/// Outcome of a permission query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PermissionStatus {
    /// Not queried yet
    #[default]
    Unknown,
    Granted,
    Denied,
}

impl PermissionStatus {
    pub fn is_granted(&self) -> bool {
        matches!(self, PermissionStatus::Granted)
    }
}

/// Access status for the devices the app uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Permissions {
    pub camera: PermissionStatus,
    pub microphone: PermissionStatus,
}

impl Permissions {
    /// Whether the video capture capability can be enabled
    pub fn video_capable(&self) -> bool {
        self.camera.is_granted() && self.microphone.is_granted()
    }
}

/// Check if running inside a Flatpak sandbox
pub fn is_sandboxed() -> bool {
    Path::new("/.flatpak-info").exists()
}

/// Query camera and microphone access
///
/// Never fails: portal errors are logged and reported as `Denied`.
pub async fn query_permissions() -> Permissions {
    let camera = if is_sandboxed() {
        match request_camera_access().await {
            Ok(true) => PermissionStatus::Granted,
            Ok(false) => {
                info!("Camera access denied through portal");
                PermissionStatus::Denied
            }
            Err(e) => {
                warn!(error = %e, "Camera portal request failed");
                PermissionStatus::Denied
            }
        }
    } else {
        PermissionStatus::Granted
    };

    let microphone = tokio::task::spawn_blocking(crate::backends::audio::enumerate_audio_devices)
        .await
        .map(|devices| match devices.first() {
            Some(device) => {
                debug!(source = %device.name, count = devices.len(), "Microphone available");
                PermissionStatus::Granted
            }
            None => PermissionStatus::Denied,
        })
        .unwrap_or(PermissionStatus::Denied);

    let permissions = Permissions { camera, microphone };
    info!(?permissions, "Permissions resolved");
    permissions
}

/// Ask the camera portal for access and wait for the user's answer
async fn request_camera_access() -> AppResult<bool> {
    let connection = zbus::Connection::session()
        .await
        .map_err(portal_error("Failed to connect to session D-Bus"))?;

    let camera_proxy = zbus::Proxy::new(
        &connection,
        PORTAL_DESTINATION,
        PORTAL_PATH,
        CAMERA_INTERFACE,
    )
    .await
    .map_err(portal_error("Failed to create camera portal proxy"))?;

    let present: bool = camera_proxy
        .get_property("IsCameraPresent")
        .await
        .map_err(portal_error("Failed to read IsCameraPresent"))?;
    if !present {
        info!("Camera portal reports no camera present");
        return Ok(false);
    }

    // Subscribe to the request object before calling so the response cannot be missed
    let sender = connection
        .unique_name()
        .map(|name| name.trim_start_matches(':').replace('.', "_"))
        .ok_or_else(|| AppError::Permission("D-Bus connection has no unique name".into()))?;
    let token = format!("quickshot_{}", std::process::id());
    let request_path = request_object_path(&sender, &token);

    let request_proxy = zbus::Proxy::new(
        &connection,
        PORTAL_DESTINATION,
        request_path.as_str(),
        REQUEST_INTERFACE,
    )
    .await
    .map_err(portal_error("Failed to create request proxy"))?;
    let mut responses = request_proxy
        .receive_signal("Response")
        .await
        .map_err(portal_error("Failed to subscribe to portal response"))?;

    let mut options: HashMap<&str, Value> = HashMap::new();
    options.insert("handle_token", Value::new(token.as_str()));
    let handle: OwnedObjectPath = camera_proxy
        .call("AccessCamera", &(options,))
        .await
        .map_err(portal_error("AccessCamera failed"))?;
    info!(handle = %handle, "Camera access requested");

    let message = responses
        .next()
        .await
        .ok_or_else(|| AppError::Permission("Portal closed without a response".into()))?;
    let (response, _results): (u32, HashMap<String, OwnedValue>) = message
        .body()
        .deserialize()
        .map_err(portal_error("Malformed portal response"))?;

    Ok(response == 0)
}

fn portal_error<E: std::fmt::Display>(context: &'static str) -> impl Fn(E) -> AppError {
    move |e| AppError::Permission(format!("{}: {}", context, e))
}

/// Object path the portal uses for a request created with `token`
fn request_object_path(sender: &str, token: &str) -> String {
    format!("{}/request/{}/{}", PORTAL_PATH, sender, token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_path_follows_portal_convention() {
        assert_eq!(
            request_object_path("1_42", "quickshot_7"),
            "/org/freedesktop/portal/desktop/request/1_42/quickshot_7"
        );
    }

    #[test]
    fn video_capability_needs_both_devices() {
        let granted = Permissions {
            camera: PermissionStatus::Granted,
            microphone: PermissionStatus::Granted,
        };
        assert!(granted.video_capable());

        let no_mic = Permissions {
            microphone: PermissionStatus::Denied,
            ..granted
        };
        assert!(!no_mic.video_capable());
        assert!(!Permissions::default().video_capable());
    }
}
