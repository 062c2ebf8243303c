// SPDX-License-Identifier: MPL-2.0

//! Main application module for Quickshot
//!
//! This module contains the application state, message handling, UI rendering,
//! and the glue between the camera, the photo pipeline and the gallery.
//!
//! # Architecture
//!
//! - `state`: Application state types (AppModel, Message, ContextPage)
//! - `camera_preview`: Camera preview surface and access prompt
//! - `controls`: Capture button
//! - `bottom_bar`: Gallery button, camera switcher
//! - `gallery_sheet`: Thumbnail grid bottom sheet
//! - `image_viewer`: Full-screen viewer with swipe navigation
//! - `settings`: Settings drawer UI
//! - `view`: Main view rendering
//! - `update`: Message handling
//!
//! # Main Types
//!
//! - `AppModel`: Main application state with camera and gallery
//! - `Message`: All possible user interactions and system events

mod bottom_bar;
mod camera_preview;
mod capture_state;
mod controls;
mod gallery_sheet;
mod handlers;
mod image_viewer;
pub mod settings;
mod state;
mod update;
mod view;

use crate::backends::camera::types::{CameraBackendType, FrameReceiver};
use crate::backends::camera::{CameraPipeline, get_backend};
use crate::config::{AppTheme, Config};
use crate::constants::{pipeline, timing};
use crate::errors::CameraError;
use crate::fl;
use crate::gallery::{GallerySequence, GalleryStore, NavigateDirection, SwipeTracker};
use cosmic::app::context_drawer;
use cosmic::cosmic_config::{self, CosmicConfigEntry};
use cosmic::iced::Subscription;
use cosmic::widget::{self, about::About};
use cosmic::{Element, Task};
pub use camera_preview::PreviewFrame;
pub use capture_state::{Applied, CaptureNotice, CaptureState, ShutterPress};
pub use state::{AppFlags, AppModel, ContextPage, Message};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, error, info, warn};

const REPOSITORY: &str = "https://github.com/quickshot-camera/quickshot";

impl cosmic::Application for AppModel {
    /// The async executor that will be used to run your application's commands.
    type Executor = cosmic::executor::Default;

    /// Data that your application receives to its init method.
    type Flags = AppFlags;

    /// Messages which the application and its widgets will emit.
    type Message = Message;

    /// Unique identifier in RDNN (reverse domain name notation) format.
    const APP_ID: &'static str = "io.github.quickshot.Quickshot";

    fn core(&self) -> &cosmic::Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut cosmic::Core {
        &mut self.core
    }

    /// Initializes the application with any given flags and startup commands.
    fn init(
        core: cosmic::Core,
        flags: Self::Flags,
    ) -> (Self, Task<cosmic::Action<Self::Message>>) {
        // Create the about widget
        let about = About::default()
            .name(fl!("app-title"))
            .icon(widget::icon::from_name(Self::APP_ID))
            .version(env!("GIT_VERSION"))
            .links([(fl!("repository"), REPOSITORY)])
            .license(env!("CARGO_PKG_LICENSE"));

        // Load configuration
        let (config_handler, config) =
            match cosmic_config::Config::new(Self::APP_ID, Config::VERSION) {
                Ok(handler) => {
                    let config = match Config::get_entry(&handler) {
                        Ok(config) => config,
                        Err((errors, config)) => {
                            error!(?errors, "Errors loading config");
                            config
                        }
                    };
                    (Some(handler), config)
                }
                Err(err) => {
                    error!(%err, "Failed to create config handler");
                    (None, Config::default())
                }
            };

        // Initialize GStreamer early (required before any GStreamer calls)
        if let Err(e) = gstreamer::init() {
            error!(error = %e, "Failed to initialize GStreamer");
        }

        if let Some(backend) = flags.backend_override {
            info!(%backend, "Backend overridden from command line");
        }

        let gallery = GalleryStore::new();
        let gallery_snapshot = gallery.snapshot();
        let mirror_flag = Arc::new(AtomicBool::new(config.mirror_preview));

        let app = AppModel {
            core,
            context_page: ContextPage::default(),
            about,
            config,
            config_handler,
            backend_override: flags.backend_override,
            permissions: Default::default(),
            available_cameras: Vec::new(),
            cameras_initialized: false,
            current_camera_index: 0,
            current_frame: None,
            preview_handle: None,
            mirror_flag,
            capture: CaptureState::default(),
            gallery,
            gallery_snapshot,
            gallery_visible: false,
            viewer: Default::default(),
            swipe: SwipeTracker::default(),
            theme_dropdown_options: AppTheme::ALL
                .iter()
                .map(|theme| match theme {
                    AppTheme::System => fl!("theme-system"),
                    AppTheme::Dark => fl!("theme-dark"),
                    AppTheme::Light => fl!("theme-light"),
                })
                .collect(),
            backend_dropdown_options: CameraBackendType::ALL
                .iter()
                .map(|backend| match backend {
                    CameraBackendType::PipeWire => fl!("backend-pipewire"),
                    CameraBackendType::TestPattern => fl!("backend-test-pattern"),
                })
                .collect(),
        };

        // Enumerate cameras and query permissions asynchronously (non-blocking)
        let init_task = Self::enumerate_cameras_task(
            app.backend_type(),
            app.config.last_camera_path.clone(),
            app.config.preferred_facing,
        );
        let permissions_task = Self::permissions_task();
        let theme_task = cosmic::command::set_theme(app.config.app_theme.theme());

        (app, Task::batch([init_task, permissions_task, theme_task]))
    }

    /// Elements to pack at the start of the header bar.
    fn header_start(&self) -> Vec<Element<'_, Self::Message>> {
        vec![]
    }

    /// Elements to pack at the end of the header bar.
    fn header_end(&self) -> Vec<Element<'_, Self::Message>> {
        vec![
            widget::button::icon(widget::icon::from_name("help-about-symbolic"))
                .on_press(Message::ToggleContextPage(ContextPage::About))
                .into(),
            widget::button::icon(widget::icon::from_name("preferences-system-symbolic"))
                .on_press(Message::ToggleContextPage(ContextPage::Settings))
                .into(),
        ]
    }

    /// Display a context drawer if the context page is requested.
    fn context_drawer(&self) -> Option<context_drawer::ContextDrawer<'_, Self::Message>> {
        if !self.core.window.show_context {
            return None;
        }

        Some(match self.context_page {
            ContextPage::About => context_drawer::about(
                &self.about,
                |url| Message::LaunchUrl(url.to_string()),
                Message::ToggleContextPage(ContextPage::About),
            ),
            ContextPage::Settings => self.settings_view(),
        })
    }

    /// Describes the interface based on the current state of the application model.
    fn view(&self) -> Element<'_, Self::Message> {
        self.view()
    }

    /// Register subscriptions for this application.
    fn subscription(&self) -> Subscription<Self::Message> {
        let config_sub = self
            .core()
            .watch_config::<Config>(Self::APP_ID)
            .map(|update| Message::UpdateConfig(update.config));

        let mut subscriptions = vec![config_sub, self.gallery_subscription()];

        if let Some(camera_sub) = self.camera_subscription() {
            subscriptions.push(camera_sub);
        }
        if self.viewer.is_open() {
            subscriptions.push(viewer_keys_subscription());
        }

        Subscription::batch(subscriptions)
    }

    /// Handles messages emitted by the application and its widgets.
    fn update(&mut self, message: Self::Message) -> Task<cosmic::Action<Self::Message>> {
        self.update(message)
    }
}

impl AppModel {
    /// Forward every new gallery snapshot to the update loop
    fn gallery_subscription(&self) -> Subscription<Message> {
        use cosmic::iced::futures::SinkExt;

        let mut receiver = self.gallery.subscribe();
        Subscription::run_with_id(
            "gallery",
            cosmic::iced::stream::channel(4, move |mut output| async move {
                while receiver.changed().await.is_ok() {
                    let sequence: GallerySequence = receiver.borrow_and_update().clone();
                    if output.send(Message::GalleryUpdated(sequence)).await.is_err() {
                        break;
                    }
                }
                info!("Gallery subscription ended");
            }),
        )
    }

    /// Run the preview pipeline for the current camera
    ///
    /// The subscription id includes the backend and device path, so switching
    /// cameras tears down the old pipeline and starts a new one.
    fn camera_subscription(&self) -> Option<Subscription<Message>> {
        use cosmic::iced::futures::StreamExt;

        if !self.camera_enabled() {
            return None;
        }
        let device = self.current_camera()?.clone();
        let backend_type = self.backend_type();
        let device_path: Arc<str> = Arc::from(device.path.as_str());
        let mirror_flag = Arc::clone(&self.mirror_flag);

        Some(Subscription::run_with_id(
            ("camera", backend_type, device.path.clone()),
            cosmic::iced::stream::channel(pipeline::FRAME_CHANNEL_CAPACITY, move |mut output| {
                async move {
                    info!(camera = %device.name, backend = %backend_type, "Camera subscription started");
                    let backend = get_backend(backend_type);
                    let mut frame_count = 0u64;

                    loop {
                        let (sender, mut receiver): (_, FrameReceiver) =
                            cosmic::iced::futures::channel::mpsc::channel(
                                pipeline::FRAME_CHANNEL_CAPACITY,
                            );

                        let pipeline = match CameraPipeline::new(backend.as_ref(), &device, sender) {
                            Ok(pipeline) => pipeline,
                            Err(e) => {
                                let e = CameraError::from(e);
                                error!(error = %e, camera = %device.name, "Failed to initialize pipeline");
                                info!("Waiting 5 seconds before retry...");
                                tokio::time::sleep(tokio::time::Duration::from_secs(5)).await;
                                continue;
                            }
                        };

                        loop {
                            if output.is_closed() {
                                info!("Output channel closed - camera subscription being cancelled");
                                drop(pipeline);
                                return;
                            }

                            // Time out periodically to notice cancellation
                            match tokio::time::timeout(
                                tokio::time::Duration::from_millis(timing::FRAME_POLL_TIMEOUT_MS),
                                receiver.next(),
                            )
                            .await
                            {
                                Ok(Some(frame)) => {
                                    frame_count += 1;
                                    let mirror = mirror_flag.load(Ordering::Relaxed);
                                    let path = Arc::clone(&device_path);
                                    let preview = match tokio::task::spawn_blocking(move || {
                                        PreviewFrame::prepare(path, frame, mirror)
                                    })
                                    .await
                                    {
                                        Ok(Ok(preview)) => preview,
                                        Ok(Err(e)) => {
                                            debug!(error = %e, "Skipping malformed preview frame");
                                            continue;
                                        }
                                        Err(e) => {
                                            warn!(error = %e, "Preview conversion task failed");
                                            continue;
                                        }
                                    };
                                    // Dropping frames is fine for live preview - we want the latest frame
                                    if let Err(e) = output.try_send(Message::CameraFrame(preview)) {
                                        if e.is_disconnected() {
                                            info!("Output channel disconnected - camera subscription being cancelled");
                                            drop(pipeline);
                                            return;
                                        }
                                        if frame_count % timing::FRAME_LOG_INTERVAL == 0 {
                                            warn!(frame = frame_count, "Frame dropped (UI channel full)");
                                        }
                                    }
                                }
                                Ok(None) => {
                                    warn!("Camera frame stream ended, restarting pipeline");
                                    break;
                                }
                                Err(_) => continue,
                            }
                        }

                        info!("Cleaning up camera pipeline");
                        drop(pipeline);
                        tokio::time::sleep(tokio::time::Duration::from_secs(1)).await;
                    }
                }
            }),
        ))
    }
}

/// Arrow keys step through photos and Escape closes the viewer
fn viewer_keys_subscription() -> Subscription<Message> {
    use cosmic::iced::event::{self, Event};
    use cosmic::iced::keyboard::{self, Key, key::Named};

    event::listen_with(|event, status, _window| {
        if matches!(status, event::Status::Captured) {
            return None;
        }
        match event {
            Event::Keyboard(keyboard::Event::KeyPressed {
                key: Key::Named(named),
                ..
            }) => match named {
                Named::ArrowLeft => Some(Message::NavigateViewer(NavigateDirection::Previous)),
                Named::ArrowRight => Some(Message::NavigateViewer(NavigateDirection::Next)),
                Named::Escape => Some(Message::DismissViewer),
                _ => None,
            },
            _ => None,
        }
    })
}
