// SPDX-License-Identifier: GPL-3.0-only

use clap::{Parser, Subcommand};
use quickshot::app::{AppFlags, AppModel};
use quickshot::backends::camera::types::CameraBackendType;
use quickshot::i18n;

mod cli;

#[derive(Parser)]
#[command(name = "quickshot")]
#[command(about = "Pocket camera with an in-session photo gallery for the COSMIC desktop")]
#[command(version)]
#[command(subcommand_required = false)]
struct Cli {
    /// Use a synthetic test pattern instead of a real camera
    #[arg(long, global = true)]
    test_pattern: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List available cameras
    List {
        /// Print the camera list as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show camera and microphone access status
    Permissions,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    // Set RUST_LOG environment variable to control log level
    // Examples: RUST_LOG=debug, RUST_LOG=quickshot=debug, RUST_LOG=info
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(true)
        .with_level(true)
        .init();

    let cli = Cli::parse();
    let backend_override = cli.test_pattern.then_some(CameraBackendType::TestPattern);

    match cli.command {
        Some(Commands::List { json }) => {
            Ok(cli::list_cameras(backend_override.unwrap_or_default(), json)?)
        }
        Some(Commands::Permissions) => Ok(cli::check_permissions()?),
        None => run_gui(AppFlags { backend_override }),
    }
}

fn run_gui(flags: AppFlags) -> Result<(), Box<dyn std::error::Error>> {
    // Get the system's preferred languages.
    let requested_languages = i18n_embed::DesktopLanguageRequester::requested_languages();

    // Enable localizations to be applied.
    i18n::init(&requested_languages);

    // Settings for configuring the application window and iced runtime.
    let settings = cosmic::app::Settings::default().size_limits(
        cosmic::iced::Limits::NONE
            .min_width(360.0)
            .min_height(480.0),
    );

    cosmic::app::run::<AppModel>(settings, flags)?;

    Ok(())
}
