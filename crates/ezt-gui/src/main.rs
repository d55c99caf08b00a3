//! Eszip Studio - desktop eszip archive viewer.
//!
//! Drop or pick an eszip archive and browse the module sources it contains.
//! Built with Iced 0.14 using the Elm architecture (State, Message, Update,
//! View).

use clap::Parser;
use iced::window;
use iced::Size;

use ezt_gui::app::App;

/// Command line arguments.
///
/// The viewer is otherwise driven entirely through the window; the only flag
/// is the auto-download trigger.
#[derive(Debug, Parser)]
#[command(name = "eszip-studio", version, about = "Browse the modules inside an eszip archive")]
struct Args {
    /// Download an archive from this URL on startup instead of waiting for a
    /// file drop.
    #[arg(long, value_name = "URL")]
    download_from: Option<String>,
}

/// Application entry point.
pub fn main() -> iced::Result {
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("Starting Eszip Studio");

    let download_from = args.download_from;

    // Run the Iced application using the builder pattern
    iced::application(
        move || App::new(download_from.clone()),
        App::update,
        App::view,
    )
    .title(App::title)
    .theme(App::theme)
    .subscription(App::subscription)
    .window(window::Settings {
        size: Size::new(1100.0, 720.0),
        min_size: Some(Size::new(800.0, 520.0)),
        ..Default::default()
    })
    .run()
}
