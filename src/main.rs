use eframe::egui;

mod app;

use app::CloudApp;

/// Endpoint used when neither a CLI argument nor the environment names one.
const DEFAULT_ENDPOINT: &str = "http://localhost:3000/api/tags";

fn main() {
    env_logger::init();

    let endpoint = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("TAGCLOUD_ENDPOINT").ok())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
    log::info!("polling tag source at {}", endpoint);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1280.0, 800.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Tag Cloud — live workshop feedback",
        options,
        Box::new(move |_cc| Ok(Box::new(CloudApp::new(endpoint)))),
    )
    .expect("Failed to start tag cloud viewer");
}
