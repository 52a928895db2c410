#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use qrview_business::{INITIAL_WINDOW_HEIGHT, INITIAL_WINDOW_WIDTH};
use qrview_ui::QrViewApp;
use qrview_ui::state::State;

mod alloc {
    #[global_allocator]
    static MALLOC: mimalloc::MiMalloc = mimalloc::MiMalloc;
}

fn main() -> eframe::Result {
    // Log to stderr (if you run with `RUST_LOG=debug`).
    env_logger::init();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("qrview")
            .with_inner_size([INITIAL_WINDOW_WIDTH, INITIAL_WINDOW_HEIGHT])
            .with_min_inner_size([480.0, 360.0]),
        ..Default::default()
    };

    eframe::run_native(
        "qrview",
        native_options,
        Box::new(|_cc| Ok(Box::new(QrViewApp::new(State::default())))),
    )
}
