#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use ideadash::app::startup;
use ideadash::log_info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    startup::setup_panic_handler();
    startup::init_logging("ideadash-intro");

    log_info!(
        "ideadash-intro {} starting ({} {})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_BRANCH"),
        env!("GIT_COMMIT")
    );

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([640.0, 760.0])
            .with_min_inner_size([420.0, 520.0]),
        ..Default::default()
    };

    eframe::run_native(
        "AI 자기소개서 생성기",
        native_options,
        Box::new(|cc| Ok(Box::new(ideadash::IntroDashApp::new(cc)))),
    )?;

    Ok(())
}
