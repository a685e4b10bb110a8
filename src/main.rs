#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use ideadash::app::startup;
use ideadash::log_info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Panic handler first so early crashes still leave a crash log
    startup::setup_panic_handler();
    startup::init_logging("ideadash");

    log_info!(
        "ideadash {} starting ({} {})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_BRANCH"),
        env!("GIT_COMMIT")
    );

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([760.0, 920.0])
            .with_min_inner_size([480.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "리빙랩 해커톤 아이디어 생성기",
        native_options,
        Box::new(|cc| Ok(Box::new(ideadash::IdeaDashApp::new(cc)))),
    )?;

    Ok(())
}
