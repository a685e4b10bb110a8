//! egui user interfaces for the two binaries.
//!
//! - [`idea_app::IdeaDashApp`] - hackathon idea generator with the PRD tab
//! - [`intro_app::IntroDashApp`] - cover-letter generator
//!
//! Each user action triggers one synchronous call chain. The generate
//! handlers schedule the blocking call for the following frame, so the busy
//! status paints once before the remote call freezes the interaction.

use egui::{Color32, RichText, Ui};

pub mod idea_app;
pub mod intro_app;

pub use idea_app::IdeaDashApp;
pub use intro_app::IntroDashApp;

/// Status of the current generation interaction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GenerationStatus {
    #[default]
    Idle,
    Loading,
    Error(String),
}

/// Render the status line under a generate button.
pub(crate) fn show_status(ui: &mut Ui, status: &GenerationStatus, busy_label: &str) {
    match status {
        GenerationStatus::Idle => {}
        GenerationStatus::Loading => {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(RichText::new(busy_label).italics());
            });
        }
        GenerationStatus::Error(err) => {
            ui.add_space(4.0);
            ui.colored_label(Color32::RED, RichText::new(err).strong());
        }
    }
}
