//! Application for the `ideadash-intro` binary: the cover-letter generator.

use egui::{Context, RichText, ScrollArea, Ui};

use crate::app::bedrock_client::{BedrockApiClient, GenerationError};
use crate::app::generation;
use crate::app::prompt::IntroInput;
use crate::{log_error, log_info};

use super::{show_status, GenerationStatus};

pub struct IntroDashApp {
    bedrock: BedrockApiClient,
    input: IntroInput,
    status: GenerationStatus,
    result: Option<String>,
    pending: bool,
}

impl Default for IntroDashApp {
    fn default() -> Self {
        Self {
            bedrock: BedrockApiClient::default(),
            input: IntroInput::default(),
            status: GenerationStatus::Idle,
            result: None,
            pending: false,
        }
    }
}

impl IntroDashApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Validate the form, then schedule the generation for the next frame so
    /// the busy spinner is on screen while the call blocks.
    fn request_generation(&mut self, ctx: &Context) {
        if !self.input.is_complete() {
            self.status = GenerationStatus::Error("모든 필드를 입력해 주세요!".to_string());
            return;
        }

        self.status = GenerationStatus::Loading;
        self.pending = true;
        ctx.request_repaint();
    }

    fn generate(&mut self) {
        if !self.bedrock.is_initialized() {
            if let Err(e) = self.bedrock.initialize() {
                log_error!("Bedrock client initialization failed: {}", e);
                self.status = GenerationStatus::Error(
                    GenerationError::ClientUnavailable.user_message("자기소개서 생성"),
                );
                return;
            }
        }

        match generation::generate_introduction(&self.bedrock, &self.input) {
            Ok(content) => {
                log_info!("Cover letter generated, {} chars", content.chars().count());
                self.result = Some(content);
                self.status = GenerationStatus::Idle;
            }
            Err(e) => {
                log_error!("Cover letter generation failed: {}", e);
                self.status = GenerationStatus::Error(e.user_message("자기소개서 생성"));
            }
        }
    }

    fn form(&mut self, ui: &mut Ui) {
        ui.heading("📝 정보 입력");
        ui.add_space(8.0);

        ui.label("이름");
        ui.add(
            egui::TextEdit::singleline(&mut self.input.name).desired_width(f32::INFINITY),
        );
        ui.add_space(4.0);

        ui.label("전공");
        ui.add(
            egui::TextEdit::singleline(&mut self.input.major).desired_width(f32::INFINITY),
        );
        ui.add_space(4.0);

        ui.label("취미");
        ui.add(
            egui::TextEdit::singleline(&mut self.input.hobby).desired_width(f32::INFINITY),
        );
        ui.add_space(4.0);

        ui.label("경험/활동");
        ui.add(
            egui::TextEdit::multiline(&mut self.input.experiences)
                .desired_rows(3)
                .desired_width(f32::INFINITY),
        );
        ui.add_space(4.0);

        ui.label("희망 직무");
        ui.add(
            egui::TextEdit::singleline(&mut self.input.target_job).desired_width(f32::INFINITY),
        );

        ui.add_space(10.0);

        let generate_button = egui::Button::new(RichText::new("🤖 자기소개서 생성하기").strong())
            .min_size(egui::vec2(200.0, 32.0))
            .fill(ui.visuals().selection.bg_fill);
        if ui.add(generate_button).clicked() {
            let ctx = ui.ctx().clone();
            self.request_generation(&ctx);
        }

        show_status(ui, &self.status, "생성 중...");

        if let Some(result) = &self.result {
            ui.separator();
            ui.heading("📋 생성된 자기소개서");
            ui.add_space(4.0);
            ui.label(result.as_str());
        }

        ui.separator();
        ui.label("💡 AWS Bedrock Nova Lite 모델을 사용한 AI 자기소개서 생성기입니다.");
    }
}

impl eframe::App for IntroDashApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // Run work scheduled last frame; the Loading spinner is already painted.
        if self.pending {
            self.pending = false;
            self.generate();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("🤖 AI 자기소개서 생성기");
            ui.add_space(6.0);
            ui.separator();

            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| self.form(ui));
        });
    }
}
