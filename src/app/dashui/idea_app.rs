//! Main application for the `ideadash` binary: the hackathon idea generator
//! with its PRD derivation tab.

use egui::{Color32, Context, RichText, ScrollArea, Ui};
use egui_commonmark::{CommonMarkCache, CommonMarkViewer};

use crate::app::bedrock_client::{BedrockApiClient, GenerationError};
use crate::app::generation;
use crate::app::length_profile::IdeaLength;
use crate::app::prd_export;
use crate::app::prompt::IdeaInput;
use crate::app::session::SessionContext;
use crate::{log_error, log_info};

use super::{show_status, GenerationStatus};

/// Fixed selectbox options for the problem area field.
pub const PROBLEM_AREAS: [&str; 11] = [
    "환경 보호",
    "에너지 효율",
    "폐기물 관리",
    "지속가능한 농업",
    "스마트 시티",
    "기후 변화 대응",
    "순환 경제",
    "친환경 교통",
    "수자원 관리",
    "생물 다양성 보전",
    "기타",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Idea,
    Prd,
}

/// Where the PRD tab takes its idea text from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PrdSource {
    Manual,
    FromIdeaTab,
}

/// Blocking work scheduled for the next frame, so the Loading status gets one
/// painted frame before the synchronous call freezes the UI.
#[derive(Debug, Clone)]
enum PendingAction {
    GenerateIdea,
    GeneratePrd(String),
}

pub struct IdeaDashApp {
    bedrock: BedrockApiClient,
    session: SessionContext,
    active_tab: Tab,
    // Idea tab
    idea_input: IdeaInput,
    idea_length: IdeaLength,
    debug_mode: bool,
    idea_status: GenerationStatus,
    // PRD tab
    prd_source: PrdSource,
    manual_idea: String,
    prd_status: GenerationStatus,
    save_feedback: Option<Result<std::path::PathBuf, String>>,
    pending: Option<PendingAction>,
    markdown_cache: CommonMarkCache,
}

impl Default for IdeaDashApp {
    fn default() -> Self {
        Self {
            bedrock: BedrockApiClient::default(),
            session: SessionContext::new(),
            active_tab: Tab::Idea,
            idea_input: IdeaInput {
                problem_area: PROBLEM_AREAS[0].to_string(),
                ..Default::default()
            },
            idea_length: IdeaLength::default(),
            debug_mode: false,
            idea_status: GenerationStatus::Idle,
            prd_source: PrdSource::Manual,
            manual_idea: String::new(),
            prd_status: GenerationStatus::Idle,
            save_feedback: None,
            pending: None,
            markdown_cache: CommonMarkCache::default(),
        }
    }
}

impl IdeaDashApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Lazily initialize the Bedrock client, once, before the first call.
    fn ensure_client(&mut self) -> bool {
        if self.bedrock.is_initialized() {
            return true;
        }
        match self.bedrock.initialize() {
            Ok(()) => true,
            Err(e) => {
                log_error!("Bedrock client initialization failed: {}", e);
                false
            }
        }
    }

    /// Validate the form, then schedule the generation for the next frame so
    /// the busy spinner is on screen while the call blocks.
    fn request_idea_generation(&mut self, ctx: &Context) {
        if !self.idea_input.is_complete() {
            self.idea_status = GenerationStatus::Error("모든 필드를 입력해 주세요!".to_string());
            return;
        }

        self.idea_status = GenerationStatus::Loading;
        self.pending = Some(PendingAction::GenerateIdea);
        ctx.request_repaint();
    }

    fn request_prd_generation(&mut self, ctx: &Context, idea_content: String) {
        if idea_content.trim().is_empty() {
            self.prd_status =
                GenerationStatus::Error("❌ 아이디어 내용을 입력해주세요!".to_string());
            return;
        }

        self.prd_status = GenerationStatus::Loading;
        self.pending = Some(PendingAction::GeneratePrd(idea_content));
        ctx.request_repaint();
    }

    fn generate_idea(&mut self) {
        if !self.ensure_client() {
            self.idea_status = GenerationStatus::Error(
                GenerationError::ClientUnavailable.user_message("해커톤 아이디어 생성"),
            );
            return;
        }

        match generation::generate_hackathon_idea(&self.bedrock, &self.idea_input, self.idea_length)
        {
            Ok(reply) => {
                log_info!("Idea generated, {} chars", reply.content.chars().count());
                self.session.store_idea(reply, self.idea_length);
                self.idea_status = GenerationStatus::Idle;
            }
            Err(e) => {
                log_error!("Idea generation failed: {}", e);
                self.idea_status =
                    GenerationStatus::Error(e.user_message("해커톤 아이디어 생성"));
            }
        }
    }

    fn generate_prd(&mut self, idea_content: &str) {
        if !self.ensure_client() {
            self.prd_status =
                GenerationStatus::Error(GenerationError::ClientUnavailable.user_message("PRD 생성"));
            return;
        }

        match generation::generate_streamlit_prd(&self.bedrock, idea_content) {
            Ok(content) => {
                log_info!("PRD generated, {} chars", content.chars().count());
                self.session.store_prd(content);
                self.prd_status = GenerationStatus::Idle;
                self.save_feedback = None;
            }
            Err(e) => {
                log_error!("PRD generation failed: {}", e);
                self.prd_status = GenerationStatus::Error(e.user_message("PRD 생성"));
            }
        }
    }

    fn idea_tab(&mut self, ui: &mut Ui) {
        ui.heading("💡 아이디어 핵심 요소 입력");
        ui.add_space(8.0);

        egui::ComboBox::from_label("🌍 문제 영역")
            .selected_text(self.idea_input.problem_area.clone())
            .show_ui(ui, |ui| {
                for area in PROBLEM_AREAS {
                    ui.selectable_value(&mut self.idea_input.problem_area, area.to_string(), area);
                }
            });

        ui.add_space(6.0);
        ui.label("🎯 해결하고자 하는 구체적인 문제");
        ui.add(
            egui::TextEdit::multiline(&mut self.idea_input.target_problem)
                .hint_text("예: 음식물 쓰레기 증가로 인한 환경 오염과 자원 낭비 문제")
                .desired_rows(3)
                .desired_width(f32::INFINITY),
        );

        ui.add_space(6.0);
        ui.label("🤖 활용할 AI 기술");
        ui.add(
            egui::TextEdit::singleline(&mut self.idea_input.ai_technology)
                .hint_text("예: 컴퓨터 비전, 자연어 처리, 머신러닝 예측 모델")
                .desired_width(f32::INFINITY),
        );

        ui.add_space(6.0);
        ui.label("👥 타겟 사용자");
        ui.add(
            egui::TextEdit::singleline(&mut self.idea_input.target_users)
                .hint_text("예: 일반 가정, 식당 운영자, 지자체")
                .desired_width(f32::INFINITY),
        );

        ui.add_space(6.0);
        ui.label("🎊 기대하는 지속가능성 효과");
        ui.add(
            egui::TextEdit::multiline(&mut self.idea_input.expected_impact)
                .hint_text("예: 음식물 쓰레기 30% 감소, CO2 배출량 저감, 자원 순환 촉진")
                .desired_rows(3)
                .desired_width(f32::INFINITY),
        );

        ui.separator();

        ui.horizontal(|ui| {
            egui::ComboBox::from_label("📏 아이디어 생성 범위")
                .selected_text(self.idea_length.label())
                .show_ui(ui, |ui| {
                    for length in IdeaLength::ALL {
                        ui.selectable_value(&mut self.idea_length, length, length.label());
                    }
                });

            ui.checkbox(&mut self.debug_mode, "🔍 디버깅 모드")
                .on_hover_text("AI 응답 분석 정보를 표시합니다");
        });

        let (pace, chars, desc) = self.idea_length.summary();
        ui.horizontal(|ui| {
            ui.label(RichText::new(pace).strong());
            ui.label(format!("📝 {}", chars));
            ui.label(format!("💡 {}", desc));
        });

        ui.add_space(8.0);

        let generate_button = egui::Button::new(RichText::new("🚀 해커톤 아이디어 생성하기").strong())
            .min_size(egui::vec2(220.0, 32.0))
            .fill(ui.visuals().selection.bg_fill);
        if ui.add(generate_button).clicked() {
            let ctx = ui.ctx().clone();
            self.request_idea_generation(&ctx);
        }

        show_status(
            ui,
            &self.idea_status,
            "AI가 혁신적인 아이디어를 생성하고 있습니다...",
        );

        if let Some(idea) = self.session.current_idea.clone() {
            ui.separator();
            ui.horizontal(|ui| {
                ui.heading("📋 생성된 해커톤 아이디어");
                ui.label(RichText::new(format!("📏 {}", idea.length.badge())).weak());
            });

            let content_length = idea.content.chars().count();
            ui.label(
                RichText::new(format!("📊 실제 생성된 글자 수: {}자", content_length))
                    .weak()
                    .small(),
            );

            if self.debug_mode {
                let profile = idea.length.profile();
                ui.label(
                    RichText::new(format!(
                        "응답 종료 이유: {} / 요청한 최대 토큰: {} / 목표 글자 수: {}자 / 생성 시각: {}",
                        idea.stop.as_str(),
                        idea.requested_ceiling,
                        profile.char_limit,
                        idea.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
                    ))
                    .weak()
                    .small(),
                );
            }

            ui.add_space(4.0);
            CommonMarkViewer::new().show(ui, &mut self.markdown_cache, &idea.content);

            ui.separator();
            if ui.button("🔄 새 아이디어 생성").clicked() {
                self.session.clear_idea();
                self.idea_status = GenerationStatus::Idle;
            }
        }

        ui.separator();
        ui.label("🌱 지속가능한 세상을 위한 혁신적인 AI 솔루션 아이디어를 만들어보세요! AWS Bedrock Nova Lite가 도와드립니다.");
    }

    fn prd_tab(&mut self, ui: &mut Ui) {
        ui.heading("📋 간단한 Streamlit 앱 PRD 생성");
        ui.add_space(8.0);

        ui.label("📥 아이디어 입력 방식");
        ui.horizontal(|ui| {
            ui.radio_value(&mut self.prd_source, PrdSource::Manual, "직접 입력");
            ui.radio_value(
                &mut self.prd_source,
                PrdSource::FromIdeaTab,
                "아이디어 생성 탭에서 가져오기",
            );
        });
        ui.add_space(6.0);

        let idea_content: Option<String> = match self.prd_source {
            PrdSource::FromIdeaTab => {
                if let Some(idea) = self.session.current_idea.clone() {
                    ui.label(RichText::new("📝 가져온 아이디어").strong());
                    ui.collapsing("생성된 아이디어 내용 보기", |ui| {
                        CommonMarkViewer::new().show(ui, &mut self.markdown_cache, &idea.content);
                    });
                    Some(idea.content)
                } else {
                    ui.colored_label(
                        Color32::YELLOW,
                        "⚠️ 아이디어 생성 탭에서 먼저 아이디어를 생성해주세요.",
                    );
                    None
                }
            }
            PrdSource::Manual => {
                ui.label("💡 해커톤 아이디어 내용");
                ui.add(
                    egui::TextEdit::multiline(&mut self.manual_idea)
                        .hint_text("생성된 해커톤 아이디어를 여기에 붙여넣어 주세요...")
                        .desired_rows(8)
                        .desired_width(f32::INFINITY),
                );
                Some(self.manual_idea.clone())
            }
        };

        ui.separator();

        let generate_button = egui::Button::new(RichText::new("📋 간단한 PRD 생성하기").strong())
            .min_size(egui::vec2(200.0, 32.0))
            .fill(ui.visuals().selection.bg_fill);
        if ui.add(generate_button).clicked() {
            let ctx = ui.ctx().clone();
            self.request_prd_generation(&ctx, idea_content.unwrap_or_default());
        }

        show_status(
            ui,
            &self.prd_status,
            "간단한 Streamlit 앱 PRD를 생성하고 있습니다...",
        );

        if let Some(prd) = self.session.current_prd.clone() {
            ui.separator();
            ui.heading("📋 생성된 PRD");
            ui.add_space(4.0);
            egui::CollapsingHeader::new("PRD 내용 보기")
                .default_open(true)
                .show(ui, |ui| {
                    CommonMarkViewer::new().show(ui, &mut self.markdown_cache, &prd);
                });

            ui.add_space(8.0);
            if ui.button("💾 MD 파일로 저장").clicked() {
                self.save_feedback =
                    Some(match prd_export::save_prd_to_markdown(&prd, None) {
                        Ok(path) => Ok(path),
                        Err(e) => Err(e.to_string()),
                    });
            }

            match &self.save_feedback {
                Some(Ok(path)) => {
                    ui.colored_label(Color32::GREEN, "✅ PRD가 저장되었습니다!");
                    ui.label(format!("📁 저장 위치: {}", path.display()));
                }
                Some(Err(err)) => {
                    ui.colored_label(Color32::RED, format!("❌ 저장 실패: {}", err));
                }
                None => {}
            }
        }
    }
}

impl eframe::App for IdeaDashApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // Run work scheduled last frame; the Loading spinner is already painted.
        if let Some(action) = self.pending.take() {
            match action {
                PendingAction::GenerateIdea => self.generate_idea(),
                PendingAction::GeneratePrd(content) => self.generate_prd(&content),
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("🌱 AI × 지속가능성 리빙랩 해커톤 아이디어 생성기");
            ui.add_space(6.0);

            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.active_tab, Tab::Idea, "💡 아이디어 생성");
                ui.selectable_value(&mut self.active_tab, Tab::Prd, "📋 PRD 생성");
            });
            ui.separator();

            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| match self.active_tab {
                    Tab::Idea => self.idea_tab(ui),
                    Tab::Prd => self.prd_tab(ui),
                });
        });
    }
}
