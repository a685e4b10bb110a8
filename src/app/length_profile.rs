//! Length presets for the hackathon idea generator.
//!
//! Each preset bundles an overall character target, the output-token ceiling
//! requested from Bedrock, and per-section advisory character budgets that
//! get embedded into the prompt text. The budgets are advisory to the model,
//! not enforced anywhere.

use serde::{Deserialize, Serialize};

/// Named generation length selected in the idea form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IdeaLength {
    Brief,
    Standard,
    Detailed,
}

impl IdeaLength {
    pub const ALL: [IdeaLength; 3] = [IdeaLength::Brief, IdeaLength::Standard, IdeaLength::Detailed];

    /// Korean form label, matching the selectbox options.
    pub fn label(&self) -> &'static str {
        match self {
            IdeaLength::Brief => "간단",
            IdeaLength::Standard => "보통",
            IdeaLength::Detailed => "상세",
        }
    }

    /// Badge shown next to a generated idea.
    pub fn badge(&self) -> &'static str {
        match self {
            IdeaLength::Brief => "⚡ 간단형 (800자)",
            IdeaLength::Standard => "⚖️ 표준형 (1,500자)",
            IdeaLength::Detailed => "🔍 상세형 (2,500자)",
        }
    }

    /// Short info lines (pace, size, description) shown beside the selector.
    pub fn summary(&self) -> (&'static str, &'static str, &'static str) {
        match self {
            IdeaLength::Brief => ("⚡ 빠름", "800자", "핵심만 간략히"),
            IdeaLength::Standard => ("⚖️ 균형", "1,500자", "적당한 상세도"),
            IdeaLength::Detailed => ("🔍 상세", "2,500자", "충분한 설명"),
        }
    }

    pub fn profile(&self) -> &'static LengthProfile {
        match self {
            IdeaLength::Brief => &BRIEF,
            IdeaLength::Standard => &STANDARD,
            IdeaLength::Detailed => &DETAILED,
        }
    }
}

impl Default for IdeaLength {
    fn default() -> Self {
        IdeaLength::Standard
    }
}

/// Advisory per-section character budgets, in the wording the prompt embeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionBudgets {
    pub title: &'static str,
    pub overview: &'static str,
    pub problem: &'static str,
    pub ai_tech: &'static str,
    pub users: &'static str,
    pub features: &'static str,
    pub impact: &'static str,
    pub tech_stack: &'static str,
    pub test_plan: &'static str,
    pub expansion: &'static str,
}

/// A generation length preset. `max_tokens` leaves headroom above the
/// character target because Korean text consumes more tokens per character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthProfile {
    pub char_limit: u32,
    pub max_tokens: i32,
    pub sections: SectionBudgets,
}

pub static BRIEF: LengthProfile = LengthProfile {
    char_limit: 800,
    max_tokens: 1000, // 800자 x 1.25
    sections: SectionBudgets {
        title: "10자 이내",
        overview: "80자 이내",
        problem: "60자 이내",
        ai_tech: "80자 이내",
        users: "40자 이내",
        features: "120자 이내, 3개 기능",
        impact: "80자 이내",
        tech_stack: "60자 이내",
        test_plan: "60자 이내",
        expansion: "60자 이내",
    },
};

pub static STANDARD: LengthProfile = LengthProfile {
    char_limit: 1500,
    max_tokens: 2000, // 1500자 x 1.33
    sections: SectionBudgets {
        title: "20자 이내",
        overview: "150자 이내",
        problem: "100자 이내",
        ai_tech: "150자 이내",
        users: "80자 이내",
        features: "200자 이내, 3-4개 기능",
        impact: "150자 이내",
        tech_stack: "100자 이내",
        test_plan: "120자 이내",
        expansion: "100자 이내",
    },
};

pub static DETAILED: LengthProfile = LengthProfile {
    char_limit: 2500,
    max_tokens: 3200, // 2500자 x 1.28
    sections: SectionBudgets {
        title: "30자 이내",
        overview: "250자 이내",
        problem: "200자 이내",
        ai_tech: "300자 이내",
        users: "150자 이내",
        features: "400자 이내, 4-5개 기능",
        impact: "250자 이내",
        tech_stack: "200자 이내",
        test_plan: "200자 이내",
        expansion: "200자 이내",
    },
};
