//! Explicit per-session stash for generated content.
//!
//! Replaces the ambient framework session state with a context object owned
//! by the app struct and passed into the handlers that mutate it. At most one
//! current value per kind; overwritten on each new generation, cleared by the
//! reset action, dropped when the app closes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::app::bedrock_client::StopKind;
use crate::app::generation::IdeaReply;
use crate::app::length_profile::IdeaLength;

/// A generated idea together with the length preset that produced it and the
/// reply data the debug view reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedIdea {
    pub content: String,
    pub length: IdeaLength,
    pub stop: StopKind,
    pub requested_ceiling: i32,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionContext {
    pub current_idea: Option<GeneratedIdea>,
    pub current_prd: Option<String>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stash a freshly generated idea, replacing any previous one.
    pub fn store_idea(&mut self, reply: IdeaReply, length: IdeaLength) {
        self.current_idea = Some(GeneratedIdea {
            content: reply.content,
            length,
            stop: reply.stop,
            requested_ceiling: reply.requested_ceiling,
            generated_at: Utc::now(),
        });
    }

    /// Stash a freshly generated PRD, replacing any previous one.
    pub fn store_prd(&mut self, content: String) {
        self.current_prd = Some(content);
    }

    /// The "new idea" reset action: drops the stashed idea only.
    pub fn clear_idea(&mut self) {
        self.current_idea = None;
    }

    pub fn has_idea(&self) -> bool {
        self.current_idea.is_some()
    }
}
