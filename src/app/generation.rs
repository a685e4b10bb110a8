//! Generation operations for both apps.
//!
//! Each operation assembles its prompt, issues one blocking invocation
//! through a [`ModelInvoker`], and extracts the reply text. Only the idea
//! generator applies the truncation escalation: a single follow-up call with
//! a raised token ceiling when the provider stopped at the ceiling. The PRD
//! and cover-letter paths never retry.

use crate::app::bedrock_client::{
    GenerationError, InferenceSettings, ModelInvoker, StopKind,
};
use crate::app::length_profile::IdeaLength;
use crate::app::prompt::{self, IdeaInput, IntroInput};
use crate::{log_info, log_warn};

/// Absolute cap on the output-token ceiling for any single call.
pub const TOKEN_CEILING_CAP: i32 = 4000;

/// Fixed raise applied on the single truncation retry.
pub const RETRY_TOKEN_INCREMENT: i32 = 1000;

/// Token ceiling for the PRD derivation call.
pub const PRD_TOKEN_CEILING: i32 = 1500;

/// Token ceiling for the cover-letter call.
pub const INTRO_TOKEN_CEILING: i32 = 1000;

/// One-shot escalation policy for truncated replies: the next ceiling to try,
/// or `None` when the current ceiling already sits at the cap.
pub fn escalated_ceiling(current: i32, cap: i32, increment: i32) -> Option<i32> {
    if current < cap {
        Some((current + increment).min(cap))
    } else {
        None
    }
}

/// A completed idea generation. Besides the text it keeps the data the
/// debug view surfaces: the stop reason of the reply whose text was kept and
/// the token ceiling that reply was requested with.
#[derive(Debug, Clone, PartialEq)]
pub struct IdeaReply {
    pub content: String,
    pub stop: StopKind,
    pub requested_ceiling: i32,
}

/// Generate a living-lab hackathon idea.
///
/// Invokes the model with the profile's token ceiling. If the reply was
/// truncated and the escalation policy yields a raised ceiling, issues
/// exactly one further invocation and returns that reply's text - whether or
/// not the retry was itself truncated. A retry reply without text falls back
/// to the first reply's text.
pub fn generate_hackathon_idea(
    invoker: &dyn ModelInvoker,
    input: &IdeaInput,
    length: IdeaLength,
) -> Result<IdeaReply, GenerationError> {
    let profile = length.profile();
    let prompt = prompt::build_idea_prompt(input, profile);
    let settings = InferenceSettings::with_ceiling(profile.max_tokens);

    log_info!(
        "Generating hackathon idea, length: {}, ceiling: {}",
        length.label(),
        settings.max_tokens
    );

    let reply = invoker.invoke(&prompt, &settings)?;
    let first_text = match reply.text {
        Some(text) => text,
        None => return Err(GenerationError::NoContent),
    };

    if reply.stop == StopKind::MaxTokens {
        if let Some(raised) =
            escalated_ceiling(settings.max_tokens, TOKEN_CEILING_CAP, RETRY_TOKEN_INCREMENT)
        {
            log_warn!(
                "Reply truncated at {} tokens, retrying once with ceiling {}",
                settings.max_tokens,
                raised
            );
            let retry = invoker.invoke(&prompt, &InferenceSettings::with_ceiling(raised))?;
            if let Some(retry_text) = retry.text {
                log_info!("Retry returned {} chars", retry_text.chars().count());
                return Ok(IdeaReply {
                    content: retry_text,
                    stop: retry.stop,
                    requested_ceiling: raised,
                });
            }
            // Retry reply carried no text; keep the truncated first reply.
        }
    }

    Ok(IdeaReply {
        content: first_text,
        stop: reply.stop,
        requested_ceiling: settings.max_tokens,
    })
}

/// Derive a minimal Streamlit-app PRD from a previously generated idea.
/// Fixed 1500-token ceiling, no truncation retry.
pub fn generate_streamlit_prd(
    invoker: &dyn ModelInvoker,
    idea_content: &str,
) -> Result<String, GenerationError> {
    let prompt = prompt::build_prd_prompt(idea_content);

    log_info!("Generating Streamlit PRD, ceiling: {}", PRD_TOKEN_CEILING);

    let reply = invoker.invoke(&prompt, &InferenceSettings::with_ceiling(PRD_TOKEN_CEILING))?;
    reply.text.ok_or(GenerationError::NoContent)
}

/// Generate a cover letter from the personal-info form.
/// Fixed 1000-token ceiling, no truncation retry.
pub fn generate_introduction(
    invoker: &dyn ModelInvoker,
    input: &IntroInput,
) -> Result<String, GenerationError> {
    let prompt = prompt::build_intro_prompt(input);

    log_info!("Generating cover letter, ceiling: {}", INTRO_TOKEN_CEILING);

    let reply = invoker.invoke(&prompt, &InferenceSettings::with_ceiling(INTRO_TOKEN_CEILING))?;
    reply.text.ok_or(GenerationError::NoContent)
}
