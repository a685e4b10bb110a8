use ideadash::app::{
    bedrock_client::{InferenceSettings, ModelReply, StopKind, NOVA_LITE_MODEL_ID},
    length_profile::IdeaLength,
    prompt::{IdeaInput, IntroInput},
    session::{GeneratedIdea, SessionContext},
};
use serde::{Deserialize, Serialize};

/// Contract tests ensure that the public API remains stable
/// These tests will fail if any breaking changes are made to the public interface

#[test]
fn test_idea_input_contract() {
    let input = IdeaInput {
        problem_area: String::new(),
        target_problem: String::new(),
        ai_technology: String::new(),
        target_users: String::new(),
        expected_impact: String::new(),
    };

    let _area = &input.problem_area;
    let _problem = &input.target_problem;
    let _tech = &input.ai_technology;
    let _users = &input.target_users;
    let _impact = &input.expected_impact;
    assert!(!input.is_complete());
}

#[test]
fn test_intro_input_contract() {
    let input = IntroInput {
        name: String::new(),
        major: String::new(),
        hobby: String::new(),
        experiences: String::new(),
        target_job: String::new(),
    };

    let _name = &input.name;
    let _major = &input.major;
    let _hobby = &input.hobby;
    let _experiences = &input.experiences;
    let _job = &input.target_job;
    assert!(!input.is_complete());
}

#[test]
fn test_session_context_contract() {
    let session = SessionContext {
        current_idea: None,
        current_prd: None,
    };

    let _idea = &session.current_idea;
    let _prd = &session.current_prd;
}

#[test]
fn test_model_reply_contract() {
    let reply = ModelReply {
        text: Some(String::new()),
        stop: StopKind::EndTurn,
    };

    let _text = &reply.text;
    let _stop = &reply.stop;
}

#[test]
fn test_length_profile_table() {
    // The preset numbers are part of the prompt contract with the model.
    let brief = IdeaLength::Brief.profile();
    assert_eq!(brief.char_limit, 800);
    assert_eq!(brief.max_tokens, 1000);

    let standard = IdeaLength::Standard.profile();
    assert_eq!(standard.char_limit, 1500);
    assert_eq!(standard.max_tokens, 2000);

    let detailed = IdeaLength::Detailed.profile();
    assert_eq!(detailed.char_limit, 2500);
    assert_eq!(detailed.max_tokens, 3200);
}

#[test]
fn test_length_labels() {
    assert_eq!(IdeaLength::Brief.label(), "간단");
    assert_eq!(IdeaLength::Standard.label(), "보통");
    assert_eq!(IdeaLength::Detailed.label(), "상세");
    assert_eq!(IdeaLength::default(), IdeaLength::Standard);
}

#[test]
fn test_fixed_model_id() {
    assert_eq!(NOVA_LITE_MODEL_ID, "amazon.nova-lite-v1:0");
}

#[test]
fn test_stop_kind_labels() {
    // The provider's wire-format names, shown verbatim in the debug view.
    assert_eq!(StopKind::EndTurn.as_str(), "end_turn");
    assert_eq!(StopKind::MaxTokens.as_str(), "max_tokens");
    assert_eq!(
        StopKind::Other("guardrail_intervened".to_string()).as_str(),
        "guardrail_intervened"
    );
}

#[test]
fn test_inference_settings_contract() {
    let settings = InferenceSettings::with_ceiling(1500);

    assert_eq!(settings.max_tokens, 1500);
    let _temperature = settings.temperature;
    let _top_p = settings.top_p;
}

/// This test ensures key trait implementations remain stable
#[test]
fn test_trait_implementations() {
    fn assert_serde_traits<T: Serialize + for<'de> Deserialize<'de>>() {}

    assert_serde_traits::<SessionContext>();
    assert_serde_traits::<GeneratedIdea>();
    assert_serde_traits::<IdeaLength>();
}
