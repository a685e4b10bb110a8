use std::cell::RefCell;

use ideadash::app::bedrock_client::{
    GenerationError, InferenceSettings, ModelInvoker, ModelReply, StopKind, TEMPERATURE, TOP_P,
};
use ideadash::app::generation::{
    escalated_ceiling, generate_hackathon_idea, generate_introduction, generate_streamlit_prd,
    IdeaReply, RETRY_TOKEN_INCREMENT, TOKEN_CEILING_CAP,
};
use ideadash::app::length_profile::IdeaLength;
use ideadash::app::prompt::{IdeaInput, IntroInput};
use pretty_assertions::assert_eq;

/// Recording stub standing in for the Bedrock client. Replies are served in
/// order; every invocation's prompt and settings are captured.
struct StubInvoker {
    replies: RefCell<Vec<Result<ModelReply, GenerationError>>>,
    calls: RefCell<Vec<(String, InferenceSettings)>>,
}

impl StubInvoker {
    fn new(replies: Vec<Result<ModelReply, GenerationError>>) -> Self {
        Self {
            replies: RefCell::new(replies),
            calls: RefCell::new(Vec::new()),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    fn ceilings(&self) -> Vec<i32> {
        self.calls.borrow().iter().map(|(_, s)| s.max_tokens).collect()
    }

    fn prompt(&self, index: usize) -> String {
        self.calls.borrow()[index].0.clone()
    }
}

impl ModelInvoker for StubInvoker {
    fn invoke(
        &self,
        prompt: &str,
        settings: &InferenceSettings,
    ) -> Result<ModelReply, GenerationError> {
        self.calls
            .borrow_mut()
            .push((prompt.to_string(), settings.clone()));
        self.replies.borrow_mut().remove(0)
    }
}

fn completed(text: &str) -> Result<ModelReply, GenerationError> {
    Ok(ModelReply {
        text: Some(text.to_string()),
        stop: StopKind::EndTurn,
    })
}

fn truncated(text: &str) -> Result<ModelReply, GenerationError> {
    Ok(ModelReply {
        text: Some(text.to_string()),
        stop: StopKind::MaxTokens,
    })
}

fn sample_input() -> IdeaInput {
    IdeaInput {
        problem_area: "환경 보호".to_string(),
        target_problem: "해양 플라스틱 오염".to_string(),
        ai_technology: "컴퓨터 비전".to_string(),
        target_users: "지자체".to_string(),
        expected_impact: "해양 쓰레기 20% 감소".to_string(),
    }
}

#[test]
fn escalation_policy_raises_by_increment_up_to_cap() {
    assert_eq!(escalated_ceiling(2000, 4000, 1000), Some(3000));
    assert_eq!(escalated_ceiling(3200, 4000, 1000), Some(4000));
    assert_eq!(escalated_ceiling(3999, 4000, 1000), Some(4000));
    assert_eq!(escalated_ceiling(4000, 4000, 1000), None);
    assert_eq!(escalated_ceiling(4500, 4000, 1000), None);
}

#[test]
fn truncated_reply_triggers_exactly_one_retry_with_raised_ceiling() {
    let stub = StubInvoker::new(vec![truncated("잘린 응답"), completed("완전한 재시도 응답")]);

    let result = generate_hackathon_idea(&stub, &sample_input(), IdeaLength::Standard);

    assert_eq!(
        result,
        Ok(IdeaReply {
            content: "완전한 재시도 응답".to_string(),
            stop: StopKind::EndTurn,
            requested_ceiling: 3000,
        })
    );
    assert_eq!(stub.ceilings(), vec![2000, 3000]);
}

#[test]
fn retry_ceiling_is_clamped_to_the_cap() {
    let stub = StubInvoker::new(vec![truncated("잘린 응답"), completed("재시도 응답")]);

    let result = generate_hackathon_idea(&stub, &sample_input(), IdeaLength::Detailed);

    assert_eq!(
        result,
        Ok(IdeaReply {
            content: "재시도 응답".to_string(),
            stop: StopKind::EndTurn,
            requested_ceiling: (3200 + RETRY_TOKEN_INCREMENT).min(TOKEN_CEILING_CAP),
        })
    );
    assert_eq!(
        stub.ceilings(),
        vec![3200, (3200 + RETRY_TOKEN_INCREMENT).min(TOKEN_CEILING_CAP)]
    );
}

#[test]
fn end_turn_reply_issues_no_retry() {
    let stub = StubInvoker::new(vec![completed("정상 완료된 아이디어")]);

    let result = generate_hackathon_idea(&stub, &sample_input(), IdeaLength::Brief);

    assert_eq!(
        result,
        Ok(IdeaReply {
            content: "정상 완료된 아이디어".to_string(),
            stop: StopKind::EndTurn,
            requested_ceiling: 1000,
        })
    );
    assert_eq!(stub.ceilings(), vec![1000]);
}

#[test]
fn retry_text_is_returned_even_when_the_retry_is_also_truncated() {
    let stub = StubInvoker::new(vec![truncated("첫 응답"), truncated("여전히 잘린 재시도")]);

    let result = generate_hackathon_idea(&stub, &sample_input(), IdeaLength::Brief);

    // The debug view reports the kept reply's stop reason and ceiling.
    assert_eq!(
        result,
        Ok(IdeaReply {
            content: "여전히 잘린 재시도".to_string(),
            stop: StopKind::MaxTokens,
            requested_ceiling: 2000,
        })
    );
    assert_eq!(stub.call_count(), 2);
}

#[test]
fn retry_without_text_falls_back_to_the_first_reply() {
    let stub = StubInvoker::new(vec![
        truncated("잘렸지만 쓸 수 있는 첫 응답"),
        Ok(ModelReply {
            text: None,
            stop: StopKind::MaxTokens,
        }),
    ]);

    let result = generate_hackathon_idea(&stub, &sample_input(), IdeaLength::Standard);

    // The fallback keeps the first reply's stop reason and ceiling too.
    assert_eq!(
        result,
        Ok(IdeaReply {
            content: "잘렸지만 쓸 수 있는 첫 응답".to_string(),
            stop: StopKind::MaxTokens,
            requested_ceiling: 2000,
        })
    );
    assert_eq!(stub.call_count(), 2);
}

#[test]
fn reply_without_text_maps_to_no_content() {
    let stub = StubInvoker::new(vec![Ok(ModelReply {
        text: None,
        stop: StopKind::EndTurn,
    })]);

    let result = generate_hackathon_idea(&stub, &sample_input(), IdeaLength::Standard);

    assert_eq!(result, Err(GenerationError::NoContent));
    assert_eq!(stub.call_count(), 1);
}

#[test]
fn truncated_reply_without_text_does_not_retry() {
    // The escalation only applies once a usable first reply exists.
    let stub = StubInvoker::new(vec![Ok(ModelReply {
        text: None,
        stop: StopKind::MaxTokens,
    })]);

    let result = generate_hackathon_idea(&stub, &sample_input(), IdeaLength::Standard);

    assert_eq!(result, Err(GenerationError::NoContent));
    assert_eq!(stub.call_count(), 1);
}

#[test]
fn transport_fault_surfaces_with_its_detail() {
    let stub = StubInvoker::new(vec![Err(GenerationError::Runtime {
        detail: "dispatch failure: connection refused".to_string(),
    })]);

    let result = generate_hackathon_idea(&stub, &sample_input(), IdeaLength::Standard);

    let err = result.unwrap_err();
    assert_eq!(
        err,
        GenerationError::Runtime {
            detail: "dispatch failure: connection refused".to_string()
        }
    );

    let message = err.user_message("해커톤 아이디어 생성");
    assert!(message.contains("❌"));
    assert!(message.contains("connection refused"));
}

#[test]
fn api_error_keeps_the_provider_detail_in_the_user_message() {
    let err = GenerationError::Api {
        detail: "ThrottlingException: rate exceeded".to_string(),
    };

    let message = err.user_message("PRD 생성");
    assert_eq!(message, "❌ AWS API 호출 오류: ThrottlingException: rate exceeded");
}

#[test]
fn no_content_user_messages_use_the_operation_name() {
    assert_eq!(
        GenerationError::NoContent.user_message("해커톤 아이디어 생성"),
        "해커톤 아이디어 생성에 실패했습니다."
    );
    assert_eq!(
        GenerationError::NoContent.user_message("PRD 생성"),
        "PRD 생성에 실패했습니다."
    );
    assert_eq!(
        GenerationError::ClientUnavailable.user_message("자기소개서 생성"),
        "❌ AWS Bedrock 연결에 실패했습니다."
    );
}

#[test]
fn prd_generation_never_retries_even_when_truncated() {
    let stub = StubInvoker::new(vec![truncated("잘린 PRD")]);

    let result = generate_streamlit_prd(&stub, "해커톤 아이디어 내용");

    assert_eq!(result, Ok("잘린 PRD".to_string()));
    assert_eq!(stub.ceilings(), vec![1500]);
}

#[test]
fn intro_generation_end_to_end_with_korean_inputs() {
    let input = IntroInput {
        name: "홍길동".to_string(),
        major: "컴퓨터공학과".to_string(),
        hobby: "독서".to_string(),
        experiences: "동아리 활동".to_string(),
        target_job: "개발자".to_string(),
    };
    let stub = StubInvoker::new(vec![completed("생성된 자기소개서")]);

    let result = generate_introduction(&stub, &input);

    assert_eq!(result, Ok("생성된 자기소개서".to_string()));
    assert_eq!(stub.ceilings(), vec![1000]);

    let prompt = stub.prompt(0);
    for field in ["홍길동", "컴퓨터공학과", "독서", "동아리 활동", "개발자"] {
        assert!(prompt.contains(field), "prompt missing {:?}", field);
    }
}

#[test]
fn sampling_parameters_are_fixed() {
    let settings = InferenceSettings::with_ceiling(2000);
    assert_eq!(settings.temperature, TEMPERATURE);
    assert_eq!(settings.top_p, TOP_P);
    assert_eq!(settings.temperature, 0.7);
    assert_eq!(settings.top_p, 0.9);
}
