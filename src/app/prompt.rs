//! Prompt assembly: pure string interpolation of form values into fixed
//! Korean-language templates. No validation here - non-emptiness is enforced
//! by the UI before a generation is triggered.

use crate::app::length_profile::LengthProfile;

/// Form fields for the hackathon idea generator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdeaInput {
    pub problem_area: String,
    pub target_problem: String,
    pub ai_technology: String,
    pub target_users: String,
    pub expected_impact: String,
}

impl IdeaInput {
    /// All fields filled in? Gates the generate button.
    pub fn is_complete(&self) -> bool {
        !self.problem_area.is_empty()
            && !self.target_problem.is_empty()
            && !self.ai_technology.is_empty()
            && !self.target_users.is_empty()
            && !self.expected_impact.is_empty()
    }
}

/// Form fields for the cover-letter generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntroInput {
    pub name: String,
    pub major: String,
    pub hobby: String,
    pub experiences: String,
    pub target_job: String,
}

impl Default for IntroInput {
    fn default() -> Self {
        Self {
            name: "홍길동".to_string(),
            major: "컴퓨터공학과".to_string(),
            hobby: "독서, 영화감상".to_string(),
            experiences: "프로그래밍 동아리 활동, 웹 개발 프로젝트 참여".to_string(),
            target_job: "소프트웨어 개발자".to_string(),
        }
    }
}

impl IntroInput {
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty()
            && !self.major.is_empty()
            && !self.hobby.is_empty()
            && !self.experiences.is_empty()
            && !self.target_job.is_empty()
    }
}

/// Assemble the hackathon idea prompt: the mentor template with every form
/// value plus the profile's overall and per-section character budgets.
pub fn build_idea_prompt(input: &IdeaInput, profile: &LengthProfile) -> String {
    format!(
        "
당신은 지속가능한 세상을 위한 리빙랩 해커톤의 전문 멘토입니다. 다음 정보를 바탕으로 창의적이고 실현 가능한 해커톤 아이디어를 체계적으로 정리해주세요.

입력 정보:
- 문제 영역: {problem_area}
- 해결하고자 하는 문제: {target_problem}
- 활용할 AI 기술: {ai_technology}
- 타겟 사용자: {target_users}
- 기대 효과: {expected_impact}

**중요**: 각 섹션은 간결하고 핵심적인 내용으로 작성해주세요. 전체 응답은 {char_limit}자 이내로 제한합니다.

다음 구조로 해커톤 아이디어를 정리해주세요:

## 🎯 프로젝트 제목
({title}의 창의적이고 임팩트 있는 프로젝트명)

## 📋 프로젝트 개요 ({overview})
프로젝트의 핵심 내용과 목적을 간단명료하게 설명

## 🌍 해결 문제 ({problem})
구체적인 문제 정의와 현재 상황을 설명

## 🤖 AI 기술 활용 ({ai_tech})
어떤 AI 기술을 어떻게 활용할지 구체적으로 설명

## 👥 타겟 사용자 ({users})
주요 사용자와 이해관계자를 나열

## 💡 핵심 기능 ({features})
주요 기능을 간단한 문장으로 나열
- 기능 1: (한 줄 설명)
- 기능 2: (한 줄 설명)
- 기능 3: (한 줄 설명)

## 🎊 기대 효과 ({impact})
지속가능성 측면에서의 기대효과를 구체적 수치나 결과로 설명

## 🛠️ 기술 스택 ({tech_stack})
개발에 필요한 핵심 기술들을 나열

## 📊 실증 계획 ({test_plan})
실제 환경에서의 테스트 방법을 설명

## 🚀 확장 가능성 ({expansion})
향후 발전 방향을 설명

한국어로 작성하며, 각 섹션은 지정된 글자 수를 엄격히 준수해주세요. 실현 가능하면서도 혁신적인 아이디어로 구성해주세요.
",
        problem_area = input.problem_area,
        target_problem = input.target_problem,
        ai_technology = input.ai_technology,
        target_users = input.target_users,
        expected_impact = input.expected_impact,
        char_limit = profile.char_limit,
        title = profile.sections.title,
        overview = profile.sections.overview,
        problem = profile.sections.problem,
        ai_tech = profile.sections.ai_tech,
        users = profile.sections.users,
        features = profile.sections.features,
        impact = profile.sections.impact,
        tech_stack = profile.sections.tech_stack,
        test_plan = profile.sections.test_plan,
        expansion = profile.sections.expansion,
    )
}

/// Assemble the PRD derivation prompt: a fixed template asking for a minimal,
/// text-only Streamlit MVP requirements document built on a generated idea.
pub fn build_prd_prompt(idea_content: &str) -> String {
    format!(
        "
다음 해커톤 아이디어를 바탕으로 **초기 MVP(Minimum Viable Product)** 버전의 Streamlit 앱 구현을 위한 간단한 PRD를 Markdown 형식으로 작성해주세요.

해커톤 아이디어:
{idea_content}

**중요 제약사항:**
- 이것은 초기 MVP 버전이므로 핵심 기능만 포함
- AI 기능은 **텍스트 처리만으로 제한** (이미지, 음성, 영상 처리 제외)
- 복잡한 AI 모델보다는 간단한 텍스트 분석, 분류, 요약 등에 집중
- 실제 1-2일 내에 구현 가능한 범위로 한정

다음 구조로 간단하고 실용적인 PRD를 작성해주세요:

# 프로젝트명 (MVP 버전)

## 📋 프로젝트 개요
- **목적**: (한 줄 설명)
- **타겟 사용자**: (주요 사용자)
- **MVP 범위**: 텍스트 기반 AI 기능만 포함

## 🎯 주요 기능 (MVP 핵심)
### 필수 기능 (텍스트 처리 한정)
1. 기능 1 - 텍스트 입력 및 처리
2. 기능 2 - 텍스트 분석/분류/요약 등
3. 기능 3 - 결과 표시 및 피드백

### 제외 기능 (향후 버전)
- 이미지/음성/영상 처리
- 복잡한 머신러닝 모델
- 실시간 스트리밍

## 📱 Streamlit 앱 구성
### 화면 구성
- **메인 페이지**: 텍스트 입력 및 설정
- **결과 페이지**: 처리 결과 및 분석

### 사용할 Streamlit 컴포넌트
- 입력: `st.text_input()`, `st.text_area()`, `st.selectbox()`
- 출력: `st.write()`, `st.markdown()`, `st.dataframe()`
- 상호작용: `st.button()`, `st.tabs()`, `st.expander()`

## 💾 데이터 처리 (텍스트만)
- **입력 데이터**: 사용자 텍스트 입력
- **처리 과정**: 간단한 텍스트 분석/처리 알고리즘
- **출력 형태**: 텍스트 결과, 차트, 표 형태

## 🤖 AI 기능 (텍스트 한정)
- **사용 모델**: 간단한 텍스트 처리 라이브러리 또는 API
- **처리 범위**: 텍스트 분류, 키워드 추출, 감정 분석, 요약 등
- **제외 항목**: 이미지/음성/영상 AI 기능

## 📚 필요한 라이브러리
```python
streamlit
pandas
matplotlib (또는 plotly)
requests (API 사용시)
nltk 또는 spacy (텍스트 처리)
openai 또는 transformers (텍스트 AI, 선택적)
```

## ⚡ 구현 순서 (MVP 기준)
1. **1단계**: 기본 UI 및 텍스트 입력 구성
2. **2단계**: 핵심 텍스트 처리 기능 구현
3. **3단계**: 결과 표시 및 기본 개선

## 🚀 향후 확장 계획
- 2차 버전: 이미지 처리 기능 추가
- 3차 버전: 더 복잡한 AI 모델 적용

**MVP 버전으로 간단하고 실용적으로 작성하되, 텍스트 기반 AI 기능만 포함하여 실제 구현 가능한 내용으로 해주세요.**
"
    )
}

/// Assemble the cover-letter prompt with all five personal fields.
pub fn build_intro_prompt(input: &IntroInput) -> String {
    format!(
        "
당신은 전문적인 자기소개서 작성 도우미입니다. 다음 정보를 바탕으로 매력적이고 전문적인 자기소개서를 작성해주세요.

개인 정보:
- 이름: {name}
- 전공: {major}
- 취미: {hobby}
- 경험/활동: {experiences}
- 희망 직무: {target_job}

다음 구조로 자기소개서를 작성해주세요:
1. 인사말 및 자기소개
2. 전공 관련 역량
3. 경험 및 활동
4. 취미를 통한 개성 표현
5. 희망 직무에 대한 열정
6. 마무리

한국어로 작성하며, 진정성 있고 전문적인 톤으로 작성해주세요.
",
        name = input.name,
        major = input.major,
        hobby = input.hobby,
        experiences = input.experiences,
        target_job = input.target_job,
    )
}
