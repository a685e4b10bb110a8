use crate::{log_debug, log_error, log_info};
use aws_config::BehaviorVersion;
use aws_sdk_bedrockruntime::error::SdkError;
use aws_sdk_bedrockruntime::types::{
    ContentBlock, ConversationRole, InferenceConfiguration, Message, StopReason,
};
use aws_sdk_bedrockruntime::Client as BedrockRuntimeClient;
use aws_smithy_types::error::display::DisplayErrorContext;
use aws_types::region::Region;
use serde::{Deserialize, Serialize};
use tokio::runtime::Runtime;

/// Bedrock model used for all generation calls.
pub const NOVA_LITE_MODEL_ID: &str = "amazon.nova-lite-v1:0";

/// Fixed sampling weight for all generation calls. Not user-tunable.
pub const TEMPERATURE: f32 = 0.7;

/// Fixed nucleus-sampling threshold for all generation calls. Not user-tunable.
pub const TOP_P: f32 = 0.9;

/// Why a generation call failed.
///
/// Callers branch on the variant instead of string-matching a prefix; the
/// user-facing message for each variant comes from [`GenerationError::user_message`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// The Bedrock runtime client was never initialized, or initialization failed.
    ClientUnavailable,
    /// The provider reported an API error during invocation.
    Api { detail: String },
    /// Any other runtime fault during the call or response handling.
    Runtime { detail: String },
    /// No text could be extracted from the response. Covers both "model
    /// produced no content" and "response shape unexpected" - the provider
    /// response does not let us tell them apart.
    NoContent,
}

impl std::fmt::Display for GenerationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerationError::ClientUnavailable => {
                write!(f, "Bedrock runtime client not initialized")
            }
            GenerationError::Api { detail } => write!(f, "Bedrock API error: {}", detail),
            GenerationError::Runtime { detail } => write!(f, "generation fault: {}", detail),
            GenerationError::NoContent => write!(f, "no text in model response"),
        }
    }
}

impl std::error::Error for GenerationError {}

impl GenerationError {
    /// The user-visible message for this failure, rendered in the same UI
    /// region a successful result would occupy. `operation` is the
    /// Korean-language name of the generation step, e.g. "해커톤 아이디어 생성".
    pub fn user_message(&self, operation: &str) -> String {
        match self {
            GenerationError::ClientUnavailable => "❌ AWS Bedrock 연결에 실패했습니다.".to_string(),
            GenerationError::Api { detail } => format!("❌ AWS API 호출 오류: {}", detail),
            GenerationError::Runtime { detail } => {
                format!("❌ {} 중 오류 발생: {}", operation, detail)
            }
            GenerationError::NoContent => format!("{}에 실패했습니다.", operation),
        }
    }
}

/// Sampling parameters for a single Converse call. Temperature and top-p are
/// fixed constants; only the token ceiling varies per call.
#[derive(Debug, Clone, PartialEq)]
pub struct InferenceSettings {
    pub max_tokens: i32,
    pub temperature: f32,
    pub top_p: f32,
}

impl InferenceSettings {
    pub fn with_ceiling(max_tokens: i32) -> Self {
        Self {
            max_tokens,
            temperature: TEMPERATURE,
            top_p: TOP_P,
        }
    }
}

/// Why the model stopped generating, mapped from the provider's stop reason
/// so callers and test stubs never touch the SDK types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StopKind {
    EndTurn,
    MaxTokens,
    Other(String),
}

impl StopKind {
    /// The provider's wire-format name for this stop reason, as shown in the
    /// debug view.
    pub fn as_str(&self) -> &str {
        match self {
            StopKind::EndTurn => "end_turn",
            StopKind::MaxTokens => "max_tokens",
            StopKind::Other(name) => name,
        }
    }
}

impl From<&StopReason> for StopKind {
    fn from(value: &StopReason) -> Self {
        match value {
            StopReason::EndTurn => StopKind::EndTurn,
            StopReason::MaxTokens => StopKind::MaxTokens,
            other => StopKind::Other(format!("{:?}", other)),
        }
    }
}

/// One decoded model reply. `text` is `None` when no text could be extracted
/// from the response; that is not an error at this layer.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelReply {
    pub text: Option<String>,
    pub stop: StopKind,
}

/// Seam between generation logic and the inference provider. The production
/// implementation is [`BedrockApiClient`]; tests substitute a recording stub.
pub trait ModelInvoker {
    fn invoke(
        &self,
        prompt: &str,
        settings: &InferenceSettings,
    ) -> Result<ModelReply, GenerationError>;
}

/// Bedrock API client for the generation apps.
#[derive(Debug)]
pub struct BedrockApiClient {
    pub region: String,
    pub model_id: String,
    runtime_client: Option<BedrockRuntimeClient>,
}

impl Default for BedrockApiClient {
    fn default() -> Self {
        Self {
            region: "us-east-1".to_string(), // Default to US East 1
            model_id: NOVA_LITE_MODEL_ID.to_string(),
            runtime_client: None,
        }
    }
}

impl BedrockApiClient {
    /// Create a new Bedrock API client
    pub fn new(region: String) -> Self {
        Self {
            region,
            ..Default::default()
        }
    }

    /// Initialize the Bedrock runtime client from the default AWS credential
    /// chain. Called once before the first generation; on failure the client
    /// stays uninitialized and generation calls short-circuit with
    /// [`GenerationError::ClientUnavailable`].
    pub fn initialize(&mut self) -> Result<(), GenerationError> {
        log_info!(
            "Initializing Bedrock runtime client for region: {}",
            self.region
        );

        let runtime = Runtime::new().map_err(|e| {
            log_error!("Failed to create Tokio runtime: {}", e);
            GenerationError::Runtime {
                detail: e.to_string(),
            }
        })?;

        runtime.block_on(async {
            let region = Region::new(self.region.clone());
            log_debug!("Building AWS SDK config for region {}", self.region);

            let config = aws_config::defaults(BehaviorVersion::latest())
                .region(region)
                .load()
                .await;

            log_debug!("Creating Bedrock runtime client for model invocation");
            self.runtime_client = Some(BedrockRuntimeClient::new(&config));
        });

        log_info!("Bedrock API client initialization complete");
        Ok(())
    }

    /// Check if the client is initialized
    pub fn is_initialized(&self) -> bool {
        self.runtime_client.is_some()
    }
}

impl ModelInvoker for BedrockApiClient {
    /// Invoke the model once through the Converse API: a single user message
    /// with one text block, plus the fixed sampling parameters and the
    /// caller's token ceiling.
    fn invoke(
        &self,
        prompt: &str,
        settings: &InferenceSettings,
    ) -> Result<ModelReply, GenerationError> {
        let client = self
            .runtime_client
            .as_ref()
            .ok_or(GenerationError::ClientUnavailable)?;

        log_info!(
            "Starting Bedrock Converse call for model_id: {}, token ceiling: {}",
            self.model_id, settings.max_tokens
        );

        let runtime = Runtime::new().map_err(|e| {
            log_error!("Failed to create Tokio runtime: {}", e);
            GenerationError::Runtime {
                detail: e.to_string(),
            }
        })?;

        let reply = runtime.block_on(async {
            let message = Message::builder()
                .role(ConversationRole::User)
                .content(ContentBlock::Text(prompt.to_string()))
                .build()
                .map_err(|e| {
                    log_error!("Failed to build message for Converse API: {:?}", e);
                    GenerationError::Runtime {
                        detail: format!("failed to build Converse message: {}", e),
                    }
                })?;

            let inference_config = InferenceConfiguration::builder()
                .max_tokens(settings.max_tokens)
                .temperature(settings.temperature)
                .top_p(settings.top_p)
                .build();

            let converse_result = client
                .converse()
                .model_id(self.model_id.clone())
                .messages(message)
                .inference_config(inference_config)
                .send()
                .await
                .map_err(|e| match &e {
                    SdkError::ServiceError(ctx) => {
                        log_error!("Bedrock Converse API error: {:?}", ctx.err());
                        GenerationError::Api {
                            detail: format!("{}", DisplayErrorContext(ctx.err())),
                        }
                    }
                    _ => {
                        log_error!("Error during Bedrock Converse API call: {}", e);
                        GenerationError::Runtime {
                            detail: format!("{}", DisplayErrorContext(&e)),
                        }
                    }
                })?;

            let stop = StopKind::from(converse_result.stop_reason());

            // Extract the response content
            let mut text = None;
            if let Some(output) = converse_result.output() {
                if let Ok(message) = output.as_message() {
                    if let Some(content) = message.content().first() {
                        if let Ok(t) = content.as_text() {
                            text = Some(t.to_string());
                        }
                    }
                }
            }

            if text.is_none() {
                log_error!("Could not extract text from Converse API response in expected format");
            }

            Ok::<ModelReply, GenerationError>(ModelReply { text, stop })
        })?;

        log_info!(
            "Bedrock Converse call completed, stop: {:?}, response length: {}",
            reply.stop,
            reply.text.as_deref().map(str::len).unwrap_or(0)
        );
        Ok(reply)
    }
}
