use serde::{Deserialize, Serialize};
use log::{debug, trace, error, warn};

use crate::config::YandexGptConfig;
use crate::request::{
  ChatHistory, ChatMessage, ChatRole, PromptExecutionSettings
};

// ===== Wire Types =====

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireMessage
{   pub role: String
  , pub text: String
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionOptions
{   pub temperature: f64
  , pub max_tokens: usize
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionRequest
{   pub model_uri: String
  , pub messages: Vec<WireMessage>
  , pub completion_options: CompletionOptions
}

// Response fields are all optional: the original connector parsed
// the body case-insensitively and tolerated any missing part of
// the chain, so every level deserializes leniently and accepts a
// PascalCase spelling via aliases.

#[derive(Debug, Clone, Deserialize)]
pub struct CompletionResponse
{   #[serde(default, alias = "Result")]
    pub result: Option<CompletionResult>
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionResult
{   #[serde(default, alias = "Alternatives")]
    pub alternatives: Option<Vec<Alternative>>
  , #[serde(default, alias = "Usage")]
    pub usage: Option<Usage>
  , #[serde(default, alias = "ModelVersion")]
    pub model_version: Option<String>
}

#[derive(Debug, Clone, Deserialize)]
pub struct Alternative
{   #[serde(default, alias = "Message")]
    pub message: Option<WireReplyMessage>
  , #[serde(default, alias = "Status")]
    pub status: Option<String>
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireReplyMessage
{   #[serde(default, alias = "Role")]
    pub role: Option<String>
  , #[serde(default, alias = "Text")]
    pub text: Option<String>
}

// Token counts arrive as decimal strings (int64 over JSON)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Usage
{   #[serde(default, alias = "InputTextTokens")]
    pub input_text_tokens: Option<String>
  , #[serde(default, alias = "CompletionTokens")]
    pub completion_tokens: Option<String>
  , #[serde(default, alias = "TotalTokens")]
    pub total_tokens: Option<String>
}

// ===== Translators =====

/// Build the vendor request body from a host conversation.
/// Turn order is preserved verbatim; roles go through the
/// `ChatRole::wire_name` table; missing settings use defaults.
pub fn build_completion_request(
  history: &ChatHistory
, settings: Option<&PromptExecutionSettings>
, folder_id: &str
, model: &str
) -> CompletionRequest
{   let defaults = PromptExecutionSettings::default();
    let settings = settings.unwrap_or(&defaults);

    let messages = history
      .iter()
      .map(|m| WireMessage
        {   role: m.role.wire_name().to_string()
          , text: m.text.clone()
        })
      .collect();

    CompletionRequest
    {   model_uri: format!("gpt://{}/{}", folder_id, model)
      , messages
      , completion_options: CompletionOptions
        {   temperature: settings.temperature
          , max_tokens: settings.max_tokens
        }
    }
}

/// Extract the first alternative's text as an assistant reply.
/// A response missing any part of the chain degrades to an empty
/// reply rather than an error, matching the vendor contract the
/// original connector shipped with.
pub fn extract_reply(response: &CompletionResponse) -> ChatMessage
{   let text = response.result.as_ref()
      .and_then(|r| r.alternatives.as_ref())
      .and_then(|alts| alts.first())
      .and_then(|alt| alt.message.as_ref())
      .and_then(|m| m.text.clone());

    match text
    {   Some(text) => ChatMessage::assistant(text)
      , None => {
          warn!(
            "Response contained no alternatives; returning empty reply"
          );
          ChatMessage::assistant("")
        }
    }
}

// ===== Client =====

/// Async client for the YandexGPT chat completion endpoint.
/// One POST per call, no retry, no internal concurrency; the API
/// key travels on each request so concurrent calls with distinct
/// keys never race on shared client state.
pub struct YandexGptClient
{   config: YandexGptConfig
  , http_client: reqwest::Client
}

impl YandexGptClient
{   /// Create a client from a validated configuration
    pub fn new(config: YandexGptConfig)
      -> Result<Self, crate::error::Error>
    {   config.validate()?;
        debug!(
          "Creating YandexGptClient for model: {}", config.model
        );
        Ok(YandexGptClient
        {   config
          , http_client: reqwest::Client::new()
        })
    }

    /// Start building a client
    pub fn builder() -> YandexGptClientBuilder
    {   YandexGptClientBuilder::new()
    }

    pub fn config(&self) -> &YandexGptConfig
    {   &self.config
    }

    /// Send the conversation and await the full (non-streamed)
    /// reply. Exactly one HTTP exchange; any failure surfaces
    /// immediately to the caller.
    pub async fn get_chat_message_content(
      &self
    , history: &ChatHistory
    , settings: Option<&PromptExecutionSettings>
    ) -> Result<ChatMessage, crate::error::Error>
    {   debug!(
          "Requesting completion for {} turns", history.len()
        );

        let request = build_completion_request(
          history,
          settings,
          &self.config.folder_id,
          &self.config.model
        );

        trace!("YandexGPT request: {:?}", request);

        let response = self.http_client
          .post(&self.config.api_url)
          .header(
            "Authorization",
            format!("Api-Key {}", self.config.api_key)
          )
          .header("Content-Type", "application/json")
          .json(&request)
          .send()
          .await
          .map_err(|e| {
            error!("HTTP error: {}", e);
            crate::error::Error::HttpError(e.to_string())
          })?;

        let status = response.status();
        trace!("YandexGPT response status: {}", status);

        if !status.is_success()
        {   let error_text = response.text().await
              .unwrap_or_else(|_|
                "Unknown error".to_string()
              );
            error!("YandexGPT API error: {}", error_text);
            return Err(crate::error::Error::ApiError(
              format!("YandexGPT error ({}): {}", status, error_text)
            ));
        }

        let completion: CompletionResponse
          = response.json().await.map_err(|e| {
            error!("Parse error: {}", e);
            crate::error::Error::ParseError(e.to_string())
          })?;

        if let Some(usage) = completion.result.as_ref()
          .and_then(|r| r.usage.as_ref())
        {   debug!(
              "Token usage: input={:?} completion={:?} total={:?}",
              usage.input_text_tokens,
              usage.completion_tokens,
              usage.total_tokens
            );
        }

        Ok(extract_reply(&completion))
    }

    /// Streaming is not implemented by this connector; fails
    /// synchronously before any network activity.
    pub async fn get_streaming_chat_message_content(
      &self
    , _history: &ChatHistory
    , _settings: Option<&PromptExecutionSettings>
    ) -> Result<crate::StreamingReplyReceiver, crate::error::Error>
    {   error!("Streaming chat completion requested but unsupported");
        Err(crate::error::Error::StreamingNotSupported)
    }
}

// ===== Builder =====

/// Builder assembling configuration plus an optional
/// caller-supplied transport
#[derive(Debug, Clone, Default)]
pub struct YandexGptClientBuilder
{   api_key: String
  , folder_id: String
  , model: Option<String>
  , api_url: Option<String>
  , http_client: Option<reqwest::Client>
}

impl YandexGptClientBuilder
{   pub fn new() -> Self
    {   YandexGptClientBuilder::default()
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self
    {   self.api_key = api_key.into();
        self
    }

    pub fn folder_id(mut self, folder_id: impl Into<String>) -> Self
    {   self.folder_id = folder_id.into();
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self
    {   self.model = Some(model.into());
        self
    }

    pub fn api_url(mut self, api_url: impl Into<String>) -> Self
    {   self.api_url = Some(api_url.into());
        self
    }

    /// Reuse a transport owned by the caller
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self
    {   self.http_client = Some(client);
        self
    }

    /// Validate and produce a client; fails fast with
    /// `InvalidConfiguration` before any network activity
    pub fn build(self)
      -> Result<YandexGptClient, crate::error::Error>
    {   let mut config = YandexGptConfig::new(
          self.api_key,
          self.folder_id
        );
        if let Some(model) = self.model
        {   config.model = model;
        }
        if let Some(api_url) = self.api_url
        {   config.api_url = api_url;
        }
        config.validate()?;

        debug!(
          "Creating YandexGptClient for model: {}", config.model
        );
        Ok(YandexGptClient
        {   config
          , http_client: self.http_client
              .unwrap_or_else(reqwest::Client::new)
        })
    }
}
