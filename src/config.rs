//! Configuration for the YandexGPT connector

use serde::{Deserialize, Serialize};

/// Default model when the caller names none
pub const DEFAULT_MODEL: &str = "yandexgpt-lite";

/// Default completion endpoint
pub const DEFAULT_API_URL: &str
  = "https://llm.api.cloud.yandex.net/foundationModels/v1/completion";

/// Connector configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YandexGptConfig
{   /// API key for Yandex Cloud authentication
    pub api_key: String
  , /// Folder ID (tenant/project) in Yandex Cloud
    pub folder_id: String
  , /// Model name, embedded in the model URI
    pub model: String
  , /// Completion endpoint URL
    pub api_url: String
}

impl YandexGptConfig
{   /// Create a configuration with the default model and endpoint
    pub fn new(
      api_key: impl Into<String>
    , folder_id: impl Into<String>
    ) -> Self
    {   YandexGptConfig
        {   api_key: api_key.into()
          , folder_id: folder_id.into()
          , model: DEFAULT_MODEL.to_string()
          , api_url: DEFAULT_API_URL.to_string()
        }
    }

    /// Reject unusable configuration before any network activity
    pub fn validate(&self) -> Result<(), crate::error::Error>
    {   if self.api_key.is_empty()
        {   return Err(crate::error::Error::InvalidConfiguration(
              "api_key must not be empty".to_string()
            ));
        }
        if self.folder_id.is_empty()
        {   return Err(crate::error::Error::InvalidConfiguration(
              "folder_id must not be empty".to_string()
            ));
        }
        Ok(())
    }
}
