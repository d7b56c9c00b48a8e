//! Host-native chat types and execution settings

use serde::{Deserialize, Serialize};

/// Author role of one conversation turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChatRole
{   System
  , User
  , Assistant
}

impl ChatRole
{   /// Explicit mapping to the vendor role vocabulary.
    /// An enumerated table rather than a lowercase pass, so a
    /// future vocabulary divergence is a compile-time concern.
    pub fn wire_name(&self) -> &'static str
    {   match self
        {   ChatRole::System => "system"
          , ChatRole::User => "user"
          , ChatRole::Assistant => "assistant"
        }
    }
}

/// One turn of a conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage
{   pub role: ChatRole
  , pub text: String
}

impl ChatMessage
{   pub fn new(role: ChatRole, text: impl Into<String>) -> Self
    {   ChatMessage
        {   role
          , text: text.into()
        }
    }

    /// Assistant reply carrying the given text
    pub fn assistant(text: impl Into<String>) -> Self
    {   ChatMessage::new(ChatRole::Assistant, text)
    }
}

/// Ordered conversation history; order is dialogue order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatHistory
{   pub messages: Vec<ChatMessage>
}

impl ChatHistory
{   pub fn new() -> Self
    {   ChatHistory
        {   messages: vec![]
        }
    }

    pub fn add_system_message(&mut self, text: impl Into<String>)
    {   self.messages.push(
          ChatMessage::new(ChatRole::System, text)
        );
    }

    pub fn add_user_message(&mut self, text: impl Into<String>)
    {   self.messages.push(
          ChatMessage::new(ChatRole::User, text)
        );
    }

    pub fn add_assistant_message(&mut self, text: impl Into<String>)
    {   self.messages.push(
          ChatMessage::new(ChatRole::Assistant, text)
        );
    }

    pub fn len(&self) -> usize
    {   self.messages.len()
    }

    pub fn is_empty(&self) -> bool
    {   self.messages.is_empty()
    }

    pub fn iter(&self)
      -> std::slice::Iter<'_, ChatMessage>
    {   self.messages.iter()
    }
}

impl From<Vec<ChatMessage>> for ChatHistory
{   fn from(messages: Vec<ChatMessage>) -> Self
    {   ChatHistory
        {   messages
        }
    }
}

/// Execution settings for one completion call.
/// Absent settings fall back to the vendor-facing defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptExecutionSettings
{   /// Sampling temperature
    pub temperature: f64
  , /// Maximum tokens to generate
    pub max_tokens: usize
}

impl PromptExecutionSettings
{   pub fn new(temperature: f64, max_tokens: usize) -> Self
    {   PromptExecutionSettings
        {   temperature
          , max_tokens
        }
    }
}

impl Default for PromptExecutionSettings
{   fn default() -> Self
    {   PromptExecutionSettings
        {   temperature: 0.7
          , max_tokens: 1000
        }
    }
}
