pub mod error;
pub mod config;
pub mod providers;
pub mod request;

/*

yandexgpt is an async-only rust connector for the Yandex Cloud
foundation models chat completion REST API. a host orchestration
layer hands it a conversation history plus optional execution
settings; the connector translates them into the vendor JSON
shape, performs one authenticated POST, and hands back a single
assistant reply message.

yandexgpt/
├── Cargo.toml          # Main manifest
├── src/
│   ├── lib.rs          # Re-exports and main documentation
│   ├── error.rs        # Custom error types and handling
│   ├── config.rs       # Connector configuration and builder
│   ├── request.rs      # Host-native chat types and settings
│   └── providers/      # Vendor-specific implementation
│       ├── mod.rs      # Re-exports
│       └── yandex.rs   # YandexGPT wire types and client
└── tests/              # Integration and unit tests

*/

// ===== Convenience re-exports =====

pub use crate::config::YandexGptConfig;
pub use crate::error::Error;
pub use crate::providers::yandex::YandexGptClient;
pub use crate::request::{
  ChatHistory, ChatMessage, ChatRole, PromptExecutionSettings
};

// ===== Reply types =====

/// One streamed fragment of a reply, were streaming supported
pub type StreamingReply = Result<String, crate::error::Error>;

/// Receiver side of a streamed reply
pub type StreamingReplyReceiver
  = tokio::sync::mpsc::UnboundedReceiver<StreamingReply>;
