use yandexgpt::{
  ChatHistory, ChatMessage, ChatRole, PromptExecutionSettings,
  YandexGptClient
};
use yandexgpt::providers::yandex::{
  build_completion_request, extract_reply, CompletionResponse
};

fn init_logging()
{   let _ = env_logger::builder()
      .is_test(true)
      .try_init();
}

fn sample_history() -> ChatHistory
{   let mut history = ChatHistory::new();
    history.add_system_message("You are terse.");
    history.add_user_message("What is 2+2?");
    history.add_assistant_message("4");
    history
}

// ===== Translator: request side =====

#[test]
fn test_translate_preserves_order_and_roles()
{   let history = sample_history();
    let request = build_completion_request(
      &history, None, "folder", "yandexgpt-lite"
    );

    assert_eq!(request.messages.len(), 3);
    assert_eq!(request.messages[0].role, "system");
    assert_eq!(request.messages[0].text, "You are terse.");
    assert_eq!(request.messages[1].role, "user");
    assert_eq!(request.messages[1].text, "What is 2+2?");
    assert_eq!(request.messages[2].role, "assistant");
    assert_eq!(request.messages[2].text, "4");
}

#[test]
fn test_translate_default_settings()
{   let history = sample_history();
    let request = build_completion_request(
      &history, None, "folder", "yandexgpt-lite"
    );

    assert_eq!(request.completion_options.temperature, 0.7);
    assert_eq!(request.completion_options.max_tokens, 1000);
}

#[test]
fn test_translate_explicit_settings()
{   let history = sample_history();
    let settings = PromptExecutionSettings::new(0.2, 50);
    let request = build_completion_request(
      &history, Some(&settings), "folder", "yandexgpt-lite"
    );

    assert_eq!(request.completion_options.temperature, 0.2);
    assert_eq!(request.completion_options.max_tokens, 50);
}

#[test]
fn test_translate_empty_history()
{   let request = build_completion_request(
      &ChatHistory::new(), None, "folder", "yandexgpt-lite"
    );
    assert!(request.messages.is_empty());
}

/// Worked example: one user turn, default settings, checked at
/// the serialized JSON level so key spelling is covered too
#[test]
fn test_worked_example_wire_shape()
{   let history = ChatHistory::from(vec![
      ChatMessage::new(ChatRole::User, "Hi")
    ]);
    let request = build_completion_request(
      &history, None, "f1", "yandexgpt-lite"
    );

    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(json["modelUri"], "gpt://f1/yandexgpt-lite");
    assert_eq!(json["messages"][0]["role"], "user");
    assert_eq!(json["messages"][0]["text"], "Hi");
    assert_eq!(
      json["completionOptions"]["temperature"], 0.7
    );
    assert_eq!(
      json["completionOptions"]["maxTokens"], 1000
    );
}

// ===== Translator: response side =====

#[test]
fn test_extract_reply_first_alternative()
{   let response: CompletionResponse
      = serde_json::from_value(serde_json::json!({
          "result": {
            "alternatives": [
              { "message": { "role": "assistant", "text": "four" } },
              { "message": { "role": "assistant", "text": "ignored" } }
            ],
            "usage": {
              "inputTextTokens": "12",
              "completionTokens": "1",
              "totalTokens": "13"
            },
            "modelVersion": "23.10"
          }
        })).unwrap();

    let reply = extract_reply(&response);
    assert_eq!(reply.role, ChatRole::Assistant);
    assert_eq!(reply.text, "four");
}

#[test]
fn test_extract_reply_empty_alternatives()
{   init_logging();
    let response: CompletionResponse
      = serde_json::from_value(serde_json::json!({
          "result": { "alternatives": [] }
        })).unwrap();

    let reply = extract_reply(&response);
    assert_eq!(reply.role, ChatRole::Assistant);
    assert_eq!(reply.text, "");
}

#[test]
fn test_extract_reply_missing_result()
{   let response: CompletionResponse
      = serde_json::from_value(serde_json::json!({})).unwrap();

    let reply = extract_reply(&response);
    assert_eq!(reply.text, "");
}

#[test]
fn test_extract_reply_missing_text()
{   let response: CompletionResponse
      = serde_json::from_value(serde_json::json!({
          "result": {
            "alternatives": [ { "message": { "role": "assistant" } } ]
          }
        })).unwrap();

    let reply = extract_reply(&response);
    assert_eq!(reply.text, "");
}

/// The original connector matched property names
/// case-insensitively; PascalCase spellings must parse
#[test]
fn test_extract_reply_pascal_case_body()
{   let response: CompletionResponse
      = serde_json::from_value(serde_json::json!({
          "Result": {
            "Alternatives": [
              { "Message": { "Text": "ok" } }
            ]
          }
        })).unwrap();

    let reply = extract_reply(&response);
    assert_eq!(reply.text, "ok");
}

// ===== Configuration =====

#[test]
fn test_builder_rejects_empty_api_key()
{   let result = YandexGptClient::builder()
      .api_key("")
      .folder_id("folder")
      .build();

    assert!(matches!(
      result,
      Err(yandexgpt::Error::InvalidConfiguration(_))
    ));
}

#[test]
fn test_builder_rejects_empty_folder_id()
{   let result = YandexGptClient::builder()
      .api_key("key")
      .folder_id("")
      .build();

    assert!(matches!(
      result,
      Err(yandexgpt::Error::InvalidConfiguration(_))
    ));
}

#[test]
fn test_client_from_config()
{   let config = yandexgpt::YandexGptConfig::new("key", "folder");
    assert!(YandexGptClient::new(config).is_ok());

    let empty = yandexgpt::YandexGptConfig::new("key", "");
    assert!(matches!(
      YandexGptClient::new(empty),
      Err(yandexgpt::Error::InvalidConfiguration(_))
    ));
}

#[test]
fn test_builder_defaults()
{   let client = YandexGptClient::builder()
      .api_key("key")
      .folder_id("folder")
      .build()
      .unwrap();

    assert_eq!(client.config().model, "yandexgpt-lite");
    assert_eq!(
      client.config().api_url,
      "https://llm.api.cloud.yandex.net/foundationModels/v1/completion"
    );
}

#[test]
fn test_builder_overrides()
{   let client = YandexGptClient::builder()
      .api_key("key")
      .folder_id("folder")
      .model("yandexgpt")
      .api_url("https://example.test/v1/completion")
      .with_http_client(reqwest::Client::new())
      .build()
      .unwrap();

    assert_eq!(client.config().model, "yandexgpt");
    assert_eq!(
      client.config().api_url,
      "https://example.test/v1/completion"
    );
}

// ===== Streaming =====

#[tokio::test]
async fn test_streaming_not_supported()
{   init_logging();
    let client = YandexGptClient::builder()
      .api_key("key")
      .folder_id("folder")
      .build()
      .unwrap();

    let result = client
      .get_streaming_chat_message_content(
        &sample_history(), None
      )
      .await;

    assert!(matches!(
      result,
      Err(yandexgpt::Error::StreamingNotSupported)
    ));
}

// ===== Live round-trip (requires credentials) =====

#[tokio::test]
#[ignore]
async fn test_live_chat_completion()
{   init_logging();
    let api_key = match std::env::var("YANDEX_API_KEY")
    {   Ok(key) => key
      , Err(_) => {
          println!("Skipping: YANDEX_API_KEY not set");
          return;
        }
    };
    let folder_id = match std::env::var("YANDEX_FOLDER_ID")
    {   Ok(id) => id
      , Err(_) => {
          println!("Skipping: YANDEX_FOLDER_ID not set");
          return;
        }
    };

    let client = YandexGptClient::builder()
      .api_key(api_key)
      .folder_id(folder_id)
      .build()
      .unwrap();

    let mut history = ChatHistory::new();
    history.add_user_message("Say hello");

    match tokio::time::timeout(
      std::time::Duration::from_secs(30),
      client.get_chat_message_content(&history, None)
    ).await
    {   Ok(Ok(reply)) => {
          println!("Response: {}", reply.text);
          assert_eq!(reply.role, ChatRole::Assistant);
          assert!(
            !reply.text.is_empty(),
            "Response should not be empty"
          );
        }
      , Ok(Err(e)) => {
          println!("API Error: {}", e);
        }
      , Err(_) => {
          println!("Timeout waiting for response");
        }
    }
}
