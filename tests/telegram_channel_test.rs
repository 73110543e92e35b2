//! Telegram 渠道测试（本地桩代替 Bot API）

mod common;

use homework_bot::{NotificationChannel, NotificationDispatcher, SendResult, TelegramChannel, TelegramConfig};
use std::sync::Arc;

fn channel(api_url: String) -> TelegramChannel {
    TelegramChannel::new(TelegramConfig {
        api_url,
        timeout_secs: 5,
        ..TelegramConfig::new("123:abc", "42")
    })
    .unwrap()
}

#[test]
fn test_send_message_request() {
    let (url, captured) = common::serve(vec![(
        "200 OK",
        r#"{"ok": true, "result": {"message_id": 1}}"#.to_string(),
    )]);

    let result = channel(url).send("Работа взята на проверку ревьюером.").unwrap();
    assert_eq!(result, SendResult::Sent);

    let requests = captured.lock().unwrap();
    let request = &requests[0];
    assert!(request.starts_with("POST /bot123:abc/sendMessage HTTP/1.1"));

    let body = request.split("\r\n\r\n").nth(1).unwrap();
    let json: serde_json::Value = serde_json::from_str(body).unwrap();
    assert_eq!(json["chat_id"], "42");
    assert_eq!(json["text"], "Работа взята на проверку ревьюером.");
}

#[test]
fn test_api_rejection_is_failed() {
    let (url, _) = common::serve(vec![(
        "400 Bad Request",
        r#"{"ok": false, "error_code": 400, "description": "Bad Request: chat not found"}"#.to_string(),
    )]);

    match channel(url).send("hello").unwrap() {
        SendResult::Failed(reason) => assert!(reason.contains("chat not found")),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_unreachable_error_does_not_leak_token() {
    let err = channel(common::closed_port_url()).send("hello").unwrap_err();
    assert!(!err.to_string().contains("123:abc"));
}

#[test]
fn test_dispatcher_swallows_unreachable_channel() {
    let mut dispatcher = NotificationDispatcher::new();
    dispatcher.register_channel(Arc::new(channel(common::closed_port_url())));

    let results = dispatcher.dispatch("hello");
    assert_eq!(results.len(), 1);
    assert!(matches!(results[0].1, SendResult::Failed(_)));
}
