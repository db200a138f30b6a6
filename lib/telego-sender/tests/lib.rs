// Copyright 2020 - developers of the `telego` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
mod common;

use common::{MockServer, TOKEN};
use serde_json::json;
use telego_sender::{Configuration, InvocationError, Sender};
use telego_types::functions::{GetMe, GetUpdates, SendMessage};
use telego_types::types::{ReplyKeyboardRemove, User};

fn sender(server: &MockServer, debug_log: bool, error_log: bool) -> Sender {
    Sender::new(
        TOKEN,
        Configuration {
            api_url: server.url.clone(),
            debug_log,
            error_log,
            ..Default::default()
        },
    )
    .unwrap()
}

#[tokio::test]
async fn posts_form_to_method_url() {
    let server = MockServer::ok(json!({
        "message_id": 2,
        "date": 1500000000,
        "chat": {"id": 7, "type": "private", "first_name": "Ann"},
        "text": "hi"
    }))
    .await;

    let message = sender(&server, false, false)
        .invoke(&SendMessage::new(7, "hi").reply_markup(ReplyKeyboardRemove::new()))
        .await
        .unwrap();
    assert_eq!(message.message_id, 2);

    let request = server.last_request();
    assert_eq!(request.path, format!("/bot{TOKEN}/sendMessage"));
    assert_eq!(
        request.content_type.as_deref(),
        Some("application/x-www-form-urlencoded")
    );
    assert_eq!(request.form["chat_id"], "7");
    assert_eq!(request.form["text"], "hi");
    assert_eq!(request.form["reply_markup"], r#"{"remove_keyboard":true}"#);
    assert!(!request.form.contains_key("parse_mode"));
}

#[tokio::test]
async fn missing_param_sends_nothing() {
    let server = MockServer::ok(json!(true)).await;

    let error = sender(&server, false, true)
        .invoke(&SendMessage::new(7, ""))
        .await
        .unwrap_err();
    assert!(matches!(error, InvocationError::MissingParam(p) if p.name == "text"));
    assert!(server.requests().is_empty());
}

#[tokio::test]
async fn forbidden_is_not_decoded() {
    // Not even JSON, which would be a decode error if the body was read.
    let server = MockServer::start([(403, "Forbidden: bot was blocked by the user")]).await;

    let error = sender(&server, false, false)
        .invoke(&GetMe {})
        .await
        .unwrap_err();
    assert!(error.is_forbidden());
}

#[tokio::test]
async fn failed_envelope_carries_description() {
    let server = MockServer::start([(
        429,
        json!({
            "ok": false,
            "error_code": 429,
            "description": "Too Many Requests: retry after 5",
            "parameters": {"retry_after": 5}
        })
        .to_string(),
    )])
    .await;

    let error = sender(&server, false, true)
        .invoke(&GetMe {})
        .await
        .unwrap_err();
    assert_eq!(error.to_string(), "Too Many Requests: retry after 5");
    let rpc = error.rpc().unwrap();
    assert_eq!(rpc.code, 429);
    assert_eq!(rpc.retry_after, Some(5));
}

#[tokio::test]
async fn malformed_body_is_decode_error() {
    let server = MockServer::start([(200, "<html>not json</html>")]).await;

    let error = sender(&server, false, false)
        .invoke(&GetMe {})
        .await
        .unwrap_err();
    assert!(matches!(error, InvocationError::Decode(_)));
}

#[tokio::test]
async fn mismatched_result_is_decode_error() {
    let server = MockServer::ok(json!(true)).await;

    let error = sender(&server, false, false)
        .invoke(&GetMe {})
        .await
        .unwrap_err();
    assert!(matches!(error, InvocationError::Decode(_)));
}

#[tokio::test]
async fn unreachable_server_is_transport_error() {
    let sender = Sender::new(
        TOKEN,
        Configuration {
            api_url: "http://127.0.0.1:1".to_string(),
            ..Default::default()
        },
    )
    .unwrap();

    let error = sender.invoke(&GetMe {}).await.unwrap_err();
    assert!(matches!(error, InvocationError::Transport(_)));
}

#[tokio::test]
async fn logging_does_not_change_results() {
    let _ = simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Debug)
        .init();

    let me = json!({"id": 42, "first_name": "Telego", "username": "telego_bot"});
    let quiet = MockServer::ok(me.clone()).await;
    let verbose = MockServer::ok(me.clone()).await;

    let a: User = sender(&quiet, false, false).invoke(&GetMe {}).await.unwrap();
    let b: User = sender(&verbose, true, true).invoke(&GetMe {}).await.unwrap();
    assert_eq!(a, b);
    assert_eq!(serde_json::to_value(&a).unwrap(), me);
}

#[tokio::test]
async fn get_updates_form_is_normalized() {
    let server = MockServer::ok(json!([])).await;

    let updates = sender(&server, false, false)
        .invoke(
            &GetUpdates::new()
                .limit(1000)
                .timeout(-5)
                .allowed_updates(["message"]),
        )
        .await
        .unwrap();
    assert!(updates.is_empty());

    let form = server.last_request().form;
    assert_eq!(form["limit"], "100");
    assert_eq!(form["timeout"], "0");
    assert_eq!(form["allowed_updates"], r#"["message"]"#);
    assert!(!form.contains_key("offset"));
}
