//! End-to-end dialogue rounds through the public API against a mock
//! completion endpoint.

use std::time::Duration;

use partyline::chat::{ChatSession, FallbackResponder, Speaker};
use partyline::core::AppConfig;
use partyline::openai::SamplingParams;
use partyline::party::{CharacterId, Roster};

fn config(hostname: &str, api_key: Option<&str>) -> AppConfig {
    AppConfig {
        api_hostname: hostname.to_string(),
        api_key: api_key.map(String::from),
        model: "gpt-4".to_string(),
        sampling: SamplingParams::default(),
        history_window: 40,
        request_timeout: Duration::from_secs(5),
    }
}

const REPLY_BODY: &str = r#"{
    "id": "chatcmpl-123",
    "object": "chat.completion",
    "created": 1694268190,
    "model": "gpt-4",
    "choices": [{
        "index": 0,
        "message": {
            "role": "assistant",
            "content": "The goddess smiles upon us today."
        },
        "finish_reason": "stop"
    }]
}"#;

#[tokio::test]
async fn chat_rounds_build_an_alternating_transcript() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(REPLY_BODY)
        .expect(2)
        .create();

    let config = config(&server.url(), Some("test-key"));
    let roster = Roster::new();
    let mut session = ChatSession::builder(roster.resolve("Luna").clone(), config.gateway())
        .history_window(config.history_window)
        .build();

    let first = session.send("how are you holding up?").await.unwrap();
    let second = session.send("and the others?").await.unwrap();

    mock.assert();
    assert_eq!(first, "The goddess smiles upon us today.");
    assert_eq!(second, "The goddess smiles upon us today.");

    let turns = session.transcript().turns();
    assert_eq!(turns.len(), 4);
    assert_eq!(turns[0].speaker, Speaker::Player);
    assert_eq!(turns[1].speaker, Speaker::Character);
    assert_eq!(turns[2].speaker, Speaker::Player);
    assert_eq!(turns[3].speaker, Speaker::Character);
    assert!(!session.is_busy());
}

#[tokio::test]
async fn provider_outage_never_reaches_the_player() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .with_status(503)
        .expect(2)
        .create();

    let config = config(&server.url(), Some("test-key"));
    let roster = Roster::new();
    let mut session = ChatSession::builder(roster.resolve("Gareth").clone(), config.gateway())
        .build();

    for prompt in ["what now?", "hold the line!"] {
        let reply = session.send(prompt).await.unwrap();
        assert!(FallbackResponder::lines(CharacterId::Gareth).contains(&reply.as_str()));
    }

    mock.assert();
    assert_eq!(session.transcript().len(), 4);
}

#[tokio::test]
async fn missing_credential_stays_offline() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .expect(0)
        .create();

    let config = config(&server.url(), None);
    let roster = Roster::new();

    // An unknown name resolves to the default party member.
    let profile = roster.resolve("some stranger").clone();
    assert_eq!(profile.id, CharacterId::Aria);

    let mut session = ChatSession::builder(profile, config.gateway()).build();
    let reply = session.send("anyone there?").await.unwrap();

    mock.assert();
    assert!(FallbackResponder::lines(CharacterId::Aria).contains(&reply.as_str()));
    assert_eq!(session.transcript().len(), 2);
}
