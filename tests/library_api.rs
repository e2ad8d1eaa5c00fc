use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread;

use chuzapath::adapters::proxy::server;
use chuzapath::domain::ApiConfig;
use chuzapath::{
    CompletionClient, CompletionOutcome, ConversationMessage, DemoStoryGenerator,
    HttpCompletionClient, ProxyConfig, ProxyHandler, RuntimeConfig, StorySegment, StoryTeller,
};
use url::Url;

const STORY: &str = r#"{"text": "The orchard is silent.", "options": ["Shake the tree", "Climb the wall", "Call the dog", "Count the apples"]}"#;

fn completion_body(content: &str) -> String {
    serde_json::json!({ "choices": [{ "message": { "content": content } }] }).to_string()
}

/// Client that remembers the last conversation and answers from a script.
struct ScriptedClient {
    seen: Arc<Mutex<Vec<ConversationMessage>>>,
}

impl CompletionClient for ScriptedClient {
    fn complete(&self, messages: &[ConversationMessage]) -> CompletionOutcome {
        *self.seen.lock().unwrap() = messages.to_vec();
        CompletionOutcome::Success(StorySegment::new(
            "Scripted.",
            ["North", "South", "East", "West"],
        ))
    }
}

#[test]
fn custom_client_plugs_into_story_teller() {
    let seen = Arc::new(Mutex::new(vec![]));
    let teller = StoryTeller::new(
        RuntimeConfig::new("sk-embedded", false),
        ScriptedClient { seen: Arc::clone(&seen) },
        DemoStoryGenerator::instant(),
    );

    let first = teller.start(Some("fantasy"));
    assert_eq!(first.text, "Scripted.");

    let messages = seen.lock().unwrap().clone();
    assert_eq!(messages.len(), 2);
    assert!(messages[1].content.contains("fantasy"));
    assert!(messages[1].content.contains("\"text\""));
    assert!(messages[1].content.contains("\"options\""));

    teller.continue_story(&first, "East");
    assert!(seen.lock().unwrap()[1].content.contains("The player chose: \"East\""));
}

/// Start the proxy on an ephemeral port and return its URL.
fn spawn_proxy(handler: Arc<ProxyHandler>) -> String {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
            tx.send(listener.local_addr().unwrap()).unwrap();
            axum::serve(listener, server::router(handler, "/api/openai-proxy")).await.unwrap();
        });
    });
    let addr = rx.recv().unwrap();
    format!("http://{}/api/openai-proxy", addr)
}

#[test]
fn hosted_client_reaches_upstream_through_proxy() {
    let mut upstream = mockito::Server::new();
    let mock = upstream
        .mock("POST", "/v1/chat/completions")
        .match_header("authorization", "Bearer sk-server")
        .with_status(200)
        .with_body(completion_body(&format!("```json\n{}\n```", STORY)))
        .expect(2)
        .create();

    let upstream_url = Url::parse(&format!("{}/v1/chat/completions", upstream.url())).unwrap();
    let handler = Arc::new(
        ProxyHandler::new(ProxyConfig {
            api_key: Some("sk-server".to_string()),
            upstream_url: upstream_url.clone(),
            timeout_secs: Some(5),
        })
        .unwrap(),
    );
    let proxy_url = spawn_proxy(handler);

    let api = ApiConfig {
        upstream_url,
        proxy_url: Url::parse(&proxy_url).unwrap(),
        timeout_secs: Some(5),
        ..ApiConfig::default()
    };
    let runtime = RuntimeConfig::new("sk-client", false);
    let client = HttpCompletionClient::new(runtime.clone(), &api).unwrap();
    let teller = StoryTeller::new(runtime, client, DemoStoryGenerator::instant());

    let first = teller.start(None);
    assert_eq!(first.text, "The orchard is silent.");

    let next = teller.continue_story(&first, "Call the dog");
    assert_eq!(next.options[1], "Climb the wall");

    mock.assert();
}

#[test]
fn proxy_rate_limit_surfaces_as_fallback() {
    let mut upstream = mockito::Server::new();
    let _mock = upstream
        .mock("POST", "/v1/chat/completions")
        .with_status(429)
        .with_body(r#"{"error":{"message":"Rate limit reached"}}"#)
        .create();

    let handler = Arc::new(
        ProxyHandler::new(ProxyConfig {
            api_key: Some("sk-server".to_string()),
            upstream_url: Url::parse(&format!("{}/v1/chat/completions", upstream.url())).unwrap(),
            timeout_secs: Some(5),
        })
        .unwrap(),
    );
    let proxy_url = spawn_proxy(handler);

    let api = ApiConfig {
        proxy_url: Url::parse(&proxy_url).unwrap(),
        timeout_secs: Some(5),
        ..ApiConfig::default()
    };
    let client = HttpCompletionClient::new(RuntimeConfig::new("", true), &api).unwrap();

    let outcome = client.complete(&chuzapath::build_initial_prompt(None));
    assert_eq!(outcome.failure().and_then(|e| e.status()), Some(429));

    let segment = outcome.or_fallback();
    assert!(segment.text.ends_with("API request failed with status 429: Rate limit reached"));
}
