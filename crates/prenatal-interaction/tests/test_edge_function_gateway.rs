use prenatal_core::AssistantError;
use prenatal_core::config::{ConfigFile, GatewayConfig, env_keys};
use prenatal_core::gateway::{ChatGateway, ChatRequest};
use prenatal_interaction::EdgeFunctionGateway;
use serde_json::json;
use tokio::net::TcpListener;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn request(conversation_id: Option<&str>) -> ChatRequest {
    ChatRequest {
        message: "AMH是什么？".to_string(),
        conversation_id: conversation_id.map(str::to_string),
        session_id: "session-1".to_string(),
        user_age: 33,
    }
}

fn gateway_for(server: &MockServer) -> EdgeFunctionGateway {
    EdgeFunctionGateway::new(&GatewayConfig::new(server.uri(), "anon-key"))
}

#[tokio::test]
async fn test_successful_exchange() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/functions/v1/health-chat"))
        .and(header("apikey", "anon-key"))
        .and(header("authorization", "Bearer anon-key"))
        .and(body_partial_json(json!({
            "message": "AMH是什么？",
            "conversationId": null,
            "sessionId": "session-1",
            "userAge": 33
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"content": "X", "conversationId": "abc"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let response = gateway_for(&server).invoke(request(None)).await.unwrap();
    assert_eq!(response.content.as_deref(), Some("X"));
    assert_eq!(response.conversation_id.as_deref(), Some("abc"));
}

#[tokio::test]
async fn test_token_is_forwarded_and_may_be_omitted() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({"conversationId": "abc"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"content": "Y"})))
        .expect(1)
        .mount(&server)
        .await;

    let response = gateway_for(&server).invoke(request(Some("abc"))).await.unwrap();
    assert_eq!(response.content.as_deref(), Some("Y"));
    assert!(response.conversation_id.is_none());
}

#[tokio::test]
async fn test_error_status_is_gateway_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/functions/v1/health-chat"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "boom"})))
        .mount(&server)
        .await;

    let err = gateway_for(&server).invoke(request(Some("abc"))).await.unwrap_err();
    match err {
        AssistantError::Gateway { status, message } => {
            assert_eq!(status, Some(500));
            assert!(message.contains("boom"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_non_json_body_is_protocol_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = gateway_for(&server).invoke(request(None)).await.unwrap_err();
    assert!(matches!(err, AssistantError::Protocol(_)));
}

#[tokio::test]
async fn test_function_name_from_environment() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/functions/v1/prenatal-chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"content": "ok"})))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    let config = ConfigFile::default()
        .apply_env(|key| match key {
            k if k == env_keys::ENDPOINT_URL => Some(uri.clone()),
            k if k == env_keys::ANON_KEY => Some("anon-key".to_string()),
            k if k == env_keys::FUNCTION => Some("prenatal-chat".to_string()),
            _ => None,
        })
        .into_config();

    let gateway = EdgeFunctionGateway::new(config.gateway.as_ref().unwrap());
    assert!(gateway.url().ends_with("/functions/v1/prenatal-chat"));
    let response = gateway.invoke(request(None)).await.unwrap();
    assert_eq!(response.content.as_deref(), Some("ok"));
}

#[tokio::test]
async fn test_unreachable_endpoint_is_gateway_error() {
    // Bind then drop to obtain a port nobody listens on
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let gateway = EdgeFunctionGateway::new(&GatewayConfig::new(format!("http://{}", addr), "k"));
    let err = gateway.invoke(request(None)).await.unwrap_err();
    assert!(err.is_gateway());
}
