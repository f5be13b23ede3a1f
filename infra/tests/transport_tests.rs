//! Transport boundary tests against a local mock server

use httpmock::prelude::*;
use serde_json::json;

use fd_core::RawFailure;
use fd_infra::{ApiTransport, TokenStore};
use fd_shared::config::ClientConfig;

fn transport_for(server: &MockServer, tokens: TokenStore) -> ApiTransport {
    let mut config = ClientConfig::new(server.base_url());
    config.max_retries = 0;
    config.retry_delay_ms = 1;
    ApiTransport::new(&config, tokens).expect("transport must build")
}

#[tokio::test]
async fn success_response_decodes_json() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/categorias");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!([{"id": 1, "nome": "Analgésicos"}]));
    });

    let transport = transport_for(&server, TokenStore::new());
    let categorias: Vec<serde_json::Value> = transport.get("/categorias").await.unwrap();

    mock.assert();
    assert_eq!(categorias.len(), 1);
    assert_eq!(categorias[0]["nome"], "Analgésicos");
}

#[tokio::test]
async fn error_response_becomes_http_failure_with_parsed_body() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/estoque/saida");
        then.status(422)
            .header("content-type", "application/json")
            .json_body(json!({
                "status": 422,
                "error": "ESTOQUE_INSUFICIENTE",
                "message": "Estoque insuficiente",
                "path": "/estoque/saida"
            }));
    });

    let transport = transport_for(&server, TokenStore::new());
    let failure = transport
        .post_unit("/estoque/saida", &json!({"medicamentoId": 1, "quantidade": 99}))
        .await
        .expect_err("expected failure");

    match failure {
        RawFailure::Http { status, body, .. } => {
            assert_eq!(status, 422);
            let body = body.expect("body must parse");
            assert_eq!(body.code(), Some("ESTOQUE_INSUFICIENTE"));
        }
        other => panic!("unexpected failure variant {other:?}"),
    }
}

#[tokio::test]
async fn non_json_error_body_still_yields_http_failure() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/clientes/7");
        then.status(502).body("<html>bad gateway</html>");
    });

    let transport = transport_for(&server, TokenStore::new());
    let failure = transport
        .get::<serde_json::Value>("/clientes/7")
        .await
        .expect_err("expected failure");

    match failure {
        RawFailure::Http { status, body, .. } => {
            assert_eq!(status, 502);
            assert!(body.is_none());
        }
        other => panic!("unexpected failure variant {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_server_becomes_network_failure() {
    // Port 9 (discard) is never listening locally
    let mut config = ClientConfig::new("http://127.0.0.1:9");
    config.max_retries = 1;
    config.retry_delay_ms = 1;
    config.request_timeout_secs = 2;
    let transport = ApiTransport::new(&config, TokenStore::new()).unwrap();

    let failure = transport
        .get::<serde_json::Value>("/clientes")
        .await
        .expect_err("expected failure");

    assert!(matches!(failure, RawFailure::Network { .. }));
}

#[tokio::test]
async fn bearer_token_attached_to_protected_requests() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/medicamentos")
            .header("authorization", "Bearer jwt-123");
        then.status(200).json_body(json!([]));
    });

    let tokens = TokenStore::new();
    tokens.set("jwt-123");
    let transport = transport_for(&server, tokens);

    let _: Vec<serde_json::Value> = transport.get("/medicamentos").await.unwrap();
    mock.assert();
}

#[tokio::test]
async fn public_auth_endpoints_omit_authorization_header() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/auth/login").matches(|req| {
            req.headers
                .as_ref()
                .map(|headers| {
                    !headers
                        .iter()
                        .any(|(name, _)| name.eq_ignore_ascii_case("authorization"))
                })
                .unwrap_or(true)
        });
        then.status(200).json_body(json!({"token": "fresh"}));
    });

    // A stale token is present but must not leak into the login call
    let tokens = TokenStore::new();
    tokens.set("stale");
    let transport = transport_for(&server, tokens);

    let response: serde_json::Value = transport
        .post("/auth/login", &json!({"username": "ana", "password": "s3cret"}))
        .await
        .unwrap();

    mock.assert();
    assert_eq!(response["token"], "fresh");
}

#[tokio::test]
async fn unauthorized_response_clears_stored_token() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/vendas-protegidas");
        then.status(401)
            .json_body(json!({"status": 401, "error": "AUTH_NAO_AUTORIZADO"}));
    });

    let tokens = TokenStore::new();
    tokens.set("expired-jwt");
    let transport = transport_for(&server, tokens.clone());

    let failure = transport
        .get::<serde_json::Value>("/vendas-protegidas")
        .await
        .expect_err("expected failure");

    assert!(matches!(failure, RawFailure::Http { status: 401, .. }));
    assert!(!tokens.is_present());
}

#[tokio::test]
async fn query_parameters_are_forwarded() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/alertas/estoque-baixo")
            .query_param("limite", "10");
        then.status(200).json_body(json!([]));
    });

    let transport = transport_for(&server, TokenStore::new());
    let _: Vec<serde_json::Value> = transport
        .get_with_query("/alertas/estoque-baixo", &[("limite", "10".to_string())])
        .await
        .unwrap();

    mock.assert();
}
