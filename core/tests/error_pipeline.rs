//! End-to-end tests for the error-classification pipeline:
//! transport failure -> ProcessedError -> feedback surface -> field errors.

use fd_core::errors::{
    extract_field_errors, process, select_surface, should_log, FeedbackSurface, RawFailure,
    Severity,
};
use fd_shared::config::Environment;
use fd_shared::types::ApiErrorBody;

fn http_failure(status: u16, body: serde_json::Value) -> RawFailure {
    let body: ApiErrorBody = serde_json::from_value(body).expect("test body must parse");
    RawFailure::Http {
        status,
        body: Some(body),
        message: format!("HTTP status {}", status),
    }
}

#[test]
fn duplicate_cpf_renders_as_toast() {
    let failure = http_failure(
        422,
        serde_json::json!({
            "status": 422,
            "error": "CLIENTE_CPF_DUPLICADO",
            "message": "Já existe um cliente cadastrado com este CPF",
            "path": "/clientes"
        }),
    );

    let processed = process(&failure);
    assert_eq!(processed.code, "CLIENTE_CPF_DUPLICADO");
    assert_eq!(processed.severity, Severity::Warning);
    assert!(processed.blocking);
    assert_eq!(processed.status, 422);
    assert_eq!(select_surface(&processed), FeedbackSurface::Toast);

    // Expected business rejection: silent in production, logged in dev
    assert!(!should_log(&processed, Environment::Production));
    assert!(should_log(&processed, Environment::Development));
}

#[test]
fn opaque_server_failure_resolves_to_unknown_with_generic_mapping() {
    let failure = http_failure(
        500,
        serde_json::json!({ "status": 500, "message": "internal failure" }),
    );

    let processed = process(&failure);
    assert_eq!(processed.code, "UNKNOWN_ERROR");
    // Mapping comes from the generic internal-error catalog entry
    assert!(processed.message.contains("erro interno"));
    assert_eq!(processed.severity, Severity::Error);
    assert_eq!(processed.status, 500);
    assert_eq!(select_surface(&processed), FeedbackSurface::Banner);
    assert!(should_log(&processed, Environment::Production));
}

#[test]
fn validation_failure_decomposes_into_field_errors() {
    let message = "[cpf]: CPF deve conter 11 dígitos [email]: não pode ser vazio";
    let failure = http_failure(
        400,
        serde_json::json!({
            "status": 400,
            "error": "ERRO_VALIDACAO",
            "message": message
        }),
    );

    let processed = process(&failure);
    assert_eq!(processed.severity, Severity::Warning);
    assert_eq!(select_surface(&processed), FeedbackSurface::Inline);

    let fields = extract_field_errors(processed.technical_message.as_deref().unwrap_or_default());
    assert_eq!(fields.len(), 2);
    assert!(fields.get("cpf").unwrap().contains("11 dígitos"));
    assert!(fields.get("EMAIL").unwrap().contains("obrigatório"));
}

#[test]
fn session_expiry_renders_as_modal() {
    let failure = http_failure(
        401,
        serde_json::json!({ "status": 401, "error": "AUTH_NAO_AUTORIZADO" }),
    );

    let processed = process(&failure);
    assert_eq!(processed.code, "AUTH_NAO_AUTORIZADO");
    assert_eq!(select_surface(&processed), FeedbackSurface::Modal);
}

#[test]
fn process_is_total_over_hostile_inputs() {
    let hostile = vec![
        RawFailure::Unknown,
        RawFailure::network(""),
        RawFailure::runtime(String::from_utf8_lossy(&[0xf0, 0x9f, 0x92, 0x8a]).to_string()),
        RawFailure::Http {
            status: 0,
            body: None,
            message: String::new(),
        },
        RawFailure::Http {
            status: 999,
            body: Some(ApiErrorBody::default()),
            message: "???".to_string(),
        },
        http_failure(422, serde_json::json!({})),
        http_failure(400, serde_json::json!({ "error": "", "message": "" })),
    ];

    for failure in &hostile {
        let processed = process(failure);
        assert!(!processed.code.is_empty());
        assert!(!processed.message.is_empty());
        // Surface selection must accept anything the processor emits
        let _ = select_surface(&processed);
    }
}

#[test]
fn every_failure_maps_to_exactly_one_surface() {
    let failures = vec![
        RawFailure::network("offline"),
        http_failure(422, serde_json::json!({ "error": "VENDA_SEM_ITENS" })),
        http_failure(503, serde_json::json!({})),
        RawFailure::runtime("panic-adjacent"),
        RawFailure::Unknown,
    ];

    let surfaces: Vec<FeedbackSurface> = failures
        .iter()
        .map(|f| select_surface(&process(f)))
        .collect();

    assert_eq!(
        surfaces,
        vec![
            FeedbackSurface::Banner,
            FeedbackSurface::Toast,
            FeedbackSurface::Banner,
            FeedbackSurface::Banner,
            FeedbackSurface::Banner,
        ]
    );
}
