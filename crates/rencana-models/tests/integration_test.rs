//! Integration tests for models created through `ModelFactory`.

use rencana_abstraction::{ModelError, ModelParameters};
use rencana_models::{ModelConfig, ModelFactory, ModelType};
use serde_json::{Value, json};

fn objectives_schema() -> Value {
    json!({
        "type": "ARRAY",
        "minItems": 6,
        "items": {
            "type": "OBJECT",
            "properties": {
                "materiPokok": {"type": "STRING"},
                "tujuanPembelajaran": {"type": "STRING"}
            },
            "required": ["materiPokok", "tujuanPembelajaran"]
        }
    })
}

#[test]
fn test_factory_mock_fills_schema() {
    let model = ModelFactory::create(ModelConfig::new(ModelType::Mock, "mock".to_string())).unwrap();
    assert_eq!(model.model_id(), "mock");

    let params = ModelParameters::with_schema(&objectives_schema());
    let response = tokio_test::block_on(model.generate_text("Buat tujuan pembelajaran", Some(params))).unwrap();

    let items: Vec<Value> = serde_json::from_str(&response.content).unwrap();
    assert_eq!(items.len(), 6);
    assert!(items.iter().all(|item| item["tujuanPembelajaran"].is_string()));
    assert_ne!(items[0]["tujuanPembelajaran"], items[1]["tujuanPembelajaran"]);
}

#[tokio::test]
async fn test_factory_gemini_uses_configured_endpoint() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/models/gemini-2.5-flash:generateContent")
        .match_query(mockito::Matcher::UrlEncoded("key".to_string(), "secret".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"candidates": [{"content": {"parts": [{"text": "[]"}]}, "finishReason": "STOP"}]}"#)
        .create_async()
        .await;

    let config = ModelConfig::new(ModelType::Gemini, "gemini-2.5-flash".to_string())
        .with_api_key("secret".to_string())
        .with_base_url(server.url());
    let model = ModelFactory::create(config).unwrap();

    let response = model.generate_text("Halo", None).await.unwrap();
    assert_eq!(response.content, "[]");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_gemini_auth_failure_is_reported() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/models/gemini-2.5-flash:generateContent")
        .match_query(mockito::Matcher::Any)
        .with_status(403)
        .with_body("API key not valid")
        .create_async()
        .await;

    let config = ModelConfig::new(ModelType::Gemini, "gemini-2.5-flash".to_string())
        .with_api_key("wrong".to_string())
        .with_base_url(server.url());
    let err = ModelFactory::create(config).unwrap().generate_text("Halo", None).await.unwrap_err();

    assert!(matches!(err, ModelError::UnsupportedModelProvider(msg) if msg.contains("API key not valid")));
}
