//! HTTP tests for `/clientes`

mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::{json, Value};

use resto_api::app::create_app;
use resto_api::config::ErrorConfig;

use common::test_state;

#[actix_web::test]
async fn test_create_client_and_reject_duplicate_document() {
    let (state, _) = test_state(ErrorConfig::default());
    let app = test::init_service(create_app(state)).await;

    let payload = json!({
        "documento": "1020304050",
        "nombreCompleto": "Ana María Pérez",
        "whatsapp": "+573001234567",
        "fechaNacimiento": "1990-05-17"
    });

    let req = test::TestRequest::post()
        .uri("/clientes")
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["documento"], "1020304050");
    assert_eq!(body["estatus"], true);
    assert!(body["fechaRegistro"].is_string());

    let req = test::TestRequest::post()
        .uri("/clientes")
        .set_json(json!({ "documento": " 1020304050 ", "nombreCompleto": "Otra Persona" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "El documento ya está registrado");
}

#[actix_web::test]
async fn test_create_client_rejects_bad_whatsapp() {
    let (state, _) = test_state(ErrorConfig::default());
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/clientes")
        .set_json(json!({
            "documento": "99",
            "nombreCompleto": "Luis Gómez",
            "whatsapp": "3001234567"
        }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_update_client_document_rules() {
    let (state, _) = test_state(ErrorConfig::default());
    let app = test::init_service(create_app(state)).await;

    let mut ids = Vec::new();
    for (document, name) in [("111", "Ana Pérez"), ("222", "Luis Gómez")] {
        let req = test::TestRequest::post()
            .uri("/clientes")
            .set_json(json!({ "documento": document, "nombreCompleto": name }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        ids.push(body["_id"].as_str().unwrap().to_string());
    }

    // Taking another client's document
    let req = test::TestRequest::put()
        .uri(&format!("/clientes/{}", ids[1]))
        .set_json(json!({ "documento": "111" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("otro cliente"));

    // Re-sending its own document is fine
    let req = test::TestRequest::put()
        .uri(&format!("/clientes/{}", ids[0]))
        .set_json(json!({ "documento": "111", "direccion": "Carrera 7 #12-30" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["direccion"], "Carrera 7 #12-30");
    assert_eq!(body["nombreCompleto"], "Ana Pérez");
}

#[actix_web::test]
async fn test_search_and_lookup_by_document() {
    let (state, _) = test_state(ErrorConfig::default());
    let app = test::init_service(create_app(state)).await;

    for (document, name) in [
        ("111", "Ana María Pérez"),
        ("222", "Luis Gómez"),
        ("333", "María López"),
    ] {
        let req = test::TestRequest::post()
            .uri("/clientes")
            .set_json(json!({ "documento": document, "nombreCompleto": name }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);
    }

    let req = test::TestRequest::get()
        .uri("/clientes/buscar?nombre=Ana%20Mar%C3%ADa")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let results = body.as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["nombreCompleto"], "Ana María Pérez");

    let req = test::TestRequest::get().uri("/clientes/buscar").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Parámetro nombre es requerido");

    let req = test::TestRequest::get().uri("/clientes/documento/222").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["nombreCompleto"], "Luis Gómez");

    let req = test::TestRequest::get().uri("/clientes/documento/999").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Cliente no encontrado");
}

#[actix_web::test]
async fn test_delete_client() {
    let (state, _) = test_state(ErrorConfig::default());
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/clientes")
        .set_json(json!({ "documento": "111", "nombreCompleto": "Ana Pérez" }))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let uri = format!("/clientes/{}", created["_id"].as_str().unwrap());

    let req = test::TestRequest::delete().uri(&uri).to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["message"], "Cliente eliminado correctamente");

    let req = test::TestRequest::get().uri(&uri).to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get().uri("/clientes").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert!(body.as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn test_birth_date_accepts_date_and_timestamp() {
    let (state, _) = test_state(ErrorConfig::default());
    let app = test::init_service(create_app(state)).await;

    for (document, birth_date) in [("1", "1990-01-15T00:00:00.000Z"), ("2", "1990-01-15")] {
        let req = test::TestRequest::post()
            .uri("/clientes")
            .set_json(json!({
                "documento": document,
                "nombreCompleto": "Ana",
                "fechaNacimiento": birth_date
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["fechaNacimiento"], "1990-01-15");
    }

    let req = test::TestRequest::post()
        .uri("/clientes")
        .set_json(json!({
            "documento": "3",
            "nombreCompleto": "Ana",
            "fechaNacimiento": "2999-01-01T00:00:00.000Z"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "La fecha de nacimiento no puede ser futura");
}

#[actix_web::test]
async fn test_empty_whatsapp_is_accepted() {
    let (state, _) = test_state(ErrorConfig::default());
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/clientes")
        .set_json(json!({ "documento": "2", "nombreCompleto": "Ana", "whatsapp": "" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert!(body.get("whatsapp").is_none());
}
