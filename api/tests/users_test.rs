//! HTTP tests for `/usuarios`

mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::{json, Value};

use resto_api::app::create_app;
use resto_api::config::ErrorConfig;

use common::test_state;

#[actix_web::test]
async fn test_create_user_hides_password() {
    let (state, _) = test_state(ErrorConfig::default());
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/usuarios")
        .set_json(json!({ "email": " Admin@Restaurante.com ", "password": "secreto1", "rol": "admin" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["email"], "admin@restaurante.com");
    assert_eq!(body["rol"], "admin");
    assert_eq!(body["estatus"], true);
    assert!(body.get("password").is_none());
    assert!(!body.to_string().contains("secreto1"));
}

#[actix_web::test]
async fn test_create_user_rejections() {
    let (state, _) = test_state(ErrorConfig::default());
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/usuarios")
        .set_json(json!({ "email": "mesero@restaurante.com", "password": "secreto1" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["rol"], "asesor");

    let req = test::TestRequest::post()
        .uri("/usuarios")
        .set_json(json!({ "email": "MESERO@restaurante.com", "password": "otraclave" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "El email ya está registrado");

    let req = test::TestRequest::post()
        .uri("/usuarios")
        .set_json(json!({ "email": "nuevo@restaurante.com", "password": "123" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/usuarios")
        .set_json(json!({ "email": "no-es-email", "password": "secreto1" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_login_success_returns_summary() {
    let (state, _) = test_state(ErrorConfig::default());
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/usuarios")
        .set_json(json!({ "email": "admin@restaurante.com", "password": "secreto1", "rol": "admin" }))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/usuarios/login")
        .set_json(json!({ "email": "ADMIN@restaurante.com", "password": "secreto1" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({
            "message": "Login exitoso",
            "usuario": {
                "id": created["_id"],
                "email": "admin@restaurante.com",
                "rol": "admin"
            }
        })
    );
}

#[actix_web::test]
async fn test_login_failures_are_indistinguishable() {
    let (state, _) = test_state(ErrorConfig::default());
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/usuarios")
        .set_json(json!({ "email": "activo@restaurante.com", "password": "secreto1" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri("/usuarios")
        .set_json(json!({ "email": "inactivo@restaurante.com", "password": "secreto1", "estatus": false }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    let attempts = [
        json!({ "email": "activo@restaurante.com", "password": "incorrecta" }),
        json!({ "email": "inactivo@restaurante.com", "password": "secreto1" }),
        json!({ "email": "nadie@restaurante.com", "password": "secreto1" }),
    ];

    for attempt in attempts {
        let req = test::TestRequest::post()
            .uri("/usuarios/login")
            .set_json(&attempt)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "error": "Credenciales inválidas" }));
    }
}

#[actix_web::test]
async fn test_update_password_changes_login() {
    let (state, _) = test_state(ErrorConfig::default());
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/usuarios")
        .set_json(json!({ "email": "cajero@restaurante.com", "password": "secreto1" }))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let uri = format!("/usuarios/{}", created["_id"].as_str().unwrap());

    let req = test::TestRequest::put()
        .uri(&uri)
        .set_json(json!({ "password": "nuevaclave" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert!(body.get("password").is_none());

    let login = |password: &str| {
        test::TestRequest::post()
            .uri("/usuarios/login")
            .set_json(json!({ "email": "cajero@restaurante.com", "password": password }))
            .to_request()
    };

    assert_eq!(
        test::call_service(&app, login("secreto1")).await.status(),
        StatusCode::UNAUTHORIZED
    );
    assert_eq!(
        test::call_service(&app, login("nuevaclave")).await.status(),
        StatusCode::OK
    );
}

#[actix_web::test]
async fn test_get_and_delete_user() {
    let (state, _) = test_state(ErrorConfig::default());
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/usuarios")
        .set_json(json!({ "email": "ana@restaurante.com", "password": "secreto1" }))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let uri = format!("/usuarios/{}", created["_id"].as_str().unwrap());

    let req = test::TestRequest::get().uri(&uri).to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["email"], "ana@restaurante.com");

    let req = test::TestRequest::get().uri("/usuarios").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.as_array().unwrap().len(), 1);

    let req = test::TestRequest::delete().uri(&uri).to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["message"], "Usuario eliminado correctamente");

    let req = test::TestRequest::delete().uri(&uri).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Usuario no encontrado");
}

#[actix_web::test]
async fn test_get_login_path_is_treated_as_id() {
    let (state, _) = test_state(ErrorConfig::default());
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::get().uri("/usuarios/login").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_email_must_be_ascii() {
    let (state, _) = test_state(ErrorConfig::default());
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/usuarios")
        .set_json(json!({ "email": "ñandu@mail.com", "password": "secreto" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Por favor ingresa un email válido");
}
