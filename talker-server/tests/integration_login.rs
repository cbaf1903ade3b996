use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test};
use serde_json::{Value, json};
use talker_server::application::auth_service::AuthService;
use talker_server::application::talker_service::TalkerService;
use talker_server::data::talker_store::InMemoryStore;
use talker_server::server::configure;

macro_rules! app {
    () => {{
        let talkers = TalkerService::new(Arc::new(InMemoryStore::default()));
        test::init_service(
            App::new().configure(move |cfg| configure(cfg, talkers, AuthService::new())),
        )
        .await
    }};
}

#[actix_web::test]
async fn login_returns_a_sixteen_character_token() {
    let app = app!();

    let req = test::TestRequest::post()
        .uri("/login")
        .set_json(json!({ "email": "a@b.com", "password": "123456" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    let token = body["token"].as_str().unwrap();
    assert_eq!(token.len(), 16);
    assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
}

#[actix_web::test]
async fn issued_token_opens_gated_endpoints() {
    let app = app!();

    let req = test::TestRequest::post()
        .uri("/login")
        .set_json(json!({ "email": "a@b.com", "password": "123456" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let token = body["token"].as_str().unwrap().to_string();

    let req = test::TestRequest::get()
        .uri("/talker/search?q=x")
        .insert_header(("authorization", token))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn credential_errors_come_back_one_at_a_time() {
    let app = app!();

    let cases = [
        (json!({ "password": "123456" }), r#"O campo "email" é obrigatório"#),
        (
            json!({ "email": "a@b", "password": "123456" }),
            r#"O "email" deve ter o formato "email@email.com""#,
        ),
        (json!({ "email": "a@b.com" }), r#"O campo "password" é obrigatório"#),
        (
            json!({ "email": "a@b.com", "password": "12345" }),
            r#"O "password" deve ter pelo menos 6 caracteres"#,
        ),
        (json!({}), r#"O campo "email" é obrigatório"#),
    ];

    for (payload, message) in cases {
        let req = test::TestRequest::post()
            .uri("/login")
            .set_json(&payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{payload}");
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "message": message }), "{payload}");
    }
}

#[actix_web::test]
async fn missing_or_non_json_body_reads_as_empty_credentials() {
    let app = app!();

    let requests = [
        test::TestRequest::post().uri("/login"),
        test::TestRequest::post()
            .uri("/login")
            .insert_header(("content-type", "text/plain"))
            .set_payload("email=a@b.com"),
    ];

    for req in requests {
        let resp = test::call_service(&app, req.to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "message": r#"O campo "email" é obrigatório"# }));
    }
}
