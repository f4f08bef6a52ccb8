mod common;

use axum::http::StatusCode;
use serde_json::json;
use symbol_eye_api::domain::entities::Collection;

const UNKNOWN_ID: &str = "65f1a2b3c4d5e6f708192a3b";

/// (collection path, store collection) for every entity with create/list/delete.
const ENTITIES: [(&str, Collection); 5] = [
    ("/api/category", Collection::Categories),
    ("/api/products", Collection::Products),
    ("/api/services", Collection::Services),
    ("/api/gallery", Collection::Gallery),
    ("/api/faq", Collection::Faq),
];

// ─── CREATE / LIST ───────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_then_list_every_entity() {
    let repo = common::InMemoryRepository::new();
    let server = common::make_server(repo.clone());
    let token = common::admin_token();

    for (path, collection) in ENTITIES {
        let doc = json!({ "title": format!("{} entry", collection), "order": 1 });

        let response = server
            .post(path)
            .authorization_bearer(&token)
            .json(&doc)
            .await;

        response.assert_status_ok();
        let body = response.json::<serde_json::Value>();
        assert_eq!(body["acknowledged"], true);
        let inserted_id = body["insertedId"].as_str().unwrap().to_string();
        assert_eq!(inserted_id.len(), 24);

        let listed = server.get(path).await.json::<serde_json::Value>();
        let items = listed.as_array().unwrap();

        assert_eq!(items.len(), 1, "{path}");
        assert_eq!(items[0]["_id"], inserted_id);
        assert_eq!(items[0]["title"], doc["title"]);
        assert_eq!(items[0]["order"], 1);
    }
}

#[tokio::test]
async fn test_create_accepts_any_shape() {
    let server = common::make_server(common::InMemoryRepository::new());

    let doc = json!({
        "question": "Do you ship abroad?",
        "answer": { "short": "Yes", "regions": ["EU", "US"] }
    });

    server
        .post("/api/faq")
        .authorization_bearer(&common::admin_token())
        .json(&doc)
        .await
        .assert_status_ok();

    let items = server.get("/api/faq").await.json::<serde_json::Value>();
    assert_eq!(items[0]["answer"], doc["answer"]);
}

#[tokio::test]
async fn test_create_ignores_client_supplied_id() {
    let repo = common::InMemoryRepository::new();
    let server = common::make_server(repo.clone());

    let body = server
        .post("/api/category")
        .authorization_bearer(&common::admin_token())
        .json(&json!({ "_id": "my-own-id", "name": "Frames" }))
        .await
        .json::<serde_json::Value>();

    let stored = repo.documents(Collection::Categories);
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0]["_id"], body["insertedId"]);
    assert_ne!(stored[0]["_id"], "my-own-id");
}

#[tokio::test]
async fn test_list_preserves_storage_order() {
    let repo = common::InMemoryRepository::new();
    repo.seed(Collection::Gallery, json!({ "image": "a.jpg" }));
    repo.seed(Collection::Gallery, json!({ "image": "b.jpg" }));
    repo.seed(Collection::Gallery, json!({ "image": "c.jpg" }));
    let server = common::make_server(repo);

    let items = server.get("/api/gallery").await.json::<serde_json::Value>();
    let images: Vec<_> = items
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["image"].as_str().unwrap())
        .collect();

    assert_eq!(images, vec!["a.jpg", "b.jpg", "c.jpg"]);
}

#[tokio::test]
async fn test_create_with_invalid_json_is_bad_request() {
    let repo = common::InMemoryRepository::new();
    let server = common::make_server(repo.clone());

    let response = server
        .post("/api/category")
        .authorization_bearer(&common::admin_token())
        .bytes("{ not json".into())
        .content_type("application/json")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(response.json::<serde_json::Value>()["message"].is_string());
    assert_eq!(repo.calls(), 0);
}

// ─── DELETE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_delete_existing_document() {
    let repo = common::InMemoryRepository::new();
    let id = repo.seed(Collection::Categories, json!({ "name": "Frames" }));
    repo.seed(Collection::Categories, json!({ "name": "Lenses" }));
    let server = common::make_server(repo.clone());

    let response = server
        .delete(&format!("/api/category/{id}"))
        .authorization_bearer(&common::admin_token())
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "acknowledged": true, "deletedCount": 1 })
    );

    let remaining = repo.documents(Collection::Categories);
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0]["name"], "Lenses");
}

#[tokio::test]
async fn test_delete_unknown_id_is_idempotent() {
    let server = common::make_server(common::InMemoryRepository::new());
    let token = common::admin_token();

    for (path, _) in ENTITIES {
        let response = server
            .delete(&format!("{path}/{UNKNOWN_ID}"))
            .authorization_bearer(&token)
            .await;

        response.assert_status_ok();
        assert_eq!(
            response.json::<serde_json::Value>(),
            json!({ "acknowledged": true, "deletedCount": 0 }),
            "{path}"
        );
    }
}

#[tokio::test]
async fn test_delete_twice_reports_zero_second_time() {
    let repo = common::InMemoryRepository::new();
    let id = repo.seed(Collection::Faq, json!({ "question": "?" }));
    let server = common::make_server(repo);
    let token = common::admin_token();

    let first = server
        .delete(&format!("/api/faq/{id}"))
        .authorization_bearer(&token)
        .await
        .json::<serde_json::Value>();
    let second = server
        .delete(&format!("/api/faq/{id}"))
        .authorization_bearer(&token)
        .await
        .json::<serde_json::Value>();

    assert_eq!(first["deletedCount"], 1);
    assert_eq!(second["deletedCount"], 0);
}

#[tokio::test]
async fn test_delete_malformed_id_is_bad_request() {
    let repo = common::InMemoryRepository::new();
    let server = common::make_server(repo.clone());

    let response = server
        .delete("/api/gallery/not-an-id")
        .authorization_bearer(&common::admin_token())
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<serde_json::Value>()["message"],
        "invalid identifier: not-an-id"
    );
    assert_eq!(repo.calls(), 0);
}

// ─── SERVICE UPDATE ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_update_service_sets_only_given_fields() {
    let repo = common::InMemoryRepository::new();
    let id = repo.seed(
        Collection::Services,
        json!({ "title": "Eye test", "price": 15, "duration": "30m" }),
    );
    let server = common::make_server(repo.clone());

    let response = server
        .patch(&format!("/api/services/{id}"))
        .authorization_bearer(&common::admin_token())
        .json(&json!({ "price": 20 }))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "acknowledged": true, "matchedCount": 1, "modifiedCount": 1 })
    );

    let stored = &repo.documents(Collection::Services)[0];
    assert_eq!(stored["price"], 20);
    assert_eq!(stored["title"], "Eye test");
    assert_eq!(stored["duration"], "30m");
    assert_eq!(stored["_id"], id);
}

#[tokio::test]
async fn test_update_unknown_service_matches_nothing() {
    let server = common::make_server(common::InMemoryRepository::new());

    let response = server
        .patch(&format!("/api/services/{UNKNOWN_ID}"))
        .authorization_bearer(&common::admin_token())
        .json(&json!({ "title": "x" }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["matchedCount"], 0);
}

#[tokio::test]
async fn test_update_service_with_empty_body_is_bad_request() {
    let repo = common::InMemoryRepository::new();
    let id = repo.seed(Collection::Services, json!({ "title": "Eye test" }));
    let server = common::make_server(repo);

    let response = server
        .patch(&format!("/api/services/{id}"))
        .authorization_bearer(&common::admin_token())
        .json(&json!({}))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_service_rejects_operator_and_path_keys() {
    let repo = common::InMemoryRepository::new();
    let id = repo.seed(Collection::Services, json!({ "title": "Eye test", "price": 15 }));
    let server = common::make_server(repo.clone());
    let calls_before = repo.calls();

    for body in [json!({ "meta.color": "red" }), json!({ "$inc": { "price": 1 } })] {
        let response = server
            .patch(&format!("/api/services/{id}"))
            .authorization_bearer(&common::admin_token())
            .json(&body)
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert!(
            response.json::<serde_json::Value>()["message"]
                .as_str()
                .unwrap()
                .starts_with("invalid field name")
        );
    }

    assert_eq!(repo.calls(), calls_before);
    let stored = &repo.documents(Collection::Services)[0];
    assert_eq!(stored["price"], 15);
    assert!(stored.get("meta.color").is_none());
}

#[tokio::test]
async fn test_create_rejects_operator_keys() {
    let repo = common::InMemoryRepository::new();
    let server = common::make_server(repo.clone());

    let response = server
        .post("/api/gallery")
        .authorization_bearer(&common::admin_token())
        .json(&json!({ "$where": "1", "image": "a.jpg" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(repo.documents(Collection::Gallery).is_empty());
}

// ─── STORE FAILURES ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_unreachable_store_is_service_unavailable() {
    let repo = common::InMemoryRepository::new();
    repo.set_unavailable(true);
    let server = common::make_server(repo.clone());

    let response = server.get("/api/products").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "message": "database unavailable" })
    );

    let response = server
        .post("/api/faq")
        .authorization_bearer(&common::admin_token())
        .json(&json!({ "question": "?" }))
        .await;
    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    // The process keeps serving once the store is back.
    repo.set_unavailable(false);
    server
        .post("/api/faq")
        .authorization_bearer(&common::admin_token())
        .json(&json!({ "question": "?" }))
        .await
        .assert_status_ok();
    server.get("/api/products").await.assert_status_ok();
    assert_eq!(repo.documents(Collection::Faq).len(), 1);
}
