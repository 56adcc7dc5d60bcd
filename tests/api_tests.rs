use axum::http::StatusCode;
use axum_test::TestServer;
use family_api::{AppBuilder, AppState, FamilyName, create_in_memory_app, create_router};
use serde_json::{Value, json};

fn setup_test_server() -> TestServer {
    let services = create_in_memory_app().unwrap();
    let app = create_router(AppState::from(services));
    TestServer::new(app).unwrap()
}

fn bob() -> Value {
    json!({ "first_name": "Bob", "age": 5, "lucky_numbers": [1, 13] })
}

#[tokio::test]
async fn test_member_lifecycle_over_http() {
    let server = setup_test_server();

    let response = server.get("/members").await;
    response.assert_status_ok();
    response.assert_json(&json!([]));

    let response = server.post("/member").json(&bob()).await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["message"], "Member added successfully");
    assert_eq!(body["data"]["id"], 1);

    let response = server.get("/member/1").await;
    response.assert_status_ok();
    response.assert_json(&json!({
        "id": 1,
        "first_name": "Bob",
        "age": 5,
        "lucky_numbers": [1, 13]
    }));

    let response = server.delete("/member/1").await;
    response.assert_status_ok();
    response.assert_json(&json!({ "done": true }));

    let response = server.get("/member/1").expect_failure().await;
    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["error"], "Member not found");

    server.get("/members").await.assert_json(&json!([]));
}

#[tokio::test]
async fn test_members_listed_in_insertion_order() {
    let server = setup_test_server();

    for name in ["John", "Jane", "Jimmy"] {
        server
            .post("/member")
            .json(&json!({ "first_name": name, "age": 30, "lucky_numbers": [7] }))
            .await
            .assert_status_ok();
    }

    let members: Vec<Value> = server.get("/members").await.json();
    let names: Vec<&str> = members
        .iter()
        .map(|m| m["first_name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["John", "Jane", "Jimmy"]);

    let ids: Vec<u64> = members.iter().map(|m| m["id"].as_u64().unwrap()).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_deleted_ids_are_not_reused() {
    let server = setup_test_server();

    server.post("/member").json(&bob()).await.assert_status_ok();
    server.post("/member").json(&bob()).await.assert_status_ok();
    server.delete("/member/2").await.assert_status_ok();

    let body: Value = server.post("/member").json(&bob()).await.json();
    assert_eq!(body["data"]["id"], 3);
}

#[tokio::test]
async fn test_add_member_missing_fields() {
    let server = setup_test_server();

    let response = server
        .post("/member")
        .json(&json!({ "first_name": "Bob" }))
        .expect_failure()
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "Missing required fields");
    assert_eq!(
        body["details"]["missing_fields"],
        json!(["age", "lucky_numbers"])
    );

    server.get("/members").await.assert_json(&json!([]));
}

#[tokio::test]
async fn test_add_member_wrong_types() {
    let server = setup_test_server();

    let response = server
        .post("/member")
        .json(&json!({ "first_name": "Bob", "age": "five", "lucky_numbers": [1] }))
        .expect_failure()
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["details"]["field"], "age");
}

#[tokio::test]
async fn test_add_member_malformed_json() {
    let server = setup_test_server();

    let response = server
        .post("/member")
        .text("{ not json")
        .content_type("application/json")
        .expect_failure()
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["kind"], "BadRequest");
}

#[tokio::test]
async fn test_delete_missing_member() {
    let server = setup_test_server();
    server.post("/member").json(&bob()).await.assert_status_ok();

    let response = server.delete("/member/42").expect_failure().await;
    response.assert_status(StatusCode::NOT_FOUND);

    let members: Vec<Value> = server.get("/members").await.json();
    assert_eq!(members.len(), 1);
}

#[tokio::test]
async fn test_non_numeric_id_is_not_found() {
    let server = setup_test_server();

    let response = server.get("/member/abc").expect_failure().await;
    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["error"], "Member not found");
}

#[tokio::test]
async fn test_family_endpoint_and_sitemap() {
    let services = AppBuilder::new()
        .with_family_name(FamilyName::new("Doe").unwrap())
        .build()
        .unwrap();
    let server = TestServer::new(create_router(AppState::from(services))).unwrap();

    server.post("/member").json(&bob()).await.assert_status_ok();

    let response = server.get("/family").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["family_name"], "Doe");
    assert_eq!(body["members"][0]["first_name"], "Bob");

    let response = server.get("/").await;
    response.assert_status_ok();
    let page = response.text();
    assert!(page.contains("Doe family API"));
    assert!(page.contains("/members"));
}

#[tokio::test]
async fn test_trailing_slash_paths() {
    let server = setup_test_server();

    let response = server.post("/member/").json(&bob()).await;
    response.assert_status_ok();

    let response = server.get("/members/").await;
    response.assert_status_ok();
    let members: Vec<Value> = response.json();
    assert_eq!(members.len(), 1);

    server.get("/member/1/").await.assert_status_ok();
}

#[tokio::test]
async fn test_array_body_reports_missing_fields() {
    let server = setup_test_server();

    let response = server
        .post("/member")
        .json(&json!([1, 2, 3]))
        .expect_failure()
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "Missing required fields");
    assert_eq!(
        body["details"]["missing_fields"],
        json!(["first_name", "age", "lucky_numbers"])
    );
}
