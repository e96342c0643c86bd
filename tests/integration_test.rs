use mockito::Matcher;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tinyrest::{Client, ContentKind, Error, Payload, RequestOptions};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
struct Todo {
    id: u32,
    title: String,
    completed: bool,
}

#[tokio::test]
async fn test_full_crud_round_trip() {
    let mut server = mockito::Server::new_async().await;

    let _create = server
        .mock("POST", "/todos")
        .match_body(Matcher::Json(json!({
            "id": 1,
            "title": "Buy milk",
            "completed": false
        })))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id":1,"title":"Buy milk","completed":false}"#)
        .create_async()
        .await;

    let _get = server
        .mock("GET", "/todos/1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id":1,"title":"Buy milk","completed":false}"#)
        .create_async()
        .await;

    let _update = server
        .mock("PUT", "/todos/1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id":1,"title":"Buy milk","completed":true}"#)
        .create_async()
        .await;

    let _delete = server
        .mock("DELETE", "/todos/1")
        .with_status(204)
        .create_async()
        .await;

    let client = Client::new(&server.url()).unwrap();
    let options = RequestOptions::default();

    let todo = Todo {
        id: 1,
        title: "Buy milk".to_string(),
        completed: false,
    };

    let created = client.post("/todos", &todo, &options).await.unwrap();
    assert_eq!(created.status, 201);
    assert_eq!(created.status_text.as_deref(), Some("Created"));
    let created: Todo = created.body.json().await.unwrap();
    assert_eq!(created, todo);

    let fetched: Todo = client.get_json("/todos/1", &options).await.unwrap();
    assert_eq!(fetched, todo);

    let updated = client
        .put("/todos/1", &json!({"completed": true}), &options)
        .await
        .unwrap();
    let updated: Todo = updated.body.json().await.unwrap();
    assert!(updated.completed);

    let deleted = client.delete("/todos/1", &options).await.unwrap();
    assert_eq!(deleted.status, 204);
}

#[tokio::test]
async fn test_status_is_available_before_the_body_is_read() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/todos")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"id":1,"title":"Test","completed":false}]"#)
        .create_async()
        .await;

    let client = Client::new(&server.url()).unwrap();
    let response = client
        .get("/todos", &RequestOptions::default())
        .await
        .unwrap();

    // Metadata and the classified kind are inspectable without decoding.
    assert_eq!(response.status, 200);
    assert_eq!(response.status_text.as_deref(), Some("OK"));
    assert_eq!(response.body.kind(), ContentKind::Json);

    let todos = response.body.read().await.unwrap();
    assert_eq!(
        todos,
        Payload::Json(json!([{"id": 1, "title": "Test", "completed": false}]))
    );
}

#[tokio::test]
async fn test_failed_status_aborts_before_decoding() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/todos/99")
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body("<html>not json at all</html>")
        .create_async()
        .await;

    let client = Client::new(&server.url()).unwrap();
    let err = client
        .get("/todos/99", &RequestOptions::default())
        .await
        .unwrap_err();

    mock.assert_async().await;
    // The malformed body never surfaces; the status error wins.
    assert_eq!(err.to_string(), "Client error: [404] (Not Found)");
    assert!(matches!(err, Error::Client { status: 404, .. }));
}

#[tokio::test]
async fn test_unknown_content_types_fall_back_to_text() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/page")
        .with_status(200)
        .with_header("content-type", "text/html; charset=utf-8")
        .with_body("<p>hi</p>")
        .create_async()
        .await;

    let client = Client::new(&server.url()).unwrap();
    let response = client.get("/page", &RequestOptions::default()).await.unwrap();

    assert_eq!(response.body.kind(), ContentKind::Text);
    assert_eq!(
        response.body.read().await.unwrap(),
        Payload::Text("<p>hi</p>".to_string())
    );
}

#[test]
fn test_invalid_base_url_fails_without_any_request() {
    for base_url in ["not-a-valid-url", ""] {
        let err = Client::new(base_url).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)), "{base_url:?}");
    }
}

#[tokio::test]
async fn test_concurrent_requests_share_nothing_but_the_base_url() {
    let mut server = mockito::Server::new_async().await;
    let _a = server
        .mock("GET", "/a")
        .with_status(200)
        .with_body("a")
        .create_async()
        .await;
    let _b = server
        .mock("GET", "/b")
        .with_status(200)
        .with_body("b")
        .create_async()
        .await;

    let client = Client::new(&server.url()).unwrap();
    let options = RequestOptions::default();
    let (a, b) = tokio::join!(
        client.get("/a", &options),
        client.get("/b", &options),
    );

    assert_eq!(a.unwrap().body.read().await.unwrap(), Payload::Text("a".to_string()));
    assert_eq!(b.unwrap().body.read().await.unwrap(), Payload::Text("b".to_string()));
}
