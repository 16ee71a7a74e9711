//! Bookmark endpoint integration tests

use axum::http::{header::LOCATION, Method, StatusCode};
use serde_json::{json, Value};
use std::collections::HashSet;
use tower::ServiceExt;
use uuid::Uuid;

use linkshelf_bookmarks::sanitize_bookmark;

use crate::common::{
    body_text, bookmark_json, make_bookmarks_array, make_malicious_bookmark, parse_body, TestApp,
};

mod test_list_bookmarks {
    use super::*;

    #[tokio::test]
    async fn test_empty_store_returns_empty_array() {
        let app = TestApp::new();

        let req = app.authed_request(Method::GET, "/bookmarks", None);
        let resp = app.router().oneshot(req).await.unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(parse_body(resp).await, json!([]));
    }

    #[tokio::test]
    async fn test_returns_all_bookmarks_in_insertion_order() {
        let bookmarks = make_bookmarks_array();
        let app = TestApp::with_bookmarks(bookmarks.clone());

        let req = app.authed_request(Method::GET, "/bookmarks", None);
        let resp = app.router().oneshot(req).await.unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let expected: Vec<Value> = bookmarks.iter().map(bookmark_json).collect();
        assert_eq!(parse_body(resp).await, Value::Array(expected));
    }

    #[tokio::test]
    async fn test_list_sanitizes_every_element() {
        let malicious = make_malicious_bookmark();
        let app = TestApp::with_bookmarks(vec![malicious.clone()]);

        let req = app.authed_request(Method::GET, "/bookmarks", None);
        let resp = app.router().oneshot(req).await.unwrap();
        let body = parse_body(resp).await;

        assert_eq!(body[0], bookmark_json(&sanitize_bookmark(&malicious)));
    }
}

mod test_get_bookmark {
    use super::*;

    #[tokio::test]
    async fn test_missing_returns_404_with_error_body() {
        let app = TestApp::new();

        let req = app.authed_request(
            Method::GET,
            "/bookmarks/1aaca0ef-1594-4cb7-b26e-dc60fc7afceb",
            None,
        );
        let resp = app.router().oneshot(req).await.unwrap();

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            parse_body(resp).await,
            json!({ "error": { "message": "Bookmark Not Found" } })
        );
    }

    #[tokio::test]
    async fn test_returns_the_bookmark() {
        let bookmarks = make_bookmarks_array();
        let expected = bookmarks[1].clone();
        let app = TestApp::with_bookmarks(bookmarks);

        let req = app.authed_request(Method::GET, &format!("/bookmarks/{}", expected.id), None);
        let resp = app.router().oneshot(req).await.unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(parse_body(resp).await, bookmark_json(&expected));
    }

    #[tokio::test]
    async fn test_malformed_id_returns_404() {
        let app = TestApp::with_bookmarks(make_bookmarks_array());

        let req = app.authed_request(Method::GET, "/bookmarks/not-a-uuid", None);
        let resp = app.router().oneshot(req).await.unwrap();

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}

mod test_create_bookmark {
    use super::*;

    fn thinkful_payload() -> Value {
        json!({
            "title": "Thinkful",
            "url": "https://thinkful.com",
            "description": "This is bookmark one",
            "rating": 4
        })
    }

    #[tokio::test]
    async fn test_create_returns_201_with_location() {
        let app = TestApp::new();

        let req = app.authed_request(Method::POST, "/bookmarks", Some(thinkful_payload()));
        let resp = app.router().oneshot(req).await.unwrap();

        assert_eq!(resp.status(), StatusCode::CREATED);
        let location = resp
            .headers()
            .get(LOCATION)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        let body = parse_body(resp).await;

        assert_eq!(body["title"], "Thinkful");
        assert_eq!(body["url"], "https://thinkful.com");
        assert_eq!(body["description"], "This is bookmark one");
        assert_eq!(body["rating"], 4);

        let id = body["id"].as_str().unwrap();
        assert_eq!(Uuid::parse_str(id).unwrap().get_version_num(), 4);
        assert_eq!(location, format!("/bookmarks/{}", id));
    }

    #[tokio::test]
    async fn test_created_bookmark_round_trips_through_get() {
        let app = TestApp::new();

        let req = app.authed_request(Method::POST, "/bookmarks", Some(thinkful_payload()));
        let created = parse_body(app.router().oneshot(req).await.unwrap()).await;

        let uri = format!("/bookmarks/{}", created["id"].as_str().unwrap());
        let req = app.authed_request(Method::GET, &uri, None);
        let resp = app.router().oneshot(req).await.unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(parse_body(resp).await, created);
    }

    #[tokio::test]
    async fn test_each_create_gets_a_fresh_id() {
        let app = TestApp::new();
        let mut seen = HashSet::new();

        for _ in 0..5 {
            let req = app.authed_request(Method::POST, "/bookmarks", Some(thinkful_payload()));
            let body = parse_body(app.router().oneshot(req).await.unwrap()).await;
            assert!(seen.insert(body["id"].as_str().unwrap().to_string()));
        }

        assert_eq!(app.store_len().await, 5);
    }

    #[tokio::test]
    async fn test_description_defaults_to_empty() {
        let app = TestApp::new();

        let req = app.authed_request(
            Method::POST,
            "/bookmarks",
            Some(json!({ "title": "t", "url": "https://t.io", "rating": 1 })),
        );
        let resp = app.router().oneshot(req).await.unwrap();

        assert_eq!(resp.status(), StatusCode::CREATED);
        assert_eq!(parse_body(resp).await["description"], "");
    }

    #[tokio::test]
    async fn test_validation_failures_return_400_with_message() {
        let cases = vec![
            (json!({ "url": "https://t.io", "rating": 3 }), "title required"),
            (
                json!({ "title": "", "url": "https://t.io", "rating": 3 }),
                "title required",
            ),
            (json!({ "title": "t", "rating": 3 }), "url required"),
            (json!({ "title": "t", "url": "https://t.io" }), "rating required"),
            (
                json!({ "title": "t", "url": "https://t.io", "rating": 0 }),
                "rating out of range",
            ),
            (
                json!({ "title": "t", "url": "https://t.io", "rating": 6 }),
                "rating out of range",
            ),
        ];

        for (payload, message) in cases {
            let app = TestApp::new();
            let req = app.authed_request(Method::POST, "/bookmarks", Some(payload.clone()));
            let resp = app.router().oneshot(req).await.unwrap();

            assert_eq!(
                resp.status(),
                StatusCode::BAD_REQUEST,
                "payload {} should be rejected",
                payload
            );
            assert_eq!(body_text(resp).await, message);
            assert_eq!(app.store_len().await, 0, "nothing may be stored");
        }
    }

    #[tokio::test]
    async fn test_wrong_rating_type_returns_400() {
        let app = TestApp::new();

        let req = app.authed_request(
            Method::POST,
            "/bookmarks",
            Some(json!({ "title": "t", "url": "https://t.io", "rating": "four" })),
        );
        let resp = app.router().oneshot(req).await.unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}

mod test_delete_bookmark {
    use super::*;

    #[tokio::test]
    async fn test_missing_returns_404() {
        let app = TestApp::new();

        let req = app.authed_request(
            Method::DELETE,
            &format!("/bookmarks/{}", Uuid::new_v4()),
            None,
        );
        let resp = app.router().oneshot(req).await.unwrap();

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_removes_the_bookmark() {
        let bookmarks = make_bookmarks_array();
        let target = bookmarks[1].clone();
        let app = TestApp::with_bookmarks(bookmarks.clone());

        let uri = format!("/bookmarks/{}", target.id);
        let resp = app
            .router()
            .oneshot(app.authed_request(Method::DELETE, &uri, None))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        assert!(body_text(resp).await.is_empty());

        let resp = app
            .router()
            .oneshot(app.authed_request(Method::GET, &uri, None))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let resp = app
            .router()
            .oneshot(app.authed_request(Method::GET, "/bookmarks", None))
            .await
            .unwrap();
        let remaining: Vec<Value> = bookmarks
            .iter()
            .filter(|b| b.id != target.id)
            .map(bookmark_json)
            .collect();
        assert_eq!(parse_body(resp).await, Value::Array(remaining));
    }

    #[tokio::test]
    async fn test_second_delete_returns_404() {
        let bookmarks = make_bookmarks_array();
        let uri = format!("/bookmarks/{}", bookmarks[0].id);
        let app = TestApp::with_bookmarks(bookmarks);

        let first = app
            .router()
            .oneshot(app.authed_request(Method::DELETE, &uri, None))
            .await
            .unwrap();
        assert_eq!(first.status(), StatusCode::NO_CONTENT);

        let second = app
            .router()
            .oneshot(app.authed_request(Method::DELETE, &uri, None))
            .await
            .unwrap();
        assert_eq!(second.status(), StatusCode::NOT_FOUND);
    }
}

mod test_update_bookmark {
    use super::*;

    #[tokio::test]
    async fn test_missing_returns_404() {
        let app = TestApp::new();

        let req = app.authed_request(
            Method::PATCH,
            &format!("/bookmarks/{}", Uuid::new_v4()),
            Some(json!({ "title": "new title" })),
        );
        let resp = app.router().oneshot(req).await.unwrap();

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_updates_only_supplied_fields() {
        let bookmarks = make_bookmarks_array();
        let original = bookmarks[0].clone();
        let app = TestApp::with_bookmarks(bookmarks);
        let uri = format!("/bookmarks/{}", original.id);

        let resp = app
            .router()
            .oneshot(app.authed_request(
                Method::PATCH,
                &uri,
                Some(json!({ "title": "new title" })),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        assert!(body_text(resp).await.is_empty());

        let resp = app
            .router()
            .oneshot(app.authed_request(Method::GET, &uri, None))
            .await
            .unwrap();
        let body = parse_body(resp).await;

        assert_eq!(body["id"], original.id.to_string());
        assert_eq!(body["title"], "new title");
        assert_eq!(body["url"], original.url);
        assert_eq!(body["description"], original.description);
        assert_eq!(body["rating"], original.rating);
    }

    #[tokio::test]
    async fn test_no_updatable_fields_returns_400_and_keeps_record() {
        let bookmarks = make_bookmarks_array();
        let original = bookmarks[0].clone();
        let app = TestApp::with_bookmarks(bookmarks);
        let uri = format!("/bookmarks/{}", original.id);

        for payload in [json!({}), json!({ "irrelevant": "field" })] {
            let resp = app
                .router()
                .oneshot(app.authed_request(Method::PATCH, &uri, Some(payload)))
                .await
                .unwrap();
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        }

        assert_eq!(app.stored(original.id).await, Some(original));
    }

    #[tokio::test]
    async fn test_invalid_rating_returns_400() {
        let bookmarks = make_bookmarks_array();
        let original = bookmarks[0].clone();
        let app = TestApp::with_bookmarks(bookmarks);

        let resp = app
            .router()
            .oneshot(app.authed_request(
                Method::PATCH,
                &format!("/bookmarks/{}", original.id),
                Some(json!({ "rating": 0 })),
            ))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(resp).await, "rating out of range");
        assert_eq!(app.stored(original.id).await, Some(original));
    }
}

mod test_sanitization {
    use super::*;

    #[tokio::test]
    async fn test_get_escapes_title_and_strips_handlers() {
        let malicious = make_malicious_bookmark();
        let app = TestApp::with_bookmarks(vec![malicious.clone()]);

        let req = app.authed_request(Method::GET, &format!("/bookmarks/{}", malicious.id), None);
        let body = parse_body(app.router().oneshot(req).await.unwrap()).await;

        assert_eq!(
            body["title"],
            r#"Naughty naughty very naughty &lt;script&gt;alert("xss");&lt;/script&gt;"#
        );
        let description = body["description"].as_str().unwrap();
        assert!(!description.contains("onerror"));
        assert!(description.contains("<strong>all</strong>"));
    }

    #[tokio::test]
    async fn test_create_response_is_sanitized_but_store_is_not() {
        let app = TestApp::new();

        let req = app.authed_request(
            Method::POST,
            "/bookmarks",
            Some(json!({
                "title": "Naughty <script>alert(1)</script>",
                "url": "https://thinkful.com",
                "rating": 4
            })),
        );
        let resp = app.router().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body = parse_body(resp).await;
        assert_eq!(body["title"], "Naughty &lt;script&gt;alert(1)&lt;/script&gt;");

        let id = Uuid::parse_str(body["id"].as_str().unwrap()).unwrap();
        let stored = app.stored(id).await.unwrap();
        assert_eq!(stored.title, "Naughty <script>alert(1)</script>");
    }
}

mod test_store_failures {
    use super::*;
    use std::sync::Arc;

    use axum::Router;
    use linkshelf_auth::AuthConfig;
    use linkshelf_bookmarks::{Bookmark, BookmarkPatch, BookmarkStore};
    use linkshelf_common::{Error, Result};

    use crate::common::{request_with_auth, TestConfig};

    /// Store whose every call fails as if the pool were exhausted
    struct UnavailableStore;

    #[async_trait::async_trait]
    impl BookmarkStore for UnavailableStore {
        async fn list_all(&self) -> Result<Vec<Bookmark>> {
            Err(Error::Database(sqlx::Error::PoolTimedOut))
        }

        async fn find(&self, _id: Uuid) -> Result<Option<Bookmark>> {
            Err(Error::Database(sqlx::Error::PoolTimedOut))
        }

        async fn insert(&self, _bookmark: &Bookmark) -> Result<Bookmark> {
            Err(Error::Database(sqlx::Error::PoolTimedOut))
        }

        async fn delete(&self, _id: Uuid) -> Result<u64> {
            Err(Error::Database(sqlx::Error::PoolTimedOut))
        }

        async fn update(&self, _id: Uuid, _patch: &BookmarkPatch) -> Result<u64> {
            Err(Error::Database(sqlx::Error::PoolTimedOut))
        }
    }

    fn unavailable_app() -> (Router, String) {
        let token = TestConfig::from_env().api_token;
        let router = linkshelf_app::create_app(
            Arc::new(UnavailableStore),
            AuthConfig {
                api_token: token.clone(),
            },
        );
        (router, format!("bearer {}", token))
    }

    async fn assert_generic_server_error(method: Method, uri: &str, body: Option<Value>) {
        let (router, auth) = unavailable_app();
        let req = request_with_auth(method, uri, Some(&auth), body);
        let resp = router.oneshot(req).await.unwrap();

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            parse_body(resp).await,
            json!({"error": {"message": "server error"}})
        );
    }

    #[tokio::test]
    async fn test_list_failure_is_generic_500() {
        assert_generic_server_error(Method::GET, "/bookmarks", None).await;
    }

    #[tokio::test]
    async fn test_resolution_failure_is_generic_500() {
        let id = Uuid::new_v4();
        let uri = format!("/bookmarks/{}", id);

        assert_generic_server_error(Method::GET, &uri, None).await;
        assert_generic_server_error(Method::DELETE, &uri, None).await;
        assert_generic_server_error(Method::PATCH, &uri, Some(json!({"title": "new"}))).await;
    }

    #[tokio::test]
    async fn test_insert_failure_is_generic_500() {
        let body = json!({"title": "Thinkful", "url": "https://thinkful.com", "rating": 4});
        assert_generic_server_error(Method::POST, "/bookmarks", Some(body)).await;
    }

    #[tokio::test]
    async fn test_auth_still_runs_before_store() {
        let (router, _) = unavailable_app();
        let req = request_with_auth(Method::GET, "/bookmarks", None, None);
        let resp = router.oneshot(req).await.unwrap();

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
