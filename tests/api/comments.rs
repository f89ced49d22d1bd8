use serde_json::json;

use crate::common::{TestApp, routes_for};

mod create_comment {
    use super::*;

    #[tokio::test]
    async fn returns_created_comment() {
        let app = TestApp::spawn().await;
        let image_id = app.create_image("https://cdn.example/a.png").await;

        let res = app
            .post_json(
                &routes_for::comments(image_id),
                &json!({ "content": "nice shot" }),
            )
            .await;

        assert_eq!(res.status, 201);
        assert!(res.body["id"].as_i64().unwrap() > 0);
        assert_eq!(res.body["content"], "nice shot");
        assert_eq!(res.body["imageId"], image_id);
        assert!(res.body["createdAt"].as_str().is_some());
    }

    #[tokio::test]
    async fn new_comment_is_listed_first() {
        let app = TestApp::spawn().await;
        let image_id = app.create_image("https://cdn.example/a.png").await;
        app.create_comment(image_id, "earlier").await;
        let latest = app.create_comment(image_id, "latest").await;

        let res = app.get(&routes_for::comments(image_id)).await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body[0], latest);
    }

    #[tokio::test]
    async fn missing_image_is_not_found() {
        let app = TestApp::spawn().await;

        let res = app
            .post_json(&routes_for::comments(999), &json!({ "content": "hello?" }))
            .await;

        assert_eq!(res.status, 404);
        assert_eq!(res.body, json!({ "error": "Image not found." }));
        assert_eq!(app.row_count("comments").await, 0);
    }

    #[tokio::test]
    async fn rejects_missing_or_non_string_content() {
        let app = TestApp::spawn().await;
        let image_id = app.create_image("https://cdn.example/a.png").await;

        for body in [
            json!({}),
            json!({ "content": "" }),
            json!({ "content": 3 }),
            json!({ "content": true }),
            json!({ "text": "wrong field" }),
        ] {
            let res = app.post_json(&routes_for::comments(image_id), &body).await;
            assert_eq!(res.status, 400, "body {body} should be rejected");
            assert_eq!(
                res.body["error"],
                "Content is required and must be a string."
            );
        }

        assert_eq!(app.row_count("comments").await, 0);
    }

    #[tokio::test]
    async fn rejects_invalid_image_id() {
        let app = TestApp::spawn().await;

        for raw in ["abc", "0", "-1", "1.5"] {
            let res = app
                .post_json(&routes_for::comments(raw), &json!({ "content": "hi" }))
                .await;
            assert_eq!(res.status, 400, "id {raw} should be rejected");
            assert_eq!(res.body["error"], "Invalid image ID.");
        }
    }

    #[tokio::test]
    async fn invalid_image_id_wins_over_a_bad_body() {
        let app = TestApp::spawn().await;

        for content_type in ["application/json", "text/plain"] {
            let res = app
                .post_raw(&routes_for::comments("abc"), content_type, "{ bad")
                .await;
            assert_eq!(res.status, 400, "content type {content_type}");
            assert_eq!(res.body, json!({ "error": "Invalid image ID." }));
        }
    }

    #[tokio::test]
    async fn bad_body_on_a_valid_id_is_still_rejected() {
        let app = TestApp::spawn().await;
        let image_id = app.create_image("https://cdn.example/a.png").await;

        let res = app
            .post_raw(&routes_for::comments(image_id), "application/json", "{ bad")
            .await;

        assert_eq!(res.status, 400);
        assert!(
            res.body["error"]
                .as_str()
                .unwrap()
                .starts_with("Invalid JSON body")
        );
        assert_eq!(app.row_count("comments").await, 0);
    }
}

mod list_comments {
    use super::*;

    #[tokio::test]
    async fn image_without_comments_lists_empty() {
        let app = TestApp::spawn().await;
        let image_id = app.create_image("https://cdn.example/a.png").await;

        let res = app.get(&routes_for::comments(image_id)).await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body, json!([]));
    }

    #[tokio::test]
    async fn comments_are_newest_first() {
        let app = TestApp::spawn().await;
        let image_id = app.create_image("https://cdn.example/a.png").await;
        let t1 = app.create_comment(image_id, "t1").await;
        let t2 = app.create_comment(image_id, "t2").await;
        let t3 = app.create_comment(image_id, "t3").await;

        let res = app.get(&routes_for::comments(image_id)).await;

        assert_eq!(res.body, json!([t3, t2, t1]));
    }

    #[tokio::test]
    async fn only_lists_comments_of_the_requested_image() {
        let app = TestApp::spawn().await;
        let cat = app.create_image("https://cdn.example/cat.png").await;
        let dog = app.create_image("https://cdn.example/dog.png").await;
        let on_cat = app.create_comment(cat, "meow").await;
        app.create_comment(dog, "woof").await;

        let res = app.get(&routes_for::comments(cat)).await;

        assert_eq!(res.body, json!([on_cat]));
    }

    #[tokio::test]
    async fn invalid_image_id_is_rejected_before_touching_storage() {
        let app = TestApp::spawn().await;
        // With the table gone, any store access would surface as a 500.
        sqlx::query("DROP TABLE comments")
            .execute(&app.pool)
            .await
            .unwrap();

        let res = app.get(&routes_for::comments("abc")).await;
        assert_eq!(res.status, 400);
        assert_eq!(res.body, json!({ "error": "Invalid image ID." }));

        let res = app
            .post_json(&routes_for::comments("abc"), &json!({ "content": "hi" }))
            .await;
        assert_eq!(res.status, 400);

        let res = app.get(&routes_for::comments(1)).await;
        assert_eq!(res.status, 500);
        assert_eq!(res.body, json!({ "error": "Failed to fetch comments." }));
    }
}
