mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

#[tokio::test]
async fn test_create_routine() {
    let app = common::create_test_app();

    let response = app
        .router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/routines")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({"title": "Leg Day", "description": "Lower body focus"}).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let routine: Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(routine["title"], "Leg Day");
    assert_eq!(routine["rows"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_show_routine_not_found() {
    let app = common::create_test_app();

    let response = app
        .router
        .oneshot(
            Request::builder()
                .uri("/routines/nonexistent")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_routine_info() {
    let app = common::create_test_app();
    let routine = common::create_test_routine(&app.routine_repo, "Leg Day").await;

    let response = app
        .router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(&format!("/routines/{}", routine.id))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json!({"title": "Push Day"}).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let updated = app.routine_repo.find_by_id(&routine.id).await.unwrap();
    assert_eq!(updated.title, "Push Day");
}

#[tokio::test]
async fn test_add_row_defaults() {
    let app = common::create_test_app();
    let routine = common::create_test_routine(&app.routine_repo, "Leg Day").await;

    // Empty payload: a fresh blank row, numbered after the existing rows
    let response = app
        .router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(&format!("/routines/{}/rows", routine.id))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{}"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let row: Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(row["order"], 1);
    assert_eq!(row["exercise_name"], "");
    assert_eq!(row["notes"], "");
}

#[tokio::test]
async fn test_update_row() {
    let app = common::create_test_app();
    let routine = common::create_test_routine(&app.routine_repo, "Leg Day").await;
    let row = common::add_test_row(&app.routine_repo, &routine.id, "Squat", "").await;

    let response = app
        .router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(&format!("/routines/{}/rows/{}", routine.id, row.id))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({"weight": "110kg", "notes": "Pause at the bottom"}).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let rows = app.routine_repo.find_by_id(&routine.id).await.unwrap().rows;
    assert_eq!(rows[0].weight, "110kg");
    assert_eq!(rows[0].notes, "Pause at the bottom");
    assert_eq!(rows[0].exercise_name, "Squat");
}

#[tokio::test]
async fn test_delete_row() {
    let app = common::create_test_app();
    let routine = common::create_test_routine(&app.routine_repo, "Leg Day").await;
    let row = common::add_test_row(&app.routine_repo, &routine.id, "Squat", "").await;

    let response = app
        .router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(&format!("/routines/{}/rows/{}/delete", routine.id, row.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(app
        .routine_repo
        .find_by_id(&routine.id)
        .await
        .unwrap()
        .rows
        .is_empty());
}

#[tokio::test]
async fn test_delete_nonexistent_row() {
    let app = common::create_test_app();
    let routine = common::create_test_routine(&app.routine_repo, "Leg Day").await;

    let response = app
        .router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(&format!("/routines/{}/rows/nonexistent/delete", routine.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_duplicate_row() {
    let app = common::create_test_app();
    let routine = common::create_test_routine(&app.routine_repo, "Leg Day").await;
    let row = common::add_test_row(&app.routine_repo, &routine.id, "Squat", "Full depth").await;

    let response = app
        .router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(&format!("/routines/{}/rows/{}/duplicate", routine.id, row.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let copy: Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(copy["exercise_name"], "Squat");
    assert_eq!(copy["notes"], "Full depth");
    assert_ne!(copy["id"], row.id.as_str());
    assert_eq!(copy["order"], 2);

    let rows = app.routine_repo.find_by_id(&routine.id).await.unwrap().rows;
    assert_eq!(rows.len(), 2);
}
