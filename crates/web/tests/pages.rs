//! Server-rendered pages.

mod common;

use axum::http::{StatusCode, header::LOCATION};
use common::{
    body_text, build_strict_app, build_test_app, create_athlete, get, post_form, post_json,
};
use serde_json::json;

#[tokio::test]
async fn test_home_lists_athletes() {
    let app = build_test_app();

    let response = get(&app, "/").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("No powerlifters yet"));

    create_athlete(
        &app,
        json!({"first_name": "Jane", "last_name": "Doe", "weight": 60, "gender": "Female"}),
    )
    .await;

    let response = get(&app, "/").await;
    assert!(body_text(response).await.contains("Jane Doe"));
}

#[tokio::test]
async fn test_form_post_creates_and_redirects() {
    let app = build_test_app();

    let response = get(&app, "/athletes/new").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains(r#"name="first_name""#));

    let response = post_form(
        &app,
        "/athletes/new",
        "first_name=John&last_name=Roe&weight=82.4&gender=Male&squat=180&bench=120&deadlift=220",
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[LOCATION], "/");

    let response = get(&app, "/").await;
    let page = body_text(response).await;
    assert!(page.contains("John Roe"));
    assert!(page.contains("83kg"));
    assert!(page.contains("520"));
}

#[tokio::test]
async fn test_form_post_with_missing_fields_is_rejected() {
    let app = build_test_app();

    let response = post_form(&app, "/athletes/new", "first_name=John").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let page = body_text(response).await;
    assert!(page.contains(r#"<ul class="errors">"#));
    assert!(page.contains(r#"<form method="post" action="/athletes/new">"#));
}

#[tokio::test]
async fn test_form_post_duplicate_shows_form_again() {
    let app = build_test_app();
    let body = "first_name=John&last_name=Roe&weight=82&gender=Male&squat=0&bench=0&deadlift=0";

    let response = post_form(&app, "/athletes/new", body).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let response = post_form(&app, "/athletes/new", body).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let page = body_text(response).await;
    assert!(page.contains("An athlete named John Roe already exists"));
    assert!(page.contains("<title>Add a powerlifter | Liftlog</title>"));
}

#[tokio::test]
async fn test_form_post_unknown_gender_when_strict() {
    let app = build_strict_app();

    let response = post_form(
        &app,
        "/athletes/new",
        "first_name=Sam&last_name=Lee&weight=70&gender=Other&squat=0&bench=0&deadlift=0",
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let page = body_text(response).await;
    assert!(page.contains("gender: Gender must be &#39;Male&#39; or &#39;Female&#39;"));

    let response = get(&app, "/").await;
    assert!(body_text(response).await.contains("No powerlifters yet"));
}

#[tokio::test]
async fn test_leaderboard_shows_top_three() {
    let app = build_test_app();
    for (first_name, bench) in [("A", 100), ("B", 140), ("C", 120), ("D", 90)] {
        create_athlete(
            &app,
            json!({
                "first_name": first_name,
                "last_name": "Lifter",
                "weight": 90,
                "gender": "Male",
                "bench": bench
            }),
        )
        .await;
    }

    let response = get(&app, "/leaderboards/bench").await;
    assert_eq!(response.status(), StatusCode::OK);

    let page = body_text(response).await;
    assert!(page.contains("Heaviest Benches"));
    let b = page.find("B Lifter").expect("B listed");
    let c = page.find("C Lifter").expect("C listed");
    let a = page.find("A Lifter").expect("A listed");
    assert!(b < c && c < a);
    assert!(!page.contains("D Lifter"));

    let response = get(&app, "/leaderboards/curl").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_workouts_page_only_lists_athletes_with_history() {
    let app = build_test_app();
    for last_name in ["Adams", "Zimmer"] {
        create_athlete(
            &app,
            json!({"first_name": "Pat", "last_name": last_name, "weight": 70, "gender": "Female"}),
        )
        .await;
    }

    let response = post_json(
        &app,
        "/api/athletes/Pat/Zimmer/workouts",
        json!({"weight_squatted": 90, "top_set_rpe": 7.5}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = get(&app, "/workouts").await;
    let page = body_text(response).await;
    assert!(page.contains("Pat Zimmer"));
    assert!(!page.contains("Pat Adams"));
    assert!(page.contains("7.5"));
}

#[tokio::test]
async fn test_static_pages() {
    let app = build_test_app();

    let response = get(&app, "/about").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Liftlog"));

    let response = get(&app, "/chat").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("/chat/ws"));
}
