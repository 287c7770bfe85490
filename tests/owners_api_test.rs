mod common;

use axum::http::{header, StatusCode};
use common::{expect_json, ids, response_json, TestApp};
use serde_json::json;

const ERIKA: &str = "10000000-0000-0000-0000-000000000000";
const MAX: &str = "20000000-0000-0000-0000-000000000000";
const ARNO: &str = "30000000-0000-0000-0000-000000000000";
const BENNO: &str = "40000000-0000-0000-0000-000000000000";

#[tokio::test]
async fn list_owners_returns_every_owner() {
    let app = TestApp::seeded().await;

    let body = expect_json(app.get("/banking/owners").await, StatusCode::OK).await;
    assert_eq!(ids(&body), vec![ERIKA, MAX, ARNO, BENNO]);
}

#[tokio::test]
async fn list_owners_on_empty_database_is_empty() {
    let app = TestApp::new().await;

    let body = expect_json(app.get("/banking/owners").await, StatusCode::OK).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn get_owner_by_id() {
    let app = TestApp::seeded().await;

    let body = expect_json(
        app.get(&format!("/banking/owners/{MAX}")).await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(
        body,
        json!({
            "id": MAX,
            "name": "Max Mustermann",
            "email": "max.mustermann@gmail.com",
            "birthdate": "1982-01-10"
        })
    );
}

#[tokio::test]
async fn unknown_owner_is_not_found_with_error_body() {
    let app = TestApp::seeded().await;

    let response = app
        .get("/banking/owners/99999999-0000-0000-0000-000000000000")
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("request id header")
        .to_str()
        .unwrap()
        .to_string();

    let body = response_json(response).await;
    assert_eq!(body["error"], "Not Found");
    assert_eq!(body["request_id"], request_id.as_str());
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn malformed_owner_id_is_rejected() {
    let app = TestApp::seeded().await;

    let response = app.get("/banking/owners/not-a-uuid").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn get_owner_by_name() {
    let app = TestApp::seeded().await;

    let body = expect_json(
        app.get("/banking/owners/name?name=Max%20Mustermann").await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(body["id"], MAX);

    let response = app.get("/banking/owners/name?name=Nobody").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn ambiguous_name_is_a_conflict() {
    let app = TestApp::seeded().await;

    let response = app
        .post(
            "/banking/owners",
            json!({"name": "Max Mustermann", "email": "other@x.de", "birthdate": "1990-01-01"}),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app.get("/banking/owners/name?name=Max%20Mustermann").await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn get_owner_by_email() {
    let app = TestApp::seeded().await;

    let body = expect_json(
        app.get("/banking/owners/email?email=a.arndt@t-online.de").await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(body["id"], ARNO);
    assert_eq!(body["name"], "Arno Arndt");

    let response = app.get("/banking/owners/email?email=nobody@x.de").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn birthdate_range_is_inclusive() {
    let app = TestApp::seeded().await;

    let body = expect_json(
        app.get("/banking/owners/birthdate?from=1960-01-01&to=1969-12-31")
            .await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(ids(&body), vec![ARNO, BENNO]);

    let body = expect_json(
        app.get("/banking/owners/birthdate?from=1965-04-14&to=1965-04-14")
            .await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(ids(&body), vec![BENNO]);
}

#[tokio::test]
async fn birthdate_range_selects_only_the_sixties_owner() {
    let app = TestApp::new().await;
    let o1 = json!({
        "id": "a1000000-0000-0000-0000-000000000000",
        "name": "Max Mustermann",
        "email": "max@x.de",
        "birthdate": "1960-05-01"
    });
    let o2 = json!({
        "id": "a2000000-0000-0000-0000-000000000000",
        "name": "Erika Musterfrau",
        "email": "erika@x.de",
        "birthdate": "1975-01-01"
    });
    assert_eq!(app.post("/banking/owners", o1.clone()).await.status(), StatusCode::CREATED);
    assert_eq!(app.post("/banking/owners", o2).await.status(), StatusCode::CREATED);

    let body = expect_json(
        app.get("/banking/owners/birthdate?from=1960-01-01&to=1969-12-31")
            .await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(body, json!([o1]));
}

#[tokio::test]
async fn reversed_birthdate_range_is_empty() {
    let app = TestApp::seeded().await;

    let body = expect_json(
        app.get("/banking/owners/birthdate?from=1969-12-31&to=1960-01-01")
            .await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn malformed_birthdates_are_invalid_input() {
    let app = TestApp::seeded().await;

    for uri in [
        "/banking/owners/birthdate?from=2020-13-01&to=2021-01-01",
        "/banking/owners/birthdate?from=abc&to=2021-01-01",
        "/banking/owners/birthdate?from=2020-01-01&to=abc",
        "/banking/owners/birthdate?from=2020-1-1&to=2021-01-01",
        "/banking/owners/birthdate?from=2020-01-%201&to=2021-01-01",
        "/banking/owners/birthdate?from=1960-01-01&to=%2B969-12-31",
        "/banking/owners/birthdate?from=-001-01-01&to=2021-01-01",
    ] {
        let response = app.get(uri).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
        let body = response_json(response).await;
        assert!(body["message"].as_str().unwrap().contains("Invalid date"));
    }
}

#[tokio::test]
async fn create_owner_without_id_then_get_it_back() {
    let app = TestApp::new().await;

    let response = app
        .post(
            "/banking/owners",
            json!({"name": "Hans Huber", "email": "h.huber@x.de", "birthdate": "1971-07-07"}),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let location = response
        .headers()
        .get(header::LOCATION)
        .expect("location header")
        .to_str()
        .unwrap()
        .to_string();
    let created = response_json(response).await;
    let id = created["id"].as_str().unwrap();
    assert_eq!(location, format!("/banking/owners/{id}"));

    let fetched = expect_json(app.get(&location).await, StatusCode::OK).await;
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn create_owner_with_existing_id_conflicts_without_overwrite() {
    let app = TestApp::seeded().await;

    let response = app
        .post(
            "/banking/owners",
            json!({"id": ERIKA, "name": "Impostor", "email": "x@x.de", "birthdate": "2000-01-01"}),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let stored = expect_json(
        app.get(&format!("/banking/owners/{ERIKA}")).await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(stored["name"], "Erika Mustermann");
}

#[tokio::test]
async fn update_owner_changes_only_name_and_email() {
    let app = TestApp::seeded().await;

    let body = expect_json(
        app.put(
            &format!("/banking/owners/{ERIKA}"),
            json!({
                "id": ERIKA,
                "name": "Erika Musterfrau",
                "email": "erika@musterfrau.de",
                "birthdate": "2001-01-01"
            }),
        )
        .await,
        StatusCode::OK,
    )
    .await;
    let expected = json!({
        "id": ERIKA,
        "name": "Erika Musterfrau",
        "email": "erika@musterfrau.de",
        "birthdate": "1988-02-01"
    });
    assert_eq!(body, expected);

    let stored = expect_json(
        app.get(&format!("/banking/owners/{ERIKA}")).await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(stored, expected);
}

#[tokio::test]
async fn update_with_mismatched_ids_is_invalid_input() {
    let app = TestApp::seeded().await;

    let response = app
        .put(
            &format!("/banking/owners/{ERIKA}"),
            json!({"id": MAX, "name": "X", "email": "x@x.de", "birthdate": "1982-01-10"}),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_missing_owner_is_not_found() {
    let app = TestApp::new().await;

    let response = app
        .put(
            &format!("/banking/owners/{ERIKA}"),
            json!({"id": ERIKA, "name": "X", "email": "x@x.de", "birthdate": "1982-01-10"}),
        )
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_owner_then_it_is_gone() {
    let app = TestApp::seeded().await;

    let response = app.delete(&format!("/banking/owners/{BENNO}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.get(&format!("/banking/owners/{BENNO}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.delete(&format!("/banking/owners/{BENNO}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn deleting_an_owner_leaves_its_accounts() {
    let app = TestApp::seeded().await;

    let before = expect_json(
        app.get(&format!("/banking/owners/{BENNO}/accounts")).await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(before.as_array().unwrap().len(), 2);

    let response = app.delete(&format!("/banking/owners/{BENNO}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let after = expect_json(
        app.get(&format!("/banking/owners/{BENNO}/accounts")).await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(after, before);
}
