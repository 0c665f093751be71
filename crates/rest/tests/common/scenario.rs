//! The ordered create/read/update/delete walk shared by the suites.
//!
//! Expects freshly seeded units: seven items per kind, next id 8.

use axum::http::StatusCode;
use harvest_persistence::types::ProduceKind;
use serde_json::{Value, json};

use super::assertions::{assert_error, assert_item, assert_validation_error, names};
use super::harness::TestApp;

/// Names used by the lifecycle scenario, per kind.
pub struct Scenario {
    pub path: &'static str,
    pub kind: ProduceKind,
    pub seventh: &'static str,
    pub created: &'static str,
    pub renamed: &'static str,
}

pub const FRUIT: Scenario = Scenario {
    path: "/fruit",
    kind: ProduceKind::Fruit,
    seventh: "Cranberry",
    created: "Canteloupe",
    renamed: "Dragonfruit",
};

pub const VEGETABLE: Scenario = Scenario {
    path: "/vegetable",
    kind: ProduceKind::Vegetable,
    seventh: "Garlic",
    created: "Eggplant",
    renamed: "Okra",
};

/// Walks one resource through its whole lifecycle, in order.
pub async fn run_lifecycle(app: &TestApp, scenario: &Scenario) {
    let server = &app.server;
    let path = scenario.path;
    let label = scenario.kind.label();
    let not_found = |id: &str| format!("{} '{}' not found", scenario.kind, id);

    // Seeded list
    let response = server.get(path).await;
    assert_eq!(names(&response).len(), 7);

    let response = server.get(&format!("{path}/7")).await;
    assert_item(&response, 7, scenario.seventh);

    // Create
    let response = server
        .post(path)
        .json(&json!({"name": scenario.created}))
        .await;
    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body, json!({"id": 8, "name": scenario.created}));
    assert_eq!(response.header("location"), format!("{path}/8").as_str());

    let response = server.get(path).await;
    let listed = names(&response);
    assert_eq!(listed.len(), 8);
    assert_eq!(listed.last().map(String::as_str), Some(scenario.created));

    // Update
    let response = server
        .put(&format!("{path}/8"))
        .json(&json!({"id": 8, "name": scenario.renamed}))
        .await;
    assert_item(&response, 8, scenario.renamed);

    let response = server.get(&format!("{path}/8")).await;
    assert_item(&response, 8, scenario.renamed);

    // Non-JSON bodies
    let response = server.post(path).text("").await;
    response.assert_status(StatusCode::UNSUPPORTED_MEDIA_TYPE);
    let body: Value = response.json();
    assert_eq!(body["code"], 415);
    let response = server.put(&format!("{path}/8")).text("").await;
    response.assert_status(StatusCode::UNSUPPORTED_MEDIA_TYPE);
    let body: Value = response.json();
    assert_eq!(body["code"], 415);

    // Create with id
    let response = server
        .post(path)
        .json(&json!({"id": 999, "name": "foo"}))
        .await;
    assert_error(
        &response,
        StatusCode::UNPROCESSABLE_ENTITY,
        "unexpected ID in request",
    );

    // Update unknown
    let response = server
        .put(&format!("{path}/999"))
        .json(&json!({"id": 999, "name": "foo"}))
        .await;
    assert_error(&response, StatusCode::NOT_FOUND, &not_found("999"));

    // Missing name
    let message = format!("{label} name must be set!");
    let response = server.post(path).json(&json!({})).await;
    assert_validation_error(&response, &message);
    let response = server.put(&format!("{path}/8")).json(&json!({})).await;
    assert_validation_error(&response, &message);

    // Delete
    let response = server.delete(&format!("{path}/8")).await;
    response.assert_status(StatusCode::NO_CONTENT);
    assert!(response.as_bytes().is_empty());

    let response = server.get(&format!("{path}/8")).await;
    assert_error(&response, StatusCode::NOT_FOUND, &not_found("8"));

    let response = server.delete(&format!("{path}/8")).await;
    assert_error(&response, StatusCode::NOT_FOUND, &not_found("8"));

    let response = server.get(path).await;
    assert_eq!(names(&response).len(), 7);
}
