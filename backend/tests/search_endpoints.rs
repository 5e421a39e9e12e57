//! End-to-end coverage for the search API over a seeded in-memory roll.
//!
//! These tests wire the full application surface (versioned API scope, trace
//! middleware, health probes) the way the binary does, then drive it with
//! `actix_web::test`.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use rstest::rstest;
use serde_json::Value;

use backend::Trace;
use backend::domain::ports::FixtureVoterQuery;
use backend::domain::{AreaCode, Gender, SearchPolicy, VoterRecord};
use backend::inbound::http::health::{HealthState, live, ready};
use backend::inbound::http::state::HttpState;
use backend::inbound::http::voters::{search_voters, voter_detail};

fn voter(voter_no: &str, name: &str, father: &str, gender: Gender, area: i32) -> VoterRecord {
    VoterRecord {
        serial_no: voter_no.to_owned(),
        voter_no: voter_no.to_owned(),
        name: name.to_owned(),
        father: father.to_owned(),
        mother: "আনোয়ারা বেগম".to_owned(),
        gender,
        date_of_birth: "01/01/1990".to_owned(),
        area_code: AreaCode::from_i32(area),
        profession: None,
        address: Some("ঢাকা".to_owned()),
        area_name: None,
        district: None,
        upazila: None,
        city_corp: None,
        ward_union: None,
        union_ward: None,
        post_office: None,
        postcode: None,
        region: None,
        polling_center: None,
    }
}

fn seeded_roll(policy: SearchPolicy) -> FixtureVoterQuery {
    FixtureVoterQuery::new(
        vec![
            voter("110000000001", "আব্দুর রহিম", "মোঃ সালাম", Gender::Male, 2797),
            voter("110000000002", "আব্দুল করিম", "আব্দুর রহিম", Gender::Male, 2797),
            voter("110000000003", "ফাতেমা বেগম", "মোঃ সালাম", Gender::Female, 2797),
            voter("110000000004", "আব্দুর রহিম", "মোঃ জলিল", Gender::Male, 3100),
        ],
        policy,
    )
}

async fn spawn_app(
    policy: SearchPolicy,
) -> impl actix_web::dev::Service<
    actix_http::Request,
    Response = actix_web::dev::ServiceResponse,
    Error = actix_web::Error,
> {
    let health_state = web::Data::new(HealthState::new());
    health_state.mark_ready();
    let http_state = web::Data::new(HttpState::new(Arc::new(seeded_roll(policy))));

    actix_test::init_service(
        App::new()
            .app_data(health_state)
            .app_data(http_state)
            .wrap(Trace)
            .service(
                web::scope("/api/v1")
                    .service(search_voters)
                    .service(voter_detail),
            )
            .service(ready)
            .service(live),
    )
    .await
}

async fn get_json(
    app: &impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
    uri: &str,
) -> (StatusCode, Value) {
    let res = actix_test::call_service(app, actix_test::TestRequest::get().uri(uri).to_request())
        .await;
    let status = res.status();
    let body: Value = actix_test::read_body_json(res).await;
    (status, body)
}

fn names(body: &Value) -> Vec<&str> {
    body.as_array()
        .expect("array body")
        .iter()
        .filter_map(|v| v.get("name").and_then(Value::as_str))
        .collect()
}

#[rstest]
#[actix_web::test]
async fn search_scopes_to_area_and_gender() {
    let app = spawn_app(SearchPolicy::default()).await;

    let (status, body) =
        get_json(&app, "/api/v1/voters/search?area_code=2797&gender=male").await;

    assert_eq!(status, StatusCode::OK);
    let mut found = names(&body);
    found.sort_unstable();
    assert_eq!(found, vec!["আব্দুর রহিম", "আব্দুল করিম"]);
}

#[rstest]
#[actix_web::test]
async fn name_filter_matches_father_field_by_default() {
    let app = spawn_app(SearchPolicy::default()).await;

    // "রহিম" is voter 1's name and voter 2's father; both should match.
    let (status, body) = get_json(
        &app,
        "/api/v1/voters/search?area_code=2797&gender=male&name_filter=%E0%A6%B0%E0%A6%B9%E0%A6%BF%E0%A6%AE",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(2));
}

#[rstest]
#[actix_web::test]
async fn result_limit_caps_the_response() {
    let app = spawn_app(SearchPolicy::new(1, Vec::new())).await;

    let (status, body) =
        get_json(&app, "/api/v1/voters/search?area_code=2797&gender=male").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(1));
}

#[rstest]
#[actix_web::test]
async fn missing_gender_is_rejected_with_the_error_envelope() {
    let app = spawn_app(SearchPolicy::default()).await;

    let (status, body) = get_json(&app, "/api/v1/voters/search?area_code=2797").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body.get("code").and_then(Value::as_str),
        Some("invalid_request")
    );
    assert_eq!(
        body.get("message").and_then(Value::as_str),
        Some("missing gender")
    );
    assert!(body.get("traceId").and_then(Value::as_str).is_some());
}

#[rstest]
#[actix_web::test]
async fn detail_round_trip_and_miss() {
    let app = spawn_app(SearchPolicy::default()).await;

    let (status, body) = get_json(&app, "/api/v1/voters/3100/110000000004").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body.get("father").and_then(Value::as_str),
        Some("মোঃ জলিল")
    );

    let (status, body) = get_json(&app, "/api/v1/voters/2797/110000000004").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body.get("code").and_then(Value::as_str), Some("not_found"));
}

#[rstest]
#[actix_web::test]
async fn health_probes_respond_once_marked_ready() {
    let app = spawn_app(SearchPolicy::default()).await;

    for uri in ["/health/ready", "/health/live"] {
        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri(uri).to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK, "{uri}");
    }
}

#[rstest]
#[actix_web::test]
async fn responses_carry_a_trace_id_header() {
    let app = spawn_app(SearchPolicy::default()).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/v1/voters/search?area_code=2797&gender=female")
            .to_request(),
    )
    .await;

    assert!(res.headers().contains_key("trace-id"));
}
