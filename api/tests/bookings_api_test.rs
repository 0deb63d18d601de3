//! Integration tests for the bookings HTTP API
//!
//! Runs the full actix application against in-memory repositories.

use actix_web::{test, web};
use rust_decimal_macros::dec;
use std::sync::Arc;
use uuid::Uuid;

use rf_api::app::create_app;
use rf_api::routes::bookings::AppState;

use rf_core::domain::entities::residence::Residence;
use rf_core::repositories::{
    MockBookingRepository, MockOfferRepository, MockResidenceRepository, MockVehicleRepository,
};
use rf_core::services::BookingService;

type TestAppState = AppState<
    MockResidenceRepository,
    MockVehicleRepository,
    MockOfferRepository,
    MockBookingRepository,
>;

struct TestContext {
    residences: Arc<MockResidenceRepository>,
    state: web::Data<TestAppState>,
}

fn test_context() -> TestContext {
    let residences = Arc::new(MockResidenceRepository::new());
    let vehicles = Arc::new(MockVehicleRepository::new());
    let offers = Arc::new(MockOfferRepository::new());
    let bookings = Arc::new(MockBookingRepository::new());

    let service = Arc::new(BookingService::new(
        residences.clone(),
        vehicles,
        offers,
        bookings,
    ));

    TestContext {
        residences,
        state: web::Data::new(AppState::new(service)),
    }
}

async fn seed_residence(ctx: &TestContext) -> Uuid {
    let residence = Residence::new("Loft downtown", "Lyon", "France", dec!(100.00), 4);
    let id = residence.id;
    ctx.residences.insert(residence).await;
    id
}

fn create_body(residence_id: Uuid) -> serde_json::Value {
    serde_json::json!({
        "user_id": Uuid::new_v4(),
        "start_date": "2999-07-01T00:00:00Z",
        "end_date": "2999-07-04T00:00:00Z",
        "residence_id": residence_id,
    })
}

#[actix_web::test]
async fn test_create_booking_returns_created() {
    let ctx = test_context();
    let residence_id = seed_residence(&ctx).await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/bookings")
        .set_json(create_body(residence_id))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 201);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["status"], "PENDING");
    assert_eq!(body["data"]["total_price"], "300.00");
}

#[actix_web::test]
async fn test_create_booking_with_bad_dates_is_rejected() {
    let ctx = test_context();
    let residence_id = seed_residence(&ctx).await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let mut body = create_body(residence_id);
    body["start_date"] = serde_json::json!("not-a-date");

    let req = test::TestRequest::post()
        .uri("/api/v1/bookings")
        .set_json(body)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "INVALID_FORMAT");
}

#[actix_web::test]
async fn test_overlapping_booking_is_a_conflict() {
    let ctx = test_context();
    let residence_id = seed_residence(&ctx).await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/bookings")
        .set_json(create_body(residence_id))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 201);

    // Same residence, overlapping window
    let body = serde_json::json!({
        "user_id": Uuid::new_v4(),
        "start_date": "2999-07-03T00:00:00Z",
        "end_date": "2999-07-06T00:00:00Z",
        "residence_id": residence_id,
    });
    let req = test::TestRequest::post()
        .uri("/api/v1/bookings")
        .set_json(body)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 409);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "RESOURCE_NOT_AVAILABLE");
}

#[actix_web::test]
async fn test_selecting_multiple_services_is_rejected() {
    let ctx = test_context();
    let residence_id = seed_residence(&ctx).await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let mut body = create_body(residence_id);
    body["vehicle_id"] = serde_json::json!(Uuid::new_v4());

    let req = test::TestRequest::post()
        .uri("/api/v1/bookings")
        .set_json(body)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "MULTIPLE_SERVICES_SPECIFIED");
}

#[actix_web::test]
async fn test_booking_lifecycle_endpoints() {
    let ctx = test_context();
    let residence_id = seed_residence(&ctx).await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/bookings")
        .set_json(create_body(residence_id))
        .to_request();
    let body: serde_json::Value =
        test::read_body_json(test::call_service(&app, req).await).await;
    let id = body["data"]["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/bookings/{}/confirm", id))
        .to_request();
    let body: serde_json::Value =
        test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["data"]["status"], "CONFIRMED");

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/bookings/{}/complete", id))
        .to_request();
    let body: serde_json::Value =
        test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["data"]["status"], "COMPLETED");

    // A completed booking cannot be cancelled
    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/bookings/{}/cancel", id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "INVALID_STATUS_TRANSITION");
}

#[actix_web::test]
async fn test_get_unknown_booking_is_not_found() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/bookings/{}", Uuid::new_v4()))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 404);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "BOOKING_NOT_FOUND");
}

#[actix_web::test]
async fn test_delete_booking() {
    let ctx = test_context();
    let residence_id = seed_residence(&ctx).await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/bookings")
        .set_json(create_body(residence_id))
        .to_request();
    let body: serde_json::Value =
        test::read_body_json(test::call_service(&app, req).await).await;
    let id = body["data"]["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/bookings/{}", id))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 204);

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/bookings/{}", id))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 404);
}

#[actix_web::test]
async fn test_list_user_bookings() {
    let ctx = test_context();
    let residence_id = seed_residence(&ctx).await;
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let user_id = Uuid::new_v4();
    let body = serde_json::json!({
        "user_id": user_id,
        "start_date": "2999-07-01T00:00:00Z",
        "end_date": "2999-07-04T00:00:00Z",
        "residence_id": residence_id,
    });
    let req = test::TestRequest::post()
        .uri("/api/v1/bookings")
        .set_json(body)
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 201);

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/users/{}/bookings", user_id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    // A different user sees nothing
    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/users/{}/bookings", Uuid::new_v4()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 0);
}
