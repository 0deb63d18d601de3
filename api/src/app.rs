//! Application factory
//!
//! Builds the Actix-web application with middleware, routes and shared
//! state wired together.

use actix_web::{middleware::Logger, web, App, HttpResponse};

use crate::middleware::cors::create_cors;
use crate::routes::bookings::{create, delete, get, list, status, AppState};

use rf_core::repositories::{
    BookingRepository, OfferRepository, ResidenceRepository, VehicleRepository,
};
use rf_shared::types::response::ErrorResponse;

/// Create and configure the application with all dependencies
pub fn create_app<R, V, O, B>(
    app_state: web::Data<AppState<R, V, O, B>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    R: ResidenceRepository + 'static,
    V: VehicleRepository + 'static,
    O: OfferRepository + 'static,
    B: BookingRepository + 'static,
{
    let cors = create_cors();

    App::new()
        .app_data(app_state)
        .wrap(Logger::default())
        .wrap(cors)
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/bookings")
                        .route("", web::post().to(create::create_booking::<R, V, O, B>))
                        .route("", web::get().to(list::list_bookings::<R, V, O, B>))
                        .route("/{id}", web::get().to(get::get_booking::<R, V, O, B>))
                        .route("/{id}", web::delete().to(delete::delete_booking::<R, V, O, B>))
                        .route(
                            "/{id}/confirm",
                            web::post().to(status::confirm_booking::<R, V, O, B>),
                        )
                        .route(
                            "/{id}/cancel",
                            web::post().to(status::cancel_booking::<R, V, O, B>),
                        )
                        .route(
                            "/{id}/complete",
                            web::post().to(status::complete_booking::<R, V, O, B>),
                        ),
                )
                .route(
                    "/users/{user_id}/bookings",
                    web::get().to(list::list_user_bookings::<R, V, O, B>),
                ),
        )
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "rentflow-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        "NOT_FOUND",
        "The requested resource was not found",
    ))
}
