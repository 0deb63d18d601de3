use actix_web::{web, HttpServer};
use log::info;
use std::sync::Arc;
use std::time::Duration;

use rf_api::app::create_app;
use rf_api::config::Config;
use rf_api::routes::bookings::AppState;

use rf_core::services::BookingService;
use rf_infra::database::mysql::{
    MySqlBookingRepository, MySqlOfferRepository, MySqlResidenceRepository,
    MySqlVehicleRepository,
};
use rf_infra::DatabasePool;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting RentFlow API server");

    let config = Config::from_env();
    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    // Database pool and repositories
    let db_pool = DatabasePool::new(config.database.clone())
        .await
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;
    let pool = db_pool.get_pool().clone();

    let residences = Arc::new(MySqlResidenceRepository::new(pool.clone()));
    let vehicles = Arc::new(MySqlVehicleRepository::new(pool.clone()));
    let offers = Arc::new(MySqlOfferRepository::new(pool.clone()));
    let bookings = Arc::new(MySqlBookingRepository::new(pool));

    let booking_service = Arc::new(BookingService::new(residences, vehicles, offers, bookings));
    let app_state = web::Data::new(AppState::new(booking_service));

    let mut server = HttpServer::new(move || create_app(app_state.clone()))
        .keep_alive(Duration::from_secs(config.server.keep_alive))
        .client_request_timeout(Duration::from_secs(config.server.request_timeout));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.bind(&bind_address)?.run().await
}
