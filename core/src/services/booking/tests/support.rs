//! Shared fixtures for booking engine tests

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::booking::{Booking, BookingStatus};
use crate::domain::entities::offer::Offer;
use crate::domain::entities::residence::Residence;
use crate::domain::entities::vehicle::Vehicle;
use crate::domain::value_objects::ServiceKind;
use crate::repositories::{
    MockBookingRepository, MockOfferRepository, MockResidenceRepository, MockVehicleRepository,
};
use crate::services::booking::BookingService;

pub type TestBookingService = BookingService<
    MockResidenceRepository,
    MockVehicleRepository,
    MockOfferRepository,
    MockBookingRepository,
>;

/// A bundle of mock repositories plus the service built over them.
pub struct TestStore {
    pub residences: Arc<MockResidenceRepository>,
    pub vehicles: Arc<MockVehicleRepository>,
    pub offers: Arc<MockOfferRepository>,
    pub bookings: Arc<MockBookingRepository>,
}

impl TestStore {
    pub fn new() -> Self {
        Self {
            residences: Arc::new(MockResidenceRepository::new()),
            vehicles: Arc::new(MockVehicleRepository::new()),
            offers: Arc::new(MockOfferRepository::new()),
            bookings: Arc::new(MockBookingRepository::new()),
        }
    }

    pub fn service(&self) -> TestBookingService {
        BookingService::new(
            self.residences.clone(),
            self.vehicles.clone(),
            self.offers.clone(),
            self.bookings.clone(),
        )
    }
}

/// Midnight UTC on the given day.
pub fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
}

/// RFC 3339 string for midnight UTC on the given day.
pub fn rfc(y: i32, m: u32, d: u32) -> String {
    format!("{:04}-{:02}-{:02}T00:00:00Z", y, m, d)
}

/// Fixed clock well before all test booking windows.
pub fn clock() -> DateTime<Utc> {
    date(2024, 1, 15)
}

pub fn active_residence(price_per_day: Decimal) -> Residence {
    Residence::new("Villa with pool", "Nice", "France", price_per_day, 8)
}

pub fn active_vehicle(price_per_day: Decimal) -> Vehicle {
    Vehicle::new("BMW", "X5", 2023, price_per_day, 5)
}

/// Offer valid over the whole of 2024.
pub fn active_offer(residence_id: Uuid, vehicle_id: Uuid, price: Decimal) -> Offer {
    Offer::new(
        "Villa + BMW X5",
        residence_id,
        vehicle_id,
        price,
        date(2024, 1, 1),
        date(2024, 12, 31),
    )
}

/// An existing booking for a resource, in the given status.
pub fn existing_booking(
    kind: ServiceKind,
    resource_id: Uuid,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    status: BookingStatus,
) -> Booking {
    let mut booking = Booking::new(
        Uuid::new_v4(),
        start,
        end,
        Decimal::from(100),
        kind,
        resource_id,
        None,
    );
    match status {
        BookingStatus::Pending => {}
        BookingStatus::Confirmed => booking.confirm().unwrap(),
        BookingStatus::Cancelled => booking.cancel().unwrap(),
        BookingStatus::Completed => {
            booking.confirm().unwrap();
            booking.complete().unwrap();
        }
    }
    booking
}
