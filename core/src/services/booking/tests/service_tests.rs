//! End-to-end tests for the booking orchestration service

use rust_decimal_macros::dec;
use uuid::Uuid;

use super::support::{
    active_offer, active_residence, active_vehicle, clock, date, existing_booking, rfc, TestStore,
};
use crate::domain::entities::booking::BookingStatus;
use crate::domain::value_objects::{BookingRequest, ServiceKind};
use crate::errors::{AvailabilityError, BookingError, DateError, SelectionError};

#[tokio::test]
async fn test_residence_booking_is_validated_and_priced() {
    let store = TestStore::new();
    let residence = active_residence(dec!(250.00));
    let id = residence.id;
    store.residences.insert(residence).await;

    let request = BookingRequest::for_residence(rfc(2024, 7, 1), rfc(2024, 7, 4), id);
    let quote = store
        .service()
        .validate_and_price_at(&request, clock())
        .await
        .unwrap();

    assert_eq!(quote.kind, ServiceKind::Residence);
    assert_eq!(quote.resource_id, id);
    assert_eq!(quote.days, 3);
    assert_eq!(quote.total_price, dec!(750.00));
}

#[tokio::test]
async fn test_vehicle_booking_conflicts_with_confirmed_booking() {
    let store = TestStore::new();
    let vehicle = active_vehicle(dec!(80.00));
    let id = vehicle.id;
    store.vehicles.insert(vehicle).await;
    store
        .bookings
        .insert(existing_booking(
            ServiceKind::Vehicle,
            id,
            date(2024, 7, 1),
            date(2024, 7, 5),
            BookingStatus::Confirmed,
        ))
        .await;

    let request = BookingRequest::for_vehicle(rfc(2024, 7, 3), rfc(2024, 7, 6), id);
    let err = store
        .service()
        .validate_and_price_at(&request, clock())
        .await
        .unwrap_err();

    assert_eq!(
        err,
        BookingError::Availability(AvailabilityError::ResourceNotAvailable {
            kind: ServiceKind::Vehicle
        })
    );
}

#[tokio::test]
async fn test_explicit_total_price_wins() {
    let store = TestStore::new();
    let residence = active_residence(dec!(250.00));
    let id = residence.id;
    store.residences.insert(residence).await;

    let request = BookingRequest::for_residence(rfc(2024, 7, 1), rfc(2024, 7, 4), id)
        .with_total_price(dec!(500.00));
    let quote = store
        .service()
        .validate_and_price_at(&request, clock())
        .await
        .unwrap();

    assert_eq!(quote.total_price, dec!(500.00));
}

#[tokio::test]
async fn test_offer_quote_uses_the_flat_package_price() {
    let store = TestStore::new();
    let residence = active_residence(dec!(250.00));
    let vehicle = active_vehicle(dec!(80.00));
    let offer = active_offer(residence.id, vehicle.id, dec!(300.00));
    let offer_id = offer.id;
    store.residences.insert(residence).await;
    store.vehicles.insert(vehicle).await;
    store.offers.insert(offer).await;

    let request = BookingRequest::for_offer(rfc(2024, 7, 1), rfc(2024, 7, 8), offer_id);
    let quote = store
        .service()
        .validate_and_price_at(&request, clock())
        .await
        .unwrap();

    assert_eq!(quote.days, 7);
    assert_eq!(quote.total_price, dec!(300.00));
}

#[tokio::test]
async fn test_validate_and_price_is_read_only_and_repeatable() {
    let store = TestStore::new();
    let residence = active_residence(dec!(100.00));
    let id = residence.id;
    store.residences.insert(residence).await;

    let request = BookingRequest::for_residence(rfc(2024, 7, 1), rfc(2024, 7, 4), id);
    let service = store.service();

    let first = service.validate_and_price_at(&request, clock()).await.unwrap();
    let second = service.validate_and_price_at(&request, clock()).await.unwrap();

    assert_eq!(first, second);
    assert!(store.bookings.is_empty().await);
}

#[tokio::test]
async fn test_checks_run_in_order() {
    let store = TestStore::new();
    let service = store.service();

    // Bad dates are reported before the missing service reference
    let request = BookingRequest {
        start_date: "garbage".into(),
        end_date: rfc(2024, 7, 4),
        residence_id: None,
        vehicle_id: None,
        offer_id: None,
        total_price: None,
        notes: None,
    };
    let err = service.validate_and_price_at(&request, clock()).await.unwrap_err();
    assert_eq!(err, BookingError::Date(DateError::InvalidFormat));

    // Valid dates but no service reference
    let request = BookingRequest {
        start_date: rfc(2024, 7, 1),
        ..request
    };
    let err = service.validate_and_price_at(&request, clock()).await.unwrap_err();
    assert_eq!(
        err,
        BookingError::Selection(SelectionError::NoServiceSpecified)
    );
}

#[tokio::test]
async fn test_create_booking_persists_a_pending_record() {
    let store = TestStore::new();
    let residence = active_residence(dec!(100.00));
    let id = residence.id;
    store.residences.insert(residence).await;

    let user_id = Uuid::new_v4();
    let request = BookingRequest::for_residence(
        rfc(2999, 7, 1),
        rfc(2999, 7, 4),
        id,
    )
    .with_notes("late arrival");

    let booking = store.service().create_booking(&request, user_id).await.unwrap();

    assert_eq!(booking.status, BookingStatus::Pending);
    assert_eq!(booking.user_id, user_id);
    assert_eq!(booking.total_price, dec!(300.00));
    assert_eq!(booking.notes.as_deref(), Some("late arrival"));
    assert_eq!(store.bookings.len().await, 1);
}

#[tokio::test]
async fn test_create_booking_writes_nothing_on_failure() {
    let store = TestStore::new();

    let request = BookingRequest::for_residence(
        rfc(2999, 7, 1),
        rfc(2999, 7, 4),
        Uuid::new_v4(),
    );

    store
        .service()
        .create_booking(&request, Uuid::new_v4())
        .await
        .unwrap_err();

    assert!(store.bookings.is_empty().await);
}

#[tokio::test]
async fn test_status_transitions_through_the_service() {
    let store = TestStore::new();
    let residence = active_residence(dec!(100.00));
    let id = residence.id;
    store.residences.insert(residence).await;

    let service = store.service();
    let request = BookingRequest::for_residence(rfc(2999, 7, 1), rfc(2999, 7, 4), id);
    let booking = service.create_booking(&request, Uuid::new_v4()).await.unwrap();

    let confirmed = service.confirm_booking(booking.id).await.unwrap();
    assert_eq!(confirmed.status, BookingStatus::Confirmed);

    let completed = service.complete_booking(booking.id).await.unwrap();
    assert_eq!(completed.status, BookingStatus::Completed);

    // A completed booking cannot be cancelled
    let err = service.cancel_booking(booking.id).await.unwrap_err();
    assert!(matches!(err, BookingError::InvalidStatusTransition { .. }));
}

#[tokio::test]
async fn test_listing_and_lookup() {
    let store = TestStore::new();
    let residence = active_residence(dec!(100.00));
    let id = residence.id;
    store.residences.insert(residence).await;

    let service = store.service();
    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();

    let first = service
        .create_booking(
            &BookingRequest::for_residence(rfc(2999, 7, 1), rfc(2999, 7, 4), id),
            alice,
        )
        .await
        .unwrap();
    service
        .create_booking(
            &BookingRequest::for_residence(rfc(2999, 8, 1), rfc(2999, 8, 4), id),
            bob,
        )
        .await
        .unwrap();

    assert_eq!(service.list_bookings().await.unwrap().len(), 2);

    let for_alice = service.list_bookings_for_user(alice).await.unwrap();
    assert_eq!(for_alice.len(), 1);
    assert_eq!(for_alice[0].id, first.id);

    let fetched = service.get_booking(first.id).await.unwrap();
    assert_eq!(fetched.id, first.id);
}

#[tokio::test]
async fn test_unknown_booking_operations_are_not_found() {
    let store = TestStore::new();
    let service = store.service();
    let id = Uuid::new_v4();

    assert_eq!(
        service.get_booking(id).await.unwrap_err(),
        BookingError::BookingNotFound
    );
    assert_eq!(
        service.confirm_booking(id).await.unwrap_err(),
        BookingError::BookingNotFound
    );
    assert_eq!(
        service.delete_booking(id).await.unwrap_err(),
        BookingError::BookingNotFound
    );
}

#[tokio::test]
async fn test_delete_booking_removes_the_record() {
    let store = TestStore::new();
    let residence = active_residence(dec!(100.00));
    let id = residence.id;
    store.residences.insert(residence).await;

    let service = store.service();
    let booking = service
        .create_booking(
            &BookingRequest::for_residence(rfc(2999, 7, 1), rfc(2999, 7, 4), id),
            Uuid::new_v4(),
        )
        .await
        .unwrap();

    service.delete_booking(booking.id).await.unwrap();
    assert!(store.bookings.is_empty().await);
}
