use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use tiny_house_booking::booking::{ErrorKind, EventTarget, ValidationError};
use tiny_house_booking::models::{BookingIntent, ContactField};
use tiny_house_booking::notify::{Level, Notification};
use tiny_house_booking::sink::{BookingSink, LocalStorageSink, SinkError};
use tiny_house_booking::{
    BookingSession, DateRange, DraftField, Guests, Notifier, Phase, Property, SessionConfig,
    SessionError,
};
use tokio::sync::mpsc::UnboundedReceiver;

fn cabin(id: &str, price: f64, capacity: u32) -> Property {
    Property {
        id: id.to_string(),
        name: "Rustic Desert Retreat".to_string(),
        description: "Stargazing in the desert".to_string(),
        location: "Sedona, AZ".to_string(),
        image_urls: vec![
            "https://picsum.photos/id/60/800/600".to_string(),
            "https://picsum.photos/id/61/800/600".to_string(),
        ],
        price,
        amenities: vec!["WiFi".to_string()],
        capacity,
        bedrooms: 1,
        bathrooms: 1,
        owner_contact: String::new(),
        booking_email: String::new(),
        reviews: vec![],
    }
}

fn start(
    sink: Arc<dyn BookingSink>,
    config: SessionConfig,
) -> (BookingSession, UnboundedReceiver<Notification>) {
    let (notifier, rx) = Notifier::channel();
    (BookingSession::new(sink, notifier, config), rx)
}

fn three_nights() -> DateRange {
    DateRange::new(
        NaiveDate::from_ymd_opt(2025, 10, 3).unwrap(),
        NaiveDate::from_ymd_opt(2025, 10, 6).unwrap(),
    )
}

fn fill_contact(session: &mut BookingSession, skip: Option<ContactField>) {
    for (field, value) in [
        (ContactField::Name, "Noa Petit"),
        (ContactField::Email, "noa@example.org"),
        (ContactField::Phone, "+33 6 12 34 56 78"),
        (ContactField::Address, "8 chemin des Vignes"),
        (ContactField::City, "Bordeaux"),
        (ContactField::PostalCode, "33000"),
        (ContactField::Country, "France"),
    ] {
        if Some(field) == skip {
            continue;
        }
        session
            .update(DraftField::Contact(field, value.to_string()))
            .unwrap();
    }
}

fn drain(rx: &mut UnboundedReceiver<Notification>) -> Vec<Notification> {
    let mut out = Vec::new();
    while let Ok(n) = rx.try_recv() {
        out.push(n);
    }
    out
}

#[tokio::test]
async fn confirmed_booking_is_stored_and_session_cleared() {
    let storage = Arc::new(LocalStorageSink::new());
    let (mut session, mut rx) = start(storage.clone(), SessionConfig::default());

    session.select(cabin("4", 115.0, 2)).unwrap();
    session.update(DraftField::Dates(three_nights())).unwrap();
    fill_contact(&mut session, None);
    session.set_adults(2).unwrap();
    session.set_children(0).unwrap();

    assert_eq!(session.quote().nights, 3);
    assert_eq!(session.quote().total_price, 345.0);

    let intent = session.confirm().await.unwrap();
    assert_eq!(intent.number_of_nights, 3);
    assert_eq!(intent.total_price, 345.0);
    assert_eq!(intent.adults, 2);
    assert_eq!(session.phase(), Phase::Idle);
    assert!(session.draft().is_none());

    let stored = storage.booking_for("4").await.unwrap();
    assert_eq!(stored.booking, intent);

    let toasts = drain(&mut rx);
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].level, Level::Success);
}

#[tokio::test]
async fn over_capacity_is_refused_without_losing_input() {
    let storage = Arc::new(LocalStorageSink::new());
    let (mut session, mut rx) = start(storage.clone(), SessionConfig::default());

    session.select(cabin("4", 115.0, 2)).unwrap();
    session.update(DraftField::Dates(three_nights())).unwrap();
    fill_contact(&mut session, None);
    session
        .update(DraftField::Guests(Guests {
            adults: 2,
            children: 1,
        }))
        .unwrap();
    let before = session.draft().cloned().unwrap();

    let err = session.confirm().await.unwrap_err();
    assert_eq!(
        err.validation_errors().unwrap(),
        &[ValidationError::CapacityExceeded { requested: 3, max: 2 }]
    );
    assert_eq!(session.phase(), Phase::Selecting);

    let after = session.draft().unwrap();
    assert_eq!(after.date_range, before.date_range);
    assert_eq!(after.contact, before.contact);
    assert!(storage.is_empty().await);

    let toasts = drain(&mut rx);
    assert_eq!(toasts[0].message, "3 guests exceed the maximum capacity of 2");
}

#[tokio::test]
async fn huge_guest_counts_are_reported_as_over_capacity() {
    let (mut session, _rx) = start(Arc::new(LocalStorageSink::new()), SessionConfig::default());

    session.select(cabin("4", 115.0, 2)).unwrap();
    session.update(DraftField::Dates(three_nights())).unwrap();
    fill_contact(&mut session, None);
    session
        .update(DraftField::Guests(Guests {
            adults: u32::MAX,
            children: 1,
        }))
        .unwrap();

    let err = session.confirm().await.unwrap_err();
    assert_eq!(
        err.validation_errors().unwrap()[0].kind(),
        ErrorKind::CapacityExceeded
    );
    assert_eq!(session.phase(), Phase::Selecting);
}

#[tokio::test]
async fn missing_email_is_reported_by_name() {
    let (mut session, mut rx) = start(Arc::new(LocalStorageSink::new()), SessionConfig::default());

    session.select(cabin("4", 115.0, 2)).unwrap();
    session.update(DraftField::Dates(three_nights())).unwrap();
    fill_contact(&mut session, Some(ContactField::Email));

    let err = session.confirm().await.unwrap_err();
    let errors = err.validation_errors().unwrap();
    assert_eq!(errors[0], ValidationError::MissingRequiredField(ContactField::Email));
    assert_eq!(errors[0].kind(), ErrorKind::MissingRequiredField);
    assert!(drain(&mut rx)[0].message.contains("email"));
}

#[tokio::test]
async fn switching_property_resets_guests() {
    let (mut session, _rx) = start(Arc::new(LocalStorageSink::new()), SessionConfig::default());

    session.select(cabin("A", 175.0, 4)).unwrap();
    session.set_adults(4).unwrap();
    session.select(cabin("B", 150.0, 2)).unwrap();

    assert_eq!(
        session.draft().unwrap().guests,
        Guests {
            adults: 1,
            children: 0
        }
    );
}

#[tokio::test]
async fn viewer_clicks_do_not_close_the_modal() {
    let (mut session, _rx) = start(Arc::new(LocalStorageSink::new()), SessionConfig::default());

    session.select(cabin("4", 115.0, 2)).unwrap();
    session.update(DraftField::Dates(three_nights())).unwrap();
    session.open_gallery(1).unwrap();

    session.dismiss(&EventTarget::lightbox());
    assert_eq!(session.phase(), Phase::Selecting);
    assert_eq!(session.draft().unwrap().nights(), 3);

    session.dismiss(&EventTarget::backdrop());
    assert_eq!(session.phase(), Phase::Idle);
    assert!(session.draft().is_none());
    assert!(!session.lightbox().is_open);
}

struct StalledSink;

#[async_trait]
impl BookingSink for StalledSink {
    async fn record_booking(&self, _intent: &BookingIntent) -> Result<(), SinkError> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok(())
    }

    fn sink_name(&self) -> &'static str {
        "stalled"
    }
}

#[tokio::test(start_paused = true)]
async fn stalled_sink_times_out_and_keeps_draft() {
    let config = SessionConfig {
        confirm_timeout: Duration::from_secs(2),
        ..SessionConfig::default()
    };
    let (mut session, mut rx) = start(Arc::new(StalledSink), config);

    session.select(cabin("4", 115.0, 2)).unwrap();
    session.update(DraftField::Dates(three_nights())).unwrap();
    fill_contact(&mut session, None);

    let err = session.confirm().await.unwrap_err();
    assert!(matches!(err, SessionError::SinkTimeout(_)));
    assert_eq!(session.phase(), Phase::Selecting);
    assert!(session.draft().is_some());

    let toasts = drain(&mut rx);
    assert_eq!(toasts.last().unwrap().level, Level::Error);
}
