use std::sync::Arc;

use chrono::{Duration, Local};
use tiny_house_booking::amenities::AmenityItem;
use tiny_house_booking::booking::EventTarget;
use tiny_house_booking::models::ContactField;
use tiny_house_booking::sink::LocalStorageSink;
use tiny_house_booking::{
    AppConfig, BookingSession, DateRange, DraftField, Notifier, SessionError,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("tiny_house_booking=info")),
        )
        .init();

    info!("🏠 Tiny House Booking - simulated booking walkthrough");
    info!("=====================================================");

    let config = AppConfig::from_env();
    let directory = config.directory()?;

    info!("Loading properties from the {} catalog...", directory.source_name());
    let properties = directory.list_properties().await?;

    for (i, property) in properties.iter().enumerate() {
        println!("{}. {} ({} / night)", i + 1, property.name, property.price);
        println!("   {}", property.location);
        println!(
            "   up to {} guests, {} bedroom(s), {} bathroom(s)",
            property.capacity, property.bedrooms, property.bathrooms
        );
        let amenities: Vec<String> = property
            .amenities
            .iter()
            .map(|a| {
                let item = AmenityItem::new(a);
                format!("{} [{}]", item.label, item.icon.name())
            })
            .collect();
        println!("   Amenities: {}", amenities.join(", "));
        println!();
    }

    let Some(property) = properties.first().cloned() else {
        info!("Catalog is empty, nothing to book");
        return Ok(());
    };

    let (notifier, mut notifications) = Notifier::channel();
    let storage = Arc::new(LocalStorageSink::new());
    let mut session = BookingSession::new(storage.clone(), notifier, config.session_config());

    let property_id = property.id.clone();
    session.select(property)?;

    let check_in = Local::now().date_naive() + Duration::days(14);
    session.update(DraftField::Dates(DateRange::new(
        check_in,
        check_in + Duration::days(3),
    )))?;
    let quote = session.quote();
    info!("Quoted {} nights for {}", quote.nights, quote.total_price);

    // Peek at the photos; the click on the viewer must not close the modal
    session.open_gallery(0)?;
    session.dismiss(&EventTarget::lightbox());
    session.escape();

    // First attempt without contact details is refused
    match session.confirm().await {
        Err(SessionError::Invalid(errors)) => {
            info!("⚠️  Booking refused, {} field(s) need attention", errors.len());
            for error in &errors {
                info!("   - {}", error);
            }
        }
        Err(e) => return Err(e.into()),
        Ok(intent) => info!("Unexpectedly recorded booking for {}", intent.property_id),
    }

    for (field, value) in [
        (ContactField::Name, "Demo Guest"),
        (ContactField::Email, "guest@example.com"),
        (ContactField::Phone, "0612345678"),
        (ContactField::Address, "1 Demo Street"),
        (ContactField::City, "Asheville"),
        (ContactField::PostalCode, "28801"),
        (ContactField::Country, "USA"),
    ] {
        session.update(DraftField::Contact(field, value.to_string()))?;
    }
    session.set_adults(2)?;

    session.confirm().await?;

    while let Ok(notification) = notifications.try_recv() {
        println!("[{:?}] {}: {}", notification.level, notification.title, notification.message);
    }

    if let Some(stored) = storage.booking_for(&property_id).await {
        let json = serde_json::to_string_pretty(&stored)?;
        info!("💾 Stored booking_{}:\n{}", property_id, json);
    }

    Ok(())
}
