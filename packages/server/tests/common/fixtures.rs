//! Test fixtures for creating test data.
//!
//! `springfield_store` is the shared dataset most tests search over:
//!
//! | Provider | Business               | Rating | Reviews | Rate | City        | Location          |
//! |----------|------------------------|--------|---------|------|-------------|-------------------|
//! | prov-01  | John's Plumbing        | 4.5    | 23      | 75   | Springfield | search center     |
//! | prov-02  | Smith Electric         | 4.8    | 41      | 90   | Springfield | ~3.3 km away      |
//! | prov-03  | Handy Bob              | -      | 0       | -    | Chatham     | none              |
//! | prov-04  | Green Thumb            | 4.2    | 12      | 55   | Peoria      | ~101 km away      |
//! | prov-05  | Sparkle Cleaning       | 3.9    | 8       | 40   | Springfield | latitude only     |
//! | prov-06  | Inactive Painters      | 5.0    | 2       | 60   | Springfield | inactive account  |
//! | cust-01  | (customer)             | -      | 0       | -    | Springfield | not a provider    |

use anyhow::Result;
use chrono::{DateTime, Duration, TimeZone, Utc};
use marketplace_core::domains::categories::models::ServiceCategory;
use marketplace_core::domains::providers::models::{PortfolioImage, Provider};
use marketplace_core::domains::services::models::Service;
use marketplace_core::kernel::{InMemoryMarketplaceStore, ServerDeps};
use rust_decimal::Decimal;
use sqlx::PgPool;

/// Center of every located search in the fixtures
pub const SPRINGFIELD: (f64, f64) = (39.7817, -89.6501);

pub fn day(n: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap() + Duration::days(n)
}

pub fn dec(value: i64) -> Decimal {
    Decimal::from(value)
}

/// A listed provider with no rating, rate or location
pub fn provider(id: &str, business_name: &str) -> Provider {
    Provider {
        id: id.into(),
        first_name: "Test".to_string(),
        last_name: "Provider".to_string(),
        business_name: Some(business_name.to_string()),
        business_description: None,
        hourly_rate: None,
        service_areas: vec![],
        rating: None,
        total_reviews: 0,
        profile_picture_url: None,
        city: None,
        latitude: None,
        longitude: None,
        service_radius_km: 25,
        is_active: true,
        created_at: day(0),
    }
}

/// An active hourly service
pub fn service(id: i32, provider_id: &str, name: &str, category: &str, price: i64) -> Service {
    Service {
        id,
        provider_id: provider_id.into(),
        name: name.to_string(),
        description: format!("{} by a local team", name),
        category: category.to_string(),
        base_price: dec(price),
        price_type: "Hourly".to_string(),
        estimated_duration_minutes: 60,
        is_active: true,
        created_at: day(10 + i64::from(id)),
        updated_at: None,
    }
}

pub fn category(id: i32, name: &str, display_order: i32) -> ServiceCategory {
    ServiceCategory {
        id,
        name: name.to_string(),
        description: None,
        icon: None,
        is_active: true,
        display_order,
    }
}

pub fn portfolio_image(id: i32, provider_id: &str, display_order: i32) -> PortfolioImage {
    PortfolioImage {
        id,
        provider_id: provider_id.into(),
        file_name: format!("job-{}.jpg", id),
        file_path: format!("uploads/portfolio/{}/job-{}.jpg", provider_id, id),
        description: Some(format!("Finished job {}", id)),
        display_order,
        uploaded_at: day(20),
    }
}

/// The eight seeded catalog categories plus an inactive one
pub fn catalog() -> Vec<ServiceCategory> {
    let mut categories: Vec<ServiceCategory> = [
        "Plumbing",
        "Electrical",
        "Handyman",
        "Cleaning",
        "Painting",
        "Carpentry",
        "HVAC",
        "Landscaping",
    ]
    .iter()
    .zip(1..)
    .map(|(name, id)| category(id, name, id))
    .collect();

    categories.push(ServiceCategory {
        is_active: false,
        ..category(9, "Roofing", 9)
    });
    categories
}

pub fn springfield_providers() -> Vec<Provider> {
    vec![
        Provider {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            business_description: Some("Licensed plumber serving the city".to_string()),
            hourly_rate: Some(dec(75)),
            service_areas: vec!["Downtown".to_string(), "Northside".to_string()],
            rating: Some(4.5),
            total_reviews: 23,
            city: Some("Springfield".to_string()),
            latitude: Some(SPRINGFIELD.0),
            longitude: Some(SPRINGFIELD.1),
            profile_picture_url: Some("/uploads/avatars/prov-01.jpg".to_string()),
            created_at: day(1),
            ..provider("prov-01", "John's Plumbing Services")
        },
        Provider {
            first_name: "Jane".to_string(),
            last_name: "Smith".to_string(),
            business_description: Some("Residential electrical work".to_string()),
            hourly_rate: Some(dec(90)),
            service_areas: vec!["Downtown".to_string(), "Westside".to_string()],
            rating: Some(4.8),
            total_reviews: 41,
            city: Some("Springfield".to_string()),
            latitude: Some(39.80),
            longitude: Some(-89.62),
            created_at: day(2),
            ..provider("prov-02", "Smith Electric")
        },
        Provider {
            first_name: "Bob".to_string(),
            last_name: "Brown".to_string(),
            service_areas: vec!["Chatham".to_string()],
            city: Some("Chatham".to_string()),
            created_at: day(3),
            ..provider("prov-03", "Handy Bob")
        },
        Provider {
            first_name: "Alice".to_string(),
            last_name: "Green".to_string(),
            hourly_rate: Some(dec(55)),
            service_areas: vec!["Peoria".to_string()],
            rating: Some(4.2),
            total_reviews: 12,
            city: Some("Peoria".to_string()),
            latitude: Some(40.6936),
            longitude: Some(-89.5890),
            created_at: day(4),
            ..provider("prov-04", "Green Thumb Landscaping")
        },
        Provider {
            first_name: "Carl".to_string(),
            last_name: "White".to_string(),
            hourly_rate: Some(dec(40)),
            service_areas: vec!["Eastside".to_string()],
            rating: Some(3.9),
            total_reviews: 8,
            city: Some("Springfield".to_string()),
            latitude: Some(39.78),
            longitude: None,
            created_at: day(5),
            ..provider("prov-05", "Sparkle Cleaning")
        },
        Provider {
            first_name: "Dana".to_string(),
            last_name: "Black".to_string(),
            hourly_rate: Some(dec(60)),
            rating: Some(5.0),
            total_reviews: 2,
            city: Some("Springfield".to_string()),
            latitude: Some(39.78),
            longitude: Some(-89.64),
            is_active: false,
            created_at: day(6),
            ..provider("prov-06", "Inactive Painters")
        },
        Provider {
            first_name: "Eve".to_string(),
            last_name: "Customer".to_string(),
            business_name: None,
            city: Some("Springfield".to_string()),
            created_at: day(7),
            ..provider("cust-01", "")
        },
    ]
}

pub fn springfield_services() -> Vec<Service> {
    let fixed = |s: Service| Service {
        price_type: "Fixed".to_string(),
        ..s
    };

    vec![
        service(1, "prov-01", "Emergency leak repair", "Plumbing", 100),
        fixed(service(2, "prov-01", "Water heater installation", "Plumbing", 450)),
        Service {
            is_active: false,
            ..fixed(service(3, "prov-01", "Drain cleaning", "Plumbing", 120))
        },
        Service {
            price_type: "Quote".to_string(),
            ..service(4, "prov-02", "Panel upgrade", "Electrical", 1200)
        },
        service(5, "prov-02", "Outlet installation", "Electrical", 85),
        service(6, "prov-03", "Furniture assembly", "Handyman", 60),
        fixed(service(7, "prov-03", "Drywall patching", "Handyman", 150)),
        fixed(service(8, "prov-04", "Lawn mowing", "Landscaping", 45)),
        fixed(service(9, "prov-05", "Deep cleaning", "Cleaning", 200)),
        Service {
            price_type: "Quote".to_string(),
            ..service(10, "prov-06", "Interior painting", "Painting", 300)
        },
        service(11, "prov-02", "Leak detection", "plumbing", 95),
    ]
}

pub fn springfield_store() -> InMemoryMarketplaceStore {
    let mut store = InMemoryMarketplaceStore::new();
    for provider in springfield_providers() {
        store = store.with_provider(provider);
    }
    for service in springfield_services() {
        store = store.with_service(service);
    }
    for category in catalog() {
        store = store.with_category(category);
    }
    store
        .with_portfolio_image(portfolio_image(1, "prov-01", 2))
        .with_portfolio_image(portfolio_image(2, "prov-01", 1))
        .with_portfolio_image(portfolio_image(3, "prov-02", 1))
}

pub fn springfield_deps() -> ServerDeps {
    springfield_store().into_server_deps()
}

// =============================================================================
// Postgres fixtures
// =============================================================================

pub async fn insert_provider(pool: &PgPool, provider: &Provider) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO users (
            id, first_name, last_name, business_name, business_description,
            hourly_rate, service_areas, rating, total_reviews, profile_picture_url,
            city, latitude, longitude, service_radius_km, is_active, created_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
        "#,
    )
    .bind(&provider.id)
    .bind(&provider.first_name)
    .bind(&provider.last_name)
    .bind(&provider.business_name)
    .bind(&provider.business_description)
    .bind(provider.hourly_rate)
    .bind(&provider.service_areas)
    .bind(provider.rating)
    .bind(provider.total_reviews)
    .bind(&provider.profile_picture_url)
    .bind(&provider.city)
    .bind(provider.latitude)
    .bind(provider.longitude)
    .bind(provider.service_radius_km)
    .bind(provider.is_active)
    .bind(provider.created_at)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn insert_service(pool: &PgPool, service: &Service) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO services (
            id, provider_id, name, description, category, base_price, price_type,
            estimated_duration_minutes, is_active, created_at, updated_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        "#,
    )
    .bind(service.id)
    .bind(&service.provider_id)
    .bind(&service.name)
    .bind(&service.description)
    .bind(&service.category)
    .bind(service.base_price)
    .bind(&service.price_type)
    .bind(service.estimated_duration_minutes)
    .bind(service.is_active)
    .bind(service.created_at)
    .bind(service.updated_at)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn insert_portfolio_image(pool: &PgPool, image: &PortfolioImage) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO portfolio_images (
            id, provider_id, file_name, file_path, description, display_order, uploaded_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        "#,
    )
    .bind(image.id)
    .bind(&image.provider_id)
    .bind(&image.file_name)
    .bind(&image.file_path)
    .bind(&image.description)
    .bind(image.display_order)
    .bind(image.uploaded_at)
    .execute(pool)
    .await?;
    Ok(())
}

/// Load the Springfield dataset into an empty database. The category catalog
/// comes from the seed migration.
pub async fn seed_springfield(pool: &PgPool) -> Result<()> {
    for provider in springfield_providers() {
        insert_provider(pool, &provider).await?;
    }
    for service in springfield_services() {
        insert_service(pool, &service).await?;
    }
    for image in [
        portfolio_image(1, "prov-01", 2),
        portfolio_image(2, "prov-01", 1),
        portfolio_image(3, "prov-02", 1),
    ] {
        insert_portfolio_image(pool, &image).await?;
    }
    Ok(())
}
