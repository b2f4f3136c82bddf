//! Suggestions, category listing and provider profile actions.

mod common;

use common::*;
use marketplace_core::domains::providers::actions::get_provider_profile;
use marketplace_core::domains::search::{get_categories, get_search_suggestions};
use marketplace_core::kernel::InMemoryMarketplaceStore;

#[tokio::test]
async fn test_short_terms_skip_the_store() {
    // A failing store proves nothing is queried
    let deps = InMemoryMarketplaceStore::new().failing("should not be called").into_server_deps();

    for term in ["", "a", "   ", "é"] {
        let suggestions = get_search_suggestions(term, 5, &deps).await.unwrap();
        assert!(suggestions.is_empty(), "term {:?}", term);
    }
}

#[tokio::test]
async fn test_suggestions_per_source() {
    let deps = springfield_deps();

    let leak = get_search_suggestions("LEAK", 5, &deps).await.unwrap();
    assert_eq!(leak.services, vec!["Emergency leak repair", "Leak detection"]);
    assert!(leak.providers.is_empty());
    assert!(leak.categories.is_empty());

    let clean = get_search_suggestions("clean", 5, &deps).await.unwrap();
    // Drain cleaning is inactive
    assert_eq!(clean.services, vec!["Deep cleaning"]);
    assert_eq!(clean.providers, vec!["Sparkle Cleaning"]);
    assert_eq!(clean.categories, vec!["Cleaning"]);
}

#[tokio::test]
async fn test_inactive_provider_names_are_hidden() {
    let deps = springfield_deps();

    let paint = get_search_suggestions("paint", 5, &deps).await.unwrap();

    assert_eq!(paint.services, vec!["Interior painting"]);
    assert!(paint.providers.is_empty());
    assert_eq!(paint.categories, vec!["Painting"]);
}

#[tokio::test]
async fn test_suggestion_limit_applies_per_list() {
    let deps = springfield_deps();

    let suggestions = get_search_suggestions("in", 2, &deps).await.unwrap();

    assert_eq!(
        suggestions.services,
        vec!["Water heater installation", "Outlet installation"]
    );
    assert_eq!(
        suggestions.providers,
        vec!["John's Plumbing Services", "Green Thumb Landscaping"]
    );
    assert_eq!(suggestions.categories, vec!["Plumbing", "Cleaning"]);
}

#[tokio::test]
async fn test_duplicate_service_names_collapse() {
    let deps = InMemoryMarketplaceStore::new()
        .with_provider(provider("p1", "First"))
        .with_provider(provider("p2", "Second"))
        .with_service(service(1, "p1", "Gutter cleaning", "Cleaning", 80))
        .with_service(service(2, "p2", "Gutter cleaning", "Cleaning", 90))
        .with_service(service(3, "p2", "Gutter repair", "Handyman", 120))
        .into_server_deps();

    let suggestions = get_search_suggestions("gutter", 5, &deps).await.unwrap();

    assert_eq!(suggestions.services, vec!["Gutter cleaning", "Gutter repair"]);
}

#[tokio::test]
async fn test_suggestion_store_failure_is_reported() {
    let deps = InMemoryMarketplaceStore::new().failing("timeout").into_server_deps();

    let error = get_search_suggestions("leak", 5, &deps).await.unwrap_err();

    assert!(format!("{:#}", error).contains("timeout"));
}

#[tokio::test]
async fn test_category_counts() {
    let deps = springfield_deps();

    let categories = get_categories(true, &deps).await.unwrap();
    let counts: Vec<(&str, usize, usize)> = categories
        .iter()
        .map(|c| (c.name.as_str(), c.service_count, c.provider_count))
        .collect();

    assert_eq!(
        counts,
        vec![
            // Leak detection is filed under "plumbing"
            ("Plumbing", 3, 2),
            ("Electrical", 2, 1),
            ("Handyman", 2, 1),
            ("Cleaning", 1, 1),
            // Service counted, inactive provider is not
            ("Painting", 1, 0),
            ("Carpentry", 0, 0),
            ("HVAC", 0, 0),
            ("Landscaping", 1, 1),
        ]
    );
}

#[tokio::test]
async fn test_inactive_categories_on_request() {
    let deps = springfield_deps();

    let active = get_categories(true, &deps).await.unwrap();
    let all = get_categories(false, &deps).await.unwrap();

    assert_eq!(active.len(), 8);
    assert_eq!(all.len(), 9);
    let roofing = all.last().unwrap();
    assert_eq!(roofing.name, "Roofing");
    assert_eq!((roofing.service_count, roofing.provider_count), (0, 0));
}

#[tokio::test]
async fn test_empty_catalog() {
    let deps = InMemoryMarketplaceStore::new().into_server_deps();

    assert!(get_categories(true, &deps).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_provider_profile() {
    let deps = springfield_deps();

    let profile = get_provider_profile("prov-01", &deps)
        .await
        .unwrap()
        .expect("profile exists");

    assert_eq!(profile.full_name, "John Doe");
    assert_eq!(profile.member_since, day(1));

    // Inactive services are listed with their flag
    let services: Vec<(i32, bool)> = profile.services.iter().map(|s| (s.id, s.is_active)).collect();
    assert_eq!(services, vec![(1, true), (2, true), (3, false)]);

    let images: Vec<i32> = profile.portfolio_images.iter().map(|i| i.id).collect();
    assert_eq!(images, vec![2, 1]);
    assert_eq!(
        profile.portfolio_images[0].image_url,
        "/uploads/portfolio/prov-01/job-2.jpg"
    );
}

#[tokio::test]
async fn test_profile_lookup_misses() {
    let deps = springfield_deps();

    assert!(get_provider_profile("cust-01", &deps).await.unwrap().is_none());
    assert!(get_provider_profile("nobody", &deps).await.unwrap().is_none());

    // Inactive providers still have a public profile
    let inactive = get_provider_profile("prov-06", &deps).await.unwrap().unwrap();
    assert!(!inactive.is_active);
}
