use std::collections::{HashMap, HashSet};

use crate::common::ProviderId;
use crate::domains::categories::models::{CategoryServiceRef, ServiceCategory};

/// A catalog category with its usage counts
#[derive(Debug, Clone)]
pub struct CategoryStats {
    pub category: ServiceCategory,
    /// Active services in the category, whatever their provider's state
    pub service_count: usize,
    /// Distinct active providers offering an active service in the category
    pub provider_count: usize,
}

#[derive(Default)]
struct Tally<'a> {
    services: usize,
    providers: HashSet<&'a ProviderId>,
}

/// Count services and providers per category.
///
/// Services join categories by lower-cased name, so `"plumbing"` counts toward
/// `"Plumbing"`. Category order is kept; unused categories get zero counts.
pub fn aggregate_category_stats(
    categories: Vec<ServiceCategory>,
    services: &[CategoryServiceRef],
) -> Vec<CategoryStats> {
    let mut tallies: HashMap<String, Tally<'_>> = HashMap::new();

    for service in services {
        let tally = tallies.entry(service.category.to_lowercase()).or_default();
        tally.services += 1;
        if service.provider_active {
            tally.providers.insert(&service.provider_id);
        }
    }

    categories
        .into_iter()
        .map(|category| {
            let (service_count, provider_count) = tallies
                .get(&category.name.to_lowercase())
                .map(|t| (t.services, t.providers.len()))
                .unwrap_or((0, 0));

            CategoryStats {
                category,
                service_count,
                provider_count,
            }
        })
        .collect()
}
