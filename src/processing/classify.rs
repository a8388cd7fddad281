//! Mapping of generic resources onto census categories.

use crate::models::{Category, Census, ResourceRecord};

/// One row of the classification table.
#[derive(Debug, Clone, Copy)]
pub struct ClassificationRule {
    /// Exact, case-sensitive resource type.
    pub resource_type: &'static str,
    /// Required kind prefix, or `None` to match any kind.
    pub kind_prefix: Option<&'static str>,
    pub category: Category,
}

impl ClassificationRule {
    fn matches(&self, record: &ResourceRecord) -> bool {
        record.resource_type == self.resource_type
            && self
                .kind_prefix
                .map_or(true, |prefix| record.kind().starts_with(prefix))
    }
}

/// Rules are tried in order; the first match wins.
pub const CLASSIFICATION_RULES: &[ClassificationRule] = &[
    ClassificationRule {
        resource_type: "Microsoft.Web/sites",
        kind_prefix: Some("functionapp"),
        category: Category::FunctionApps,
    },
    ClassificationRule {
        resource_type: "Microsoft.Web/sites",
        kind_prefix: None,
        category: Category::AppService,
    },
];

/// Category for a single resource, if it is one we count.
pub fn classify(record: &ResourceRecord) -> Option<Category> {
    CLASSIFICATION_RULES
        .iter()
        .find(|rule| rule.matches(record))
        .map(|rule| rule.category)
}

/// Add every classifiable record to `census`.
///
/// Returns how many records were counted.
pub fn classify_resources(records: &[ResourceRecord], census: &mut Census) -> u64 {
    let mut counted = 0;
    for record in records {
        if let Some(category) = classify(record) {
            log::trace!("{} '{}' -> {category}", record.resource_type, record.name);
            census.add(category, 1);
            counted += 1;
        }
    }
    counted
}
