//! Category slug to Nepali label lookup

/// One row of the category table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryOption {
    /// English slug, lowercase
    pub value: &'static str,
    /// Nepali display label
    pub label: &'static str,
}

const fn option(value: &'static str, label: &'static str) -> CategoryOption {
    CategoryOption { value, label }
}

/// Category table in declaration order. Lookups scan it front to back.
pub static CATEGORY_OPTIONS: &[CategoryOption] = &[
    option("news", "समाचार"),
    option("politics", "राजनीति"),
    option("economy", "अर्थ"),
    option("business", "व्यापार"),
    option("sports", "खेलकुद"),
    option("entertainment", "मनोरञ्जन"),
    option("technology", "प्रविधि"),
    option("health", "स्वास्थ्य"),
    option("education", "शिक्षा"),
    option("international", "अन्तर्राष्ट्रिय"),
    option("society", "समाज"),
    option("opinion", "विचार"),
    option("lifestyle", "जीवनशैली"),
    option("literature", "साहित्य"),
    option("interview", "अन्तर्वार्ता"),
    option("province", "प्रदेश"),
];

/// Map an English category slug to its Nepali label.
///
/// Matching ignores case. Unknown slugs are returned unchanged.
pub fn localize_category(slug: &str) -> &str {
    let needle = slug.to_lowercase();
    CATEGORY_OPTIONS
        .iter()
        .find(|option| option.value == needle)
        .map(|option| option.label)
        .unwrap_or(slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_entry_localizes_in_any_case() {
        for option in CATEGORY_OPTIONS {
            assert_eq!(localize_category(option.value), option.label);
            assert_eq!(localize_category(&option.value.to_uppercase()), option.label);
        }
    }

    #[test]
    fn test_unknown_slug_passes_through() {
        assert_eq!(localize_category("Astrology"), "Astrology");
        assert_eq!(localize_category(""), "");
        assert_eq!(localize_category("राजनीति"), "राजनीति");
    }

    #[test]
    fn test_table_values_are_unique_and_lowercase() {
        let mut seen = HashSet::new();
        for option in CATEGORY_OPTIONS {
            assert_eq!(option.value, option.value.to_lowercase());
            assert!(seen.insert(option.value), "duplicate slug {}", option.value);
        }
    }
}
