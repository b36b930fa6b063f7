//! Car-mat material categories.

use core::fmt;

use serde::{Deserialize, Serialize};

/// The tab label that selects every material.
pub const ALL_MATERIALS: &str = "all";

/// A mat material category.
///
/// Materials serialize as their storefront label. Labels are matched exactly
/// and case-sensitively; `"eva"` is not a material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Material {
    /// Ethylene-vinyl acetate honeycomb mats.
    #[serde(rename = "EVA")]
    Eva,
    /// Synthetic (eco) leather.
    #[serde(rename = "Кожзам")]
    EcoLeather,
    /// Automotive needle felt.
    #[serde(rename = "Автовойлок")]
    Felt,
}

impl Material {
    /// Every material, in tab order.
    pub const ALL: [Self; 3] = [Self::Eva, Self::EcoLeather, Self::Felt];

    /// The category label shown on product badges and filter tabs.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Eva => "EVA",
            Self::EcoLeather => "Кожзам",
            Self::Felt => "Автовойлок",
        }
    }

    /// Look up a material by its exact label.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.label() == label)
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A catalog filter selection.
///
/// Built from the raw tab value. Anything other than `"all"` or an exact
/// material label is kept as `Unknown` and matches no product.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MaterialFilter {
    #[default]
    All,
    Only(Material),
    Unknown(String),
}

impl MaterialFilter {
    /// Parse a tab selection.
    #[must_use]
    pub fn parse(selected: &str) -> Self {
        if selected == ALL_MATERIALS {
            return Self::All;
        }
        Material::from_label(selected).map_or_else(|| Self::Unknown(selected.to_owned()), Self::Only)
    }

    /// Whether a product of the given material passes the filter.
    #[must_use]
    pub fn matches(&self, material: Material) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => *selected == material,
            Self::Unknown(_) => false,
        }
    }

    /// The raw selection value, as it would appear in a query string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL_MATERIALS,
            Self::Only(material) => material.label(),
            Self::Unknown(raw) => raw,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_roundtrip() {
        for material in Material::ALL {
            assert_eq!(Material::from_label(material.label()), Some(material));
        }
    }

    #[test]
    fn test_from_label_is_case_sensitive() {
        assert_eq!(Material::from_label("EVA"), Some(Material::Eva));
        assert_eq!(Material::from_label("eva"), None);
        assert_eq!(Material::from_label("кожзам"), None);
    }

    #[test]
    fn test_serde_uses_label() {
        let json = serde_json::to_string(&Material::Felt).unwrap();
        assert_eq!(json, "\"Автовойлок\"");
        let parsed: Material = serde_json::from_str("\"Кожзам\"").unwrap();
        assert_eq!(parsed, Material::EcoLeather);
    }

    #[test]
    fn test_filter_parse() {
        assert_eq!(MaterialFilter::parse("all"), MaterialFilter::All);
        assert_eq!(
            MaterialFilter::parse("EVA"),
            MaterialFilter::Only(Material::Eva)
        );
        assert_eq!(
            MaterialFilter::parse("All"),
            MaterialFilter::Unknown("All".to_string())
        );
    }

    #[test]
    fn test_filter_matches() {
        assert!(MaterialFilter::All.matches(Material::Felt));
        assert!(MaterialFilter::Only(Material::Eva).matches(Material::Eva));
        assert!(!MaterialFilter::Only(Material::Eva).matches(Material::Felt));
        assert!(!MaterialFilter::Unknown("wool".to_string()).matches(Material::Eva));
    }

    #[test]
    fn test_filter_as_str() {
        assert_eq!(MaterialFilter::All.as_str(), "all");
        assert_eq!(MaterialFilter::Only(Material::EcoLeather).as_str(), "Кожзам");
        assert_eq!(MaterialFilter::Unknown("x".to_string()).as_str(), "x");
    }
}
