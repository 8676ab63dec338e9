use std::env;

/// Catalog startup options.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Start with the bundled demo products.
    pub seed_fixtures: bool,
}

impl CatalogConfig {
    /// Environment variables:
    /// - CATALOG_SEED_FIXTURES: "true"/"false" (default: "true")
    pub fn from_env() -> Self {
        Self {
            seed_fixtures: parse_flag(env::var("CATALOG_SEED_FIXTURES").ok().as_deref(), true),
        }
    }
}

fn parse_flag(raw: Option<&str>, default: bool) -> bool {
    match raw.map(|value| value.trim().to_ascii_lowercase()) {
        Some(value) if matches!(value.as_str(), "1" | "true" | "yes" | "on") => true,
        Some(value) if matches!(value.as_str(), "0" | "false" | "no" | "off") => false,
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_fall_back_to_default_for_missing_or_unknown_values() {
        assert!(parse_flag(None, true));
        assert!(!parse_flag(Some("maybe"), false));
    }

    #[test]
    fn should_parse_common_spellings() {
        assert!(parse_flag(Some("TRUE"), false));
        assert!(parse_flag(Some(" on "), false));
        assert!(!parse_flag(Some("false"), true));
        assert!(!parse_flag(Some("0"), true));
    }
}
