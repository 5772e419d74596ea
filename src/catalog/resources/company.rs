//! Company resource.

use serde::{Deserialize, Serialize};

use crate::catalog::resources::common::Image;
use crate::catalog::CatalogResource;

/// A company that develops or publishes catalog games.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Company {
    /// The unique catalog identifier.
    pub id: i64,
    /// The company's name.
    pub name: String,
    /// URL-safe name.
    pub slug: String,
    /// Canonical catalog page URL.
    pub url: String,
    /// Creation time, Unix milliseconds.
    pub created_at: i64,
    /// Last update time, Unix milliseconds.
    pub updated_at: i64,
    /// Company logo.
    pub logo: Option<Image>,
    /// Company description.
    pub description: String,
    /// Country code as reported by the upstream.
    pub country: i32,
    /// Company website URL.
    pub website: String,
    /// Founding date, Unix milliseconds.
    pub start_date: i64,
    /// IDs of games this company developed.
    pub developed: Vec<i64>,
    /// IDs of games this company published.
    pub published: Vec<i64>,
}

impl CatalogResource for Company {
    const NAME: &'static str = "Company";
    const ENDPOINT: &'static str = "companies";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_company_decodes_with_narrow_field_selection() {
        let company: Company =
            serde_json::from_str(r#"{"id": 70, "name": "Nintendo"}"#).unwrap();
        assert_eq!(company.name, "Nintendo");
        assert!(company.logo.is_none());
        assert!(company.developed.is_empty());
    }
}
