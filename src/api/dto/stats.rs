//! DTOs for the dashboard statistics endpoint.

use serde::Serialize;

use crate::application::services::CatalogStats;

/// Response body of `GET /api/statistic`.
///
/// Key names are part of the dashboard contract.
#[derive(Debug, Serialize)]
pub struct StatisticsResponse {
    #[serde(rename = "totalProduct")]
    pub total_product: u64,
    #[serde(rename = "totalCategory")]
    pub total_category: u64,
    #[serde(rename = "totalServices")]
    pub total_services: u64,
    #[serde(rename = "totalFAQ")]
    pub total_faq: u64,
}

impl From<CatalogStats> for StatisticsResponse {
    fn from(stats: CatalogStats) -> Self {
        Self {
            total_product: stats.products,
            total_category: stats.categories,
            total_services: stats.services,
            total_faq: stats.faq,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_statistics_key_names() {
        let response = StatisticsResponse::from(CatalogStats {
            products: 3,
            categories: 2,
            services: 0,
            faq: 1,
        });

        assert_eq!(
            serde_json::to_value(response).unwrap(),
            json!({
                "totalProduct": 3,
                "totalCategory": 2,
                "totalServices": 0,
                "totalFAQ": 1
            })
        );
    }
}
