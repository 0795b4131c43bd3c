use std::sync::Arc;

use poem_openapi::payload::Json;
use poem_openapi::{OpenApi, Tags};

use crate::app_data::AppData;
use crate::stores::{ProductStore, UserStore};
use crate::types::dto::analytics::{DashboardStats, RevenuePoint, SalesPoint, TrafficSlice};

/// Analytics API endpoints
///
/// The stats endpoint derives its counts from the live collections. The
/// series endpoints are fixed presentation fixtures served verbatim; they
/// are not backed by any stored data.
pub struct AnalyticsApi {
    user_store: Arc<UserStore>,
    product_store: Arc<ProductStore>,
}

impl AnalyticsApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            user_store: app_data.user_store.clone(),
            product_store: app_data.product_store.clone(),
        }
    }
}

/// API tags for analytics endpoints
#[derive(Tags)]
enum ApiTags {
    /// Dashboard analytics endpoints
    Analytics,
}

#[OpenApi(prefix_path = "/analytics")]
impl AnalyticsApi {
    /// Aggregate dashboard statistics
    #[oai(path = "/stats", method = "get", tag = "ApiTags::Analytics")]
    async fn stats(&self) -> Json<DashboardStats> {
        let products = self.product_store.list();
        let active_products = products
            .iter()
            .filter(|product| product.status == "active")
            .count() as u64;
        let total_stock = products
            .iter()
            .map(|product| u64::from(product.stock))
            .sum();

        Json(DashboardStats {
            total_users: self.user_store.count() as u64,
            total_products: products.len() as u64,
            active_products,
            total_stock,
            revenue: 89_547,
            orders: 892,
            conversion_rate: 3.24,
            avg_session_duration: "4:35".to_string(),
            bounce_rate: 42.3,
        })
    }

    /// Monthly revenue series
    #[oai(path = "/revenue", method = "get", tag = "ApiTags::Analytics")]
    async fn revenue(&self) -> Json<Vec<RevenuePoint>> {
        Json(revenue_series())
    }

    /// Monthly sales series
    #[oai(path = "/sales", method = "get", tag = "ApiTags::Analytics")]
    async fn sales(&self) -> Json<Vec<SalesPoint>> {
        Json(sales_series())
    }

    /// Traffic-source breakdown
    #[oai(path = "/traffic", method = "get", tag = "ApiTags::Analytics")]
    async fn traffic(&self) -> Json<Vec<TrafficSlice>> {
        Json(traffic_series())
    }
}

fn revenue_series() -> Vec<RevenuePoint> {
    [
        ("Jan", 12_000, 1_200),
        ("Feb", 15_000, 1_400),
        ("Mar", 18_000, 1_600),
        ("Apr", 22_000, 1_800),
        ("May", 25_000, 2_000),
        ("Jun", 28_000, 2_200),
    ]
    .into_iter()
    .map(|(month, revenue, users)| RevenuePoint {
        month: month.to_string(),
        revenue,
        users,
    })
    .collect()
}

fn sales_series() -> Vec<SalesPoint> {
    [
        ("Jan", 4_000, 240),
        ("Feb", 3_000, 138),
        ("Mar", 2_000, 98),
        ("Apr", 2_780, 108),
        ("May", 1_890, 48),
        ("Jun", 2_390, 200),
    ]
    .into_iter()
    .map(|(name, sales, orders)| SalesPoint {
        name: name.to_string(),
        sales,
        orders,
    })
    .collect()
}

fn traffic_series() -> Vec<TrafficSlice> {
    [
        ("Direct", 35, "#3b82f6"),
        ("Social", 25, "#10b981"),
        ("Search", 20, "#f59e0b"),
        ("Email", 15, "#ef4444"),
        ("Referral", 5, "#8b5cf6"),
    ]
    .into_iter()
    .map(|(name, value, color)| TrafficSlice {
        name: name.to_string(),
        value,
        color: color.to_string(),
    })
    .collect()
}
