use poem_openapi::Object;
use serde::{Deserialize, Serialize};

/// Aggregate dashboard statistics.
///
/// The user/product counts and stock total are derived from the live
/// collections; the remaining figures are fixed presentation values not
/// backed by any stored data.
#[derive(Object, Debug, Serialize, Deserialize)]
#[oai(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_users: u64,
    pub total_products: u64,
    /// Products whose status is "active"
    pub active_products: u64,
    /// Sum of stock across all products
    pub total_stock: u64,
    pub revenue: u64,
    pub orders: u64,
    pub conversion_rate: f64,
    /// Formatted as "m:ss"
    pub avg_session_duration: String,
    pub bounce_rate: f64,
}

/// One month of the revenue series
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct RevenuePoint {
    pub month: String,
    pub revenue: u64,
    pub users: u64,
}

/// One month of the sales series
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct SalesPoint {
    pub name: String,
    pub sales: u64,
    pub orders: u64,
}

/// One slice of the traffic-source breakdown
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct TrafficSlice {
    pub name: String,
    /// Share of traffic in percent
    pub value: u64,
    /// Hex color used by the dashboard chart
    pub color: String,
}
