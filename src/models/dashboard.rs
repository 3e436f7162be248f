// src/models/dashboard.rs

use serde::Serialize;
use utoipa::ToSchema;

// Os cards do topo do painel
#[derive(Debug, Default, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_hostels: i64,
    pub active_tenants: i64,
    pub pending_tenants: i64,
    pub inactive_tenants: i64,

    // Somatório das arquiteturas de todos os hostels
    pub total_rooms: usize,
    pub total_seats: usize,
    pub occupied_seats: usize,
    pub available_seats: usize,
    /// Percentual de camas ocupadas, de 0 a 100.
    #[schema(example = 72.5)]
    pub occupancy_rate: f64,
}
