// src/services/dashboard_service.rs

use crate::{
    common::error::AppError,
    db::{HostelRepository, TenantRepository},
    models::{
        dashboard::DashboardSummary,
        tenant::{Tenant, TenantFilter, TenantStatus},
    },
    services::architecture_service::build_architecture,
};

#[derive(Clone)]
pub struct DashboardService {
    hostel_repo: HostelRepository,
    tenant_repo: TenantRepository,
}

impl DashboardService {
    pub fn new(hostel_repo: HostelRepository, tenant_repo: TenantRepository) -> Self {
        Self { hostel_repo, tenant_repo }
    }

    pub async fn get_summary(&self) -> Result<DashboardSummary, AppError> {
        let hostels = self.hostel_repo.list().await?;
        let counts = self.tenant_repo.count_by_status().await?;

        let active = self
            .tenant_repo
            .list(&TenantFilter {
                hostel_id: None,
                status: Some(TenantStatus::Active),
            })
            .await?;

        let mut summary = DashboardSummary {
            total_hostels: hostels.len() as i64,
            ..Default::default()
        };

        for (status, count) in counts {
            match status {
                TenantStatus::Active => summary.active_tenants = count,
                TenantStatus::Pending => summary.pending_tenants = count,
                TenantStatus::Inactive => summary.inactive_tenants = count,
            }
        }

        for hostel in &hostels {
            let residents: Vec<Tenant> = active
                .iter()
                .filter(|t| t.hostel_id == Some(hostel.id))
                .cloned()
                .collect();

            // Um hostel com layout inválido não derruba o painel inteiro
            match build_architecture(hostel.total_floors, hostel.rooms_per_floor, &residents) {
                Ok(data) => {
                    summary.total_rooms += data.total_rooms;
                    summary.total_seats += data.total_seats;
                    summary.occupied_seats += data.occupied_seats;
                    summary.available_seats += data.available_seats;
                }
                Err(e) => tracing::warn!("Hostel {} ignorado no dashboard: {}", hostel.id, e),
            }
        }

        summary.occupancy_rate = occupancy_rate(summary.occupied_seats, summary.total_seats);
        Ok(summary)
    }
}

fn occupancy_rate(occupied: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (occupied as f64 / total as f64 * 10_000.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::occupancy_rate;

    #[test]
    fn rate_is_a_rounded_percentage() {
        assert_eq!(occupancy_rate(0, 0), 0.0);
        assert_eq!(occupancy_rate(1, 3), 33.33);
        assert_eq!(occupancy_rate(16, 16), 100.0);
    }
}
