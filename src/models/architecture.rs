// src/models/architecture.rs
//
// A "arquitetura" de um hostel: andares -> quartos -> camas, com a
// ocupação calculada a partir da lista de inquilinos. Nada aqui é
// persistido; é regerado a cada consulta.

use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Seat {
    #[schema(example = "1-01-A")]
    pub id: String,
    #[schema(example = "A")]
    pub seat_number: String,
    pub is_occupied: bool,
    pub tenant_id: Option<Uuid>,
    pub tenant_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    #[schema(example = "1-01")]
    pub id: String,
    #[schema(example = "101")]
    pub room_number: String,
    pub floor_number: i32,
    #[schema(example = 4)]
    pub total_seats: usize,
    pub occupied_seats: usize,
    pub available_seats: usize,
    pub seats: Vec<Seat>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Floor {
    #[schema(example = 1)]
    pub floor_number: i32,
    pub total_seats: usize,
    pub occupied_seats: usize,
    pub available_seats: usize,
    pub rooms: Vec<Room>,
}

/// Mais de um inquilino ativo apontando para a mesma cama.
/// Quem aparece primeiro na lista fica com a cama.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SeatConflict {
    pub seat_id: String,
    pub holder_tenant_id: Uuid,
    pub displaced_tenant_ids: Vec<Uuid>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArchitectureData {
    pub floors: Vec<Floor>,
    pub total_rooms: usize,
    pub total_seats: usize,
    pub occupied_seats: usize,
    pub available_seats: usize,
    // Inquilinos ativos cujo quarto/cama não existe neste layout
    pub unplaced_tenant_ids: Vec<Uuid>,
    pub conflicts: Vec<SeatConflict>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HostelArchitecture {
    pub hostel_id: Uuid,
    #[schema(example = "Hostel Central")]
    pub hostel_name: String,
    pub total_floors: i32,
    pub rooms_per_floor: i32,
    #[serde(flatten)]
    pub architecture: ArchitectureData,
}
