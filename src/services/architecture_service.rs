// src/services/architecture_service.rs

use std::collections::{HashMap, HashSet};
use thiserror::Error;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{HostelRepository, TenantRepository},
    models::{
        architecture::{ArchitectureData, Floor, HostelArchitecture, Room, Seat, SeatConflict},
        tenant::{Tenant, TenantFilter, TenantStatus},
    },
};

/// Todo quarto tem exatamente 4 camas, de A a D.
pub const SEATS_PER_ROOM: usize = 4;
const SEAT_LETTERS: [char; SEATS_PER_ROOM] = ['A', 'B', 'C', 'D'];

pub const MAX_FLOORS: i32 = 200;
// O índice do quarto usa dois dígitos ("101"); acima de 99 o número fica ambíguo.
pub const MAX_ROOMS_PER_FLOOR: i32 = 99;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("total de andares deve estar entre 1 e 200 (recebido {0})")]
    InvalidFloorCount(i32),
    #[error("quartos por andar devem estar entre 1 e 99 (recebido {0})")]
    InvalidRoomCount(i32),
}

/// `1-01`
pub fn room_id(floor: i32, room: i32) -> String {
    format!("{floor}-{room:02}")
}

/// `101`: é o que o cadastro do inquilino guarda em `room`.
pub fn room_number(floor: i32, room: i32) -> String {
    format!("{floor}{room:02}")
}

// Chave de ocupação (número do quarto, letra da cama), normalizada.
fn seat_key(tenant: &Tenant) -> Option<(String, char)> {
    let room = tenant.room.as_deref()?.trim();
    let bed = tenant.bed.as_deref()?.trim();
    let mut letters = bed.chars();
    match (letters.next(), letters.next()) {
        (Some(letter), None) if !room.is_empty() => {
            Some((room.to_string(), letter.to_ascii_uppercase()))
        }
        _ => None,
    }
}

/// Gera a árvore andares -> quartos -> camas e marca as camas ocupadas
/// por inquilinos ativos.
///
/// Inquilinos cujo quarto/cama não existe no layout não geram erro: vão
/// para `unplaced_tenant_ids`. Se dois inquilinos ativos apontam para a
/// mesma cama, o primeiro da lista fica com ela e o conflito é reportado.
pub fn build_architecture(
    total_floors: i32,
    rooms_per_floor: i32,
    tenants: &[Tenant],
) -> Result<ArchitectureData, LayoutError> {
    if !(1..=MAX_FLOORS).contains(&total_floors) {
        return Err(LayoutError::InvalidFloorCount(total_floors));
    }
    if !(1..=MAX_ROOMS_PER_FLOOR).contains(&rooms_per_floor) {
        return Err(LayoutError::InvalidRoomCount(rooms_per_floor));
    }

    // Indexa uma vez, preservando a ordem de entrada em cada cama.
    let mut claims: HashMap<(String, char), Vec<&Tenant>> = HashMap::new();
    for tenant in tenants.iter().filter(|t| t.status == TenantStatus::Active) {
        if let Some(key) = seat_key(tenant) {
            claims.entry(key).or_default().push(tenant);
        }
    }

    let mut matched: HashSet<Uuid> = HashSet::new();
    let mut conflicts = Vec::new();
    let mut floors = Vec::with_capacity(total_floors as usize);

    for floor_number in 1..=total_floors {
        let mut rooms = Vec::with_capacity(rooms_per_floor as usize);

        for room_index in 1..=rooms_per_floor {
            let id = room_id(floor_number, room_index);
            let number = room_number(floor_number, room_index);

            let seats: Vec<Seat> = SEAT_LETTERS
                .iter()
                .map(|&letter| {
                    let seat_id = format!("{id}-{letter}");
                    let claimants = claims
                        .get(&(number.clone(), letter))
                        .map(Vec::as_slice)
                        .unwrap_or_default();
                    matched.extend(claimants.iter().map(|t| t.id));

                    let holder = claimants.split_first().map(|(holder, rest)| {
                        if !rest.is_empty() {
                            tracing::warn!(
                                "Cama {} disputada por {} inquilinos ativos; mantendo {}",
                                seat_id,
                                claimants.len(),
                                holder.id
                            );
                            conflicts.push(SeatConflict {
                                seat_id: seat_id.clone(),
                                holder_tenant_id: holder.id,
                                displaced_tenant_ids: rest.iter().map(|t| t.id).collect(),
                            });
                        }
                        *holder
                    });

                    Seat {
                        id: seat_id,
                        seat_number: letter.to_string(),
                        is_occupied: holder.is_some(),
                        tenant_id: holder.map(|t| t.id),
                        tenant_name: holder.map(|t| t.name.clone()),
                    }
                })
                .collect();

            let occupied = seats.iter().filter(|s| s.is_occupied).count();
            rooms.push(Room {
                id,
                room_number: number,
                floor_number,
                total_seats: SEATS_PER_ROOM,
                occupied_seats: occupied,
                available_seats: SEATS_PER_ROOM - occupied,
                seats,
            });
        }

        let total_seats = rooms.iter().map(|r| r.total_seats).sum::<usize>();
        let occupied_seats = rooms.iter().map(|r| r.occupied_seats).sum::<usize>();
        floors.push(Floor {
            floor_number,
            total_seats,
            occupied_seats,
            available_seats: total_seats - occupied_seats,
            rooms,
        });
    }

    let unplaced_tenant_ids = tenants
        .iter()
        .filter(|t| t.status == TenantStatus::Active && seat_key(t).is_some())
        .filter(|t| !matched.contains(&t.id))
        .map(|t| t.id)
        .collect();

    let total_rooms = floors.iter().map(|f| f.rooms.len()).sum();
    let total_seats = floors.iter().map(|f| f.total_seats).sum::<usize>();
    let occupied_seats = floors.iter().map(|f| f.occupied_seats).sum::<usize>();

    Ok(ArchitectureData {
        floors,
        total_rooms,
        total_seats,
        occupied_seats,
        available_seats: total_seats - occupied_seats,
        unplaced_tenant_ids,
        conflicts,
    })
}

#[derive(Clone)]
pub struct ArchitectureService {
    hostel_repo: HostelRepository,
    tenant_repo: TenantRepository,
}

impl ArchitectureService {
    pub fn new(hostel_repo: HostelRepository, tenant_repo: TenantRepository) -> Self {
        Self { hostel_repo, tenant_repo }
    }

    pub async fn get_hostel_architecture(&self, hostel_id: Uuid) -> Result<HostelArchitecture, AppError> {
        let hostel = self
            .hostel_repo
            .find_by_id(hostel_id)
            .await?
            .ok_or(AppError::NotFound("hostel"))?;

        let filter = TenantFilter {
            hostel_id: Some(hostel.id),
            status: None,
        };
        let tenants = self.tenant_repo.list(&filter).await?;

        let architecture = build_architecture(hostel.total_floors, hostel.rooms_per_floor, &tenants)?;

        if !architecture.unplaced_tenant_ids.is_empty() {
            tracing::debug!(
                "Hostel {}: {} inquilino(s) ativo(s) fora do layout",
                hostel.id,
                architecture.unplaced_tenant_ids.len()
            );
        }

        Ok(HostelArchitecture {
            hostel_id: hostel.id,
            hostel_name: hostel.name,
            total_floors: hostel.total_floors,
            rooms_per_floor: hostel.rooms_per_floor,
            architecture,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn tenant(name: &str, room: &str, bed: &str, status: TenantStatus) -> Tenant {
        Tenant {
            id: Uuid::new_v4(),
            hostel_id: None,
            name: name.to_string(),
            phone: None,
            email: None,
            emergency_contact: None,
            room: Some(room.to_string()),
            bed: Some(bed.to_string()),
            lease_start: None,
            lease_end: None,
            monthly_rent: None,
            status,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn seat<'a>(data: &'a ArchitectureData, seat_id: &str) -> &'a Seat {
        data.floors
            .iter()
            .flat_map(|f| &f.rooms)
            .flat_map(|r| &r.seats)
            .find(|s| s.id == seat_id)
            .unwrap_or_else(|| panic!("cama {seat_id} não gerada"))
    }

    #[test]
    fn two_by_two_hostel_has_four_rooms_and_sixteen_seats() {
        let data = build_architecture(2, 2, &[]).unwrap();
        assert_eq!(data.total_rooms, 4);
        assert_eq!(data.total_seats, 16);
        assert_eq!(data.occupied_seats, 0);
        assert_eq!(data.available_seats, 16);
    }

    #[test]
    fn ids_follow_floor_room_letter_shape() {
        let data = build_architecture(1, 12, &[]).unwrap();
        let room = &data.floors[0].rooms[11];
        assert_eq!(room.id, "1-12");
        assert_eq!(room.room_number, "112");
        let letters: Vec<_> = room.seats.iter().map(|s| s.seat_number.as_str()).collect();
        assert_eq!(letters, ["A", "B", "C", "D"]);
        assert_eq!(room.seats[3].id, "1-12-D");
    }

    #[test]
    fn active_tenant_occupies_matching_seat() {
        let maria = tenant("Maria", "101", "A", TenantStatus::Active);
        let data = build_architecture(2, 2, std::slice::from_ref(&maria)).unwrap();

        let s = seat(&data, "1-01-A");
        assert!(s.is_occupied);
        assert_eq!(s.tenant_id, Some(maria.id));
        assert_eq!(s.tenant_name.as_deref(), Some("Maria"));
        assert_eq!(data.occupied_seats, 1);
        assert_eq!(data.available_seats, 15);
    }

    #[test]
    fn inactive_and_pending_tenants_never_occupy() {
        let tenants = [
            tenant("Ana", "101", "A", TenantStatus::Inactive),
            tenant("Bia", "101", "B", TenantStatus::Pending),
        ];
        let data = build_architecture(1, 1, &tenants).unwrap();
        assert_eq!(data.occupied_seats, 0);
        assert!(data.unplaced_tenant_ids.is_empty());
    }

    #[test]
    fn room_and_bed_are_normalized_before_matching() {
        let tenants = [tenant("Caio", " 202 ", "c", TenantStatus::Active)];
        let data = build_architecture(2, 2, &tenants).unwrap();
        assert!(seat(&data, "2-02-C").is_occupied);
    }

    #[test]
    fn tenant_outside_layout_is_reported_not_placed() {
        let outside = tenant("Davi", "305", "A", TenantStatus::Active);
        let bad_bed = tenant("Eva", "101", "E", TenantStatus::Active);
        let data = build_architecture(2, 2, &[outside.clone(), bad_bed.clone()]).unwrap();

        assert_eq!(data.occupied_seats, 0);
        assert_eq!(data.unplaced_tenant_ids, vec![outside.id, bad_bed.id]);
    }

    #[test]
    fn tenant_without_room_or_bed_is_neither_placed_nor_unplaced() {
        let mut no_room = tenant("Hugo", "101", "A", TenantStatus::Active);
        no_room.room = None;
        let mut blank_bed = tenant("Iris", "101", "B", TenantStatus::Active);
        blank_bed.bed = Some("   ".into());
        let mut blank_room = tenant("Joana", "  ", "C", TenantStatus::Active);
        blank_room.room = Some(String::new());

        let data = build_architecture(1, 1, &[no_room, blank_bed, blank_room]).unwrap();

        assert_eq!(data.occupied_seats, 0);
        assert!(data.unplaced_tenant_ids.is_empty());
        assert!(data.conflicts.is_empty());
    }

    #[test]
    fn earlier_inactive_tenant_does_not_contest_the_seat() {
        let former = tenant("Lia", "101", "A", TenantStatus::Inactive);
        let current = tenant("Rui", "101", "A", TenantStatus::Active);
        let data = build_architecture(1, 1, &[former, current.clone()]).unwrap();

        let s = seat(&data, "1-01-A");
        assert!(s.is_occupied);
        assert_eq!(s.tenant_id, Some(current.id));
        assert!(data.conflicts.is_empty());
        assert!(data.unplaced_tenant_ids.is_empty());
    }

    #[test]
    fn first_tenant_keeps_a_doubly_assigned_seat() {
        let first = tenant("Fabio", "101", "B", TenantStatus::Active);
        let second = tenant("Gabi", "101", "B", TenantStatus::Active);
        let data = build_architecture(1, 1, &[first.clone(), second.clone()]).unwrap();

        assert_eq!(seat(&data, "1-01-B").tenant_id, Some(first.id));
        assert_eq!(data.occupied_seats, 1);
        assert_eq!(
            data.conflicts,
            vec![SeatConflict {
                seat_id: "1-01-B".into(),
                holder_tenant_id: first.id,
                displaced_tenant_ids: vec![second.id],
            }]
        );
        assert!(data.unplaced_tenant_ids.is_empty());
    }

    #[test]
    fn counts_add_up_at_every_level() {
        let tenants: Vec<_> = ["101", "102", "201", "303"]
            .iter()
            .zip(["A", "D", "B", "C"])
            .map(|(room, bed)| tenant("X", room, bed, TenantStatus::Active))
            .collect();

        for (floors, rooms) in [(1, 1), (2, 3), (3, 3), (5, 99)] {
            let data = build_architecture(floors, rooms, &tenants).unwrap();
            assert_eq!(data.total_seats, (floors * rooms) as usize * SEATS_PER_ROOM);
            assert_eq!(data.occupied_seats + data.available_seats, data.total_seats);
            for floor in &data.floors {
                assert_eq!(floor.occupied_seats + floor.available_seats, floor.total_seats);
                for room in &floor.rooms {
                    assert_eq!(room.total_seats, SEATS_PER_ROOM);
                    assert_eq!(room.occupied_seats + room.available_seats, room.total_seats);
                }
            }
        }
    }

    #[test]
    fn rejects_non_positive_or_oversized_dimensions() {
        assert_eq!(build_architecture(0, 2, &[]), Err(LayoutError::InvalidFloorCount(0)));
        assert_eq!(build_architecture(2, -1, &[]), Err(LayoutError::InvalidRoomCount(-1)));
        assert_eq!(build_architecture(1, 100, &[]), Err(LayoutError::InvalidRoomCount(100)));
    }
}
