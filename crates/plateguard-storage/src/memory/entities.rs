use dashmap::DashMap;
use tracing::debug;

use plateguard_core::errors::{PlateguardError, PlateguardResult};
use plateguard_core::models::{Plate, UserId, UserRecord, VehicleRecord};
use plateguard_core::traits::{IEntityStore, UserMutation, VehicleMutation};

/// Users and vehicles held in memory.
///
/// `update_*` runs the mutation on a copy while holding the record's map
/// entry, and commits the copy only if the mutation succeeds. Mutations
/// must not call back into the same store.
#[derive(Default)]
pub struct InMemoryEntityStore {
    users: DashMap<UserId, UserRecord>,
    vehicles: DashMap<Plate, VehicleRecord>,
}

impl InMemoryEntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    pub fn vehicle_count(&self) -> usize {
        self.vehicles.len()
    }
}

impl IEntityStore for InMemoryEntityStore {
    fn get_user(&self, id: &UserId) -> PlateguardResult<Option<UserRecord>> {
        Ok(self.users.get(id).map(|r| r.clone()))
    }

    fn put_user(&self, user: &UserRecord) -> PlateguardResult<()> {
        self.users.insert(user.id.clone(), user.clone());
        Ok(())
    }

    fn update_user(
        &self,
        id: &UserId,
        mutate: &mut UserMutation<'_>,
    ) -> PlateguardResult<UserRecord> {
        let mut entry = self.users.get_mut(id).ok_or_else(|| PlateguardError::NotFound {
            entity: "user".to_string(),
            id: id.to_string(),
        })?;
        let mut draft = entry.value().clone();
        mutate(&mut draft)?;
        *entry.value_mut() = draft.clone();
        debug!(user_id = %id, "user updated");
        Ok(draft)
    }

    fn get_vehicle(&self, plate: &Plate) -> PlateguardResult<Option<VehicleRecord>> {
        Ok(self.vehicles.get(plate).map(|r| r.clone()))
    }

    fn put_vehicle(&self, vehicle: &VehicleRecord) -> PlateguardResult<()> {
        self.vehicles.insert(vehicle.plate.clone(), vehicle.clone());
        Ok(())
    }

    fn update_vehicle(
        &self,
        plate: &Plate,
        mutate: &mut VehicleMutation<'_>,
    ) -> PlateguardResult<VehicleRecord> {
        let mut entry = self
            .vehicles
            .get_mut(plate)
            .ok_or_else(|| PlateguardError::NotFound {
                entity: "vehicle".to_string(),
                id: plate.to_string(),
            })?;
        let mut draft = entry.value().clone();
        mutate(&mut draft)?;
        *entry.value_mut() = draft.clone();
        debug!(plate = %plate, "vehicle updated");
        Ok(draft)
    }
}
