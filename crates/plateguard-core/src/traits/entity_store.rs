use crate::errors::PlateguardResult;
use crate::models::{Plate, UserId, UserRecord, VehicleRecord};

/// Mutation applied to a user record under the store's per-record lock.
pub type UserMutation<'a> = dyn FnMut(&mut UserRecord) -> PlateguardResult<()> + 'a;

/// Mutation applied to a vehicle record under the store's per-record lock.
pub type VehicleMutation<'a> = dyn FnMut(&mut VehicleRecord) -> PlateguardResult<()> + 'a;

/// Vehicle and user records owned by the surrounding application.
///
/// The engine reads scores, seal state and alert state, and writes back
/// counters, anchors and alert info. `update_*` must apply the mutation
/// atomically: if it returns an error, nothing is written.
pub trait IEntityStore: Send + Sync {
    fn get_user(&self, id: &UserId) -> PlateguardResult<Option<UserRecord>>;
    fn put_user(&self, user: &UserRecord) -> PlateguardResult<()>;
    fn update_user(&self, id: &UserId, mutate: &mut UserMutation<'_>)
        -> PlateguardResult<UserRecord>;

    fn get_vehicle(&self, plate: &Plate) -> PlateguardResult<Option<VehicleRecord>>;
    fn put_vehicle(&self, vehicle: &VehicleRecord) -> PlateguardResult<()>;
    fn update_vehicle(
        &self,
        plate: &Plate,
        mutate: &mut VehicleMutation<'_>,
    ) -> PlateguardResult<VehicleRecord>;
}
