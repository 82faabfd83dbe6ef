use crate::errors::PlateguardResult;
use crate::models::{GateDecision, InteractionRecord, LedgerFilter, Plate, UserId};

/// Admission check run against the existing records of a `(plate, user)`
/// pair while the store holds that pair exclusively.
pub type AdmissionCheck<'a> = dyn Fn(&[InteractionRecord]) -> GateDecision + 'a;

/// Append-only interaction ledger. The single source of truth for every
/// gating decision.
///
/// Implementations must never drop a write silently and must make
/// [`ILedgerStore::append_if`] atomic per `(plate, user)` pair.
pub trait ILedgerStore: Send + Sync {
    /// Append a record unconditionally.
    fn append(&self, record: &InteractionRecord) -> PlateguardResult<()>;

    /// All records matching `filter`, oldest first.
    fn query(&self, filter: &LedgerFilter) -> PlateguardResult<Vec<InteractionRecord>>;

    /// Run `check` over the pair's current records and append `record`
    /// only if it returns [`GateDecision::Allowed`]. The check and the
    /// append happen as one unit: no concurrent writer for the same pair
    /// can interleave.
    fn append_if(
        &self,
        record: &InteractionRecord,
        check: &AdmissionCheck<'_>,
    ) -> PlateguardResult<GateDecision>;

    /// All records for one `(plate, user)` pair, oldest first.
    fn query_by_plate_and_user(
        &self,
        plate: &Plate,
        user_id: &UserId,
    ) -> PlateguardResult<Vec<InteractionRecord>> {
        self.query(&LedgerFilter::pair(plate, user_id))
    }

    /// Total number of records.
    fn len(&self) -> PlateguardResult<usize>;

    fn is_empty(&self) -> PlateguardResult<bool> {
        Ok(self.len()? == 0)
    }
}
