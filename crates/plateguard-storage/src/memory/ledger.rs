use dashmap::DashMap;
use tracing::{debug, instrument};

use plateguard_core::errors::PlateguardResult;
use plateguard_core::models::{GateDecision, InteractionRecord, LedgerFilter, Plate, UserId};
use plateguard_core::traits::{AdmissionCheck, ILedgerStore};

type PairKey = (Plate, UserId);

/// Ledger held in memory, partitioned by `(plate, user)`.
///
/// Each pair's records live under one map entry, so `append_if` runs its
/// check and append while holding that entry's write lock. Different pairs
/// on different shards proceed in parallel.
#[derive(Default)]
pub struct InMemoryLedger {
    pairs: DashMap<PairKey, Vec<InteractionRecord>>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(record: &InteractionRecord) -> PairKey {
        (record.plate.clone(), record.user_id.clone())
    }
}

impl ILedgerStore for InMemoryLedger {
    #[instrument(
        skip_all,
        fields(plate = %record.plate, user_id = %record.user_id, kind = %record.kind)
    )]
    fn append(&self, record: &InteractionRecord) -> PlateguardResult<()> {
        self.pairs
            .entry(Self::key(record))
            .or_default()
            .push(record.clone());
        debug!(id = %record.id, "ledger append");
        Ok(())
    }

    fn query(&self, filter: &LedgerFilter) -> PlateguardResult<Vec<InteractionRecord>> {
        let mut out: Vec<InteractionRecord> = match (&filter.plate, &filter.user_id) {
            (Some(plate), Some(user_id)) => self
                .pairs
                .get(&(plate.clone(), user_id.clone()))
                .map(|records| {
                    records
                        .iter()
                        .filter(|r| filter.matches(r))
                        .cloned()
                        .collect()
                })
                .unwrap_or_default(),
            _ => self
                .pairs
                .iter()
                .flat_map(|entry| {
                    entry
                        .value()
                        .iter()
                        .filter(|r| filter.matches(r))
                        .cloned()
                        .collect::<Vec<_>>()
                })
                .collect(),
        };
        // Stable: records sharing a timestamp keep insertion order within a pair.
        out.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
        Ok(out)
    }

    #[instrument(
        skip_all,
        fields(plate = %record.plate, user_id = %record.user_id, kind = %record.kind)
    )]
    fn append_if(
        &self,
        record: &InteractionRecord,
        check: &AdmissionCheck<'_>,
    ) -> PlateguardResult<GateDecision> {
        let mut records = self.pairs.entry(Self::key(record)).or_default();
        let decision = check(records.as_slice());
        if decision.is_allowed() {
            records.push(record.clone());
            debug!(id = %record.id, "ledger conditional append");
        } else {
            debug!(?decision, "ledger conditional append refused");
        }
        Ok(decision)
    }

    fn len(&self) -> PlateguardResult<usize> {
        Ok(self.pairs.iter().map(|entry| entry.value().len()).sum())
    }
}
