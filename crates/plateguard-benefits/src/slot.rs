//! Maps a `(seal, kind)` pair onto the counter and anchor fields it uses
//! in [`SealBenefitState`].

use plateguard_core::models::{BenefitKind, SealBenefitState, SealTier, Timestamp};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Slot {
    YellowTheftAlert,
    GreenTheftAlert,
    GreenSupportCall,
}

impl Slot {
    pub(crate) fn for_seal(seal: SealTier, kind: BenefitKind) -> Option<Self> {
        match (seal, kind) {
            (SealTier::Yellow, BenefitKind::TheftAlert) => Some(Self::YellowTheftAlert),
            (SealTier::Green, BenefitKind::TheftAlert) => Some(Self::GreenTheftAlert),
            (SealTier::Green, BenefitKind::SupportCall) => Some(Self::GreenSupportCall),
            _ => None,
        }
    }

    pub(crate) fn used(self, state: &SealBenefitState) -> u32 {
        match self {
            Self::YellowTheftAlert => state.yellow_seal_stolen_alerts_used,
            Self::GreenTheftAlert => state.green_seal_stolen_alerts_used,
            Self::GreenSupportCall => u32::from(state.has_used_green_seal_call),
        }
    }

    pub(crate) fn set_used(self, state: &mut SealBenefitState, used: u32) {
        match self {
            Self::YellowTheftAlert => state.yellow_seal_stolen_alerts_used = used,
            Self::GreenTheftAlert => state.green_seal_stolen_alerts_used = used,
            Self::GreenSupportCall => state.has_used_green_seal_call = used > 0,
        }
    }

    pub(crate) fn anchor(self, state: &SealBenefitState) -> Option<Timestamp> {
        match self {
            Self::YellowTheftAlert => state.yellow_seal_benefits_started_at,
            Self::GreenTheftAlert => state.green_seal_benefits_renewed_at,
            Self::GreenSupportCall => state.green_seal_call_renewed_at,
        }
    }

    pub(crate) fn set_anchor(self, state: &mut SealBenefitState, at: Timestamp) {
        match self {
            Self::YellowTheftAlert => state.yellow_seal_benefits_started_at = Some(at),
            Self::GreenTheftAlert => state.green_seal_benefits_renewed_at = Some(at),
            Self::GreenSupportCall => state.green_seal_call_renewed_at = Some(at),
        }
    }
}
