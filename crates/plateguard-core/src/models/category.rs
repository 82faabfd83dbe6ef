use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::CATEGORY_COUNT;

/// Which scored identity a number belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreAxis {
    /// Public reputation attached to a vehicle plate.
    Plate,
    /// Private contribution index attached to a person.
    Icc,
}

/// Position in the shared seven-tier ladder, 0 (lowest) to 6 (highest).
///
/// Both axes classify into the same tiers; only the labels differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tier(u8);

impl Tier {
    pub const LOWEST: Tier = Tier(0);
    pub const HIGHEST: Tier = Tier((CATEGORY_COUNT - 1) as u8);

    /// Build a tier from its rank. Ranks above the highest tier saturate.
    pub fn from_rank(rank: usize) -> Self {
        Self(rank.min(CATEGORY_COUNT - 1) as u8)
    }

    pub fn rank(self) -> usize {
        self.0 as usize
    }

    /// The tier directly above, if any.
    pub fn next(self) -> Option<Tier> {
        (self < Self::HIGHEST).then(|| Tier(self.0 + 1))
    }

    /// All tiers, lowest first.
    pub fn all() -> impl Iterator<Item = Tier> {
        (0..CATEGORY_COUNT).map(Tier::from_rank)
    }
}

/// Plate Score categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlateCategory {
    Alerta,
    Neutra,
    Conhecida,
    Confiavel,
    Distinta,
    Exemplar,
    Icone,
}

impl PlateCategory {
    const BY_TIER: [PlateCategory; CATEGORY_COUNT] = [
        Self::Alerta,
        Self::Neutra,
        Self::Conhecida,
        Self::Confiavel,
        Self::Distinta,
        Self::Exemplar,
        Self::Icone,
    ];

    pub fn from_tier(tier: Tier) -> Self {
        Self::BY_TIER[tier.rank()]
    }

    pub fn tier(self) -> Tier {
        Tier::from_rank(self as usize)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Alerta => "alerta",
            Self::Neutra => "neutra",
            Self::Conhecida => "conhecida",
            Self::Confiavel => "confiavel",
            Self::Distinta => "distinta",
            Self::Exemplar => "exemplar",
            Self::Icone => "icone",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Alerta => "Alerta",
            Self::Neutra => "Neutra",
            Self::Conhecida => "Conhecida",
            Self::Confiavel => "Confiável",
            Self::Distinta => "Distinta",
            Self::Exemplar => "Exemplar",
            Self::Icone => "Ícone",
        }
    }
}

/// Contribution index (ICC) categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IccCategory {
    Negativo,
    Iniciante,
    Ativo,
    Engajado,
    Protetor,
    Embaixador,
    Guardiao,
}

impl IccCategory {
    const BY_TIER: [IccCategory; CATEGORY_COUNT] = [
        Self::Negativo,
        Self::Iniciante,
        Self::Ativo,
        Self::Engajado,
        Self::Protetor,
        Self::Embaixador,
        Self::Guardiao,
    ];

    pub fn from_tier(tier: Tier) -> Self {
        Self::BY_TIER[tier.rank()]
    }

    pub fn tier(self) -> Tier {
        Tier::from_rank(self as usize)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Negativo => "negativo",
            Self::Iniciante => "iniciante",
            Self::Ativo => "ativo",
            Self::Engajado => "engajado",
            Self::Protetor => "protetor",
            Self::Embaixador => "embaixador",
            Self::Guardiao => "guardiao",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Negativo => "Negativo",
            Self::Iniciante => "Iniciante",
            Self::Ativo => "Ativo",
            Self::Engajado => "Engajado",
            Self::Protetor => "Protetor",
            Self::Embaixador => "Embaixador",
            Self::Guardiao => "Guardião",
        }
    }
}

/// A classified score on either axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "axis", content = "category", rename_all = "snake_case")]
pub enum Category {
    Plate(PlateCategory),
    Icc(IccCategory),
}

impl Category {
    /// Label a tier on the given axis.
    pub fn from_tier(axis: ScoreAxis, tier: Tier) -> Self {
        match axis {
            ScoreAxis::Plate => Self::Plate(PlateCategory::from_tier(tier)),
            ScoreAxis::Icc => Self::Icc(IccCategory::from_tier(tier)),
        }
    }

    pub fn axis(self) -> ScoreAxis {
        match self {
            Self::Plate(_) => ScoreAxis::Plate,
            Self::Icc(_) => ScoreAxis::Icc,
        }
    }

    pub fn tier(self) -> Tier {
        match self {
            Self::Plate(c) => c.tier(),
            Self::Icc(c) => c.tier(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Plate(c) => c.label(),
            Self::Icc(c) => c.label(),
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Plate(c) => c.display_name(),
            Self::Icc(c) => c.display_name(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
