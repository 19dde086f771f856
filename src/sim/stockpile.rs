use crate::model::nation::Arsenal;
use crate::model::WeaponKind;

/// Mutable per-nation weapon counters for one run.
///
/// Counters are fractional because passive regeneration accrues in
/// sub-unit increments; they are clamped at 0 and never go negative.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Stockpile {
    pub icbm: f64,
    pub slbm: f64,
    pub air: f64,
}

impl Stockpile {
    pub fn total(&self) -> f64 {
        self.icbm + self.slbm + self.air
    }

    /// True iff any weapon remains.
    pub fn can_launch(&self) -> bool {
        self.total() > 0.0
    }
}

impl From<&Arsenal> for Stockpile {
    fn from(arsenal: &Arsenal) -> Self {
        Self {
            icbm: f64::from(arsenal.icbm),
            slbm: f64::from(arsenal.slbm),
            air: f64::from(arsenal.air),
        }
    }
}

/// Deterministic launch priority: ICBM first, then SLBM, then air.
/// Returns `None` when all three counters are exhausted.
pub fn select_weapon(stock: &Stockpile) -> Option<WeaponKind> {
    if stock.icbm > 0.0 {
        Some(WeaponKind::Icbm)
    } else if stock.slbm > 0.0 {
        Some(WeaponKind::Slbm)
    } else if stock.air > 0.0 {
        Some(WeaponKind::Air)
    } else {
        None
    }
}

/// Deduct a salvo from the selected weapon type only, clamped at 0.
pub fn deduct(stock: &mut Stockpile, weapon: WeaponKind, count: u32) {
    let counter = match weapon {
        WeaponKind::Icbm => &mut stock.icbm,
        WeaponKind::Slbm => &mut stock.slbm,
        WeaponKind::Air => &mut stock.air,
    };
    *counter = (*counter - f64::from(count)).max(0.0);
}
