//! Unit kinds, costs, and occupants.
//!
//! Structures (walls, factories, turrets) occupy a single cell and are
//! paid for in structure points. Mobile units are paid for in mobile
//! points and never occupy a cell between turns.

/// Every unit kind the contest knows about, in match-config order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitKind {
    Wall,
    Factory,
    Turret,
    Scout,
    Demolisher,
    Interceptor,
}

/// All unit kinds, indexable by `kind as usize`.
pub const ALL_UNIT_KINDS: [UnitKind; 6] = [
    UnitKind::Wall,
    UnitKind::Factory,
    UnitKind::Turret,
    UnitKind::Scout,
    UnitKind::Demolisher,
    UnitKind::Interceptor,
];

impl UnitKind {
    /// True for kinds that occupy a cell until destroyed.
    pub const fn is_structure(self) -> bool {
        matches!(self, UnitKind::Wall | UnitKind::Factory | UnitKind::Turret)
    }

    /// True for kinds deployed from an edge and paid in mobile points.
    pub const fn is_mobile(self) -> bool {
        !self.is_structure()
    }

    /// Structure kind at a config `unitInformation` index.
    pub fn from_index(index: usize) -> Option<UnitKind> {
        ALL_UNIT_KINDS.get(index).copied()
    }
}

/// The two independent currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Currency {
    Structure,
    Mobile,
}

/// Price of a unit or an upgrade in both currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cost {
    pub structure: u32,
    pub mobile: u32,
}

impl Cost {
    /// A price in structure points only.
    pub const fn structure(amount: u32) -> Self {
        Cost {
            structure: amount,
            mobile: 0,
        }
    }

    /// The part of the price paid in `currency`.
    pub const fn in_currency(self, currency: Currency) -> u32 {
        match currency {
            Currency::Structure => self.structure,
            Currency::Mobile => self.mobile,
        }
    }
}

/// What the host reports at an occupied cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Occupant {
    pub kind: UnitKind,
    pub health: f32,
    pub upgraded: bool,
}

impl Occupant {
    /// A fresh, unupgraded occupant.
    pub const fn new(kind: UnitKind, health: f32) -> Self {
        Occupant {
            kind,
            health,
            upgraded: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structure_and_mobile_split() {
        assert!(UnitKind::Wall.is_structure());
        assert!(UnitKind::Turret.is_structure());
        assert!(UnitKind::Factory.is_structure());
        assert!(UnitKind::Scout.is_mobile());
        assert!(UnitKind::Interceptor.is_mobile());
    }

    #[test]
    fn index_lookup_matches_config_order() {
        assert_eq!(UnitKind::from_index(0), Some(UnitKind::Wall));
        assert_eq!(UnitKind::from_index(2), Some(UnitKind::Turret));
        assert_eq!(UnitKind::from_index(5), Some(UnitKind::Interceptor));
        assert_eq!(UnitKind::from_index(6), None);
    }

    #[test]
    fn cost_by_currency() {
        let c = Cost {
            structure: 3,
            mobile: 1,
        };
        assert_eq!(c.in_currency(Currency::Structure), 3);
        assert_eq!(c.in_currency(Currency::Mobile), 1);
    }
}
