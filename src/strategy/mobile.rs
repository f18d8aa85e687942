//! Mobile-point dispatch.
//!
//! Below the rush threshold the mobile budget is split between the flanks
//! as interceptor patrols. At or above it, everything goes into one scout
//! rush from a home anchor picked by coin flip.

use log::debug;
use rand::rngs::SmallRng;
use rand::Rng;

use crate::board::{layout, Currency, Flank, UnitKind};
use crate::config::StrategyConfig;
use crate::host::Budget;

/// What the mobile pass did this turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Idle,
    Rush { flank: Flank, sent: u32 },
    Patrol { left: u32, right: u32 },
}

impl Dispatch {
    /// Units deployed in total.
    pub fn sent(self) -> u32 {
        match self {
            Dispatch::Idle => 0,
            Dispatch::Rush { sent, .. } => sent,
            Dispatch::Patrol { left, right } => left + right,
        }
    }
}

/// Spends the mobile balance for this turn.
pub fn dispatch(
    budget: &mut Budget<'_>,
    config: &StrategyConfig,
    rng: &mut SmallRng,
) -> Dispatch {
    let points = budget.balance(Currency::Mobile);
    if points == 0 {
        return Dispatch::Idle;
    }

    let outcome = if points >= config.rush_threshold {
        let flank = if rng.gen_bool(0.5) {
            Flank::Right
        } else {
            Flank::Left
        };
        rush(budget, flank)
    } else {
        patrol(budget, config.home_patrol)
    };
    debug!("mobile: {:?}", outcome);
    outcome
}

/// Sends every affordable scout from `flank`'s home anchor.
pub fn rush(budget: &mut Budget<'_>, flank: Flank) -> Dispatch {
    let count = affordable(budget, UnitKind::Scout);
    let sent = budget.deploy(UnitKind::Scout, layout::home(flank), count);
    Dispatch::Rush { flank, sent }
}

/// Splits interceptors between the flanks.
///
/// A flank's share keeps `home_patrol` at its home anchor when the share
/// is at least twice that, and sends the rest to its forward post.
pub fn patrol(budget: &mut Budget<'_>, home_patrol: u32) -> Dispatch {
    let units = affordable(budget, UnitKind::Interceptor);
    let left_share = units / 2;
    let right_share = units - left_share;

    let mut sent = [0u32; 2];
    for (slot, (flank, mut share)) in [(Flank::Left, left_share), (Flank::Right, right_share)]
        .into_iter()
        .enumerate()
    {
        if home_patrol > 0 && share >= 2 * home_patrol {
            let placed = budget.deploy(UnitKind::Interceptor, layout::home(flank), home_patrol);
            sent[slot] += placed;
            share -= home_patrol;
        }
        sent[slot] += budget.deploy(UnitKind::Interceptor, layout::forward_post(flank), share);
    }
    Dispatch::Patrol {
        left: sent[0],
        right: sent[1],
    }
}

fn affordable(budget: &Budget<'_>, kind: UnitKind) -> u32 {
    let price = budget.cost(kind).mobile.max(1);
    budget.balance(Currency::Mobile) / price
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;
    use crate::config::UnitCatalog;
    use crate::host::{Host, Placement, TurnState};
    use rand::SeedableRng;

    fn state(mobile: u32) -> TurnState {
        TurnState::new(UnitCatalog::default(), 5, 0, mobile)
    }

    fn count_at(s: &TurnState, kind: UnitKind, cell: Cell) -> usize {
        s.deploy_stack()
            .iter()
            .filter(|p| **p == Placement::Spawn(kind, cell))
            .count()
    }

    #[test]
    fn small_budget_goes_forward() {
        let mut s = state(5);
        let outcome = patrol(&mut Budget::new(&mut s), 2);
        assert_eq!(outcome, Dispatch::Patrol { left: 2, right: 3 });
        assert_eq!(count_at(&s, UnitKind::Interceptor, Cell::new(7, 6)), 2);
        assert_eq!(count_at(&s, UnitKind::Interceptor, Cell::new(20, 6)), 3);
        assert_eq!(count_at(&s, UnitKind::Interceptor, layout::LEFT_HOME), 0);
    }

    #[test]
    fn large_share_keeps_a_home_patrol() {
        let mut s = state(9);
        patrol(&mut Budget::new(&mut s), 2);
        assert_eq!(count_at(&s, UnitKind::Interceptor, layout::LEFT_HOME), 2);
        assert_eq!(count_at(&s, UnitKind::Interceptor, Cell::new(7, 6)), 2);
        assert_eq!(count_at(&s, UnitKind::Interceptor, layout::RIGHT_HOME), 2);
        assert_eq!(count_at(&s, UnitKind::Interceptor, Cell::new(20, 6)), 3);
        assert_eq!(s.balance(Currency::Mobile), 0);
    }

    #[test]
    fn rush_spends_everything_from_one_home() {
        let config = StrategyConfig::default();
        let mut s = state(31);
        let mut rng = SmallRng::seed_from_u64(6);
        let outcome = dispatch(&mut Budget::new(&mut s), &config, &mut rng);
        let Dispatch::Rush { flank, sent } = outcome else {
            panic!("expected a rush, got {:?}", outcome);
        };
        assert_eq!(sent, 31);
        assert_eq!(count_at(&s, UnitKind::Scout, layout::home(flank)), 31);
        assert_eq!(s.balance(Currency::Mobile), 0);
    }

    #[test]
    fn rush_flank_is_a_coin_flip() {
        let config = StrategyConfig::default();
        let flanks: std::collections::HashSet<Flank> = (0..32)
            .filter_map(|seed| {
                let mut s = state(40);
                let mut rng = SmallRng::seed_from_u64(seed);
                match dispatch(&mut Budget::new(&mut s), &config, &mut rng) {
                    Dispatch::Rush { flank, .. } => Some(flank),
                    _ => None,
                }
            })
            .collect();
        assert_eq!(flanks.len(), 2);
    }

    #[test]
    fn nothing_to_spend() {
        let mut s = state(0);
        let outcome = dispatch(
            &mut Budget::new(&mut s),
            &StrategyConfig::default(),
            &mut SmallRng::seed_from_u64(0),
        );
        assert_eq!(outcome, Dispatch::Idle);
        assert_eq!(outcome.sent(), 0);
    }
}
