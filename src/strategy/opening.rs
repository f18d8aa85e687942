//! Scripted first turns.
//!
//! The opening lays the corner anchors and one upgraded turret per flank,
//! screens with interceptors, and plants the first factories. Turn 2 only
//! runs the script when the balance is exactly one factory; any other
//! balance hands the turn to the main loop.

use log::debug;

use crate::board::{layout, Cell, Currency, Flank, UnitKind};
use crate::host::Budget;

use super::economy::Economy;

/// Structure points turn 1 keeps in hand.
const TURN_ONE_FLOAT: u32 = 4;

/// First turret on each flank; its barrier goes directly above.
const OPENING_TURRET: Cell = Cell::new(5, 12);

/// Centre cells turn 1 may spend its surplus on.
const CENTRE_WALL: Cell = Cell::new(13, 8);
const CENTRE_TURRET: Cell = Cell::new(13, 7);

/// Plays the scripted turn if there is one. Returns false when the main
/// loop should play this turn instead.
pub fn play(budget: &mut Budget<'_>, economy: &Economy) -> bool {
    match budget.turn() {
        0 => {
            first_turn(budget, economy);
            true
        }
        1 => {
            second_turn(budget, economy);
            true
        }
        2 => third_turn(budget, economy),
        _ => false,
    }
}

fn first_turn(budget: &mut Budget<'_>, economy: &Economy) {
    for flank in Flank::BOTH {
        for cell in layout::chokepoint_anchor_walls(flank) {
            budget.build(UnitKind::Wall, cell);
        }
    }
    let turrets = Flank::BOTH.map(|f| f.place(OPENING_TURRET));
    for cell in turrets {
        budget.build(UnitKind::Turret, cell);
    }
    for cell in turrets {
        budget.upgrade(cell);
    }

    for flank in Flank::BOTH {
        budget.deploy(UnitKind::Interceptor, layout::forward_post(flank), 2);
    }
    budget.deploy(UnitKind::Interceptor, layout::forward_post(Flank::Left), 1);

    for cell in turrets {
        budget.build(UnitKind::Wall, cell.above());
    }

    let factory = budget.cost(UnitKind::Factory).structure;
    economy.expand(budget, factory);
    debug!("opening turn 0: {} commands", budget.issued());
}

fn second_turn(budget: &mut Budget<'_>, economy: &Economy) {
    budget.build(UnitKind::Wall, Flank::Right.place(OPENING_TURRET.above()));

    let balance = budget.balance(Currency::Structure);
    let factory = budget.cost(UnitKind::Factory).structure;
    if balance == factory {
        economy.expand(budget, factory);
    } else if balance > TURN_ONE_FLOAT {
        match balance - TURN_ONE_FLOAT {
            1 => {
                budget.build(UnitKind::Wall, CENTRE_WALL);
            }
            2 => {
                budget.build(UnitKind::Wall, CENTRE_WALL);
                budget.build(UnitKind::Wall, CENTRE_WALL.mirrored());
            }
            _ => {
                budget.build(UnitKind::Wall, CENTRE_WALL);
                budget.build(UnitKind::Turret, CENTRE_TURRET);
            }
        }
    }

    forward_screen(budget);
    debug!("opening turn 1: {} commands", budget.issued());
}

fn third_turn(budget: &mut Budget<'_>, economy: &Economy) -> bool {
    let factory = budget.cost(UnitKind::Factory).structure;
    if budget.balance(Currency::Structure) != factory {
        return false;
    }
    economy.expand(budget, factory);
    forward_screen(budget);
    true
}

fn forward_screen(budget: &mut Budget<'_>) {
    for flank in Flank::BOTH {
        budget.deploy(UnitKind::Interceptor, layout::forward_post(flank), 3);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UnitCatalog;
    use crate::host::{Host, Placement, TurnState};

    fn play_turn(state: &mut TurnState) -> bool {
        play(&mut Budget::new(state), &Economy::new())
    }

    #[test]
    fn first_turn_spends_the_starting_purse() {
        let mut s = TurnState::new(UnitCatalog::default(), 0, 40, 5);
        assert!(play_turn(&mut s));

        for flank in Flank::BOTH {
            for cell in layout::chokepoint_anchor_walls(flank) {
                assert_eq!(s.occupant(cell).unwrap().kind, UnitKind::Wall);
            }
            let turret = s.occupant(flank.place(OPENING_TURRET)).unwrap();
            assert!(turret.upgraded);
            assert!(s.occupant(flank.place(OPENING_TURRET.above())).is_some());
        }
        // 6 anchors + 2 turrets + 2 upgrades + 2 walls + 1 factory.
        assert_eq!(s.balance(Currency::Structure), 40 - 6 - 4 - 8 - 2 - 9);
        assert_eq!(s.deploy_stack().len(), 5);
        let left_post = s
            .deploy_stack()
            .iter()
            .filter(|p| **p == Placement::Spawn(UnitKind::Interceptor, Cell::new(7, 6)))
            .count();
        assert_eq!(left_post, 3);
    }

    #[test]
    fn second_turn_keeps_the_float() {
        for (balance, expected) in [(4, 4), (5, 4), (6, 4), (7, 4), (8, 5)] {
            let mut s = TurnState::new(UnitCatalog::default(), 1, balance + 1, 6);
            assert!(play_turn(&mut s));
            assert_eq!(s.balance(Currency::Structure), expected, "start {}", balance + 1);
        }
    }

    #[test]
    fn second_turn_surplus_builds_centre() {
        let mut s = TurnState::new(UnitCatalog::default(), 1, 8, 6);
        play_turn(&mut s);
        assert_eq!(s.occupant(CENTRE_WALL).unwrap().kind, UnitKind::Wall);
        assert_eq!(s.occupant(CENTRE_TURRET).unwrap().kind, UnitKind::Turret);
        assert_eq!(s.deploy_stack().len(), 6);
    }

    #[test]
    fn second_turn_funds_a_factory_on_exact_balance() {
        let mut s = TurnState::new(UnitCatalog::default(), 1, 10, 0);
        play_turn(&mut s);
        assert_eq!(s.balance(Currency::Structure), 0);
        let farm = Economy::new();
        assert_eq!(s.occupant(farm.farm()[0]).unwrap().kind, UnitKind::Factory);
    }

    #[test]
    fn third_turn_falls_through_unless_one_factory() {
        let mut s = TurnState::new(UnitCatalog::default(), 2, 12, 6);
        assert!(!play_turn(&mut s));
        assert!(s.build_stack().is_empty());

        let mut s = TurnState::new(UnitCatalog::default(), 2, 9, 6);
        assert!(play_turn(&mut s));
        assert_eq!(s.balance(Currency::Structure), 0);
        assert_eq!(s.deploy_stack().len(), 6);
    }

    #[test]
    fn later_turns_are_not_scripted() {
        let mut s = TurnState::new(UnitCatalog::default(), 3, 9, 6);
        assert!(!play_turn(&mut s));
    }
}
