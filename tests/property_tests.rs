//! Property-based tests for the equality layer and dispatch.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use efsm::core::{AnyOperand, ByDisplay, Operand, State};
use efsm::{build, build_with, Efsm, EfsmConfig, IllegalTransitReason};
use proptest::prelude::*;
use std::collections::HashMap;
use std::fmt;

#[derive(Clone, Debug)]
struct Badge {
    code: u8,
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Several codes share a label, so display equality is coarser than `==`.
        write!(f, "badge-{}", self.code % 4)
    }
}

efsm::display_state!(Badge);

#[derive(Debug, PartialEq)]
struct Move {
    dx: i8,
    dy: i8,
}

#[derive(Debug, PartialEq)]
struct Jump {
    dx: i8,
    dy: i8,
}

prop_compose! {
    fn arbitrary_badge()(code in any::<u8>()) -> Badge {
        Badge { code }
    }
}

prop_compose! {
    fn arbitrary_rules()(
        pairs in prop::collection::hash_map((0..6u8, 0..4u8), 0..6u8, 0..16)
    ) -> HashMap<(u8, u8), u8> {
        pairs
    }
}

proptest! {
    #[test]
    fn state_equality_is_reflexive(a in arbitrary_badge()) {
        prop_assert!(a.same_state(&a));
    }

    #[test]
    fn state_equality_is_symmetric(a in arbitrary_badge(), b in arbitrary_badge()) {
        prop_assert_eq!(a.same_state(&b), b.same_state(&a));
    }

    #[test]
    fn state_equality_is_transitive(
        a in arbitrary_badge(),
        b in arbitrary_badge(),
        c in arbitrary_badge(),
    ) {
        if a.same_state(&b) && b.same_state(&c) {
            prop_assert!(a.same_state(&c));
        }
    }

    #[test]
    fn state_equality_follows_display_form(a in arbitrary_badge(), b in arbitrary_badge()) {
        prop_assert_eq!(a.same_state(&b), a.to_string() == b.to_string());
    }

    #[test]
    fn by_display_agrees_with_rendered_strings(a in any::<i64>(), b in any::<i64>()) {
        prop_assert_eq!(
            ByDisplay(a).same_state(&ByDisplay(b)),
            a.to_string() == b.to_string()
        );
    }

    #[test]
    fn independent_allocations_of_equal_payloads_match(dx in any::<i8>(), dy in any::<i8>()) {
        let a = AnyOperand::from(Box::new(Move { dx, dy }));
        let b = AnyOperand::from(Box::new(Move { dx, dy }));
        prop_assert!(a.same_operand(&b));
    }

    #[test]
    fn payloads_of_differing_types_never_match(dx in any::<i8>(), dy in any::<i8>()) {
        let a = AnyOperand::new(Move { dx, dy });
        let b = AnyOperand::new(Jump { dx, dy });
        prop_assert!(!a.same_operand(&b));
        prop_assert!(!b.same_operand(&a));
    }

    #[test]
    fn transit_agrees_with_rule_lookup(
        rules in arbitrary_rules(),
        state in 0..6u8,
        operand in 0..4u8,
    ) {
        let machine: Efsm<(), u8, u8> = build(|b| {
            for ((from, on), to) in &rules {
                b.from(*from).on(*on).to_const(*to);
            }
        })
        .unwrap();

        match rules.get(&(state, operand)) {
            Some(to) => prop_assert_eq!(machine.transit(&(), state, operand).unwrap(), *to),
            None => {
                let err = machine.transit(&(), state, operand).unwrap_err();
                prop_assert_eq!(err.reason(), Some(IllegalTransitReason::NoMatchingRule));
                prop_assert_eq!(*err.state(), state);
            }
        }
    }

    #[test]
    fn ordered_dispatch_picks_first_passing_guard(
        thresholds in prop::collection::vec(any::<u8>(), 1..6),
        ctx in any::<u8>(),
    ) {
        let machine: Efsm<u8, &str, &str> = build_with(EfsmConfig::ordered(), |b| {
            for (index, threshold) in thresholds.iter().copied().enumerate() {
                b.from("start")
                    .on("go")
                    .when(move |ctx: &u8, _, _| *ctx >= threshold)
                    .to(move |_, _, _| Ok(if index % 2 == 0 { "even" } else { "odd" }));
            }
        })
        .unwrap();

        let expected = thresholds
            .iter()
            .position(|threshold| ctx >= *threshold)
            .map(|index| if index % 2 == 0 { "even" } else { "odd" });

        match expected {
            Some(state) => prop_assert_eq!(machine.transit(&ctx, "start", "go").unwrap(), state),
            None => prop_assert_eq!(
                machine.transit(&ctx, "start", "go").unwrap_err().reason(),
                Some(IllegalTransitReason::GuardFailed)
            ),
        }
    }
}
