//! End-to-end scenarios: an order lifecycle and a context-aware counter
//! driven by type-erased payloads.

use efsm::core::AnyOperand;
use efsm::{build, build_fsm, state_enum, DefinitionError, Efsm, IllegalTransitReason};

state_enum! {
    enum OrderState {
        Pending,
        Paid,
        Shipped,
        Delivered,
        Cancelled,
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum OrderEvent {
    Pay,
    Ship,
    Deliver,
    Cancel,
}

struct OrderContext;

fn order_machine() -> Efsm<OrderContext, OrderState, OrderEvent> {
    build(|b| {
        b.from(OrderState::Pending)
            .on(OrderEvent::Pay)
            .to_const(OrderState::Paid);
        b.from(OrderState::Pending)
            .on(OrderEvent::Cancel)
            .to_const(OrderState::Cancelled);
        b.from(OrderState::Paid)
            .on(OrderEvent::Ship)
            .to_const(OrderState::Shipped);
        b.from(OrderState::Paid)
            .on(OrderEvent::Cancel)
            .to_const(OrderState::Cancelled);
        b.from(OrderState::Shipped)
            .on(OrderEvent::Deliver)
            .to_const(OrderState::Delivered);
    })
    .unwrap()
}

#[test]
fn order_walks_through_its_lifecycle() {
    let machine = order_machine();
    let ctx = OrderContext;

    let steps = [
        (OrderEvent::Pay, OrderState::Paid),
        (OrderEvent::Ship, OrderState::Shipped),
        (OrderEvent::Deliver, OrderState::Delivered),
    ];

    let mut current = OrderState::Pending;
    for (i, (event, expected)) in steps.into_iter().enumerate() {
        let next = machine.transit(&ctx, current, event).unwrap();
        assert_eq!(next, expected, "step {i}: expected {expected}, got {next}");
        current = next;
    }
}

#[test]
fn shipping_an_unpaid_order_is_illegal() {
    let machine = order_machine();

    let err = machine
        .transit(&OrderContext, OrderState::Pending, OrderEvent::Ship)
        .unwrap_err();

    assert_eq!(err.reason(), Some(IllegalTransitReason::NoMatchingRule));
    assert_eq!(err.into_state(), OrderState::Pending);
}

#[test]
fn cancellation_is_available_before_shipping() {
    let machine = order_machine();

    for from in [OrderState::Pending, OrderState::Paid] {
        assert_eq!(
            machine
                .transit(&OrderContext, from, OrderEvent::Cancel)
                .unwrap(),
            OrderState::Cancelled
        );
    }
    assert!(!machine.can_transit(&OrderContext, &OrderState::Shipped, &OrderEvent::Cancel));
}

#[test]
fn duplicate_definition_fails_the_build() {
    let result: Result<Efsm<OrderContext, OrderState, OrderEvent>, _> = build(|b| {
        b.from(OrderState::Pending)
            .on(OrderEvent::Pay)
            .to_const(OrderState::Paid);
        b.from(OrderState::Pending)
            .on(OrderEvent::Pay)
            .to_const(OrderState::Paid);
    });

    assert!(matches!(result, Err(DefinitionError::DuplicateRule { .. })));
}

#[test]
fn guard_that_never_passes_reports_guard_failure() {
    let machine: Efsm<OrderContext, OrderState, OrderEvent> = build(|b| {
        b.from(OrderState::Paid)
            .on(OrderEvent::Ship)
            .when(|_, _, _| false)
            .to_const(OrderState::Shipped);
    })
    .unwrap();

    let err = machine
        .transit(&OrderContext, OrderState::Paid, OrderEvent::Ship)
        .unwrap_err();

    assert_eq!(err.reason(), Some(IllegalTransitReason::GuardFailed));
    assert_eq!(*err.state(), OrderState::Paid);
}

struct Context {
    bias: i32,
}

#[derive(Debug, PartialEq)]
struct Add {
    diff: i32,
}

#[derive(Debug, PartialEq)]
struct Sub;

fn counter() -> Efsm<Context, i32, AnyOperand> {
    build(|b| {
        b.from(1)
            .on(AnyOperand::from(Box::new(Add { diff: 10 })))
            .to(|ctx: &Context, from, op| {
                let diff = op.downcast_ref::<Add>().map_or(0, |add| add.diff);
                Ok(from + ctx.bias + diff)
            });
        b.from(20)
            .on(AnyOperand::from(Box::new(Sub)))
            .to(|ctx: &Context, from, _| Ok(from + ctx.bias - 5));
    })
    .unwrap()
}

#[test]
fn payload_operands_drive_context_aware_transitions() {
    let machine = counter();

    let state = machine
        .transit(
            &Context { bias: 5 },
            1,
            AnyOperand::from(Box::new(Add { diff: 10 })),
        )
        .unwrap();
    assert_eq!(state, 16);

    let state = machine
        .transit(&Context { bias: 3 }, 20, AnyOperand::from(Box::new(Sub)))
        .unwrap();
    assert_eq!(state, 18);
}

#[test]
fn payload_operands_without_rule_are_illegal() {
    let machine = counter();

    let err = machine
        .transit(&Context { bias: 3 }, 10, AnyOperand::from(Box::new(Sub)))
        .unwrap_err();
    assert_eq!(err.reason(), Some(IllegalTransitReason::NoMatchingRule));

    let err = machine
        .transit(&Context { bias: 5 }, 1, AnyOperand::new(Add { diff: 11 }))
        .unwrap_err();
    assert_eq!(err.reason(), Some(IllegalTransitReason::NoMatchingRule));
}

#[test]
fn context_free_machine_runs_simple_table() {
    let fsm = build_fsm(|b| {
        b.from("idle").on("start").to("running");
        b.from("running").on("finish").to("done");
    })
    .unwrap();

    let state = fsm.transit("idle", "start").unwrap();
    assert_eq!(fsm.transit(state, "finish").unwrap(), "done");
    assert!(fsm.transit("idle", "finish").is_err());
}
