//! E-commerce Order Processing
//!
//! This example demonstrates an order lifecycle driven by a guarded,
//! context-aware state machine.
//!
//! Key concepts:
//! - Order states declared with `state_enum!`
//! - Business rules as guards over the order context
//! - Transition functions that can fail and pick the returned state
//! - Illegal transits reported with the unchanged state
//!
//! Run with: RUST_LOG=efsm=trace cargo run --example order_processing

use efsm::{build, state_enum, Efsm, TransitionFailure};
use std::fmt;
use tracing_subscriber::EnvFilter;

state_enum! {
    enum OrderState {
        Draft,
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

struct Order {
    total_cents: u64,
    items: Vec<&'static str>,
    shipping_address: Option<&'static str>,
    card_limit_cents: u64,
}

#[derive(Debug)]
struct Declined {
    total_cents: u64,
}

impl fmt::Display for Declined {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "card declined for {} cents", self.total_cents)
    }
}

impl std::error::Error for Declined {}

// Pure guards
fn can_pay(order: &Order) -> bool {
    order.total_cents > 0 && !order.items.is_empty()
}

fn can_ship(order: &Order) -> bool {
    order.shipping_address.is_some()
}

fn order_machine() -> Efsm<Order, OrderState, OrderEvent> {
    build(|b| {
        b.from(OrderState::Draft).on_func(|draft| {
            draft
                .on(OrderEvent::Pay)
                .when(|order: &Order, _, _| can_pay(order))
                .to(|order, from, _| {
                    if order.total_cents <= order.card_limit_cents {
                        Ok(OrderState::Paid)
                    } else {
                        Err(TransitionFailure::new(
                            *from,
                            Declined {
                                total_cents: order.total_cents,
                            },
                        ))
                    }
                });
            draft.on(OrderEvent::Cancel).to_const(OrderState::Cancelled);
        });

        b.from(OrderState::Paid)
            .on(OrderEvent::Ship)
            .when(|order: &Order, _, _| can_ship(order))
            .to_const(OrderState::Shipped);
        b.from(OrderState::Paid)
            .on(OrderEvent::Cancel)
            .to_const(OrderState::Cancelled);
        b.from(OrderState::Shipped)
            .on(OrderEvent::Deliver)
            .to_const(OrderState::Delivered);
    })
    .expect("order rules are well-formed")
}

fn run(machine: &Efsm<Order, OrderState, OrderEvent>, order: &Order, events: &[OrderEvent]) {
    let mut state = OrderState::Draft;
    for event in events {
        match machine.transit(order, state, *event) {
            Ok(next) => {
                println!("  {state} --{event:?}--> {next}");
                state = next;
            }
            Err(err) => {
                println!("  {state} --{event:?}--> rejected: {err}");
                state = err.into_state();
            }
        }
    }
    println!("  final state: {state}\n");
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Order Processing State Machine ===\n");

    let machine = order_machine();
    let lifecycle = [OrderEvent::Pay, OrderEvent::Ship, OrderEvent::Deliver];

    println!("Happy path:");
    let order = Order {
        total_cents: 4_999,
        items: vec!["keyboard"],
        shipping_address: Some("221B Baker Street"),
        card_limit_cents: 10_000,
    };
    run(&machine, &order, &lifecycle);

    println!("Missing shipping address (guard refuses):");
    let order = Order {
        shipping_address: None,
        ..order
    };
    run(&machine, &order, &lifecycle);

    println!("Over the card limit (transition fails):");
    let order = Order {
        total_cents: 25_000,
        items: vec!["monitor", "stand"],
        shipping_address: Some("742 Evergreen Terrace"),
        card_limit_cents: 10_000,
    };
    run(&machine, &order, &lifecycle);

    println!("Shipping before paying (no rule):");
    run(&machine, &order, &[OrderEvent::Ship, OrderEvent::Cancel]);

    println!("=== Example Complete ===");
}
