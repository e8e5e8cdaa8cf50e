//! Traffic Light State Machine
//!
//! This example demonstrates a simple cyclic machine with no context.
//!
//! Key concepts:
//! - Cyclic state transitions (states repeat)
//! - The context-free `build_fsm` facade
//! - Constant targets only
//!
//! Run with: cargo run --example traffic_light

use efsm::{build_fsm, state_enum};

state_enum! {
    enum TrafficLight {
        Red,
        Yellow,
        Green,
    }
}

fn main() {
    println!("=== Traffic Light State Machine ===\n");

    let light = build_fsm(|b| {
        b.from(TrafficLight::Red).on("tick").to(TrafficLight::Green);
        b.from(TrafficLight::Green).on("tick").to(TrafficLight::Yellow);
        b.from(TrafficLight::Yellow).on("tick").to(TrafficLight::Red);
        b.from(TrafficLight::Green).on("emergency").to(TrafficLight::Red);
    })
    .expect("light rules are well-formed");

    let mut state = TrafficLight::Red;
    println!("Initial state: {state}");
    for _ in 0..6 {
        let next = light
            .transit(state, "tick")
            .expect("every light has a tick rule");
        println!("  {state} -> {next}");
        state = next;
    }

    println!("\nEmergency from {state}:");
    match light.transit(state, "emergency") {
        Ok(next) => println!("  {state} -> {next}"),
        Err(err) => println!("  ignored: {err}"),
    }

    println!("\n=== Example Complete ===");
}
