//! Light Show
//!
//! This example demonstrates sub-states sharing a parent's transition.
//!
//! Key concepts:
//! - Colors nested inside "on", cycling on each tick
//! - "turn-off" declared once on "on" and inherited by every color
//! - Unhandled events are reported, not treated as errors
//! - Configuration validation and a JSON description of the graph
//!
//! Run with: cargo run --example light_show

use statenest::{fsm_ids, FireOutcome, StateMachine};
use stillwater::validation::Validation;

fsm_ids! {
    enum Light {
        Off => "off",
        On => "on",
        Red => "red",
        Green => "green",
        Blue => "blue",
    }
}

fsm_ids! {
    enum Switch {
        TurnOn => "turn-on",
        TurnOff => "turn-off",
        Tick => "tick",
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "statenest=info".to_string()))
        .init();

    println!("=== Light Show Example ===\n");

    let mut light = StateMachine::<Light, Switch>::new(Light::Off);

    light.configure(Light::Off).permit(Switch::TurnOn, Light::Red);
    light.configure(Light::On).permit(Switch::TurnOff, Light::Off);
    light
        .configure(Light::Red)
        .sub_state_of(Light::On)?
        .permit(Switch::Tick, Light::Green);
    light
        .configure(Light::Green)
        .sub_state_of(Light::On)?
        .permit(Switch::Tick, Light::Blue);
    light
        .configure(Light::Blue)
        .sub_state_of(Light::On)?
        .permit(Switch::Tick, Light::Red);

    match light.validate() {
        Validation::Success(_) => println!("Configuration is valid\n"),
        Validation::Failure(violations) => {
            for violation in violations.iter() {
                println!("  ✗ {}", violation);
            }
        }
    }

    let sequence = [
        Switch::TurnOff,
        Switch::TurnOn,
        Switch::Tick,
        Switch::TurnOn,
        Switch::Tick,
        Switch::Tick,
        Switch::Tick,
        Switch::TurnOff,
    ];

    for event in sequence {
        let outcome = light.fire(event)?;
        let note = match outcome {
            FireOutcome::Transitioned { .. } => "",
            FireOutcome::SelfTransition { .. } => " (self transition)",
            FireOutcome::Unhandled => " (ignored)",
        };
        println!("{:>8} -> {}{}", event.as_str(), light.current_state(), note);
    }

    println!("\nDescription:\n{}", light.describe().to_json()?);

    Ok(())
}
