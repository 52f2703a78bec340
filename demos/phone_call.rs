//! Phone Call
//!
//! This example demonstrates a telephone modelled as a hierarchical state
//! machine.
//!
//! Key concepts:
//! - Guarded transitions chosen by the dialed number
//! - "on-hold" nested inside "connected", inheriting its hang-up
//! - Entry/exit hooks that time the call and skip moves within "connected"
//! - Graphviz export of the configured graph
//!
//! Run with: RUST_LOG=statenest=debug cargo run --example phone_call

use statenest::{fsm_ids, HookError, StateMachine};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

fsm_ids! {
    enum Phone {
        OffHook => "off-hook",
        Ringing => "ringing",
        Beeping => "beeping",
        Connected => "connected",
        OnHold => "on-hold",
    }
}

fsm_ids! {
    enum Call {
        Dialed => "call-dialed",
        HungUp => "hang-up",
        Connected => "call-connected",
        PlacedOnHold => "place-on-hold",
    }
}

#[derive(Default)]
struct CallTimer {
    started: Option<Instant>,
    elapsed: Duration,
}

fn is_number_valid(number: &str) -> bool {
    number.starts_with("123")
}

fn build_phone(timer: &Rc<RefCell<CallTimer>>) -> StateMachine<Phone, Call, String> {
    let mut phone = StateMachine::with_change_listener(Phone::OffHook, |change| {
        println!("  {} --{}--> {}", change.from, change.event, change.to);
    });

    phone
        .configure(Phone::OffHook)
        .permit_if_labeled(Call::Dialed, Phone::Ringing, "Number is valid", |n: &String| {
            is_number_valid(n)
        })
        .permit_if_labeled(Call::Dialed, Phone::Beeping, "Number is in-valid", |n: &String| {
            !is_number_valid(n)
        });

    phone.configure(Phone::Beeping).permit(Call::HungUp, Phone::OffHook);

    phone
        .configure(Phone::Ringing)
        .permit(Call::HungUp, Phone::OffHook)
        .permit(Call::Connected, Phone::Connected);

    let start = Rc::clone(timer);
    let stop = Rc::clone(timer);
    phone
        .configure(Phone::Connected)
        .on_entry_named("startTimer", move |is_sub_state, _, _| {
            if !is_sub_state {
                start.borrow_mut().started = Some(Instant::now());
            }
            Ok(())
        })
        .on_exit_named("endTimer", move |is_sub_state, _, _| {
            if is_sub_state {
                return Ok(());
            }
            let mut timer = stop.borrow_mut();
            let started = timer
                .started
                .ok_or_else(|| HookError::new("timer stopped before it started"))?;
            timer.elapsed = started.elapsed();
            Ok(())
        })
        .permit(Call::HungUp, Phone::OffHook)
        .permit(Call::PlacedOnHold, Phone::OnHold);

    if let Ok(on_hold) = phone.configure(Phone::OnHold).sub_state_of(Phone::Connected) {
        on_hold.permit(Call::Connected, Phone::Connected);
    }

    phone
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "statenest=info".to_string()))
        .init();

    println!("=== Phone Call Example ===\n");

    let timer = Rc::new(RefCell::new(CallTimer::default()));
    let mut phone = build_phone(&timer);

    println!("Dialing a bad number:");
    phone.fire_with(Call::Dialed, &"555-0000".to_string())?;
    phone.fire(Call::HungUp)?;

    println!("\nDialing a good number:");
    phone.fire_with(Call::Dialed, &"123-4567".to_string())?;
    phone.fire(Call::Connected)?;
    std::thread::sleep(Duration::from_millis(50));
    phone.fire(Call::PlacedOnHold)?;
    println!(
        "  in 'connected' while on hold: {}",
        phone.is_in_state(&Phone::Connected)
    );
    println!("  permitted: {:?}", phone.permitted_events());
    phone.fire(Call::Connected)?;
    std::thread::sleep(Duration::from_millis(50));
    phone.fire(Call::HungUp)?;

    println!("\nCall lasted {:?}", timer.borrow().elapsed);

    println!("\nGraph:\n{}", phone.to_dot_graph());

    Ok(())
}
