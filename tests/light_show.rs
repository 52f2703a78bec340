//! Light show: a parent "on" state whose colored sub-states cycle on a tick
//! and all share the parent's turn-off transition.

use statenest::{fsm_ids, FireOutcome, StateMachine};

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

fn build_light_show() -> StateMachine<Light, Switch> {
    let mut light = StateMachine::new(Light::Off);

    light.configure(Light::Off).permit(Switch::TurnOn, Light::Red);
    light.configure(Light::On).permit(Switch::TurnOff, Light::Off);

    light
        .configure(Light::Red)
        .sub_state_of(Light::On)
        .unwrap()
        .permit(Switch::Tick, Light::Green);
    light
        .configure(Light::Green)
        .sub_state_of(Light::On)
        .unwrap()
        .permit(Switch::Tick, Light::Blue);
    light
        .configure(Light::Blue)
        .sub_state_of(Light::On)
        .unwrap()
        .permit(Switch::Tick, Light::Red);

    light
}

fn fire_and_assert_state(light: &mut StateMachine<Light, Switch>, event: Switch, expected: Light) {
    light.fire(event).unwrap();
    assert_eq!(light.current_state(), expected);
}

#[test]
fn light_show_sequence() {
    let mut light = build_light_show();

    fire_and_assert_state(&mut light, Switch::TurnOff, Light::Off);
    fire_and_assert_state(&mut light, Switch::TurnOn, Light::Red);
    fire_and_assert_state(&mut light, Switch::Tick, Light::Green);
    fire_and_assert_state(&mut light, Switch::TurnOn, Light::Green);
    fire_and_assert_state(&mut light, Switch::Tick, Light::Blue);
    fire_and_assert_state(&mut light, Switch::Tick, Light::Red);
    fire_and_assert_state(&mut light, Switch::Tick, Light::Green);
    fire_and_assert_state(&mut light, Switch::TurnOff, Light::Off);
}

#[test]
fn unhandled_events_are_reported_not_failed() {
    let mut light = build_light_show();

    assert_eq!(light.fire(Switch::TurnOff).unwrap(), FireOutcome::Unhandled);
    assert_eq!(light.fire(Switch::Tick).unwrap(), FireOutcome::Unhandled);

    light.fire(Switch::TurnOn).unwrap();
    assert_eq!(light.fire(Switch::TurnOn).unwrap(), FireOutcome::Unhandled);
}

#[test]
fn colors_are_within_on() {
    let mut light = build_light_show();
    assert!(!light.is_in_state(&Light::On));

    light.fire(Switch::TurnOn).unwrap();
    for _ in 0..3 {
        assert!(light.is_in_state(&Light::On));
        assert!(!light.is_in_state(&Light::Off));
        light.fire(Switch::Tick).unwrap();
    }
}

#[test]
fn turning_off_from_a_color_bubbles_to_on() {
    let mut light = build_light_show();
    light.fire(Switch::TurnOn).unwrap();
    light.fire(Switch::Tick).unwrap();

    let outcome = light.fire(Switch::TurnOff).unwrap();

    assert_eq!(
        outcome,
        FireOutcome::Transitioned {
            from: Light::Green,
            to: Light::Off,
            is_sub_state: false,
        }
    );
}

#[test]
fn permitted_events_include_inherited_ones() {
    let mut light = build_light_show();
    assert_eq!(light.permitted_events(), vec![Switch::TurnOn]);

    light.fire(Switch::TurnOn).unwrap();
    assert_eq!(
        light.permitted_events(),
        vec![Switch::Tick, Switch::TurnOff]
    );
}

#[test]
fn light_show_dot_graph_lists_every_transition() {
    let light = build_light_show();

    assert_eq!(
        light.to_dot_graph(),
        "digraph {\n\
         \x20   \"off\" -> \"red\" [label=\"turn-on\"];\n\
         \x20   \"on\" -> \"off\" [label=\"turn-off\"];\n\
         \x20   \"red\" -> \"green\" [label=\"tick\"];\n\
         \x20   \"green\" -> \"blue\" [label=\"tick\"];\n\
         \x20   \"blue\" -> \"red\" [label=\"tick\"];\n\
         }\n"
    );
}
