//! UI Mode Stack
//!
//! This example models game screens as a stack: pause and inventory overlay
//! gameplay and pop back to it, while a hijack routes the first start
//! through a tutorial.
//!
//! Key concepts:
//! - Trait-object wrappers (`dyn State`) mixing state types
//! - Transition callbacks consuming the input that fired them
//! - Hijacks rewriting a target once
//! - Subscribing to and unsubscribing from notifications
//!
//! Run with: cargo run --example ui_modes

use pushdown::automaton::{Hijack, PushdownAutomaton, TransitionDescriptor};
use pushdown::core::{SimpleState, State};
use pushdown::state_id;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

state_id! {
    enum Screen {
        Menu,
        Tutorial,
        Play,
        Pause,
        Inventory,
    }
}

type Input = Rc<RefCell<Option<&'static str>>>;

/// Transition fired by `key`, which it consumes when applied.
fn on_key(
    input: &Input,
    key: &'static str,
    target: Option<Screen>,
    remember_previous: bool,
) -> TransitionDescriptor<Screen> {
    let pressed = Rc::clone(input);
    let consumed = Rc::clone(input);
    TransitionDescriptor::new(target, remember_previous, move || {
        *pressed.borrow() == Some(key)
    })
    .with_callback(move || {
        consumed.borrow_mut().take();
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== UI Mode Stack ===\n");

    let input: Input = Rc::new(RefCell::new(None));

    let mut machine: PushdownAutomaton<Screen> =
        PushdownAutomaton::new(Rc::new(SimpleState::new(Screen::Menu)));
    for id in [Screen::Tutorial, Screen::Play, Screen::Pause, Screen::Inventory] {
        machine.register_state(Rc::new(SimpleState::new(id)));
    }

    machine.register_transition(Screen::Menu, on_key(&input, "enter", Some(Screen::Play), false));
    machine.register_transition(Screen::Tutorial, on_key(&input, "enter", Some(Screen::Play), false));
    machine.register_transition(Screen::Play, on_key(&input, "esc", Some(Screen::Pause), true));
    machine.register_transition(Screen::Play, on_key(&input, "i", Some(Screen::Inventory), true));
    machine.register_transition(Screen::Pause, on_key(&input, "esc", None, false));
    machine.register_transition(Screen::Inventory, on_key(&input, "i", None, false));
    machine.register_transition(Screen::Pause, on_key(&input, "q", Some(Screen::Menu), false));

    let tutorial_seen = Rc::new(Cell::new(false));
    let seen = Rc::clone(&tutorial_seen);
    let mark = Rc::clone(&tutorial_seen);
    machine.add_transition_hijack(
        Hijack::new(move |proposed: Option<&Screen>| match proposed {
            Some(Screen::Play) if !seen.get() => Some(Screen::Tutorial),
            other => other.copied(),
        })
        .with_action(move |_| {
            println!("    first start: showing the tutorial");
            mark.set(true);
        }),
    );

    let pop_log = machine.on_state_pop(|popped| println!("    popped {:?}", popped.id()));
    machine.on_state_transition(|discarded| {
        let how = if *discarded { "replaced" } else { "overlaid" };
        println!("    previous screen {how}");
    });

    let keys = ["enter", "enter", "i", "i", "esc", "esc", "esc", "q"];
    for (step, key) in keys.into_iter().enumerate() {
        if step == 6 {
            machine.unsubscribe_state_pop(pop_log);
            println!("  (pop logging off)");
        }

        println!("press {key:?}");
        input.borrow_mut().replace(key);
        machine.perform_state_transition_check()?;
        println!("  stack: {:?}", machine.stack_ids());
    }

    Ok(())
}
