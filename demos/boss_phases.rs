//! Boss Phase Machine
//!
//! This example drives a boss through timed attack phases and lets a stun
//! interrupt whatever phase it is in.
//!
//! Key concepts:
//! - Per-tick behaviors advancing a host-owned timer
//! - Interrupting with `remember_previous` and resuming with a pop
//! - Transition notifications resetting the phase timer
//! - Randomized phase lengths via Gaussian sampling
//!
//! Run with: cargo run --example boss_phases

use pushdown::builder::{pop_when, AutomatonBuilder, TransitionBuilder};
use pushdown::config::AutomatonConfig;
use pushdown::core::State;
use pushdown::numeric::sample_gaussian_clamped;
use pushdown::state_id;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::Cell;
use std::rc::Rc;

state_id! {
    enum Boss {
        Idle,
        Windup,
        Slam,
        Stunned,
    }
}

/// Boss phase that announces when it is left.
struct Phase {
    id: Boss,
}

impl State<Boss> for Phase {
    fn id(&self) -> Boss {
        self.id
    }

    fn on_popped(&self) {
        println!("    {:?} left the stack", self.id);
    }
}

fn phase(id: Boss) -> Rc<Phase> {
    Rc::new(Phase { id })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Boss Phase Machine ===\n");

    let mut rng = StdRng::seed_from_u64(7);
    let windup_ticks = sample_gaussian_clamped(&mut rng, 3.0, 1.0, 2.0, 5.0)?.round() as u32;
    println!("Windup lasts {windup_ticks} ticks\n");

    let timer = Rc::new(Cell::new(0u32));
    let stunned = Rc::new(Cell::new(false));

    let mut builder = AutomatonBuilder::<Boss, Phase>::new()
        .initial(phase(Boss::Idle))
        .state(phase(Boss::Windup))
        .state(phase(Boss::Slam))
        .state(phase(Boss::Stunned))
        .config(AutomatonConfig::named("boss").with_history(Some(16)));

    for id in [Boss::Idle, Boss::Windup, Boss::Slam, Boss::Stunned] {
        let clock = Rc::clone(&timer);
        builder = builder.behavior(id, move || clock.set(clock.get() + 1));
    }

    // Stun is registered first everywhere so it wins over the attack cycle.
    for id in [Boss::Idle, Boss::Windup, Boss::Slam] {
        let flag = Rc::clone(&stunned);
        builder = builder.transition(
            id,
            TransitionBuilder::new()
                .to(Boss::Stunned)
                .remember_previous()
                .when(move || flag.get()),
        )?;
    }

    let cycle = [
        (Boss::Idle, Boss::Windup, 2),
        (Boss::Windup, Boss::Slam, windup_ticks),
        (Boss::Slam, Boss::Idle, 1),
    ];
    for (from, to, ticks) in cycle {
        let clock = Rc::clone(&timer);
        builder = builder.transition(
            from,
            TransitionBuilder::new()
                .to(to)
                .when(move || clock.get() >= ticks),
        )?;
    }

    let flag = Rc::clone(&stunned);
    builder = builder.add_transition(Boss::Stunned, pop_when(move || !flag.get()));

    let mut machine = builder.build()?;

    let reset = Rc::clone(&timer);
    machine.on_state_transition(move |_| reset.set(0));

    for tick in 1..=14 {
        match tick {
            6 => {
                println!("  -- stun lands --");
                stunned.set(true);
            }
            9 => {
                println!("  -- stun wears off --");
                stunned.set(false);
            }
            _ => {}
        }

        machine.perform_behaviors();
        let applied = machine.perform_state_transition_check()?;
        println!(
            "tick {tick:>2}: {:?} (stack {:?}, {applied} transition(s))",
            machine.current_id(),
            machine.stack_ids()
        );
    }

    println!("\nRecorded path: {:?}", machine.history().get_path());
    Ok(())
}
