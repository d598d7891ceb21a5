// Grid navigation demo: re-planning A* with obstacles toggled between ticks
//
// Random toggles stand in for the clicks of an interactive user.

use std::thread::sleep;
use std::time::Duration;

use rand::Rng;

use grid_navigation::utils::{render_ascii, GridVisualizer};
use grid_navigation::{Cell, Simulation, SimulationConfig, StepOutcome};

const MAX_TICKS: usize = 60;
const P_RANDOM_TOGGLE: f64 = 0.15;
const SAVE_SNAPSHOT: bool = true;
const SNAPSHOT_PNG: &str = "grid_navigation.png";
const SNAPSHOT_SVG: &str = "grid_navigation.svg";
const SNAPSHOT_SIZE: u32 = 600;
const CELL_POINT_SIZE: f64 = 5.0;

fn main() {
    env_logger::init();
    println!("Grid navigation start!!");

    let mut sim = match Simulation::new(SimulationConfig::default()) {
        Ok(sim) => sim,
        Err(e) => {
            eprintln!("failed to build simulation: {}", e);
            return;
        }
    };
    let mut rng = rand::thread_rng();
    let height = sim.grid().height() as i32;
    let width = sim.grid().width() as i32;

    for _ in 0..MAX_TICKS {
        if rng.gen_bool(P_RANDOM_TOGGLE) {
            let cell = Cell::new(rng.gen_range(0..height), rng.gen_range(0..width));
            match sim.toggle(cell) {
                Ok(state) => println!("toggled {} -> {:?}", cell, state),
                Err(e) => eprintln!("toggle rejected: {}", e),
            }
        }

        let outcome = sim.tick();
        println!("tick {:>3}: {:?}", sim.tick_count(), outcome);
        print!("{}", render_ascii(sim.grid(), sim.position(), sim.goal(), sim.latest_path()));

        if outcome == StepOutcome::AtGoal {
            break;
        }
        sleep(Duration::from_secs_f64(sim.tick_period()));
    }

    if SAVE_SNAPSHOT {
        let mut vis = GridVisualizer::new("Grid Navigation").with_cell_point_size(CELL_POINT_SIZE);
        vis.draw(sim.grid(), sim.position(), sim.goal(), sim.latest_path());
        match vis.save_png(SNAPSHOT_PNG, SNAPSHOT_SIZE, SNAPSHOT_SIZE) {
            Ok(()) => println!("Plot saved to: {}", SNAPSHOT_PNG),
            Err(e) => eprintln!("{}", e),
        }
        match vis.save_svg(SNAPSHOT_SVG, SNAPSHOT_SIZE, SNAPSHOT_SIZE) {
            Ok(()) => println!("Plot saved to: {}", SNAPSHOT_SVG),
            Err(e) => eprintln!("{}", e),
        }
    }

    println!("Grid navigation finish!!");
}
