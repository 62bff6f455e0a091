use crate::core::SandboxResult;
use crate::domain::{Cell, CellState};

use super::random::xorshift32;
use super::{render, RunToken, SandboxCore, SimMode};

/// Edit one cell. Placing the state a cell already holds erases it; a placed
/// builder arms with the short placement cooldown. Allowed in every mode.
pub(super) fn toggle_cell(
    world: &mut SandboxCore,
    row: i64,
    col: i64,
    desired: CellState,
) -> SandboxResult<CellState> {
    let current = world.grid.get(row, col)?;
    let next = if current == desired {
        Cell::DEAD
    } else if desired == CellState::Builder {
        Cell::builder(Some(world.config.placed_build_cooldown))
    } else {
        Cell::new(desired)
    };

    world.grid.set_cell(row, col, next)?;
    render::publish(world);
    Ok(next.state)
}

/// Empty the board and zero the counters; the running mode is untouched
pub(super) fn clear(world: &mut SandboxCore) {
    world.grid.clear();
    world.counters.generation = 0;
    world.tick = 0;
    render::publish(world);
}

/// Clear, then fill at random. Per cell `r = rand % max`: 0..=20 alive, 21
/// trapper, 22 voyager, anything else stays dead. Returns cells placed.
pub(super) fn randomize(world: &mut SandboxCore, max: u32) -> usize {
    world.grid.clear();
    world.counters.generation = 0;
    world.tick = 0;

    if max == 0 {
        console_warn!("randomize: max must be positive, board left empty");
        render::publish(world);
        return 0;
    }

    let mut placed = 0;
    for idx in 0..world.grid.size() {
        let state = match xorshift32(&mut world.rng_state) % max {
            0..=20 => CellState::Alive,
            21 => CellState::Trapper,
            22 => CellState::Voyager,
            _ => continue,
        };
        let (row, col) = world.grid.coords(idx);
        if world.grid.set(row as i64, col as i64, state).is_ok() {
            placed += 1;
        }
    }

    console_log!("randomize: {} of {} cells placed", placed, world.grid.size());
    render::publish(world);
    placed
}

/// Enter `mode`, stopping the other one first. Starting the mode that is
/// already running keeps the current run.
pub(super) fn start(world: &mut SandboxCore, mode: SimMode) -> RunToken {
    let running = world.scheduler.mode();
    if running == mode {
        return world.scheduler.token();
    }
    if running != SimMode::Idle {
        world.scheduler.stop();
        console_log!("{} stopped to start {}", running.label(), mode.label());
    }

    let token = world.scheduler.start(mode);
    console_log!("{} started at speed {}", mode.label(), world.scheduler.speed());
    token
}

/// Stop `mode` if it is the one running
pub(super) fn stop(world: &mut SandboxCore, mode: SimMode) -> bool {
    if mode == SimMode::Idle || world.scheduler.mode() != mode {
        return false;
    }
    world.scheduler.stop();
    console_log!("{} stopped", mode.label());
    true
}

pub(super) fn stop_all(world: &mut SandboxCore) -> bool {
    let running = world.scheduler.mode();
    stop(world, running)
}
