use super::render::RenderSink;
use super::{render, SandboxCore};

/// One step faster; false at the top speed
pub(super) fn increase_speed(world: &mut SandboxCore) -> bool {
    let speed = world.scheduler.speed().saturating_add(1);
    set_speed(world, speed)
}

/// One step slower; false at the bottom speed
pub(super) fn decrease_speed(world: &mut SandboxCore) -> bool {
    let speed = world.scheduler.speed().saturating_sub(1);
    set_speed(world, speed)
}

pub(super) fn set_speed(world: &mut SandboxCore, speed: u8) -> bool {
    if !world.scheduler.set_speed(speed) {
        return false;
    }
    world.config.speed = speed;
    console_log!("speed {} ({}ms between ticks)", speed, world.scheduler.delay_ms());
    true
}

/// Register the sink and hand it the current frame right away
pub(super) fn set_render_sink(world: &mut SandboxCore, sink: Box<dyn RenderSink>) {
    world.sink = Some(sink);
    render::publish(world);
}

pub(super) fn clear_render_sink(world: &mut SandboxCore) {
    world.sink = None;
}
