use vizij_tween_core::{AdvanceOptions, EasingLibrary, Tween, TweenConfig};

/// Drive a ping-pong tween at a fixed 30 Hz and print an opacity ramp.
fn main() -> anyhow::Result<()> {
    let mut tween = Tween::new(
        TweenConfig::default()
            .with_duration(1.0)
            .with_loops(4)
            .with_pingpong(true),
    )?;
    let curve = EasingLibrary::lookup_by_name("Sinusoidal", "InOut")?;

    let dt = 1.0 / 30.0;
    let mut frame = 0u32;
    let mut cycles = 0u32;
    let mut finished = false;
    while !finished {
        let opacity = tween.advance(
            dt,
            AdvanceOptions::new()
                .curve(curve)
                .on_cycle_complete(&mut || cycles += 1)
                .on_all_cycles_complete(&mut || finished = true),
        );
        let bar = "#".repeat((opacity * 40.0).round() as usize);
        println!("{frame:4} [cycle {cycles}] {bar:<40} {opacity:.3}");
        frame += 1;
    }
    println!("finished after {frame} frames, {} cycles", tween.cycle_index());
    Ok(())
}
