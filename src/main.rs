//! Astro Drift entry point
//!
//! Headless driver: loads settings, runs a session on the fixed 30 Hz clock,
//! and reports the HUD to the log. Rendering is left to a separate front end.

use std::time::{Duration, Instant};

use astro_drift::consts::TICK_DT;
use astro_drift::{Session, Settings};

fn main() {
    env_logger::init();
    log::info!("Astro Drift (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => match Settings::load(&path) {
            Ok(settings) => settings,
            Err(e) => {
                log::error!("{e}");
                std::process::exit(1);
            }
        },
        None => Settings::default(),
    };

    let mut session = Session::from_settings(&settings);
    if settings.realtime {
        run_realtime(&mut session, &settings);
    } else {
        run_flat_out(&mut session, &settings);
    }

    for line in &session.world().hud.message {
        println!("{line}");
    }

    if settings.dump_snapshot {
        match serde_json::to_string_pretty(&session.snapshot()) {
            Ok(json) => println!("{json}"),
            Err(e) => log::error!("Failed to serialize snapshot: {e}"),
        }
    }
}

fn tick_limit_reached(session: &Session, settings: &Settings) -> bool {
    settings.max_ticks != 0 && session.world().time_ticks >= settings.max_ticks
}

fn report(session: &Session, settings: &Settings) {
    let world = session.world();
    if world.time_ticks % settings.report_interval_ticks == 0 {
        log::info!(
            "[tick {}] {} | asteroids {} missiles {} items {}",
            world.time_ticks,
            world.hud.message.join("  "),
            world.asteroids.len(),
            world.missiles.len(),
            world.items.len()
        );
    }
}

fn run_flat_out(session: &mut Session, settings: &Settings) {
    while !session.is_over() && !tick_limit_reached(session, settings) {
        session.step();
        report(session, settings);
    }
}

fn run_realtime(session: &mut Session, settings: &Settings) {
    let frame = Duration::from_secs_f32(TICK_DT);
    let mut last = Instant::now();
    while !session.is_over() && !tick_limit_reached(session, settings) {
        std::thread::sleep(frame);
        let now = Instant::now();
        let before = session.world().time_ticks;
        session.update((now - last).as_secs_f32());
        last = now;
        if session.world().time_ticks != before {
            report(session, settings);
        }
    }
}
