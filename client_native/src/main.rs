//! Headless run: a scripted player against the AI, logged to the terminal.

use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use client_native::{
    init_logging, HeadlessRenderer, LogNotifier, LoggingConfig, Notifier, Session,
};
use game_core::{Config, Key};

const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// (seconds since start, key, pressed)
const SCRIPT: &[(f32, Key, bool)] = &[
    (0.5, Key::W, true),
    (1.0, Key::W, false),
    (1.5, Key::S, true),
    (2.4, Key::S, false),
    (3.0, Key::Up, true),
    (3.3, Key::Up, false),
    (8.0, Key::Escape, true),
];

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let mut config = Config::new();
    config.serve_max_angle = 0.35;

    let mut notifier = LogNotifier;
    let mut renderer = match HeadlessRenderer::create(
        config.window_width as u32,
        config.window_height as u32,
    ) {
        Ok(renderer) => renderer,
        Err(err) => {
            notifier.notify(&err.to_string());
            return Err(err.into());
        }
    };

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();
    log::info!("starting session with seed {}", seed);

    let mut session = Session::new(config, seed);
    session.start();

    let started = Instant::now();
    let mut script = SCRIPT.iter().peekable();

    while session.is_running() {
        let elapsed = started.elapsed().as_secs_f32();
        while let Some(&&(at, key, pressed)) = script.peek() {
            if at > elapsed {
                break;
            }
            if pressed {
                session.key_down(key);
            } else {
                session.key_up(key);
            }
            script.next();
        }

        if let Err(err) = session.frame(&mut renderer, &mut notifier) {
            notifier.notify(&err.to_string());
            session.shutdown();
            return Err(err.into());
        }

        thread::sleep(FRAME_INTERVAL);
    }

    session.shutdown();
    session.with_simulation(|sim| {
        log::info!(
            "finished after {} frames, score {}",
            renderer.frames,
            sim.state.score_text()
        );
    });
    Ok(())
}
