//! A running game: physics and input threads plus the render tick
//!
//! The physics thread steps the simulation at a fixed rate, the input thread
//! replays held keys at its own fixed rate, and the host's event loop calls
//! [`Session::frame`] once per iteration. All three go through the same
//! simulation mutex, so each tick sees a consistent world.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use game_core::{Config, Key, KeyStateTable, Simulation};

use crate::clock::FrameClock;
use crate::notifier::Notifier;
use crate::renderer::{draw_frame, RenderError, Renderer};

/// What happened to a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    Presented,
    /// A non-fatal render error; the frame was dropped
    Skipped,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

pub struct Session {
    simulation: Arc<Mutex<Simulation>>,
    keys: Arc<Mutex<KeyStateTable>>,
    running: Arc<AtomicBool>,
    workers: Vec<JoinHandle<()>>,
    clock: FrameClock,
    draw_bounds: bool,
}

impl Session {
    pub fn new(config: Config, seed: u64) -> Self {
        let clock = FrameClock::new(Duration::from_secs_f32(config.max_dt));
        let draw_bounds = config.draw_bounding_boxes;

        let mut simulation = Simulation::new(config, seed);
        simulation.start();

        Self {
            simulation: Arc::new(Mutex::new(simulation)),
            keys: Arc::new(Mutex::new(KeyStateTable::new())),
            running: Arc::new(AtomicBool::new(true)),
            workers: Vec::new(),
            clock,
            draw_bounds,
        }
    }

    /// Spawn the physics and input threads
    pub fn start(&mut self) {
        if !self.workers.is_empty() {
            return;
        }

        let (physics_interval, input_interval, fixed_dt, max_dt) = {
            let sim = lock(&self.simulation);
            (
                Duration::from_millis(sim.config.physics_interval_ms),
                Duration::from_millis(sim.config.input_interval_ms),
                sim.config.fixed_dt,
                sim.config.max_dt,
            )
        };

        let simulation = Arc::clone(&self.simulation);
        let running = Arc::clone(&self.running);
        self.workers.push(thread::spawn(move || {
            physics_loop(simulation, running, physics_interval, fixed_dt, max_dt)
        }));

        let simulation = Arc::clone(&self.simulation);
        let keys = Arc::clone(&self.keys);
        let running = Arc::clone(&self.running);
        self.workers.push(thread::spawn(move || {
            input_loop(simulation, keys, running, input_interval)
        }));

        self.clock.reset();
        log::debug!("session started");
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// Ask every loop to finish its current iteration and exit
    pub fn stop(&self) {
        self.running.store(false, Ordering::Release);
    }

    /// Stop and wait for the background threads
    pub fn shutdown(&mut self) {
        self.stop();
        for worker in self.workers.drain(..) {
            if worker.join().is_err() {
                log::error!("session worker panicked");
            }
        }
        log::debug!("session shut down");
    }

    /// Raw key press from the window. Delivered to listeners immediately.
    pub fn key_down(&self, key: Key) {
        if key == Key::Escape {
            log::debug!("escape pressed, stopping");
            self.stop();
            return;
        }
        lock(&self.keys).press(key);
        lock(&self.simulation).key_down(key);
    }

    /// Raw key release from the window. Delivered to listeners immediately.
    pub fn key_up(&self, key: Key) {
        lock(&self.keys).release(key);
        lock(&self.simulation).key_up(key);
    }

    /// The window lost focus; forget held keys so nothing sticks
    pub fn focus_lost(&self) {
        lock(&self.keys).clear();
    }

    /// The window client area changed size
    pub fn resize(
        &self,
        width: u32,
        height: u32,
        renderer: &mut dyn Renderer,
        notifier: &mut dyn Notifier,
    ) {
        if let Err(err) = renderer.resize(width, height) {
            log::warn!("{}", err);
            notifier.notify(&err.to_string());
            return;
        }
        lock(&self.simulation).resize(width as f32, height as f32);
    }

    /// One render-loop iteration: variable-rate update, round check, draw.
    ///
    /// Only fatal render errors are returned; anything else drops the frame.
    pub fn frame(
        &mut self,
        renderer: &mut dyn Renderer,
        notifier: &mut dyn Notifier,
    ) -> Result<FrameStatus, RenderError> {
        let time = self.clock.tick();

        let (items, outcome) = {
            let mut sim = lock(&self.simulation);
            sim.update(time.dt);
            let outcome = sim.check_round_over();
            (sim.draw_list(), outcome)
        };

        let status = match draw_frame(renderer, &items, self.draw_bounds) {
            Ok(()) => FrameStatus::Presented,
            Err(err) if err.is_fatal() => {
                log::error!("{}", err);
                return Err(err);
            }
            Err(err) => {
                log::warn!("abandoning frame {}: {}", time.frame_index, err);
                FrameStatus::Skipped
            }
        };

        if let Some(outcome) = outcome {
            // Physics is paused in RoundOver while this blocks
            notifier.notify(outcome.message());
            lock(&self.simulation).restart_round();
            self.clock.reset();
        }

        Ok(status)
    }

    /// Run `f` with the simulation locked
    pub fn with_simulation<R>(&self, f: impl FnOnce(&mut Simulation) -> R) -> R {
        f(&mut lock(&self.simulation))
    }

    pub fn is_key_held(&self, key: Key) -> bool {
        lock(&self.keys).is_pressed(key)
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Fixed-step physics. Elapsed wall time is banked and spent in whole
/// `fixed_dt` steps so the step size never varies.
fn physics_loop(
    simulation: Arc<Mutex<Simulation>>,
    running: Arc<AtomicBool>,
    interval: Duration,
    fixed_dt: f32,
    max_dt: f32,
) {
    log::debug!("physics thread started");
    let mut last = Instant::now();
    let mut accumulator = 0.0_f32;

    while running.load(Ordering::Acquire) {
        let now = Instant::now();
        accumulator = (accumulator + now.duration_since(last).as_secs_f32()).min(max_dt);
        last = now;

        if accumulator >= fixed_dt {
            let mut sim = lock(&simulation);
            while accumulator >= fixed_dt {
                sim.fixed_update();
                accumulator -= fixed_dt;
            }
        }

        thread::sleep(interval);
    }
    log::debug!("physics thread stopped");
}

/// Replays every held key to the listeners once per tick
fn input_loop(
    simulation: Arc<Mutex<Simulation>>,
    keys: Arc<Mutex<KeyStateTable>>,
    running: Arc<AtomicBool>,
    interval: Duration,
) {
    log::debug!("input thread started");

    while running.load(Ordering::Acquire) {
        let held = {
            let mut keys = lock(&keys);
            keys.forget_released();
            keys.held_keys()
        };
        if !held.is_empty() {
            let mut sim = lock(&simulation);
            for key in held {
                sim.key_held(key);
            }
        }

        thread::sleep(interval);
    }
    log::debug!("input thread stopped");
}
