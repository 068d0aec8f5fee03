use std::thread;
use std::time::Duration;

use game_core::{Color, Config, Key, Rect};
use glam::Vec2;

use crate::notifier::Notifier;
use crate::renderer::{RenderError, Renderer};
use crate::session::{FrameStatus, Session};

#[derive(Default)]
struct MockRenderer {
    ellipses: Vec<Vec2>,
    rects: Vec<Rect>,
    outlines: usize,
    texts: Vec<String>,
    presented: usize,
    fail_begin: Option<RenderError>,
    fail_resize: bool,
}

impl MockRenderer {
    fn new() -> Self {
        Self::default()
    }
}

impl Renderer for MockRenderer {
    fn begin_frame(&mut self) -> Result<(), RenderError> {
        if let Some(err) = self.fail_begin.clone() {
            return Err(err);
        }
        self.ellipses.clear();
        self.rects.clear();
        self.outlines = 0;
        self.texts.clear();
        Ok(())
    }

    fn clear(&mut self, _color: Color) {}

    fn fill_ellipse(&mut self, center: Vec2, _radii: Vec2, _color: Color) {
        self.ellipses.push(center);
    }

    fn fill_rect(&mut self, rect: Rect, _color: Color) {
        self.rects.push(rect);
    }

    fn stroke_rect(&mut self, _rect: Rect, _color: Color) {
        self.outlines += 1;
    }

    fn draw_text(&mut self, text: &str, _position: Vec2, _color: Color) {
        self.texts.push(text.to_string());
    }

    fn end_frame(&mut self) -> Result<(), RenderError> {
        self.presented += 1;
        Ok(())
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<(), RenderError> {
        if self.fail_resize {
            return Err(RenderError::Resize {
                width,
                height,
                reason: "device lost".into(),
            });
        }
        Ok(())
    }
}

#[derive(Default)]
struct MockNotifier {
    messages: Vec<String>,
}

impl Notifier for MockNotifier {
    fn notify(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}

#[test]
fn test_frame_draws_every_entity() {
    let mut session = Session::new(Config::new(), 1);
    let mut renderer = MockRenderer::new();
    let mut notifier = MockNotifier::default();

    let status = session.frame(&mut renderer, &mut notifier);

    assert_eq!(status, Ok(FrameStatus::Presented));
    assert_eq!(renderer.presented, 1);
    assert_eq!(renderer.ellipses, vec![Vec2::new(600.0, 450.0)]);
    assert_eq!(renderer.rects.len(), 2);
    assert_eq!(renderer.texts, vec!["0 | 0".to_string()]);
    assert_eq!(renderer.outlines, 4, "Bounding boxes drawn by default");
    assert!(notifier.messages.is_empty());
}

#[test]
fn test_bounding_boxes_can_be_hidden() {
    let mut config = Config::new();
    config.draw_bounding_boxes = false;
    let mut session = Session::new(config, 1);
    let mut renderer = MockRenderer::new();

    session
        .frame(&mut renderer, &mut MockNotifier::default())
        .expect("frame");

    assert_eq!(renderer.outlines, 0);
}

#[test]
fn test_round_over_notifies_and_restarts() {
    let mut session = Session::new(Config::new(), 1);
    let mut renderer = MockRenderer::new();
    let mut notifier = MockNotifier::default();

    session.with_simulation(|sim| {
        sim.state.player_score = 4;
        sim.state.opponent_score = 6;
    });
    session.frame(&mut renderer, &mut notifier).expect("frame");

    assert_eq!(notifier.messages, vec!["You lost.".to_string()]);
    session.with_simulation(|sim| {
        assert_eq!(sim.state.total_score(), 0);
        assert_eq!(sim.state.score_limit, 10);
        assert!(sim.round.is_in_round());
    });

    // Next frame plays on without another notification
    session.frame(&mut renderer, &mut notifier).expect("frame");
    assert_eq!(notifier.messages.len(), 1);
}

#[test]
fn test_frame_error_skips_frame() {
    let mut session = Session::new(Config::new(), 1);
    let mut renderer = MockRenderer::new();
    renderer.fail_begin = Some(RenderError::Frame("target lost".into()));

    let status = session.frame(&mut renderer, &mut MockNotifier::default());

    assert_eq!(status, Ok(FrameStatus::Skipped));
    assert_eq!(renderer.presented, 0);

    renderer.fail_begin = None;
    let status = session.frame(&mut renderer, &mut MockNotifier::default());
    assert_eq!(status, Ok(FrameStatus::Presented), "Loop carries on");
}

#[test]
fn test_fatal_error_is_returned() {
    let mut session = Session::new(Config::new(), 1);
    let mut renderer = MockRenderer::new();
    renderer.fail_begin = Some(RenderError::Setup("no adapter".into()));

    let status = session.frame(&mut renderer, &mut MockNotifier::default());

    assert_eq!(status, Err(RenderError::Setup("no adapter".into())));
}

#[test]
fn test_resize_failure_is_reported() {
    let session = Session::new(Config::new(), 1);
    let mut renderer = MockRenderer::new();
    renderer.fail_resize = true;
    let mut notifier = MockNotifier::default();

    session.resize(800, 600, &mut renderer, &mut notifier);

    assert_eq!(notifier.messages.len(), 1);
    session.with_simulation(|sim| assert_eq!(sim.map.width, 1200.0, "Map unchanged"));
}

#[test]
fn test_resize_updates_map() {
    let session = Session::new(Config::new(), 1);
    let mut renderer = MockRenderer::new();

    session.resize(800, 600, &mut renderer, &mut MockNotifier::default());

    session.with_simulation(|sim| {
        assert_eq!(sim.map.width, 800.0);
        assert_eq!(sim.map.height, 600.0);
    });
}

#[test]
fn test_key_events_update_table() {
    let session = Session::new(Config::new(), 1);

    session.key_down(Key::W);
    assert!(session.is_key_held(Key::W));

    session.key_up(Key::W);
    assert!(!session.is_key_held(Key::W));

    session.key_down(Key::S);
    session.focus_lost();
    assert!(!session.is_key_held(Key::S));
}

#[test]
fn test_escape_stops_session() {
    let session = Session::new(Config::new(), 1);
    assert!(session.is_running());

    session.key_down(Key::Escape);

    assert!(!session.is_running());
}

#[test]
fn test_threads_drive_ball_and_paddle() {
    let mut session = Session::new(Config::new(), 1);
    session.start();
    session.key_down(Key::Up);

    thread::sleep(Duration::from_millis(100));
    session.key_up(Key::Up);
    session.shutdown();

    assert!(!session.is_running());
    session.with_simulation(|sim| {
        let ball = sim.body(sim.handles.ball).expect("ball");
        assert!(ball.position().x > 600.0, "Physics thread moved the ball");
        let player = sim.body(sim.handles.player).expect("player");
        assert!(player.position().y < 450.0, "Input thread moved the paddle");
    });
}

#[test]
fn test_shutdown_is_idempotent() {
    let mut session = Session::new(Config::new(), 1);
    session.start();
    session.shutdown();
    session.shutdown();
    assert!(!session.is_running());
}

#[test]
fn test_physics_thread_survives_short_window() {
    let mut session = Session::new(Config::new(), 1);
    let mut renderer = MockRenderer::new();
    session.resize(1200, 20, &mut renderer, &mut MockNotifier::default());

    session.start();
    thread::sleep(Duration::from_millis(100));
    session.shutdown();

    session.with_simulation(|sim| {
        let ball = sim.body(sim.handles.ball).expect("ball");
        assert_eq!(sim.map.height, 20.0);
        assert!(ball.position().x > 600.0, "Physics thread kept stepping");
        assert!((ball.position().y - 10.0).abs() < 1.0);
    });
}
