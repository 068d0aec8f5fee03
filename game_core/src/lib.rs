pub mod components;
pub mod config;
pub mod draw;
pub mod input;
pub mod map;
pub mod math;
pub mod object;
pub mod params;
pub mod resources;
pub mod round;
pub mod systems;

pub use components::*;
pub use config::*;
pub use draw::*;
pub use input::*;
pub use map::*;
pub use object::*;
pub use params::*;
pub use resources::*;
pub use round::*;

use glam::Vec2;
use hecs::{Entity, World};
use systems::KeyEvent;

/// Helper to create a paddle entity at its spawn point
pub fn create_paddle(
    world: &mut World,
    side: Side,
    controller: Controller,
    map: &GameMap,
    config: &Config,
) -> Entity {
    let paddle = Paddle::new(side, controller);
    let size = Vec2::new(config.paddle_half_width, config.paddle_half_height);
    let body = Body::new(paddle.spawn(map, config), size, Color::WHITE);
    world.spawn((body, GameObject::Paddle(paddle)))
}

/// Helper to create the ball entity, at rest in the middle
pub fn create_ball(world: &mut World, map: &GameMap, config: &Config) -> Entity {
    let body = Body::new(map.ball_spawn(), Vec2::splat(config.ball_radius), Color::WHITE);
    world.spawn((body, GameObject::Ball(Ball::new(config.ball_speed_initial))))
}

/// Helper to create the score readout
pub fn create_score_text(world: &mut World, map: &GameMap) -> Entity {
    let body = Body::new(ScoreText::anchor(map), Vec2::ZERO, Color::WHITE);
    world.spawn((body, GameObject::ScoreText(ScoreText::new())))
}

/// Handles to the session's entities
#[derive(Debug, Clone, Copy)]
pub struct Handles {
    pub ball: Entity,
    pub player: Entity,
    pub opponent: Entity,
    pub score_text: Entity,
}

/// The game world: every entity plus the resources the passes share.
///
/// Entities are created once and mutated in place for the whole session.
pub struct Simulation {
    pub world: World,
    pub handles: Handles,
    pub time: Time,
    pub map: GameMap,
    pub config: Config,
    pub state: GameState,
    pub events: Events,
    pub rng: GameRng,
    pub round: RoundFsm,
    listeners: Vec<Entity>,
}

impl Simulation {
    pub fn new(config: Config, seed: u64) -> Self {
        let map = GameMap::new(config.window_width, config.window_height);
        let mut world = World::new();

        let ball = create_ball(&mut world, &map, &config);
        let player = create_paddle(
            &mut world,
            Side::Player,
            config.controller(Side::Player),
            &map,
            &config,
        );
        let opponent = create_paddle(
            &mut world,
            Side::Opponent,
            config.controller(Side::Opponent),
            &map,
            &config,
        );
        let score_text = create_score_text(&mut world, &map);

        let listeners = [player, opponent]
            .into_iter()
            .filter(|&e| is_human_paddle(&world, e))
            .collect();

        Self {
            world,
            handles: Handles {
                ball,
                player,
                opponent,
                score_text,
            },
            time: Time::default(),
            map,
            state: GameState::new(config.score_limit),
            config,
            events: Events::new(),
            rng: GameRng::new(seed),
            round: RoundFsm::new(),
            listeners,
        }
    }

    fn for_each_object(&mut self, mut f: impl FnMut(&mut GameObject, &mut Body, &mut SceneContext<'_>)) {
        let mut ctx = SceneContext {
            map: &self.map,
            config: &self.config,
            state: &mut self.state,
            events: &mut self.events,
            rng: &mut self.rng,
        };
        for (_entity, (body, object)) in self.world.query_mut::<(&mut Body, &mut GameObject)>() {
            f(object, body, &mut ctx);
        }
    }

    /// One-time setup: serve the ball and place everything
    pub fn start(&mut self) {
        self.for_each_object(|object, body, ctx| object.start(body, ctx));
        log::debug!("simulation started, score limit {}", self.state.score_limit);
    }

    /// Variable-rate pass, once per rendered frame
    pub fn update(&mut self, dt: f32) {
        self.time = Time::new(dt, self.time.now + dt);

        let time = self.time;
        let ball = self.body(self.handles.ball);
        self.for_each_object(|object, body, ctx| object.update(body, &time, ball.as_ref(), ctx));
    }

    /// One fixed physics step. Nothing moves while a finished round waits
    /// for acknowledgement.
    pub fn fixed_update(&mut self) {
        if !self.round.is_in_round() {
            return;
        }
        self.events.clear();

        let paddles = self.paddle_boxes();
        self.for_each_object(|object, body, ctx| object.fixed_update(body, &paddles, ctx));
    }

    /// Return every entity to its start-of-round state
    pub fn reset(&mut self) {
        self.for_each_object(|object, body, ctx| object.reset(body, ctx));
    }

    /// Enter `RoundOver` once the limit is reached. Returns the outcome the
    /// first time only.
    pub fn check_round_over(&mut self) -> Option<Outcome> {
        if !self.state.is_over() {
            return None;
        }
        if !self.round.transition(RoundAction::ScoreLimitReached).success() {
            return None;
        }
        let outcome = self.state.outcome();
        log::debug!("round over: {} ({:?})", self.state.score_text(), outcome);
        Some(outcome)
    }

    /// Zero the scores, reset all entities and play on
    pub fn restart_round(&mut self) {
        self.state.reset();
        self.reset();
        self.round.transition(RoundAction::Restart);
    }

    /// Input tick: a key is still held
    pub fn key_held(&mut self, key: Key) {
        self.dispatch_key(key, KeyEvent::Held);
    }

    pub fn key_down(&mut self, key: Key) {
        self.dispatch_key(key, KeyEvent::Down);
    }

    pub fn key_up(&mut self, key: Key) {
        self.dispatch_key(key, KeyEvent::Up);
    }

    fn dispatch_key(&mut self, key: Key, event: KeyEvent) {
        if !self.round.is_in_round() {
            return;
        }
        let ctx = InputContext {
            config: &self.config,
            map: &self.map,
        };
        systems::dispatch_key(&mut self.world, &self.listeners, key, event, &ctx);
    }

    pub fn listeners(&self) -> &[Entity] {
        &self.listeners
    }

    /// The window client area changed size
    pub fn resize(&mut self, width: f32, height: f32) {
        self.map.resize(width, height);
        let map = self.map;
        let config = &self.config;

        for (_entity, (body, object)) in self.world.query_mut::<(&mut Body, &mut GameObject)>() {
            match object {
                GameObject::Paddle(paddle) => {
                    let x = config.paddle_x(paddle.side, map.width);
                    body.set_position(Vec2::new(x, body.position().y));
                    if config.clamp_paddles {
                        systems::clamp_paddle(body, &map);
                    }
                }
                GameObject::ScoreText(_) => body.set_position(ScoreText::anchor(&map)),
                GameObject::Ball(_) => {
                    let y = map.clamp_y(body.position().y, body.size().y);
                    body.set_position(Vec2::new(body.position().x, y));
                }
            }
        }
        log::debug!("resized to {}x{}", width, height);
    }

    /// Draw commands for every entity, in spawn order
    pub fn draw_list(&self) -> Vec<DrawItem> {
        self.world
            .query::<(&Body, &GameObject)>()
            .iter()
            .map(|(_entity, (body, object))| object.draw(body))
            .collect()
    }

    pub fn body(&self, entity: Entity) -> Option<Body> {
        self.world.get::<&Body>(entity).ok().map(|body| *body)
    }

    /// Mutate an entity's body, e.g. to place it for a test or a replay
    pub fn with_body<R>(&mut self, entity: Entity, f: impl FnOnce(&mut Body) -> R) -> Option<R> {
        self.world
            .query_one_mut::<&mut Body>(entity)
            .ok()
            .map(f)
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world
            .get::<&GameObject>(self.handles.ball)
            .ok()
            .and_then(|object| object.as_ball().copied())
    }

    fn paddle_boxes(&self) -> Vec<Rect> {
        self.world
            .query::<(&Body, &GameObject)>()
            .iter()
            .filter(|(_entity, (_body, object))| object.as_paddle().is_some())
            .map(|(_entity, (body, _object))| body.bounding_box())
            .collect()
    }
}

fn is_human_paddle(world: &World, entity: Entity) -> bool {
    world
        .get::<&GameObject>(entity)
        .ok()
        .and_then(|object| object.as_paddle().map(Paddle::is_human))
        .unwrap_or(false)
}
