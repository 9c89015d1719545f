use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::GameConfig;
use crate::engine::PuzzleEngine;
use crate::error::ConfigError;
use crate::layout::{Layout, Point};
use crate::types::{Click, ContainerView, GameState};

/// Host-side game loop: forwards clicks, detects a solved puzzle and deals
/// the next one.
#[derive(Debug)]
pub struct Session {
    engine: PuzzleEngine,
    rng: StdRng,
    config: GameConfig,
    games_played: u32,
}

impl Session {
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let seed = config.resolve_seed();
        log::info!("starting session with seed {seed}");
        let mut rng = StdRng::seed_from_u64(seed);
        let engine = PuzzleEngine::new(&mut rng, config.shuffle_swaps);
        Ok(Self {
            engine,
            rng,
            config,
            games_played: 0,
        })
    }

    pub fn engine(&self) -> &PuzzleEngine {
        &self.engine
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    pub fn score_text(&self) -> String {
        format!("Games: {}", self.games_played)
    }

    pub fn click_at(&mut self, point: Point, layout: &Layout) -> Click {
        self.click(layout.locate(point))
    }

    pub fn click(&mut self, hit: Option<usize>) -> Click {
        let was_idle = self.engine.selection().is_none();
        if !self.engine.handle(hit) {
            return if was_idle && self.engine.selection().is_some() {
                Click::Selected
            } else {
                Click::None
            };
        }

        if self.engine.entropy() > 0 {
            return Click::Attempted;
        }

        self.games_played += 1;
        log::info!("puzzle solved, games played: {}", self.games_played);
        self.engine = PuzzleEngine::new(&mut self.rng, self.config.shuffle_swaps);
        Click::Solved
    }

    /// Snapshot for the renderer. Drains pending redraws.
    pub fn snapshot(&mut self) -> GameState {
        let redraw = self.engine.take_redraws();
        GameState {
            containers: self.engine.containers().iter().map(ContainerView::from).collect(),
            selection: self.engine.selection().map(|index| index as u8),
            entropy: self.engine.entropy(),
            games_played: self.games_played,
            redraw: redraw.into_iter().map(|index| index as u8).collect(),
        }
    }
}
