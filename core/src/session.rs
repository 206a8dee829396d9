use crate::*;

/// One game plus the mine source it draws from. Actions are applied one at a
/// time, in the order they are dispatched.
#[derive(Clone, Debug)]
pub struct Session<P = RandomPlacer> {
    game: Game,
    placer: P,
}

impl Session<RandomPlacer> {
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self::with_placer(config, RandomPlacer::new(seed))
    }

    pub fn seed(&self) -> u64 {
        self.placer.seed()
    }
}

impl<P: MinePlacer> Session<P> {
    pub fn with_placer(config: GameConfig, placer: P) -> Self {
        Self {
            game: Game::new(config),
            placer,
        }
    }

    pub fn state(&self) -> &Game {
        &self.game
    }

    pub fn placer(&self) -> &P {
        &self.placer
    }

    /// Replaces the current game with the one that follows `action`. When
    /// mine placement fails the current game is kept as it was.
    pub fn dispatch(&mut self, action: Action) -> Result<Outcome> {
        let mut next = self.game.clone();
        let outcome = next.apply(action, &mut self.placer)?;

        if outcome.has_update() {
            log::debug!(
                "{:?} -> {:?}, status {:?}",
                action,
                outcome,
                next.status()
            );
            self.game = next;
        } else {
            log::trace!("{:?} had no effect", action);
        }

        match outcome {
            Outcome::Won => log::info!("Game won"),
            Outcome::HitMine => log::info!("Game lost at {:?}", self.game.triggered_mine()),
            _ => {}
        }

        Ok(outcome)
    }
}
