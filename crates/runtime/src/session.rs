//! Intent-level driver of one game.
//!
//! A [`GameSession`] owns the authoritative [`GameState`], the shared dice and
//! a [`World`]. Every intent (`on_confirm`, `on_move`, ...) asks the world
//! for collision and proximity facts, hands them to a short-lived
//! [`GameEngine`] and reports what happened as a [`SessionEvent`]. Rejected
//! intents leave the [`GameState`] untouched and are logged at `warn`. The
//! world is not rolled back: a move that collides with an enemy the content
//! does not know keeps its step.

use lorma_core::{
    BattleAction, BattleOutcome, BattleStep, Dice, GameConfig, GameEngine, GameError, GameMode,
    GameSnapshot, GameState, ModeEvent, TransitionError, Turn,
};

use crate::api::{Result, RuntimeError, SessionEvent};
use crate::oracle::OracleManager;
use crate::world::World;

/// One running game: state, randomness, content and space.
pub struct GameSession<W: World> {
    state: GameState,
    dice: Dice,
    config: GameConfig,
    oracles: OracleManager,
    world: W,
}

impl<W: World> GameSession<W> {
    /// Create a new session builder
    pub fn builder() -> SessionBuilder<W> {
        SessionBuilder::new()
    }

    pub fn current_mode(&self) -> GameMode {
        self.state.mode
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.state.snapshot()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn oracles(&self) -> &OracleManager {
        &self.oracles
    }

    pub fn world(&self) -> &W {
        &self.world
    }

    /// Mutable access for drivers that place actors directly (tests, tools).
    pub fn world_mut(&mut self) -> &mut W {
        &mut self.world
    }

    /// Rolls made so far this session.
    pub fn rolls(&self) -> u64 {
        self.dice.nonce()
    }

    fn engine(&mut self) -> GameEngine<'_> {
        GameEngine::new(&mut self.state, &mut self.dice, &self.config)
    }

    // ===== intents =====

    /// Start a game from the menu, advance a conversation, or leave an end
    /// screen.
    pub fn on_confirm(&mut self) -> Result<SessionEvent> {
        let result = match self.state.mode {
            GameMode::MainMenu => self.start_game(),
            GameMode::Dialogue => self.advance_dialogue(),
            GameMode::GameOver => self.confirm_game_over(),
            GameMode::Victory => self.confirm_victory(),
            mode => Err(TransitionError::not_allowed(mode, ModeEvent::Confirm).into()),
        };
        self.report("confirm", result)
    }

    /// Move one step in World mode; `(0, 0)` lets only the enemies act.
    ///
    /// Touching an enemy starts a battle against every enemy touched.
    pub fn on_move(&mut self, dx: i32, dy: i32) -> Result<SessionEvent> {
        if self.state.mode != GameMode::World {
            return Ok(SessionEvent::Idle);
        }
        let result = self.move_player(dx, dy);
        self.report("move", result)
    }

    /// Talk to the NPC in range, or advance the current conversation.
    pub fn on_interact(&mut self) -> Result<SessionEvent> {
        let result = match self.state.mode {
            GameMode::World => self.talk(),
            GameMode::Dialogue => self.advance_dialogue(),
            _ => Ok(SessionEvent::Idle),
        };
        self.report("interact", result)
    }

    /// Basic attack in battle. In the world the swing is cosmetic.
    pub fn on_attack(&mut self) -> Result<SessionEvent> {
        match self.state.mode {
            GameMode::Battle => self.on_battle_action(BattleAction::Basic),
            _ => Ok(SessionEvent::Idle),
        }
    }

    pub fn on_battle_action(&mut self, action: BattleAction) -> Result<SessionEvent> {
        let result = self.battle_action(action);
        self.report("battle_action", result)
    }

    /// Pause, or resume the interrupted mode when already paused.
    pub fn on_pause_toggle(&mut self) -> Result<SessionEvent> {
        let result = if self.state.mode == GameMode::Paused {
            self.engine()
                .resume()
                .map(|mode| SessionEvent::Resumed { mode })
                .map_err(RuntimeError::from)
        } else {
            self.engine()
                .pause()
                .map(|_| SessionEvent::Paused)
                .map_err(RuntimeError::from)
        };
        self.report("pause_toggle", result)
    }

    /// Leave the pause screen for the main menu, dropping the battle or
    /// conversation in progress.
    pub fn on_main_menu(&mut self) -> Result<SessionEvent> {
        let result = self
            .engine()
            .quit_to_menu()
            .map(|_| SessionEvent::ReturnedToMenu)
            .map_err(RuntimeError::from);
        self.report("main_menu", result)
    }

    /// Per-tick step: resolves a pending enemy phase in battle and checks the
    /// player's health in the world.
    pub fn update(&mut self) -> Result<SessionEvent> {
        let result = match self.state.mode {
            GameMode::Battle if self.enemy_turn_pending() => self.enemy_phase(),
            GameMode::World => self.check_player_health(),
            _ => Ok(SessionEvent::Idle),
        };
        self.report("update", result)
    }

    // ===== handlers =====

    fn start_game(&mut self) -> Result<SessionEvent> {
        let player = self.oracles.player();
        self.engine().new_game(player)?;
        self.world.regenerate(self.oracles.spawns());

        tracing::info!(
            player = %self.state.player.name(),
            enemies = self.world.enemy_ids().len(),
            "New game started"
        );
        Ok(SessionEvent::GameStarted)
    }

    fn move_player(&mut self, dx: i32, dy: i32) -> Result<SessionEvent> {
        self.world.step(dx, dy);

        let colliding = self.world.colliding_enemies();
        if colliding.is_empty() {
            return Ok(SessionEvent::Moved);
        }

        let enemies = colliding
            .iter()
            .map(|id| self.oracles.enemy(*id))
            .collect::<Result<Vec<_>>>()?;
        let first = self.engine().begin_battle(enemies)?;

        tracing::info!(enemies = ?colliding, first = %first, "Battle started");
        Ok(SessionEvent::BattleStarted {
            enemies: colliding,
            first,
        })
    }

    fn talk(&mut self) -> Result<SessionEvent> {
        let Some(npc) = self.world.npc_in_range() else {
            return Ok(SessionEvent::Idle);
        };

        let lines = self.oracles.npc_lines(npc)?;
        let mode = self.engine().begin_dialogue(lines)?;
        if mode != GameMode::Dialogue {
            tracing::debug!(%npc, "NPC has nothing to say");
            return Ok(SessionEvent::Idle);
        }

        tracing::info!(%npc, "Dialogue started");
        Ok(SessionEvent::DialogueStarted { npc })
    }

    fn advance_dialogue(&mut self) -> Result<SessionEvent> {
        let mode = self.engine().advance_dialogue()?;
        if mode == GameMode::World {
            tracing::info!("Dialogue ended");
            return Ok(SessionEvent::DialogueEnded);
        }

        tracing::debug!(line = self.state.dialogue.index(), "Dialogue advanced");
        Ok(SessionEvent::DialogueAdvanced)
    }

    fn battle_action(&mut self, action: BattleAction) -> Result<SessionEvent> {
        let step = self.engine().battle_action(action)?;
        tracing::debug!(%action, outcome = %step.outcome, "Player acted");
        Ok(self.settle(step))
    }

    fn enemy_phase(&mut self) -> Result<SessionEvent> {
        let step = self.engine().enemy_phase()?;
        tracing::debug!(outcome = %step.outcome, "Enemies acted");
        Ok(self.settle(step))
    }

    fn enemy_turn_pending(&self) -> bool {
        self.state
            .battle
            .as_ref()
            .is_some_and(|battle| battle.current_turn() == Turn::Enemy)
    }

    /// Turns a battle step into an event, clearing defeated enemies from the
    /// world on victory.
    fn settle(&mut self, step: BattleStep) -> SessionEvent {
        match step.outcome {
            BattleOutcome::Continue => {
                let turn = self
                    .state
                    .battle
                    .as_ref()
                    .map_or(Turn::Player, |battle| battle.current_turn());
                SessionEvent::BattleStep { turn }
            }
            BattleOutcome::Defeat => {
                tracing::info!(player = %self.state.player.name(), "Player defeated");
                SessionEvent::GameOver
            }
            BattleOutcome::Victory => {
                let Some(battle) = step.finished else {
                    return SessionEvent::BattleWon {
                        defeated: Vec::new(),
                        experience: 0,
                        level_ups: Vec::new(),
                    };
                };

                let defeated = battle.defeated_enemy_ids();
                self.world.remove_enemies(&defeated);

                let rewards = battle.rewards().cloned().unwrap_or_default();
                let experience = rewards.experience;

                if step.mode == GameMode::Victory {
                    tracing::info!(defeated = ?defeated, "Final boss defeated");
                    return SessionEvent::GameWon;
                }

                tracing::info!(
                    defeated = ?defeated,
                    experience,
                    level = self.state.player.level,
                    "Battle won"
                );
                SessionEvent::BattleWon {
                    defeated,
                    experience,
                    level_ups: rewards.level_ups,
                }
            }
        }
    }

    fn check_player_health(&mut self) -> Result<SessionEvent> {
        if !self.engine().check_player_health()? {
            return Ok(SessionEvent::Idle);
        }
        tracing::info!(player = %self.state.player.name(), "Player collapsed in the world");
        Ok(SessionEvent::GameOver)
    }

    fn confirm_game_over(&mut self) -> Result<SessionEvent> {
        let mode = self.engine().confirm_game_over()?;
        if mode == GameMode::World {
            // Fresh spawns so the restored player does not land on an enemy.
            self.world.regenerate(self.oracles.spawns());
        }

        tracing::info!(%mode, "Restarted after game over");
        Ok(SessionEvent::Restarted { mode })
    }

    fn confirm_victory(&mut self) -> Result<SessionEvent> {
        self.engine().confirm_victory()?;
        tracing::info!("Returned to menu after victory");
        Ok(SessionEvent::ReturnedToMenu)
    }

    fn report(&self, intent: &'static str, result: Result<SessionEvent>) -> Result<SessionEvent> {
        if let Err(error) = &result {
            tracing::warn!(
                intent,
                mode = %self.state.mode,
                code = error.error_code(),
                severity = error.severity().as_str(),
                "Intent rejected: {}",
                error
            );
        }
        result
    }
}

/// Builder for [`GameSession`].
pub struct SessionBuilder<W: World> {
    config: GameConfig,
    oracles: Option<OracleManager>,
    world: Option<W>,
    dice: Option<Dice>,
}

impl<W: World> SessionBuilder<W> {
    fn new() -> Self {
        Self {
            config: GameConfig::default(),
            oracles: None,
            world: None,
            dice: None,
        }
    }

    /// Override game configuration
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Set required oracle manager
    pub fn oracles(mut self, oracles: OracleManager) -> Self {
        self.oracles = Some(oracles);
        self
    }

    /// Set required world
    pub fn world(mut self, world: W) -> Self {
        self.world = Some(world);
        self
    }

    /// Replace the dice (defaults to PCG seeded from the config).
    pub fn dice(mut self, dice: Dice) -> Self {
        self.dice = Some(dice);
        self
    }

    /// Build the session, on the main menu.
    pub fn build(self) -> Result<GameSession<W>> {
        let oracles = self.oracles.ok_or(RuntimeError::MissingOracles)?;
        let world = self.world.ok_or(RuntimeError::MissingWorld)?;
        let dice = self
            .dice
            .unwrap_or_else(|| Dice::seeded(self.config.game_seed));
        let state = GameState::new(oracles.player());

        tracing::debug!(
            seed = self.config.game_seed,
            restart_target = %self.config.restart_target,
            "Session built"
        );

        Ok(GameSession {
            state,
            dice,
            config: self.config,
            oracles,
            world,
        })
    }
}
