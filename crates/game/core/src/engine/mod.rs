//! Game-mode state machine.
//!
//! The [`GameEngine`] is the only writer of [`GameState`]. Every entry point
//! resolves its event through [`next_mode`] first and touches nothing when
//! the event is illegal, so a rejected call always leaves the state as it
//! was. Space (collisions, NPC proximity) is decided by the caller; the
//! engine only receives the resulting enemies or dialogue lines.

mod errors;
mod mode;

pub use errors::TransitionError;
pub use mode::{GameMode, ModeEvent, next_mode};

use crate::battle::{Battle, BattleAction, BattleOutcome, Turn};
use crate::config::{GameConfig, RestartTarget};
use crate::dialogue::DialogueLine;
use crate::env::Dice;
use crate::state::GameState;
use crate::stats::{Enemy, Player};

/// Result of one battle step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BattleStep {
    pub outcome: BattleOutcome,
    /// Mode after the step.
    pub mode: GameMode,
    /// The battle, handed back once it has ended and left the state.
    pub finished: Option<Battle>,
}

/// Mode-machine reducer over a borrowed [`GameState`].
pub struct GameEngine<'a> {
    state: &'a mut GameState,
    dice: &'a mut Dice,
    config: &'a GameConfig,
}

impl<'a> GameEngine<'a> {
    pub fn new(state: &'a mut GameState, dice: &'a mut Dice, config: &'a GameConfig) -> Self {
        Self {
            state,
            dice,
            config,
        }
    }

    pub fn mode(&self) -> GameMode {
        self.state.mode
    }

    fn transition(&self, event: ModeEvent) -> Result<GameMode, TransitionError> {
        next_mode(self.state.mode, event)
            .ok_or_else(|| TransitionError::not_allowed(self.state.mode, event))
    }

    /// MainMenu → World with a fresh player.
    pub fn new_game(&mut self, player: Player) -> Result<GameMode, TransitionError> {
        // Confirm is also legal on the end screens; only the menu starts a game.
        if self.state.mode != GameMode::MainMenu {
            return Err(TransitionError::not_allowed(
                self.state.mode,
                ModeEvent::Confirm,
            ));
        }
        let next = self.transition(ModeEvent::Confirm)?;

        self.state.player = player;
        self.state.battle = None;
        self.state.dialogue.end();
        self.state.previous_mode = None;
        self.state.mode = next;
        Ok(next)
    }

    /// World → Battle against the colliding enemies.
    ///
    /// Returns who acts first.
    pub fn begin_battle(
        &mut self,
        enemies: impl IntoIterator<Item = Enemy>,
    ) -> Result<Turn, TransitionError> {
        let next = self.transition(ModeEvent::EnemyCollision)?;
        let battle = Battle::start(&self.state.player, enemies)?;
        let first = battle.current_turn();

        self.state.battle = Some(battle);
        self.state.mode = next;
        Ok(first)
    }

    /// World → Dialogue with the NPC's lines.
    ///
    /// An NPC with nothing to say leaves the game in World.
    pub fn begin_dialogue(
        &mut self,
        lines: impl IntoIterator<Item = DialogueLine>,
    ) -> Result<GameMode, TransitionError> {
        let next = self.transition(ModeEvent::NpcInteraction)?;
        let lines: Vec<DialogueLine> = lines.into_iter().collect();
        if lines.is_empty() {
            return Ok(self.state.mode);
        }

        self.state.dialogue.start(lines);
        self.state.mode = next;
        Ok(next)
    }

    /// One player action on the player's turn.
    pub fn battle_action(&mut self, action: BattleAction) -> Result<BattleStep, TransitionError> {
        self.require_battle_mode()?;
        let battle = self
            .state
            .battle
            .as_mut()
            .ok_or(TransitionError::MissingBattle)?;

        let outcome = battle.perform(action, &mut self.state.player, self.dice)?;
        self.settle(outcome)
    }

    /// Every living enemy acts once.
    pub fn enemy_phase(&mut self) -> Result<BattleStep, TransitionError> {
        self.require_battle_mode()?;
        let battle = self
            .state
            .battle
            .as_mut()
            .ok_or(TransitionError::MissingBattle)?;

        let outcome = battle.enemy_turn(&mut self.state.player, self.dice)?;
        self.settle(outcome)
    }

    fn require_battle_mode(&self) -> Result<(), TransitionError> {
        if self.state.mode != GameMode::Battle {
            // Report against the event a battle step would have produced.
            return Err(TransitionError::not_allowed(
                self.state.mode,
                ModeEvent::BattleWon,
            ));
        }
        Ok(())
    }

    /// Applies the mode change of a finished battle.
    fn settle(&mut self, outcome: BattleOutcome) -> Result<BattleStep, TransitionError> {
        let event = match outcome {
            BattleOutcome::Continue => {
                return Ok(BattleStep {
                    outcome,
                    mode: self.state.mode,
                    finished: None,
                });
            }
            BattleOutcome::Defeat => ModeEvent::BattleLost,
            BattleOutcome::Victory => {
                let final_boss = self
                    .state
                    .battle
                    .as_ref()
                    .is_some_and(Battle::final_boss_defeated);
                if final_boss {
                    ModeEvent::FinalBossDefeated
                } else {
                    ModeEvent::BattleWon
                }
            }
        };

        let next = self.transition(event)?;
        self.state.mode = next;
        Ok(BattleStep {
            outcome,
            mode: next,
            finished: self.state.battle.take(),
        })
    }

    /// Moves the conversation on; back to World once it runs out.
    pub fn advance_dialogue(&mut self) -> Result<GameMode, TransitionError> {
        let next = self.transition(ModeEvent::DialogueFinished)?;
        if !self.state.dialogue.advance() {
            return Ok(self.state.mode);
        }

        self.state.dialogue.end();
        self.state.mode = next;
        Ok(next)
    }

    /// World → GameOver when the player has no health left.
    ///
    /// Returns whether the game ended.
    pub fn check_player_health(&mut self) -> Result<bool, TransitionError> {
        let next = self.transition(ModeEvent::PlayerDefeated)?;
        if !self.state.player.is_defeated() {
            return Ok(false);
        }

        self.state.mode = next;
        Ok(true)
    }

    pub fn pause(&mut self) -> Result<GameMode, TransitionError> {
        let next = self.transition(ModeEvent::Pause)?;
        self.state.previous_mode = Some(self.state.mode);
        self.state.mode = next;
        Ok(next)
    }

    /// Paused → the interrupted mode, with its battle or dialogue intact.
    pub fn resume(&mut self) -> Result<GameMode, TransitionError> {
        if self.state.mode != GameMode::Paused {
            return Err(TransitionError::not_allowed(
                self.state.mode,
                ModeEvent::Resume(GameMode::World),
            ));
        }
        let previous = self
            .state
            .previous_mode
            .ok_or(TransitionError::MissingPreviousMode)?;
        let next = self.transition(ModeEvent::Resume(previous))?;

        self.state.previous_mode = None;
        self.state.mode = next;
        Ok(next)
    }

    /// Paused → MainMenu, dropping any battle or conversation.
    pub fn quit_to_menu(&mut self) -> Result<GameMode, TransitionError> {
        let next = self.transition(ModeEvent::QuitToMenu)?;
        self.state.battle = None;
        self.state.dialogue.end();
        self.state.previous_mode = None;
        self.state.mode = next;
        Ok(next)
    }

    /// GameOver → MainMenu or World, as configured.
    ///
    /// The player always comes back with full health and ready abilities.
    pub fn confirm_game_over(&mut self) -> Result<GameMode, TransitionError> {
        let event = match self.config.restart_target {
            RestartTarget::MainMenu => ModeEvent::Confirm,
            RestartTarget::World => ModeEvent::Retry,
        };
        if self.state.mode != GameMode::GameOver {
            return Err(TransitionError::not_allowed(self.state.mode, event));
        }
        let next = self.transition(event)?;

        self.state.player.restore_for_retry();
        self.state.battle = None;
        self.state.mode = next;
        Ok(next)
    }

    /// Victory → MainMenu.
    pub fn confirm_victory(&mut self) -> Result<GameMode, TransitionError> {
        if self.state.mode != GameMode::Victory {
            return Err(TransitionError::not_allowed(
                self.state.mode,
                ModeEvent::Confirm,
            ));
        }
        let next = self.transition(ModeEvent::Confirm)?;
        self.state.mode = next;
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::BattleError;
    use crate::env::FixedRng;
    use crate::state::EnemyId;
    use crate::stats::{Character, HealAbility};

    struct Harness {
        state: GameState,
        dice: Dice,
        config: GameConfig,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                state: GameState::new(hero()),
                dice: Dice::new(FixedRng::NEVER, 0),
                config: GameConfig::new(),
            }
        }

        fn engine(&mut self) -> GameEngine<'_> {
            GameEngine::new(&mut self.state, &mut self.dice, &self.config)
        }
    }

    fn hero() -> Player {
        Player::new(Character::new("Hero", 100, 15, 3), HealAbility::new(30, 3))
    }

    fn orc(id: u32) -> Enemy {
        Enemy::new(EnemyId(id), Character::new("Orc", 20, 5, 1))
    }

    #[test]
    fn starts_in_main_menu_and_confirm_enters_world() {
        let mut h = Harness::new();
        assert_eq!(h.state.mode, GameMode::MainMenu);
        assert_eq!(h.engine().new_game(hero()), Ok(GameMode::World));
        assert_eq!(
            h.engine().new_game(hero()),
            Err(TransitionError::not_allowed(GameMode::World, ModeEvent::Confirm))
        );
    }

    #[test]
    fn victory_returns_to_world_and_hands_back_the_battle() {
        let mut h = Harness::new();
        h.engine().new_game(hero()).unwrap();
        assert_eq!(h.engine().begin_battle([orc(4)]), Ok(Turn::Player));

        let step = h.engine().battle_action(BattleAction::Skill).unwrap();
        assert_eq!(step.outcome, BattleOutcome::Victory);
        assert_eq!(step.mode, GameMode::World);
        let finished = step.finished.unwrap();
        assert_eq!(finished.defeated_enemy_ids(), vec![EnemyId(4)]);
        assert!(h.state.battle.is_none());
    }

    #[test]
    fn final_boss_victory_ends_the_game() {
        let mut h = Harness::new();
        h.engine().new_game(hero()).unwrap();
        h.engine().begin_battle([orc(9).as_final_boss()]).unwrap();

        let step = h.engine().battle_action(BattleAction::Skill).unwrap();
        assert_eq!(step.mode, GameMode::Victory);
        assert_eq!(h.engine().confirm_victory(), Ok(GameMode::MainMenu));
    }

    #[test]
    fn empty_battle_is_rejected_in_world() {
        let mut h = Harness::new();
        h.engine().new_game(hero()).unwrap();
        assert_eq!(
            h.engine().begin_battle(Vec::new()),
            Err(TransitionError::Battle(BattleError::NoEnemies))
        );
        assert_eq!(h.state.mode, GameMode::World);
    }

    #[test]
    fn defeat_leads_to_game_over_and_restart() {
        let mut h = Harness::new();
        h.engine().new_game(hero()).unwrap();
        h.state.player.take_damage(95);
        let brute = Enemy::new(EnemyId(1), Character::new("Troll", 80, 15, 9));
        assert_eq!(h.engine().begin_battle([brute]), Ok(Turn::Enemy));

        let step = h.engine().enemy_phase().unwrap();
        assert_eq!(step.outcome, BattleOutcome::Defeat);
        assert_eq!(h.state.mode, GameMode::GameOver);

        assert_eq!(h.engine().confirm_game_over(), Ok(GameMode::MainMenu));
        assert_eq!(h.state.player.health(), h.state.player.max_health());
    }

    #[test]
    fn retry_target_goes_straight_back_to_world() {
        let mut h = Harness::new();
        h.config = GameConfig::new().with_restart_target(RestartTarget::World);
        h.engine().new_game(hero()).unwrap();
        h.state.player.take_damage(100);
        assert_eq!(h.engine().check_player_health(), Ok(true));
        assert_eq!(h.engine().confirm_game_over(), Ok(GameMode::World));
    }

    #[test]
    fn pause_preserves_the_battle() {
        let mut h = Harness::new();
        h.engine().new_game(hero()).unwrap();
        h.engine().begin_battle([orc(1), orc(2)]).unwrap();
        let before = h.state.battle.clone();

        assert_eq!(h.engine().pause(), Ok(GameMode::Paused));
        assert_eq!(h.state.previous_mode, Some(GameMode::Battle));
        assert!(h.engine().battle_action(BattleAction::Basic).is_err());
        assert_eq!(h.engine().resume(), Ok(GameMode::Battle));
        assert_eq!(h.state.previous_mode, None);
        assert_eq!(h.state.battle, before);
    }

    #[test]
    fn quitting_from_pause_discards_the_battle() {
        let mut h = Harness::new();
        h.engine().new_game(hero()).unwrap();
        h.engine().begin_battle([orc(1)]).unwrap();
        h.engine().pause().unwrap();

        assert_eq!(h.engine().quit_to_menu(), Ok(GameMode::MainMenu));
        assert!(h.state.battle.is_none());
        assert!(h.engine().pause().is_err());
    }

    #[test]
    fn dialogue_round_trip() {
        let mut h = Harness::new();
        h.engine().new_game(hero()).unwrap();

        assert_eq!(h.engine().begin_dialogue(Vec::new()), Ok(GameMode::World));
        let lines = vec![DialogueLine::from("Hello"), DialogueLine::from("Bye")];
        assert_eq!(h.engine().begin_dialogue(lines), Ok(GameMode::Dialogue));
        assert_eq!(h.engine().advance_dialogue(), Ok(GameMode::Dialogue));
        assert_eq!(h.engine().advance_dialogue(), Ok(GameMode::World));
        assert!(h.state.dialogue.is_empty());
    }

    #[test]
    fn health_check_only_fires_on_zero() {
        let mut h = Harness::new();
        h.engine().new_game(hero()).unwrap();
        assert_eq!(h.engine().check_player_health(), Ok(false));
        assert_eq!(h.state.mode, GameMode::World);
    }
}
