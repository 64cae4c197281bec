//! Scripted player for headless runs.
//!
//! Walks toward the closest enemy, talks to every NPC it passes once, and
//! fights with skills, healing when low. Enough to drive a session through
//! every mode for smoke tests and log inspection.

use std::collections::HashSet;

use anyhow::Result;
use lorma_core::{BattleAction, GameMode, NpcId, Turn};
use lorma_runtime::{GameSession, GridWorld, SessionEvent, World};

/// Heal once health drops below this share of the maximum, in percent.
const HEAL_THRESHOLD_PERCENT: u32 = 40;

/// What an autoplay run went through.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AutoplayReport {
    pub ticks: u32,
    pub battles_started: u32,
    pub battles_won: u32,
    pub conversations: u32,
    pub final_mode: GameMode,
}

pub struct Autoplay {
    max_ticks: u32,
    talked_to: HashSet<NpcId>,
    report: AutoplayReport,
}

impl Autoplay {
    pub fn new(max_ticks: u32) -> Self {
        Self {
            max_ticks,
            talked_to: HashSet::new(),
            report: AutoplayReport::default(),
        }
    }

    /// Plays from the main menu until the game ends or the tick limit hits.
    pub fn run(mut self, session: &mut GameSession<GridWorld>) -> Result<AutoplayReport> {
        session.on_confirm()?;

        while self.report.ticks < self.max_ticks {
            self.report.ticks += 1;
            if !self.tick(session)? {
                break;
            }
        }

        self.report.final_mode = session.current_mode();
        tracing::info!(
            ticks = self.report.ticks,
            battles = self.report.battles_won,
            mode = %self.report.final_mode,
            "Autoplay finished"
        );
        Ok(self.report)
    }

    /// One tick of input plus the session update. Returns whether to go on.
    fn tick(&mut self, session: &mut GameSession<GridWorld>) -> Result<bool> {
        let event = match session.current_mode() {
            GameMode::World => self.explore(session)?,
            GameMode::Battle => self.fight(session)?,
            GameMode::Dialogue => session.on_confirm()?,
            GameMode::Paused => session.on_pause_toggle()?,
            GameMode::MainMenu | GameMode::GameOver | GameMode::Victory => return Ok(false),
        };
        self.record(&event);

        let event = session.update()?;
        self.record(&event);
        Ok(true)
    }

    fn explore(&mut self, session: &mut GameSession<GridWorld>) -> Result<SessionEvent> {
        let fresh_npc = session
            .world()
            .npc_in_range()
            .filter(|npc| self.talked_to.insert(*npc));
        if fresh_npc.is_some() {
            return Ok(session.on_interact()?);
        }

        let Some((dx, dy)) = heading(session.world()) else {
            tracing::warn!("No enemies left to find");
            return Ok(SessionEvent::Idle);
        };
        Ok(session.on_move(dx, dy)?)
    }

    fn fight(&mut self, session: &mut GameSession<GridWorld>) -> Result<SessionEvent> {
        let Some(battle) = session.state().battle.as_ref() else {
            return Ok(SessionEvent::Idle);
        };
        if battle.current_turn() == Turn::Enemy {
            // The enemies act in the update below.
            return Ok(SessionEvent::Idle);
        }

        let player = &session.state().player;
        let low = player.health() * 100 < player.max_health() * HEAL_THRESHOLD_PERCENT;
        let action = if low && player.heal.is_ready() {
            BattleAction::Heal
        } else {
            BattleAction::Skill
        };
        Ok(session.on_battle_action(action)?)
    }

    fn record(&mut self, event: &SessionEvent) {
        match event {
            SessionEvent::BattleStarted { .. } => self.report.battles_started += 1,
            SessionEvent::BattleWon { .. } | SessionEvent::GameWon => {
                self.report.battles_won += 1
            }
            SessionEvent::DialogueStarted { .. } => self.report.conversations += 1,
            _ => {}
        }
    }
}

/// Unit step toward the closest enemy.
fn heading(world: &GridWorld) -> Option<(i32, i32)> {
    let player = world.player_position();
    world
        .enemy_ids()
        .into_iter()
        .filter_map(|id| world.enemy_position(id))
        .min_by_key(|enemy| {
            let dx = i64::from(enemy.x - player.x);
            let dy = i64::from(enemy.y - player.y);
            dx * dx + dy * dy
        })
        .map(|enemy| ((enemy.x - player.x).signum(), (enemy.y - player.y).signum()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lorma_runtime::OracleManager;

    fn session() -> GameSession<GridWorld> {
        GameSession::builder()
            .oracles(OracleManager::default())
            .world(GridWorld::default())
            .build()
            .unwrap()
    }

    #[test]
    fn finds_a_fight_quickly() {
        let mut session = session();
        let report = Autoplay::new(200).run(&mut session).unwrap();

        assert!(report.ticks <= 200);
        assert!(report.battles_started >= 1);
        assert_ne!(report.final_mode, GameMode::MainMenu);
    }

    #[test]
    fn stops_at_the_tick_limit() {
        let mut session = session();
        let report = Autoplay::new(1).run(&mut session).unwrap();
        assert_eq!(report.ticks, 1);
        assert_eq!(report.final_mode, GameMode::World);
    }
}
