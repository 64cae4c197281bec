//! Turn-based battle engine.
//!
//! One player against one or more enemies. Turns alternate strictly: the
//! player acts once, then every living enemy acts once in list order. The
//! battle never owns the player; operations borrow it so experience and
//! health changes land directly on the caller's state.
//!
//! All randomness is drawn from the shared [`Dice`], one roll per check.

mod errors;
mod log;
mod types;

pub use errors::BattleError;
pub use log::{BattleLog, BattleLogEntry};
pub use types::{AttackKind, BattleAction, BattleOutcome, Turn, VictoryRewards};

use crate::combat::{check_critical, check_dodge, critical_damage, mitigate, skill_damage};
use crate::config::GameConfig;
use crate::env::Dice;
use crate::state::EnemyId;
use crate::stats::{AbilityError, Enemy, Player};

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Battle {
    enemies: Vec<Enemy>,
    current_turn: Turn,
    log: BattleLog,
    turn_counter: u32,
    rewards: Option<VictoryRewards>,
}

impl Battle {
    /// Starts a battle.
    ///
    /// The player opens only when strictly faster than every enemy.
    pub fn start(
        player: &Player,
        enemies: impl IntoIterator<Item = Enemy>,
    ) -> Result<Self, BattleError> {
        let enemies: Vec<Enemy> = enemies.into_iter().collect();
        let fastest_enemy = enemies
            .iter()
            .map(|enemy| enemy.character.speed)
            .max()
            .ok_or(BattleError::NoEnemies)?;

        let current_turn = if player.speed() > fastest_enemy {
            Turn::Player
        } else {
            Turn::Enemy
        };

        let mut log = BattleLog::new();
        log.push(BattleLogEntry::Started {
            player: player.name().to_owned(),
            enemies: enemies.iter().map(|enemy| enemy.name().to_owned()).collect(),
            first: current_turn,
        });

        Ok(Self {
            enemies,
            current_turn,
            log,
            turn_counter: 0,
            rewards: None,
        })
    }

    pub fn current_turn(&self) -> Turn {
        self.current_turn
    }

    /// Completed enemy phases.
    pub fn turn_counter(&self) -> u32 {
        self.turn_counter
    }

    /// Enemies in battle order, including defeated ones.
    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn log(&self) -> &BattleLog {
        &self.log
    }

    /// What the player was granted, once the battle is won.
    pub fn rewards(&self) -> Option<&VictoryRewards> {
        self.rewards.as_ref()
    }

    pub fn enemy_ids(&self) -> impl Iterator<Item = EnemyId> + '_ {
        self.enemies.iter().map(|enemy| enemy.id)
    }

    pub fn defeated_enemy_ids(&self) -> Vec<EnemyId> {
        self.enemies
            .iter()
            .filter(|enemy| !enemy.is_alive())
            .map(|enemy| enemy.id)
            .collect()
    }

    pub fn all_enemies_defeated(&self) -> bool {
        self.enemies.iter().all(|enemy| !enemy.is_alive())
    }

    /// Whether a final boss is among the defeated enemies.
    pub fn final_boss_defeated(&self) -> bool {
        self.enemies
            .iter()
            .any(|enemy| enemy.final_boss && !enemy.is_alive())
    }

    pub fn is_over(&self, player: &Player) -> bool {
        player.is_defeated() || self.all_enemies_defeated()
    }

    /// Dispatches one player action.
    pub fn perform(
        &mut self,
        action: BattleAction,
        player: &mut Player,
        dice: &mut Dice,
    ) -> Result<BattleOutcome, BattleError> {
        match action {
            BattleAction::Basic => self.player_attack(AttackKind::Basic, player, dice),
            BattleAction::Skill => self.player_attack(AttackKind::Skill, player, dice),
            BattleAction::Heal => self.player_heal(player),
        }
    }

    /// Attacks every living enemy.
    ///
    /// Each target rolls its own critical hit. When the last enemy falls the
    /// combined experience reward is granted and `Victory` returned.
    pub fn player_attack(
        &mut self,
        kind: AttackKind,
        player: &mut Player,
        dice: &mut Dice,
    ) -> Result<BattleOutcome, BattleError> {
        self.ensure_turn(player, Turn::Player)?;

        let base = match kind {
            AttackKind::Basic => player.attack_power(),
            AttackKind::Skill => skill_damage(player.attack_power()),
        };

        for enemy in self.enemies.iter_mut().filter(|enemy| enemy.is_alive()) {
            let critical = check_critical(player.critical_chance, dice.roll_d100());
            let damage = if critical { critical_damage(base) } else { base };
            let defeated = enemy.take_damage(damage);

            self.log.push(BattleLogEntry::PlayerAttack {
                player: player.name().to_owned(),
                target: enemy.name().to_owned(),
                kind,
                damage,
                critical,
                defeated,
            });
        }

        if self.all_enemies_defeated() {
            self.grant_victory(player);
            return Ok(BattleOutcome::Victory);
        }

        self.current_turn = Turn::Enemy;
        Ok(BattleOutcome::Continue)
    }

    /// Uses the player's heal.
    ///
    /// On cooldown the refusal is logged, the turn stays with the player and
    /// the cooldown error is returned.
    pub fn player_heal(&mut self, player: &mut Player) -> Result<BattleOutcome, BattleError> {
        self.ensure_turn(player, Turn::Player)?;

        match player.use_heal() {
            Ok(amount) => {
                self.log.push(BattleLogEntry::Healed {
                    player: player.name().to_owned(),
                    amount,
                });
                self.current_turn = Turn::Enemy;
                Ok(BattleOutcome::Continue)
            }
            Err(error) => {
                let AbilityError::OnCooldown { remaining } = error;
                self.log.push(BattleLogEntry::HealOnCooldown { remaining });
                Err(error.into())
            }
        }
    }

    /// Every living enemy acts once, in order.
    ///
    /// Stops at the first blow that brings the player to 0. Otherwise hands
    /// the turn back to the player and ticks their cooldowns.
    pub fn enemy_turn(
        &mut self,
        player: &mut Player,
        dice: &mut Dice,
    ) -> Result<BattleOutcome, BattleError> {
        self.ensure_turn(player, Turn::Enemy)?;

        for enemy in self.enemies.iter_mut().filter(|enemy| enemy.is_alive()) {
            if check_dodge(player.speed(), dice.roll_d100()) {
                self.log.push(BattleLogEntry::Dodged {
                    player: player.name().to_owned(),
                    enemy: enemy.name().to_owned(),
                });
                continue;
            }

            let entry = if enemy.has_skills() && dice.chance(GameConfig::ENEMY_SKILL_CHANCE_PERCENT)
            {
                let skill = enemy.choose_skill(dice);
                if skill.is_phase_change() {
                    BattleLogEntry::PhaseChange {
                        enemy: enemy.name().to_owned(),
                    }
                } else {
                    let damage = mitigate(skill.damage, player.defense);
                    player.take_damage(damage);
                    BattleLogEntry::EnemySkill {
                        enemy: enemy.name().to_owned(),
                        skill: skill.name,
                        damage,
                        effect: skill.effect,
                    }
                }
            } else {
                let damage = mitigate(enemy.character.attack_power, player.defense);
                player.take_damage(damage);
                BattleLogEntry::EnemyAttack {
                    enemy: enemy.name().to_owned(),
                    damage,
                }
            };
            self.log.push(entry);

            if player.is_defeated() {
                self.log.push(BattleLogEntry::Defeat {
                    player: player.name().to_owned(),
                });
                return Ok(BattleOutcome::Defeat);
            }
        }

        self.current_turn = Turn::Player;
        self.turn_counter += 1;
        player.tick_cooldowns();
        Ok(BattleOutcome::Continue)
    }

    fn ensure_turn(&self, player: &Player, expected: Turn) -> Result<(), BattleError> {
        if self.is_over(player) {
            return Err(BattleError::BattleOver);
        }
        if self.current_turn != expected {
            return Err(match expected {
                Turn::Player => BattleError::NotPlayersTurn,
                Turn::Enemy => BattleError::NotEnemiesTurn,
            });
        }
        Ok(())
    }

    fn grant_victory(&mut self, player: &mut Player) {
        let experience = self
            .enemies
            .iter()
            .map(|enemy| enemy.experience_reward)
            .fold(0u32, u32::saturating_add);

        self.log.push(BattleLogEntry::Victory { experience });
        let level_ups = player.gain_experience(experience);
        for report in &level_ups {
            self.log.push(BattleLogEntry::LevelUp {
                player: player.name().to_owned(),
                report: *report,
            });
        }
        self.rewards = Some(VictoryRewards {
            experience,
            level_ups,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{FixedRng, SequenceRng};
    use crate::stats::{Character, HealAbility, Phase, Skill, SkillSet};

    fn hero(health: u32, attack: u32, speed: u32) -> Player {
        Player::new(
            Character::new("Hero", 100, attack, speed).with_health(health),
            HealAbility::new(30, 3),
        )
    }

    fn orc(id: u32, health: u32, attack: u32, speed: u32) -> Enemy {
        Enemy::new(EnemyId(id), Character::new("Orc", health, attack, speed))
    }

    #[test]
    fn start_rejects_an_empty_enemy_list() {
        let player = hero(100, 15, 3);
        assert_eq!(
            Battle::start(&player, Vec::new()),
            Err(BattleError::NoEnemies)
        );
    }

    #[test]
    fn speed_tie_goes_to_the_enemy() {
        let player = hero(100, 15, 3);
        let tied = Battle::start(&player, [orc(1, 20, 5, 3)]).unwrap();
        assert_eq!(tied.current_turn(), Turn::Enemy);

        let faster = Battle::start(&player, [orc(1, 20, 5, 2), orc(2, 20, 5, 1)]).unwrap();
        assert_eq!(faster.current_turn(), Turn::Player);
        assert_eq!(faster.turn_counter(), 0);
        assert_eq!(faster.log().len(), 1);
    }

    #[test]
    fn basic_attack_without_crit_leaves_enemy_standing() {
        let mut player = hero(100, 15, 3);
        let mut dice = Dice::new(FixedRng::NEVER, 0);
        let mut battle = Battle::start(&player, [orc(1, 20, 5, 1)]).unwrap();

        let outcome = battle
            .player_attack(AttackKind::Basic, &mut player, &mut dice)
            .unwrap();
        assert_eq!(outcome, BattleOutcome::Continue);
        assert_eq!(battle.enemies()[0].health(), 5);
        assert_eq!(battle.current_turn(), Turn::Enemy);
    }

    #[test]
    fn skill_attack_defeats_and_grants_experience() {
        let mut player = hero(100, 15, 3);
        let mut dice = Dice::new(FixedRng::NEVER, 0);
        let mut battle = Battle::start(&player, [orc(1, 20, 5, 1)]).unwrap();

        let outcome = battle
            .player_attack(AttackKind::Skill, &mut player, &mut dice)
            .unwrap();
        assert_eq!(outcome, BattleOutcome::Victory);
        assert_eq!(battle.enemies()[0].health(), 0);
        assert_eq!(player.experience, GameConfig::DEFAULT_EXPERIENCE_REWARD);
        assert!(battle.is_over(&player));
        assert_eq!(battle.defeated_enemy_ids(), vec![EnemyId(1)]);
    }

    #[test]
    fn critical_hit_scales_damage() {
        let mut player = hero(100, 10, 3).with_critical_chance(100);
        let mut dice = Dice::new(FixedRng::NEVER, 0);
        let mut battle = Battle::start(&player, [orc(1, 50, 5, 1)]).unwrap();

        battle
            .player_attack(AttackKind::Basic, &mut player, &mut dice)
            .unwrap();
        assert_eq!(battle.enemies()[0].health(), 35);
    }

    #[test]
    fn fan_out_attack_skips_dead_enemies() {
        let mut player = hero(100, 15, 3);
        let mut dice = Dice::new(FixedRng::NEVER, 0);
        let mut battle =
            Battle::start(&player, [orc(1, 10, 1, 1), orc(2, 40, 1, 1), orc(3, 40, 1, 1)])
                .unwrap();

        battle
            .player_attack(AttackKind::Basic, &mut player, &mut dice)
            .unwrap();
        let after_first: Vec<u32> = battle.enemies().iter().map(Enemy::health).collect();
        assert_eq!(after_first, vec![0, 25, 25]);

        battle.enemy_turn(&mut player, &mut dice).unwrap();
        let hits_before = battle
            .log()
            .iter()
            .filter(|entry| matches!(entry, BattleLogEntry::PlayerAttack { .. }))
            .count();
        battle
            .player_attack(AttackKind::Basic, &mut player, &mut dice)
            .unwrap();
        let hits_after = battle
            .log()
            .iter()
            .filter(|entry| matches!(entry, BattleLogEntry::PlayerAttack { .. }))
            .count();

        assert_eq!(hits_after - hits_before, 2);
        assert_eq!(battle.enemies()[0].health(), 0);
        assert_eq!(battle.enemies()[1].health(), 10);
    }

    #[test]
    fn victory_grants_the_sum_of_rewards() {
        let mut player = hero(100, 50, 3);
        let mut dice = Dice::new(FixedRng::NEVER, 0);
        let enemies = [
            orc(1, 10, 1, 1).with_experience_reward(60),
            orc(2, 10, 1, 1).with_experience_reward(60),
        ];
        let mut battle = Battle::start(&player, enemies).unwrap();

        let outcome = battle
            .player_attack(AttackKind::Basic, &mut player, &mut dice)
            .unwrap();
        assert_eq!(outcome, BattleOutcome::Victory);
        assert_eq!(player.level, 2);
        assert_eq!(player.experience, 20);
        assert!(matches!(
            battle.log().last(),
            Some(BattleLogEntry::LevelUp { .. })
        ));
    }

    #[test]
    fn rewards_outlive_the_bounded_log() {
        let mut player = hero(100, 50, 3);
        let mut dice = Dice::new(FixedRng::NEVER, 0);
        let hoard = orc(1, 10, 1, 1).with_experience_reward(100_000);
        let mut battle = Battle::start(&player, [hoard]).unwrap();
        assert_eq!(battle.rewards(), None);

        battle
            .player_attack(AttackKind::Basic, &mut player, &mut dice)
            .unwrap();

        let rewards = battle.rewards().unwrap();
        assert_eq!(rewards.experience, 100_000);
        assert_eq!(rewards.level_ups.len(), player.level as usize - 1);
        assert!(rewards.level_ups.len() > GameConfig::BATTLE_LOG_CAPACITY);
        assert_eq!(rewards.level_ups.last().map(|report| report.level), Some(player.level));
        assert_eq!(battle.log().len(), GameConfig::BATTLE_LOG_CAPACITY);
        assert!(
            !battle
                .log()
                .iter()
                .any(|entry| matches!(entry, BattleLogEntry::Victory { .. }))
        );
    }

    #[test]
    fn skilled_enemy_lands_a_mitigated_skill() {
        let mut player = hero(100, 15, 3).with_defense(5);
        let mage = Enemy::new(EnemyId(7), Character::new("Mage", 100, 20, 5)).with_skills(
            SkillSet::new([
                Skill::new("Fireball", 10),
                Skill::new("Dark Magic", 25).with_effect("Critical hit!"),
            ]),
        );
        // dodge miss, skill roll hit, second skill
        let mut dice = Dice::new(SequenceRng::d100([100, 1, 2]), 0);
        let mut battle = Battle::start(&player, [mage]).unwrap();

        let outcome = battle.enemy_turn(&mut player, &mut dice).unwrap();
        assert_eq!(outcome, BattleOutcome::Continue);
        assert_eq!(player.health(), 80);
        assert_eq!(dice.nonce(), 3);
        assert_eq!(
            battle.log().last(),
            Some(&BattleLogEntry::EnemySkill {
                enemy: "Mage".to_owned(),
                skill: "Dark Magic".to_owned(),
                damage: 20,
                effect: Some("Critical hit!".to_owned()),
            })
        );
        assert_eq!(battle.enemies()[0].phase, Phase::One);
    }

    #[test]
    fn every_living_enemy_acts_in_order() {
        let mut player = hero(100, 15, 3);
        let mut dice = Dice::new(FixedRng::NEVER, 0);
        let mut battle = Battle::start(
            &player,
            [
                orc(1, 20, 7, 5),
                Enemy::new(EnemyId(2), Character::new("Goblin", 20, 4, 1)),
            ],
        )
        .unwrap();

        let outcome = battle.enemy_turn(&mut player, &mut dice).unwrap();
        assert_eq!(outcome, BattleOutcome::Continue);
        assert_eq!(player.health(), 89);
        assert_eq!(dice.nonce(), 2);
        assert_eq!(battle.turn_counter(), 1);
        assert_eq!(battle.current_turn(), Turn::Player);

        let hits: Vec<(&str, u32)> = battle
            .log()
            .iter()
            .filter_map(|entry| match entry {
                BattleLogEntry::EnemyAttack { enemy, damage } => Some((enemy.as_str(), *damage)),
                _ => None,
            })
            .collect();
        assert_eq!(hits, vec![("Orc", 7), ("Goblin", 4)]);
    }

    #[test]
    fn lethal_enemy_attack_is_defeat() {
        let mut player = hero(10, 15, 3);
        let mut dice = Dice::new(FixedRng::NEVER, 0);
        let mut battle = Battle::start(&player, [orc(1, 50, 15, 5)]).unwrap();

        let outcome = battle.enemy_turn(&mut player, &mut dice).unwrap();
        assert_eq!(outcome, BattleOutcome::Defeat);
        assert_eq!(player.health(), 0);
        assert!(battle.is_over(&player));
        assert_eq!(
            battle.player_attack(AttackKind::Basic, &mut player, &mut dice),
            Err(BattleError::BattleOver)
        );
    }

    #[test]
    fn defeat_stops_the_remaining_enemies() {
        let mut player = hero(10, 15, 3);
        let mut dice = Dice::new(FixedRng::NEVER, 0);
        let mut battle = Battle::start(&player, [orc(1, 50, 15, 5), orc(2, 50, 15, 5)]).unwrap();

        battle.enemy_turn(&mut player, &mut dice).unwrap();
        let enemy_hits = battle
            .log()
            .iter()
            .filter(|entry| matches!(entry, BattleLogEntry::EnemyAttack { .. }))
            .count();
        assert_eq!(enemy_hits, 1);
        assert_eq!(dice.nonce(), 1);
    }

    #[test]
    fn defense_reduces_damage_to_a_floor_of_one() {
        let mut player = hero(100, 15, 3).with_defense(20);
        let mut dice = Dice::new(FixedRng::NEVER, 0);
        let mut battle = Battle::start(&player, [orc(1, 50, 15, 5)]).unwrap();

        battle.enemy_turn(&mut player, &mut dice).unwrap();
        assert_eq!(player.health(), 99);
        assert_eq!(battle.current_turn(), Turn::Player);
        assert_eq!(battle.turn_counter(), 1);
    }

    #[test]
    fn dodged_attacks_deal_no_damage() {
        let mut player = hero(100, 15, 3);
        let mut dice = Dice::new(FixedRng::ALWAYS, 0);
        let mut battle = Battle::start(&player, [orc(1, 50, 15, 5)]).unwrap();

        battle.enemy_turn(&mut player, &mut dice).unwrap();
        assert_eq!(player.health(), 100);
        assert!(matches!(
            battle.log().last(),
            Some(BattleLogEntry::Dodged { .. })
        ));
    }

    #[test]
    fn acting_out_of_turn_is_rejected_without_changes() {
        let mut player = hero(100, 15, 3);
        let mut dice = Dice::new(FixedRng::NEVER, 0);
        let mut battle = Battle::start(&player, [orc(1, 50, 15, 5)]).unwrap();
        let before = battle.clone();

        assert_eq!(
            battle.player_attack(AttackKind::Basic, &mut player, &mut dice),
            Err(BattleError::NotPlayersTurn)
        );
        assert_eq!(
            battle.player_heal(&mut player),
            Err(BattleError::NotPlayersTurn)
        );
        assert_eq!(battle, before);
        assert_eq!(dice.nonce(), 0);

        battle.enemy_turn(&mut player, &mut dice).unwrap();
        assert_eq!(
            battle.enemy_turn(&mut player, &mut dice),
            Err(BattleError::NotEnemiesTurn)
        );
    }

    #[test]
    fn heal_on_cooldown_keeps_the_turn() {
        let mut player = hero(50, 15, 9);
        let mut dice = Dice::new(FixedRng::NEVER, 0);
        let mut battle = Battle::start(&player, [orc(1, 50, 5, 1)]).unwrap();

        assert_eq!(
            battle.perform(BattleAction::Heal, &mut player, &mut dice),
            Ok(BattleOutcome::Continue)
        );
        assert_eq!(player.health(), 80);
        battle.enemy_turn(&mut player, &mut dice).unwrap();
        assert_eq!(player.heal.cooldown(), 2);

        let result = battle.perform(BattleAction::Heal, &mut player, &mut dice);
        assert_eq!(
            result,
            Err(BattleError::Ability(AbilityError::OnCooldown { remaining: 2 }))
        );
        assert_eq!(battle.current_turn(), Turn::Player);
        assert_eq!(
            battle.log().last(),
            Some(&BattleLogEntry::HealOnCooldown { remaining: 2 })
        );
    }

    #[test]
    fn turns_alternate_until_the_battle_ends() {
        let mut player = hero(100, 10, 9);
        let mut dice = Dice::seeded(1234);
        let mut battle = Battle::start(&player, [orc(1, 60, 4, 1)]).unwrap();

        let mut expected = Turn::Player;
        loop {
            assert_eq!(battle.current_turn(), expected);
            let outcome = match expected {
                Turn::Player => battle.perform(BattleAction::Basic, &mut player, &mut dice),
                Turn::Enemy => battle.enemy_turn(&mut player, &mut dice),
            }
            .unwrap();
            if outcome != BattleOutcome::Continue {
                break;
            }
            expected = match expected {
                Turn::Player => Turn::Enemy,
                Turn::Enemy => Turn::Player,
            };
        }
        assert!(battle.is_over(&player));
    }

    #[test]
    fn boss_phase_change_deals_no_damage() {
        let mut player = hero(100, 15, 3);
        let boss = Enemy::new(EnemyId(7), Character::new("Boss", 100, 20, 5).with_health(40))
            .with_skills(SkillSet::new([Skill::new("Dark Magic", 25)]));
        // dodge miss, skill roll hit
        let mut dice = Dice::new(SequenceRng::d100([100, 1]), 0);
        let mut battle = Battle::start(&player, [boss]).unwrap();

        battle.enemy_turn(&mut player, &mut dice).unwrap();
        assert_eq!(player.health(), 100);
        assert!(matches!(
            battle.log().last(),
            Some(BattleLogEntry::PhaseChange { .. })
        ));
    }

    #[test]
    fn log_stays_bounded_through_a_long_battle() {
        let mut player = hero(100, 1, 9).with_defense(100);
        let mut dice = Dice::new(FixedRng::NEVER, 0);
        let mut battle = Battle::start(&player, [orc(1, 1000, 1, 1)]).unwrap();

        for _ in 0..20 {
            battle
                .player_attack(AttackKind::Basic, &mut player, &mut dice)
                .unwrap();
            battle.enemy_turn(&mut player, &mut dice).unwrap();
        }
        assert_eq!(battle.log().len(), GameConfig::BATTLE_LOG_CAPACITY);
        assert_eq!(battle.turn_counter(), 20);
    }
}
