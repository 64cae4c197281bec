//! In-memory world: square actors on a bounded map.

use lorma_content::Spawns;
use lorma_core::{EnemyId, NpcId, Position};

use super::World;

/// Geometry and movement tuning of a [`GridWorld`].
#[derive(Clone, Debug, PartialEq)]
pub struct WorldConfig {
    pub map_width: i32,
    pub map_height: i32,
    /// Side of every actor's collision square, in pixels.
    pub actor_size: i32,
    /// Pixels the player moves per step.
    pub player_speed: i32,
    /// Enemies closer than this chase the player.
    pub aggro_range: f32,
    /// Pixels an enemy moves per step while chasing.
    pub enemy_step: f32,
    /// NPCs closer than this (center to center) can be talked to.
    pub interaction_range: f32,
}

impl WorldConfig {
    pub const MAP_WIDTH: i32 = 2000;
    pub const MAP_HEIGHT: i32 = 2000;
    pub const TILE_SIZE: i32 = 32;
    pub const PLAYER_SPEED: i32 = 4;
    pub const AGGRO_RANGE: f32 = 150.0;
    pub const ENEMY_STEP: f32 = 1.0;
    pub const INTERACTION_RANGE: f32 = 100.0;
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            map_width: Self::MAP_WIDTH,
            map_height: Self::MAP_HEIGHT,
            actor_size: Self::TILE_SIZE,
            player_speed: Self::PLAYER_SPEED,
            aggro_range: Self::AGGRO_RANGE,
            enemy_step: Self::ENEMY_STEP,
            interaction_range: Self::INTERACTION_RANGE,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Point {
    x: f32,
    y: f32,
}

impl Point {
    fn from_position(position: Position) -> Self {
        Self {
            x: position.x as f32,
            y: position.y as f32,
        }
    }

    fn distance(self, other: Self) -> f32 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// A [`World`] with axis-aligned collision and a chase-the-player AI.
///
/// Positions are top-left corners; every actor is an `actor_size` square.
#[derive(Clone, Debug)]
pub struct GridWorld {
    config: WorldConfig,
    player: Position,
    enemies: Vec<(EnemyId, Point)>,
    npcs: Vec<(NpcId, Point)>,
}

impl GridWorld {
    pub fn new(config: WorldConfig) -> Self {
        Self {
            config,
            player: Position::ORIGIN,
            enemies: Vec::new(),
            npcs: Vec::new(),
        }
    }

    /// Built and populated from the spawn records.
    pub fn from_spawns(config: WorldConfig, spawns: &Spawns) -> Self {
        let mut world = Self::new(config);
        world.regenerate(spawns);
        world
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Current enemy position, rounded to whole pixels.
    pub fn enemy_position(&self, id: EnemyId) -> Option<Position> {
        self.enemy(id)
            .map(|point| Position::new(point.x.round() as i32, point.y.round() as i32))
    }

    pub fn place_player(&mut self, position: Position) {
        self.player = self.clamp_player(position);
    }

    fn enemy(&self, id: EnemyId) -> Option<Point> {
        self.enemies
            .iter()
            .find(|(enemy, _)| *enemy == id)
            .map(|(_, point)| *point)
    }

    fn clamp_player(&self, position: Position) -> Position {
        let max_x = (self.config.map_width - self.config.actor_size).max(0);
        let max_y = (self.config.map_height - self.config.actor_size).max(0);
        Position::new(position.x.clamp(0, max_x), position.y.clamp(0, max_y))
    }

    fn player_point(&self) -> Point {
        Point::from_position(self.player)
    }

    fn center(&self, point: Point) -> Point {
        let half = self.config.actor_size as f32 / 2.0;
        Point {
            x: point.x + half,
            y: point.y + half,
        }
    }

    fn chase(&mut self) {
        let target = self.player_point();
        let WorldConfig {
            aggro_range,
            enemy_step,
            ..
        } = self.config;

        for (_, enemy) in &mut self.enemies {
            let distance = enemy.distance(target);
            if distance < aggro_range && distance > 0.0 {
                let step = enemy_step.min(distance);
                enemy.x += (target.x - enemy.x) / distance * step;
                enemy.y += (target.y - enemy.y) / distance * step;
            }
        }
    }
}

impl Default for GridWorld {
    fn default() -> Self {
        Self::new(WorldConfig::default())
    }
}

impl World for GridWorld {
    fn regenerate(&mut self, spawns: &Spawns) {
        self.player = self.clamp_player(spawns.player_start);
        self.enemies = spawns
            .enemies
            .iter()
            .map(|spawn| (spawn.id, Point::from_position(spawn.position)))
            .collect();
        self.npcs = spawns
            .npcs
            .iter()
            .map(|spawn| (spawn.id, Point::from_position(spawn.position)))
            .collect();
    }

    fn step(&mut self, dx: i32, dy: i32) {
        let speed = self.config.player_speed;
        let moved = Position::new(
            self.player.x + dx.signum() * speed,
            self.player.y + dy.signum() * speed,
        );
        self.player = self.clamp_player(moved);
        self.chase();
    }

    fn player_position(&self) -> Position {
        self.player
    }

    fn enemy_ids(&self) -> Vec<EnemyId> {
        self.enemies.iter().map(|(id, _)| *id).collect()
    }

    fn player_collides_with_enemy(&self, id: EnemyId) -> bool {
        let Some(enemy) = self.enemy(id) else {
            return false;
        };
        let player = self.player_point();
        let size = self.config.actor_size as f32;

        player.x < enemy.x + size
            && enemy.x < player.x + size
            && player.y < enemy.y + size
            && enemy.y < player.y + size
    }

    fn npc_ids(&self) -> Vec<NpcId> {
        self.npcs.iter().map(|(id, _)| *id).collect()
    }

    fn player_near_npc(&self, id: NpcId) -> bool {
        self.npcs
            .iter()
            .find(|(npc, _)| *npc == id)
            .is_some_and(|(_, point)| {
                self.center(self.player_point()).distance(self.center(*point))
                    < self.config.interaction_range
            })
    }

    fn remove_enemies(&mut self, ids: &[EnemyId]) {
        self.enemies.retain(|(id, _)| !ids.contains(id));
    }
}
