//! Movement компоненты: navigation feedback от engine layer

use bevy::prelude::*;

/// Path-following feedback от navigation service (engine layer)
///
/// Архитектура:
/// - ECS отправляет NavigationCommand (high-level intent)
/// - Engine NavigationAgent выполняет pathfinding и пишет сюда
///   remaining distance + velocity каждый physics frame
/// - FSM читает feedback на следующем тике (patrol arrival, Speed anim)
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct NavigationFeedback {
    /// Оставшаяся дистанция до текущего destination (метры)
    pub remaining_distance: f32,
    /// Текущая velocity агента (м/с)
    pub velocity: Vec3,
}

impl Default for NavigationFeedback {
    fn default() -> Self {
        Self {
            // INFINITY: свежезаспавненный агент не должен симулировать
            // "waypoint достигнут" до первого feedback от engine
            remaining_distance: f32::INFINITY,
            velocity: Vec3::ZERO,
        }
    }
}
