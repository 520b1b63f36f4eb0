//! PROWL Simulation Core
//!
//! ECS-симуляция поведения автономных агентов на Bevy 0.16 (strategic layer).
//!
//! HYBRID ARCHITECTURE:
//! - ECS = strategic layer (behavior FSM, patrol routes, latches)
//! - Engine = tactical layer (pathfinding, animation playback, физика, триггеры)
//!
//! Граница между слоями:
//! - ECS → Engine: [`NavigationCommand`] / [`AnimationCommand`] events (fire-and-forget)
//! - Engine → ECS: [`NavigationFeedback`] компонент + [`ZoneTriggerEvent`] events

use bevy::prelude::*;

// Публичные модули
pub mod ai;
pub mod animation;
pub mod components;
pub mod logger;
pub mod movement;

// Re-export базовых типов для удобства
pub use ai::{
    AgentBehavior, AgentBehaviorPlugin, AgentState, BehaviorConfig, PatrolRoute, ZoneTriggerEvent,
    DANGER_ZONE_TAG,
};
pub use animation::{AnimationCommand, ATTACK_PARAM, SPEED_PARAM};
pub use components::*;
pub use movement::NavigationCommand;

// Re-export logger (crate::log(...) используется в системах)
pub use logger::{init_logger, log, log_error, log_info, log_warning};

/// Главный plugin симуляции (объединяет все подсистемы)
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app
            // Fixed timestep 60Hz для simulation tick (легче считать интервалы)
            .insert_resource(Time::<Fixed>::from_hz(60.0))
            // Подсистемы (ECS strategic layer)
            .add_plugins(AgentBehaviorPlugin);
    }
}

/// Создаёт minimal Bevy App для headless симуляции
pub fn create_headless_app() -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(Time::<Fixed>::from_hz(60.0)); // 60Hz FixedUpdate

    app
}

/// Snapshot мира для сравнения детерминизма
///
/// Сериализуем компоненты в байты через Debug (простейший способ),
/// сортировка по Entity ID для стабильного порядка.
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, _)| entity.index());

    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
