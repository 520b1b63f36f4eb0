//! Agent behavior module
//!
//! Reactive FSM: Idle/Patrol/Chase/Attack/Flee по distance до цели +
//! zone triggers. Контроллер НЕ трогает позиции/velocity напрямую —
//! только команды навигации/анимации (fire-and-forget).

use bevy::prelude::*;

pub mod components;
pub mod events;
pub mod systems;

// Re-export основных типов
pub use components::{AgentBehavior, AgentState, BehaviorConfig, PatrolRoute};
pub use events::{ZoneTriggerEvent, DANGER_ZONE_TAG};

/// Agent Behavior Plugin
///
/// Регистрирует behavior системы в FixedUpdate. Порядок выполнения:
/// 1. activate_spawned_agents — Idle → Patrol для агентов с маршрутом
/// 2. zone_trigger_reactions — DangerZone preemption (между тиками)
/// 3. agent_fsm_tick — distance policy + команды
pub struct AgentBehaviorPlugin;

impl Plugin for AgentBehaviorPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<ZoneTriggerEvent>()
            .add_event::<crate::movement::NavigationCommand>()
            .add_event::<crate::animation::AnimationCommand>()
            .register_type::<AgentBehavior>()
            .register_type::<AgentState>()
            .register_type::<BehaviorConfig>()
            .register_type::<PatrolRoute>()
            .add_systems(
                FixedUpdate,
                (
                    systems::activate_spawned_agents,
                    systems::zone_trigger_reactions,
                    systems::agent_fsm_tick,
                )
                    .chain(), // Последовательное выполнение для детерминизма
            );
    }
}
