//! Базовые компоненты агента: Agent marker, TrackedTarget

use bevy::prelude::*;

use crate::ai::{AgentBehavior, BehaviorConfig, PatrolRoute};
use crate::components::{AnimationRig, NavigationFeedback};

/// Агент под управлением behavior FSM
///
/// Автоматически добавляет controller, config, route, target и feedback
/// через Required Components — spawn site переопределяет только то, что
/// конфигурирует (маршрут, цель).
#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component)]
#[require(
    AgentBehavior,
    BehaviorConfig,
    PatrolRoute,
    TrackedTarget,
    NavigationFeedback,
    AnimationRig,
    Transform
)]
pub struct Agent;

/// Отслеживаемая цель агента (target provider)
///
/// None = цель не подключена → FSM tick полностью no-op (fail-safe idle,
/// не ошибка). Позиция цели читается из её Transform.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct TrackedTarget(pub Option<Entity>);
