//! Navigation command events (ECS → engine layer)

use bevy::prelude::*;

/// Команда навигации для агента (выполняется engine NavigationAgent)
///
/// Архитектура:
/// - FSM пишет NavigationCommand (high-level intent, fire-and-forget)
/// - Engine bridge читает events и конвертирует в NavigationAgent calls
/// - Feedback возвращается через NavigationFeedback компонент
#[derive(Event, Debug, Clone, PartialEq)]
pub enum NavigationCommand {
    /// Двигаться к позиции (world coordinates)
    SetDestination { entity: Entity, position: Vec3 },
    /// Остановиться немедленно (engine сбрасывает velocity в ноль)
    Stop { entity: Entity },
    /// Возобновить движение после Stop (destination сохраняется)
    Resume { entity: Entity },
}
