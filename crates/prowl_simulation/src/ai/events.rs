//! AI Events — события от engine layer для behavior систем
//!
//! Spatial trigger source (Area/Collider overlap в host engine) →
//! ZoneTriggerEvent → FSM preemption (Flee/Patrol override).

use bevy::prelude::*;

/// Tag зоны, вызывающей бегство. Остальные tags игнорируются.
pub const DANGER_ZONE_TAG: &str = "DangerZone";

/// Zone trigger события от engine layer (enter/exit overlap callbacks)
///
/// Host отправляет через Bevy Events когда:
/// - Entered: агент вошёл в зону с данным tag
/// - Exited: агент вышел из зоны
///
/// Доставка — синхронно, между simulation ticks (single-writer model).
#[derive(Event, Debug, Clone)]
pub enum ZoneTriggerEvent {
    /// Агент вошёл в зону
    Entered {
        /// Entity агента (у кого сработал overlap)
        agent: Entity,
        /// Категория зоны (например "DangerZone")
        tag: String,
    },

    /// Агент вышел из зоны
    Exited {
        /// Entity агента
        agent: Entity,
        /// Категория зоны
        tag: String,
    },
}
