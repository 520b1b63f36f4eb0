//! Animation command events (ECS → engine layer)

use bevy::prelude::*;

/// Имя bool-параметра атаки в animation rig
pub const ATTACK_PARAM: &str = "Attack";

/// Имя float-параметра скорости (locomotion blend)
pub const SPEED_PARAM: &str = "Speed";

/// Команда animation driver'у (string-keyed параметры rig'а)
///
/// FSM отправляет только известные параметры ([`ATTACK_PARAM`],
/// [`SPEED_PARAM`]); наличие параметра у конкретного rig'а проверяется
/// через AnimationRig ДО отправки SetBool (capability check).
#[derive(Event, Debug, Clone, PartialEq)]
pub enum AnimationCommand {
    /// Установить bool-параметр (например "Attack")
    SetBool {
        entity: Entity,
        param: &'static str,
        value: bool,
    },
    /// Установить float-параметр (например "Speed")
    SetFloat {
        entity: Entity,
        param: &'static str,
        value: f32,
    },
}
