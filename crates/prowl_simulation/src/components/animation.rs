//! Animation компоненты: параметры rig'а агента

use bevy::prelude::*;

use crate::animation::{ATTACK_PARAM, SPEED_PARAM};

/// Набор animation параметров, которые экспонирует rig агента
///
/// Capability check перед отправкой SetBool: rig без "Attack" параметра —
/// recoverable диагностика (логируем, retry каждый тик), не краш.
/// Заполняется host'ом при спавне из данных animation controller'а.
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct AnimationRig {
    pub params: Vec<String>,
}

impl Default for AnimationRig {
    fn default() -> Self {
        // Стандартный locomotion rig
        Self {
            params: vec![SPEED_PARAM.to_string(), ATTACK_PARAM.to_string()],
        }
    }
}

impl AnimationRig {
    pub fn new(params: Vec<String>) -> Self {
        Self { params }
    }

    /// Аналог HasParameter(name) у animation driver'а
    pub fn has_param(&self, name: &str) -> bool {
        self.params.iter().any(|p| p == name)
    }
}
