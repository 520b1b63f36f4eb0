//! FSM behavior components (state machine, config, patrol route).

use bevy::prelude::*;

/// Состояния behavior FSM агента
///
/// Переходы выполняются ТОЛЬКО системами `ai::systems` (distance policy
/// + zone triggers). Внешний код state не трогает — только читает.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
pub enum AgentState {
    /// Idle — начальное состояние, если patrol route не задан
    #[default]
    Idle,

    /// Patrol — обход waypoint'ов маршрута по кругу
    Patrol,

    /// Chase — преследование цели (distance ≤ chase_distance)
    Chase,

    /// Attack — цель в радиусе атаки, навигация остановлена
    Attack,

    /// Flee — бегство от цели / DangerZone
    Flee,
}

/// Behavior controller агента: текущий state + latches
///
/// Latches предотвращают спам команд каждый тик:
/// - `attack_engaged` — "start attack" уже отправлен аниматору
/// - `flee_engaged` — агент внутри DangerZone (mirror zone residency)
///
/// Сбрасываются только переходами FSM, никогда внешним кодом.
#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component)]
pub struct AgentBehavior {
    pub state: AgentState,
    pub attack_engaged: bool,
    pub flee_engaged: bool,
}

/// Параметры behavior policy (distance thresholds + константы движения)
///
/// Policy предполагает `attack_distance <= chase_distance` (не enforced:
/// нарушение даёт осцилляцию Chase↔Attack, а не панику).
#[derive(Component, Debug, Clone, Reflect, serde::Serialize, serde::Deserialize)]
#[reflect(Component)]
pub struct BehaviorConfig {
    /// Радиус атаки (метры)
    pub attack_distance: f32,
    /// Радиус обнаружения/преследования (метры)
    pub chase_distance: f32,
    /// Радиус бегства: Flee → Patrol когда цель дальше (метры)
    pub flee_distance: f32,
    /// Длина flee-вектора от текущей позиции (метры)
    pub flee_radius: f32,
    /// Порог "waypoint достигнут" по remaining distance навигации (метры)
    pub arrival_epsilon: f32,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            attack_distance: 2.0,
            chase_distance: 10.0,
            flee_distance: 5.0,
            flee_radius: 5.0,
            arrival_epsilon: 1.0,
        }
    }
}

/// Patrol маршрут: фиксированный список waypoint'ов + cursor
///
/// Cursor wraps по модулю длины. Advancement = post-increment:
/// командуем waypoint под ТЕКУЩИМ cursor, потом инкремент.
/// Реконфигурация маршрута — только между тиками (single-writer model).
#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component)]
pub struct PatrolRoute {
    waypoints: Vec<Vec3>,
    cursor: usize,
}

impl PatrolRoute {
    pub fn new(waypoints: Vec<Vec3>) -> Self {
        Self {
            waypoints,
            cursor: 0,
        }
    }

    /// Waypoint под текущим cursor (без advancement), None если маршрут пуст
    pub fn current(&self) -> Option<Vec3> {
        self.waypoints.get(self.cursor % self.waypoints.len().max(1)).copied()
    }

    /// Advancement: возвращает waypoint который надо скомандовать,
    /// двигает cursor на следующий (post-increment, wrap по модулю).
    ///
    /// Пустой маршрут — no-op (None), не ошибка.
    pub fn advance(&mut self) -> Option<Vec3> {
        if self.waypoints.is_empty() {
            return None;
        }
        // Cursor мог выйти за границы после reconfigure — нормализуем
        self.cursor %= self.waypoints.len();
        let waypoint = self.waypoints[self.cursor];
        self.cursor = (self.cursor + 1) % self.waypoints.len();
        Some(waypoint)
    }

    /// Заменить маршрут (сбрасывает cursor на начало)
    pub fn set_waypoints(&mut self, waypoints: Vec<Vec3>) {
        self.waypoints = waypoints;
        self.cursor = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }
}
