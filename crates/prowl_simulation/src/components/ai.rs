//! AI компоненты: state machine, config, patrol route

// NOTE: AgentBehavior, BehaviorConfig и PatrolRoute определены в crate::ai module
// Экспортируем их здесь для единообразия, но они живут в ai/components/fsm.rs

// Re-export из ai module (избегаем дублирования)
pub use crate::ai::{AgentBehavior, AgentState, BehaviorConfig, PatrolRoute};
