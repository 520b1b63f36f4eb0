//! ECS Components для агентов
//!
//! Организация по доменам:
//! - agent: marker + tracked target (Agent, TrackedTarget)
//! - movement: navigation feedback от engine (NavigationFeedback)
//! - animation: параметры rig'а (AnimationRig)
//! - ai: behavior FSM (AgentBehavior, BehaviorConfig, PatrolRoute)

pub mod agent;
pub mod ai;
pub mod animation;
pub mod movement;

// Re-exports для удобного импорта
pub use agent::*;
pub use ai::*;
pub use animation::*;
pub use movement::*;
