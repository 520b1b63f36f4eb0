//! Animation events (граница с animation driver)

pub mod events;

pub use events::{AnimationCommand, ATTACK_PARAM, SPEED_PARAM};
