//! Movement events (граница с navigation service)

pub mod events;

pub use events::NavigationCommand;
