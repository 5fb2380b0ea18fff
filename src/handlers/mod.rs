pub mod approve;
pub mod health;
pub mod pending;
pub mod submit;

pub use approve::approve_handler;
pub use health::health_handler;
pub use pending::pending_handler;
pub use submit::submit_handler;
