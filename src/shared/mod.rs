// Shared kernel used by every bounded context

pub mod application; // Shared application layer patterns
pub mod config; // Environment-driven configuration
pub mod errors; // Shared error types
pub mod utils; // Shared utilities (logging)

pub use config::StorefrontConfig;
