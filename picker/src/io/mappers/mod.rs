pub mod config_mapper;
pub mod intent_mapper;
pub mod session_mapper;

pub use config_mapper::ConfigMapper;
pub use intent_mapper::IntentMapper;
pub use session_mapper::SessionMapper;
