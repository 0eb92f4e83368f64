pub mod answer;
pub mod feed;
pub mod feed_registry;
pub mod protocol_config;
pub mod reporter;
pub mod round;

pub use answer::*;
pub use feed::*;
pub use feed_registry::*;
pub use protocol_config::*;
pub use reporter::*;
pub use round::*;
