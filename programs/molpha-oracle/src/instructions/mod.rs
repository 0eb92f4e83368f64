// Protocol and feed administration
pub mod create_feed;
pub mod initialize;
pub mod update_feed_config;
pub mod update_protocol_config;

// Reporter ledger
pub mod manage_reporter;

// Round lifecycle
pub mod close_round;
pub mod finalize_round;
pub mod open_round;
pub mod submit_value;

// Query fees and consumer reads
pub mod fees;
pub mod views;

pub use close_round::*;
pub use create_feed::*;
pub use fees::*;
pub use finalize_round::*;
pub use initialize::*;
pub use manage_reporter::*;
pub use open_round::*;
pub use submit_value::*;
pub use update_feed_config::*;
pub use update_protocol_config::*;
pub use views::*;
