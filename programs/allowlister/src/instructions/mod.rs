pub mod create_raffle;
pub mod draw;
pub mod draw_committed;
pub mod get_winners;
pub mod receive_randomness;
pub mod register;
#[cfg(feature = "switchboard")]
pub mod settle_switchboard_randomness;

pub use create_raffle::*;
pub use draw::*;
pub use draw_committed::*;
pub use get_winners::*;
pub use receive_randomness::*;
pub use register::*;
#[cfg(feature = "switchboard")]
pub use settle_switchboard_randomness::*;
