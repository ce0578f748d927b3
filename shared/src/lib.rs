pub mod constants;
pub mod congratulation;
pub mod error;
pub mod prize;
pub mod session;
pub mod shared_wheel_game;
pub mod validation;

pub use error::WheelError;
pub use prize::{Prize, PrizeSet};
