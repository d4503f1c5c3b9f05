pub mod arith;
pub mod convert;
pub mod duration;
pub mod error;
pub mod format;
pub mod parse;
pub mod valid;

pub use arith::{
    add, divide, multiply, round_to_hour, round_to_hours, round_to_minute, round_to_minutes,
    round_to_second, round_to_seconds, subtract,
};
pub use convert::{
    from_hours, from_minutes, from_seconds, normalize, to_hours, to_minutes, to_seconds,
};
pub use duration::{Duration, LooseDuration};
pub use error::{Error, Result};
pub use valid::{is_normal, is_valid, validate};
