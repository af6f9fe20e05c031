pub mod logging;
pub mod utils;

mod enum_helpers;
pub use enum_helpers::*;
