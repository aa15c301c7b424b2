// Utility functions

pub mod dates;
pub mod logger;

pub use dates::*;
pub use logger::*;
