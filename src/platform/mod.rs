//! Platform abstraction layer
//!
//! Turns host pointer events into simulation input.

pub mod input;

pub use input::HeadInput;
