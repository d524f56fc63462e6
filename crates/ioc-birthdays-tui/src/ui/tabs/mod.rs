//! Tab content rendering.

pub mod birthdays;
pub mod roster;
