pub mod base;
pub mod experience;
