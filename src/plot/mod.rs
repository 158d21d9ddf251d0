//! Presentation layer for `SliceView`s. Nothing in `boundary` depends on it;
//! swap it for any other renderer.

pub mod ascii;
pub mod png;
pub mod shade;

pub use shade::region_color;
