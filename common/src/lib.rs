//! Circular heading arithmetic shared by the holding-pattern tools.
//!
//! Headings are whole degrees in `(0, 360]`, with 360 standing for north. Every
//! operation keeps results inside that domain, so there is no `0` heading
//! anywhere in the workspace.

pub use rand;
pub use serde;

pub mod constants;
pub mod maths;
pub mod structs;
