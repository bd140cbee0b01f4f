//! Holding pattern entry procedures.
//!
//! Given a published hold and the course an aircraft is flying to the holding
//! fix, work out whether it should fly a Direct, Teardrop, or Parallel entry.
//! Around that sit the clearance text a controller would read, a generator of
//! random practice problems and a small interactive quiz.

pub mod config;
pub mod constants;
pub mod entry;
pub mod error;
pub mod hold;
pub mod instructions;
pub mod quiz;
pub mod scenario;
pub mod survey;
