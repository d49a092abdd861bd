//! Process models.
//!
//! Provides the input tuple ([`ProcessSpec`]) and the per-run process
//! state ([`ProcessRecord`]) that scheduling algorithms mutate.
//!
//! # Field Mappings
//!
//! | u-cpusched | Textbook | Meaning |
//! |------------|----------|---------|
//! | `arrival_time` | AT | Time the process becomes ready |
//! | `burst_time` | BT | Total CPU demand |
//! | `completion_time` | CT | Time the process finishes |
//! | `turnaround_time` | TAT | CT - AT |
//! | `waiting_time` | WT | TAT - BT |
//! | `response_time` | RT | First dispatch - AT |

mod process;

pub use process::{ProcessId, ProcessRecord, ProcessSpec};
