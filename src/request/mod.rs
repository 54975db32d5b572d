//! Request schema and boundary validation
//!
//! Inbound goal requests are parsed into an explicit record once, here, and
//! turned into typed engine inputs. Nothing untyped crosses into `planner`.

mod goal;
mod numeric;

pub use goal::{GoalRequest, months_until};
pub use numeric::{coerce_number, coerce_integer};
