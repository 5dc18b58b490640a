//! Schema types for representing column roles.

mod column;
mod table;
mod types;

pub use column::{ColumnProfile, ColumnScore};
pub use table::{Classification, PhoneDetection};
pub use types::{ColumnRole, RoleSource};
