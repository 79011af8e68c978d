pub mod context;
pub mod entry;
pub mod field_order;
pub mod fields;
pub mod level;

pub use context::Context;
pub use entry::Entry;
pub use field_order::{field_order, reserved_position, KeyOrder, RESERVED_KEYS};
pub use fields::Fields;
pub use level::Level;
