//! Identity types shared by the store, the layout engine and the sketch area.

mod entity_ref;
mod full_ref;
mod table;

pub use entity_ref::{EntityRef, VOID_ROW};
pub use full_ref::FullRef;
pub use table::Table;
