//! Type aliases for commonly used shared-state types.
//!
//! The sketch area lives on the UI thread only, so everything here is built
//! on `Rc<RefCell<T>>` rather than on locks.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use umlsketch_core::types::*;
//!
//! // Instead of: Rc<RefCell<Vec<EntityRef>>>
//! let seen: SharedVec<EntityRef> = shared(Vec::new());
//! ```

use std::cell::RefCell;
use std::rc::Rc;

/// A reference-counted, interior-mutable wrapper for single-threaded sharing.
///
/// Use when you need to share mutable state within the UI thread, e.g. a
/// listener closure recording what the marking model announced.
pub type Shared<T> = Rc<RefCell<T>>;

/// A shared vector for single-threaded collection management.
pub type SharedVec<T> = Rc<RefCell<Vec<T>>>;

/// A single-threaded callback receiving one value.
pub type UiDataCallback<T> = Box<dyn Fn(T)>;

/// Wraps a value in [`Shared`].
pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}
