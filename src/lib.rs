//! Polymorphic tagged objects with type-preserving duplication.
//!
//! A registry of heterogeneous trait objects that render themselves,
//! duplicate without losing their runtime variant, answer downcast
//! queries, and raise failure kinds that are caught by exact kind.
//! The [`demo`] module scripts the whole sequence against any writer;
//! the binary runs it on stdout.

pub mod demo;
pub mod error;
pub mod id;
pub mod object;
pub mod registry;

pub use error::DemoFailure;
pub use id::{IdGenerator, ObjectId};
pub use object::{as_special, is_special, BasicObject, SpecialObject, TaggedObject};
pub use registry::ObjectRegistry;
