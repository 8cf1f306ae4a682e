//! Owning collection for heterogeneous tagged objects.

use std::io::{self, Write};

use crate::id::ObjectId;
use crate::object::TaggedObject;

/// Owns every registered object and releases them together.
///
/// Objects live boxed behind the [`TaggedObject`] trait, so base and special
/// variants (and different payload types) can share one collection.
#[derive(Default)]
pub struct ObjectRegistry {
    objects: Vec<Box<dyn TaggedObject>>,
}

impl ObjectRegistry {
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Takes ownership of `object`. It is released by [`clear`] or when the
    /// registry is dropped.
    ///
    /// [`clear`]: ObjectRegistry::clear
    pub fn register(&mut self, object: Box<dyn TaggedObject>) {
        self.objects.push(object);
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Object at `index` in registration order.
    pub fn get(&self, index: usize) -> Option<&dyn TaggedObject> {
        self.objects.get(index).map(|object| object.as_ref())
    }

    /// First registered object carrying `id`.
    pub fn find_by_id(&self, id: ObjectId) -> Option<&dyn TaggedObject> {
        self.objects
            .iter()
            .find(|object| object.id() == id)
            .map(|object| object.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn TaggedObject> + '_ {
        self.objects.iter().map(|object| object.as_ref())
    }

    /// Writes one rendered line per object, in registration order.
    pub fn render_all(&self, sink: &mut dyn Write) -> io::Result<()> {
        for object in &self.objects {
            writeln!(sink, "{object}")?;
        }
        Ok(())
    }

    /// Drops every owned object now.
    pub fn clear(&mut self) {
        self.objects.clear();
    }
}
