//! The scripted demonstration: build a registry of objects, render them,
//! duplicate one through its base-typed handle, downcast-check another, and
//! raise and catch both failure kinds.

use std::io::{self, Write};

use crate::error::DemoFailure;
use crate::id::IdGenerator;
use crate::object::{is_special, BasicObject, SpecialObject, TaggedObject};
use crate::registry::ObjectRegistry;

/// Always raises the first failure kind.
fn trigger_first_failure() -> Result<(), DemoFailure> {
    Err(DemoFailure::First)
}

/// Always raises the second failure kind.
fn trigger_second_failure() -> Result<(), DemoFailure> {
    Err(DemoFailure::Second)
}

/// Reports whether `object` is the special variant. Both outcomes are
/// ordinary; neither raises a failure.
fn report_downcast(object: &dyn TaggedObject, sink: &mut dyn Write) -> io::Result<()> {
    if is_special(object) {
        writeln!(sink, "Downcast successful. Object is a SpecialObject.")
    } else {
        writeln!(sink, "Downcast failed. Object is not a SpecialObject.")
    }
}

/// Runs the whole sequence against `sink`, writing exactly nine lines.
///
/// Both raised failure kinds are caught by their specific handlers inside;
/// only sink I/O failures escape.
pub fn run<W: Write>(sink: &mut W) -> io::Result<()> {
    let mut ids = IdGenerator::new();
    let mut registry = ObjectRegistry::new();

    registry.register(Box::new(BasicObject::new(
        ids.next_id(),
        String::from("Data 1"),
    )));
    registry.register(Box::new(SpecialObject::new(ids.next_id(), "Data 2")));
    registry.register(Box::new(BasicObject::new(
        ids.next_id(),
        String::from("Data 3"),
    )));

    registry.render_all(sink)?;

    // Revisit the first two through base-typed registry handles.
    if let Some(object) = registry.get(0) {
        writeln!(sink, "Object 1: {object}")?;
    }
    if let Some(object) = registry.get(1) {
        writeln!(sink, "Object 2 (Special): {object}")?;
    }

    if let Some(object) = registry.get(2) {
        let copy = object.duplicate();
        writeln!(sink, "Cloned Object 3: {copy}")?;
        drop(copy);
    }

    if let Some(object) = registry.get(1) {
        report_downcast(object, sink)?;
    }

    match trigger_first_failure() {
        Err(err @ DemoFailure::First) => writeln!(sink, "Caught first failure: {err}")?,
        Err(err) => writeln!(sink, "Caught unexpected failure: {err}")?,
        Ok(()) => {}
    }

    match trigger_second_failure() {
        Err(err @ DemoFailure::Second) => writeln!(sink, "Caught second failure: {err}")?,
        Err(err) => writeln!(sink, "Caught unexpected failure: {err}")?,
        Ok(()) => {}
    }

    registry.clear();
    Ok(())
}
