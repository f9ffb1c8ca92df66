//! Ordered, bounded collection of registered sinks.
//!
//! Destination counts are human-scale (console, a file, maybe a capture sink),
//! so a fixed-capacity vector with linear scans beats any indexed structure.

use crate::internal;
use crate::sink::{Sink, StreamHandle};

/// Upper bound on registered sinks. Adds beyond this fail and report on the
/// fallback channel.
pub const MAX_SINKS: usize = 8;

/// Insertion order is preserved and is the order the fan-out writer visits
/// sinks in; removal compacts without reordering survivors.
#[derive(Default)]
pub struct SinkRegistry {
    sinks: Vec<Sink>,
}

impl SinkRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self {
            sinks: Vec::with_capacity(MAX_SINKS),
        }
    }

    /// Registers a stream. Returns `false` only when the registry is full; a
    /// re-add of an already-registered handle is a successful no-op.
    ///
    /// A color request for a stream not attached to a terminal is downgraded
    /// to plain output, with an advisory on the fallback channel.
    pub fn add(&mut self, stream: StreamHandle, colors: bool) -> bool {
        if self.sinks.iter().any(|sink| sink.is_handle(&stream)) {
            return true;
        }
        if self.sinks.len() >= MAX_SINKS {
            internal::warn(&format!(
                "sink limit of {MAX_SINKS} reached, destination not added"
            ));
            return false;
        }

        let colors = if colors && !stream.borrow().is_terminal() {
            internal::warn(
                "colored output disabled for non-terminal stream; \
                 request colors = false to silence this warning",
            );
            false
        } else {
            colors
        };

        self.sinks.push(Sink::new(stream, colors));
        true
    }

    /// Removes the sink holding `stream`, if registered. The no-duplicate
    /// invariant guarantees at most one match.
    pub fn remove(&mut self, stream: &StreamHandle) {
        if let Some(index) = self.sinks.iter().position(|sink| sink.is_handle(stream)) {
            self.sinks.remove(index);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Sink> {
        self.sinks.get(index)
    }

    /// Sinks in registration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Sink> {
        self.sinks.iter()
    }
}

impl<'a> IntoIterator for &'a SinkRegistry {
    type Item = &'a Sink;
    type IntoIter = std::slice::Iter<'a, Sink>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
