use std::sync::atomic::{AtomicU32, Ordering};

use crate::identifier::Identifier;

/// A single public capability of a controller (axis, button or key).
///
/// The value cell is the routing target for raw device updates: a backend
/// registers a component against a native descriptor and later pushes decoded
/// values into it through [`Component::update`]. A POV component is registered
/// against both underlying hat axes and receives updates from either one.
#[derive(Debug)]
pub struct Component {
    identifier: Identifier,
    analog: bool,
    value: AtomicU32,
}

impl Component {
    pub fn new(identifier: Identifier, analog: bool) -> Self {
        Self {
            identifier,
            analog,
            value: AtomicU32::new(0f32.to_bits()),
        }
    }

    pub fn identifier(&self) -> Identifier {
        self.identifier
    }

    pub fn is_analog(&self) -> bool {
        self.analog
    }

    /// Last raw value routed to this component.
    pub fn value(&self) -> f32 {
        f32::from_bits(self.value.load(Ordering::Relaxed))
    }

    /// Routes a decoded raw value into the component.
    pub fn update(&self, value: f32) {
        self.value.store(value.to_bits(), Ordering::Relaxed);
    }
}
