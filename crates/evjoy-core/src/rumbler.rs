use crate::identifier::AxisId;

/// A force-feedback actuator reported by a device.
///
/// Discovery passes these through untouched; driving them is a backend
/// concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rumbler {
    name: Option<String>,
    axis: Option<AxisId>,
}

impl Rumbler {
    pub fn new(name: Option<String>, axis: Option<AxisId>) -> Self {
        Self { name, axis }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn axis(&self) -> Option<AxisId> {
        self.axis
    }
}
