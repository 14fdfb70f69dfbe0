use std::sync::Arc;

use evjoy_core::{AxisId, Component, Identifier};
use log::warn;

use crate::codes;
use crate::device::{EventDevice, RawComponent};

/// Builds the public component list for an event device.
///
/// Walks the raw list once. Raw components without a recognized identifier
/// are dropped. Hat axes are bucketed into four hat slots; a slot that ends
/// with both X and Y present yields one POV component registered against
/// both descriptors, appended after the non-POV components in hat order.
pub(crate) fn build_components(device: &dyn EventDevice) -> Vec<Arc<Component>> {
    let mut hats: [[Option<RawComponent>; 2]; 4] = Default::default();
    let mut components = Vec::new();
    for raw in device.raw_components() {
        match raw.identifier {
            Some(Identifier::Axis(AxisId::Pov)) => match codes::hat_slot(raw.descriptor) {
                Some((hat, position)) => hats[hat][position] = Some(raw),
                None => warn!("unknown POV axis code: {:#x}", raw.descriptor),
            },
            Some(identifier) => {
                let component = Arc::new(Component::new(identifier, raw.analog));
                device.register_component(raw.descriptor, component.clone());
                components.push(component);
            }
            // Unrecognized hardware capability.
            None => {}
        }
    }
    for hat in &hats {
        if let [Some(x), Some(y)] = hat {
            let pov = Arc::new(Component::new(Identifier::Axis(AxisId::Pov), false));
            device.register_component(x.descriptor, pov.clone());
            device.register_component(y.descriptor, pov.clone());
            components.push(pov);
        }
    }
    components
}
