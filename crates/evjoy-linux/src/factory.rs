use std::sync::Arc;

use evjoy_core::{AxisId, ButtonId, Component, Controller, ControllerType, Identifier};
use log::debug;

use crate::components::build_components;
use crate::device::EventDevice;

/// Builds a controller from an open event device, or `None` when the device
/// is not usable in its declared category. Unsuitability is a skip, never an
/// error; I/O failures only happen at open time, before this runs.
pub(crate) fn controller_from_event_device(device: &dyn EventDevice) -> Option<Controller> {
    let components = build_components(device);
    let kind = device.kind();
    match kind {
        ControllerType::Mouse => mouse_from_device(device, components),
        ControllerType::Keyboard | ControllerType::Stick | ControllerType::Gamepad => Some(
            Controller::new(device.name(), kind, components, device.rumblers()),
        ),
        other => {
            debug!("unhandled device category {other} for {}", device.name());
            None
        }
    }
}

/// A usable mouse has at minimum an X axis, a Y axis and a primary button.
fn mouse_from_device(
    device: &dyn EventDevice,
    components: Vec<Arc<Component>>,
) -> Option<Controller> {
    let has = |id: Identifier| components.iter().any(|c| c.identifier() == id);
    if has(Identifier::Axis(AxisId::X))
        && has(Identifier::Axis(AxisId::Y))
        && has(Identifier::Button(ButtonId::Left))
    {
        Some(Controller::new(
            device.name(),
            ControllerType::Mouse,
            components,
            device.rumblers(),
        ))
    } else {
        None
    }
}
