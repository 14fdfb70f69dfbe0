use std::sync::Arc;

use evjoy_core::{AxisId, Component, Controller, Identifier};
use log::debug;

use crate::codes;
use crate::device::JoystickDevice;

/// Number of hat axis pairs the legacy joystick interface can report.
const HAT_PAIRS: usize = 3;

/// Builds a controller from a legacy joystick device. Always succeeds: the
/// legacy interface only ever enumerates sticks and gamepads.
///
/// Button and axis slots are mapped through the native code tables; unmapped
/// codes are skipped. A recognized hat X axis is buffered and fused with its
/// Y into one POV component registered for both slot indices. Legacy devices
/// offer no force feedback, so the rumbler list is empty.
pub(crate) fn controller_from_joystick_device(device: &dyn JoystickDevice) -> Controller {
    let mut components = Vec::new();
    for (slot, &code) in device.button_map().iter().enumerate() {
        let Some(id) = codes::button_id(code) else {
            debug!("skipping unmapped button code {code:#x} at slot {slot}");
            continue;
        };
        let button = Arc::new(Component::new(Identifier::Button(id), false));
        device.register_button(slot, button.clone());
        components.push(button);
    }
    let mut pending_x: [Option<usize>; HAT_PAIRS] = [None; HAT_PAIRS];
    for (slot, &code) in device.axis_map().iter().enumerate() {
        match codes::hat_slot(code) {
            Some((hat, 0)) if hat < HAT_PAIRS => pending_x[hat] = Some(slot),
            Some((hat, _)) if hat < HAT_PAIRS => {
                let Some(x_slot) = pending_x[hat].take() else {
                    debug!("hat {hat} Y axis without a paired X, skipping");
                    continue;
                };
                let pov = Arc::new(Component::new(Identifier::Axis(AxisId::Pov), false));
                device.register_axis(x_slot, pov.clone());
                device.register_axis(slot, pov.clone());
                device.register_pov(pov.clone());
                components.push(pov);
            }
            _ => {
                let Some(id) = codes::abs_axis_id(code) else {
                    debug!("skipping unmapped axis code {code:#x} at slot {slot}");
                    continue;
                };
                let axis = Arc::new(Component::new(Identifier::Axis(id), true));
                device.register_axis(slot, axis.clone());
                components.push(axis);
            }
        }
    }
    Controller::new(device.name(), device.kind(), components, Vec::new())
}
