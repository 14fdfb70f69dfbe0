//! Native Linux input descriptor codes and their public identifier mappings.
//!
//! The subset the discovery layer needs: absolute axes (including the hat
//! pairs fused into POV components) and the button ranges reported by mice,
//! classic joysticks and gamepads.

use evjoy_core::{AxisId, ButtonId};

use crate::device::NativeCode;

pub const ABS_X: NativeCode = 0x00;
pub const ABS_Y: NativeCode = 0x01;
pub const ABS_Z: NativeCode = 0x02;
pub const ABS_RX: NativeCode = 0x03;
pub const ABS_RY: NativeCode = 0x04;
pub const ABS_RZ: NativeCode = 0x05;
pub const ABS_THROTTLE: NativeCode = 0x06;
pub const ABS_RUDDER: NativeCode = 0x07;
pub const ABS_WHEEL: NativeCode = 0x08;
pub const ABS_GAS: NativeCode = 0x09;
pub const ABS_BRAKE: NativeCode = 0x0a;
pub const ABS_HAT0X: NativeCode = 0x10;
pub const ABS_HAT0Y: NativeCode = 0x11;
pub const ABS_HAT1X: NativeCode = 0x12;
pub const ABS_HAT1Y: NativeCode = 0x13;
pub const ABS_HAT2X: NativeCode = 0x14;
pub const ABS_HAT2Y: NativeCode = 0x15;
pub const ABS_HAT3X: NativeCode = 0x16;
pub const ABS_HAT3Y: NativeCode = 0x17;
pub const ABS_MISC: NativeCode = 0x28;

pub const BTN_LEFT: NativeCode = 0x110;
pub const BTN_RIGHT: NativeCode = 0x111;
pub const BTN_MIDDLE: NativeCode = 0x112;
pub const BTN_SIDE: NativeCode = 0x113;
pub const BTN_EXTRA: NativeCode = 0x114;

pub const BTN_TRIGGER: NativeCode = 0x120;
pub const BTN_THUMB: NativeCode = 0x121;
pub const BTN_THUMB2: NativeCode = 0x122;
pub const BTN_TOP: NativeCode = 0x123;
pub const BTN_TOP2: NativeCode = 0x124;
pub const BTN_PINKIE: NativeCode = 0x125;
pub const BTN_BASE: NativeCode = 0x126;
pub const BTN_BASE2: NativeCode = 0x127;
pub const BTN_BASE3: NativeCode = 0x128;
pub const BTN_BASE4: NativeCode = 0x129;
pub const BTN_BASE5: NativeCode = 0x12a;
pub const BTN_BASE6: NativeCode = 0x12b;
pub const BTN_DEAD: NativeCode = 0x12f;

pub const BTN_SOUTH: NativeCode = 0x130;
pub const BTN_EAST: NativeCode = 0x131;
pub const BTN_C: NativeCode = 0x132;
pub const BTN_NORTH: NativeCode = 0x133;
pub const BTN_WEST: NativeCode = 0x134;
pub const BTN_Z: NativeCode = 0x135;
pub const BTN_TL: NativeCode = 0x136;
pub const BTN_TR: NativeCode = 0x137;
pub const BTN_TL2: NativeCode = 0x138;
pub const BTN_TR2: NativeCode = 0x139;
pub const BTN_SELECT: NativeCode = 0x13a;
pub const BTN_START: NativeCode = 0x13b;
pub const BTN_MODE: NativeCode = 0x13c;
pub const BTN_THUMBL: NativeCode = 0x13d;
pub const BTN_THUMBR: NativeCode = 0x13e;

/// Maps a native absolute-axis code to its public identifier. Hat axes all
/// map to [`AxisId::Pov`]; which hat they belong to comes from [`hat_slot`].
pub fn abs_axis_id(code: NativeCode) -> Option<AxisId> {
    Some(match code {
        ABS_X => AxisId::X,
        ABS_Y => AxisId::Y,
        ABS_Z => AxisId::Z,
        ABS_RX => AxisId::RX,
        ABS_RY => AxisId::RY,
        ABS_RZ => AxisId::RZ,
        ABS_THROTTLE => AxisId::Throttle,
        ABS_RUDDER => AxisId::Rudder,
        ABS_WHEEL => AxisId::Wheel,
        ABS_GAS => AxisId::Gas,
        ABS_BRAKE => AxisId::Brake,
        ABS_HAT0X..=ABS_HAT3Y => AxisId::Pov,
        ABS_MISC => AxisId::Slider,
        _ => return None,
    })
}

/// Maps a native button code to its public identifier.
pub fn button_id(code: NativeCode) -> Option<ButtonId> {
    Some(match code {
        BTN_LEFT => ButtonId::Left,
        BTN_RIGHT => ButtonId::Right,
        BTN_MIDDLE => ButtonId::Middle,
        BTN_SIDE => ButtonId::Side,
        BTN_EXTRA => ButtonId::Extra,
        BTN_TRIGGER => ButtonId::Trigger,
        BTN_THUMB => ButtonId::Thumb,
        BTN_THUMB2 => ButtonId::Thumb2,
        BTN_TOP => ButtonId::Top,
        BTN_TOP2 => ButtonId::Top2,
        BTN_PINKIE => ButtonId::Pinkie,
        BTN_BASE => ButtonId::Base,
        BTN_BASE2 => ButtonId::Base2,
        BTN_BASE3 => ButtonId::Base3,
        BTN_BASE4 => ButtonId::Base4,
        BTN_BASE5 => ButtonId::Base5,
        BTN_BASE6 => ButtonId::Base6,
        BTN_DEAD => ButtonId::Dead,
        BTN_SOUTH => ButtonId::South,
        BTN_EAST => ButtonId::East,
        BTN_C => ButtonId::C,
        BTN_NORTH => ButtonId::North,
        BTN_WEST => ButtonId::West,
        BTN_Z => ButtonId::Z,
        BTN_TL => ButtonId::LeftShoulder,
        BTN_TR => ButtonId::RightShoulder,
        BTN_TL2 => ButtonId::LeftTrigger,
        BTN_TR2 => ButtonId::RightTrigger,
        BTN_SELECT => ButtonId::Select,
        BTN_START => ButtonId::Start,
        BTN_MODE => ButtonId::Mode,
        BTN_THUMBL => ButtonId::LeftStick,
        BTN_THUMBR => ButtonId::RightStick,
        _ => return None,
    })
}

/// Hat index (0..4) and axis position (0 for X, 1 for Y) of a hat axis code.
pub fn hat_slot(code: NativeCode) -> Option<(usize, usize)> {
    if (ABS_HAT0X..=ABS_HAT3Y).contains(&code) {
        let offset = usize::from(code - ABS_HAT0X);
        Some((offset / 2, offset % 2))
    } else {
        None
    }
}
