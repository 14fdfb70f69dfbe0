/// Axis identifiers a device can expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisId {
    X,
    Y,
    Z,
    RX,
    RY,
    RZ,
    Throttle,
    Rudder,
    Wheel,
    Gas,
    Brake,
    Slider,
    /// Point-of-view hat. Synthesized from a native X/Y axis pair.
    Pov,
}

/// Button identifiers across the mouse, joystick and gamepad families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonId {
    // Mouse
    Left,
    Right,
    Middle,
    Side,
    Extra,
    // Classic joystick
    Trigger,
    Thumb,
    Thumb2,
    Top,
    Top2,
    Pinkie,
    Base,
    Base2,
    Base3,
    Base4,
    Base5,
    Base6,
    Dead,
    // Gamepad
    South,
    East,
    C,
    North,
    West,
    Z,
    LeftShoulder,
    RightShoulder,
    LeftTrigger,
    RightTrigger,
    Select,
    Start,
    Mode,
    LeftStick,
    RightStick,
}

/// Native keyboard key code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyId(pub u16);

/// Identifier of a public component. Correlation compares these
/// position-for-position, so equality must stay strict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Identifier {
    Axis(AxisId),
    Button(ButtonId),
    Key(KeyId),
}
