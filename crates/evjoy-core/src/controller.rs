use std::fmt;
use std::sync::Arc;

use crate::component::Component;
use crate::rumbler::Rumbler;

/// Category of a controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControllerType {
    Mouse,
    Keyboard,
    Stick,
    Gamepad,
    Fingerstick,
    Unknown,
}

impl fmt::Display for ControllerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Mouse => "mouse",
            Self::Keyboard => "keyboard",
            Self::Stick => "stick",
            Self::Gamepad => "gamepad",
            Self::Fingerstick => "fingerstick",
            Self::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// A discovered input device as exposed to callers.
///
/// Component count and identifiers are fixed at construction and never change
/// for the lifetime of the controller.
#[derive(Debug)]
pub struct Controller {
    name: String,
    kind: ControllerType,
    components: Vec<Arc<Component>>,
    children: Vec<Arc<Controller>>,
    rumblers: Vec<Rumbler>,
}

impl Controller {
    pub fn new(
        name: impl Into<String>,
        kind: ControllerType,
        components: Vec<Arc<Component>>,
        rumblers: Vec<Rumbler>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            components,
            children: Vec::new(),
            rumblers,
        }
    }

    /// Fuses an event-family controller with the joystick-family controller
    /// that describes the same physical hardware. Identity (name, type,
    /// components, rumblers) is taken from the event child.
    pub fn composite(event: Arc<Controller>, joystick: Arc<Controller>) -> Self {
        Self {
            name: event.name.clone(),
            kind: event.kind,
            components: event.components.clone(),
            rumblers: event.rumblers.clone(),
            children: vec![event, joystick],
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ControllerType {
        self.kind
    }

    pub fn components(&self) -> &[Arc<Component>] {
        &self.components
    }

    /// Sub-controllers; exactly two for a composite, empty otherwise.
    pub fn children(&self) -> &[Arc<Controller>] {
        &self.children
    }

    pub fn rumblers(&self) -> &[Rumbler] {
        &self.rumblers
    }

    pub fn is_composite(&self) -> bool {
        !self.children.is_empty()
    }
}
