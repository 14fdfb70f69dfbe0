//! Platform-neutral controller and component data model.

mod component;
mod controller;
mod identifier;
mod rumbler;

pub use crate::component::Component;
pub use crate::controller::{Controller, ControllerType};
pub use crate::identifier::{AxisId, ButtonId, Identifier, KeyId};
pub use crate::rumbler::Rumbler;
