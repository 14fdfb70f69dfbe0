//! Linux controller discovery over the event and joystick device families.
//!
//! Scans both device-file directories, builds controllers from the
//! capabilities each node reports and fuses the two enumerations of one
//! physical device into a single composite. Rescans reconcile hot-plug
//! changes incrementally without invalidating controllers callers hold. The
//! privileged ioctl layer stays behind [`DeviceBackend`]; every call into it
//! is serialized through a [`DeviceWorker`].

pub mod codes;
mod components;
mod correlate;
mod device;
mod engine;
mod error;
mod factory;
mod joystick;
#[cfg(test)]
pub(crate) mod mock;
mod worker;

pub use crate::device::{
    scan_device_files, DeviceBackend, DeviceFile, EventDevice, JoystickDevice, NativeCode,
    RawComponent,
};
pub use crate::engine::{ControllerManager, ScanConfig};
pub use crate::error::{Error, Result};
pub use crate::worker::DeviceWorker;
