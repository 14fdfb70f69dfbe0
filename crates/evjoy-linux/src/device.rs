use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use evjoy_core::{Component, ControllerType, Identifier, Rumbler};

/// Native descriptor code attached to a raw component. Opaque outside the
/// device backend except for the hat axis codes used in POV synthesis.
pub type NativeCode = u16;

/// One OS device node. The filename is the hot-plug identity key: a node
/// that keeps its name across rescans is the same device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceFile {
    path: PathBuf,
    name: String,
}

impl DeviceFile {
    pub fn new(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { path, name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A decoded low-level capability of an event device.
#[derive(Debug, Clone)]
pub struct RawComponent {
    /// Public identifier, `None` when the hardware capability is not
    /// recognized.
    pub identifier: Option<Identifier>,
    /// Native descriptor code.
    pub descriptor: NativeCode,
    /// Whether the capability carries an analog value.
    pub analog: bool,
}

/// An open event-family device node.
pub trait EventDevice: Send {
    /// Device-reported display name.
    fn name(&self) -> &str;

    /// Declared controller category.
    fn kind(&self) -> ControllerType;

    /// Decoded capabilities, in device order.
    fn raw_components(&self) -> Vec<RawComponent>;

    /// Force-feedback actuators the device exposes.
    fn rumblers(&self) -> Vec<Rumbler>;

    /// Binds a public component so raw updates for `descriptor` reach it.
    fn register_component(&self, descriptor: NativeCode, component: Arc<Component>);

    fn close(&mut self) -> io::Result<()>;
}

/// An open legacy joystick-family device node. Carries fixed-size button and
/// axis maps of native codes instead of generic raw components.
pub trait JoystickDevice: Send {
    /// Device-reported display name.
    fn name(&self) -> &str;

    /// Stick or Gamepad, per the device's capability flags.
    fn kind(&self) -> ControllerType;

    /// Native axis code per axis slot.
    fn axis_map(&self) -> Vec<NativeCode>;

    /// Native button code per button slot.
    fn button_map(&self) -> Vec<NativeCode>;

    /// Binds a public component to the axis slot at `index`.
    fn register_axis(&self, index: usize, component: Arc<Component>);

    /// Binds a public component to the button slot at `index`.
    fn register_button(&self, index: usize, component: Arc<Component>);

    /// Binds a synthesized POV component.
    fn register_pov(&self, component: Arc<Component>);

    fn close(&mut self) -> io::Result<()>;
}

/// The privileged I/O boundary. Implementations own the ioctl-level work of
/// probing the platform and opening device nodes; discovery only ever calls
/// them from the serialized device worker.
pub trait DeviceBackend: Send + Sync {
    /// Platform capability probe, run once at engine construction. A `false`
    /// result is sticky: the engine stays unsupported for its lifetime.
    fn probe(&self) -> bool;

    fn open_event(&self, file: &DeviceFile) -> io::Result<Box<dyn EventDevice>>;

    fn open_joystick(&self, file: &DeviceFile) -> io::Result<Box<dyn JoystickDevice>>;
}

/// Lists device nodes under `dir` whose filename starts with `prefix`,
/// sorted by filename.
pub fn scan_device_files(dir: &Path, prefix: &str) -> io::Result<Vec<DeviceFile>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let file = DeviceFile::new(entry?.path());
        if file.name().starts_with(prefix) {
            files.push(file);
        }
    }
    files.sort_by(|a, b| a.name().cmp(b.name()));
    Ok(files)
}
