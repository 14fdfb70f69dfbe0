//! Test doubles for the privileged device boundary.

use std::collections::HashMap;
use std::io;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use evjoy_core::{Component, ControllerType, Identifier, KeyId, Rumbler};

use crate::codes;
use crate::device::{
    DeviceBackend, DeviceFile, EventDevice, JoystickDevice, NativeCode, RawComponent,
};
use crate::engine::ScanConfig;

pub(crate) fn raw_axis(code: NativeCode) -> RawComponent {
    RawComponent {
        identifier: codes::abs_axis_id(code).map(Identifier::Axis),
        descriptor: code,
        analog: true,
    }
}

pub(crate) fn raw_button(code: NativeCode) -> RawComponent {
    RawComponent {
        identifier: codes::button_id(code).map(Identifier::Button),
        descriptor: code,
        analog: false,
    }
}

pub(crate) fn raw_key(code: u16) -> RawComponent {
    RawComponent {
        identifier: Some(Identifier::Key(KeyId(code))),
        descriptor: code,
        analog: false,
    }
}

pub(crate) struct FakeEventDevice {
    name: String,
    kind: ControllerType,
    raws: Vec<RawComponent>,
    rumblers: Vec<Rumbler>,
    registered: Mutex<Vec<(NativeCode, Arc<Component>)>>,
    closed: Arc<AtomicBool>,
}

impl FakeEventDevice {
    pub(crate) fn new(name: &str, kind: ControllerType, raws: Vec<RawComponent>) -> Self {
        Self {
            name: name.into(),
            kind,
            raws,
            rumblers: Vec::new(),
            registered: Mutex::new(Vec::new()),
            closed: Arc::new(AtomicBool::new(false)),
        }
    }

    pub(crate) fn registered(&self) -> Vec<(NativeCode, Arc<Component>)> {
        self.registered.lock().expect("lock").clone()
    }
}

impl EventDevice for FakeEventDevice {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> ControllerType {
        self.kind
    }

    fn raw_components(&self) -> Vec<RawComponent> {
        self.raws.clone()
    }

    fn rumblers(&self) -> Vec<Rumbler> {
        self.rumblers.clone()
    }

    fn register_component(&self, descriptor: NativeCode, component: Arc<Component>) {
        self.registered
            .lock()
            .expect("lock")
            .push((descriptor, component));
    }

    fn close(&mut self) -> io::Result<()> {
        self.closed.store(true, Ordering::SeqCst);
        Ok(())
    }
}

pub(crate) struct FakeJoystickDevice {
    name: String,
    kind: ControllerType,
    axes: Vec<NativeCode>,
    buttons: Vec<NativeCode>,
    registered_axes: Mutex<Vec<(usize, Arc<Component>)>>,
    registered_buttons: Mutex<Vec<(usize, Arc<Component>)>>,
    registered_povs: Mutex<Vec<Arc<Component>>>,
    closed: Arc<AtomicBool>,
}

impl FakeJoystickDevice {
    pub(crate) fn new(
        name: &str,
        kind: ControllerType,
        axes: Vec<NativeCode>,
        buttons: Vec<NativeCode>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            axes,
            buttons,
            registered_axes: Mutex::new(Vec::new()),
            registered_buttons: Mutex::new(Vec::new()),
            registered_povs: Mutex::new(Vec::new()),
            closed: Arc::new(AtomicBool::new(false)),
        }
    }

    pub(crate) fn registered_axes(&self) -> Vec<(usize, Arc<Component>)> {
        self.registered_axes.lock().expect("lock").clone()
    }

    pub(crate) fn registered_buttons(&self) -> Vec<(usize, Arc<Component>)> {
        self.registered_buttons.lock().expect("lock").clone()
    }

    pub(crate) fn registered_povs(&self) -> Vec<Arc<Component>> {
        self.registered_povs.lock().expect("lock").clone()
    }
}

impl JoystickDevice for FakeJoystickDevice {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> ControllerType {
        self.kind
    }

    fn axis_map(&self) -> Vec<NativeCode> {
        self.axes.clone()
    }

    fn button_map(&self) -> Vec<NativeCode> {
        self.buttons.clone()
    }

    fn register_axis(&self, index: usize, component: Arc<Component>) {
        self.registered_axes
            .lock()
            .expect("lock")
            .push((index, component));
    }

    fn register_button(&self, index: usize, component: Arc<Component>) {
        self.registered_buttons
            .lock()
            .expect("lock")
            .push((index, component));
    }

    fn register_pov(&self, component: Arc<Component>) {
        self.registered_povs.lock().expect("lock").push(component);
    }

    fn close(&mut self) -> io::Result<()> {
        self.closed.store(true, Ordering::SeqCst);
        Ok(())
    }
}

struct EventSpec {
    name: String,
    kind: ControllerType,
    raws: Vec<RawComponent>,
    error: Option<io::ErrorKind>,
    closed: Arc<AtomicBool>,
}

struct JoystickSpec {
    name: String,
    kind: ControllerType,
    axes: Vec<NativeCode>,
    buttons: Vec<NativeCode>,
    closed: Arc<AtomicBool>,
}

/// Backend serving devices from per-filename specs.
pub(crate) struct FakeBackend {
    supported: bool,
    event_specs: Mutex<HashMap<String, EventSpec>>,
    joystick_specs: Mutex<HashMap<String, JoystickSpec>>,
    pub(crate) open_calls: AtomicUsize,
}

impl FakeBackend {
    pub(crate) fn new(supported: bool) -> Self {
        Self {
            supported,
            event_specs: Mutex::new(HashMap::new()),
            joystick_specs: Mutex::new(HashMap::new()),
            open_calls: AtomicUsize::new(0),
        }
    }

    /// Registers an event device for `file` and returns its closed flag.
    pub(crate) fn event(
        &self,
        file: &str,
        name: &str,
        kind: ControllerType,
        raws: Vec<RawComponent>,
    ) -> Arc<AtomicBool> {
        let closed = Arc::new(AtomicBool::new(false));
        self.event_specs.lock().expect("lock").insert(
            file.into(),
            EventSpec {
                name: name.into(),
                kind,
                raws,
                error: None,
                closed: closed.clone(),
            },
        );
        closed
    }

    /// Registers an event device whose open fails with `kind`.
    pub(crate) fn event_error(&self, file: &str, kind: io::ErrorKind) {
        self.event_specs.lock().expect("lock").insert(
            file.into(),
            EventSpec {
                name: String::new(),
                kind: ControllerType::Unknown,
                raws: Vec::new(),
                error: Some(kind),
                closed: Arc::new(AtomicBool::new(false)),
            },
        );
    }

    /// Registers a joystick device for `file` and returns its closed flag.
    pub(crate) fn joystick(
        &self,
        file: &str,
        name: &str,
        kind: ControllerType,
        axes: Vec<NativeCode>,
        buttons: Vec<NativeCode>,
    ) -> Arc<AtomicBool> {
        let closed = Arc::new(AtomicBool::new(false));
        self.joystick_specs.lock().expect("lock").insert(
            file.into(),
            JoystickSpec {
                name: name.into(),
                kind,
                axes,
                buttons,
                closed: closed.clone(),
            },
        );
        closed
    }
}

impl DeviceBackend for FakeBackend {
    fn probe(&self) -> bool {
        self.supported
    }

    fn open_event(&self, file: &DeviceFile) -> io::Result<Box<dyn EventDevice>> {
        self.open_calls.fetch_add(1, Ordering::SeqCst);
        let specs = self.event_specs.lock().expect("lock");
        let spec = specs
            .get(file.name())
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such device"))?;
        if let Some(kind) = spec.error {
            return Err(io::Error::new(kind, "open failed"));
        }
        Ok(Box::new(FakeEventDevice {
            name: spec.name.clone(),
            kind: spec.kind,
            raws: spec.raws.clone(),
            rumblers: Vec::new(),
            registered: Mutex::new(Vec::new()),
            closed: spec.closed.clone(),
        }))
    }

    fn open_joystick(&self, file: &DeviceFile) -> io::Result<Box<dyn JoystickDevice>> {
        self.open_calls.fetch_add(1, Ordering::SeqCst);
        let specs = self.joystick_specs.lock().expect("lock");
        let spec = specs
            .get(file.name())
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such device"))?;
        Ok(Box::new(FakeJoystickDevice {
            name: spec.name.clone(),
            kind: spec.kind,
            axes: spec.axes.clone(),
            buttons: spec.buttons.clone(),
            registered_axes: Mutex::new(Vec::new()),
            registered_buttons: Mutex::new(Vec::new()),
            registered_povs: Mutex::new(Vec::new()),
            closed: spec.closed.clone(),
        }))
    }
}

/// Temp directory standing in for `/dev/input`.
pub(crate) struct DeviceTree {
    dir: tempfile::TempDir,
}

impl DeviceTree {
    pub(crate) fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("tempdir"),
        }
    }

    pub(crate) fn config(&self) -> ScanConfig {
        ScanConfig {
            event_dir: self.dir.path().to_path_buf(),
            joystick_dirs: vec![self.dir.path().to_path_buf()],
        }
    }

    pub(crate) fn path(&self) -> std::path::PathBuf {
        self.dir.path().to_path_buf()
    }

    pub(crate) fn touch(&self, name: &str) {
        std::fs::write(self.dir.path().join(name), []).expect("touch");
    }

    pub(crate) fn remove(&self, name: &str) {
        std::fs::remove_file(self.dir.path().join(name)).expect("remove");
    }
}
