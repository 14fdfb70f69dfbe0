use std::io;
use std::path::PathBuf;
use std::slice;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};

use ahash::AHashMap;
use log::{debug, warn};

use evjoy_core::Controller;

use crate::correlate::merge_families;
use crate::device::{
    scan_device_files, DeviceBackend, DeviceFile, EventDevice, JoystickDevice,
};
use crate::factory::controller_from_event_device;
use crate::joystick::controller_from_joystick_device;
use crate::worker::DeviceWorker;

const EVENT_PREFIX: &str = "event";
const JOYSTICK_PREFIX: &str = "js";

/// Directories scanned for device nodes.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Directory holding event-family nodes (`event*`).
    pub event_dir: PathBuf,
    /// Directories tried in order for joystick-family nodes (`js*`); the
    /// first one with a non-empty listing wins.
    pub joystick_dirs: Vec<PathBuf>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            event_dir: PathBuf::from("/dev/input"),
            joystick_dirs: vec![PathBuf::from("/dev/input"), PathBuf::from("/dev")],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Family {
    Event,
    Joystick,
}

enum Handle {
    Event(Box<dyn EventDevice>),
    Joystick(Box<dyn JoystickDevice>),
}

impl Handle {
    fn close(&mut self) -> io::Result<()> {
        match self {
            Self::Event(device) => device.close(),
            Self::Joystick(device) => device.close(),
        }
    }
}

/// One known device node. Entries without a handle were opened once and
/// judged unusable or duplicate; keeping them registered stops every rescan
/// from reopening the same node.
struct DeviceEntry {
    family: Family,
    handle: Option<Handle>,
    controller: Option<Arc<Controller>>,
}

#[derive(Default)]
struct Registry {
    devices: AHashMap<String, DeviceEntry>,
}

/// Re-points index entries for either half of a merged pair at the
/// composite that replaced them.
fn repoint(
    registry: &mut Registry,
) -> impl FnMut(&Arc<Controller>, &Arc<Controller>, &Arc<Controller>) + '_ {
    move |event, joystick, composite| {
        for entry in registry.devices.values_mut() {
            if let Some(current) = &entry.controller {
                if Arc::ptr_eq(current, event) || Arc::ptr_eq(current, joystick) {
                    entry.controller = Some(composite.clone());
                }
            }
        }
    }
}

fn lock(registry: &Mutex<Registry>) -> MutexGuard<'_, Registry> {
    registry.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Discovers controllers from both device-file families and keeps the view
/// current across rescans.
///
/// The published list is only mutated by scan passes; readers always get a
/// defensive snapshot, so a concurrent rescan can never invalidate a list a
/// caller already holds.
pub struct ControllerManager {
    backend: Arc<dyn DeviceBackend>,
    worker: DeviceWorker,
    config: ScanConfig,
    supported: bool,
    registry: Mutex<Registry>,
    published: RwLock<Vec<Arc<Controller>>>,
}

impl ControllerManager {
    /// Creates a manager and runs the initial scan on the calling thread.
    ///
    /// The platform probe runs once here. When it fails the manager is
    /// permanently unsupported: every operation returns an empty result
    /// without touching any device path.
    pub fn new(backend: Arc<dyn DeviceBackend>, worker: DeviceWorker) -> Self {
        Self::with_config(backend, worker, ScanConfig::default())
    }

    pub fn with_config(
        backend: Arc<dyn DeviceBackend>,
        worker: DeviceWorker,
        config: ScanConfig,
    ) -> Self {
        let probe_backend = backend.clone();
        let supported = worker.execute(move || probe_backend.probe()).unwrap_or(false);
        let manager = Self {
            backend,
            worker,
            config,
            supported,
            registry: Mutex::new(Registry::default()),
            published: RwLock::new(Vec::new()),
        };
        if manager.supported {
            manager.initial_scan();
        }
        manager
    }

    pub fn is_supported(&self) -> bool {
        self.supported
    }

    /// Snapshot of the current controller list.
    pub fn controllers(&self) -> Vec<Arc<Controller>> {
        match self.published.read() {
            Ok(list) => list.clone(),
            Err(_) => Vec::new(),
        }
    }

    /// Re-lists both device directories, reconciles additions and removals
    /// against the known device set and returns the updated snapshot.
    /// Blocks until fully reconciled.
    pub fn rescan(&self) -> Vec<Arc<Controller>> {
        if !self.supported {
            return Vec::new();
        }
        let mut registry = lock(&self.registry);
        let event_files =
            self.list_family(slice::from_ref(&self.config.event_dir), EVENT_PREFIX);
        let joystick_files = self.list_family(&self.config.joystick_dirs, JOYSTICK_PREFIX);
        let mut current = self.controllers();

        // A family whose listing failed outright is skipped whole: no
        // additions, no removals. Its known devices ride through the pass.
        let mut fresh_event = Vec::new();
        let mut fresh_joystick = Vec::new();
        if let Some(files) = &event_files {
            for file in files {
                self.add_device(&mut registry, file, Family::Event, true, &mut fresh_event);
            }
        }
        if let Some(files) = &joystick_files {
            for file in files {
                self.add_device(&mut registry, file, Family::Joystick, true, &mut fresh_joystick);
            }
        }
        // Correlation is scoped to this pass; settled controllers stay as
        // they are.
        let merged = merge_families(fresh_event, fresh_joystick, repoint(&mut registry));

        if let Some(files) = &event_files {
            self.remove_vanished(&mut registry, Family::Event, files, &mut current);
        }
        if let Some(files) = &joystick_files {
            self.remove_vanished(&mut registry, Family::Joystick, files, &mut current);
        }

        current.extend(merged);
        self.publish(current)
    }

    fn initial_scan(&self) {
        let mut registry = lock(&self.registry);
        let event_files = self
            .list_family(slice::from_ref(&self.config.event_dir), EVENT_PREFIX)
            .unwrap_or_default();
        let joystick_files = self
            .list_family(&self.config.joystick_dirs, JOYSTICK_PREFIX)
            .unwrap_or_default();
        let mut event = Vec::new();
        let mut joystick = Vec::new();
        for file in &event_files {
            self.add_device(&mut registry, file, Family::Event, false, &mut event);
        }
        for file in &joystick_files {
            self.add_device(&mut registry, file, Family::Joystick, false, &mut joystick);
        }
        let merged = merge_families(event, joystick, repoint(&mut registry));
        drop(registry);
        self.publish(merged);
    }

    /// Lists one device family, falling back through `dirs` in order; the
    /// first non-empty listing wins. Returns `None` when every directory
    /// fails to list, which tells the caller to leave the family untouched
    /// this pass. An empty listing from a readable directory is a real
    /// result: those devices are gone.
    fn list_family(&self, dirs: &[PathBuf], prefix: &str) -> Option<Vec<DeviceFile>> {
        let mut listed = None;
        for dir in dirs {
            match scan_device_files(dir, prefix) {
                Ok(files) if !files.is_empty() => return Some(files),
                Ok(files) => listed = Some(files),
                Err(e) => warn!("failed to list {}: {e}", dir.display()),
            }
        }
        listed
    }

    /// Opens and enumerates one previously-unseen device file. Accepted
    /// controllers are pushed onto `fresh`; rejected and duplicate devices
    /// stay registered as closed entries.
    fn add_device(
        &self,
        registry: &mut Registry,
        file: &DeviceFile,
        family: Family,
        dedup: bool,
        fresh: &mut Vec<Arc<Controller>>,
    ) {
        if registry.devices.contains_key(file.name()) {
            return;
        }
        let Some(handle) = self.open(file, family) else {
            return;
        };
        let controller = match &handle {
            Handle::Event(device) => controller_from_event_device(device.as_ref()),
            Handle::Joystick(device) => Some(controller_from_joystick_device(device.as_ref())),
        };
        let entry = match controller {
            Some(controller) if !(dedup && already_known(registry, &controller)) => {
                let controller = Arc::new(controller);
                fresh.push(controller.clone());
                DeviceEntry {
                    family,
                    handle: Some(handle),
                    controller: Some(controller),
                }
            }
            Some(controller) => {
                debug!(
                    "dropping duplicate controller {} ({})",
                    controller.name(),
                    controller.kind()
                );
                self.close(handle);
                DeviceEntry {
                    family,
                    handle: None,
                    controller: None,
                }
            }
            None => {
                // Claimed a category without the minimum shape, or an
                // unhandled category. A skip, not an error.
                self.close(handle);
                DeviceEntry {
                    family,
                    handle: None,
                    controller: None,
                }
            }
        };
        registry.devices.insert(file.name().to_owned(), entry);
    }

    /// Drops registry entries whose backing file no longer appears in the
    /// family's current listing, closing handles and removing mapped
    /// controllers (composites included) from `current`.
    fn remove_vanished(
        &self,
        registry: &mut Registry,
        family: Family,
        listing: &[DeviceFile],
        current: &mut Vec<Arc<Controller>>,
    ) {
        let vanished: Vec<String> = registry
            .devices
            .iter()
            .filter(|(name, entry)| {
                entry.family == family && !listing.iter().any(|f| f.name() == name.as_str())
            })
            .map(|(name, _)| name.clone())
            .collect();
        for name in vanished {
            let Some(entry) = registry.devices.remove(&name) else {
                continue;
            };
            if let Some(handle) = entry.handle {
                self.close(handle);
            }
            if let Some(controller) = entry.controller {
                // A composite goes away whole when either half vanishes.
                current.retain(|c| !Arc::ptr_eq(c, &controller));
            }
        }
    }

    fn open(&self, file: &DeviceFile, family: Family) -> Option<Handle> {
        let backend = self.backend.clone();
        let target = file.clone();
        let result = match family {
            Family::Event => self
                .worker
                .execute(move || backend.open_event(&target).map(Handle::Event)),
            Family::Joystick => self
                .worker
                .execute(move || backend.open_joystick(&target).map(Handle::Joystick)),
        };
        match result {
            Ok(Ok(handle)) => Some(handle),
            Ok(Err(e)) if e.kind() == io::ErrorKind::PermissionDenied => {
                warn!(
                    "insufficient privileges to read {}: {e}",
                    file.path().display()
                );
                None
            }
            Ok(Err(e)) => {
                warn!("failed to open {}: {e}", file.path().display());
                None
            }
            Err(e) => {
                warn!("device worker unavailable: {e}");
                None
            }
        }
    }

    /// Releases a handle on the worker thread. Close failures are swallowed;
    /// removal proceeds regardless.
    fn close(&self, mut handle: Handle) {
        match self.worker.execute(move || handle.close()) {
            Ok(Err(e)) => debug!("failed to close device: {e}"),
            Err(e) => debug!("device worker unavailable during close: {e}"),
            Ok(Ok(())) => {}
        }
    }

    fn publish(&self, list: Vec<Arc<Controller>>) -> Vec<Arc<Controller>> {
        if let Ok(mut published) = self.published.write() {
            *published = list.clone();
        }
        list
    }
}

fn already_known(registry: &Registry, controller: &Controller) -> bool {
    registry.devices.values().any(|entry| {
        entry.controller.as_ref().is_some_and(|known| {
            known.name() == controller.name() && known.kind() == controller.kind()
        })
    })
}

impl Drop for ControllerManager {
    /// Shutdown hook: best-effort close of every still-open handle.
    fn drop(&mut self) {
        let mut registry = lock(&self.registry);
        for (_, entry) in registry.devices.drain() {
            if let Some(handle) = entry.handle {
                self.close(handle);
            }
        }
    }
}
