use std::sync::Arc;

use evjoy_core::Controller;

/// Decides whether an event-family and a joystick-family controller are two
/// enumerations of the same physical hardware.
///
/// Names must match exactly and the types must differ: the two families
/// always classify one device into different buckets, so a same-type pair is
/// never the same hardware. Component identifier sequences must be identical
/// position-for-position. Strict on purpose: a missed merge leaves two
/// standalone controllers, a false merge corrupts the view.
fn same_hardware(event: &Controller, joystick: &Controller) -> bool {
    if event.name() != joystick.name() || event.kind() == joystick.kind() {
        return false;
    }
    let ev = event.components();
    let js = joystick.components();
    ev.len() == js.len()
        && ev
            .iter()
            .zip(js)
            .all(|(a, b)| a.identifier() == b.identifier())
}

/// Merges the two family lists into one controller list.
///
/// The first structural match per event controller wins; the pair is
/// replaced by a composite and `repoint` is invoked with both halves so the
/// device index can map them to it. Output order: composites in match
/// order, then unmatched event controllers, then unmatched joystick
/// controllers.
pub(crate) fn merge_families<F>(
    mut event: Vec<Arc<Controller>>,
    mut joystick: Vec<Arc<Controller>>,
    mut repoint: F,
) -> Vec<Arc<Controller>>
where
    F: FnMut(&Arc<Controller>, &Arc<Controller>, &Arc<Controller>),
{
    let mut merged = Vec::new();
    let mut i = 0;
    while i < event.len() {
        let matched = (0..joystick.len()).find(|&j| same_hardware(&event[i], &joystick[j]));
        match matched {
            Some(j) => {
                let ev = event.remove(i);
                let js = joystick.remove(j);
                let composite = Arc::new(Controller::composite(ev.clone(), js.clone()));
                repoint(&ev, &js, &composite);
                merged.push(composite);
            }
            None => i += 1,
        }
    }
    merged.extend(event);
    merged.extend(joystick);
    merged
}
