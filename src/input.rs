use glam::Vec2;

/// Pointer drag tracked between `pointerdown` and `pointerup`.
///
/// Deltas are in CSS pixels, which is what the orbit controller expects
/// together with the canvas client height.
#[derive(Default, Clone, Copy, Debug)]
pub struct DragState {
    pub active: bool,
    pub pointer_id: i32,
    pub last: Vec2,
}

impl DragState {
    pub fn begin(&mut self, pointer_id: i32, pos: Vec2) {
        self.active = true;
        self.pointer_id = pointer_id;
        self.last = pos;
    }

    /// Movement since the previous event of the same pointer, if dragging.
    pub fn moved(&mut self, pointer_id: i32, pos: Vec2) -> Option<Vec2> {
        if !self.active || pointer_id != self.pointer_id {
            return None;
        }
        let delta = pos - self.last;
        self.last = pos;
        (delta != Vec2::ZERO).then_some(delta)
    }

    /// Returns whether a drag was in progress for this pointer.
    pub fn end(&mut self, pointer_id: i32) -> bool {
        if self.active && pointer_id == self.pointer_id {
            self.active = false;
            return true;
        }
        false
    }
}

/// Ctrl or Meta shortcuts belong to the browser (copy, zoom, tab switch).
///
/// Ctrl together with Alt is AltGr on Windows layouts, which some keyboards
/// need to type `+` or `-`, so it counts as a plain key. Alt alone only
/// changes the produced character.
#[inline]
pub fn is_plain_key(ctrl: bool, meta: bool, alt: bool) -> bool {
    !meta && (!ctrl || alt)
}
