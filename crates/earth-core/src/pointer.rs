//! Pointer parallax state.

/// Canvas bounding box in CSS pixels, as reported by `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CanvasRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Last known pointer offset from the canvas center, both axes in [-1, 1].
/// `y` points up.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

impl PointerState {
    /// Store a pointer position given in client coordinates. A zero-area rect
    /// leaves the state untouched.
    pub fn set_from_client(&mut self, client_x: f64, client_y: f64, rect: CanvasRect) {
        if let Some((x, y)) = normalize_client(client_x, client_y, rect) {
            self.x = x;
            self.y = y;
        }
    }

    #[inline]
    pub fn reset(&mut self) {
        self.x = 0.0;
        self.y = 0.0;
    }

    /// Clamped copy, for readers that must not trust the stored values.
    #[inline]
    pub fn clamped(self) -> Self {
        Self {
            x: self.x.clamp(-1.0, 1.0),
            y: self.y.clamp(-1.0, 1.0),
        }
    }
}

#[inline]
pub fn normalize_client(client_x: f64, client_y: f64, rect: CanvasRect) -> Option<(f32, f32)> {
    if !(rect.width > 0.0 && rect.height > 0.0) {
        return None;
    }
    let nx = ((client_x - rect.left) / rect.width) * 2.0 - 1.0;
    let ny = -(((client_y - rect.top) / rect.height) * 2.0 - 1.0);
    if !nx.is_finite() || !ny.is_finite() {
        return None;
    }
    Some((nx.clamp(-1.0, 1.0) as f32, ny.clamp(-1.0, 1.0) as f32))
}

/// Pointer drag bookkeeping for the orbit helper.
#[derive(Clone, Copy, Debug, Default)]
pub struct DragState {
    pub active: bool,
    pub pointer_id: i32,
    pub last_x: f64,
    pub last_y: f64,
}

impl DragState {
    pub fn begin(&mut self, pointer_id: i32, x: f64, y: f64) {
        self.active = true;
        self.pointer_id = pointer_id;
        self.last_x = x;
        self.last_y = y;
    }

    /// Returns the client-pixel delta since the previous sample while a drag
    /// from the same pointer is active.
    pub fn step(&mut self, pointer_id: i32, x: f64, y: f64) -> Option<(f64, f64)> {
        if !self.active || pointer_id != self.pointer_id {
            return None;
        }
        let delta = (x - self.last_x, y - self.last_y);
        self.last_x = x;
        self.last_y = y;
        Some(delta)
    }

    pub fn end(&mut self, pointer_id: i32) {
        if pointer_id == self.pointer_id {
            self.active = false;
        }
    }
}
