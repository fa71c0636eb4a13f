/// Input event types the engine understands.
/// Generic pointer/touch/layout events; hosts translate their native ones.
#[derive(Debug, Clone, Copy)]
pub enum InputEvent {
    /// The cursor moved to surface coordinates (x, y).
    PointerMove { x: f32, y: f32 },
    /// The cursor left the surface.
    PointerLeave,
    /// A touch began.
    TouchStart,
    /// A held touch moved to surface coordinates (x, y).
    TouchMove { x: f32, y: f32 },
    /// The touch ended.
    TouchEnd,
    /// The host layout resized the surface.
    Resize { width: u32, height: u32 },
}

/// A queue of input events.
/// The host writes events into the queue; the field drains them at the top
/// of each frame step, so a frame observes either none or all of a burst.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new input event (called from the host event layer).
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    /// Check if there are pending events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
