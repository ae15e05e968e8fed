use crate::editor::bubbles::BubbleSet;
use crate::foundation::core::{Point, Vec2};
use crate::geometry::handles::ResizeHandle;
use crate::model::bubble::BubbleId;

/// Global pointer capture held for the duration of a gesture.
///
/// Hosts implement this to route pointer events to the editor while a button is held, even when
/// the pointer leaves the canvas. [`Interaction`] pairs every `acquire` with exactly one
/// `release`, including when it is dropped mid-gesture.
pub trait PointerCapture {
    /// Start receiving pointer events globally.
    fn acquire(&mut self);
    /// Stop receiving pointer events globally.
    fn release(&mut self);
}

/// Capture for headless use.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoCapture;

impl PointerCapture for NoCapture {
    fn acquire(&mut self) {}
    fn release(&mut self) {}
}

/// What a gesture does to its bubble.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureMode {
    /// Translate by pointer deltas.
    Drag,
    /// Move the edges named by the handle.
    Resize(ResizeHandle),
}

/// Observable interaction state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InteractionState {
    /// No gesture.
    Idle,
    /// Moving a bubble.
    Dragging(BubbleId),
    /// Resizing a bubble from a handle.
    Resizing(BubbleId, ResizeHandle),
}

#[derive(Clone, Debug)]
struct Gesture {
    bubble: BubbleId,
    mode: GestureMode,
    last: Point,
}

/// Pointer gesture session: `begin` on pointer-down, `update` per move, `end` on release.
///
/// Deltas are incremental: each update applies `pointer - last` and then moves the reference, so
/// how moves are chunked does not change the result.
#[derive(Debug)]
pub struct Interaction<C: PointerCapture = NoCapture> {
    capture: C,
    active: Option<Gesture>,
}

impl Default for Interaction<NoCapture> {
    fn default() -> Self {
        Self::new(NoCapture)
    }
}

impl<C: PointerCapture> Interaction<C> {
    /// Idle session using `capture` for gestures.
    pub fn new(capture: C) -> Self {
        Self {
            capture,
            active: None,
        }
    }

    /// Current state.
    pub fn state(&self) -> InteractionState {
        match &self.active {
            None => InteractionState::Idle,
            Some(g) => match g.mode {
                GestureMode::Drag => InteractionState::Dragging(g.bubble.clone()),
                GestureMode::Resize(h) => InteractionState::Resizing(g.bubble.clone(), h),
            },
        }
    }

    /// True while a gesture holds the capture.
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Bubble targeted by the active gesture.
    pub fn target(&self) -> Option<&BubbleId> {
        self.active.as_ref().map(|g| &g.bubble)
    }

    /// Start a gesture. Ignored (returns `false`) while another gesture is active.
    pub fn begin(&mut self, bubble: BubbleId, mode: GestureMode, pointer: Point) -> bool {
        if self.active.is_some() {
            return false;
        }
        self.capture.acquire();
        tracing::trace!(%bubble, ?mode, "gesture begin");
        self.active = Some(Gesture {
            bubble,
            mode,
            last: pointer,
        });
        true
    }

    /// Apply the delta since the last pointer position to the target bubble.
    ///
    /// Returns the applied delta, or `None` when idle or the target no longer exists.
    pub fn update(&mut self, pointer: Point, bubbles: &mut BubbleSet) -> Option<Vec2> {
        let gesture = self.active.as_mut()?;
        let delta = pointer - gesture.last;
        gesture.last = pointer;

        let bubble = bubbles.get_mut(&gesture.bubble)?;
        bubble.bounds = match gesture.mode {
            GestureMode::Drag => bubble.bounds.translated(delta),
            GestureMode::Resize(handle) => bubble.bounds.resized(handle, delta),
        };
        Some(delta)
    }

    /// Finish the gesture and release the capture. Deltas already applied stay applied.
    pub fn end(&mut self) -> Option<GestureMode> {
        let gesture = self.active.take()?;
        self.capture.release();
        tracing::trace!(bubble = %gesture.bubble, "gesture end");
        Some(gesture.mode)
    }

    /// End the gesture if it targets `bubble`.
    pub fn end_if_targets(&mut self, bubble: &BubbleId) -> bool {
        if self.target() == Some(bubble) {
            self.end();
            true
        } else {
            false
        }
    }

    /// The capture implementation.
    pub fn capture(&self) -> &C {
        &self.capture
    }
}

impl<C: PointerCapture> Drop for Interaction<C> {
    fn drop(&mut self) {
        if self.active.take().is_some() {
            self.capture.release();
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/editor/interaction.rs"]
mod tests;
