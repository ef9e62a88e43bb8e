//! Press / move / release state machine.

use umlsketch_core::FullRef;

/// Phase of the current pointer gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragPhase {
    #[default]
    Idle,
    /// Button is down, pointer has not left the threshold yet
    WaitingForMove,
    Dragging,
}

/// Tracks a pointer gesture from press to release.
///
/// A press starts waiting; the first motion beyond the threshold turns the
/// gesture into a drag. Release or [`DragState::stop`] returns to idle.
#[derive(Debug, Clone, Default)]
pub struct DragState {
    phase: DragPhase,
    from: (i32, i32),
    to: (i32, i32),
    dragged_object: FullRef,
}

impl DragState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn is_idle(&self) -> bool {
        self.phase == DragPhase::Idle
    }

    pub fn is_waiting_for_move(&self) -> bool {
        self.phase == DragPhase::WaitingForMove
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == DragPhase::Dragging
    }

    pub fn from(&self) -> (i32, i32) {
        self.from
    }

    pub fn to(&self) -> (i32, i32) {
        self.to
    }

    /// The object grabbed at press time, `None` while idle.
    pub fn dragged_object(&self) -> Option<FullRef> {
        match self.phase {
            DragPhase::Idle => None,
            _ => Some(self.dragged_object),
        }
    }

    pub fn start(&mut self, x: i32, y: i32, obj: FullRef) {
        self.phase = DragPhase::WaitingForMove;
        self.from = (x, y);
        self.to = (x, y);
        self.dragged_object = obj;
    }

    /// Records pointer motion and returns the resulting phase.
    ///
    /// Motion while idle is ignored.
    pub fn move_to(&mut self, x: i32, y: i32, threshold: i32) -> DragPhase {
        if self.phase == DragPhase::Idle {
            return self.phase;
        }
        self.to = (x, y);
        if self.phase == DragPhase::WaitingForMove && self.beyond_threshold(threshold) {
            self.phase = DragPhase::Dragging;
        }
        self.phase
    }

    pub fn stop(&mut self) {
        self.phase = DragPhase::Idle;
        self.dragged_object = FullRef::VOID;
    }

    fn beyond_threshold(&self, threshold: i32) -> bool {
        let dx = i64::from(self.to.0) - i64::from(self.from.0);
        let dy = i64::from(self.to.1) - i64::from(self.from.1);
        let limit = i64::from(threshold.max(0));
        dx * dx + dy * dy > limit * limit
    }
}
