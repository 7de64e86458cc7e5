use crate::model::task::TaskId;

/// A text field that can own keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    AddInput,
    Row(TaskId),
}

/// Single slot for input focus: at most one field holds it at a time.
///
/// Acquiring takes focus away from the previous holder; releasing is only
/// honored by the current holder. `transitions` counts actual changes so
/// callers can verify focus moves happen on mode edges only.
#[derive(Debug, Default)]
pub struct FieldFocus {
    holder: Option<FocusTarget>,
    transitions: usize,
}

impl FieldFocus {
    /// Give focus to `target`, returning the field that lost it (if any)
    pub fn acquire(&mut self, target: FocusTarget) -> Option<FocusTarget> {
        if self.holder == Some(target) {
            return None;
        }
        self.transitions += 1;
        self.holder.replace(target)
    }

    /// Drop focus if `target` holds it
    pub fn release(&mut self, target: FocusTarget) -> bool {
        if self.holder != Some(target) {
            return false;
        }
        self.holder = None;
        self.transitions += 1;
        true
    }

    pub fn holder(&self) -> Option<FocusTarget> {
        self.holder
    }

    pub fn is_focused(&self, target: FocusTarget) -> bool {
        self.holder == Some(target)
    }

    pub fn transitions(&self) -> usize {
        self.transitions
    }
}
