use std::cell::RefCell;
use std::collections::VecDeque;

use crate::ports::VariantPicker;

/// Picker that returns a fixed sequence of indices, then repeats the last one.
#[allow(dead_code)]
pub struct ScriptedPicker {
    picks: RefCell<VecDeque<usize>>,
    last: RefCell<usize>,
}

#[allow(dead_code)]
impl ScriptedPicker {
    pub fn new(picks: &[usize]) -> Self {
        Self { picks: RefCell::new(picks.iter().copied().collect()), last: RefCell::new(0) }
    }
}

impl VariantPicker for ScriptedPicker {
    fn pick(&self, _len: usize) -> usize {
        if let Some(next) = self.picks.borrow_mut().pop_front() {
            *self.last.borrow_mut() = next;
        }
        *self.last.borrow()
    }
}
