use std::cell::Cell;

/// Lifecycle of one placeholder. There is no way back to `Dormant`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ActivationState {
    #[default]
    Dormant,
    Activated,
}

/// Single-threaded flag read and written only at the top of event handlers.
#[derive(Debug, Default)]
pub struct ActivationCell {
    state: Cell<ActivationState>,
}

impl ActivationCell {
    #[cfg(test)]
    pub fn get(&self) -> ActivationState {
        self.state.get()
    }

    /// Moves to `Activated` and returns `true` if the cell was still dormant.
    pub fn try_activate(&self) -> bool {
        self.state.replace(ActivationState::Activated) == ActivationState::Dormant
    }
}
