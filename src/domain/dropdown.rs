// ============================================================================
// Dropdown State Machine
// ============================================================================

use crate::error::TransitionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropdownState {
    #[default]
    Closed,
    OpenEmpty,
    OpenWithResults,
}

impl DropdownState {
    fn open_for(result_count: usize) -> Self {
        if result_count == 0 {
            DropdownState::OpenEmpty
        } else {
            DropdownState::OpenWithResults
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, DropdownState::Closed)
    }

    pub fn has_results(&self) -> bool {
        matches!(self, DropdownState::OpenWithResults)
    }
}

/// Valid inputs to the dropdown state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownTransition {
    /// Focus, click or arrow key on the input
    Open { result_count: usize },
    /// A new result set replaced the old one
    ResultsChanged { result_count: usize },
    /// Confirm key on the active entry
    Confirm,
    /// Focus left the search box
    Blur,
}

impl DropdownState {
    pub fn transition(&self, transition: DropdownTransition) -> Result<DropdownState, TransitionError> {
        match (self, transition) {
            (_, DropdownTransition::Open { result_count }) => {
                Ok(DropdownState::open_for(result_count))
            },

            // results are tracked while closed but do not open the dropdown
            (DropdownState::Closed, DropdownTransition::ResultsChanged { .. }) => {
                Ok(DropdownState::Closed)
            },
            (_, DropdownTransition::ResultsChanged { result_count }) => {
                Ok(DropdownState::open_for(result_count))
            },

            (DropdownState::OpenWithResults, DropdownTransition::Confirm) => {
                Ok(DropdownState::Closed)
            },

            (_, DropdownTransition::Blur) => Ok(DropdownState::Closed),

            (from, transition) => Err(TransitionError {
                from: *from,
                transition,
            }),
        }
    }
}
