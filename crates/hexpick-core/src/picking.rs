use tracing::debug;

/// Whether the next valid click samples a color, and into which row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PickingState {
    #[default]
    Idle,
    Picking { row: usize },
}

impl PickingState {
    pub fn is_active(&self) -> bool {
        matches!(self, PickingState::Picking { .. })
    }

    pub fn target(&self) -> Option<usize> {
        match *self {
            PickingState::Picking { row } => Some(row),
            PickingState::Idle => None,
        }
    }

    /// Target `row`, replacing any previous target.
    pub fn start(&mut self, row: usize) {
        if let PickingState::Picking { row: previous } = *self {
            debug!(previous, row, "retargeting picking");
        }
        *self = PickingState::Picking { row };
    }

    /// Leave picking mode, returning the row that was targeted.
    pub fn finish(&mut self) -> Option<usize> {
        let target = self.target();
        *self = PickingState::Idle;
        target
    }
}
