/// Cross-axis alignment, used both for `align-items` and `align-self`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Align {
    FlexStart,
    Center,
    FlexEnd,
    #[default]
    Stretch,
}

/// Main-axis distribution of a container's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum JustifyContent {
    #[default]
    FlexStart,
    Center,
    FlexEnd,
    SpaceBetween,
    /// Half a slot of space before the first child and after the last.
    SpaceAround,
    /// Equal space before, between and after the children, so the first child
    /// starts a full slot in (CSS `space-evenly`).
    SpaceEvenly,
}

impl JustifyContent {
    /// Space-distribution modes only move children apart; they never resize
    /// flex children and ignore the container's `gap`.
    pub fn distributes_space(self) -> bool {
        matches!(
            self,
            JustifyContent::SpaceBetween | JustifyContent::SpaceAround | JustifyContent::SpaceEvenly
        )
    }
}
