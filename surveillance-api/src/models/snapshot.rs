/// Image size requested when loading a stored snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SnapshotSize {
    Icon,
    #[default]
    Full,
}

impl SnapshotSize {
    /// Value of the `imgSize` parameter
    pub fn code(&self) -> u8 {
        match self {
            SnapshotSize::Icon => 1,
            SnapshotSize::Full => 2,
        }
    }
}
