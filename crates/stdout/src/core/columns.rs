/// Positions of the step table values in a whitespace-split row
///
/// The console step table has changed between code versions, so the column
/// positions are data rather than literals scattered through the parser.
///
/// | Version | step | updates | duration (ms) | status  |
/// | ------- | ---- | ------- | ------------- | ------- |
/// | [V1]    | 0    | 7       | 12            | none    |
/// | [V2]    | 0    | 7       | 12            | 13      |
///
/// [V2] is the canonical layout. Rows that stop short of the status column
/// are still accepted, with no status recorded.
///
/// [V1]: ColumnMap::V1
/// [V2]: ColumnMap::V2
///
/// ```rust
/// # use swtools_stdout::ColumnMap;
/// assert_eq!(ColumnMap::default(), ColumnMap::V2);
/// assert_eq!(ColumnMap::V1.status, None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    /// Step index
    pub step: usize,
    /// Number of particle updates in the step
    pub updates: usize,
    /// Wall-clock duration of the step in milliseconds
    pub duration: usize,
    /// Status/property flag, if the format has one
    pub status: Option<usize>,
}

impl ColumnMap {
    /// Earliest format, without the status flag
    ///
    /// Deprecated in favour of [ColumnMap::V2], kept for reading old logs.
    pub const V1: ColumnMap = ColumnMap {
        step: 0,
        updates: 7,
        duration: 12,
        status: None,
    };

    /// Canonical format with the trailing status flag
    pub const V2: ColumnMap = ColumnMap {
        step: 0,
        updates: 7,
        duration: 12,
        status: Some(13),
    };
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self::V2
    }
}
