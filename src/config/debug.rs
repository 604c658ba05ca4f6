//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Log every fetch cycle start/end with its run generation.
    pub log_fetch: bool,

    /// Log selection changes from the UI controls.
    pub log_selection: bool,

    /// Log results discarded because a newer run superseded them.
    pub log_stale_discards: bool,
}

pub const DF: LogFlags = LogFlags {
    log_fetch: true,
    log_selection: false,
    log_stale_discards: true,
};
