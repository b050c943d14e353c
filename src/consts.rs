pub mod cli_consts {
    //! Dashboard Configuration Constants

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Buffer size of the channels between load tasks and the UI.
    pub const EVENT_QUEUE_SIZE: usize = 100;

    // =============================================================================
    // UI CONFIGURATION
    // =============================================================================

    /// How long the UI waits for a key press before redrawing (milliseconds)
    pub const UI_POLL_INTERVAL_MS: u64 = 100;

    /// Rows shown in the recent-orders and inventory tables before truncation
    pub const MAX_TABLE_ROWS: usize = 12;

    /// Bars shown in the monthly revenue chart (one per month)
    pub const MAX_REVENUE_BARS: usize = 12;
}
