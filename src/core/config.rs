/// Tunables for an [`crate::engine::Engine`]. There is no persistence and no
/// concurrency in this engine, so configuration is limited to the one thing
/// that actually changes memory behaviour up front: how much capacity to
/// reserve for a freshly created index's internal maps.
#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    /// Capacity hint passed to a new index's term dictionaries and document
    /// list. Reduces reallocation for callers that know roughly how many
    /// documents or terms a field will see. Zero disables pre-allocation.
    pub index_capacity_hint: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            index_capacity_hint: 0,
        }
    }
}
