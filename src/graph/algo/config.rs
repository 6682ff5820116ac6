/// Default limit on live messages during one perception call.
pub const DEFAULT_POOL_CAPACITY: usize = 1 << 16;

/// Settings shared by the ring perception engines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PerceptionConfig {
    /// Maximum number of messages alive at once. Running out is reported as
    /// [`RingError::ResourceExceeded`](crate::error::RingError::ResourceExceeded).
    pub pool_capacity: usize,
    /// Largest ring the complete ring set will look for. Paths that could only close larger rings
    /// are dropped early.
    pub max_ring_size: Option<usize>,
    /// Don't emit the same ring twice from the complete ring set.
    pub dedup: bool,
    /// Check the incidence lists of the input graph before perceiving. Bond endpoints are always
    /// checked.
    pub validate: bool,
}
impl Default for PerceptionConfig {
    fn default() -> Self {
        Self {
            pool_capacity: DEFAULT_POOL_CAPACITY,
            max_ring_size: None,
            dedup: true,
            validate: true,
        }
    }
}
impl PerceptionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pool_capacity(mut self, pool_capacity: usize) -> Self {
        self.pool_capacity = pool_capacity;
        self
    }
    pub fn with_max_ring_size(mut self, max_ring_size: Option<usize>) -> Self {
        self.max_ring_size = max_ring_size;
        self
    }
    pub fn with_dedup(mut self, dedup: bool) -> Self {
        self.dedup = dedup;
        self
    }
    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    pub fn set_pool_capacity(&mut self, pool_capacity: usize) -> &mut Self {
        self.pool_capacity = pool_capacity;
        self
    }
    pub fn set_max_ring_size(&mut self, max_ring_size: Option<usize>) -> &mut Self {
        self.max_ring_size = max_ring_size;
        self
    }
    pub fn set_dedup(&mut self, dedup: bool) -> &mut Self {
        self.dedup = dedup;
        self
    }
    pub fn set_validation(&mut self, validate: bool) -> &mut Self {
        self.validate = validate;
        self
    }
}
