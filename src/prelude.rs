pub use crate::error::*;
pub use crate::graph::*;
pub use crate::topology;
