pub mod basis;
pub mod config;
pub mod crs;
pub mod cyclomatic;
pub mod fragment;
pub mod messages;
pub mod rings;
pub mod sssr;

pub use basis::Basis;
pub use config::PerceptionConfig;
pub use crs::CompleteRingSet;
pub use cyclomatic::{connected_components, cyclomatic_number};
pub use fragment::{materialize, materialize_checked, Ring};
pub use rings::{complete_ring_set, sssr, RingPerception, RingSet};
pub use sssr::Sssr;
