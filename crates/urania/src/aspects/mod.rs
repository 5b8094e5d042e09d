pub mod calculator;
pub mod types;

pub use calculator::{separation, AspectDetector};
pub use types::{AspectKind, AspectMatch, AspectTone, OrbBound, OrbRule, OrbTable};
