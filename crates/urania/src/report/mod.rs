pub mod duration;
pub mod profile;
pub mod settings;
pub mod transit;
pub mod types;

pub use duration::{daily_speed, DurationEstimate};
pub use profile::{build_natal_profile, ProfileBuilder};
pub use settings::ReportSettings;
pub use transit::{build_transit_report, TransitReportBuilder};
pub use types::{
    DailyTransitReport, EventCategory, NatalAspect, NatalProfile, Placement, TransitEvent,
};
