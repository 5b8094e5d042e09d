use crate::western::bodies::CelestialBody;
use thiserror::Error;

/// Errors surfaced by chart parsing and natal profile construction.
///
/// Narrative lookups never fail: a body or house without a dedicated table
/// entry falls back to generic text instead of producing an error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    #[error("Chart data incomplete: missing or unresolvable {}", join_bodies(.missing))]
    DataIncomplete { missing: Vec<CelestialBody> },
    #[error("Malformed house cusp set: {reason}")]
    MalformedCuspSet { reason: String },
    #[error("Unknown celestial body: {0}")]
    UnknownBody(String),
    #[error("Unknown house label: {0}")]
    UnknownHouseLabel(String),
}

fn join_bodies(bodies: &[CelestialBody]) -> String {
    bodies
        .iter()
        .map(|b| b.id())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_incomplete_message_lists_bodies() {
        let err = ChartError::DataIncomplete {
            missing: vec![CelestialBody::Sun, CelestialBody::Ascendant],
        };
        assert_eq!(
            err.to_string(),
            "Chart data incomplete: missing or unresolvable sun, ascendant"
        );
    }
}
