//! Placement meaning: definition, house sentence and sign analysis.

use super::tables::{self, HouseTable, GENERIC_HOUSE_MEANINGS};
use super::{fill, ordinal};
use crate::western::bodies::CelestialBody;
use crate::western::signs::ZodiacSign;

const UNKNOWN_HOUSE: &str = "{body}'s house is not known, so its energy colors your life as a whole.";

fn definition_for(body: CelestialBody) -> String {
    match tables::definition(body) {
        Some(text) => text.to_string(),
        None => {
            log::debug!("Narrative: no definition for {}, using fallback", body.id());
            format!("{} represents a key part of your psyche.", body.label())
        }
    }
}

fn house_sentence(body: CelestialBody, house: Option<u8>) -> String {
    let Some(house) = house else {
        return fill(UNKNOWN_HOUSE, &[("body", body.label())]);
    };
    let table: &HouseTable = tables::BODY_HOUSE_MEANINGS
        .get(&body)
        .unwrap_or(&GENERIC_HOUSE_MEANINGS);
    match house {
        1..=12 => table.entries[(house - 1) as usize].to_string(),
        _ => fill(table.fallback, &[("house", &ordinal(house as u32))]),
    }
}

fn sign_analysis(body: CelestialBody, sign: ZodiacSign) -> String {
    let template = tables::sign_template(body);
    match tables::SIGN_TRAITS.get(&sign) {
        Some(traits) => fill(
            template,
            &[
                ("sign", sign.name()),
                ("adj", traits.adjective),
                ("Superpower", traits.superpower),
                ("Shadow", traits.shadow),
                ("superpower", &traits.superpower.to_lowercase()),
                ("shadow", &traits.shadow.to_lowercase()),
                ("vibe", &traits.vibe.to_lowercase()),
            ],
        ),
        None => {
            log::debug!("Narrative: no traits for {}", sign);
            format!("**What it means:** You have the energy of {}.", sign.name())
        }
    }
}

/// Full meaning paragraph for a body in a sign and house.
///
/// The ascendant always reads as the rising sign in the 1st house. Sun, moon
/// and rising use a single newline before the sign analysis, other bodies a
/// blank line.
pub fn placement_meaning(body: CelestialBody, sign: ZodiacSign, house: Option<u8>) -> String {
    let house = if body == CelestialBody::Ascendant { Some(1) } else { house };
    let separator = match body {
        CelestialBody::Sun | CelestialBody::Moon | CelestialBody::Ascendant => "\n",
        _ => "\n\n",
    };
    format!(
        "{} {}{}{}",
        definition_for(body),
        house_sentence(body, house),
        separator,
        sign_analysis(body, sign)
    )
}
