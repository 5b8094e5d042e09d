use urania::western::{
    cusps_from_starts, locate_house, validate_cusps, whole_sign_cusps, HouseCusp,
};
use urania::ChartError;

fn placidus_like() -> Vec<HouseCusp> {
    cusps_from_starts(&[
        350.0, 20.0, 48.5, 80.0, 112.0, 145.5, 170.0, 200.0, 228.5, 260.0, 292.0, 325.5,
    ])
    .unwrap()
}

#[test]
fn test_wraparound_house_twelve() {
    let mut cusps: Vec<HouseCusp> = (1..=11)
        .map(|id| HouseCusp::new(id, 10.0 + 30.0 * (id - 1) as f64, 10.0 + 30.0 * id as f64))
        .collect();
    cusps.push(HouseCusp::new(12, 350.0, 10.0));
    // houses 1..=11 cover [10, 340); house 12 covers [350, 10)
    assert_eq!(locate_house(5.0, &cusps), 12);
    assert_eq!(locate_house(355.0, &cusps), 12);
    assert_eq!(locate_house(10.0, &cusps), 1);
}

#[test]
fn test_tiling_maps_every_longitude_once() {
    for cusps in [placidus_like(), whole_sign_cusps(123.4), whole_sign_cusps(0.0)] {
        validate_cusps(&cusps).unwrap();
        let mut lon = 0.0;
        while lon < 360.0 {
            let containing = cusps.iter().filter(|c| c.contains(lon)).count();
            assert_eq!(containing, 1, "longitude {} in {} houses", lon, containing);
            let house = locate_house(lon, &cusps);
            assert!(cusps.iter().any(|c| c.id == house && c.contains(lon)));
            lon += 0.25;
        }
    }
}

#[test]
fn test_gap_falls_back_to_first_house() {
    let cusps = vec![HouseCusp::new(1, 0.0, 30.0), HouseCusp::new(2, 30.0, 60.0)];
    assert_eq!(locate_house(200.0, &cusps), 1);
    assert_eq!(locate_house(45.0, &cusps), 2);
    assert_eq!(locate_house(f64::NAN, &cusps), 1);
}

#[test]
fn test_validate_rejects_incomplete_sets() {
    let mut cusps = placidus_like();
    cusps.pop();
    assert!(matches!(validate_cusps(&cusps), Err(ChartError::MalformedCuspSet { .. })));

    let mut cusps = placidus_like();
    cusps[3].id = 5;
    assert!(matches!(validate_cusps(&cusps), Err(ChartError::MalformedCuspSet { .. })));

    let mut cusps = placidus_like();
    cusps[6].start = 171.0;
    assert!(matches!(validate_cusps(&cusps), Err(ChartError::MalformedCuspSet { .. })));
}
