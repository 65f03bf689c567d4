// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Static map pin placement (percent offsets over a map image).

/// Pin position as percentages of the map image width and height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapPin {
    pub left: f64,
    pub top: f64,
}

const WORLD_MAP_PINS: &[(&str, MapPin)] = &[
    ("Bangkok, Thailand", MapPin { left: 74.0, top: 60.0 }),
    ("Bordeaux, France", MapPin { left: 48.0, top: 51.0 }),
    ("Barcelona, Spain", MapPin { left: 45.0, top: 53.0 }),
    ("Tokyo, Japan", MapPin { left: 86.0, top: 53.0 }),
    ("New York, USA", MapPin { left: 25.0, top: 52.0 }),
    ("Rome, Italy", MapPin { left: 50.0, top: 52.0 }),
    ("Dubai, UAE", MapPin { left: 62.0, top: 58.0 }),
    ("London, UK", MapPin { left: 45.0, top: 47.0 }),
    ("Sydney, Australia", MapPin { left: 87.0, top: 72.0 }),
    ("Amsterdam, Netherlands", MapPin { left: 48.0, top: 49.0 }),
    ("Berlin, Germany", MapPin { left: 52.0, top: 50.0 }),
    ("Singapore, Singapore", MapPin { left: 76.0, top: 65.0 }),
];

const GOLDEN_ANGLE_DEG: f64 = 137.508;

/// Pin for a location on the world map.
pub fn world_pin(location: &str) -> Option<MapPin> {
    WORLD_MAP_PINS
        .iter()
        .find(|(name, _)| *name == location)
        .map(|(_, pin)| *pin)
}

/// Deterministic pin for the `index`-th activity on a city map.
pub fn activity_pin(index: usize) -> MapPin {
    let angle = (index as f64 * GOLDEN_ANGLE_DEG).to_radians();
    let radius = 30.0 + (index % 3) as f64 * 15.0;
    let scale = if index % 2 == 1 { 0.5 } else { 1.0 };

    let x = 50.0 + angle.cos() * radius * scale;
    let y = 50.0 + angle.sin() * radius * scale;

    MapPin {
        left: x.clamp(10.0, 90.0),
        top: y.clamp(30.0, 80.0),
    }
}

/// Map image for a location; the world map when no location is selected.
pub fn map_image_path(location: Option<&str>) -> String {
    match location.filter(|l| !l.is_empty()) {
        None => "/maps/worldmap.png".to_string(),
        Some(location) => {
            let file: String = location
                .to_lowercase()
                .chars()
                .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
                .collect();
            format!("/maps/{file}.png")
        }
    }
}
