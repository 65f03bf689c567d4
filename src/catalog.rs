// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Compiled-in datasets: locations, languages, dates and the activity catalog.
//!
//! Stores fall back to these whenever persisted state is missing or unreadable.

use crate::models::{
    Activity, DateOption, HostActivity, HostActivityStatus, Location, Profile, ProfileMode,
};
use crate::time_utils::{date_display_name, format_date_id};
use chrono::NaiveDate;

/// Pseudo-location that clears the location filter.
pub const ALL_LOCATIONS: Location = Location {
    id: "00",
    name: "All",
};

pub const LOCATIONS: &[Location] = &[
    Location { id: "01", name: "Bangkok, Thailand" },
    Location { id: "02", name: "Bordeaux, France" },
    Location { id: "03", name: "Barcelona, Spain" },
    Location { id: "04", name: "Tokyo, Japan" },
    Location { id: "05", name: "New York, USA" },
    Location { id: "06", name: "Rome, Italy" },
    Location { id: "07", name: "Dubai, UAE" },
    Location { id: "08", name: "London, UK" },
    Location { id: "09", name: "Sydney, Australia" },
    Location { id: "10", name: "Amsterdam, Netherlands" },
    Location { id: "11", name: "Berlin, Germany" },
    Location { id: "12", name: "Singapore, Singapore" },
];

pub const POPULAR_LANGUAGES: &[&str] = &["English", "Hindi", "French", "German", "Mandarin"];

/// Default "today" for the schedule views.
pub const DEFAULT_DATE_ID: &str = "11272025";

/// (id, name, location, slots, emoji, language)
type CatalogRow = (
    &'static str,
    &'static str,
    &'static str,
    [&'static str; 2],
    &'static str,
    &'static str,
);

const TRAVELER_ACTIVITIES: &[CatalogRow] = &[
    ("1", "Flower Market", "Bangkok, Thailand", ["09:00-13:30", "16:00-19:00"], "🌸", "English"),
    ("2", "Street Food Tour", "Bangkok, Thailand", ["18:00-21:00", "19:00-22:00"], "🍜", "English"),
    ("3", "Temple Visit", "Bangkok, Thailand", ["08:00-11:00", "14:00-17:00"], "🛕", "English"),
    ("4", "Thai Cooking Class", "Bangkok, Thailand", ["10:00-13:00", "15:00-18:00"], "👨‍🍳", "English"),
    ("5", "Floating Market", "Bangkok, Thailand", ["06:00-10:00", "07:00-11:00"], "🚣", "English"),
    ("6", "Wine Tasting", "Bordeaux, France", ["11:00-14:00", "16:00-19:00"], "🍷", "French"),
    ("7", "Vineyard Tour", "Bordeaux, France", ["09:00-12:00", "14:00-17:00"], "🍇", "French"),
    ("8", "Cheese Pairing", "Bordeaux, France", ["12:00-14:00", "18:00-20:00"], "🧀", "French"),
    ("9", "Bike Through Vineyards", "Bordeaux, France", ["08:00-11:00", "15:00-18:00"], "🚴", "French"),
    ("10", "French Bakery Class", "Bordeaux, France", ["07:00-10:00", "13:00-16:00"], "🥐", "French"),
    ("11", "Sagrada Familia Tour", "Barcelona, Spain", ["09:00-12:00", "14:00-17:00"], "⛪", "English"),
    ("12", "Tapas Crawl", "Barcelona, Spain", ["19:00-22:00", "20:00-23:00"], "🍤", "English"),
    ("13", "Beach Volleyball", "Barcelona, Spain", ["10:00-13:00", "16:00-19:00"], "🏐", "English"),
    ("14", "Flamenco Show", "Barcelona, Spain", ["20:00-22:00", "21:00-23:00"], "💃", "English"),
    ("15", "Park Güell Walk", "Barcelona, Spain", ["08:00-11:00", "15:00-18:00"], "🌳", "English"),
    ("16", "Sushi Making", "Tokyo, Japan", ["11:00-14:00", "17:00-20:00"], "🍣", "English"),
    ("17", "Sumo Wrestling", "Tokyo, Japan", ["13:00-16:00", "18:00-21:00"], "🤼", "English"),
    ("18", "Temple Garden", "Tokyo, Japan", ["07:00-10:00", "14:00-17:00"], "🏯", "English"),
    ("19", "Karaoke Night", "Tokyo, Japan", ["19:00-22:00", "20:00-23:00"], "🎤", "English"),
    ("20", "Ramen Tour", "Tokyo, Japan", ["18:00-21:00", "19:00-22:00"], "🍜", "English"),
    ("21", "Broadway Show", "New York, USA", ["19:00-22:00", "20:00-23:00"], "🎭", "English"),
    ("22", "Central Park Bike", "New York, USA", ["09:00-12:00", "14:00-17:00"], "🚲", "English"),
    ("23", "Pizza Walking Tour", "New York, USA", ["11:00-14:00", "17:00-20:00"], "🍕", "English"),
    ("24", "Museum of Modern Art", "New York, USA", ["10:00-13:00", "14:00-17:00"], "🎨", "English"),
    ("25", "Brooklyn Bridge Walk", "New York, USA", ["08:00-11:00", "16:00-19:00"], "🌉", "English"),
    ("26", "Colosseum Tour", "Rome, Italy", ["09:00-12:00", "14:00-17:00"], "🏛️", "English"),
    ("27", "Pasta Making Class", "Rome, Italy", ["11:00-14:00", "16:00-19:00"], "🍝", "English"),
    ("28", "Vatican Museums", "Rome, Italy", ["08:00-11:00", "13:00-16:00"], "🎨", "English"),
    ("29", "Gelato Tour", "Rome, Italy", ["15:00-18:00", "17:00-20:00"], "🍨", "English"),
    ("30", "Vespa City Tour", "Rome, Italy", ["10:00-13:00", "14:00-17:00"], "🛵", "English"),
    ("31", "Desert Safari", "Dubai, UAE", ["15:00-20:00", "16:00-21:00"], "🏜️", "Hindi"),
    ("32", "Burj Khalifa Visit", "Dubai, UAE", ["10:00-12:00", "18:00-20:00"], "🏙️", "Hindi"),
    ("33", "Spice Souk Tour", "Dubai, UAE", ["09:00-12:00", "16:00-19:00"], "🧂", "Hindi"),
    ("34", "Dhow Cruise", "Dubai, UAE", ["19:00-22:00", "20:00-23:00"], "⛵", "Hindi"),
    ("35", "Indoor Skiing", "Dubai, UAE", ["11:00-14:00", "15:00-18:00"], "⛷️", "Hindi"),
    ("36", "Tower of London", "London, UK", ["09:00-12:00", "14:00-17:00"], "🏰", "English"),
    ("37", "Afternoon Tea", "London, UK", ["14:00-16:00", "15:00-17:00"], "☕", "English"),
    ("38", "Thames River Cruise", "London, UK", ["11:00-13:00", "17:00-19:00"], "🚢", "English"),
    ("39", "West End Theatre", "London, UK", ["19:00-22:00", "20:00-23:00"], "🎭", "English"),
    ("40", "Camden Market", "London, UK", ["10:00-14:00", "13:00-17:00"], "🛍️", "English"),
    ("41", "Opera House Tour", "Sydney, Australia", ["09:00-11:00", "14:00-16:00"], "🎭", "English"),
    ("42", "Bondi Beach Surf", "Sydney, Australia", ["08:00-11:00", "15:00-18:00"], "🏄", "English"),
    ("43", "Harbor Bridge Climb", "Sydney, Australia", ["07:00-10:00", "16:00-19:00"], "🌉", "English"),
    ("44", "Wildlife Park", "Sydney, Australia", ["09:00-13:00", "13:00-17:00"], "🦘", "English"),
    ("45", "Coastal Walk", "Sydney, Australia", ["06:00-09:00", "16:00-19:00"], "🚶", "English"),
    ("46", "Canal Boat Tour", "Amsterdam, Netherlands", ["10:00-12:00", "15:00-17:00"], "🚤", "English"),
    ("47", "Van Gogh Museum", "Amsterdam, Netherlands", ["09:00-12:00", "13:00-16:00"], "🎨", "English"),
    ("48", "Cheese Tasting", "Amsterdam, Netherlands", ["11:00-13:00", "14:00-16:00"], "🧀", "English"),
    ("49", "Bike City Tour", "Amsterdam, Netherlands", ["10:00-13:00", "14:00-17:00"], "🚴", "English"),
    ("50", "Tulip Garden", "Amsterdam, Netherlands", ["08:00-11:00", "13:00-16:00"], "🌷", "English"),
    ("51", "Berlin Wall Tour", "Berlin, Germany", ["09:00-12:00", "14:00-17:00"], "🧱", "German"),
    ("52", "Beer Garden", "Berlin, Germany", ["16:00-19:00", "18:00-21:00"], "🍺", "German"),
    ("53", "Museum Island", "Berlin, Germany", ["10:00-13:00", "13:00-16:00"], "🏛️", "German"),
    ("54", "Street Art Tour", "Berlin, Germany", ["11:00-14:00", "15:00-18:00"], "🎨", "German"),
    ("55", "Currywurst Tasting", "Berlin, Germany", ["12:00-14:00", "18:00-20:00"], "🌭", "German"),
    ("56", "Gardens by the Bay", "Singapore, Singapore", ["09:00-12:00", "18:00-21:00"], "🌳", "Mandarin"),
    ("57", "Hawker Food Tour", "Singapore, Singapore", ["11:00-14:00", "18:00-21:00"], "🍜", "Mandarin"),
    ("58", "Marina Bay Sands", "Singapore, Singapore", ["10:00-13:00", "16:00-19:00"], "🏙️", "Mandarin"),
    ("59", "Sentosa Island", "Singapore, Singapore", ["09:00-14:00", "13:00-18:00"], "🏝️", "Mandarin"),
    ("60", "Night Safari", "Singapore, Singapore", ["19:00-22:00", "20:00-23:00"], "🦁", "Mandarin"),
];

/// The traveler activity catalog with derived slot durations.
pub fn traveler_activities() -> Vec<Activity> {
    TRAVELER_ACTIVITIES
        .iter()
        .filter_map(|(id, name, location, slots, emoji, language)| {
            match Activity::new(id, name, location, slots, emoji, Some(*language)) {
                Ok(activity) => Some(activity),
                Err(e) => {
                    tracing::error!(id, error = %e, "Skipping malformed catalog activity");
                    None
                }
            }
        })
        .collect()
}

/// Seed activities for a new local host.
pub fn default_host_activities() -> Vec<HostActivity> {
    [
        ("1", "Wine Tour", "11052025", "12:00", "13:00", HostActivityStatus::Pending),
        ("2", "Soccer Match", "11152025", "15:00", "17:00", HostActivityStatus::Pending),
        ("3", "Sculpting", "11272025", "11:00", "12:00", HostActivityStatus::Scheduled),
    ]
    .into_iter()
    .map(|(id, name, date, start, end, status)| HostActivity {
        id: id.to_string(),
        name: name.to_string(),
        date: date.to_string(),
        start_time: start.to_string(),
        end_time: end.to_string(),
        status,
    })
    .collect()
}

pub fn default_profile() -> Profile {
    Profile {
        name: "Tony Montana".to_string(),
        age: 21,
        email: "tony@gmail.com".to_string(),
        birthday: "03/10/04".to_string(),
        home_city: "Milan, Italy".to_string(),
        location_sharing: "Indefinitely".to_string(),
        mode: ProfileMode::Local,
        avatar: String::new(),
        is_verified: false,
    }
}

/// The selectable dates: every day of November 2025.
pub fn date_options() -> Vec<DateOption> {
    (1..=30)
        .filter_map(|day| NaiveDate::from_ymd_opt(2025, 11, day))
        .map(|date| DateOption {
            id: format_date_id(date),
            name: date_display_name(date),
        })
        .collect()
}

/// Display name for a date id, falling back to the default date's name.
pub fn date_name(id: &str) -> String {
    let options = date_options();
    options
        .iter()
        .find(|d| d.id == id)
        .or_else(|| options.iter().find(|d| d.id == DEFAULT_DATE_ID))
        .map(|d| d.name.clone())
        .unwrap_or_default()
}

/// Locations whose name contains `query` (case-insensitive), led by "All".
pub fn search_locations(query: &str) -> Vec<&'static Location> {
    let query = query.to_lowercase();
    std::iter::once(&ALL_LOCATIONS)
        .chain(LOCATIONS.iter())
        .filter(|l| l.name.to_lowercase().contains(&query))
        .collect()
}
