//! Seeded directory of Nepal's provinces and their districts.
//!
//! The data set is fixed at build time; ids are 1-based sequence numbers in
//! seed order and therefore stable across restarts. District ids number the
//! full list, not per province.

use fxhash::FxHashMap;
use serde::Serialize;

/// Nepal's provinces with their districts.
const NEPAL_LOCATIONS: &[(&str, &[&str])] = &[
    (
        "Koshi",
        &[
            "Bhojpur",
            "Dhankuta",
            "Ilam",
            "Jhapa",
            "Khotang",
            "Morang",
            "Okhaldunga",
            "Panchthar",
            "Sankhuwasabha",
            "Solukhumbu",
            "Sunsari",
            "Taplejung",
            "Terhathum",
            "Udayapur",
        ],
    ),
    (
        "Madhesh",
        &["Bara", "Dhanusha", "Mahottari", "Parsa", "Rautahat", "Saptari", "Sarlahi", "Siraha"],
    ),
    (
        "Bagmati",
        &[
            "Bhaktapur",
            "Chitwan",
            "Dhading",
            "Dolakha",
            "Kathmandu",
            "Kavrepalanchok",
            "Lalitpur",
            "Makwanpur",
            "Nuwakot",
            "Ramechhap",
            "Rasuwa",
            "Sindhuli",
            "Sindhupalchok",
        ],
    ),
    (
        "Gandaki",
        &[
            "Baglung", "Gorkha", "Kaski", "Lamjung", "Manang", "Mustang", "Myagdi", "Nawalpur",
            "Parbat", "Syangja", "Tanahun",
        ],
    ),
    (
        "Lumbini",
        &[
            "Arghakhanchi",
            "Banke",
            "Bardiya",
            "Dang",
            "Gulmi",
            "Kapilvastu",
            "Parasi",
            "Palpa",
            "Pyuthan",
            "Rolpa",
            "Rupandehi",
            "Rukum East",
        ],
    ),
    (
        "Karnali",
        &[
            "Dailekh",
            "Dolpa",
            "Humla",
            "Jajarkot",
            "Jumla",
            "Kalikot",
            "Mugu",
            "Rukum West",
            "Salyan",
            "Surkhet",
        ],
    ),
    (
        "Sudurpashchim",
        &[
            "Achham",
            "Baitadi",
            "Bajhang",
            "Bajura",
            "Dadeldhura",
            "Darchula",
            "Doti",
            "Kailali",
            "Kanchanpur",
        ],
    ),
];

/// A province.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct State {
    pub id: u32,
    pub name: &'static str,
}

/// A district within a province.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct District {
    pub id: u32,
    pub name: &'static str,
    pub state_id: u32,
}

/// Lookup structure over the seeded location data.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    states: Vec<State>,
    by_state: FxHashMap<u32, Vec<District>>,
    district_count: usize,
}

impl Directory {
    /// Builds the directory from the seed table.
    #[must_use]
    pub fn seeded() -> Self {
        let mut states = Vec::with_capacity(NEPAL_LOCATIONS.len());
        let mut by_state = FxHashMap::default();
        let mut district_id = 0u32;
        let mut district_count = 0usize;

        for (index, (state_name, districts)) in NEPAL_LOCATIONS.iter().enumerate() {
            let state_id = u32::try_from(index).unwrap_or(u32::MAX).saturating_add(1);
            states.push(State { id: state_id, name: state_name });

            let entries: Vec<District> = districts
                .iter()
                .map(|district_name| {
                    district_id += 1;
                    District { id: district_id, name: district_name, state_id }
                })
                .collect();

            district_count += entries.len();
            by_state.insert(state_id, entries);
        }

        Self { states, by_state, district_count }
    }

    /// All provinces, in seed order.
    #[must_use]
    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// Districts of one province, in seed order. Unknown ids yield an empty
    /// slice rather than an error: a stale or garbled state id simply leaves
    /// the dependent dropdown empty.
    #[must_use]
    pub fn districts_for_state(&self, state_id: u32) -> &[District] {
        self.by_state.get(&state_id).map_or(&[], Vec::as_slice)
    }

    /// Total number of seeded districts.
    #[must_use]
    pub const fn district_count(&self) -> usize {
        self.district_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_covers_all_provinces_and_districts() {
        let directory = Directory::seeded();
        assert_eq!(directory.states().len(), 7);
        assert_eq!(directory.district_count(), 77);
    }

    #[test]
    fn district_ids_are_globally_sequential() {
        let directory = Directory::seeded();
        let mut expected = 1u32;
        for state in directory.states() {
            for district in directory.districts_for_state(state.id) {
                assert_eq!(district.id, expected);
                assert_eq!(district.state_id, state.id);
                expected += 1;
            }
        }
        assert_eq!(expected as usize - 1, directory.district_count());
    }

    #[test]
    fn bagmati_contains_the_capital() {
        let directory = Directory::seeded();
        let bagmati =
            directory.states().iter().find(|state| state.name == "Bagmati").expect("Bagmati");
        let names: Vec<&str> =
            directory.districts_for_state(bagmati.id).iter().map(|d| d.name).collect();
        assert!(names.contains(&"Kathmandu"));
        assert_eq!(names.len(), 13);
    }

    #[test]
    fn unknown_state_yields_empty_slice() {
        let directory = Directory::seeded();
        assert!(directory.districts_for_state(0).is_empty());
        assert!(directory.districts_for_state(99).is_empty());
    }
}
