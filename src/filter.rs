//! Search and city filtering over the hospital directory.

use std::fmt;

use crate::hospitals::{self, Hospital};

/// Search text and selected city for the home screen list.
///
/// An empty `selected_city` means no city filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub search_text: String,
    pub selected_city: String,
}

impl FilterCriteria {
    /// Check whether a hospital passes both the search and the city filter
    pub fn matches(&self, hospital: &Hospital) -> bool {
        let needle = self.search_text.to_lowercase();
        let matches_search = hospital.name.to_lowercase().contains(&needle)
            || hospital.city.to_lowercase().contains(&needle);

        let matches_city = self.selected_city.is_empty()
            || hospital.city.to_lowercase() == self.selected_city.to_lowercase();

        matches_search && matches_city
    }

    /// Apply a chip press. The search text is left untouched.
    pub fn select_chip(&mut self, chip: CityChip) {
        self.selected_city = match chip {
            CityChip::All => String::new(),
            CityChip::City(city) => city.to_string(),
        };
    }
}

/// Derive the visible subset of `records`, preserving order
pub fn filter_hospitals<'a>(
    records: &'a [Hospital],
    criteria: &FilterCriteria,
) -> Vec<&'a Hospital> {
    records.iter().filter(|h| criteria.matches(h)).collect()
}

/// A button in the horizontal city filter row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CityChip {
    All,
    City(&'static str),
}

impl CityChip {
    pub fn label(&self) -> &'static str {
        match *self {
            CityChip::All => "All",
            CityChip::City(city) => city,
        }
    }

    /// `All` is active when no city is selected; a city chip when it is the selection
    pub fn is_active(&self, criteria: &FilterCriteria) -> bool {
        match self {
            CityChip::All => criteria.selected_city.is_empty(),
            CityChip::City(city) => criteria.selected_city == *city,
        }
    }
}

impl fmt::Display for CityChip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The `All` chip followed by one chip per distinct city
pub fn city_chips(records: &[Hospital]) -> Vec<CityChip> {
    std::iter::once(CityChip::All)
        .chain(hospitals::cities(records).into_iter().map(CityChip::City))
        .collect()
}
