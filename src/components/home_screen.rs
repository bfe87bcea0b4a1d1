use dioxus::prelude::*;

use super::city_filter::CityFilter;
use super::header::Header;
use super::hospital_card::HospitalCard;
use super::search_bar::SearchBar;
use crate::filter::{filter_hospitals, FilterCriteria};
use crate::hospitals::{Hospital, HOSPITALS};

/// The authenticated list screen
#[component]
pub fn HomeScreen() -> Element {
    // Filter state is local to the screen and dropped with it
    let mut criteria = use_signal(FilterCriteria::default);

    // Recomputed in full whenever the criteria change
    let visible = use_memo(move || {
        filter_hospitals(&HOSPITALS, &criteria.read())
            .into_iter()
            .copied()
            .collect::<Vec<Hospital>>()
    });

    let search_text = criteria.read().search_text.clone();
    let hospitals = visible.read().clone();
    let count = hospitals.len();

    rsx! {
        div {
            class: "screen home-screen",

            Header {}

            SearchBar {
                value: search_text,
                on_change: move |text: String| {
                    criteria.write().search_text = text;
                },
            }

            CityFilter { criteria: criteria }

            div {
                class: "result-count",
                "{count} hospitals found"
            }

            div {
                class: "hospital-list",
                for hospital in hospitals {
                    HospitalCard { key: "{hospital.id}", hospital: hospital }
                }
            }
        }
    }
}
