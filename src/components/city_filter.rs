use dioxus::prelude::*;

use crate::filter::{city_chips, CityChip, FilterCriteria};
use crate::hospitals::HOSPITALS;

/// Horizontal row of city chips, starting with "All"
#[component]
pub fn CityFilter(criteria: Signal<FilterCriteria>) -> Element {
    let chips = use_hook(|| city_chips(&HOSPITALS));
    let current = criteria.read().clone();

    rsx! {
        div {
            class: "filter-container",

            span {
                class: "filter-label",
                "Filter by Location:"
            }

            div {
                class: "filter-chips",
                for chip in chips {
                    CityChipButton {
                        key: "{chip}",
                        chip: chip,
                        active: chip.is_active(&current),
                        on_select: move |chip: CityChip| {
                            let mut criteria = criteria;
                            tracing::debug!(city = chip.label(), "City filter selected");
                            criteria.write().select_chip(chip);
                        },
                    }
                }
            }
        }
    }
}

#[component]
fn CityChipButton(chip: CityChip, active: bool, on_select: EventHandler<CityChip>) -> Element {
    rsx! {
        button {
            class: "filter-button",
            class: if active { "filter-button--active" },
            onclick: move |_| on_select.call(chip),
            "{chip}"
        }
    }
}
