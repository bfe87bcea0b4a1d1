use dioxus::prelude::*;

use crate::hospitals::Hospital;
use crate::state::AppState;

/// Card for one hospital. Pressing it shows a details alert.
#[component]
pub fn HospitalCard(hospital: Hospital) -> Element {
    let mut state = use_context::<AppState>();

    rsx! {
        div {
            class: "hospital-card",
            onclick: move |_| state.show_hospital_details(&hospital),

            div {
                class: "card-header",

                div {
                    class: "hospital-info",
                    h2 {
                        class: "hospital-name",
                        "{hospital.name}"
                    }
                    p {
                        class: "hospital-location",
                        "📍 {hospital.location}, {hospital.city}"
                    }
                    p {
                        class: "hospital-distance",
                        "{hospital.distance} away"
                    }
                }

                div {
                    class: "rating-badge",
                    span { class: "rating", "{hospital.rating}" }
                    span { class: "rating-label", "⭐" }
                }
            }

            div {
                class: "card-details",
                span { class: "detail-label", "Beds: {hospital.beds}" }
            }

            div {
                class: "specialties",
                for specialty in hospital.specialties.iter() {
                    span {
                        key: "{specialty}",
                        class: "specialty-tag",
                        "{specialty}"
                    }
                }
            }
        }
    }
}
