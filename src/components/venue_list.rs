//! Venue List Component
//!
//! Count line plus one summary row per venue, keyed by provider id.

use leptos::prelude::*;

use crate::models::Venue;

#[component]
pub fn VenueList(#[prop(into)] venues: Signal<Vec<Venue>>) -> impl IntoView {
    view! {
        <div class="venue-list">
            <p class="venue-count">{move || format!("Found {} venues", venues.get().len())}</p>
            <ul>
                <For
                    each=move || venues.get()
                    key=|venue| venue.provider_id.clone()
                    children=move |venue| view! { <li class="venue-item">{venue.summary()}</li> }
                />
            </ul>
        </div>
    }
}
