use leptos::prelude::*;
use travel_map_shared::MapConfig;

use crate::map::WorldMap;

/// Root component for the travel map page.
#[component]
pub fn App() -> impl IntoView {
    let config = MapConfig::default();
    view! { <WorldMap config=config /> }
}
