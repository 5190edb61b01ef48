use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::MouseEvent;

use travel_map_shared::{Activation, MapConfig, MapModel, ShapeId, ShapeStyle};

use crate::world;

/// Static per-shape render data; set once after load.
#[derive(Debug, Clone)]
struct Outline {
    id: ShapeId,
    key: Option<String>,
    path: String,
}

/// SVG world map with hover highlighting and click-through country pages.
///
/// Geometry and styles live in separate signals so hover updates only touch
/// attributes, never the path list.
#[component]
pub fn WorldMap(config: MapConfig) -> impl IntoView {
    let model: RwSignal<Option<MapModel>> = RwSignal::new(None);
    let outlines: RwSignal<Vec<Outline>> = RwSignal::new(Vec::new());
    let width = config.width.to_string();
    let height = config.height.to_string();

    spawn_local(async move {
        match world::load_map(&config).await {
            Ok(loaded) => {
                web_sys::console::info_1(
                    &format!(
                        "Map ready: {} shapes, {} interactive",
                        loaded.shapes().len(),
                        loaded.interactive_count()
                    )
                    .into(),
                );
                outlines.set(
                    loaded
                        .shapes()
                        .iter()
                        .map(|s| Outline {
                            id: s.id,
                            key: s.key.clone(),
                            path: s.path.clone(),
                        })
                        .collect(),
                );
                model.set(Some(loaded));
            }
            Err(e) => {
                web_sys::console::error_1(
                    &format!("Error loading {}: {e}", config.data_url).into(),
                );
            }
        }
    });

    view! {
        <svg width=width height=height>
            <g>
                <For
                    each=move || outlines.get()
                    key=|outline| outline.id
                    children=move |outline: Outline| view! { <CountryPath outline=outline model=model /> }
                />
            </g>
        </svg>
    }
}

#[component]
fn CountryPath(outline: Outline, model: RwSignal<Option<MapModel>>) -> impl IntoView {
    let id = outline.id;
    let read = move |f: fn(&ShapeStyle) -> Option<String>| {
        model.with(|m| style_field(m.as_ref(), id, f).flatten())
    };

    let on_enter = move |_: MouseEvent| {
        model.maybe_update(|m| m.as_mut().is_some_and(|m| m.hover_enter(id)));
    };
    let on_leave = move |_: MouseEvent| {
        model.maybe_update(|m| m.as_mut().is_some_and(|m| m.hover_leave(id)));
    };
    let on_click = move |_: MouseEvent| {
        if let Some(activation) = model.with_untracked(|m| m.as_ref().map(|m| m.activate(id))) {
            follow(activation);
        }
    };

    view! {
        <path
            class="country"
            id=outline.key
            d=outline.path
            fill=move || read(|s| Some(s.fill.clone()))
            stroke=move || read(|s| s.stroke.clone())
            stroke-width=move || read(|s| s.stroke_width.map(|w| w.to_string()))
            style:cursor=move || {
                model
                    .with(|m| style_field(m.as_ref(), id, |s| s.cursor))
                    .unwrap_or_default()
                    .as_css()
            }
            on:mouseenter=on_enter
            on:mouseleave=on_leave
            on:click=on_click
        />
    }
}

/// One attribute of a shape's current style, without copying the rest.
fn style_field<T>(
    model: Option<&MapModel>,
    id: ShapeId,
    f: impl FnOnce(&ShapeStyle) -> T,
) -> Option<T> {
    model.and_then(|m| m.style(id)).map(f)
}

fn follow(activation: Activation) {
    match activation {
        Activation::Navigate(href) => {
            let Some(window) = web_sys::window() else {
                return;
            };
            if let Err(e) = window.location().set_href(&href) {
                web_sys::console::error_1(&format!("Navigation to {href} failed: {e:?}").into());
            }
        }
        Activation::Unresolved { key } => {
            web_sys::console::warn_1(&unresolved_message(&key).into());
        }
        Activation::Inert => {}
    }
}

fn unresolved_message(key: &str) -> String {
    format!("No page configured for interactive country {key}; staying on this page")
}

#[cfg(test)]
mod tests {
    use super::*;

    use travel_map_shared::{Cursor, FeatureCollection};

    const WORLD: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": { "adm0_a3": "FRA" },
                "geometry": { "type": "Polygon", "coordinates": [[[2, 46], [3, 46], [2.5, 47], [2, 46]]] }
            },
            {
                "type": "Feature",
                "properties": { "adm0_a3": "DEU" },
                "geometry": { "type": "Polygon", "coordinates": [[[9, 50], [10, 50], [9.5, 51], [9, 50]]] }
            }
        ]
    }"#;

    fn world() -> MapModel {
        let collection = FeatureCollection::from_json(WORLD).unwrap();
        MapModel::build(&collection, &MapConfig::default()).unwrap()
    }

    #[test]
    fn style_fields_follow_hover() {
        let mut model = world();
        let france = model.shapes()[0].id;
        let germany = model.shapes()[1].id;

        assert_eq!(
            style_field(Some(&model), france, |s| s.fill.clone()).as_deref(),
            Some("#10b981")
        );
        assert_eq!(style_field(Some(&model), france, |s| s.stroke.clone()), Some(None));
        assert_eq!(
            style_field(Some(&model), germany, |s| s.cursor),
            Some(Cursor::Default)
        );

        model.hover_enter(france);
        assert_eq!(
            style_field(Some(&model), france, |s| s.fill.clone()).as_deref(),
            Some("#facc15")
        );
        assert_eq!(
            style_field(Some(&model), france, |s| s.stroke_width),
            Some(Some(1.5))
        );
        assert_eq!(
            style_field(Some(&model), france, |s| s.cursor),
            Some(Cursor::Pointer)
        );
    }

    #[test]
    fn style_fields_are_empty_before_load() {
        assert_eq!(style_field(None, ShapeId(0), |s| s.fill.clone()), None);
    }

    #[test]
    fn unresolved_message_names_the_country() {
        let message = unresolved_message("FRA");
        assert!(message.contains("FRA"));
    }
}
