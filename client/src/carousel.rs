use gloo_timers::callback::Interval;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use travel_map_shared::{Carousel, CarouselConfig, StartPlan};

/// Start rotating the slides under the configured container.
///
/// Returns `false` when no timer was scheduled. The interval is never
/// cancelled; it lives as long as the page.
pub fn start(document: &Document, config: &CarouselConfig) -> bool {
    let slides = find_slides(document, config);
    let plan = StartPlan::for_slides(slides.as_ref().map(Vec::len));
    let Some(slides) = slides.filter(|_| plan != StartPlan::Skip) else {
        return false;
    };
    let Some(mut carousel) = Carousel::new(slides.len()) else {
        return false;
    };

    let class = config.current_class.clone();
    let mut marks: Vec<bool> = slides
        .iter()
        .map(|slide| slide.class_list().contains(&class))
        .collect();
    for index in carousel.reset_marks(&mut marks) {
        write_mark(&slides, &marks, index, &class);
    }
    if plan != StartPlan::Rotate {
        return false;
    }

    Interval::new(config.interval_ms, move || {
        if let Some(rotation) = carousel.advance(js_sys::Math::random) {
            rotation.apply(&mut marks);
            write_mark(&slides, &marks, rotation.previous, &class);
            write_mark(&slides, &marks, rotation.next, &class);
        }
    })
    .forget();
    true
}

/// `None` when the container is missing.
fn find_slides(document: &Document, config: &CarouselConfig) -> Option<Vec<Element>> {
    let container = document.get_element_by_id(&config.container_id)?;
    let nodes = container.query_selector_all(&config.slide_selector).ok()?;
    Some(
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect(),
    )
}

fn write_mark(slides: &[Element], marks: &[bool], index: usize, class: &str) {
    let (Some(slide), Some(&marked)) = (slides.get(index), marks.get(index)) else {
        return;
    };
    let classes = slide.class_list();
    let result = if marked {
        classes.add_1(class)
    } else {
        classes.remove_1(class)
    };
    if let Err(e) = result {
        web_sys::console::warn_1(&format!("Failed to toggle slide class {class}: {e:?}").into());
    }
}
