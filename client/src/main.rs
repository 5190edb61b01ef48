mod app;
mod carousel;
mod map;
mod world;

use leptos::mount::mount_to;
use std::any::Any;
use std::cell::RefCell;
use travel_map_shared::CarouselConfig;
use travel_map_shared::config::MAP_MOUNT_ID;
use wasm_bindgen::JsCast;

thread_local! {
    static MAP_MOUNT_HANDLE: RefCell<Option<Box<dyn Any>>> = RefCell::new(None);
}

fn main() {
    console_error_panic_hook::set_once();
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    // Pages without a map mount point still get the carousel.
    if let Some(target) = document
        .get_element_by_id(MAP_MOUNT_ID)
        .and_then(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
    {
        MAP_MOUNT_HANDLE.with(move |slot| {
            // Re-entered main() (dev reload) must not leave a second live map behind.
            let _old = slot.borrow_mut().take();
            let handle = mount_to(target, app::App);
            *slot.borrow_mut() = Some(Box::new(handle));
        });
    }

    carousel::start(&document, &CarouselConfig::default());
}
