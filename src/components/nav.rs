use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, MouseEvent};
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::scroll::spy::{active_section, measure_sections, FrameThrottle};

pub const NAV_LINKS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("services", "Services"),
    ("about", "About"),
    ("testimonials", "Reviews"),
    ("faq", "FAQ"),
    ("contact", "Contact"),
];

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub on_book: Callback<MouseEvent>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let menu_open = use_state(|| false);
    let active = use_state(|| None::<String>);
    let throttle = use_mut_ref(FrameThrottle::default);

    {
        let active = active.clone();
        let throttle = throttle.clone();
        use_event_with_window("scroll", move |_: Event| {
            schedule_spy(throttle.clone(), active.clone());
        });
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    html! {
        <header class="header">
            <nav class="nav container">
                <a href="#home" class="nav-logo">{"HomeFix Pro"}</a>
                <ul id="navMenu" class={classes!("nav-menu", (*menu_open).then(|| "active"))}>
                    { for NAV_LINKS.iter().map(|(id, label)| {
                        let is_active = active.as_deref() == Some(*id);
                        html! {
                            <li>
                                <a href={format!("#{}", id)}
                                   class={classes!("nav-link", is_active.then(|| "active"))}
                                   onclick={close_menu.clone()}>
                                    {*label}
                                </a>
                            </li>
                        }
                    }) }
                </ul>
                <button id="bookNowHeader" class="btn btn-primary nav-cta" onclick={props.on_book.clone()}>
                    {"Book Now"}
                </button>
                <button id="navToggle" class="nav-toggle" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </nav>
        </header>
    }
}

/// Recomputes the highlighted link on the next animation frame, at most once
/// per frame however many scroll events arrive.
fn schedule_spy(throttle: Rc<RefCell<FrameThrottle>>, active: UseStateHandle<Option<String>>) {
    if !throttle.borrow_mut().request() {
        return;
    }
    let Some(window) = web_sys::window() else {
        throttle.borrow_mut().finish();
        return;
    };

    let frame_throttle = throttle.clone();
    let frame = Closure::once_into_js(move || {
        frame_throttle.borrow_mut().finish();
        let Some(window) = web_sys::window() else {
            return;
        };
        let (Some(document), Ok(scroll_y)) = (window.document(), window.scroll_y()) else {
            return;
        };
        let sections = measure_sections(&document);
        if let Some(id) = active_section(&sections, scroll_y) {
            if active.as_deref() != Some(id) {
                active.set(Some(id.to_string()));
            }
        }
    });

    if window.request_animation_frame(frame.unchecked_ref()).is_err() {
        throttle.borrow_mut().finish();
    }
}
