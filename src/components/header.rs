use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, KeyboardEvent, MouseEvent, Node};
use yew::prelude::*;

use crate::config;

const NAV_LINKS: &[(&str, &str)] = &[
    ("#home", "Home"),
    ("#course", "Course"),
    ("#career", "Career"),
    ("#contact", "Contact"),
];

// quiet period after the last scroll event before the active link is recomputed
const ACTIVE_LINK_DEBOUNCE_MS: u32 = 50;

/// Vertical extent of a page section, in document pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds<'a> {
    pub id: &'a str,
    pub top: f64,
    pub height: f64,
}

/// Id of the section the reader is in, if any.
///
/// A section counts as entered a little before its top reaches the bottom of
/// the fixed header. When ranges overlap the later section wins.
pub fn active_section<'a>(sections: &[SectionBounds<'a>], scroll_y: f64, header_height: f64) -> Option<&'a str> {
    sections
        .iter()
        .filter(|section| {
            let top = section.top - header_height - config::SECTION_ACTIVATION_OFFSET;
            scroll_y >= top && scroll_y < top + section.height
        })
        .last()
        .map(|section| section.id)
}

fn measure_sections(document: &Document) -> Vec<SectionBounds<'static>> {
    NAV_LINKS
        .iter()
        .filter_map(|&(href, _)| {
            let id = href.trim_start_matches('#');
            let section = document.get_element_by_id(id)?.dyn_into::<HtmlElement>().ok()?;
            Some(SectionBounds {
                id,
                top: f64::from(section.offset_top()),
                height: f64::from(section.offset_height()),
            })
        })
        .collect()
}

fn header_height(document: &Document) -> f64 {
    document
        .query_selector("header")
        .ok()
        .flatten()
        .and_then(|header| header.dyn_into::<HtmlElement>().ok())
        .map(|header| f64::from(header.offset_height()))
        .unwrap_or(0.0)
}

fn contains(node: &NodeRef, target: &Node) -> bool {
    node.get().map_or(false, |node| node.contains(Some(target)))
}

#[function_component(Header)]
pub fn header() -> Html {
    let menu_open = use_state_eq(|| false);
    let is_scrolled = use_state_eq(|| false);
    let active = use_state_eq(|| None::<&'static str>);
    let nav_menu = use_node_ref();
    let toggle = use_node_ref();

    {
        let is_scrolled = is_scrolled.clone();
        let active = active.clone();
        use_effect_with_deps(move |_| {
            let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
            let listener = web_sys::window().map(|window| {
                let win = window.clone();
                let pending = pending.clone();
                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = win.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(scroll_top > config::HEADER_SCROLL_THRESHOLD);

                    let Some(document) = win.document() else { return };
                    let active = active.clone();
                    let win = win.clone();
                    // replacing the handle cancels the previous recompute
                    *pending.borrow_mut() = Some(Timeout::new(ACTIVE_LINK_DEBOUNCE_MS, move || {
                        let scroll_y = win.scroll_y().unwrap_or(0.0);
                        let sections = measure_sections(&document);
                        active.set(active_section(&sections, scroll_y, header_height(&document)));
                    }));
                }) as Box<dyn FnMut()>);
                let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                (window, scroll_callback)
            });

            move || {
                if let Some((window, scroll_callback)) = listener {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
                pending.borrow_mut().take();
            }
        }, ());
    }

    // Escape or a click outside the menu closes it
    {
        let menu_open = menu_open.clone();
        let nav_menu = nav_menu.clone();
        let toggle = toggle.clone();
        use_effect_with_deps(move |_| {
            let listeners = web_sys::window().and_then(|w| w.document()).map(|document| {
                let key_callback = {
                    let menu_open = menu_open.clone();
                    Closure::wrap(Box::new(move |e: KeyboardEvent| {
                        if e.key() == "Escape" {
                            menu_open.set(false);
                        }
                    }) as Box<dyn FnMut(KeyboardEvent)>)
                };
                let click_callback = Closure::wrap(Box::new(move |e: MouseEvent| {
                    let Some(target) = e.target().and_then(|t| t.dyn_into::<Node>().ok()) else {
                        return;
                    };
                    if !contains(&nav_menu, &target) && !contains(&toggle, &target) {
                        menu_open.set(false);
                    }
                }) as Box<dyn FnMut(MouseEvent)>);
                let _ = document.add_event_listener_with_callback("keydown", key_callback.as_ref().unchecked_ref());
                let _ = document.add_event_listener_with_callback("click", click_callback.as_ref().unchecked_ref());
                (document, key_callback, click_callback)
            });

            move || {
                if let Some((document, key_callback, click_callback)) = listeners {
                    let _ = document.remove_event_listener_with_callback("keydown", key_callback.as_ref().unchecked_ref());
                    let _ = document.remove_event_listener_with_callback("click", click_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    // Growing past the mobile breakpoint closes the menu
    {
        let menu_open = menu_open.clone();
        use_effect_with_deps(move |_| {
            let listener = web_sys::window().map(|window| {
                let win = window.clone();
                let resize_callback = Closure::wrap(Box::new(move || {
                    let width = win.inner_width().ok().and_then(|w| w.as_f64()).unwrap_or(0.0);
                    if width > config::MOBILE_BREAKPOINT {
                        menu_open.set(false);
                    }
                }) as Box<dyn FnMut()>);
                let _ = window.add_event_listener_with_callback("resize", resize_callback.as_ref().unchecked_ref());
                (window, resize_callback)
            });

            move || {
                if let Some((window, resize_callback)) = listener {
                    let _ = window.remove_event_listener_with_callback("resize", resize_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    // body scroll lock while the menu is open
    use_effect_with_deps(move |open| {
        let body = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body());
        if let Some(body) = &body {
            let _ = body.class_list().toggle_with_force("menu-open", *open);
        }
        move || {
            if let Some(body) = body {
                let _ = body.class_list().remove_1("menu-open");
            }
        }
    }, *menu_open);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
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
        <header class={classes!((*is_scrolled).then(|| "scrolled"))}>
            <nav class="nav-content">
                <a href="#home" class="nav-logo">{"Mobile Repair Academy"}</a>
                <button
                    id="mobile-toggle"
                    ref={toggle}
                    class={classes!("mobile-toggle", (*menu_open).then(|| "active"))}
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <ul id="nav-menu" ref={nav_menu} class={classes!("nav-menu", (*menu_open).then(|| "active"))}>
                    {
                        for NAV_LINKS.iter().map(|&(href, label)| {
                            let is_active = *active == Some(href.trim_start_matches('#'));
                            html! {
                                <li>
                                    <a
                                        href={href}
                                        class={classes!(is_active.then(|| "active"))}
                                        onclick={close_menu.clone()}
                                    >{label}</a>
                                </li>
                            }
                        })
                    }
                </ul>
            </nav>
            {
                if *menu_open {
                    html! { <div class="nav-overlay active" onclick={close_menu.clone()}></div> }
                } else {
                    html! {}
                }
            }
        </header>
    }
}
