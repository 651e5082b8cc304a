use gloo_timers::callback::Timeout;
use log::info;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::config;
use crate::course::model::format_price;

/// Share of the page scrolled so far, in percent.
pub fn scroll_progress_percent(scroll_top: f64, scroll_height: f64, client_height: f64) -> f64 {
    let scrollable = scroll_height - client_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}

#[function_component(ScrollProgress)]
pub fn scroll_progress() -> Html {
    let progress = use_state(|| 0.0_f64);

    {
        let progress = progress.clone();
        use_effect_with_deps(move |_| {
            let listener = web_sys::window().map(|window| {
                let win = window.clone();
                let scroll_callback = Closure::wrap(Box::new(move || {
                    let Some(root) = win.document().and_then(|d| d.document_element()) else {
                        return;
                    };
                    let scroll_top = win.scroll_y().unwrap_or(0.0);
                    progress.set(scroll_progress_percent(
                        scroll_top,
                        f64::from(root.scroll_height()),
                        f64::from(root.client_height()),
                    ));
                }) as Box<dyn FnMut()>);
                let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                (window, scroll_callback)
            });

            move || {
                if let Some((window, scroll_callback)) = listener {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    html! {
        <div class="scroll-progress" style={format!("width: {}%;", *progress)}></div>
    }
}

pub fn whatsapp_url() -> String {
    format!(
        "https://wa.me/{}?text={}",
        config::WHATSAPP_NUMBER,
        urlencoding::encode(config::WHATSAPP_GREETING)
    )
}

#[function_component(WhatsAppWidget)]
pub fn whatsapp_widget() -> Html {
    let visible = use_state(|| false);
    let pressed = use_state(|| false);

    // entrance animation
    {
        let visible = visible.clone();
        use_effect_with_deps(move |_| {
            let timeout = Timeout::new(1000, move || visible.set(true));
            move || drop(timeout)
        }, ());
    }

    let onclick = {
        let pressed = pressed.clone();
        Callback::from(move |_: MouseEvent| {
            info!("WhatsApp widget clicked");
            pressed.set(true);
            let pressed = pressed.clone();
            Timeout::new(150, move || pressed.set(false)).forget();
        })
    };

    html! {
        <div id="whatsapp-widget" class={classes!("whatsapp-widget", (*visible).then(|| "visible"))}>
            <a
                class="whatsapp-link"
                href={whatsapp_url()}
                target="_blank"
                rel="noopener noreferrer"
                style={if *pressed { "transform: scale(0.95);" } else { "transform: scale(1);" }}
                {onclick}
            >
                <i class="fab fa-whatsapp"></i>
            </a>
        </div>
    }
}

/// First `count` characters of `text`.
pub fn typed_prefix(text: &str, count: usize) -> &str {
    match text.char_indices().nth(count) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

#[derive(Properties, PartialEq)]
pub struct TypedTextProps {
    pub text: AttrValue,
}

/// Types `text` out one character at a time after a short pause.
#[function_component(TypedText)]
pub fn typed_text(props: &TypedTextProps) -> Html {
    let shown = use_state(|| 0usize);

    {
        let shown_handle = shown.clone();
        let total = props.text.chars().count();
        use_effect_with_deps(move |&count| {
            let timeout = (count < total).then(|| {
                let delay = if count == 0 { config::TYPING_START_MS } else { config::TYPING_CHAR_MS };
                Timeout::new(delay, move || shown_handle.set(count + 1))
            });
            move || drop(timeout)
        }, *shown);
    }

    html! { <span class="typed-text">{ typed_prefix(&props.text, *shown) }</span> }
}

pub const PRICE_FRAMES: u32 = config::PRICE_COUNT_MS / config::PRICE_FRAME_MS;

/// Value shown by the price counter after `frame` frames.
pub fn counted_price(target: f64, frame: u32) -> f64 {
    if !target.is_finite() || target <= 0.0 {
        return 0.0;
    }
    let step = target / f64::from(PRICE_FRAMES);
    (step * f64::from(frame)).min(target).floor()
}

#[derive(Properties, PartialEq)]
pub struct PriceCounterProps {
    pub target: f64,
    /// Final text, shown once the count is done.
    pub text: AttrValue,
}

#[function_component(PriceCounter)]
pub fn price_counter(props: &PriceCounterProps) -> Html {
    let frame = use_state(|| 0u32);

    {
        let frame_handle = frame.clone();
        use_effect_with_deps(move |&current| {
            let timeout = (current < PRICE_FRAMES)
                .then(|| Timeout::new(config::PRICE_FRAME_MS, move || frame_handle.set(current + 1)));
            move || drop(timeout)
        }, *frame);
    }

    if *frame >= PRICE_FRAMES {
        html! { <>{ props.text.to_string() }</> }
    } else {
        html! { <>{ format_price(counted_price(props.target, *frame)) }</> }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_a_percentage_of_the_scrollable_height() {
        assert_eq!(scroll_progress_percent(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress_percent(1000.0, 3000.0, 1000.0), 50.0);
        assert_eq!(scroll_progress_percent(2000.0, 3000.0, 1000.0), 100.0);
    }

    #[test]
    fn short_pages_report_no_progress() {
        assert_eq!(scroll_progress_percent(10.0, 800.0, 800.0), 0.0);
    }

    #[test]
    fn typing_reveals_whole_characters() {
        assert_eq!(typed_prefix("Repair", 0), "");
        assert_eq!(typed_prefix("Repair", 3), "Rep");
        assert_eq!(typed_prefix("Repair", 6), "Repair");
        assert_eq!(typed_prefix("Repair", 40), "Repair");
        assert_eq!(typed_prefix("₹ price", 1), "₹");
    }

    #[test]
    fn price_counts_up_to_the_target_and_stops() {
        assert_eq!(PRICE_FRAMES, 125);
        assert_eq!(counted_price(20000.0, 0), 0.0);
        assert_eq!(counted_price(20000.0, 1), 160.0);
        assert_eq!(counted_price(20000.0, 62), 9920.0);
        assert_eq!(counted_price(20000.0, PRICE_FRAMES), 20000.0);
        assert_eq!(counted_price(20000.0, PRICE_FRAMES + 10), 20000.0);
        assert_eq!(format_price(counted_price(20000.0, PRICE_FRAMES)), "20,000");
    }

    #[test]
    fn price_counter_never_goes_negative() {
        assert_eq!(counted_price(0.0, 50), 0.0);
        assert_eq!(counted_price(-5.0, 50), 0.0);
        assert_eq!(counted_price(f64::NAN, 50), 0.0);
    }

    #[test]
    fn whatsapp_link_carries_an_encoded_greeting() {
        let url = whatsapp_url();
        assert!(url.starts_with(&format!("https://wa.me/{}?text=", config::WHATSAPP_NUMBER)));
        assert!(!url.contains(' '));
        assert!(url.contains("Mobile%20Repairing%20Master%20Course"));
    }
}
