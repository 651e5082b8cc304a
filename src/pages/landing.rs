use log::info;
use yew::prelude::*;

use crate::alerts::AlertChannel;
use crate::carousel::CarouselController;
use crate::components::contact::{report_submission, ContactForm, SubmitError};
use crate::components::header::Header;
use crate::components::widgets::{PriceCounter, ScrollProgress, TypedText, WhatsAppWidget};
use crate::config;
use crate::course::binding::{Anchor, PageSlots};
use crate::course::loader::{ContentLoader, ContentSource, HttpFetcher, LoadResult};
use crate::course::render::render;
use crate::schedule::{Scheduler, TimerScheduler};

const TOPIC_BLURB: &str = "Learn essential skills for your mobile repair business success";
const HERO_TAGLINE: &str = "Become a certified mobile repair technician";

const PAGE_STYLE: &str = r#"
    html { scroll-behavior: smooth; scroll-padding-top: 80px; }
    body.menu-open { overflow: hidden; }
    header { position: fixed; top: 0; left: 0; right: 0; z-index: 1000; background: rgba(255, 255, 255, 0.9); transition: background 0.3s ease, box-shadow 0.3s ease, padding 0.3s ease; padding: 1rem 0; }
    header.scrolled { background: #ffffff; box-shadow: 0 2px 20px rgba(0, 0, 0, 0.1); padding: 0.5rem 0; }
    .nav-content { display: flex; align-items: center; justify-content: space-between; max-width: 1200px; margin: 0 auto; padding: 0 1rem; }
    .nav-menu { display: flex; gap: 1.5rem; list-style: none; margin: 0; padding: 0; }
    .nav-menu a { color: #333; text-decoration: none; }
    .nav-menu a.active { color: #0066ff; border-bottom: 2px solid #0066ff; }
    .mobile-toggle { display: none; flex-direction: column; gap: 4px; background: none; border: none; cursor: pointer; }
    .mobile-toggle span { width: 24px; height: 3px; background: #333; transition: transform 0.3s ease, opacity 0.3s ease; }
    .mobile-toggle.active span:nth-child(1) { transform: translateY(7px) rotate(45deg); }
    .mobile-toggle.active span:nth-child(2) { opacity: 0; }
    .mobile-toggle.active span:nth-child(3) { transform: translateY(-7px) rotate(-45deg); }
    .nav-overlay { display: none; }
    .nav-overlay.active { display: block; position: fixed; inset: 0; background: rgba(0, 0, 0, 0.5); z-index: 998; }
    @media (max-width: 768px) {
        .mobile-toggle { display: flex; z-index: 1001; }
        .nav-menu { display: none; position: fixed; top: 0; right: 0; height: 100vh; width: 70%; flex-direction: column; padding: 5rem 2rem; background: #ffffff; box-shadow: -2px 0 20px rgba(0, 0, 0, 0.1); z-index: 999; }
        .nav-menu.active { display: flex; }
    }
    .alert { display: flex; align-items: center; gap: 0.5rem; padding: 0.75rem 1rem; border-radius: 8px; margin-bottom: 1rem; }
    .alert-success { background: #d4edda; color: #155724; border: 1px solid #c3e6cb; }
    .alert-error { background: #f8d7da; color: #721c24; border: 1px solid #f5c6cb; }
    .course-card, .topic-card { transition: transform 0.3s ease; }
    .course-card:hover, .topic-card:hover { transform: translateY(-5px); }
    .typed-text { border-right: 2px solid currentColor; padding-right: 2px; }
    .hero, .career-section { position: relative; }
    .hero-bg, .career-bg { position: absolute; inset: 0; z-index: -1; }
    .topics-slideshow { overflow: hidden; position: relative; }
    .topics-container { display: flex; transition: transform 0.5s ease-in-out; }
    .topic-card { flex: 0 0 100%; box-sizing: border-box; padding: 2rem; text-align: center; }
    .slideshow-dots { display: flex; justify-content: center; gap: 0.5rem; margin-top: 1rem; }
    .dot { width: 10px; height: 10px; border-radius: 50%; background: #ccc; cursor: pointer; }
    .dot.active { background: #0066ff; }
    .course-highlights li { animation: fadeInUp 0.6s ease both; }
    .scroll-progress { position: fixed; top: 0; left: 0; height: 3px; background: linear-gradient(90deg, #0066ff, #00d4ff); z-index: 9999; transition: width 0.1s ease; }
    .whatsapp-widget { position: fixed; bottom: 20px; right: 20px; z-index: 1000; opacity: 0; transform: translateY(100px); transition: all 0.3s ease; }
    .whatsapp-widget.visible { opacity: 1; transform: translateY(0); }
    @keyframes fadeInUp {
        from { opacity: 0; transform: translateY(20px); }
        to { opacity: 1; transform: translateY(0); }
    }

"#;

pub enum LandingMsg {
    ContentLoaded(LoadResult),
    Tick,
    Next,
    Prev,
    GoTo(usize),
    Submitted(Result<(), SubmitError>),
    ClearAlert,
}

pub struct Landing {
    slots: PageSlots,
    source: Option<ContentSource>,
    price: f64,
    carousel: CarouselController<TimerScheduler>,
    alerts: AlertChannel<TimerScheduler>,
}

impl Component for Landing {
    type Message = LandingMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_future(async {
            let loader = ContentLoader::new(HttpFetcher::new(config::content_url()));
            LandingMsg::ContentLoaded(loader.load().await)
        });

        let link = ctx.link();
        Self {
            slots: PageSlots::new(),
            source: None,
            price: 0.0,
            carousel: CarouselController::new(TimerScheduler::new(link.callback(|_| LandingMsg::Tick))),
            alerts: AlertChannel::new(TimerScheduler::new(link.callback(|_| LandingMsg::ClearAlert))),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            LandingMsg::ContentLoaded(result) => {
                info!("Rendering course content ({:?})", result.source);
                render(&result.model, &mut self.slots, &mut self.carousel);
                self.source = Some(result.source);
                self.price = result.model.price;
                true
            }
            LandingMsg::Tick => {
                self.carousel.tick();
                true
            }
            LandingMsg::Next => {
                self.carousel.next();
                true
            }
            LandingMsg::Prev => {
                self.carousel.prev();
                true
            }
            LandingMsg::GoTo(index) => {
                self.carousel.go_to(index);
                true
            }
            LandingMsg::Submitted(result) => {
                report_submission(&mut self.alerts, &result);
                true
            }
            LandingMsg::ClearAlert => {
                self.alerts.expire();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <>
                <ScrollProgress />
                <Header />
                <main class={classes!("landing", self.source.is_none().then(|| "loading"))}>
                    { self.view_hero() }
                    { self.view_course() }
                    { self.view_career(ctx) }
                    <section id="contact" class="contact-section">
                        <h2>{"Enroll Now"}</h2>
                        <p>{"Leave your details and we'll call you back about the next batch."}</p>
                        <ContactForm
                            alert={self.alerts.current().cloned()}
                            on_result={ctx.link().callback(LandingMsg::Submitted)}
                        />
                    </section>
                </main>
                <footer class="footer">
                    <p>{"© Mobile Repair Academy. All rights reserved."}</p>
                </footer>
                <WhatsAppWidget />
                <style>{PAGE_STYLE}</style>
            </>
        }
    }
}

fn slide_label<S: Scheduler>(carousel: &CarouselController<S>) -> String {
    match carousel.current_index() {
        Some(i) => format!("Slide {} of {}", i + 1, carousel.len()),
        None => "No slides".to_string(),
    }
}

impl Landing {
    fn text(&self, anchor: Anchor) -> Html {
        html! { <span id={anchor.id()}>{self.slots.text(anchor)}</span> }
    }

    fn view_hero(&self) -> Html {
        html! {
            <section id="home" class="hero">
                <div
                    id={Anchor::HeroBackground.id()}
                    class="hero-bg"
                    style={self.slots.background_style(Anchor::HeroBackground)}
                ></div>
                <div class="hero-content">
                    <h1>{ self.slots.text(Anchor::CourseName) }</h1>
                    <h2><TypedText text={HERO_TAGLINE} /></h2>
                    <a href="#contact" class="cta-button">{"Enroll Now"}</a>
                </div>
            </section>
        }
    }

    fn view_course(&self) -> Html {
        html! {
            <section id="course" class="course-section">
                <div class="course-card">
                    <h3>{ self.text(Anchor::CourseName) }</h3>
                    <div class="course-meta">
                        <span class="duration"><i class="bi bi-clock"></i>{" "}{ self.text(Anchor::CourseDuration) }</span>
                        <span class="price">
                            { self.text(Anchor::CourseCurrency) }{" "}
                            <span id={Anchor::CoursePrice.id()} class="price-counter">
                                {
                                    if self.source.is_some() {
                                        html! {
                                            <PriceCounter
                                                key={self.price.to_bits().to_string()}
                                                target={self.price}
                                                text={self.slots.text(Anchor::CoursePrice).to_string()}
                                            />
                                        }
                                    } else {
                                        html! {}
                                    }
                                }
                            </span>
                        </span>
                    </div>
                    <p class="includes">{ self.text(Anchor::CourseIncludes) }</p>
                    <ul id={Anchor::CourseHighlights.id()} class="course-highlights">
                        {
                            for self.slots.list(Anchor::CourseHighlights).iter().map(|item| html! {
                                <li style={item.style()}>{&item.text}</li>
                            })
                        }
                    </ul>
                </div>
            </section>
        }
    }

    fn view_career(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        html! {
            <section id="career" class="career-section">
                <div
                    id={Anchor::CareerBackground.id()}
                    class="career-bg"
                    style={self.slots.background_style(Anchor::CareerBackground)}
                ></div>
                <h2>{ self.text(Anchor::CareerTitle) }</h2>
                <p class="career-goal">{ self.text(Anchor::CareerGoal) }</p>
                <div
                    id={Anchor::TopicsSlideshow.id()}
                    class="topics-slideshow"
                    role="region"
                    aria-roledescription="carousel"
                    aria-label={slide_label(&self.carousel)}
                    aria-live={if self.carousel.timer_active() { "off" } else { "polite" }}
                >
                    <div class="topics-container" style={self.carousel.track_transform()}>
                        {
                            for self.carousel.slides().iter().map(|slide| html! {
                                <div class="topic-card">
                                    <i class={classes!("bi", slide.icon)}></i>
                                    <h5>{&slide.topic}</h5>
                                    <p>{TOPIC_BLURB}</p>
                                </div>
                            })
                        }
                    </div>
                </div>
                <div class="slideshow-controls">
                    <button class="slide-arrow prev" onclick={link.callback(|_| LandingMsg::Prev)}>
                        <i class="bi bi-chevron-left"></i>
                    </button>
                    <button class="slide-arrow next" onclick={link.callback(|_| LandingMsg::Next)}>
                        <i class="bi bi-chevron-right"></i>
                    </button>
                </div>
                <div id={Anchor::SlideshowDots.id()} class="slideshow-dots">
                    {
                        for self.carousel.dot_states().into_iter().enumerate().map(|(i, active)| html! {
                            <div
                                class={classes!("dot", active.then(|| "active"))}
                                onclick={link.callback(move |_| LandingMsg::GoTo(i))}
                            ></div>
                        })
                    }
                </div>
            </section>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alerts::AlertKind;
    use crate::schedule::testing::ManualClock;

    #[test]
    fn slideshow_label_follows_the_current_slide() {
        let clock = ManualClock::new();
        let mut carousel = CarouselController::new(clock.clone());
        assert_eq!(slide_label(&carousel), "No slides");

        carousel.build(&["Pricing", "Warranty", "Marketing"]);
        assert_eq!(slide_label(&carousel), "Slide 1 of 3");
        carousel.prev();
        assert_eq!(slide_label(&carousel), "Slide 3 of 3");
        assert!(carousel.timer_active());
    }

    #[test]
    fn stylesheet_covers_header_and_menu_states() {
        for selector in [
            "header.scrolled",
            ".nav-menu.active",
            ".nav-menu a.active",
            ".mobile-toggle.active",
            ".nav-overlay.active",
            "body.menu-open",
            "@media (max-width: 768px)",
        ] {
            assert!(PAGE_STYLE.contains(selector), "missing rule for {}", selector);
        }
        assert!(PAGE_STYLE.contains("inset: 0"));
    }

    #[test]
    fn stylesheet_colours_both_alert_kinds() {
        for kind in [AlertKind::Success, AlertKind::Error] {
            for class in kind.class().split_whitespace() {
                assert!(PAGE_STYLE.contains(&format!(".{}", class)), "missing rule for {}", class);
            }
        }
    }
}
