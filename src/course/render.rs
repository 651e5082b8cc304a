use crate::carousel::CarouselController;
use crate::config;
use crate::course::binding::{Anchor, Background, ListItem, UiBinding};
use crate::course::model::{format_price, CourseModel};
use crate::schedule::Scheduler;

/// Writes a course into the page and rebuilds the topics slideshow.
///
/// Re-rendering the same model leaves the page exactly as the first call did.
pub fn render<U, S>(model: &CourseModel, ui: &mut U, carousel: &mut CarouselController<S>)
where
    U: UiBinding,
    S: Scheduler,
{
    render_course(model, ui);
    render_backgrounds(model, ui);
    render_career(model, ui, carousel);
}

fn render_course<U: UiBinding>(model: &CourseModel, ui: &mut U) {
    ui.set_text(Anchor::CourseName, &model.course_name);
    ui.set_text(Anchor::CourseDuration, &model.duration);
    ui.set_text(Anchor::CoursePrice, &format_price(model.price));
    ui.set_text(Anchor::CourseCurrency, &model.currency);
    ui.set_text(Anchor::CourseIncludes, &model.includes);

    let highlights = model
        .highlights
        .iter()
        .zip(0u32..)
        .map(|(text, i)| ListItem {
            text: text.clone(),
            animation_delay_ms: i * config::HIGHLIGHT_STAGGER_MS,
        })
        .collect();
    ui.set_list(Anchor::CourseHighlights, highlights);
}

// Missing or blank URLs leave whatever background the page already has.
fn render_backgrounds<U: UiBinding>(model: &CourseModel, ui: &mut U) {
    let Some(images) = &model.images else { return };
    if let Some(url) = non_blank(&images.hero) {
        ui.set_background(Anchor::HeroBackground, Background::new(url));
    }
    if let Some(url) = non_blank(&images.career) {
        ui.set_background(Anchor::CareerBackground, Background::new(url));
    }
}

fn non_blank(url: &Option<String>) -> Option<&str> {
    url.as_deref().filter(|u| !u.trim().is_empty())
}

fn render_career<U, S>(model: &CourseModel, ui: &mut U, carousel: &mut CarouselController<S>)
where
    U: UiBinding,
    S: Scheduler,
{
    if let Some(career) = &model.career_training {
        ui.set_text(Anchor::CareerTitle, &career.title);
        ui.set_text(Anchor::CareerGoal, &career.goal);
    }
    carousel.build(model.topics());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::course::binding::PageSlots;
    use crate::course::loader::{ContentFetcher, ContentLoader, ContentSource, LoadError};
    use crate::course::model::{CareerTraining, CourseImages};
    use crate::schedule::testing::ManualClock;
    use futures::executor::block_on;

    fn sample() -> CourseModel {
        CourseModel {
            course_name: "Chip Level Repair".to_string(),
            duration: "3 Months".to_string(),
            price: 45000.0,
            currency: "INR".to_string(),
            includes: "Microscope access".to_string(),
            highlights: vec!["Reballing".to_string(), "Schematics".to_string(), "Jumpers".to_string()],
            career_training: Some(CareerTraining {
                title: "Grow".to_string(),
                goal: "Run a lab".to_string(),
                topics: vec!["Pricing".to_string(), "Warranty".to_string()],
            }),
            images: Some(CourseImages { hero: Some("hero.jpg".to_string()), career: None }),
        }
    }

    fn setup() -> (PageSlots, CarouselController<ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        (PageSlots::new(), CarouselController::new(clock.clone()), clock)
    }

    #[test]
    fn writes_every_field() {
        let (mut slots, mut carousel, _clock) = setup();
        render(&sample(), &mut slots, &mut carousel);

        assert_eq!(slots.text(Anchor::CourseName), "Chip Level Repair");
        assert_eq!(slots.text(Anchor::CourseDuration), "3 Months");
        assert_eq!(slots.text(Anchor::CoursePrice), "45,000");
        assert_eq!(slots.text(Anchor::CourseCurrency), "INR");
        assert_eq!(slots.text(Anchor::CourseIncludes), "Microscope access");
        assert_eq!(slots.text(Anchor::CareerTitle), "Grow");
        assert_eq!(slots.text(Anchor::CareerGoal), "Run a lab");

        let delays: Vec<_> = slots
            .list(Anchor::CourseHighlights)
            .iter()
            .map(|item| (item.text.as_str(), item.animation_delay_ms))
            .collect();
        assert_eq!(delays, vec![("Reballing", 0), ("Schematics", 100), ("Jumpers", 200)]);

        assert_eq!(slots.background(Anchor::HeroBackground), Some(&Background::new("hero.jpg")));
        assert_eq!(slots.background(Anchor::CareerBackground), None);

        assert_eq!(carousel.len(), 2);
        assert_eq!(carousel.current_index(), Some(0));
    }

    #[test]
    fn rendering_twice_does_not_accumulate() {
        let (mut slots, mut carousel, clock) = setup();
        let model = sample();
        render(&model, &mut slots, &mut carousel);
        let first = slots.clone();
        render(&model, &mut slots, &mut carousel);

        assert_eq!(slots, first);
        assert_eq!(slots.list(Anchor::CourseHighlights).len(), model.highlights.len());
        assert_eq!(carousel.len(), 2);
        assert_eq!(clock.pending(), 1);
    }

    #[test]
    fn absent_images_keep_previous_backgrounds() {
        let (mut slots, mut carousel, _clock) = setup();
        render(&sample(), &mut slots, &mut carousel);
        let mut without_images = sample();
        without_images.images = None;
        render(&without_images, &mut slots, &mut carousel);
        assert_eq!(slots.background(Anchor::HeroBackground), Some(&Background::new("hero.jpg")));
    }

    #[test]
    fn blank_image_urls_keep_previous_backgrounds() {
        let (mut slots, mut carousel, _clock) = setup();
        let mut first = sample();
        first.images = Some(CourseImages {
            hero: Some("hero.jpg".to_string()),
            career: Some("career.jpg".to_string()),
        });
        render(&first, &mut slots, &mut carousel);

        let blank = CourseModel::from_json(r#"{"images": {"hero": "", "career": "   "}}"#).unwrap();
        render(&blank, &mut slots, &mut carousel);
        assert_eq!(slots.background(Anchor::HeroBackground), Some(&Background::new("hero.jpg")));
        assert_eq!(slots.background(Anchor::CareerBackground), Some(&Background::new("career.jpg")));
    }

    #[test]
    fn missing_anchors_are_skipped() {
        let clock = ManualClock::new();
        let mut carousel = CarouselController::new(clock.clone());
        let mut slots = PageSlots::with_anchors(&[Anchor::CourseName, Anchor::CareerGoal]);
        render(&sample(), &mut slots, &mut carousel);
        assert_eq!(slots.text(Anchor::CourseName), "Chip Level Repair");
        assert_eq!(slots.text(Anchor::CareerGoal), "Run a lab");
        assert_eq!(slots.text(Anchor::CourseDuration), "");
        assert!(slots.list(Anchor::CourseHighlights).is_empty());
        assert!(slots.background(Anchor::HeroBackground).is_none());
    }

    #[test]
    fn course_without_career_section_empties_the_slideshow() {
        let (mut slots, mut carousel, clock) = setup();
        render(&sample(), &mut slots, &mut carousel);
        let mut no_career = sample();
        no_career.career_training = None;
        render(&no_career, &mut slots, &mut carousel);
        assert_eq!(carousel.len(), 0);
        assert_eq!(clock.pending(), 0);
    }

    struct ServerError;

    impl ContentFetcher for ServerError {
        async fn fetch(&self) -> Result<String, LoadError> {
            Err(LoadError::Status(500))
        }
    }

    #[test]
    fn failed_load_renders_the_fallback_course() {
        let result = block_on(ContentLoader::new(ServerError).load());
        assert_eq!(result.source, ContentSource::Fallback);

        let (mut slots, mut carousel, _clock) = setup();
        render(&result.model, &mut slots, &mut carousel);
        assert_eq!(slots.text(Anchor::CourseName), "Mobile Repairing Master Course");
        assert_eq!(slots.text(Anchor::CoursePrice), "20,000");
        assert_eq!(slots.list(Anchor::CourseHighlights).len(), 6);
        assert_eq!(carousel.len(), 6);
    }
}
