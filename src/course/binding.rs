use std::collections::{HashMap, HashSet};

/// Named places on the page that content is written into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    CourseName,
    CourseDuration,
    CoursePrice,
    CourseCurrency,
    CourseIncludes,
    CourseHighlights,
    CareerTitle,
    CareerGoal,
    HeroBackground,
    CareerBackground,
    TopicsSlideshow,
    SlideshowDots,
    FormAlerts,
}

impl Anchor {
    pub const ALL: [Anchor; 13] = [
        Anchor::CourseName,
        Anchor::CourseDuration,
        Anchor::CoursePrice,
        Anchor::CourseCurrency,
        Anchor::CourseIncludes,
        Anchor::CourseHighlights,
        Anchor::CareerTitle,
        Anchor::CareerGoal,
        Anchor::HeroBackground,
        Anchor::CareerBackground,
        Anchor::TopicsSlideshow,
        Anchor::SlideshowDots,
        Anchor::FormAlerts,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Anchor::CourseName => "course-name",
            Anchor::CourseDuration => "course-duration",
            Anchor::CoursePrice => "course-price",
            Anchor::CourseCurrency => "course-currency",
            Anchor::CourseIncludes => "course-includes",
            Anchor::CourseHighlights => "course-highlights",
            Anchor::CareerTitle => "career-title",
            Anchor::CareerGoal => "career-goal",
            Anchor::HeroBackground => "hero-bg",
            Anchor::CareerBackground => "career-bg",
            Anchor::TopicsSlideshow => "topics-slideshow",
            Anchor::SlideshowDots => "slideshow-dots",
            Anchor::FormAlerts => "form-alerts",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListItem {
    pub text: String,
    pub animation_delay_ms: u32,
}

impl ListItem {
    pub fn style(&self) -> String {
        format!("animation-delay: {}s;", f64::from(self.animation_delay_ms) / 1000.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Background {
    pub url: String,
}

impl Background {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn style(&self) -> String {
        format!(
            "background-image: url('{}'); background-repeat: no-repeat; background-size: cover; background-position: center center;",
            self.url
        )
    }
}

/// Output side of the content renderer.
///
/// Writing to an anchor the page does not have is a no-op, never an error.
pub trait UiBinding {
    fn set_text(&mut self, anchor: Anchor, value: &str);
    fn set_list(&mut self, anchor: Anchor, items: Vec<ListItem>);
    fn set_background(&mut self, anchor: Anchor, background: Background);
}

/// In-memory page content; the landing page view reads from it.
#[derive(Debug, Clone, PartialEq)]
pub struct PageSlots {
    mounted: HashSet<Anchor>,
    texts: HashMap<Anchor, String>,
    lists: HashMap<Anchor, Vec<ListItem>>,
    backgrounds: HashMap<Anchor, Background>,
}

impl Default for PageSlots {
    fn default() -> Self {
        Self::with_anchors(&Anchor::ALL)
    }
}

impl PageSlots {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_anchors(anchors: &[Anchor]) -> Self {
        Self {
            mounted: anchors.iter().copied().collect(),
            texts: HashMap::new(),
            lists: HashMap::new(),
            backgrounds: HashMap::new(),
        }
    }

    pub fn text(&self, anchor: Anchor) -> &str {
        self.texts.get(&anchor).map(String::as_str).unwrap_or("")
    }

    pub fn list(&self, anchor: Anchor) -> &[ListItem] {
        self.lists.get(&anchor).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn background(&self, anchor: Anchor) -> Option<&Background> {
        self.backgrounds.get(&anchor)
    }

    /// Inline style for a section that may carry a background image.
    pub fn background_style(&self, anchor: Anchor) -> Option<String> {
        self.background(anchor).map(Background::style)
    }
}

impl UiBinding for PageSlots {
    fn set_text(&mut self, anchor: Anchor, value: &str) {
        if self.mounted.contains(&anchor) {
            self.texts.insert(anchor, value.to_string());
        }
    }

    fn set_list(&mut self, anchor: Anchor, items: Vec<ListItem>) {
        if self.mounted.contains(&anchor) {
            self.lists.insert(anchor, items);
        }
    }

    fn set_background(&mut self, anchor: Anchor, background: Background) {
        if self.mounted.contains(&anchor) {
            self.backgrounds.insert(anchor, background);
        }
    }
}
