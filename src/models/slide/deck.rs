use super::types::{Slide, SlideKind, DEFAULT_CONTENT};

/// One visitor's presentation: its name, ordered slides and the active slide.
///
/// The slide list is never empty and `selected` always names a slide in it;
/// every mutation below keeps both true.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    name: String,
    slides: Vec<Slide>,
    selected: i64,
    source_template: Option<String>,
}

impl Default for Deck {
    fn default() -> Self {
        Self {
            name: String::new(),
            slides: vec![
                Slide::new(1, "Title Slide", "Welcome to your presentation", SlideKind::Title),
                Slide::new(2, "Content Slide", DEFAULT_CONTENT, SlideKind::Content),
            ],
            selected: 1,
            source_template: None,
        }
    }
}

impl Deck {
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn selected_id(&self) -> i64 {
        self.selected
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn source_template(&self) -> Option<&str> {
        self.source_template.as_deref()
    }

    pub fn find(&self, id: i64) -> Option<&Slide> {
        self.slides.iter().find(|s| s.id == id)
    }

    /// The active slide, falling back to the first slide when the selection
    /// does not resolve.
    pub fn current_slide(&self) -> &Slide {
        self.find(self.selected).unwrap_or(&self.slides[0])
    }

    /// Append a default content slide and select it. Returns the new id.
    ///
    /// Ids continue from the largest id in the deck, so they stay unique
    /// after deletions and equal `len + 1` for a deck that has only grown.
    pub fn add_slide(&mut self) -> i64 {
        let id = self.slides.iter().map(|s| s.id).max().unwrap_or(0) + 1;
        self.slides.push(Slide::new(id, format!("Slide {id}"), DEFAULT_CONTENT, SlideKind::Content));
        self.selected = id;
        id
    }

    /// Remove a slide. Refused when only one slide is left.
    /// Returns true if a slide was removed.
    pub fn delete_slide(&mut self, id: i64) -> bool {
        if self.slides.len() <= 1 {
            return false;
        }
        let before = self.slides.len();
        self.slides.retain(|s| s.id != id);
        if self.slides.len() == before {
            return false;
        }
        if self.selected == id {
            self.selected = self.slides[0].id;
        }
        true
    }

    pub fn update_slide_title(&mut self, id: i64, title: &str) -> bool {
        match self.slides.iter_mut().find(|s| s.id == id) {
            Some(slide) => {
                slide.title = title.to_string();
                true
            }
            None => false,
        }
    }

    pub fn update_slide_content(&mut self, id: i64, content: &str) -> bool {
        match self.slides.iter_mut().find(|s| s.id == id) {
            Some(slide) => {
                slide.content = content.to_string();
                true
            }
            None => false,
        }
    }

    /// Make `id` the active slide. Unknown ids leave the selection alone.
    pub fn select_slide(&mut self, id: i64) -> bool {
        if self.find(id).is_none() {
            return false;
        }
        self.selected = id;
        true
    }

    /// Set the presentation name. Whitespace-only names reset it to untitled.
    pub fn rename(&mut self, name: &str) {
        self.name = name.trim().to_string();
    }

    /// Record the catalog template this deck was opened from.
    pub fn set_source_template(&mut self, template_id: Option<&str>) {
        self.source_template = template_id.map(str::to_string);
    }
}
