/// A single recipe as served by the upstream catalogue.
///
/// Records are immutable once fetched; a new search or warm-up replaces the
/// whole set rather than patching individual entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub category: String,
    pub thumbnail_url: String,
    pub instructions: String,
    pub video_url: Option<String>,
}

impl Recipe {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: String::new(),
            thumbnail_url: String::new(),
            instructions: String::new(),
            video_url: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_thumbnail(mut self, url: impl Into<String>) -> Self {
        self.thumbnail_url = url.into();
        self
    }

    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = instructions.into();
        self
    }

    pub fn with_video(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.video_url = if url.trim().is_empty() { None } else { Some(url) };
        self
    }

    pub fn has_id(&self) -> bool {
        !self.id.trim().is_empty()
    }
}
