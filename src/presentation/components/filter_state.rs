/// Category tags offered in the tag bar.
pub const CATEGORY_TAGS: [&str; 9] = [
    "Beef",
    "Chicken",
    "Dessert",
    "Vegetarian",
    "Breakfast",
    "Vegan",
    "Seafood",
    "Pasta",
    "Side",
];

pub struct FilterState {
    search_query: String,
    tags: Vec<String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self {
            search_query: String::new(),
            tags: CATEGORY_TAGS.iter().map(|tag| tag.to_string()).collect(),
        }
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn search_query_mut(&mut self) -> &mut String {
        &mut self.search_query
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new()
    }
}
