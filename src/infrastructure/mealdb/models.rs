use crate::domain::entities::Recipe;
use serde::Deserialize;

/// Envelope shared by every TheMealDB endpoint. `meals` is `null` on no match.
#[derive(Debug, Default, Deserialize)]
pub struct MealsResponse {
    #[serde(default)]
    pub meals: Option<Vec<MealDto>>,
}

impl MealsResponse {
    pub fn into_recipes(self) -> Vec<Recipe> {
        self.meals
            .unwrap_or_default()
            .into_iter()
            .map(Recipe::from)
            .collect()
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct MealDto {
    #[serde(rename = "idMeal", default)]
    pub id: Option<String>,
    #[serde(rename = "strMeal", default)]
    pub name: Option<String>,
    #[serde(rename = "strCategory", default)]
    pub category: Option<String>,
    #[serde(rename = "strMealThumb", default)]
    pub thumbnail: Option<String>,
    #[serde(rename = "strInstructions", default)]
    pub instructions: Option<String>,
    #[serde(rename = "strYoutube", default)]
    pub youtube: Option<String>,
}

impl From<MealDto> for Recipe {
    fn from(dto: MealDto) -> Self {
        Recipe::new(dto.id.unwrap_or_default(), dto.name.unwrap_or_default())
            .with_category(dto.category.unwrap_or_default())
            .with_thumbnail(dto.thumbnail.unwrap_or_default())
            .with_instructions(dto.instructions.unwrap_or_default())
            .with_video(dto.youtube.unwrap_or_default())
    }
}
