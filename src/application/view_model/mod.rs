mod favorites_store;
mod recipe_list;
mod request;
mod view_state;

pub use favorites_store::{FAVORITES_KEY, FavoritesStore};
pub use recipe_list::{FavoriteToggle, RecipeListViewModel};
pub use request::{RequestSequence, RequestToken};
pub use view_state::{DEFAULT_PAGE_SIZE, ViewState};
