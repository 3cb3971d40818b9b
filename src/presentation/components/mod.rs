pub mod details_panel;
pub mod filter_state;
pub mod log_manager;
pub mod recipe_grid;
pub mod tab_manager;
pub mod tag_bar;
pub mod toast;

pub use details_panel::DetailsPanel;
pub use filter_state::{CATEGORY_TAGS, FilterState};
pub use log_manager::{LogEntry, LogManager};
pub use recipe_grid::{PageAction, RecipeAction, RecipeGrid};
pub use tab_manager::{Tab, TabManager};
pub use tag_bar::TagBar;
pub use toast::ToastQueue;
