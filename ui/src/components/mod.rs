pub mod auth_form;
pub mod empty_state;
pub mod loader;
pub mod media_picker;
pub mod overflow_menu;
pub mod post_list;
pub mod profile_header;
pub mod search_input;
pub mod tab_bar;
pub mod toast;
pub mod trending;
pub mod video_card;

pub use auth_form::{AuthForm, AuthMode};
pub use empty_state::EmptyState;
pub use loader::Loader;
pub use media_picker::MediaPicker;
pub use overflow_menu::{MenuItem, OverflowMenu};
pub use post_list::PostList;
pub use profile_header::ProfileHeader;
pub use search_input::SearchInput;
pub use tab_bar::TabBar;
pub use toast::ToastContainer;
pub use trending::Trending;
pub use video_card::VideoCard;
