pub mod bookmark;
pub mod create;
pub mod home;
pub mod not_found;
pub mod profile;
pub mod search;
pub mod sign_in;
pub mod sign_up;
pub mod welcome;

pub use bookmark::BookmarkPage;
pub use create::CreatePage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use profile::ProfilePage;
pub use search::SearchPage;
pub use sign_in::SignInPage;
pub use sign_up::SignUpPage;
pub use welcome::WelcomePage;
