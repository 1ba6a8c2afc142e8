pub mod loading;
pub mod quick_links;
pub mod stat_list;
pub mod welcome;

pub use loading::LoadingIndicator;
pub use quick_links::QuickLinks;
pub use stat_list::StatList;
pub use welcome::WelcomeMessage;
