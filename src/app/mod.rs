pub mod navigation;
pub mod search;
pub mod service;
pub mod state;

pub use navigation::NavigationController;
pub use search::SearchCoordinator;
pub use service::FilesystemService;
pub use state::{DirectoryState, DirectoryStore, SearchResultSet, SearchStore};
