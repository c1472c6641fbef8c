pub mod accounts;
pub mod navigation;

pub use accounts::{AccountApi, HttpAccountClient};
pub use navigation::{HistoryNavigator, Navigator};
