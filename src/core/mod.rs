pub mod list_view;
pub mod search_control;
pub mod selection;

pub use crate::domain::model::{Movie, SearchHit};
pub use crate::domain::ports::{ConfigProvider, MovieSearch};
pub use crate::utils::error::Result;
