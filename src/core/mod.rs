pub mod codec;
pub mod repository;
pub mod store;

pub use crate::domain::location::{Location, LocationKind, TrailerTag};
pub use crate::domain::model::Record;
pub use crate::domain::ports::{ConfigProvider, RecordStorage};
pub use crate::utils::error::Result;
