mod di;
mod errors;
mod log;
mod parsetime;

pub use self::di::DependenciesInject;
pub use self::errors::AppError;
pub use self::log::init_logger;
pub use self::parsetime::{combine_date_time, split_date_time};
