pub mod catalog;
pub mod measurement_queries;

pub use catalog::list_public_tables;
pub use measurement_queries::{
    init_local_offset, measurements_since, start_of_day, today_measurements,
};
