pub mod error;
pub mod parse;
pub mod reading_list;
pub mod registry;
pub mod report;
pub mod sensor;
pub mod traits;

pub use error::{Result, SensorError};
pub use reading_list::ReadingList;
pub use registry::SensorRegistry;
pub use report::ProcessReport;
pub use sensor::{normalize_id, Readings, Sensor, MAX_ID_LEN};
pub use traits::{Reading, SensorKind};
