pub mod request;
pub mod time_of_day;

pub use request::SleepRequest;
pub use time_of_day::TimeOfDay;
