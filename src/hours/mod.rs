pub mod schedule;
pub mod time;

pub use schedule::{
    apply_default_to_all_days, create_uniform_operating_hours,
    create_weekdays_only_operating_hours, has_at_least_one_open_day,
};
pub use time::{is_open_now, TimeOfDay};
