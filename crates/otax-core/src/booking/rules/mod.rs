//! Shared extraction rules: the regex pattern table and the date lexicon.

pub mod dates;
pub mod patterns;

pub use dates::{
    compose_month_day_year, last_day_of_month, month_number, parse_localized_sent_date,
    parse_long_date,
};
pub use patterns::CURRENCY_CODES;
