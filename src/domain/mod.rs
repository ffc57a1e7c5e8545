pub mod conditions;
pub mod dates;
pub mod decode;
pub mod units;
