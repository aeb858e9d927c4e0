pub mod frames;
pub mod into_utc_trait;
pub mod observation;
pub mod parameter;
pub mod station;
