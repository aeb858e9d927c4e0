pub mod distance;
pub mod locate_station;
