pub mod observation_table;
pub mod wide_table;
