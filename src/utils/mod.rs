//! Small helpers shared by reports and progress output

pub mod string;
