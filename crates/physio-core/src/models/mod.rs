pub mod clinician;
pub mod exercise;
pub mod injury;
pub mod log;
pub mod patient;
pub mod report;
