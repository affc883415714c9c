// File and calendar data handling
pub mod batch;
pub mod jalali;
