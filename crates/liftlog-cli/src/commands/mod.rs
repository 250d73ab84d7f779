pub mod exercises;
pub mod history;
pub mod maintenance;
pub mod misc;
pub mod progress;
pub mod routines;
pub mod workout;
