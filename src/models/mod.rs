pub mod answer;
pub mod lesson;
pub mod quiz;
