pub mod chart;
pub mod dashboard;
pub mod duration_prompt;
pub mod personal_best;
pub mod stats_bar;
pub mod typing_area;
