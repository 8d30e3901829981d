pub mod goals_reducer;
pub mod list;
pub mod loading_reducer;
pub mod todos_reducer;
