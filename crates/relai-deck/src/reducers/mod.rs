pub mod deck_reducer;
