pub mod genetic;
