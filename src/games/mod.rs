//! Game engines hosted by the shell.

pub mod guessing;
pub mod tictactoe;
