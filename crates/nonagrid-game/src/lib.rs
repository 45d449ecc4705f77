//! Game sessions over generated or imported puzzles.
//!
//! This crate is the surface an application layer consumes: it pairs a
//! playable board with its retained solution and exposes the gameplay
//! operations (guarded input, revealing the solution, flagging wrong
//! guesses) without requiring the caller to touch the solver directly.
//!
//! # Examples
//!
//! ```
//! use nonagrid_game::Game;
//! use nonagrid_generator::{PuzzleGenerator, Seed};
//! use nonagrid_solver::Difficulty;
//!
//! let generator = PuzzleGenerator::new(Difficulty::Easy);
//! let puzzle = generator.generate_with_seed(Seed::from_value(5)).unwrap();
//! let mut game = Game::new(puzzle);
//!
//! assert!(!game.is_solved());
//! game.reveal_solution().unwrap();
//! assert!(game.is_solved());
//! ```

pub use self::game::{Game, GameError, ImportError};

mod game;
