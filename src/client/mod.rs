//! Client side of the game: talks to the results API and drives a match.

/// Match orchestration combining game state and history.
pub mod controller;
/// Text rendering of the match history.
pub mod display;
/// Client error types.
pub mod error;
/// HTTP access to the results endpoints.
pub mod results;

pub use controller::MatchController;
pub use error::{ClientError, ClientResult};
pub use results::{ResultsApi, ResultsClient, SaveOutcome, save_and_refresh};
