//! Composable filter stages over a game log. Each stage is a pure function
//! taking a record list and returning the retained subset; an empty spec is
//! always a no-op. The fixed stage order lives in [crate::pipeline].

pub mod injury;
pub mod matchup;
pub mod quick;
pub mod range;
pub mod window;
