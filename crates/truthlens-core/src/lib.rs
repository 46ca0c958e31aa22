pub mod input;
pub mod outcome;
pub mod prediction;
pub mod session;

pub use input::{InputError, MIN_PASSAGE_CHARS, validate_passage};
pub use outcome::{ErrorKind, Outcome, VerdictKind};
pub use prediction::{Prediction, ProbabilityPair};
pub use session::{LiveResult, SessionResultCache};
