pub mod error;
pub mod payloads;
pub mod records;
pub mod validation;

// Re-export the core types to provide a clean public API.
pub use error::CoreError;
pub use payloads::{CandidatePartyUpdate, NewCandidate, NewVoter, VoterEmailUpdate, decode};
pub use records::{CandidateDetails, Party, Voter};
pub use validation::{FieldError, ValidationErrors, validate};
