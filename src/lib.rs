pub mod candidates;
pub mod decode;
pub mod detect;
pub mod error;
pub mod locale;

pub use candidates::{build_candidates, CandidateList};
pub use decode::{decode, DecodeOutcome};
pub use detect::{detect, Detection};
pub use error::{EnconvError, Result};
pub use locale::Locale;
