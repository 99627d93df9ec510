//! Password strength checking library
//!
//! Rates a password as weak or strong using a few heuristic rules (length,
//! character classes, dictionary words) and lists what to improve. Also
//! generates random passwords.
//!
//! # Features
//!
//! - `tracing`: Enables logging via tracing crate
//! - `fetch`: Downloads the word list when no local copy exists
//! - `cli` (default): Builds the `pwd-check` command-line tool
//!
//! # Environment Variables
//!
//! - `PWD_WORDLIST_PATH`: Custom path to the word list file
//!   (default: `./assets/words.txt`)
//! - `PWD_WORDLIST_URL`: Download location used by the `fetch` feature
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_check::{Evaluator, Verdict, generate_password, get_wordlist_path, load_or_empty};
//! use secrecy::SecretString;
//!
//! // Load the dictionary once at startup
//! let evaluator = Evaluator::new(load_or_empty(get_wordlist_path()));
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let evaluation = evaluator.evaluate(&password);
//!
//! if evaluation.verdict == Verdict::Weak {
//!     for suggestion in &evaluation.suggestions {
//!         println!("- {}", suggestion);
//!     }
//! }
//!
//! let fresh = generate_password(12);
//! ```

mod evaluator;
#[cfg(feature = "fetch")]
mod fetch;
mod generator;
pub mod report;
mod sections;
mod types;
mod wordlist;

// Public API
pub use evaluator::{Evaluator, evaluate_password_strength};
pub use generator::{
    ALPHABET, DEFAULT_LENGTH, GeneratorError, MAX_ATTEMPTS, generate_password,
    generate_password_with_rng, generate_strong_password, generate_strong_password_with_rng,
};
pub use sections::{MIN_LENGTH, SPECIAL_CHARS};
pub use types::{Evaluation, STRONG_MESSAGE, Suggestion, Verdict};
pub use wordlist::{
    DEFAULT_WORDLIST_PATH, WORDLIST_PATH_ENV, WordListError, WordSet, get_wordlist_path,
    load_or_empty, load_wordlist,
};

#[cfg(feature = "fetch")]
pub use fetch::{
    DEFAULT_WORDLIST_URL, WORDLIST_URL_ENV, acquire_wordlist, fetch_wordlist, get_wordlist_url,
};
