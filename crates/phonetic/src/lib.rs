//! Phonetic keys for name tokens.
//!
//! ```
//! use lexicon::Language;
//! use phonetic::{agree, PhoneticEncoder};
//!
//! let encoder = PhoneticEncoder::new();
//! let a = encoder.encode("john", Language::English);
//! let b = encoder.encode("jon", Language::English);
//! assert!(agree(&a, &b));
//! ```

mod arabic;
mod encoder;
mod soundex;

pub use crate::arabic::skeleton;
pub use crate::encoder::{agree, Algorithm, PhoneticEncoder, PhoneticKeys};
pub use crate::soundex::soundex;
