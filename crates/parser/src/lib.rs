//! Tokenizer and role classifier for personal names.
//!
//! [`Parser::parse`] turns a raw name into a [`Name`]: every input segment
//! becomes a [`Token`] with a comparison key and a [`Role`]. Honorifics are
//! stripped from both ends, particles attach to the surname token that
//! follows them, and the remaining tokens are assigned first/middle/last by
//! the language's name order.
//!
//! ```
//! use lexicon::{Dictionaries, ScriptDetector};
//! use parser::Parser;
//!
//! let dicts = Dictionaries::load().unwrap();
//! let name = Parser::new(&dicts, &ScriptDetector).parse("Dr. von Neumann", None);
//! assert_eq!(name.last()[0].key, "neumann");
//! assert_eq!(name.honorifics().count(), 1);
//! ```

mod name;
mod parser;

pub use crate::name::{LanguageSource, Name, Role, Token};
pub use crate::parser::Parser;
