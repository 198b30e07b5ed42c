//! String sanitization rules.
//!
//! Both rules share one character class: anything that is not a word
//! character, whitespace, a period or a hyphen is dropped. File names get
//! additional treatment (separator replacement and optional whole-word
//! removal); file content is only stripped and lowercased.

pub mod rules;
