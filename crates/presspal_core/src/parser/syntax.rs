//! Argument prefixes shared by command parsers.

use crate::parser::tokenizer::Prefix;

pub const PREFIX_NAME: Prefix = Prefix::new("n/");
pub const PREFIX_PHONE: Prefix = Prefix::new("p/");
pub const PREFIX_EMAIL: Prefix = Prefix::new("e/");
pub const PREFIX_ORGANISATION: Prefix = Prefix::new("o/");
pub const PREFIX_ROLE: Prefix = Prefix::new("r/");
pub const PREFIX_CATEGORY: Prefix = Prefix::new("c/");

pub const PREFIX_HEADER: Prefix = Prefix::new("h/");
pub const PREFIX_DATE: Prefix = Prefix::new("d/");
pub const PREFIX_TIME: Prefix = Prefix::new("t/");
pub const PREFIX_LOCATION: Prefix = Prefix::new("l/");

/// Index of the person an interview is scheduled for.
pub const PREFIX_INDEX: Prefix = Prefix::new("i/");
