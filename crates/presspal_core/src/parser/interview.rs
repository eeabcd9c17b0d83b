//! Argument parsers for interview commands.

use crate::command::{AddInterviewCommand, DeleteInterviewCommand};
use crate::model::{Header, Interview, Location};
use crate::parser::syntax::{
    PREFIX_DATE, PREFIX_HEADER, PREFIX_INDEX, PREFIX_LOCATION, PREFIX_TIME,
};
use crate::parser::tokenizer::{tokenize, Prefix};
use crate::parser::util::{parse_date_time, parse_index, parse_value};
use crate::parser::{ParseError, ParseResult};

/// Every `addInterview` prefix is required and singular.
const ADD_INTERVIEW_PREFIXES: &[Prefix] = &[
    PREFIX_INDEX,
    PREFIX_HEADER,
    PREFIX_DATE,
    PREFIX_TIME,
    PREFIX_LOCATION,
];

/// `i/INDEX h/HEADER d/DATE t/TIME l/LOCATION`
pub fn parse_add_interview(args: &str) -> ParseResult<AddInterviewCommand> {
    let multimap = tokenize(args, ADD_INTERVIEW_PREFIXES);

    if !multimap.contains_all(ADD_INTERVIEW_PREFIXES) || !multimap.preamble().is_empty() {
        return Err(ParseError::InvalidCommandFormat {
            usage: AddInterviewCommand::MESSAGE_USAGE,
        });
    }
    multimap.verify_no_duplicate_prefixes_for(ADD_INTERVIEW_PREFIXES)?;

    let value = |prefix| multimap.value(prefix).unwrap_or_default();
    let person_index = parse_index(value(PREFIX_INDEX))?;
    let header: Header = parse_value(value(PREFIX_HEADER))?;
    let date_time = parse_date_time(value(PREFIX_DATE), value(PREFIX_TIME))?;
    let location: Location = parse_value(value(PREFIX_LOCATION))?;

    Ok(AddInterviewCommand::new(
        person_index,
        Interview::new(header, location, date_time),
    ))
}

/// `INDEX`
pub fn parse_delete_interview(args: &str) -> ParseResult<DeleteInterviewCommand> {
    parse_index(args)
        .map(DeleteInterviewCommand::new)
        .map_err(|_| ParseError::InvalidCommandFormat {
            usage: DeleteInterviewCommand::MESSAGE_USAGE,
        })
}
