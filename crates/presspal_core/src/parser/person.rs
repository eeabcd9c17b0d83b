//! Argument parsers for person commands.

use crate::command::{
    AddCommand, DeleteCommand, EditCommand, EditPersonDescriptor, FindCommand,
    NameContainsKeywordsPredicate,
};
use crate::model::{Category, FieldError, Person, Role};
use crate::parser::syntax::{
    PREFIX_CATEGORY, PREFIX_EMAIL, PREFIX_NAME, PREFIX_ORGANISATION, PREFIX_PHONE, PREFIX_ROLE,
};
use crate::parser::tokenizer::{tokenize, ArgumentMultimap, Prefix};
use crate::parser::util::{parse_index, parse_value, parse_values};
use crate::parser::{ParseError, ParseResult};
use std::collections::BTreeSet;

const PERSON_PREFIXES: &[Prefix] = &[
    PREFIX_NAME,
    PREFIX_PHONE,
    PREFIX_EMAIL,
    PREFIX_ORGANISATION,
    PREFIX_ROLE,
    PREFIX_CATEGORY,
];
const SINGULAR_PERSON_PREFIXES: &[Prefix] =
    &[PREFIX_NAME, PREFIX_PHONE, PREFIX_EMAIL, PREFIX_ORGANISATION];

/// `n/NAME p/PHONE e/EMAIL o/ORGANISATION [r/ROLE]... [c/CATEGORY]...`
pub fn parse_add(args: &str) -> ParseResult<AddCommand> {
    let multimap = tokenize(args, PERSON_PREFIXES);

    if !multimap.contains_all(SINGULAR_PERSON_PREFIXES) || !multimap.preamble().is_empty() {
        return Err(ParseError::InvalidCommandFormat {
            usage: AddCommand::MESSAGE_USAGE,
        });
    }
    multimap.verify_no_duplicate_prefixes_for(SINGULAR_PERSON_PREFIXES)?;

    let person = Person::new(
        parse_value(required(&multimap, PREFIX_NAME))?,
        parse_value(required(&multimap, PREFIX_PHONE))?,
        parse_value(required(&multimap, PREFIX_EMAIL))?,
        parse_value(required(&multimap, PREFIX_ORGANISATION))?,
        parse_values::<Role>(multimap.all_values(PREFIX_ROLE))?,
        parse_values::<Category>(multimap.all_values(PREFIX_CATEGORY))?,
    );
    Ok(AddCommand::new(person))
}

/// `INDEX [n/NAME] [p/PHONE] [e/EMAIL] [o/ORGANISATION] [r/ROLE]... [c/CATEGORY]...`
///
/// A lone empty `r/` or `c/` clears that set.
pub fn parse_edit(args: &str) -> ParseResult<EditCommand> {
    let multimap = tokenize(args, PERSON_PREFIXES);

    let index = parse_index(multimap.preamble()).map_err(|_| ParseError::InvalidCommandFormat {
        usage: EditCommand::MESSAGE_USAGE,
    })?;
    multimap.verify_no_duplicate_prefixes_for(SINGULAR_PERSON_PREFIXES)?;

    let descriptor = EditPersonDescriptor {
        name: optional(&multimap, PREFIX_NAME)?,
        phone: optional(&multimap, PREFIX_PHONE)?,
        email: optional(&multimap, PREFIX_EMAIL)?,
        organisation: optional(&multimap, PREFIX_ORGANISATION)?,
        roles: replacement_set(&multimap, PREFIX_ROLE)?,
        categories: replacement_set(&multimap, PREFIX_CATEGORY)?,
    };
    if !descriptor.is_any_field_edited() {
        return Err(ParseError::NoFieldEdited);
    }

    Ok(EditCommand::new(index, descriptor))
}

/// `INDEX`
pub fn parse_delete(args: &str) -> ParseResult<DeleteCommand> {
    parse_index(args)
        .map(DeleteCommand::new)
        .map_err(|_| ParseError::InvalidCommandFormat {
            usage: DeleteCommand::MESSAGE_USAGE,
        })
}

/// `KEYWORD [MORE_KEYWORDS]...`
pub fn parse_find(args: &str) -> ParseResult<FindCommand> {
    let keywords: Vec<String> = args.split_whitespace().map(str::to_string).collect();
    if keywords.is_empty() {
        return Err(ParseError::InvalidCommandFormat {
            usage: FindCommand::MESSAGE_USAGE,
        });
    }
    Ok(FindCommand::new(NameContainsKeywordsPredicate::new(keywords)))
}

fn required(multimap: &ArgumentMultimap, prefix: Prefix) -> &str {
    multimap.value(prefix).unwrap_or_default()
}

fn optional<T>(multimap: &ArgumentMultimap, prefix: Prefix) -> ParseResult<Option<T>>
where
    T: TryFrom<String, Error = FieldError>,
{
    multimap.value(prefix).map(parse_value).transpose()
}

fn replacement_set<T>(
    multimap: &ArgumentMultimap,
    prefix: Prefix,
) -> ParseResult<Option<BTreeSet<T>>>
where
    T: TryFrom<String, Error = FieldError> + Ord,
{
    match multimap.all_values(prefix) {
        [] => Ok(None),
        [only] if only.is_empty() => Ok(Some(BTreeSet::new())),
        values => parse_values(values).map(Some),
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_add, parse_delete, parse_edit, parse_find};
    use crate::command::{AddCommand, DeleteCommand, EditCommand};
    use crate::index::Index;
    use crate::model::{Email, Name, Phone};
    use crate::parser::syntax::{PREFIX_NAME, PREFIX_PHONE};
    use crate::parser::ParseError;

    const VALID_ADD: &str =
        " n/Amy Bee p/11111111 e/amy@example.com o/ABC Corp r/Editor r/Writer c/media";

    #[test]
    fn add_builds_person_from_all_fields() {
        let command = parse_add(VALID_ADD).unwrap();
        let person = command.to_add;
        assert_eq!(person.name.as_str(), "Amy Bee");
        assert_eq!(person.organisation.as_str(), "ABC Corp");
        assert_eq!(person.roles.len(), 2);
        assert_eq!(person.categories.len(), 1);
    }

    #[test]
    fn add_without_optional_sets() {
        let command = parse_add(" n/Amy Bee p/111 e/amy@example.com o/ABC Corp").unwrap();
        assert!(command.to_add.roles.is_empty());
        assert!(command.to_add.categories.is_empty());
    }

    #[test]
    fn add_missing_required_prefix_is_invalid_format() {
        for args in [
            " p/11111111 e/amy@example.com o/ABC Corp",
            " n/Amy Bee e/amy@example.com o/ABC Corp",
            " n/Amy Bee p/11111111 o/ABC Corp",
            " n/Amy Bee p/11111111 e/amy@example.com",
            " Amy Bee 11111111 amy@example.com ABC Corp",
        ] {
            assert_eq!(
                parse_add(args).unwrap_err(),
                ParseError::InvalidCommandFormat {
                    usage: AddCommand::MESSAGE_USAGE
                },
                "args: {args}"
            );
        }
    }

    #[test]
    fn add_with_preamble_is_invalid_format() {
        let err = parse_add(&format!(" preamble{VALID_ADD}")).unwrap_err();
        assert!(matches!(err, ParseError::InvalidCommandFormat { .. }));
    }

    #[test]
    fn add_repeated_singular_prefix_is_duplicate() {
        let err = parse_add(&format!("{VALID_ADD} n/Bob Choo p/222")).unwrap_err();
        assert_eq!(
            err,
            ParseError::DuplicatePrefixes(vec![PREFIX_NAME, PREFIX_PHONE])
        );
    }

    #[test]
    fn add_reports_first_invalid_field() {
        let err = parse_add(" n/Amy Bee p/phone e/amy@example.com o/ABC Corp").unwrap_err();
        assert_eq!(err.to_string(), Phone::MESSAGE_CONSTRAINTS);

        let err =
            parse_add(" n/Amy Bee p/111 e/amy@example.com o/ABC Corp c/news media").unwrap_err();
        assert!(matches!(err, ParseError::InvalidField(field) if field.field == "category"));
    }

    #[test]
    fn edit_parses_index_and_changed_fields() {
        let command = parse_edit(" 2 n/Amy Lee e/lee@example.com").unwrap();
        assert_eq!(command.index, Index::from_one_based(2).unwrap());
        assert_eq!(command.descriptor.name, Some(Name::new("Amy Lee").unwrap()));
        assert_eq!(
            command.descriptor.email,
            Some(Email::new("lee@example.com").unwrap())
        );
        assert_eq!(command.descriptor.phone, None);
        assert_eq!(command.descriptor.roles, None);
    }

    #[test]
    fn edit_empty_category_clears_set() {
        let command = parse_edit(" 1 c/").unwrap();
        assert_eq!(command.descriptor.categories, Some(Default::default()));
    }

    #[test]
    fn edit_requires_index_and_a_field() {
        assert_eq!(
            parse_edit(" n/Amy").unwrap_err(),
            ParseError::InvalidCommandFormat {
                usage: EditCommand::MESSAGE_USAGE
            }
        );
        assert_eq!(
            parse_edit(" 0 n/Amy").unwrap_err(),
            ParseError::InvalidCommandFormat {
                usage: EditCommand::MESSAGE_USAGE
            }
        );
        assert_eq!(parse_edit(" 1").unwrap_err(), ParseError::NoFieldEdited);
    }

    #[test]
    fn delete_accepts_only_an_index() {
        assert_eq!(
            parse_delete(" 1").unwrap(),
            DeleteCommand::new(Index::from_one_based(1).unwrap())
        );
        assert_eq!(
            parse_delete(" a").unwrap_err(),
            ParseError::InvalidCommandFormat {
                usage: DeleteCommand::MESSAGE_USAGE
            }
        );
    }

    #[test]
    fn find_collects_keywords() {
        let command = parse_find(" \n Alice \t Bob  ").unwrap();
        assert_eq!(command.predicate.keywords(), &["Alice", "Bob"]);
        assert!(parse_find("   ").is_err());
    }
}
