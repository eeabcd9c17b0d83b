//! Person commands: add, edit, delete, find, list, clear.

use crate::command::{CommandError, CommandOutcome, CommandResult, Listing};
use crate::index::Index;
use crate::model::{
    Category, ContactBook, Email, Identity, ModelManager, Name, Organisation, Person, Phone, Role,
};
use log::info;
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCommand {
    pub to_add: Person,
}

impl AddCommand {
    pub const COMMAND_WORD: &'static str = "add";
    pub const MESSAGE_USAGE: &'static str = "add: Adds a person to the contact book. \
        Parameters: n/NAME p/PHONE e/EMAIL o/ORGANISATION [r/ROLE]... [c/CATEGORY]...\n\
        Example: add n/John Doe p/98765432 e/johnd@example.com o/Straits Times r/Editor c/media";
    pub const MESSAGE_SUCCESS: &'static str = "New person added: ";
    pub const MESSAGE_DUPLICATE_PERSON: &'static str =
        "This person already exists in the contact book";

    pub fn new(to_add: Person) -> Self {
        Self { to_add }
    }

    pub fn execute(&self, model: &mut ModelManager) -> CommandOutcome {
        if model.has_person(&self.to_add) {
            return Err(CommandError::DuplicatePerson);
        }

        model.add_person(self.to_add.clone())?;
        Ok(CommandResult::with_listing(
            format!("{}{}", Self::MESSAGE_SUCCESS, self.to_add),
            Listing::Persons,
        ))
    }
}

/// Fields to overwrite on an existing person. `None` keeps the old value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditPersonDescriptor {
    pub name: Option<Name>,
    pub phone: Option<Phone>,
    pub email: Option<Email>,
    pub organisation: Option<Organisation>,
    pub roles: Option<BTreeSet<Role>>,
    pub categories: Option<BTreeSet<Category>>,
}

impl EditPersonDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.phone.is_some()
            || self.email.is_some()
            || self.organisation.is_some()
            || self.roles.is_some()
            || self.categories.is_some()
    }

    /// Builds the edited copy of `person`.
    pub fn apply_to(&self, person: &Person) -> Person {
        Person {
            name: self.name.clone().unwrap_or_else(|| person.name.clone()),
            phone: self.phone.clone().unwrap_or_else(|| person.phone.clone()),
            email: self.email.clone().unwrap_or_else(|| person.email.clone()),
            organisation: self
                .organisation
                .clone()
                .unwrap_or_else(|| person.organisation.clone()),
            roles: self.roles.clone().unwrap_or_else(|| person.roles.clone()),
            categories: self
                .categories
                .clone()
                .unwrap_or_else(|| person.categories.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCommand {
    pub index: Index,
    pub descriptor: EditPersonDescriptor,
}

impl EditCommand {
    pub const COMMAND_WORD: &'static str = "edit";
    pub const MESSAGE_USAGE: &'static str = "edit: Edits the details of the person identified \
        by the index number used in the displayed person list. Existing values will be overwritten by \
        the input values.\n\
        Parameters: INDEX (must be a positive integer) [n/NAME] [p/PHONE] [e/EMAIL] [o/ORGANISATION] \
        [r/ROLE]... [c/CATEGORY]...\n\
        Example: edit 1 p/91234567 e/johndoe@example.com";
    pub const MESSAGE_SUCCESS: &'static str = "Edited Person: ";
    pub const MESSAGE_NOT_EDITED: &'static str = "At least one field to edit must be provided.";

    pub fn new(index: Index, descriptor: EditPersonDescriptor) -> Self {
        Self { index, descriptor }
    }

    pub fn execute(&self, model: &mut ModelManager) -> CommandOutcome {
        let target = model
            .filtered_person(self.index)
            .cloned()
            .ok_or(CommandError::InvalidPersonIndex)?;
        let edited = self.descriptor.apply_to(&target);

        if !target.is_same(&edited) && model.has_person(&edited) {
            return Err(CommandError::DuplicatePerson);
        }

        model.set_person(&target, edited.clone())?;
        Ok(CommandResult::with_listing(
            format!("{}{}", Self::MESSAGE_SUCCESS, edited),
            Listing::Persons,
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteCommand {
    pub index: Index,
}

impl DeleteCommand {
    pub const COMMAND_WORD: &'static str = "delete";
    pub const MESSAGE_USAGE: &'static str = "delete: Deletes the person identified by the index \
        number used in the displayed person list.\n\
        Parameters: INDEX (must be a positive integer)\n\
        Example: delete 1";
    pub const MESSAGE_SUCCESS: &'static str = "Deleted Person: ";

    pub fn new(index: Index) -> Self {
        Self { index }
    }

    pub fn execute(&self, model: &mut ModelManager) -> CommandOutcome {
        let target = model
            .filtered_person(self.index)
            .cloned()
            .ok_or(CommandError::InvalidPersonIndex)?;

        let deleted = model.delete_person(&target)?;
        Ok(CommandResult::with_listing(
            format!("{}{}", Self::MESSAGE_SUCCESS, deleted),
            Listing::Persons,
        ))
    }
}

/// Matches persons whose name contains any keyword as a whole word,
/// ignoring case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameContainsKeywordsPredicate {
    keywords: Vec<String>,
}

impl NameContainsKeywordsPredicate {
    pub fn new(keywords: Vec<String>) -> Self {
        Self { keywords }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn test(&self, person: &Person) -> bool {
        self.keywords.iter().any(|keyword| {
            let keyword = keyword.to_lowercase();
            person
                .name
                .as_str()
                .split_whitespace()
                .any(|word| word.to_lowercase() == keyword)
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindCommand {
    pub predicate: NameContainsKeywordsPredicate,
}

impl FindCommand {
    pub const COMMAND_WORD: &'static str = "find";
    pub const MESSAGE_USAGE: &'static str = "find: Finds all persons whose names contain any of \
        the specified keywords (case-insensitive) and displays them as a list with index numbers.\n\
        Parameters: KEYWORD [MORE_KEYWORDS]...\n\
        Example: find alice bob charlie";

    pub fn new(predicate: NameContainsKeywordsPredicate) -> Self {
        Self { predicate }
    }

    pub fn execute(&self, model: &mut ModelManager) -> CommandOutcome {
        let predicate = self.predicate.clone();
        model.update_filtered_person_list(move |person| predicate.test(person));

        let shown = model.filtered_person_list().len();
        info!(
            "event=persons_filtered module=command status=ok keywords={} shown={}",
            self.predicate.keywords().len(),
            shown
        );
        Ok(CommandResult::with_listing(
            format!("{shown} persons listed!"),
            Listing::Persons,
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListCommand;

impl ListCommand {
    pub const COMMAND_WORD: &'static str = "list";
    pub const MESSAGE_USAGE: &'static str = "list: Lists all persons.\nExample: list";
    pub const MESSAGE_SUCCESS: &'static str = "Listed all persons";

    pub fn execute(&self, model: &mut ModelManager) -> CommandOutcome {
        model.update_filtered_person_list(|_| true);
        Ok(CommandResult::with_listing(
            Self::MESSAGE_SUCCESS,
            Listing::Persons,
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClearCommand;

impl ClearCommand {
    pub const COMMAND_WORD: &'static str = "clear";
    pub const MESSAGE_USAGE: &'static str =
        "clear: Removes every person and interview.\nExample: clear";
    pub const MESSAGE_SUCCESS: &'static str = "Contact book has been cleared!";

    pub fn execute(&self, model: &mut ModelManager) -> CommandOutcome {
        model.set_contact_book(ContactBook::new());
        Ok(CommandResult::with_listing(
            Self::MESSAGE_SUCCESS,
            Listing::Persons,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::{
        AddCommand, ClearCommand, DeleteCommand, EditCommand, EditPersonDescriptor, FindCommand,
        ListCommand, NameContainsKeywordsPredicate,
    };
    use crate::command::CommandError;
    use crate::index::Index;
    use crate::model::{ModelManager, Name, Person, Phone};

    fn person(name: &str) -> Person {
        serde_json::from_value(serde_json::json!({
            "name": name,
            "phone": "98765432",
            "email": "someone@example.com",
            "organisation": "ABC Corp"
        }))
        .unwrap()
    }

    fn model_with(names: &[&str]) -> ModelManager {
        let mut model = ModelManager::default();
        for name in names {
            model.add_person(person(name)).unwrap();
        }
        model
    }

    fn first() -> Index {
        Index::from_one_based(1).unwrap()
    }

    #[test]
    fn add_reports_new_person() {
        let mut model = ModelManager::default();
        let result = AddCommand::new(person("Amy Bee")).execute(&mut model).unwrap();
        assert_eq!(
            result.feedback,
            format!("{}{}", AddCommand::MESSAGE_SUCCESS, person("Amy Bee"))
        );
        assert!(model.has_person(&person("Amy Bee")));
    }

    #[test]
    fn add_rejects_duplicate_without_mutation() {
        let mut model = model_with(&["Amy Bee"]);
        let mut same_name = person("Amy Bee");
        same_name.phone = Phone::new("11111111").unwrap();

        let err = AddCommand::new(same_name).execute(&mut model).unwrap_err();
        assert!(matches!(err, CommandError::DuplicatePerson));
        assert_eq!(err.to_string(), AddCommand::MESSAGE_DUPLICATE_PERSON);
        assert_eq!(model.contact_book().persons(), &[person("Amy Bee")]);
    }

    #[test]
    fn edit_replaces_in_place() {
        let mut model = model_with(&["Amy Bee", "Bob Choo"]);
        let descriptor = EditPersonDescriptor {
            phone: Some(Phone::new("12345678").unwrap()),
            ..EditPersonDescriptor::default()
        };

        EditCommand::new(first(), descriptor)
            .execute(&mut model)
            .unwrap();
        let persons = model.contact_book().persons();
        assert_eq!(persons[0].phone.as_str(), "12345678");
        assert_eq!(persons[1], person("Bob Choo"));
    }

    #[test]
    fn edit_into_existing_name_is_duplicate() {
        let mut model = model_with(&["Amy Bee", "Bob Choo"]);
        let descriptor = EditPersonDescriptor {
            name: Some(Name::new("Bob Choo").unwrap()),
            ..EditPersonDescriptor::default()
        };

        let err = EditCommand::new(first(), descriptor)
            .execute(&mut model)
            .unwrap_err();
        assert!(matches!(err, CommandError::DuplicatePerson));
    }

    #[test]
    fn delete_uses_filtered_index() {
        let mut model = model_with(&["Amy Bee", "Bob Choo"]);
        model.update_filtered_person_list(|p| p.name.as_str().starts_with("Bob"));

        let result = DeleteCommand::new(first()).execute(&mut model).unwrap();
        assert!(result.feedback.contains("Bob Choo"));
        assert_eq!(model.contact_book().persons(), &[person("Amy Bee")]);
    }

    #[test]
    fn delete_out_of_range_fails() {
        let mut model = model_with(&["Amy Bee"]);
        let err = DeleteCommand::new(Index::from_one_based(2).unwrap())
            .execute(&mut model)
            .unwrap_err();
        assert!(matches!(err, CommandError::InvalidPersonIndex));
        assert_eq!(model.contact_book().persons().len(), 1);
    }

    #[test]
    fn find_matches_whole_words_ignoring_case() {
        let predicate = NameContainsKeywordsPredicate::new(vec!["KURZ".to_string()]);
        assert!(predicate.test(&person("Carl Kurz")));
        assert!(!predicate.test(&person("Carl Kurzweil")));

        let mut model = model_with(&["Carl Kurz", "Elle Meyer", "Fiona Kunz"]);
        let result = FindCommand::new(NameContainsKeywordsPredicate::new(vec![
            "kurz".to_string(),
            "fiona".to_string(),
        ]))
        .execute(&mut model)
        .unwrap();
        assert_eq!(result.feedback, "2 persons listed!");

        ListCommand.execute(&mut model).unwrap();
        assert_eq!(model.filtered_person_list().len(), 3);
    }

    #[test]
    fn clear_empties_book() {
        let mut model = model_with(&["Amy Bee"]);
        ClearCommand.execute(&mut model).unwrap();
        assert!(model.contact_book().persons().is_empty());
    }
}
