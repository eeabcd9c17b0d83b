//! Interview commands.
//!
//! Interviews live in one global collection. The person index given to
//! `addInterview` is range-checked against the displayed person list but is
//! not stored with the interview.

use crate::command::{CommandError, CommandOutcome, CommandResult, Listing};
use crate::index::Index;
use crate::model::{Interview, ModelManager};
use log::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddInterviewCommand {
    pub person_index: Index,
    pub to_add: Interview,
}

impl AddInterviewCommand {
    pub const COMMAND_WORD: &'static str = "addInterview";
    pub const MESSAGE_USAGE: &'static str = "addInterview: Adds an interview. \
        Parameters: i/INDEX h/HEADER d/DATE t/TIME l/LOCATION\n\
        Example: addInterview i/1 h/Interview with ABC Corp d/2024-10-10 t/14:00 \
        l/123, Business St, #02-25";
    pub const MESSAGE_SUCCESS: &'static str = "New interview added: ";
    pub const MESSAGE_DUPLICATE_INTERVIEW: &'static str = "This interview already exists";

    pub fn new(person_index: Index, to_add: Interview) -> Self {
        Self {
            person_index,
            to_add,
        }
    }

    pub fn execute(&self, model: &mut ModelManager) -> CommandOutcome {
        if model.filtered_person(self.person_index).is_none() {
            return Err(CommandError::InvalidPersonIndex);
        }
        if model.has_interview(&self.to_add) {
            return Err(CommandError::DuplicateInterview);
        }

        model.add_interview(self.to_add.clone())?;
        info!(
            "event=interview_added module=command status=ok interviews={}",
            model.contact_book().interviews().len()
        );
        Ok(CommandResult::with_listing(
            format!("{}{}", Self::MESSAGE_SUCCESS, self.to_add),
            Listing::Interviews,
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteInterviewCommand {
    pub index: Index,
}

impl DeleteInterviewCommand {
    pub const COMMAND_WORD: &'static str = "deleteInterview";
    pub const MESSAGE_USAGE: &'static str = "deleteInterview: Deletes the interview identified \
        by the index number used in the displayed interview list.\n\
        Parameters: INDEX (must be a positive integer)\n\
        Example: deleteInterview 1";
    pub const MESSAGE_SUCCESS: &'static str = "Deleted Interview: ";

    pub fn new(index: Index) -> Self {
        Self { index }
    }

    pub fn execute(&self, model: &mut ModelManager) -> CommandOutcome {
        let target = model
            .filtered_interview(self.index)
            .cloned()
            .ok_or(CommandError::InvalidInterviewIndex)?;

        let deleted = model.delete_interview(&target)?;
        Ok(CommandResult::with_listing(
            format!("{}{}", Self::MESSAGE_SUCCESS, deleted),
            Listing::Interviews,
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListInterviewsCommand;

impl ListInterviewsCommand {
    pub const COMMAND_WORD: &'static str = "listInterviews";
    pub const MESSAGE_USAGE: &'static str = "listInterviews: Lists all interviews.\n\
        Example: listInterviews";
    pub const MESSAGE_SUCCESS: &'static str = "Listed all interviews";

    pub fn execute(&self, model: &mut ModelManager) -> CommandOutcome {
        model.update_filtered_interview_list(|_| true);
        Ok(CommandResult::with_listing(
            Self::MESSAGE_SUCCESS,
            Listing::Interviews,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::{AddInterviewCommand, DeleteInterviewCommand};
    use crate::command::{CommandError, Listing};
    use crate::index::Index;
    use crate::model::{Header, Interview, Location, ModelManager, Person};
    use chrono::NaiveDate;

    fn interview(header: &str, hour: u32) -> Interview {
        let date_time = NaiveDate::from_ymd_opt(2024, 10, 10)
            .and_then(|date| date.and_hms_opt(hour, 0, 0))
            .unwrap();
        Interview::new(
            Header::new(header).unwrap(),
            Location::new("Room 1").unwrap(),
            date_time,
        )
    }

    fn model_with_one_person() -> ModelManager {
        let person: Person = serde_json::from_value(serde_json::json!({
            "name": "Amy Bee",
            "phone": "98765432",
            "email": "amy@example.com",
            "organisation": "ABC Corp"
        }))
        .unwrap();
        let mut model = ModelManager::default();
        model.add_person(person).unwrap();
        model
    }

    fn first() -> Index {
        Index::from_one_based(1).unwrap()
    }

    #[test]
    fn add_interview_succeeds_for_displayed_person() {
        let mut model = model_with_one_person();
        let result = AddInterviewCommand::new(first(), interview("Demo", 9))
            .execute(&mut model)
            .unwrap();

        assert_eq!(
            result.feedback,
            format!("New interview added: {}", interview("Demo", 9))
        );
        assert_eq!(result.listing, Some(Listing::Interviews));
        assert_eq!(model.contact_book().interviews(), &[interview("Demo", 9)]);
    }

    #[test]
    fn add_interview_rejects_index_outside_displayed_list() {
        let mut model = model_with_one_person();
        model.update_filtered_person_list(|_| false);

        let err = AddInterviewCommand::new(first(), interview("Demo", 9))
            .execute(&mut model)
            .unwrap_err();
        assert!(matches!(err, CommandError::InvalidPersonIndex));
        assert!(model.contact_book().interviews().is_empty());
    }

    #[test]
    fn add_interview_rejects_duplicate() {
        let mut model = model_with_one_person();
        AddInterviewCommand::new(first(), interview("Demo", 9))
            .execute(&mut model)
            .unwrap();

        let err = AddInterviewCommand::new(first(), interview("Demo", 9))
            .execute(&mut model)
            .unwrap_err();
        assert_eq!(err.to_string(), AddInterviewCommand::MESSAGE_DUPLICATE_INTERVIEW);

        AddInterviewCommand::new(first(), interview("Demo", 10))
            .execute(&mut model)
            .expect("a different time is a different interview");
    }

    #[test]
    fn delete_interview_by_displayed_index() {
        let mut model = model_with_one_person();
        model.add_interview(interview("Demo", 9)).unwrap();
        model.add_interview(interview("Follow-up", 11)).unwrap();

        DeleteInterviewCommand::new(Index::from_one_based(2).unwrap())
            .execute(&mut model)
            .unwrap();
        assert_eq!(model.contact_book().interviews(), &[interview("Demo", 9)]);

        let err = DeleteInterviewCommand::new(Index::from_one_based(2).unwrap())
            .execute(&mut model)
            .unwrap_err();
        assert!(matches!(err, CommandError::InvalidInterviewIndex));
    }
}
