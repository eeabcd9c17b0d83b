//! Person domain model.
//!
//! # Responsibility
//! - Define contact value objects and their format rules.
//! - Define the `Person` aggregate and its duplicate rule.
//!
//! # Invariants
//! - Every field of a `Person` is valid per its value-object rule.
//! - Two persons with equal names are the "same person"; a contact book
//!   never holds both.

use crate::model::field::{is_non_blank, string_value};
use crate::model::unique_list::Identity;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 ]*$").expect("valid name regex"));
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{3,}$").expect("valid phone regex"));
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9]+([+_.-][A-Za-z0-9]+)*@([A-Za-z0-9]+(-[A-Za-z0-9]+)*\.)*[A-Za-z0-9]+(-[A-Za-z0-9]+)*$",
    )
    .expect("valid email regex")
});
static CATEGORY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("valid category regex"));

fn is_valid_email(value: &str) -> bool {
    if !EMAIL_RE.is_match(value) {
        return false;
    }
    // Top-level label needs at least two characters.
    value
        .rsplit(['.', '@'])
        .next()
        .is_some_and(|label| label.len() >= 2)
}

string_value! {
    /// Person name.
    Name {
        field: "name",
        constraint: "Names should only contain alphanumeric characters and spaces, and it should not be blank",
        check: |value| NAME_RE.is_match(value),
    }
}

string_value! {
    /// Phone number.
    Phone {
        field: "phone",
        constraint: "Phone numbers should only contain numbers, and it should be at least 3 digits long",
        check: |value| PHONE_RE.is_match(value),
    }
}

string_value! {
    /// Email address of the form `local-part@domain`.
    Email {
        field: "email",
        constraint: "Emails should be of the format local-part@domain and adhere to the following constraints:\n\
            1. The local-part should only contain alphanumeric characters and these special characters, excluding \
            the parentheses, (+_.-). The local-part may not start or end with any special characters, and special \
            characters may not be adjacent.\n\
            2. This is followed by a '@' and then a domain name. The domain name is made up of domain labels \
            separated by periods.\n\
            The domain name must:\n    \
            - end with a domain label at least 2 characters long\n    \
            - have each domain label start and end with alphanumeric characters\n    \
            - have each domain label consist of alphanumeric characters, separated only by hyphens, if any.",
        check: is_valid_email,
    }
}

string_value! {
    /// Organisation the person belongs to.
    Organisation {
        field: "organisation",
        constraint: "Organisations can take any values, and it should not be blank",
        check: is_non_blank,
    }
}

string_value! {
    /// Role held by the person, e.g. `Editor`.
    Role {
        field: "role",
        constraint: "Roles can take any values, and it should not be blank",
        check: is_non_blank,
    }
}

string_value! {
    /// Single-word grouping label, e.g. `media`.
    Category {
        field: "category",
        constraint: "Categories should be a single alphanumeric word",
        check: |value| CATEGORY_RE.is_match(value),
    }
}

/// A contact held in the contact book.
///
/// Equality is structural; see [`Identity`] for the looser duplicate rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: Name,
    pub phone: Phone,
    pub email: Email,
    pub organisation: Organisation,
    #[serde(default)]
    pub roles: BTreeSet<Role>,
    #[serde(default)]
    pub categories: BTreeSet<Category>,
}

impl Person {
    pub fn new(
        name: Name,
        phone: Phone,
        email: Email,
        organisation: Organisation,
        roles: BTreeSet<Role>,
        categories: BTreeSet<Category>,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            organisation,
            roles,
            categories,
        }
    }
}

impl Identity for Person {
    fn is_same(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Display for Person {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Email: {}; Organisation: {}; Roles: ",
            self.name, self.phone, self.email, self.organisation
        )?;
        for role in &self.roles {
            write!(f, "[{role}]")?;
        }
        f.write_str("; Categories: ")?;
        for category in &self.categories {
            write!(f, "[{category}]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Category, Email, Name, Organisation, Person, Phone, Role};
    use crate::model::unique_list::Identity;
    use std::collections::BTreeSet;

    fn alice() -> Person {
        Person::new(
            Name::new("Alice Pauline").unwrap(),
            Phone::new("94351253").unwrap(),
            Email::new("alice@example.com").unwrap(),
            Organisation::new("Straits Times").unwrap(),
            BTreeSet::from([Role::new("Editor").unwrap()]),
            BTreeSet::from([Category::new("media").unwrap()]),
        )
    }

    #[test]
    fn name_rules() {
        assert!(Name::is_valid("Alice Pauline"));
        assert!(Name::is_valid("R2D2"));
        assert!(!Name::is_valid(""));
        assert!(!Name::is_valid(" Alice"));
        assert!(!Name::is_valid("Alice*"));
    }

    #[test]
    fn phone_rules() {
        assert!(Phone::is_valid("911"));
        assert!(Phone::is_valid("93121534"));
        assert!(!Phone::is_valid("91"));
        assert!(!Phone::is_valid("9011p041"));
        assert!(!Phone::is_valid("9312 1534"));
    }

    #[test]
    fn email_rules() {
        assert!(Email::is_valid("PeterJack_1190@example.com"));
        assert!(Email::is_valid("a1+be.d@example1.com"));
        assert!(Email::is_valid("peter@my-domain.co"));
        assert!(!Email::is_valid("peterjack@example.c"));
        assert!(!Email::is_valid("-peterjack@example.com"));
        assert!(!Email::is_valid("peter..jack@example.com"));
        assert!(!Email::is_valid("peterjack@-example.com"));
        assert!(Email::is_valid("a@bc"));
        assert!(!Email::is_valid("@example.com"));
    }

    #[test]
    fn category_rejects_multiple_words() {
        assert!(Category::is_valid("media"));
        assert!(!Category::is_valid("news media"));
        assert!(!Category::is_valid(""));
    }

    #[test]
    fn invalid_value_reports_constraint() {
        let err = Phone::new("12").unwrap_err();
        assert_eq!(err.field, "phone");
        assert_eq!(err.to_string(), Phone::MESSAGE_CONSTRAINTS);
    }

    #[test]
    fn same_person_only_compares_names() {
        let mut other = alice();
        other.phone = Phone::new("11111111").unwrap();
        assert!(alice().is_same(&other));
        assert_ne!(alice(), other);

        other.name = Name::new("Alice").unwrap();
        assert!(!alice().is_same(&other));
    }

    #[test]
    fn display_lists_roles_and_categories() {
        assert_eq!(
            alice().to_string(),
            "Alice Pauline; Phone: 94351253; Email: alice@example.com; \
             Organisation: Straits Times; Roles: [Editor]; Categories: [media]"
        );
    }

    #[test]
    fn deserialize_rejects_invalid_field() {
        let value = serde_json::json!({
            "name": "Alice",
            "phone": "12",
            "email": "alice@example.com",
            "organisation": "Straits Times"
        });

        let err = serde_json::from_value::<Person>(value).unwrap_err();
        assert!(
            err.to_string().contains(Phone::MESSAGE_CONSTRAINTS),
            "unexpected error: {err}"
        );
    }
}
