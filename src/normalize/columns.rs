//! Column names of the Google Forms export.

pub const TIMESTAMP: &str = "Timestamp";
pub const FULL_NAME: &str = "full_name";
pub const EMAIL: &str = "email";
pub const SECOND_EMAIL: &str = "second_email";
pub const ACTIVE_EMAIL: &str = "active_email";
pub const YEAR_OF_COMPLETION: &str = "year_of_completion";
pub const DATE_OF_BIRTH: &str = "date_of_birth";
pub const ACTIVE_PHONE_NUMBER: &str = "active_phone_number";
pub const OTHER_PHONE_NUMBER: &str = "other_phone_number";
pub const CURRENTLY_EMPLOYED: &str = "currently_employed";
pub const CURRENT_ADDRESS: &str = "current_address";
pub const RELATIONSHIP_STATUS: &str = "relationship_status";
pub const HAS_CHILDREN: &str = "has_children";
/// The stray space is in the exported header.
pub const NUMBER_OF_CHILDREN: &str = "number_of _children";
pub const GENDER: &str = "gender";
pub const NATIONALITY: &str = "nationality";
pub const POSTGRAD_YEAR_OF_COMPLETION: &str = "postgrad_year_of_completion";
pub const COMPLETED_TERTIARY: &str = "completed_tertiary";
pub const TERTIARY_INSTITUTION_NAME: &str = "tertiary_institution_name";
pub const PREFERED_WORK_INDUSTRY: &str = "prefered_work_industry";
pub const AREA_OF_WORK: &str = "area_of_work";
pub const ON_ASSOCIATE_WHATSAPP: &str = "on_associate_whatsapp";

pub const SPOUSE_FULL_NAME: &str = "full_name_of_spouse";
pub const SPOUSE_DATE_OF_BIRTH: &str = "spouse_date_of_birth";
pub const MARRIAGE_ANNIVERSARY_DATE: &str = "marriage_anniversary_date";

/// `relationship_status` value that triggers a spouse record. Case-sensitive.
pub const MARRIED: &str = "Married";

/// Candidate columns for one child slot, in lookup order.
#[derive(Debug, Clone, Copy)]
pub struct ChildSlot {
    pub order: u8,
    pub name: &'static [&'static str],
    pub date_of_birth: &'static [&'static str],
}

/// The form was edited over time, so each child question has several headers.
pub const CHILD_SLOTS: [ChildSlot; 5] = [
    ChildSlot {
        order: 1,
        name: &["first_child_name", "full_name_of_first_child"],
        date_of_birth: &["dob_first_child", "DoB_of_first_child"],
    },
    ChildSlot {
        order: 2,
        name: &["full_name_of_second_child"],
        date_of_birth: &["dob_second_child", "DoB_of_second_child"],
    },
    ChildSlot {
        order: 3,
        name: &["full_name_of_third_child"],
        date_of_birth: &["dob_3_child", "dob_third_child", "DoB_of_third_child"],
    },
    ChildSlot {
        order: 4,
        name: &["full_name_of_fourth_child"],
        date_of_birth: &["DoB_of_fourth_child"],
    },
    ChildSlot {
        order: 5,
        name: &[],
        date_of_birth: &["dob_fifth_child", "DoB_of_fifth_child"],
    },
];
