//! Fan-out of one form row into member, spouse and child records.

pub mod columns;

use crate::field::boolean::parse_boolean;
use crate::field::date::{parse_date, parse_timestamp};
use crate::field::present;
use crate::field::text::clean_text;
use crate::models::{ChildRecord, MemberRecord, NormalizedRow, RawRow, SpouseRecord};

use columns::ChildSlot;

/// Normalize one CSV row. Never fails; unusable answers become `None` / `false`.
pub fn normalize(row: &RawRow) -> NormalizedRow {
    let member = member_record(row);
    let spouse = spouse_record(row, &member);
    let children = if member.has_children {
        columns::CHILD_SLOTS
            .iter()
            .filter_map(|slot| child_record(row, slot))
            .collect()
    } else {
        Vec::new()
    };

    NormalizedRow {
        member,
        spouse,
        children,
    }
}

fn member_record(row: &RawRow) -> MemberRecord {
    let text = |column: &str| clean_text(row.get(column));
    let flag = |column: &str| parse_boolean(row.get(column));

    MemberRecord {
        timestamp: parse_timestamp(row.get(columns::TIMESTAMP)),
        full_name: text(columns::FULL_NAME),
        email: text(columns::EMAIL),
        second_email: text(columns::SECOND_EMAIL),
        active_email: text(columns::ACTIVE_EMAIL),
        year_of_completion: text(columns::YEAR_OF_COMPLETION),
        date_of_birth: parse_date(row.get(columns::DATE_OF_BIRTH)),
        active_phone_number: text(columns::ACTIVE_PHONE_NUMBER),
        other_phone_number: text(columns::OTHER_PHONE_NUMBER),
        currently_employed: flag(columns::CURRENTLY_EMPLOYED),
        current_address: text(columns::CURRENT_ADDRESS),
        relationship_status: text(columns::RELATIONSHIP_STATUS),
        has_children: flag(columns::HAS_CHILDREN),
        number_of_children: text(columns::NUMBER_OF_CHILDREN),
        gender: text(columns::GENDER),
        nationality: text(columns::NATIONALITY),
        postgrad_year_of_completion: text(columns::POSTGRAD_YEAR_OF_COMPLETION),
        completed_tertiary: flag(columns::COMPLETED_TERTIARY),
        tertiary_institution_name: text(columns::TERTIARY_INSTITUTION_NAME),
        // The form never asked for an employer; industry is the closest answer.
        current_employer: text(columns::PREFERED_WORK_INDUSTRY),
        prefered_work_industry: text(columns::PREFERED_WORK_INDUSTRY),
        area_of_work: text(columns::AREA_OF_WORK),
        on_associate_whatsapp: flag(columns::ON_ASSOCIATE_WHATSAPP),
    }
}

fn spouse_record(row: &RawRow, member: &MemberRecord) -> Option<SpouseRecord> {
    if member.relationship_status.as_deref() != Some(columns::MARRIED) {
        return None;
    }

    Some(SpouseRecord {
        full_name: clean_text(row.get(columns::SPOUSE_FULL_NAME))?,
        date_of_birth: parse_date(row.get(columns::SPOUSE_DATE_OF_BIRTH)),
        marriage_anniversary_date: parse_date(row.get(columns::MARRIAGE_ANNIVERSARY_DATE)),
    })
}

fn child_record(row: &RawRow, slot: &ChildSlot) -> Option<ChildRecord> {
    let full_name = clean_text(first_present(row, slot.name));
    let date_of_birth = parse_date(first_present(row, slot.date_of_birth));

    if full_name.is_none() && date_of_birth.is_none() {
        return None;
    }

    Some(ChildRecord {
        child_order: slot.order,
        full_name,
        date_of_birth,
    })
}

/// Value of the first candidate column holding a real answer.
///
/// Blank and `-` answers fall through to the next alias instead of ending the lookup.
fn first_present<'r>(row: &'r RawRow, candidates: &[&str]) -> Option<&'r str> {
    candidates
        .iter()
        .find_map(|column| present(row.get(column)))
}
