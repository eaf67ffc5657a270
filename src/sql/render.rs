use crate::config::OutputConfig;
use crate::models::{BatchInfo, ChildRecord, MemberKey, MemberRecord, NormalizedRow, SpouseRecord};
use crate::normalize::columns::MARRIED;

use super::escape::{escape_sql_value, sql_comment, sql_equals, SqlValue};

/// Column order of the `members` insert; matches [`member_values`].
pub const MEMBER_COLUMNS: [&str; 23] = [
    "timestamp",
    "full_name",
    "email",
    "second_email",
    "active_email",
    "year_of_completion",
    "date_of_birth",
    "active_phone_number",
    "other_phone_number",
    "currently_employed",
    "current_address",
    "relationship_status",
    "has_children",
    "number_of_children",
    "gender",
    "nationality",
    "postgrad_year_of_completion",
    "completed_tertiary",
    "tertiary_institution_name",
    "current_employer",
    "prefered_work_industry",
    "area_of_work",
    "on_associate_whatsapp",
];

fn member_values(m: &MemberRecord) -> [SqlValue<'_>; 23] {
    [
        SqlValue::timestamp(m.timestamp),
        SqlValue::clean(m.full_name.as_deref()),
        SqlValue::clean(m.email.as_deref()),
        SqlValue::clean(m.second_email.as_deref()),
        SqlValue::clean(m.active_email.as_deref()),
        SqlValue::clean(m.year_of_completion.as_deref()),
        SqlValue::date(m.date_of_birth),
        SqlValue::clean(m.active_phone_number.as_deref()),
        SqlValue::clean(m.other_phone_number.as_deref()),
        SqlValue::Bool(m.currently_employed),
        SqlValue::clean(m.current_address.as_deref()),
        SqlValue::clean(m.relationship_status.as_deref()),
        SqlValue::Bool(m.has_children),
        SqlValue::clean(m.number_of_children.as_deref()),
        SqlValue::clean(m.gender.as_deref()),
        SqlValue::clean(m.nationality.as_deref()),
        SqlValue::clean(m.postgrad_year_of_completion.as_deref()),
        SqlValue::Bool(m.completed_tertiary),
        SqlValue::clean(m.tertiary_institution_name.as_deref()),
        SqlValue::clean(m.current_employer.as_deref()),
        SqlValue::clean(m.prefered_work_industry.as_deref()),
        SqlValue::clean(m.area_of_work.as_deref()),
        SqlValue::Bool(m.on_associate_whatsapp),
    ]
}

fn display_name(member: &MemberRecord) -> String {
    sql_comment(member.full_name.as_deref().unwrap_or("(no name)"))
}

/// One `VALUES` tuple, preceded by a comment naming the record.
pub fn member_row(record_number: usize, member: &MemberRecord) -> String {
    let values: Vec<String> = member_values(member).iter().map(escape_sql_value).collect();
    format!(
        "-- Record {}: {}\n    ({})",
        record_number,
        display_name(member),
        values.join(", ")
    )
}

/// `WHERE` clause locating the owning member by name and email.
fn member_lookup(key: MemberKey<'_>) -> String {
    format!(
        "FROM members WHERE {}\nAND {}",
        sql_equals("full_name", &SqlValue::clean(key.full_name)),
        sql_equals("email", &SqlValue::clean(key.email)),
    )
}

pub fn spouse_insert(member: &MemberRecord, spouse: &SpouseRecord) -> String {
    format!(
        "-- Spouse for {}\n\
         INSERT INTO member_spouses (member_id, full_name, date_of_birth, marriage_anniversary_date)\n\
         SELECT id, {},\n       {},\n       {}\n\
         {};",
        display_name(member),
        escape_sql_value(&SqlValue::Clean(&spouse.full_name)),
        escape_sql_value(&SqlValue::date(spouse.date_of_birth)),
        escape_sql_value(&SqlValue::date(spouse.marriage_anniversary_date)),
        member_lookup(member.natural_key()),
    )
}

pub fn child_insert(member: &MemberRecord, child: &ChildRecord) -> String {
    format!(
        "-- Child {} for {}\n\
         INSERT INTO member_children (member_id, full_name, date_of_birth, child_order)\n\
         SELECT id, {},\n       {},\n       {}\n\
         {};",
        child.child_order,
        display_name(member),
        escape_sql_value(&SqlValue::clean(child.full_name.as_deref())),
        escape_sql_value(&SqlValue::date(child.date_of_birth)),
        escape_sql_value(&SqlValue::Int(i64::from(child.child_order))),
        member_lookup(member.natural_key()),
    )
}

fn header(batch: &BatchInfo, output: &OutputConfig) -> String {
    format!(
        "-- Google Forms Data Batch {} (Records {}-{})\n\
         -- {} Member Registration Data\n\
         -- Generated from {}\n",
        batch.number,
        batch.first_record,
        batch.last_record,
        sql_comment(&output.organization),
        sql_comment(&output.source_label),
    )
}

fn verification_queries(rows_in_batch: usize) -> String {
    format!(
        "-- Verification queries for this batch\n\
         SELECT\n    \
             COUNT(*) AS members_in_batch,\n    \
             COUNT(CASE WHEN relationship_status = {married} THEN 1 END) AS married_count,\n    \
             COUNT(CASE WHEN has_children = TRUE THEN 1 END) AS with_children_count\n\
         FROM (\n    \
             SELECT relationship_status, has_children\n    \
             FROM members\n    \
             ORDER BY timestamp DESC NULLS LAST\n    \
             LIMIT {rows_in_batch}\n\
         ) AS latest_batch;\n\
         \n\
         -- Overall statistics\n\
         SELECT\n    \
             'Total Import Status' AS status,\n    \
             COUNT(*) AS total_members,\n    \
             (SELECT COUNT(*) FROM member_spouses) AS total_spouses,\n    \
             (SELECT COUNT(*) FROM member_children) AS total_children\n\
         FROM members;\n",
        married = escape_sql_value(&SqlValue::Text(MARRIED)),
    )
}

/// Render the complete SQL script for one batch.
///
/// `rows` must be the normalized rows covered by `batch`, in input order.
pub fn render_batch(batch: &BatchInfo, rows: &[NormalizedRow], output: &OutputConfig) -> String {
    let member_rows: Vec<String> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| member_row(batch.first_record + i, &row.member))
        .collect();

    let spouse_inserts: Vec<String> = rows
        .iter()
        .filter_map(|row| row.spouse.as_ref().map(|s| spouse_insert(&row.member, s)))
        .collect();

    let child_inserts: Vec<String> = rows
        .iter()
        .flat_map(|row| row.children.iter().map(|c| child_insert(&row.member, c)))
        .collect();

    let mut sections = vec![
        header(batch, output),
        "BEGIN;\n".to_string(),
        format!(
            "-- Insert Members\nINSERT INTO members (\n    {}\n) VALUES\n{};\n",
            MEMBER_COLUMNS.join(", "),
            member_rows.join(",\n")
        ),
    ];

    if !spouse_inserts.is_empty() {
        sections.push(format!("-- Insert Spouses\n{}\n", spouse_inserts.join("\n\n")));
    }

    if !child_inserts.is_empty() {
        sections.push(format!("-- Insert Children\n{}\n", child_inserts.join("\n\n")));
    }

    sections.push("COMMIT;\n".to_string());
    sections.push(verification_queries(rows.len()));

    sections.join("\n")
}
