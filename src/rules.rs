//! Fixed German rule set. Order matters: years and dates are hidden behind placeholders before
//! the number pass and brought back after it

use crate::{
    pass::Pass,
    tag_impls::{DateRestore, Number, Percentage, Template},
    SimplifyError,
};

pub(crate) const MONTHS: [&str; 12] = [
    "Januar",
    "Februar",
    "März",
    "April",
    "Mai",
    "Juni",
    "Juli",
    "August",
    "September",
    "Oktober",
    "November",
    "Dezember",
];

pub(crate) const PERCENTAGE: &str = r"(\d{1,2}(?:,\d{1,2})?) Prozent";

pub(crate) const YEAR: &str = r"\b(?:Im Jahr|Am|den|der|vom|ab)\s(\d{4})\b";

// `.` in the separator group is any character, not only a period
pub(crate) const NUMBER: &str = r"\b\d{1,3}((.|,)\d{1,3})*(\.\d+,?\d+)?\b";

pub(crate) const YEAR_PLACEHOLDER: &str = r"YEAR_(\d{4})";

pub(crate) const DATE_PLACEHOLDER: &str = r"DATE_(Am|den|vom|ab)?_?(\d+)_([\wäöüÄÖÜ]+)_(\d+)";

pub(crate) fn date_pattern() -> String {
    format!(
        r"\b(Am|den|vom|ab)?\s?(\d{{1,2}})\.\s({})\s(\d{{4}})\b",
        MONTHS.join("|")
    )
}

pub(crate) fn german() -> Result<Vec<Pass>, SimplifyError> {
    Ok(vec![
        Pass::new("percentages", PERCENTAGE, Percentage::new_boxed())?,
        Pass::new("shield years", YEAR, Template::new_boxed("YEAR_$1"))?,
        Pass::new(
            "shield dates",
            &date_pattern(),
            Template::new_boxed("DATE_${1}_${2}_${3}_${4}"),
        )?,
        Pass::new("numbers", NUMBER, Number::new_boxed())?,
        Pass::new(
            "restore years",
            YEAR_PLACEHOLDER,
            Template::new_boxed("Im Jahr $1"),
        )?,
        Pass::new("restore dates", DATE_PLACEHOLDER, DateRestore::new_boxed())?,
    ])
}
