//! A1-notation range builders.
//!
//! Product data always lands in columns B through F of the row the URL was
//! read from.

use crate::CoreError;

/// First and last column written for each product row.
pub const OUTPUT_FIRST_COLUMN: &str = "B";
pub const OUTPUT_LAST_COLUMN: &str = "F";

/// Validates a column reference such as `"H"` or `"AA"` and returns it
/// upper-cased.
///
/// # Errors
///
/// Returns [`CoreError::InvalidColumn`] if `column` is empty or contains
/// anything other than ASCII letters.
pub fn normalize_column(column: &str) -> Result<String, CoreError> {
    let trimmed = column.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(CoreError::InvalidColumn(column.to_string()));
    }
    Ok(trimmed.to_ascii_uppercase())
}

/// Range covering a whole column, e.g. `Sheet1!H:H`.
///
/// # Errors
///
/// Returns [`CoreError::InvalidColumn`] for a malformed column and
/// [`CoreError::EmptySheetName`] for a blank sheet name.
pub fn column_range(sheet_name: &str, column: &str) -> Result<String, CoreError> {
    let column = normalize_column(column)?;
    let sheet = sheet_prefix(sheet_name)?;
    Ok(format!("{sheet}!{column}:{column}"))
}

/// Range covering the output cells of one row, e.g. `Sheet1!B3:F3`.
///
/// # Errors
///
/// Returns [`CoreError::EmptySheetName`] for a blank sheet name.
pub fn row_update_range(sheet_name: &str, row_number: u32) -> Result<String, CoreError> {
    let sheet = sheet_prefix(sheet_name)?;
    Ok(format!(
        "{sheet}!{OUTPUT_FIRST_COLUMN}{row_number}:{OUTPUT_LAST_COLUMN}{row_number}"
    ))
}

/// Checks that `sheet_name` can prefix a range.
///
/// # Errors
///
/// Returns [`CoreError::EmptySheetName`] for a blank sheet name.
pub fn validate_sheet_name(sheet_name: &str) -> Result<(), CoreError> {
    sheet_prefix(sheet_name).map(drop)
}

/// Sheet names made of letters, digits and underscores are used bare;
/// anything else is single-quoted with embedded quotes doubled.
fn sheet_prefix(sheet_name: &str) -> Result<String, CoreError> {
    let name = sheet_name.trim();
    if name.is_empty() {
        return Err(CoreError::EmptySheetName);
    }
    if name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        Ok(name.to_string())
    } else {
        Ok(format!("'{}'", name.replace('\'', "''")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_range_for_default_sheet() {
        assert_eq!(row_update_range("Sheet1", 3).unwrap(), "Sheet1!B3:F3");
        assert_eq!(row_update_range("Sheet1", 120).unwrap(), "Sheet1!B120:F120");
    }

    #[test]
    fn column_range_uppercases_column() {
        assert_eq!(column_range("Sheet1", "h").unwrap(), "Sheet1!H:H");
        assert_eq!(column_range("Sheet1", " AA ").unwrap(), "Sheet1!AA:AA");
    }

    #[test]
    fn sheet_names_with_spaces_are_quoted() {
        assert_eq!(
            row_update_range("Living Room", 4).unwrap(),
            "'Living Room'!B4:F4"
        );
        assert_eq!(column_range("Bob's list", "C").unwrap(), "'Bob''s list'!C:C");
    }

    #[test]
    fn rejects_bad_columns() {
        for bad in ["", "  ", "H1", "B:C", "é"] {
            assert!(
                matches!(normalize_column(bad), Err(CoreError::InvalidColumn(_))),
                "expected InvalidColumn for {bad:?}"
            );
        }
    }

    #[test]
    fn rejects_blank_sheet_name() {
        assert!(matches!(
            row_update_range("   ", 1),
            Err(CoreError::EmptySheetName)
        ));
        assert!(matches!(
            validate_sheet_name(""),
            Err(CoreError::EmptySheetName)
        ));
        assert!(validate_sheet_name("Price List").is_ok());
    }
}
