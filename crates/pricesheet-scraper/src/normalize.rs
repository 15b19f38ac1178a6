//! Product record to sheet row conversion.

use pricesheet_core::{row_update_range, CoreError, ProductRecord, UpdateFragment};

/// Sheets formula that renders `url` as an in-cell image.
#[must_use]
pub fn image_formula(url: &str) -> String {
    format!("=IMAGE(\"{url}\")")
}

/// Builds the `B{row}:F{row}` update for one extracted product.
///
/// Cells are, in order: title, image formula, description, retailer label
/// and price.
///
/// # Errors
///
/// Returns [`CoreError::EmptySheetName`] for a blank `sheet_name`.
pub fn to_fragment(
    record: &ProductRecord,
    sheet_name: &str,
    row_number: u32,
) -> Result<UpdateFragment, CoreError> {
    let range = row_update_range(sheet_name, row_number)?;
    Ok(UpdateFragment::new(
        range,
        [
            record.title.clone(),
            image_formula(&record.image_url),
            record.description.clone(),
            record.retailer_label.clone(),
            record.price.clone(),
        ],
    ))
}
