//! Projection of filtered records into the fixed 8-column output table.

use crate::PermitRecord;

/// Fixed header row; labels follow the feed's published column names.
pub const HEADER: [&str; 8] = [
    "번호",
    "영업고유구분번호(인허가번호)",
    "업종",
    "업소명",
    "대표자명",
    "전화번호",
    "허가일자",
    "주소",
];

/// Rectangular pipeline output: one header row plus zero or more data rows
/// of 8 cells each. Row order follows filtered-record order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Number of data rows; the header is not counted.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Project records into a table.
///
/// Sequence numbers are 1-based and re-numbered after filtering; they do
/// not reflect the original feed index. Missing string fields render as
/// the empty string.
pub fn to_table(records: &[PermitRecord]) -> Table {
    let rows = records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            vec![
                (index + 1).to_string(),
                record.license_id.clone(),
                record.category.clone(),
                record.business_name.clone(),
                record.owner_name.clone(),
                record.phone.clone(),
                record.permit_date.clone(),
                record.address.clone(),
            ]
        })
        .collect();

    Table {
        header: HEADER.iter().map(|label| label.to_string()).collect(),
        rows,
    }
}
