use std::fs;

use permit_core::{to_table, PermitRecord, Table};
use permit_engine::{render_table, write_table, ExportOptions};
use pretty_assertions::assert_eq;

fn sample_table() -> Table {
    let records = vec![
        PermitRecord {
            license_id: "20220012345".to_string(),
            category: "일반음식점".to_string(),
            business_name: "한강식당".to_string(),
            permit_date: "20220101".to_string(),
            address: "서울 A로 1, 2층".to_string(),
            ..PermitRecord::default()
        },
        PermitRecord {
            business_name: "강변카페".to_string(),
            ..PermitRecord::default()
        },
    ];
    to_table(&records)
}

#[test]
fn rendered_csv_has_header_and_quoted_cells() {
    let text = render_table(&sample_table()).expect("render ok");
    let mut lines = text.lines();

    assert_eq!(
        lines.next().unwrap(),
        "번호,영업고유구분번호(인허가번호),업종,업소명,대표자명,전화번호,허가일자,주소"
    );
    // The comma-bearing address must come back quoted.
    assert_eq!(
        lines.next().unwrap(),
        "1,20220012345,일반음식점,한강식당,,,20220101,\"서울 A로 1, 2층\""
    );
    assert_eq!(lines.next().unwrap(), "2,,,강변카페,,,,");
    assert_eq!(lines.next(), None);
}

#[test]
fn empty_table_renders_header_only() {
    let text = render_table(&to_table(&[])).expect("render ok");

    assert_eq!(text.lines().count(), 1);
}

#[test]
fn write_table_creates_the_file_in_a_fresh_directory() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output_dir = dir.path().join("exports");

    let summary = write_table(&output_dir, &sample_table(), &ExportOptions::default())
        .expect("write ok");

    assert_eq!(summary.row_count, 2);
    assert_eq!(summary.output_path, output_dir.join("permits.csv"));
    let written = fs::read_to_string(&summary.output_path).expect("read back");
    assert_eq!(written, render_table(&sample_table()).unwrap());
}

#[test]
fn write_table_replaces_an_existing_export() {
    let dir = tempfile::tempdir().expect("tempdir");
    let options = ExportOptions::default();

    write_table(dir.path(), &sample_table(), &options).expect("first write");
    let summary = write_table(dir.path(), &to_table(&[]), &options).expect("second write");

    assert_eq!(summary.row_count, 0);
    let written = fs::read_to_string(&summary.output_path).expect("read back");
    assert_eq!(written.lines().count(), 1);
}
