use std::fs;
use std::path::{Path, PathBuf};

use co2_dashboard::{
    latest_year, load_records, top_emitters, Dashboard, DashboardError, Dataset, TOP_EMITTER_LIMIT,
};

const HEADER: &str = "Country Name,Year,GDP_Value,co2,co2_per_capita";

fn write_csv(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, body).expect("write csv");
    path
}

#[test]
fn scenario_rows_give_expected_subset() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let path = write_csv(
        tmp.path(),
        "merged.csv",
        &format!("{HEADER}\nA,2020,100,50,5.0\nB,2020,200,80,4.0\nA,2019,90,45,4.5\n"),
    );

    let dataset = Dataset::load(&path).unwrap();
    assert_eq!(dataset.len(), 3);
    assert_eq!(latest_year(dataset.records()), Some(2020));

    let top = top_emitters(dataset.records(), TOP_EMITTER_LIMIT);
    let ranked: Vec<(&str, Option<f64>)> = top
        .records
        .iter()
        .map(|r| (r.country.as_str(), r.co2))
        .collect();
    assert_eq!(ranked, [("B", Some(80.0)), ("A", Some(50.0))]);
}

#[test]
fn rows_with_nulls_never_survive_cleaning() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let path = write_csv(
        tmp.path(),
        "merged.csv",
        &format!(
            "{HEADER}\nKeep,2020,100,50,5.0\nNoGdp,2020,,90,9.0\nNoPerCapita,2020,300,70,NaN\nAlsoKeep,2019,120,,3.0\n"
        ),
    );

    let dataset = Dataset::load(&path).unwrap();
    let countries: Vec<&str> = dataset.records().iter().map(|r| r.country.as_str()).collect();
    assert_eq!(countries, ["Keep", "AlsoKeep"]);
    assert_eq!(dataset.rows_dropped(), 2);

    let dashboard = Dashboard::build(dataset, TOP_EMITTER_LIMIT).unwrap();
    let page = String::from_utf8(dashboard.page().to_vec()).unwrap();
    assert!(page.contains("Keep"));
    assert!(!page.contains("NoGdp"));
    assert!(!page.contains("NoPerCapita"));
}

#[test]
fn top_emitters_hold_invariants_on_larger_input() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let mut body = String::from(HEADER);
    for i in 0..25 {
        body.push_str(&format!("\nCountry{i},2021,{},{},{}", 1000 + i, (i * 7) % 13, 1.5));
        body.push_str(&format!("\nCountry{i},2018,{},{},{}", 900 + i, 500 + i, 1.2));
    }
    let path = write_csv(tmp.path(), "merged.csv", &body);

    let dataset = Dataset::load(&path).unwrap();
    let year = latest_year(dataset.records()).unwrap();
    assert_eq!(year, dataset.records().iter().map(|r| r.year).max().unwrap());

    let top = top_emitters(dataset.records(), TOP_EMITTER_LIMIT);
    assert!(top.len() <= 10);
    assert!(top.records.iter().all(|r| r.year == year));
    assert!(top.records.windows(2).all(|w| w[0].co2 >= w[1].co2));
}

#[test]
fn pipeline_is_idempotent() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let path = write_csv(
        tmp.path(),
        "merged.csv",
        &format!("{HEADER}\nA,2020,100,50,5.0\nB,2020,,80,4.0\nC,2020,300,80,2.0\n"),
    );

    let first = Dataset::load(&path).unwrap();
    let second = Dataset::load(&path).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        top_emitters(first.records(), TOP_EMITTER_LIMIT),
        top_emitters(second.records(), TOP_EMITTER_LIMIT)
    );
}

#[test]
fn extra_columns_are_ignored() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let path = write_csv(
        tmp.path(),
        "merged.csv",
        "Country Code,Country Name,Year,GDP_Value,co2,co2_per_capita,population\nCHL,Chile,2020,2.5e11,85.0,4.4,19000000\n",
    );

    let records = load_records(&path).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].country, "Chile");
    assert_eq!(records[0].gdp_value, Some(2.5e11));
}

#[test]
fn missing_file_names_the_path() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let path = tmp.path().join("absent.csv");

    let err = load_records(&path).unwrap_err();
    assert!(matches!(err, DashboardError::Io { .. }));
    assert!(err.to_string().contains("absent.csv"));
}

#[test]
fn missing_per_capita_column_fails() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let path = write_csv(
        tmp.path(),
        "merged.csv",
        "Country Name,Year,GDP_Value,co2\nA,2020,100,50\n",
    );

    let err = Dashboard::load(&path, TOP_EMITTER_LIMIT).unwrap_err();
    match err {
        DashboardError::MissingColumn { column, .. } => assert_eq!(column, "co2_per_capita"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn malformed_numbers_fail_at_load() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let path = write_csv(
        tmp.path(),
        "merged.csv",
        &format!("{HEADER}\nA,2020,lots,50,5.0\n"),
    );

    assert!(matches!(load_records(&path), Err(DashboardError::Csv { .. })));
}

#[test]
fn header_only_file_builds_empty_dashboard() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let path = write_csv(tmp.path(), "merged.csv", &format!("{HEADER}\n"));

    let dashboard = Dashboard::load(&path, TOP_EMITTER_LIMIT).unwrap();
    assert!(dashboard.dataset().is_empty());
    assert!(dashboard.top_emitters().is_empty());
    assert_eq!(dashboard.top_emitters().year, None);
}

#[test]
fn infinite_cells_fail_at_load() {
    let tmp = tempfile::tempdir().expect("tempdir");
    for (name, row) in [
        ("co2.csv", "A,2020,100,inf,5.0"),
        ("gdp.csv", "A,2020,-inf,50,5.0"),
        ("per_capita.csv", "A,2020,100,50,inf"),
    ] {
        let path = write_csv(tmp.path(), name, &format!("{HEADER}\n{row}\nB,2020,200,10,4.0\n"));

        let err = Dashboard::load(&path, TOP_EMITTER_LIMIT).unwrap_err();
        assert!(matches!(err, DashboardError::Csv { .. }), "{name}: {err}");
        assert!(err.to_string().contains("finite"), "{name}: {err}");
    }
}

#[test]
fn blank_year_fails_at_load() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let path = write_csv(
        tmp.path(),
        "merged.csv",
        &format!("{HEADER}\nA,2020,100,50,5.0\nB,,200,80,4.0\n"),
    );

    let err = load_records(&path).unwrap_err();
    assert!(matches!(err, DashboardError::Csv { .. }));
    assert!(err.to_string().contains("year is missing"));
}
