use rust_decimal::Decimal;
use tempfile::TempDir;
use transcript_tracker::{Course, LocalStorage, TranscriptError, TranscriptStore};

fn course(name: &str, grade: &str, credit_hours: i64) -> Course {
    Course::new(name, grade, Decimal::from(credit_hours)).unwrap()
}

#[tokio::test]
async fn test_missing_file_is_created_on_append() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("records").join("grades.json");

    let mut store = TranscriptStore::new(LocalStorage::new());
    let result = store.load(&path).await;
    assert!(matches!(result, Err(TranscriptError::FileNotFound { .. })));
    assert!(!path.exists());

    store
        .append(1, vec![course("MA261", "B+", 4), course("CS180", "A", 3)])
        .await
        .unwrap();
    assert!(path.exists());

    let saved: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    let semesters = saved.as_array().unwrap();
    assert_eq!(semesters.len(), 1);
    assert_eq!(semesters[0]["num"], 1);
    assert_eq!(semesters[0]["courses"][0]["name"], "MA261");
    assert_eq!(semesters[0]["courses"][0]["grade"], "B+");
    assert_eq!(semesters[0]["courses"][0]["crhr"].as_f64(), Some(4.0));
    assert_eq!(semesters[0]["courses"][1]["name"], "CS180");
}

#[tokio::test]
async fn test_existing_file_round_trips() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("grades.json");
    std::fs::write(
        &path,
        r#"[
  {"num": 1, "courses": [{"name": "MA261", "grade": "B+", "crhr": 4}, {"name": "cs180", "grade": "A", "crhr": 3}]},
  {"num": 2, "courses": []},
  {"num": 3, "courses": [{"name": "PHYS172", "grade": "c-", "crhr": 4.5}]}
]"#,
    )
    .unwrap();

    let mut store = TranscriptStore::new(LocalStorage::new());
    store.load(&path).await.unwrap();
    let loaded = store.transcript().clone();
    store.save().await.unwrap();

    let mut reloaded = TranscriptStore::new(LocalStorage::new());
    reloaded.load(&path).await.unwrap();
    assert_eq!(reloaded.transcript(), &loaded);

    let numbers: Vec<u32> = reloaded
        .transcript()
        .semesters()
        .iter()
        .map(|s| s.number())
        .collect();
    assert_eq!(numbers, vec![1, 2, 3]);
    assert_eq!(
        reloaded.transcript().semesters()[0].courses()[1].name(),
        "cs180"
    );
}

#[tokio::test]
async fn test_malformed_file_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("grades.json");
    std::fs::write(&path, "{ not json").unwrap();

    let mut store = TranscriptStore::new(LocalStorage::new());
    let result = store.load(&path).await;

    match result {
        Err(TranscriptError::MalformedData { path: reported, .. }) => {
            assert_eq!(reported, path);
        }
        other => panic!("expected MalformedData, got {:?}", other),
    }
    assert!(store.source_path().is_none());
    assert!(store.transcript().is_empty());
}

#[tokio::test]
async fn test_unknown_grade_downgrades_only_its_semester() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("grades.json");
    std::fs::write(
        &path,
        r#"[
  {"num": 1, "courses": [{"name": "MA261", "grade": "B+", "crhr": 4}, {"name": "CS180", "grade": "A", "crhr": 3}]},
  {"num": 2, "courses": [{"name": "HIST101", "grade": "Z", "crhr": 3}]}
]"#,
    )
    .unwrap();

    let mut store = TranscriptStore::new(LocalStorage::new());
    store.load(&path).await.unwrap();

    let summary = store.aggregate().unwrap();
    assert_eq!(summary.total_quality_points, Decimal::new(252, 1));
    assert_eq!(summary.total_credit_hours, Decimal::from(10));
    assert_eq!(summary.warnings.len(), 1);
    assert_eq!(
        summary.warnings[0].to_string(),
        "Unknown grade 'Z' in semester 2"
    );

    let report = store.render();
    assert!(report.contains("| TOTAL      |  3.60 |     7 |"));
    assert!(report.contains("| TOTAL      |   N/A |     3 |"));
    assert!(report.contains("Overall GPA:          2.52"));
}

#[test]
fn test_directory_path_is_an_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = TranscriptStore::new(LocalStorage::new());

    let result = tokio_test::block_on(store.load(temp_dir.path()));
    assert!(matches!(result, Err(TranscriptError::IoError(_))));
    assert!(store.source_path().is_none());
}
