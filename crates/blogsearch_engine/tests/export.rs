use std::fs;

use blogsearch_core::{Dataset, Post};
use blogsearch_engine::{dataset_from_slice, DatasetWriter};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn dataset() -> Dataset {
    let post = |title: &str, timestamp: i64| Post {
        id: None,
        title: title.to_string(),
        excerpt: String::new(),
        category: "tech".to_string(),
        url: format!("blog/tech/{}.html", title.to_lowercase()),
        publish_date: "June 1, 2024".to_string(),
        timestamp,
    };
    Dataset::new(vec![post("Old", 10), post("New", 30), post("Mid", 20)])
}

#[test]
fn writes_blogs_json_newest_first() {
    let temp = TempDir::new().unwrap();
    let writer = DatasetWriter::new(temp.path().join("docs"));

    let path = writer.write(&dataset()).unwrap();
    assert_eq!(path.file_name().unwrap(), "blogs.json");

    let written = dataset_from_slice(&fs::read(&path).unwrap()).unwrap();
    let titles: Vec<_> = written.blogs.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["New", "Mid", "Old"]);

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("\"publishDate\""));
}

#[test]
fn rewrite_replaces_previous_export() {
    let temp = TempDir::new().unwrap();
    let writer = DatasetWriter::new(temp.path().to_path_buf());
    writer.write(&dataset()).unwrap();
    let path = writer.write(&Dataset::default()).unwrap();

    let written = dataset_from_slice(&fs::read(&path).unwrap()).unwrap();
    assert!(written.is_empty());

    let names: Vec<_> = fs::read_dir(temp.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(names, vec!["blogs.json"]);
}

#[test]
fn output_path_that_is_a_file_is_rejected() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    let writer = DatasetWriter::new(file_path);
    assert!(writer.write(&dataset()).is_err());
}
