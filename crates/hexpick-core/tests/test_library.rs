mod common;

use hexpick_core::library::{BatchSummary, ImageLibrary};

use common::{record, solid};

fn ok(name: &str) -> Result<hexpick_core::library::ImageRecord, String> {
    Ok(record(name, solid(2, 2, [1, 2, 3])))
}

// ---------------------------------------------------------------------------
// Batch completion
// ---------------------------------------------------------------------------

#[test]
fn test_batch_installs_after_last_result() {
    let mut lib = ImageLibrary::new();
    let batch = lib.begin_batch(3);
    assert!(lib.is_loading());

    assert_eq!(lib.complete(batch, 2, ok("c.png")), None);
    assert_eq!(lib.complete(batch, 0, ok("a.png")), None);
    assert!(lib.is_empty(), "nothing shown before the batch finishes");

    let summary = lib.complete(batch, 1, ok("b.png")).unwrap();
    assert_eq!(
        summary,
        BatchSummary {
            requested: 3,
            loaded: 3,
            failures: vec![],
        }
    );
    assert!(!lib.is_loading());

    let names: Vec<_> = lib.images().iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["a.png", "b.png", "c.png"], "selection order kept");
    assert_eq!(lib.current_index(), Some(0));
}

#[test]
fn test_failed_decodes_are_skipped() {
    let mut lib = ImageLibrary::new();
    let batch = lib.begin_batch(2);
    lib.complete(batch, 0, Err("broken.png: bad header".to_string()));
    let summary = lib.complete(batch, 1, ok("good.png")).unwrap();
    assert_eq!(summary.loaded, 1);
    assert_eq!(summary.failures, vec!["broken.png: bad header".to_string()]);
    assert_eq!(lib.len(), 1);
}

#[test]
fn test_all_failed_keeps_previous_images() {
    let mut lib = ImageLibrary::new();
    let first = lib.begin_batch(1);
    lib.complete(first, 0, ok("kept.png"));

    let second = lib.begin_batch(1);
    let summary = lib.complete(second, 0, Err("nope".to_string())).unwrap();
    assert_eq!(summary.loaded, 0);
    assert_eq!(lib.current().unwrap().name, "kept.png");
}

#[test]
fn test_new_batch_replaces_and_resets_selection() {
    let mut lib = ImageLibrary::new();
    let first = lib.begin_batch(2);
    lib.complete(first, 0, ok("a.png"));
    lib.complete(first, 1, ok("b.png"));
    lib.next();
    assert_eq!(lib.current_index(), Some(1));

    let second = lib.begin_batch(1);
    lib.complete(second, 0, ok("z.png"));
    assert_eq!(lib.len(), 1);
    assert_eq!(lib.current_index(), Some(0));
}

#[test]
fn test_stale_batch_results_dropped() {
    let mut lib = ImageLibrary::new();
    let old = lib.begin_batch(2);
    lib.complete(old, 0, ok("old-a.png"));
    let new = lib.begin_batch(1);

    assert_eq!(lib.complete(old, 1, ok("old-b.png")), None);
    assert!(lib.is_empty());
    assert!(lib.complete(new, 0, ok("new.png")).is_some());
    assert_eq!(lib.current().unwrap().name, "new.png");
}

#[test]
fn test_duplicate_and_out_of_range_results_ignored() {
    let mut lib = ImageLibrary::new();
    let batch = lib.begin_batch(2);
    assert_eq!(lib.complete(batch, 0, ok("a.png")), None);
    assert_eq!(lib.complete(batch, 0, ok("again.png")), None);
    assert_eq!(lib.complete(batch, 5, ok("stray.png")), None);
    assert!(lib.is_loading());

    lib.complete(batch, 1, ok("b.png")).unwrap();
    assert_eq!(lib.images()[0].name, "a.png");
}

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

#[test]
fn test_indicator() {
    let mut lib = ImageLibrary::new();
    assert_eq!(lib.indicator(), "No images");
    assert_eq!(lib.current_index(), None);

    let batch = lib.begin_batch(3);
    for (i, name) in ["a.png", "b.png", "c.png"].iter().enumerate() {
        lib.complete(batch, i, ok(name));
    }
    assert_eq!(lib.indicator(), "1 / 3");
    lib.next();
    assert_eq!(lib.indicator(), "2 / 3");
}

#[test]
fn test_navigation_flags() {
    let mut lib = ImageLibrary::new();
    assert!(!lib.can_go_previous());
    assert!(!lib.can_go_next());
    assert!(!lib.next());

    let batch = lib.begin_batch(2);
    lib.complete(batch, 0, ok("a.png"));
    lib.complete(batch, 1, ok("b.png"));
    assert!(!lib.can_go_previous());
    assert!(lib.can_go_next());
    assert!(lib.next());
    assert!(lib.can_go_previous());
    assert!(!lib.can_go_next());
    assert!(!lib.next());
    assert!(lib.previous());
    assert!(!lib.previous());
}

#[test]
fn test_name_from_path() {
    use std::path::Path;
    use hexpick_core::library::ImageRecord;

    assert_eq!(
        ImageRecord::name_from_path(Path::new("/tmp/shots/swatch.jpg")),
        "swatch.jpg"
    );
}
