// Integration tests for shobai
use shobai::prelude::*;
use shobai::text::Document;
use shobai::{read_idfs, read_stopwords, Error, ProgressReport};
use std::collections::{HashMap, HashSet};
use std::io::Write;

#[test]
fn test_set_similarity_properties() {
    let a: HashSet<u32> = [1, 2].into_iter().collect();
    let b: HashSet<u32> = [2, 3].into_iter().collect();
    let empty: HashSet<u32> = HashSet::new();

    assert_eq!(jaccard_overlap(&a, &b), jaccard_overlap(&b, &a));
    assert_eq!(jaccard_overlap(&a, &a), 1.0);
    assert_eq!(jaccard_overlap(&a, &empty), 0.0);
    assert_eq!(hit_percent(&a, &b), 0.5);
    assert_eq!(hit_percent(&a, &a), 1.0);
}

#[test]
fn test_quantize_similarity_levels() {
    assert_eq!(quantize_similarity(0.0, 5).unwrap(), 0);
    assert_eq!(quantize_similarity(1.0, 5).unwrap(), 4);
    assert_eq!(quantize_similarity(0.9, 6).unwrap(), 5);
    assert_eq!(quantize_similarity(0.51, 2).unwrap(), 1);
    assert_eq!(quantize_similarity(0.5, 3).unwrap(), 1);
    assert!(matches!(
        quantize_similarity(-0.1, 5),
        Err(Error::SimilarityOutOfRange(_))
    ));
    assert!(matches!(quantize_similarity(0.5, 1), Err(Error::TooFewLevels(1))));
}

#[test]
fn test_top_k_selection() {
    let counts: HashMap<String, f64> = [("one", 1.0), ("two", 2.0), ("three", 3.0)]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();

    let top = top_k(&counts, 2);
    let expected: HashMap<String, f64> = [("two".to_string(), 2.0), ("three".to_string(), 3.0)]
        .into_iter()
        .collect();
    assert_eq!(top, expected);

    assert_eq!(top_k(&counts, 5).len(), 3);

    let words: HashMap<&str, &str> = [("one", "a"), ("two", "aa"), ("three", "aaa")]
        .into_iter()
        .collect();
    let top = top_k_comparable(&words, 1);
    let expected: HashMap<&str, &str> = [("three", "aaa")].into_iter().collect();
    assert_eq!(top, expected);
}

#[test]
fn test_vector_space_round_trip() {
    let v: HashMap<&str, f64> = [("a", 1.0), ("b", -2.0), ("c", 0.5)].into_iter().collect();
    let normalized = l2_normalize(&v).unwrap();
    assert!((magnitude(&normalized) - 1.0).abs() < 1e-12);

    let mut in_place = v.clone();
    l2_normalize_in_place(&mut in_place).unwrap();
    for (key, w) in &in_place {
        assert!((w - normalized[key]).abs() < 1e-15);
    }

    assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-12);
    // Scaling does not change the angle
    assert!((cosine_similarity(&v, &normalized) - 1.0).abs() < 1e-12);
}

#[test]
fn test_dcg_and_idcg() {
    let relevance = [3.0, 2.0, 3.0, 0.0, 1.0, 2.0];
    let dcg = compute_dcg(&relevance).unwrap();
    let idcg = compute_idcg(&relevance).unwrap();

    assert_eq!(dcg.len(), relevance.len());
    assert_eq!(idcg, compute_dcg(&[3.0, 3.0, 2.0, 2.0, 1.0, 0.0]).unwrap());
    assert!(idcg.last().unwrap() >= dcg.last().unwrap());

    let ndcg = compute_ndcg(&relevance).unwrap();
    assert!(ndcg.iter().all(|&x| (0.0..=1.0 + 1e-12).contains(&x)));
    assert_eq!(compute_dcg(&[]), Err(Error::EmptyRelevance));
}

#[test]
fn test_js_divergence_self_is_zero() {
    let p: HashMap<&str, f64> = [("x", 0.25), ("y", 0.75)].into_iter().collect();
    assert_eq!(js_divergence(&p, &p), 0.0);
}

#[test]
fn test_bounded_heap_top_scores() {
    let mut heap = BoundedHeap::new(3);
    for score in [30u32, 90, 10, 70, 50] {
        heap.push(score);
    }
    assert_eq!(heap.peek_worst(), Some(&50));
    assert_eq!(heap.into_sorted_vec(), vec![90, 70, 50]);
}

#[test]
fn test_documents_from_files() {
    let dir = tempfile::tempdir().unwrap();
    let stop_path = dir.path().join("stopwords.txt");
    std::fs::write(&stop_path, "The\nof\n").unwrap();

    let mut a = std::fs::File::create(dir.path().join("a.txt")).unwrap();
    writeln!(a, "The theory of relativity").unwrap();
    writeln!(a, "and quantum theory").unwrap();
    let mut b = std::fs::File::create(dir.path().join("b.txt")).unwrap();
    writeln!(b, "Quantum theory of fields").unwrap();
    drop((a, b));

    let locator = ResourceLocator::new([dir.path()]);
    let stopwords = read_stopwords(locator.open("stopwords.txt").unwrap()).unwrap();
    assert!(stopwords.contains("the"));

    let doc_a = Document::load(&locator, "a.txt", &stopwords).unwrap();
    let doc_b = Document::load(&locator, "b.txt", &stopwords).unwrap();
    assert_eq!(doc_a.lines(), 2);
    assert_eq!(doc_a.counts()["theory"], 2);

    let (terms_a, terms_b) = (doc_a.terms(), doc_b.terms());
    // a = {theory, relativity, and, quantum}, b = {quantum, theory, fields}
    assert!((jaccard_overlap(&*terms_a, &*terms_b) - 2.0 / 5.0).abs() < 1e-12);
    assert_eq!(hit_percent(&*terms_b, &*terms_a), 2.0 / 3.0);

    let js = js_divergence(&*doc_a.distribution(), &*doc_b.distribution());
    assert!(js > 0.0 && js < std::f64::consts::LN_2);

    let cosine = cosine_similarity(&*doc_b.tf_vector(), &*doc_a.tf_vector());
    assert!(cosine > 0.0 && cosine < 1.0);
}

#[test]
fn test_idf_table_top_terms() {
    let table = "the\t1000\nrust\t10\nheap\t50\nrare\t1\n";
    let idfs = read_idfs(std::io::Cursor::new(table), 1000).unwrap();
    let top = top_k(&*idfs, 2);
    assert_eq!(top.len(), 2);
    assert!(top.contains_key("rare"));
    assert!(top.contains_key("rust"));
}

#[test]
fn test_progress_over_line_reader() {
    let text: String = (0..2500).map(|i| format!("line {i}\n")).collect();
    let reports = std::cell::RefCell::new(Vec::new());
    let mut tracker = ProgressTracker::new(2500, |r: &ProgressReport| reports.borrow_mut().push(r.completed));

    for line in LineReader::new(std::io::Cursor::new(text)) {
        line.unwrap();
        tracker.progress();
    }

    assert_eq!(tracker.count(), 2500);
    assert_eq!(*reports.borrow(), vec![1000, 2000]);
}
