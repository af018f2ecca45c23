//! A single matcher shared across threads gives the same answers as a
//! sequential run.

use std::sync::Arc;
use std::thread;

use namematch::{Dictionaries, MatchOptions, Matcher, MatcherConfig};

const PAIRS: &[(&str, &str)] = &[
    ("John Smith", "Jon Smith"),
    ("Robert A. Smith", "Bob Smith"),
    ("Александр Петров", "Саша Петров"),
    ("Wáng Wěi", "Wei Wang"),
    ("Mohammed bin Hamad Al Thani", "Mohammed ibn Hamad Al Thani"),
    ("Jane Doe", "John Smith"),
    ("Dr. von Neumann", "Von Neumann"),
];

#[test]
fn shared_matcher_across_threads() {
    let matcher = Arc::new(Matcher::new(MatcherConfig::default()).expect("matcher"));
    let expected: Vec<f64> = PAIRS.iter().map(|(a, b)| matcher.quick_match(a, b)).collect();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let matcher = Arc::clone(&matcher);
            thread::spawn(move || {
                // Stagger the starting pair so threads hit different work.
                (0..PAIRS.len())
                    .map(|k| (k + i) % PAIRS.len())
                    .map(|k| {
                        let (a, b) = PAIRS[k];
                        (k, matcher.quick_match(a, b))
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        for (k, confidence) in handle.join().expect("thread panicked") {
            assert_eq!(confidence, expected[k], "pair {k}");
        }
    }
}

#[test]
fn matchers_can_share_one_dictionary_handle() {
    let dicts = Arc::new(Dictionaries::load().expect("built-ins load"));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let dicts = Arc::clone(&dicts);
            thread::spawn(move || {
                let matcher =
                    Matcher::with_dictionaries(dicts, MatcherConfig::default()).expect("matcher");
                matcher
                    .match_names("Bill Gates", "William Gates", &MatchOptions::default())
                    .confidence
            })
        })
        .collect();

    let results: Vec<f64> = handles
        .into_iter()
        .map(|h| h.join().expect("thread panicked"))
        .collect();
    assert!(results.windows(2).all(|w| w[0] == w[1]));
    assert!(results[0] >= 0.9);
}

#[test]
fn shared_default_initializes_once_under_contention() {
    let handles: Vec<_> = (0..8)
        .map(|_| thread::spawn(|| namematch::quick_match("John Smith", "Jon Smith")))
        .collect();
    let results: Vec<f64> = handles
        .into_iter()
        .map(|h| h.join().expect("thread panicked"))
        .collect();
    assert!(results.iter().all(|c| *c == results[0]));
    assert!(results[0] > 0.9);
    assert!(namematch::default_matcher().is_ok());
}
