//! Facade behaviour: success/error envelopes, ordering, completeness,
//! isolation and idempotence.

use featscan_analysis::parsers::ParseOptions;
use featscan_analysis::{
    detect_with_all_features, detect_with_features, standard_catalog, DetectionResult,
    FeatureCatalog, FeatureScanner, Outcome,
};
use featscan_core::errors::ParseError;

fn arrow_only() -> FeatureCatalog {
    FeatureCatalog::standard().subset(&["arrow-function"]).unwrap()
}

#[test]
fn test_arrow_function_scenario() {
    let source = "const x = 1; let y = () => x + 1;";
    let outcome = detect_with_features(source, &arrow_only());
    let features = outcome.features().expect("should parse");

    let arrows = features.get("arrow-function");
    assert_eq!(arrows.len(), 1);
    let arrow = &arrows[0];
    assert_eq!(arrow.feature, "arrow-function");
    assert_eq!(arrow.span.range, [21, 32]);
    assert_eq!(arrow.span.text(source), Some("() => x + 1"));
    assert_eq!(arrow.span.loc.start.line, 1);
    assert_eq!(arrow.span.loc.start.column, 21);
    assert_eq!(arrow.span.loc.end.column, 32);
}

#[test]
fn test_absent_feature_is_empty_success() {
    let outcome = detect_with_features("function f() { return 1 }", &arrow_only());
    assert!(outcome.is_success());
    let features = outcome.features().unwrap();
    assert!(features.is_empty());
    assert!(!features.contains("arrow-function"));
}

#[test]
fn test_syntax_error_is_error_outcome() {
    let outcome = detect_with_all_features("let a = ;");
    assert!(outcome.is_error());
    assert!(outcome.features().is_none());
    match outcome.error() {
        Some(ParseError::Syntax { first, errors }) => {
            assert_eq!(first.line, 1);
            assert!(!first.description.is_empty());
            assert_eq!(&errors[0], first);
        }
        other => panic!("expected syntax error, got {other:?}"),
    }
}

#[test]
fn test_unterminated_string_short_circuits() {
    let outcome = detect_with_all_features("const s = \"abc;\nconst t = () => 1;");
    assert!(outcome.is_error());
    assert!(outcome.into_result().is_err());
}

#[test]
fn test_non_tolerant_keeps_only_first_diagnostic() {
    let source = "let a = ;\nlet b = ;\n";
    let strict = FeatureScanner::new(
        FeatureCatalog::standard(),
        ParseOptions {
            tolerant: false,
            ..ParseOptions::default()
        },
    );
    let tolerant = FeatureScanner::standard();

    let strict_errors = strict.detect_with_all_features(source).error().unwrap().diagnostic_count();
    let tolerant_errors = tolerant.detect_with_all_features(source).error().unwrap().diagnostic_count();
    assert_eq!(strict_errors, 1);
    assert!(tolerant_errors >= strict_errors);
}

#[test]
fn test_source_size_limit() {
    let scanner = FeatureScanner::new(
        FeatureCatalog::standard(),
        ParseOptions {
            max_source_bytes: 4,
            ..ParseOptions::default()
        },
    );
    let outcome = scanner.detect_with_all_features("let x = 1;");
    assert_eq!(
        outcome.error(),
        Some(&ParseError::SourceTooLarge { size: 10, limit: 4 })
    );
}

#[test]
fn test_every_instance_is_reported() {
    let n = 25;
    let source: String = (0..n).map(|i| format!("let f{i} = () => {i};\n")).collect();
    let features = detect_with_features(&source, &arrow_only()).into_result().unwrap();
    assert_eq!(features.count("arrow-function"), n);

    let nested = detect_with_features("const add = a => b => a + b;", &arrow_only())
        .into_result()
        .unwrap();
    assert_eq!(nested.count("arrow-function"), 2);
}

#[test]
fn test_occurrences_follow_document_order() {
    let source = r#"
const a = () => [1, 2].map(x => x * 2);
function outer() {
  return () => { const inner = y => y; return inner; };
}
let last = () => 0;
"#;
    let features = detect_with_all_features(source).into_result().unwrap();
    for (id, occurrences) in features.iter() {
        let starts: Vec<usize> = occurrences.iter().map(|o| o.start_offset()).collect();
        let mut sorted = starts.clone();
        sorted.sort_unstable();
        assert_eq!(starts, sorted, "{id} occurrences out of order");
        assert!(occurrences.iter().all(|o| o.feature == id));
    }
    assert_eq!(features.count("arrow-function"), 5);
}

#[test]
fn test_unrelated_detectors_do_not_change_results() {
    let source = include_str!("../../test-fixtures/javascript/modern.js");
    let catalog = FeatureCatalog::standard();
    let full = detect_with_features(source, &catalog).into_result().unwrap();

    for id in catalog.ids() {
        let alone = detect_with_features(source, &catalog.subset(&[id]).unwrap())
            .into_result()
            .unwrap();
        assert_eq!(alone.get(id), full.get(id), "isolation broken for {id}");
        assert!(alone.feature_ids().all(|found| found == id));
    }
}

#[test]
fn test_repeated_calls_are_identical() {
    let source = include_str!("../../test-fixtures/javascript/modern.js");
    let first = detect_with_all_features(source);
    let second = detect_with_all_features(source);
    assert!(first.is_success());
    assert_eq!(first, second);
}

#[test]
fn test_scanner_uses_its_own_catalog() {
    let scanner = FeatureScanner::new(arrow_only(), ParseOptions::default());
    let features = scanner
        .detect_with_all_features("let a = 1; const f = () => a;")
        .into_result()
        .unwrap();
    assert_eq!(features.feature_ids().collect::<Vec<_>>(), vec!["arrow-function"]);
}

#[test]
fn test_batch_detection_keeps_input_order() {
    let scanner = FeatureScanner::standard();
    let sources = ["let a = 1;", "let a = ;", "const f = () => 1;", "}"];
    let outcomes = scanner.detect_batch(&sources);
    assert_eq!(outcomes.len(), 4);
    assert!(outcomes[0].is_success());
    assert!(outcomes[1].is_error());
    assert_eq!(
        outcomes[2].features().map(|f| f.count("arrow-function")),
        Some(1)
    );
    assert!(outcomes[3].is_error());
}

#[test]
fn test_outcome_json_shape() {
    let outcome = detect_with_features("let y = () => 1;", &arrow_only());
    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["type"], "success");
    let arrow = &json["features"]["arrow-function"][0];
    assert_eq!(arrow["type"], "arrow-function");
    assert_eq!(arrow["range"], serde_json::json!([8, 15]));
    assert_eq!(arrow["loc"]["start"]["line"], 1);
    assert_eq!(arrow["loc"]["start"]["column"], 8);
    assert_eq!(arrow["async"], false);

    let failed = detect_with_all_features("let a = ;");
    let json = serde_json::to_value(&failed).unwrap();
    assert_eq!(json["type"], "error");
    assert_eq!(json["errorMsg"]["kind"], "syntax");
    assert_eq!(json["errorMsg"]["first"]["line"], 1);
    assert!(json.get("features").is_none());
}

#[test]
fn test_outcome_from_result() {
    let err = ParseError::NoTree;
    let result: Result<DetectionResult, ParseError> = Err(err.clone());
    let outcome = Outcome::from(result);
    assert_eq!(outcome.error(), Some(&err));
    assert!(!outcome.is_success());
}

#[test]
fn test_result_into_map() {
    let source = "let a = () => 1; let b = () => 2;";
    let features = detect_with_all_features(source).into_result().unwrap();
    let total = features.total_occurrences();
    let map = features.into_map();
    assert_eq!(map["arrow-function"].len(), 2);
    assert_eq!(map["let-declaration"].len(), 2);
    assert_eq!(map.values().map(Vec::len).sum::<usize>(), total);
}

#[test]
fn test_standard_catalog_is_built_once() {
    assert!(std::ptr::eq(standard_catalog(), standard_catalog()));
    assert!(standard_catalog().ids().eq(FeatureCatalog::standard().ids()));

    let source = "let f = () => 1n;";
    assert_eq!(
        detect_with_all_features(source),
        detect_with_features(source, standard_catalog())
    );
    assert!(FeatureScanner::standard().catalog().ids().eq(standard_catalog().ids()));
}
