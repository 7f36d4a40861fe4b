use batstub_core::catalog::{self, Catalog};
use batstub_core::generate::{generate_catalog, ProcessedCategory};
use batstub_core::GeneratorError;
use batstub_python::{PythonConfig, PythonStubGenerator};

const CODINGBAT: &str = include_str!("fixtures/codingbat.yaml");

fn load() -> Catalog {
    catalog::from_yaml(CODINGBAT).expect("fixture should parse")
}

fn generate_all() -> Vec<ProcessedCategory> {
    generate_catalog(&PythonStubGenerator, &load(), &PythonConfig::default(), false)
        .expect("lenient generation should not fail")
}

fn content<'a>(processed: &'a [ProcessedCategory], category: &str, path: &str) -> &'a str {
    processed
        .iter()
        .find(|c| c.name == category)
        .and_then(|c| c.files.iter().find(|f| f.path == path))
        .map(|f| f.content.as_str())
        .unwrap_or_else(|| panic!("missing {category}/{path}"))
}

#[test]
fn categories_named_from_url_or_name() {
    let names: Vec<_> = load().categories.into_iter().map(|c| c.name).collect();
    assert_eq!(names, ["Warmup-1", "Map-2", "Functional-1"]);
}

#[test]
fn sleep_in_matches_published_layout() {
    let processed = generate_all();
    assert_eq!(
        content(&processed, "Warmup-1", "sleepIn.py"),
        "\"\"\"\n\
         The parameter weekday is true if it is a weekday, and the parameter vacation is true\n\
         if we are on vacation. We sleep in if it is not a weekday or we're on vacation. Return\n\
         true if we sleep in.\n\
         \"\"\"\n\
         \n\
         \n\
         def sleepIn(weekday: bool, vacation: bool) -> bool:\n    pass\n\
         \n\
         \n\
         if __name__ == '__main__':\n\
         \x20   assert sleepIn(False, False) == True\n\
         \x20   assert sleepIn(True, False) == False\n\
         \x20   assert sleepIn(False, True) == True\n"
    );
}

#[test]
fn reserved_parameter_name_is_renamed() {
    let processed = generate_all();
    let front_back = content(&processed, "Warmup-1", "frontBack.py");
    assert!(front_back.contains("def frontBack(string: str) -> str:\n    pass"));
    assert!(front_back.contains("    assert frontBack(\"code\") == \"eodc\"\n"));
}

#[test]
fn map_problem_imports_list_and_dict() {
    let processed = generate_all();
    assert_eq!(
        content(&processed, "Map-2", "wordLen.py"),
        "\"\"\"\n\
         Given an array of strings, return a Map<String, Integer> containing a key for every\n\
         different string in the array, and the value is that string's length.\n\
         \"\"\"\n\
         from typing import List, Dict\n\
         \n\
         \n\
         def wordLen(strings: List[str]) -> Dict[str, int]:\n    pass\n\
         \n\
         \n\
         if __name__ == '__main__':\n\
         \x20   assert wordLen([\"a\", \"bb\", \"a\", \"bb\"]) == {\"bb\": 2, \"a\": 1}\n"
    );
}

#[test]
fn problem_without_examples_still_parses_as_python() {
    let processed = generate_all();
    let map_share = content(&processed, "Map-2", "mapShare.py");
    insta::assert_snapshot!(map_share, @r#"
    """
    Modify and return the given map as follows.
    """
    from typing import Dict


    def mapShare(mapping: Dict[str, str]) -> Dict[str, str]:
        pass


    if __name__ == '__main__':
        pass
    "#);
}

#[test]
fn list_problem_imports_list_only() {
    let processed = generate_all();
    let doubling = content(&processed, "Functional-1", "doubling.py");
    assert!(doubling.contains("\"\"\"\nfrom typing import List\n\n\ndef doubling(nums: List[int]) -> List[int]:"));
}

#[test]
fn malformed_problem_is_skipped() {
    let processed = generate_all();
    let functional = processed
        .iter()
        .find(|c| c.name == "Functional-1")
        .unwrap();
    assert_eq!(functional.files.len(), 1);
    assert_eq!(functional.failures.len(), 1);
    assert_eq!(functional.failures[0].problem, "broken");
    assert!(functional.failures[0].error.contains("missing `(`"));
}

#[test]
fn strict_generation_fails_on_malformed_problem() {
    let result = generate_catalog(&PythonStubGenerator, &load(), &PythonConfig::default(), true);
    assert!(matches!(result, Err(GeneratorError::Parse(_))));
}

#[test]
fn generation_is_deterministic() {
    let first = generate_all();
    let second = generate_all();
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.files, b.files);
    }
}
