use std::error::Error;

use fschange::config::{parse_config, GlobTemplate};
use fschange_test_utils::builders::ConfigText;
use fschange_test_utils::init_tracing;

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn rules_comments_and_blanks_classify() -> TestResult {
    init_tracing();

    let text = ConfigText::new()
        .comment("rebuild docs on edit")
        .blank()
        .rule("*.md", "make docs")
        .build();

    let parsed = parse_config(&text);
    assert!(parsed.errors.is_empty());
    assert_eq!(
        parsed.rules,
        vec![GlobTemplate {
            glob: "*.md".into(),
            template: "make docs".into(),
        }]
    );

    Ok(())
}

#[test]
fn whitespace_around_arrow_is_trimmed() {
    let parsed = parse_config("src/*.c   ->   make build\n");
    assert_eq!(parsed.rules[0].glob, "src/*.c");
    assert_eq!(parsed.rules[0].template, "make build");
}

#[test]
fn template_may_contain_further_arrows() {
    let parsed = parse_config("in.dot -> dot -Tsvg in.dot -> out.svg\n");
    assert_eq!(parsed.rules[0].glob, "in.dot");
    assert_eq!(parsed.rules[0].template, "dot -Tsvg in.dot -> out.svg");
}

#[test]
fn invalid_line_is_reported_but_does_not_block_other_rules() {
    let text = ConfigText::new()
        .rule("a.txt", "echo a")
        .raw("not a valid rule")
        .rule("b.txt", "echo b")
        .build();

    let parsed = parse_config(&text);
    assert_eq!(parsed.rules.len(), 2);
    assert_eq!(parsed.errors.len(), 1);

    let msg = parsed.errors[0].to_string();
    assert!(msg.contains("line 2"), "unexpected error message: {msg}");
    assert!(msg.contains("not a valid rule"));
}

#[test]
fn macro_applies_only_to_later_lines() {
    let text = ConfigText::new()
        .rule("TARGET.c", "echo {file}")
        .macro_def("TARGET", "", "main")
        .rule("TARGET.h", "echo {file}")
        .build();

    let parsed = parse_config(&text);
    assert!(parsed.errors.is_empty());
    assert_eq!(parsed.rules[0].glob, "TARGET.c");
    assert_eq!(parsed.rules[1].glob, "main.h");
}

#[test]
fn macro_replacement_is_global_within_the_line() {
    let text = ConfigText::new()
        .macro_def("o", "", "0")
        .rule("foo.txt", "echo foo")
        .build();

    let parsed = parse_config(&text);
    assert_eq!(parsed.rules[0].glob, "f00.txt");
    assert_eq!(parsed.rules[0].template, "ech0 f00");
}

#[test]
fn macros_expand_path_aliases() {
    let text = ConfigText::new()
        .macro_def("~", "", "/home/user")
        .rule("~/notes/*.txt", "cp {file} ~/backup/")
        .build();

    let parsed = parse_config(&text);
    assert_eq!(parsed.rules[0].glob, "/home/user/notes/*.txt");
    assert_eq!(parsed.rules[0].template, "cp {file} /home/user/backup/");
}

#[test]
fn macro_flags_control_matching() {
    let text = ConfigText::new()
        .macro_def("readme", "i", "README")
        .rule("ReadMe.md", "cat {file}")
        .build();

    let parsed = parse_config(&text);
    assert!(parsed.errors.is_empty());
    assert_eq!(parsed.rules[0].glob, "README.md");
}

#[test]
fn invalid_macro_regex_is_a_parse_error_for_that_line() {
    let text = ConfigText::new()
        .macro_def("(unclosed", "", "x")
        .rule("a.txt", "echo a")
        .build();

    let parsed = parse_config(&text);
    assert_eq!(parsed.errors.len(), 1);
    // the broken macro was not added, so the rule survives untouched
    assert_eq!(parsed.rules.len(), 1);
    assert_eq!(parsed.rules[0].glob, "a.txt");
}

#[test]
fn unknown_macro_flag_is_a_parse_error() {
    let text = ConfigText::new().macro_def("a", "q", "b").build();

    let parsed = parse_config(&text);
    assert_eq!(parsed.errors.len(), 1);
    assert!(parsed.rules.is_empty());
}

#[test]
fn rule_with_empty_side_is_a_parse_error() {
    let parsed = parse_config("-> echo nothing\n");
    assert!(parsed.rules.is_empty());
    assert_eq!(parsed.errors.len(), 1);
}
