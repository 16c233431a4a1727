use std::path::{Path, PathBuf};

use proptest::prelude::*;

use fschange::config::parse_config;
use fschange::template::expand_command;

proptest! {
    #[test]
    fn comment_lines_never_produce_rules_or_errors(text in "[ -~]{0,40}") {
        let parsed = parse_config(&format!("#{text}\n"));
        prop_assert!(parsed.rules.is_empty());
        prop_assert!(parsed.errors.is_empty());
    }

    #[test]
    fn blank_lines_are_ignored(spaces in "[ \t]{0,10}") {
        let parsed = parse_config(&format!("{spaces}\n"));
        prop_assert!(parsed.rules.is_empty());
        prop_assert!(parsed.errors.is_empty());
    }

    #[test]
    fn expansion_is_deterministic(name in "[a-z]{1,8}", ext in "[a-z]{1,3}") {
        let path = PathBuf::from(format!("/tmp/{name}.{ext}"));
        let template = "cp {file} {dirname}/backup{extname}";
        prop_assert_eq!(expand_command(template, &path), expand_command(template, &path));
    }

    #[test]
    fn templates_without_placeholders_pass_through(template in "[a-zA-Z0-9 _./-]{0,40}") {
        prop_assert_eq!(expand_command(&template, Path::new("/tmp/x.txt")), template);
    }

    #[test]
    fn unknown_placeholders_survive_expansion(name in "[a-z]{1,10}") {
        prop_assume!(!matches!(name.as_str(), "file" | "extname" | "basename" | "dirname"));
        let template = format!("echo {{{name}}}");
        prop_assert_eq!(expand_command(&template, Path::new("/tmp/x.txt")), template);
    }
}
