use apilint::placeholders::{check_placeholders, extract_placeholders};
use apilint::Position;
use proptest::prelude::*;
use std::collections::HashSet;

fn arb_name() -> impl Strategy<Value = String> {
    "[a-z][a-zA-Z0-9]{0,8}"
}

/// A template mixing literal segments and placeholders; returns the names used.
fn arb_template() -> impl Strategy<Value = (String, Vec<String>)> {
    prop::collection::vec((any::<bool>(), arb_name()), 0..6).prop_map(|segments| {
        let mut template = String::new();
        let mut names = Vec::new();
        for (is_placeholder, name) in segments {
            template.push('/');
            if is_placeholder {
                template.push_str(&format!("{{{}}}", name));
                names.push(name);
            } else {
                template.push_str(&name);
            }
        }
        (template, names)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn extraction_finds_every_placeholder((template, names) in arb_template()) {
        let found: Vec<String> = extract_placeholders(&template).into_iter().map(String::from).collect();
        prop_assert_eq!(found, names);
    }

    // Declaring every placeholder silences the check.
    #[test]
    fn fully_declared_is_clean((template, names) in arb_template()) {
        let declared: HashSet<&str> = names.iter().map(String::as_str).collect();
        prop_assert!(check_placeholders(&template, &declared, &Position::at(1, 1)).is_empty());
    }

    // Dropping one declared name yields exactly one diagnostic per occurrence.
    #[test]
    fn dropping_a_name_reports_its_occurrences((template, names) in arb_template(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!names.is_empty());
        let dropped = names[pick.index(names.len())].clone();
        let declared: HashSet<&str> = names.iter().map(String::as_str).filter(|n| *n != dropped).collect();
        let diags = check_placeholders(&template, &declared, &Position::at(1, 1));
        let occurrences = names.iter().filter(|n| **n == dropped).count();
        prop_assert_eq!(diags.len(), occurrences);
        let expected = format!("PathTemplate contains undeclared path parameter '{}'", dropped);
        prop_assert!(diags.iter().all(|d| d.message == expected));
    }

    #[test]
    fn arbitrary_template_never_panics(s in "\\PC{0,40}") {
        let _ = check_placeholders(&s, &HashSet::new(), &Position::default());
    }
}
