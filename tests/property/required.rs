use apilint::schema::ENDPOINT_SCHEMA;
use apilint::*;
use proptest::prelude::*;
use std::collections::HashSet;

/// Strategy: an arbitrary subset of the endpoint schema, present as valid literals.
fn arb_present_fields() -> impl Strategy<Value = Vec<bool>> {
    prop::collection::vec(any::<bool>(), ENDPOINT_SCHEMA.required.len())
}

fn valid_literal(field: &str) -> &'static str {
    match field {
        "Name" => "ListRules",
        "Method" => "GET",
        "PathTemplate" => "/v1/rules",
        "Description" => "List rules",
        _ => "https://docs.example.com/api",
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    // The "is missing" count equals the number of absent schema fields,
    // each named exactly once.
    #[test]
    fn missing_count_matches_absent_fields(present in arb_present_fields()) {
        let mut record = Record::new(Position::at(1, 1));
        let mut absent = HashSet::new();
        for (field, keep) in ENDPOINT_SCHEMA.required.iter().zip(&present) {
            if *keep {
                record = record.with_field(*field, Value::string(valid_literal(field), Position::at(2, 1)));
            } else {
                absent.insert(format!("field '{}' is missing", field));
            }
        }

        let diags = validate_endpoint(&record, &Validators::default());
        let missing: Vec<&str> = diags
            .iter()
            .filter(|d| d.message.ends_with("is missing"))
            .map(|d| d.message.as_str())
            .collect();
        let unique: HashSet<String> = missing.iter().map(|m| m.to_string()).collect();
        prop_assert_eq!(missing.len(), absent.len());
        prop_assert_eq!(unique, absent);
        // Valid literals for the present fields: nothing else fires.
        prop_assert_eq!(diags.len(), missing.len());
    }

    // Unknown extra fields never change the result.
    #[test]
    fn unknown_fields_are_inert(extra in "[A-Z][a-zA-Z]{2,10}", text in "\\PC{0,20}") {
        prop_assume!(!ENDPOINT_SCHEMA.required.contains(&extra.as_str()));
        prop_assume!(extra != "PathParams" && extra != "QueryParams");
        let base = Record::new(Position::at(1, 1));
        let with_extra = base.clone().with_field(extra, Value::string(text, Position::at(2, 1)));
        let validators = Validators::default();
        prop_assert_eq!(
            validate_endpoint(&base, &validators),
            validate_endpoint(&with_extra, &validators)
        );
    }
}
