use apilint::naming::is_api_type_name;
use apilint::{Position, check_type_name};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prefixed_names_with_upper_suffix_pass(
        prefix in "(apiResponse|apiRequest|Model|Params)",
        suffix in "[A-Z][A-Za-z0-9]{0,12}",
    ) {
        let name = format!("{}{}", prefix, suffix);
        prop_assert!(is_api_type_name(&name));
        prop_assert!(check_type_name(&name, true, true, &Position::default()).is_empty());
    }

    #[test]
    fn lower_suffix_fails(
        prefix in "(apiResponse|apiRequest|Model|Params)",
        suffix in "[a-z][A-Za-z0-9]{0,12}",
    ) {
        let name = format!("{}{}", prefix, suffix);
        prop_assert!(!is_api_type_name(&name));
    }

    // Outside the namespace or for non-structs, nothing is ever reported.
    #[test]
    fn filters_always_win(name in "\\PC{0,20}", is_struct in any::<bool>()) {
        prop_assert!(check_type_name(&name, is_struct, false, &Position::default()).is_empty());
        prop_assert!(check_type_name(&name, false, true, &Position::default()).is_empty());
    }
}
