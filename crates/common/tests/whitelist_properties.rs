//! Property tests for the table whitelist.

use common::TableName;
use proptest::prelude::*;

const ALLOWED: [&str; 3] = ["Client", "Product", "Orders"];

proptest! {
    #[test]
    fn arbitrary_names_outside_the_whitelist_are_rejected(name in ".*") {
        prop_assume!(!ALLOWED.contains(&name.as_str()));
        let rejected = TableName::validate(&name).unwrap_err();
        prop_assert_eq!(rejected.name, name);
    }

    #[test]
    fn sql_shaped_suffixes_are_rejected(
        table in prop::sample::select(ALLOWED.to_vec()),
        suffix in "[ ;'\"-]{1,4}[A-Za-z0-9 =]{0,12}",
    ) {
        let name = format!("{table}{suffix}");
        prop_assert!(TableName::validate(&name).is_err());
    }

    #[test]
    fn whitelisted_names_round_trip(table in prop::sample::select(ALLOWED.to_vec())) {
        let validated = TableName::validate(table).unwrap();
        prop_assert_eq!(validated.as_str(), table);
    }
}
