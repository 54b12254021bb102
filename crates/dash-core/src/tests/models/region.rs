use crate::Region;

use std::str::FromStr;

#[test]
fn test_region_code_round_trip() {
    for region in Region::ALL {
        assert_eq!(Region::from_str(region.code()).unwrap(), region);
    }
}

#[test]
fn test_region_from_str_is_case_insensitive() {
    assert_eq!(Region::from_str("eu").unwrap(), Region::Europe);
    assert_eq!(Region::from_str(" oc ").unwrap(), Region::Oceania);
}

#[test]
fn test_region_from_str_empty_is_unset() {
    assert_eq!(Region::from_str("").unwrap(), Region::Unset);
}

#[test]
fn test_region_from_str_rejects_unknown() {
    let err = Region::from_str("North").unwrap_err();
    assert!(err.to_string().contains("North"));
    assert_eq!(err.field(), Some("region"));
}

#[test]
fn test_region_serializes_as_code() {
    assert_eq!(serde_json::to_string(&Region::Asia).unwrap(), "\"AS\"");
    assert_eq!(serde_json::to_string(&Region::Unset).unwrap(), "\"\"");
}

#[test]
fn test_region_deserialize_unknown_degrades_to_unset() {
    let region: Region = serde_json::from_str("\"Central\"").unwrap();
    assert_eq!(region, Region::Unset);

    let region: Region = serde_json::from_str("null").unwrap();
    assert_eq!(region, Region::Unset);
}

#[test]
fn test_region_colors_only_for_assignable_regions() {
    assert!(Region::ALL.iter().all(|r| r.color().is_some()));
    assert!(Region::Unset.color().is_none());
    assert_eq!(Region::NorthAmerica.color(), Some("#FF6384"));
}
