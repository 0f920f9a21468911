//! End-to-end flattening of realistic filing payloads.

use indoc::indoc;
use insidermap::{flatten, DirectionTag, EntryKind, FlattenConfig, Row, TableKind};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn parse(text: &str) -> Value {
    serde_json::from_str(text).expect("fixture should be valid JSON")
}

/// A Form 4 with a sale, an option exercise, and a derivative holding.
fn form4() -> Value {
    parse(indoc! {r#"
        {
            "id": "b2c7f0f1",
            "accessionNo": "0001127602-24-009876",
            "schemaVersion": "X0508",
            "documentType": "4",
            "filedAt": "2024-03-01T18:30:12-05:00",
            "periodOfReport": "2024-02-28",
            "issuer": {"cik": "320193", "name": "Acme Corp", "tradingSymbol": "ACME"},
            "reportingOwner": {
                "cik": "0001214156",
                "name": "Doe Jane",
                "relationship": {"isDirector": false, "isOfficer": true, "officerTitle": "Senior Vice President"}
            },
            "nonDerivativeTable": {
                "transactions": [
                    {
                        "securityTitle": "Common Stock",
                        "transactionDate": "2024-02-28",
                        "coding": {"formType": "4", "code": "S"},
                        "amounts": {"shares": 1000, "pricePerShare": 180.5, "acquiredDisposedCode": "D"},
                        "postTransactionAmounts": {"sharesOwnedFollowingTransaction": 3000},
                        "ownershipNature": {"directOrIndirectOwnership": "D"}
                    },
                    {
                        "securityTitle": "Common Stock",
                        "transactionDate": "2024-02-27",
                        "coding": {"code": "M"},
                        "amounts": {"shares": 500, "pricePerShare": 0, "acquiredDisposedCode": "A"},
                        "postTransactionAmounts": {"sharesOwnedFollowingTransaction": 4000},
                        "ownershipNature": {"directOrIndirectOwnership": "D"}
                    }
                ]
            },
            "derivativeTable": {
                "holdings": [
                    {
                        "securityTitle": "Restricted Stock Units",
                        "underlyingSecurity": {"title": "Common Stock", "shares": 1200},
                        "postTransactionAmounts": {"sharesOwnedFollowingTransaction": 1200},
                        "ownershipNature": {"directOrIndirectOwnership": "D"}
                    }
                ]
            },
            "footnotes": [
                {"id": "F1", "text": "Effected pursuant to a Rule 10b5-1 trading plan adopted on November 3, 2023."}
            ]
        }
    "#})
}

fn kinds(rows: &[Row]) -> Vec<(TableKind, EntryKind)> {
    rows.iter().map(|row| (row.table, row.entry)).collect()
}

#[test]
fn test_form4_expands_every_leg() {
    let out = flatten(&form4());

    assert!(!out.empty_input_detected);
    assert_eq!(out.len(), 3);
    assert_eq!(out.stats.rows_emitted, 3);

    // Same filing/issuer/owner: ordered by transaction date ascending.
    let dates: Vec<_> = out
        .rows
        .iter()
        .map(|row| row.transaction_date.as_deref().unwrap_or_default())
        .collect();
    assert_eq!(dates, vec!["2024-02-27", "2024-02-28", "2024-02-28"]);

    let exercise = &out.rows[0];
    assert_eq!(exercise.code.as_deref(), Some("M"));
    // The acquired flag reaches the buy branch before the M code is checked.
    assert_eq!(exercise.direction, DirectionTag::BuyLike);
    assert_eq!(exercise.value_usd, 0.0);
    assert_eq!(exercise.stake_change, 500.0 / 4500.0);

    let sale = out
        .rows
        .iter()
        .find(|row| row.code.as_deref() == Some("S"))
        .expect("sale row");
    assert_eq!(sale.direction, DirectionTag::SellLike);
    assert_eq!(sale.value_usd, 180_500.0);
    assert_eq!(sale.stake_change, 0.25);
    assert_eq!(sale.issuer_symbol.as_deref(), Some("ACME"));
    assert_eq!(sale.owner_cik.as_deref(), Some("0001214156"));
    assert_eq!(sale.role_score, 0.70);
    assert_eq!(sale.is_officer, Some(true));
    assert!(sale.plan_10b5_1);
    assert!(!sale.weighted_average_price);
    assert_eq!(sale.underlying_title, None);

    let holding = out
        .rows
        .iter()
        .find(|row| row.entry == EntryKind::Holding)
        .expect("holding row");
    assert_eq!(holding.table, TableKind::Derivative);
    assert_eq!(holding.direction, DirectionTag::Holding);
    assert_eq!(holding.code, None);
    assert_eq!(holding.acquired_disposed, None);
    assert!(holding.price_per_share.is_nan());
    assert_eq!(holding.transaction_date.as_deref(), Some("2024-02-28"));
    assert_eq!(holding.shares, 1200.0);
    assert_eq!(holding.underlying_shares, Some(1200.0));
    assert_eq!(holding.value_usd, 0.0);
    assert_eq!(holding.stake_change, 0.5);
}

#[test]
fn test_one_transaction_and_one_derivative_holding_yield_two_rows() {
    let filing = json!({
        "reportingOwner": {"name": "Solo"},
        "nonDerivativeTable": {"transactions": [{"coding": {"code": "P"}}]},
        "derivativeTable": {"holdings": [{"amountOwned": 10}]}
    });

    let out = flatten(&filing);
    assert_eq!(
        kinds(&out.rows),
        vec![
            (TableKind::Direct, EntryKind::Transaction),
            (TableKind::Derivative, EntryKind::Holding),
        ]
    );
}

#[test]
fn test_bare_owner_matches_single_element_list() {
    let mut bare = form4();
    let owner = bare["reportingOwner"].clone();

    let mut listed = bare.clone();
    listed["reportingOwner"] = json!([owner.clone()]);

    let mut plural = bare.clone();
    plural
        .as_object_mut()
        .expect("filing is an object")
        .remove("reportingOwner");
    plural["reportingOwners"] = json!([owner]);

    let to_json = |value: &Value| serde_json::to_value(flatten(value).rows).unwrap();
    let expected = to_json(&bare);
    assert_eq!(to_json(&listed), expected);
    assert_eq!(to_json(&plural), expected);

    bare["reportingOwner"] = Value::Null;
    assert!(flatten(&bare).is_empty());
}

#[test]
fn test_multiple_owners_each_get_all_legs() {
    let mut filing = form4();
    filing["reportingOwners"] = json!([
        {"name": "Zed Holdings LLC", "relationship": {"isTenPercentOwner": true}},
        {"name": "Alpha Partners", "relationship": {"isDirector": "1"}}
    ]);

    let out = flatten(&filing);
    assert_eq!(out.len(), 6);
    assert_eq!(out.stats.owners_seen, 2);

    let owners: Vec<_> = out
        .rows
        .iter()
        .map(|row| (row.owner_name.clone().unwrap_or_default(), row.role_score))
        .collect();
    assert_eq!(owners[0], ("Alpha Partners".to_string(), 0.60));
    assert_eq!(owners[3], ("Zed Holdings LLC".to_string(), 0.70));
}

#[test]
fn test_envelope_and_list_forms_agree() {
    let filing = form4();
    let envelope = json!({"total": {"value": 1, "relation": "eq"}, "transactions": [filing.clone()]});
    let list = json!([filing.clone()]);

    let rows = |value: &Value| serde_json::to_value(flatten(value).rows).unwrap();
    assert_eq!(rows(&envelope), rows(&filing));
    assert_eq!(rows(&list), rows(&filing));
}

#[test]
fn test_empty_sequence_is_typed_empty_output() {
    let out = flatten(&json!([]));
    assert!(out.rows.is_empty());
    assert!(out.empty_input_detected);
    assert!(!out.shape_mismatch_suspected());
}

#[test]
fn test_wholly_empty_filing_yields_no_rows() {
    let out = flatten(&json!({}));
    assert!(out.rows.is_empty());
    assert!(out.empty_input_detected);
    assert!(out.shape_mismatch_suspected());
}

#[test]
fn test_scalar_input_is_zero_filings() {
    for input in [json!(null), json!(7), json!("filings"), json!(true)] {
        let out = flatten(&input);
        assert!(out.is_empty());
        assert_eq!(out.stats.filings_seen, 0);
    }
}

#[test]
fn test_malformed_filing_does_not_abort_batch() {
    let batch = json!([
        "garbage",
        {"reportingOwner": {"name": "A"}, "nonDerivativeTable": {"transactions": {"not": "a list"}}},
        form4()
    ]);
    let out = flatten(&batch);
    assert_eq!(out.len(), 3);
    assert_eq!(out.stats.filings_seen, 3);
    assert_eq!(out.stats.filings_skipped, 1);
}

#[test]
fn test_malformed_numbers_become_nan() {
    let filing = json!({
        "reportingOwner": {"name": "A"},
        "nonDerivativeTable": {"transactions": [{
            "coding": {"code": "S"},
            "amounts": {"shares": "about a thousand", "pricePerShare": {"value": 3}},
            "postTransactionAmounts": {"sharesOwnedFollowingTransaction": "2,000"}
        }]}
    });
    let row = &flatten(&filing).rows[0];
    assert!(row.shares.is_nan());
    assert!(row.price_per_share.is_nan());
    assert!(row.post_shares.is_nan());
    assert_eq!(row.value_usd, 0.0);
    assert_eq!(row.stake_change, 0.0);
}

#[test]
fn test_later_filing_sorts_first() {
    let mut older = form4();
    older["filedAt"] = json!("2024-01-05T09:00:00-05:00");
    let newer = form4();

    let out = flatten(&json!([older, newer]));
    assert_eq!(out.len(), 6);
    assert!(out.rows[..3]
        .iter()
        .all(|row| row.filed_at.as_deref() == Some("2024-03-01T18:30:12-05:00")));
    assert!(out.rows[3..]
        .iter()
        .all(|row| row.filed_at.as_deref() == Some("2024-01-05T09:00:00-05:00")));
}

#[test]
fn test_date_only_filed_at_orders_by_date() {
    let mut older = form4();
    older["filedAt"] = json!("2020-01-01T00:00:00Z");
    let mut newer = form4();
    newer["filedAt"] = json!("2024-12-01");

    let out = flatten(&json!([older, newer]));
    let filed: Vec<_> = out
        .rows
        .iter()
        .map(|row| row.filed_at.as_deref().unwrap_or_default())
        .collect();
    assert_eq!(
        filed,
        vec![
            "2024-12-01",
            "2024-12-01",
            "2024-12-01",
            "2020-01-01T00:00:00Z",
            "2020-01-01T00:00:00Z",
            "2020-01-01T00:00:00Z",
        ]
    );
}

#[test]
fn test_string_plural_owner_key_uses_singular_owner() {
    let mut filing = form4();
    filing["reportingOwners"] = json!("see Exhibit 99");
    let out = flatten(&filing);
    assert_eq!(out.len(), 3);
    assert!(out
        .rows
        .iter()
        .all(|row| row.owner_name.as_deref() == Some("Doe Jane")));
}

#[test]
fn test_ordering_ignores_input_order() {
    let mut a = form4();
    a["issuer"]["tradingSymbol"] = json!("BBB");
    let mut b = form4();
    b["filedAt"] = json!("2023-06-01T12:00:00Z");
    let c = form4();

    let forward = serde_json::to_value(flatten(&json!([a.clone(), b.clone(), c.clone()])).rows).unwrap();
    let backward = serde_json::to_value(flatten(&json!([c, b, a])).rows).unwrap();
    assert_eq!(forward, backward);
}

#[test]
fn test_custom_role_config_applies() {
    let config: FlattenConfig = toml::from_str(indoc! {r#"
        [roles]
        rules = [{ pattern = "senior vice president", score = 0.95 }]
    "#})
    .unwrap();

    let out = insidermap::flatten_with_config(&form4(), &config);
    assert!(out.rows.iter().all(|row| row.role_score == 0.95));
}
