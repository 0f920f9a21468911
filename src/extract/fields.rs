//! Candidate path lists for each logical field, most specific first.
//!
//! Each list names every location a producer version has been seen to use.
//! Supporting a new payload shape means appending a path here.

// Filing
pub const FILING_ID: &[&str] = &["id"];
pub const ACCESSION_NO: &[&str] = &["accessionNo"];
pub const SCHEMA_VERSION: &[&str] = &["schemaVersion"];
pub const DOCUMENT_TYPE: &[&str] = &["documentType"];
pub const FILED_AT: &[&str] = &["filedAt"];
pub const PERIOD_OF_REPORT: &[&str] = &["periodOfReport"];
pub const ISSUER_CIK: &[&str] = &["issuer.cik"];
pub const ISSUER_NAME: &[&str] = &["issuer.name"];
pub const ISSUER_SYMBOL: &[&str] = &["issuer.tradingSymbol"];
pub const FOOTNOTES: &[&str] = &["footnotes"];
pub const FOOTNOTE_TEXT: &[&str] = &["text"];

// Owners: the plural list first, then the single-owner form.
pub const OWNERS: &[&str] = &["reportingOwners", "reportingOwner"];
pub const OWNER_CIK: &[&str] = &["cik"];
pub const OWNER_NAME: &[&str] = &["name"];
pub const RELATIONSHIP: &[&str] = &["relationship"];
pub const OFFICER_TITLE: &[&str] = &["officerTitle"];
pub const IS_DIRECTOR: &[&str] = &["isDirector"];
pub const IS_OFFICER: &[&str] = &["isOfficer"];
pub const IS_TEN_PERCENT_OWNER: &[&str] = &["isTenPercentOwner"];

// Legs
pub const SECURITY_TITLE: &[&str] = &["securityTitle"];
pub const TRANSACTION_DATE: &[&str] = &["transactionDate"];
pub const TRANSACTION_CODE: &[&str] = &[
    "coding.code",
    "transactionCode.code",
    "transactionCoding.transactionCode",
];
pub const ACQUIRED_DISPOSED: &[&str] = &[
    "amounts.acquiredDisposedCode",
    "transactionAcquiredDisposedCode",
];
pub const SHARES: &[&str] = &["amounts.shares"];
pub const PRICE_PER_SHARE: &[&str] = &["amounts.pricePerShare"];
pub const POST_SHARES: &[&str] = &[
    "postTransactionAmounts.sharesOwnedFollowingTransaction",
    "postTransactionAmounts.sharesOwnedFollowing",
];
pub const DIRECT_OR_INDIRECT: &[&str] = &["ownershipNature.directOrIndirectOwnership"];
pub const UNDERLYING_TITLE: &[&str] = &["underlyingSecurity.title"];
pub const UNDERLYING_SHARES: &[&str] = &["underlyingSecurity.shares"];

/// Post-holding quantity as named across producer versions.
pub const HOLDING_SHARES: &[&str] = &[
    "postTransactionAmounts.sharesOwnedFollowingTransaction",
    "postTransactionAmounts.sharesOwnedFollowing",
    "amountOwnedFollowingTransaction",
    "amountOwnedFollowing",
    "amountOwned",
    "sharesOwnedFollowingTransaction",
    "shares",
];

// Envelope
pub const ENVELOPE_FILINGS: &str = "transactions";
