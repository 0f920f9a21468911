use crate::core::types::DirectionTag;

/// Infer a leg's direction from its transaction code and acquired/disposed flag.
///
/// Holdings are always [`DirectionTag::Holding`]. Otherwise the first matching
/// branch wins, comparing case-insensitively:
///
/// 1. code `P` or flag `A` → buy-like
/// 2. code `S` or flag `D` → sell-like
/// 3. code `F` → tax withholding
/// 4. code `M` → option exercise / RSU conversion
/// 5. the raw code, else the raw flag, else [`DirectionTag::Other`]
///
/// A contradictory `P`/`D` leg is buy-like because the first branch matches
/// before the flag is consulted by the second.
pub fn classify_direction(
    code: Option<&str>,
    acquired_disposed: Option<&str>,
    is_holding: bool,
) -> DirectionTag {
    if is_holding {
        return DirectionTag::Holding;
    }

    let code = normalize(code);
    let flag = normalize(acquired_disposed);

    match (code.as_deref(), flag.as_deref()) {
        (Some("P"), _) | (_, Some("A")) => DirectionTag::BuyLike,
        (Some("S"), _) | (_, Some("D")) => DirectionTag::SellLike,
        (Some("F"), _) => DirectionTag::TaxWithhold,
        (Some("M"), _) => DirectionTag::OptionOrRsu,
        _ => code
            .or(flag)
            .map(DirectionTag::Code)
            .unwrap_or(DirectionTag::Other),
    }
}

fn normalize(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_ascii_uppercase)
}
