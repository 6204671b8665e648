//! EAN-13: twelve payload digits plus a modulo-10 check digit, 95 modules.

use folio_lookup_core::EAN13_PAYLOAD_DIGITS;

use crate::error::BarcodeError;

const L_CODES: [&str; 10] = [
    "0001101", "0011001", "0010011", "0111101", "0100011", "0110001", "0101111", "0111011",
    "0110111", "0001011",
];
const G_CODES: [&str; 10] = [
    "0100111", "0110011", "0011011", "0100001", "0011101", "0111001", "0000101", "0010001",
    "0001001", "0010111",
];
const R_CODES: [&str; 10] = [
    "1110010", "1100110", "1101100", "1000010", "1011100", "1001110", "1010000", "1000100",
    "1001000", "1110100",
];
/// Left-half parity per leading digit; `G` marks even parity.
const PARITY: [&str; 10] = [
    "LLLLLL", "LLGLGG", "LLGGLG", "LLGGGL", "LGLLGG", "LGGLLG", "LGGGLL", "LGLGLG", "LGLGGL",
    "LGGLGL",
];
const GUARD: &str = "101";
const CENTER: &str = "01010";

/// Validates and zero-pads a folio to the 12-digit payload.
pub fn pad_payload(folio: &str) -> Result<String, BarcodeError> {
    let folio = folio.trim();
    if folio.is_empty() {
        return Err(BarcodeError::Empty);
    }
    if !folio.bytes().all(|b| b.is_ascii_digit()) {
        return Err(BarcodeError::NonNumeric(folio.to_owned()));
    }
    if folio.len() > EAN13_PAYLOAD_DIGITS {
        return Err(BarcodeError::TooLong { len: folio.len(), max: EAN13_PAYLOAD_DIGITS });
    }
    Ok(format!("{folio:0>width$}", width = EAN13_PAYLOAD_DIGITS))
}

/// Check digit for a 12-digit payload: weights 1,3,1,3... from the left.
#[must_use]
pub fn check_digit(payload: &[u8; EAN13_PAYLOAD_DIGITS]) -> u8 {
    let sum: u32 = payload
        .iter()
        .enumerate()
        .map(|(i, d)| u32::from(*d) * if i % 2 == 0 { 1 } else { 3 })
        .sum();
    ((10 - sum % 10) % 10) as u8
}

/// Encodes a folio into its 13-digit text and module pattern.
pub fn encode(folio: &str) -> Result<(String, Vec<bool>), BarcodeError> {
    let payload = pad_payload(folio)?;
    let mut digits = [0u8; EAN13_PAYLOAD_DIGITS];
    for (slot, b) in digits.iter_mut().zip(payload.bytes()) {
        *slot = b - b'0';
    }
    let check = check_digit(&digits);

    let mut all = digits.to_vec();
    all.push(check);

    let parity = PARITY[usize::from(all[0])];
    let mut pattern = String::with_capacity(95);
    pattern.push_str(GUARD);
    for (digit, side) in all[1..7].iter().zip(parity.chars()) {
        let table = if side == 'G' { &G_CODES } else { &L_CODES };
        pattern.push_str(table[usize::from(*digit)]);
    }
    pattern.push_str(CENTER);
    for digit in &all[7..13] {
        pattern.push_str(R_CODES[usize::from(*digit)]);
    }
    pattern.push_str(GUARD);

    let text = all.iter().map(|d| char::from(b'0' + d)).collect();
    Ok((text, pattern.chars().map(|c| c == '1').collect()))
}
