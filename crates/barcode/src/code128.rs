//! Code 128 with automatic switching between code sets B and C.
//!
//! Printable ASCII goes through set B; runs of four or more digits are
//! packed two per symbol in set C.

use crate::error::BarcodeError;

/// Bar/space widths for symbol values 0..=106 (106 is the stop symbol).
const PATTERNS: [&str; 107] = [
    "212222", "222122", "222221", "121223", "121322", "131222", "122213", "122312", "132212",
    "221213", "221312", "231212", "112232", "122132", "122231", "113222", "123122", "123221",
    "223211", "221132", "221231", "213212", "223112", "312131", "311222", "321122", "321221",
    "312212", "322112", "322211", "212123", "212321", "232121", "111323", "131123", "131321",
    "112313", "132113", "132311", "211313", "231113", "231311", "112133", "112331", "132131",
    "113123", "113321", "133121", "313121", "211331", "231131", "213113", "213311", "213131",
    "311123", "311321", "331121", "312113", "312311", "332111", "314111", "221411", "431111",
    "111224", "111422", "121124", "121421", "141122", "141221", "112214", "112412", "122114",
    "122411", "142112", "142211", "241211", "221114", "413111", "241112", "134111", "111242",
    "121142", "121241", "114212", "124112", "124211", "411212", "421112", "421211", "212141",
    "214121", "412121", "111143", "111341", "131141", "114113", "114311", "411113", "411311",
    "113141", "114131", "311141", "411131", "211412", "211214", "211232", "2331112",
];

const CODE_C: u8 = 99;
const CODE_B: u8 = 100;
const START_B: u8 = 104;
const START_C: u8 = 105;
const STOP: u8 = 106;
const MIN_DIGIT_RUN: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CodeSet {
    B,
    C,
}

fn digit_run(bytes: &[u8], from: usize) -> usize {
    bytes[from..].iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Symbol values for `data`, from start symbol through checksum (stop excluded).
pub fn symbol_values(data: &str) -> Result<Vec<u8>, BarcodeError> {
    if data.is_empty() {
        return Err(BarcodeError::Empty);
    }
    if let Some((position, ch)) = data.chars().enumerate().find(|(_, c)| !(' '..='~').contains(c))
    {
        return Err(BarcodeError::UnsupportedChar { ch, position });
    }

    let bytes = data.as_bytes();
    let leading = digit_run(bytes, 0);
    let mut set = if leading >= MIN_DIGIT_RUN && leading % 2 == 0 { CodeSet::C } else { CodeSet::B };
    let mut values = vec![if set == CodeSet::C { START_C } else { START_B }];

    let mut i = 0;
    while i < bytes.len() {
        match set {
            CodeSet::B => {
                let run = digit_run(bytes, i);
                if run >= MIN_DIGIT_RUN {
                    if run % 2 == 1 {
                        values.push(bytes[i] - b' ');
                        i += 1;
                    }
                    values.push(CODE_C);
                    set = CodeSet::C;
                } else {
                    values.push(bytes[i] - b' ');
                    i += 1;
                }
            },
            CodeSet::C => {
                if digit_run(bytes, i) >= 2 {
                    values.push((bytes[i] - b'0') * 10 + (bytes[i + 1] - b'0'));
                    i += 2;
                } else {
                    values.push(CODE_B);
                    set = CodeSet::B;
                }
            },
        }
    }

    values.push(checksum(&values));
    Ok(values)
}

/// Modulo-103 checksum: start value plus each data value weighted by position.
#[must_use]
pub fn checksum(values: &[u8]) -> u8 {
    let sum: usize =
        values.iter().enumerate().map(|(i, v)| usize::from(*v) * i.max(1)).sum();
    (sum % 103) as u8
}

/// Encodes `data` into its module pattern, stop symbol and termination bar included.
pub fn encode(data: &str) -> Result<(String, Vec<bool>), BarcodeError> {
    let mut values = symbol_values(data)?;
    values.push(STOP);

    let mut modules = Vec::with_capacity(values.len() * 11 + 2);
    for value in values {
        for (k, width) in PATTERNS[usize::from(value)].bytes().enumerate() {
            let bar = k % 2 == 0;
            modules.extend(std::iter::repeat_n(bar, usize::from(width - b'0')));
        }
    }
    Ok((data.to_owned(), modules))
}
