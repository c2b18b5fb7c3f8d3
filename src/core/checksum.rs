use crate::utils::error::{PnrError, Result};

/// Luhn-style check digit over the first nine of the last10 digits:
/// weight 2 at even positions, 1 at odd, two-digit products folded by
/// subtracting 9.
pub fn check_digit(first_nine: &[u8]) -> u8 {
    let sum: u32 = first_nine
        .iter()
        .take(9)
        .enumerate()
        .map(|(i, &digit)| {
            let product = u32::from(digit) * if i % 2 == 0 { 2 } else { 1 };
            if product > 9 {
                product - 9
            } else {
                product
            }
        })
        .sum();

    ((10 - (sum % 10)) % 10) as u8
}

/// Compares the computed check digit against position 9 of last10.
pub fn verify(last10: &[u8]) -> Result<()> {
    let expected = check_digit(&last10[..9]);
    let found = last10[9];
    if expected == found {
        Ok(())
    } else {
        Err(PnrError::Checksum { expected, found })
    }
}
