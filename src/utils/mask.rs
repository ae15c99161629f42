/// Mask the four-digit sequence number of an ID number for display and logs,
/// keeping the birth-date prefix and trailing digits readable.
pub fn mask_id_number(id_number: &str) -> String {
    if id_number.len() < 10 || !id_number.is_char_boundary(6) || !id_number.is_char_boundary(10) {
        return id_number.to_string();
    }

    format!("{}****{}", &id_number[..6], &id_number[10..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masks_sequence_digits() {
        assert_eq!(mask_id_number("8001015009083"), "800101****083");
    }

    #[test]
    fn test_short_values_pass_through() {
        assert_eq!(mask_id_number("123"), "123");
        assert_eq!(mask_id_number(""), "");
    }
}
