// ============================================================================
// TELÉFONO - Formato progresivo (DD) DDDDD-DDDD / (DD) DDDD-DDDD
// ============================================================================

/// Formatear lo que el usuario escribió en el campo de teléfono.
///
/// Se descartan todos los caracteres que no son dígitos y se vuelve a poner
/// la puntuación según la cantidad de dígitos:
/// - 11 o más: `(DD) DDDDD-DDDD` y el resto pegado al final
/// - 7 a 10: `(DD) DDDD-` más hasta 4 dígitos
/// - 3 a 6: `(DD) ` más el resto
/// - menos de 3: solo los dígitos
pub fn format_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    // Solo hay dígitos ASCII, así que los índices de byte son índices de dígito
    let len = digits.len();

    if len >= 11 {
        format!(
            "({}) {}-{}{}",
            &digits[..2],
            &digits[2..7],
            &digits[7..11],
            &digits[11..]
        )
    } else if len >= 7 {
        format!("({}) {}-{}", &digits[..2], &digits[2..6], &digits[6..])
    } else if len >= 3 {
        format!("({}) {}", &digits[..2], &digits[2..])
    } else {
        digits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_mobile_number() {
        assert_eq!(format_phone("11987654321"), "(11) 98765-4321");
    }

    #[test]
    fn formats_partial_input() {
        assert_eq!(format_phone("119876"), "(11) 9876");
        assert_eq!(format_phone("119"), "(11) 9");
        assert_eq!(format_phone("1198765"), "(11) 9876-5");
    }

    #[test]
    fn formats_landline_number() {
        assert_eq!(format_phone("1134567890"), "(11) 3456-7890");
    }

    #[test]
    fn short_input_is_left_as_digits() {
        assert_eq!(format_phone("1"), "1");
        assert_eq!(format_phone("1a1"), "11");
        assert_eq!(format_phone(""), "");
    }

    #[test]
    fn reformatting_formatted_value_is_stable() {
        let once = format_phone("(11) 98765-4321");
        assert_eq!(once, "(11) 98765-4321");
        // El usuario sigue tecleando sobre un valor ya formateado
        assert_eq!(format_phone("(11) 9876-5"), "(11) 9876-5");
        assert_eq!(format_phone("(11) 9876-54"), "(11) 9876-54");
    }

    #[test]
    fn extra_digits_are_appended() {
        assert_eq!(format_phone("119876543210"), "(11) 98765-43210");
    }

    #[test]
    fn non_ascii_digits_are_dropped() {
        assert_eq!(format_phone("١١٩٨"), "");
    }
}
