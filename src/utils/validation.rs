// ============================================================================
// VALIDACIÓN - Campos obligatorios
// ============================================================================

/// Campo obligatorio de un formulario.
/// La vista lo implementa para inputs/selects reales; los tests con fakes.
pub trait RequiredField {
    fn value(&self) -> String;
    fn mark_invalid(&self);
    fn clear_mark(&self);
}

/// Valida todos los campos: los vacíos (tras trim) se marcan con error y los
/// demás se limpian. Devuelve `true` solo si ninguno está vacío.
/// No se corta en el primer error: todos los campos reciben su marca.
pub fn validate_required<F: RequiredField>(fields: &[F]) -> bool {
    let mut is_valid = true;

    for field in fields {
        if field.value().trim().is_empty() {
            field.mark_invalid();
            is_valid = false;
        } else {
            field.clear_mark();
        }
    }

    is_valid
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct FakeField {
        value: &'static str,
        marked: Cell<bool>,
    }

    impl FakeField {
        fn new(value: &'static str) -> Self {
            Self { value, marked: Cell::new(false) }
        }
    }

    impl RequiredField for FakeField {
        fn value(&self) -> String {
            self.value.to_string()
        }
        fn mark_invalid(&self) {
            self.marked.set(true);
        }
        fn clear_mark(&self) {
            self.marked.set(false);
        }
    }

    #[test]
    fn marks_only_the_empty_field() {
        let fields = [FakeField::new(""), FakeField::new("Maria")];
        assert!(!validate_required(&fields));
        assert!(fields[0].marked.get());
        assert!(!fields[1].marked.get());
    }

    #[test]
    fn whitespace_counts_as_empty() {
        let fields = [FakeField::new("  \t ")];
        assert!(!validate_required(&fields));
        assert!(fields[0].marked.get());
    }

    #[test]
    fn clears_previous_error_once_filled() {
        let field = FakeField::new("ok");
        field.marked.set(true);
        assert!(validate_required(std::slice::from_ref(&field)));
        assert!(!field.marked.get());
    }

    #[test]
    fn form_without_required_fields_is_valid() {
        let fields: [FakeField; 0] = [];
        assert!(validate_required(&fields));
    }
}
