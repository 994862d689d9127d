use passforge::charset::UPPERCASE;
use passforge::form::*;
use passforge::generate::GenerateError;
use passforge::validate::LengthError;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pristine_form_gates_submit() {
        let state = FormState::new();
        assert!(!state.can_submit());
        assert!(!state.generated());
        assert!(state.classes.none_selected());
        assert_eq!(state.length_error, Some(LengthError::Required));
    }

    #[test]
    fn test_edit_validates_each_keystroke() {
        let state = FormState::new().apply(Action::EditLength("8".to_string()));
        assert!(state.can_submit());
        assert_eq!(state.length_error, None);

        let state = state.apply(Action::EditLength("20".to_string()));
        assert!(!state.can_submit());
        assert_eq!(state.length_error, Some(LengthError::AboveMaximum));

        let state = state.apply(Action::EditLength("2".to_string()));
        assert_eq!(state.length_error, Some(LengthError::BelowMinimum));

        let state = state.apply(Action::EditLength(String::new()));
        assert_eq!(state.length_error, Some(LengthError::Required));
    }

    #[test]
    fn test_toggle_is_involutive() {
        let state = FormState::new().apply(Action::Toggle(CharacterClass::Digits));
        assert!(state.classes.digits);
        let state = state.apply(Action::Toggle(CharacterClass::Digits));
        assert!(!state.classes.digits);
    }

    #[test]
    fn test_submit_generates_password() {
        let state = FormState::new()
            .apply(Action::EditLength("8".to_string()))
            .apply(Action::Toggle(CharacterClass::Uppercase))
            .apply(Action::Submit);
        assert!(state.generated());
        let password = state.password.as_deref().unwrap();
        assert_eq!(password.chars().count(), 8);
        assert!(password.chars().all(|c| UPPERCASE.contains(c)));
        assert_eq!(state.generate_error, None);
    }

    #[test]
    fn test_submit_without_classes_reports_empty_alphabet() {
        let state = FormState::new()
            .apply(Action::EditLength("6".to_string()))
            .apply(Action::Submit);
        assert!(!state.generated());
        assert_eq!(state.generate_error, Some(GenerateError::EmptyAlphabet));
    }

    #[test]
    fn test_successful_submit_clears_previous_error() {
        let state = FormState::new()
            .apply(Action::EditLength("6".to_string()))
            .apply(Action::Submit);
        assert_eq!(state.generate_error, Some(GenerateError::EmptyAlphabet));

        let state = state
            .apply(Action::Toggle(CharacterClass::Lowercase))
            .apply(Action::Submit);
        assert!(state.generated());
        assert_eq!(state.generate_error, None);
    }

    #[test]
    fn test_submit_with_invalid_length_clears_password() {
        let state = FormState::new()
            .apply(Action::EditLength("8".to_string()))
            .apply(Action::Toggle(CharacterClass::Digits))
            .apply(Action::Submit);
        assert!(state.generated());

        let state = state
            .apply(Action::EditLength("99".to_string()))
            .apply(Action::Submit);
        assert!(!state.generated());
        assert_eq!(state.length_error, Some(LengthError::AboveMaximum));
    }

    #[test]
    fn test_reset_restores_pristine_state() {
        let state = FormState::new()
            .apply(Action::EditLength("12".to_string()))
            .apply(Action::Toggle(CharacterClass::Uppercase))
            .apply(Action::Toggle(CharacterClass::Symbols))
            .apply(Action::Submit);
        assert!(state.generated());

        let state = state.apply(Action::Reset);
        assert_eq!(state, FormState::new());
        assert!(state.length_input.is_empty());
        assert!(state.classes.none_selected());
        assert!(!state.generated());
    }
}
