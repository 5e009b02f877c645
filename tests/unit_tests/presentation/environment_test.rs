use mailtriage::presentation::Environment;

#[test]
fn given_known_names_when_parsing_environment_then_maps_aliases() {
    assert_eq!("development".parse::<Environment>(), Ok(Environment::Local));
    assert_eq!(" PROD ".parse::<Environment>(), Ok(Environment::Prod));
    assert_eq!("production".parse::<Environment>(), Ok(Environment::Prod));
    assert_eq!("test".parse::<Environment>(), Ok(Environment::Test));
}

#[test]
fn given_unknown_name_when_parsing_environment_then_error_names_it() {
    let result = "staging".parse::<Environment>();

    assert!(result.unwrap_err().contains("staging"));
}

#[test]
fn given_environment_when_resolving_settings_file_then_uses_lowercase_name() {
    assert_eq!(Environment::Prod.settings_file(), "appsettings.prod");
    assert_eq!(Environment::default().to_string(), "local");
}
