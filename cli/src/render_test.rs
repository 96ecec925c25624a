use super::*;

fn user() -> User {
    User {
        id: 1,
        username: "dev".to_owned(),
        email: "dev@example.com".to_owned(),
        company_name: None,
        phone_number: None,
        app_id: "app-1".to_owned(),
        token: "access-1".to_owned(),
        created_at: "2024-02-03T04:05:06Z".to_owned(),
    }
}

#[test]
fn render_dashboard_minimal_profile() {
    let expected = "Welcome, dev!\n\
                    \n  App ID:          app-1\
                    \n  Token:           access-1\
                    \n\
                    \nAccount Information\
                    \n  Email:           dev@example.com\
                    \n  Account Created: 2024-02-03\n";
    assert_eq!(render_dashboard(&user()), expected);
}

#[test]
fn render_dashboard_includes_optional_fields() {
    let u = User { company_name: Some("Acme".to_owned()), phone_number: Some("555-0100".to_owned()), ..user() };
    let out = render_dashboard(&u);
    assert!(out.contains("  Company Name:    Acme\n"));
    assert!(out.contains("  Phone Number:    555-0100\n"));
}

#[test]
fn render_dashboard_omits_absent_optional_fields() {
    let out = render_dashboard(&user());
    assert!(!out.contains("Company Name"));
    assert!(!out.contains("Phone Number"));
}
