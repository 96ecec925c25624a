//! Plain-text dashboard rendering.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::fmt::Write as _;

use session::User;

const LABEL_WIDTH: usize = 17;

/// Terminal rendition of the account dashboard.
pub fn render_dashboard(user: &User) -> String {
    let mut out = format!("Welcome, {}!\n\n", user.username);
    push_row(&mut out, "App ID", &user.app_id);
    push_row(&mut out, "Token", &user.token);
    out.push_str("\nAccount Information\n");
    push_row(&mut out, "Email", &user.email);
    if let Some(company) = &user.company_name {
        push_row(&mut out, "Company Name", company);
    }
    if let Some(phone) = &user.phone_number {
        push_row(&mut out, "Phone Number", phone);
    }
    push_row(&mut out, "Account Created", user.created_on());
    out
}

fn push_row(out: &mut String, label: &str, value: &str) {
    let label = format!("{label}:");
    let _ = writeln!(out, "  {label:<LABEL_WIDTH$}{value}");
}
