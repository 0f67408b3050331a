//! Markup for user cards and loading skeletons.
//!
//! Everything here is a pure function of its input. Visible text goes through
//! [`escape_html`]; `href` values go through [`encode_uri`] instead.

use crate::types::{Address, User};

pub const ADDRESS_PLACEHOLDER: &str = "N/A";
pub const COMPANY_PLACEHOLDER: &str = "—";

/// Escape the five HTML-reserved characters.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Percent-encode a string the way JavaScript's `encodeURI` does: URI
/// structure characters and unreserved marks pass through, everything else
/// is encoded as UTF-8 bytes.
pub fn encode_uri(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c.is_ascii_alphanumeric() || ";,/?:@&=+$-_.!~*'()#".contains(c) {
            out.push(c);
        } else {
            let mut buf = [0u8; 4];
            for byte in c.encode_utf8(&mut buf).bytes() {
                out.push_str(&format!("%{byte:02X}"));
            }
        }
    }
    out
}

/// `"{suite}, {street}, {city} — {zipcode}"`, or the placeholder when absent.
pub fn format_address(address: Option<&Address>) -> String {
    match address {
        Some(a) => format!("{}, {}, {} — {}", a.suite, a.street, a.city, a.zipcode),
        None => ADDRESS_PLACEHOLDER.to_string(),
    }
}

pub fn render_card(user: &User) -> String {
    let address = format_address(user.address.as_ref());
    let company = match &user.company {
        Some(c) => escape_html(&c.name),
        None => COMPANY_PLACEHOLDER.to_string(),
    };

    format!(
        r#"
      <article class="card">
        <h2>{name}</h2>
        <div class="row">👤 <strong>{username}</strong></div>
        <div class="row">✉️ <a href="mailto:{email_href}">{email}</a></div>
        <div class="row">📍 {address}</div>
        <div class="row">🌐 <a href="http://{website_href}" target="_blank" rel="noopener">{website}</a></div>
        <div class="row">🏢 {company}</div>
      </article>
    "#,
        name = escape_html(&user.name),
        username = escape_html(&user.username),
        email_href = encode_uri(&user.email),
        email = escape_html(&user.email),
        address = escape_html(&address),
        website_href = encode_uri(&user.website),
        website = escape_html(&user.website),
    )
}

/// One card per user, concatenated.
pub fn render_users(users: &[User]) -> String {
    users.iter().map(render_card).collect()
}

pub fn render_skeleton(count: usize) -> String {
    r#"<div class="skeleton"></div>"#.repeat(count)
}
