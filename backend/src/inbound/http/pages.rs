//! Minimal server-rendered pages.
//!
//! The marketplace front end re-displays forms with a message rather than
//! returning API errors, so each page is a small HTML document built from
//! exactly the parameters the handlers decide on. There is deliberately no
//! template engine here; the pages exist to carry the control flow.

use actix_web::HttpResponse;
use actix_web::http::header::ContentType;

use crate::domain::{Ticket, User};

/// Minimal HTML escaping for interpolated values.
fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn document(title: &str, body: &str) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(format!(
            "<!DOCTYPE html>\n<html>\n<head><title>{}</title></head>\n<body>\n{body}\n</body>\n</html>\n",
            escape(title)
        ))
}

fn ticket_list(tickets: &[Ticket]) -> String {
    let items: String = tickets
        .iter()
        .map(|ticket| {
            format!(
                "<li class=\"ticket\">{} - {} x{}</li>\n",
                escape(&ticket.name),
                ticket.price,
                ticket.quantity
            )
        })
        .collect();
    format!("<ul id=\"tickets\">\n{items}</ul>")
}

/// Registration form with a status or error message.
pub fn register_page(message: &str) -> HttpResponse {
    document(
        "Register",
        &format!(
            "<h1>Register</h1>\n<p id=\"message\">{}</p>\n\
             <form method=\"post\" action=\"/register\">\n\
             <input name=\"email\" id=\"email\">\n\
             <input name=\"name\" id=\"name\">\n\
             <input name=\"password\" id=\"password\" type=\"password\">\n\
             <input name=\"password2\" id=\"password2\" type=\"password\">\n\
             <button type=\"submit\" id=\"btn-submit\">Register</button>\n\
             </form>",
            escape(message)
        ),
    )
}

/// Login form with a status or error message.
pub fn login_page(message: &str) -> HttpResponse {
    document(
        "Log in",
        &format!(
            "<h1>Log in</h1>\n<p id=\"message\">{}</p>\n\
             <form method=\"post\" action=\"/login\">\n\
             <input name=\"email\" id=\"email\">\n\
             <input name=\"password\" id=\"password\" type=\"password\">\n\
             <button type=\"submit\" id=\"btn-submit\">Log in</button>\n\
             </form>",
            escape(message)
        ),
    )
}

/// Profile page listing the current tickets.
pub fn profile_page(user: &User, tickets: &[Ticket]) -> HttpResponse {
    document(
        "Profile",
        &format!(
            "<h1 id=\"welcome\">Hi {}!</h1>\n{}\n<a href=\"/buy\">Buy</a> <a href=\"/sell\">Sell</a> <a href=\"/logout\">Log out</a>",
            escape(user.name().as_str()),
            ticket_list(tickets)
        ),
    )
}

/// Buy page listing the current tickets.
pub fn buy_page(user: &User, tickets: &[Ticket]) -> HttpResponse {
    document(
        "Buy tickets",
        &format!(
            "<h1>Buy tickets</h1>\n<p id=\"buyer\">{}</p>\n{}",
            escape(user.name().as_str()),
            ticket_list(tickets)
        ),
    )
}

/// Sell page listing the current tickets.
pub fn sell_page(user: &User, tickets: &[Ticket]) -> HttpResponse {
    document(
        "Sell tickets",
        &format!(
            "<h1>Sell tickets</h1>\n<p id=\"seller\">{}</p>\n{}",
            escape(user.name().as_str()),
            ticket_list(tickets)
        ),
    )
}
