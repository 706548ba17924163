// src/contact/emails.rs
//! Email bodies for the two transactional messages sent per submission
//!
//! HTML bodies interpolate user-controlled text only through `escape_html`;
//! the plain-text alternatives carry the raw values.

use super::models::StoredSubmission;
use crate::common::{escape_html, AppConfig};
use crate::services::OutgoingEmail;

/// Confirmation sent to the submitter's own address
pub fn confirmation_email(config: &AppConfig, stored: &StoredSubmission) -> OutgoingEmail {
    let text = format!(
        "Thanks for reaching out, {}!\n\
         We've received your message and will get back to you within 24 hours.\n\n\
         Your message:\n{}\n\n\
         Best regards,\nThe Nxg AI Labs Team",
        stored.name, stored.message
    );

    let html = format!(
        r#"<div style="font-family: sans-serif; max-width: 600px; margin: 0 auto;">
  <h1 style="color: #00BFFF;">Thanks for reaching out, {}!</h1>
  <p>We've received your message and will get back to you within 24 hours.</p>
  <div style="background: #f5f5f5; padding: 20px; border-radius: 8px; margin: 20px 0;">
    <h3 style="margin-top: 0;">Your message:</h3>
    <p>{}</p>
  </div>
  <p>Best regards,<br>The Nxg AI Labs Team</p>
</div>"#,
        escape_html(&stored.name),
        escape_html(&stored.message),
    );

    OutgoingEmail {
        from: config.from_address.clone(),
        to: vec![stored.email.clone()],
        subject: "Thanks for contacting Nxg AI Labs".to_string(),
        text: Some(text),
        html: Some(html),
        reply_to: None,
        bcc: None,
    }
}

/// Notification sent to the agency inbox, reply-to wired to the submitter
pub fn notification_email(config: &AppConfig, stored: &StoredSubmission) -> OutgoingEmail {
    let company_text = stored
        .company
        .as_deref()
        .map(|c| format!("Company: {}\n", c))
        .unwrap_or_default();

    let text = format!(
        "New Contact Form Submission\n\n\
         Name: {}\nEmail: {}\n{}Message:\n{}\n\n\
         Submission ID: {}",
        stored.name, stored.email, company_text, stored.message, stored.id
    );

    let company_html = stored
        .company
        .as_deref()
        .map(|c| format!("<p><strong>Company:</strong> {}</p>", escape_html(c)))
        .unwrap_or_default();

    let html = format!(
        r#"<div style="font-family: sans-serif; max-width: 600px; margin: 0 auto;">
  <h1 style="color: #00BFFF;">New Contact Form Submission</h1>
  <div style="background: #f5f5f5; padding: 20px; border-radius: 8px; margin: 20px 0;">
    <p><strong>Name:</strong> {}</p>
    <p><strong>Email:</strong> {}</p>
    {}
    <p><strong>Message:</strong></p>
    <p>{}</p>
  </div>
  <p><small>Submission ID: {}</small></p>
</div>"#,
        escape_html(&stored.name),
        escape_html(&stored.email),
        company_html,
        escape_html(&stored.message),
        stored.id,
    );

    OutgoingEmail {
        from: config.from_address.clone(),
        to: vec![config.agency_inbox.clone()],
        subject: format!(
            "New Contact Form Submission from {}",
            escape_html(&stored.name)
        ),
        text: Some(text),
        html: Some(html),
        // Raw address so the agency can reply straight to the client
        reply_to: Some(stored.email.clone()),
        bcc: None,
    }
}
