/**
 * Email Templates
 *
 * Notification payloads and the plain-text/HTML bodies built from them.
 * Each template returns a `(plain, html)` pair; the mailer sends both as a
 * multipart alternative so text-only clients stay readable.
 */

use chrono::{Datelike, Utc};

/// Data carried by the signup notification emails
#[derive(Debug, Clone)]
pub struct SignupNotification {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub university: String,
    pub major: String,
}

/// Data carried by the contact form notification emails
#[derive(Debug, Clone)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Subject for the signup confirmation sent to the student
pub const SIGNUP_CONFIRMATION_SUBJECT: &str =
    "Welcome to Global Internships - Your Journey Begins!";

/// Subject for the signup alert sent to the admin address
pub fn signup_alert_subject(signup: &SignupNotification) -> String {
    format!(
        "New Student Signup: {} {}",
        signup.first_name, signup.last_name
    )
}

/// Subject for the contact confirmation sent back to the sender
pub fn contact_confirmation_subject(contact: &ContactMessage) -> String {
    format!("We've Received Your Message: {}", contact.subject)
}

/// Subject for the contact alert sent to the admin address
pub fn contact_alert_subject(contact: &ContactMessage) -> String {
    format!("New Contact Form: {}", contact.subject)
}

/// Confirmation email body for a new signup
pub fn signup_confirmation_body(signup: &SignupNotification, site_url: &str) -> (String, String) {
    let plain = format!(
        "Welcome, {first}!\n\n\
         Thank you for signing up with Global Internships. We're thrilled that you're taking \
         the first step toward an incredible international experience!\n\n\
         Our team has received your application and will review it carefully. We'll be in touch \
         soon with personalized internship opportunities in London and New York that match your \
         interests, major, and career goals.\n\n\
         What happens next?\n\
         - Our team will review your profile and preferences\n\
         - We'll match you with suitable internship opportunities\n\
         - You'll receive personalized recommendations within 5-7 business days\n\
         - We'll guide you through the application process\n\n\
         If you have any questions in the meantime, reach out through our contact form at \
         {site}/contact.\n\n\
         Best of luck on your journey!\n\n\
         Warm regards,\n\
         Kate\n\
         Internship Coordinator\n\
         Global Internships\n\n\
         Global Internships (c) {year}\n\
         You're receiving this email because you signed up at global-internships.com\n",
        first = signup.first_name,
        site = site_url,
        year = Utc::now().year(),
    );

    let html = format!(
        r#"<html><body style="font-family: sans-serif; color: #333;">
<h2>Welcome, {first}!</h2>
<p>Thank you for signing up with Global Internships. We're thrilled that you're taking the first step toward an incredible international experience!</p>
<p>Our team has received your application and will review it carefully. We'll be in touch soon with personalized internship opportunities in London and New York that match your interests, major, and career goals.</p>
<div style="background-color: #f8f9fa; border-left: 4px solid #2563eb; padding: 16px;">
<p><strong>What happens next?</strong></p>
<ul>
<li>Our team will review your profile and preferences</li>
<li>We'll match you with suitable internship opportunities</li>
<li>You'll receive personalized recommendations within 5-7 business days</li>
<li>We'll guide you through the application process</li>
</ul>
</div>
<p>If you have any questions in the meantime, feel free to reach out through our <a href="{site}/contact">contact form</a>.</p>
<p>Best of luck on your journey!</p>
<p>Warm regards,<br><strong>Kate</strong><br>Internship Coordinator<br>Global Internships</p>
<p style="color: #999; font-size: 12px;">Global Internships &copy; {year}<br>You're receiving this email because you signed up at global-internships.com</p>
</body></html>"#,
        first = signup.first_name,
        site = site_url,
        year = Utc::now().year(),
    );

    (plain, html)
}

/// Alert email body for a new signup, sent to the admin address
pub fn signup_alert_body(signup: &SignupNotification) -> (String, String) {
    let plain = format!(
        "New Student Signup\n\n\
         A new student has completed the signup form:\n\n\
         Name: {first} {last}\n\
         Email: {email}\n\
         University: {university}\n\
         Major: {major}\n\n\
         Please review this application in the database.\n",
        first = signup.first_name,
        last = signup.last_name,
        email = signup.email,
        university = signup.university,
        major = signup.major,
    );

    let html = format!(
        r#"<html><body style="font-family: sans-serif; color: #333;">
<h2>New Student Signup</h2>
<p>A new student has completed the signup form:</p>
<div style="background-color: #f8f9fa; border-left: 4px solid #2563eb; padding: 16px;">
<p><strong>Name:</strong> {first} {last}</p>
<p><strong>Email:</strong> {email}</p>
<p><strong>University:</strong> {university}</p>
<p><strong>Major:</strong> {major}</p>
</div>
<p style="color: #666; font-size: 14px;">Please review this application in the database.</p>
</body></html>"#,
        first = signup.first_name,
        last = signup.last_name,
        email = signup.email,
        university = signup.university,
        major = signup.major,
    );

    (plain, html)
}

/// Confirmation email body for a contact form submission
pub fn contact_confirmation_body(contact: &ContactMessage, site_url: &str) -> (String, String) {
    // Greet by first name the way the form signature does
    let first_name = contact.name.split_whitespace().next().unwrap_or(&contact.name);

    let plain = format!(
        "Thank You for Contacting Us, {first}!\n\n\
         We've received your message regarding \"{subject}\" and appreciate you taking the time \
         to reach out to us.\n\n\
         Our team will review your inquiry and get back to you as soon as possible, typically \
         within 24-48 hours during business days.\n\n\
         If you need immediate assistance, visit {site}/contact and reach out again.\n\n\
         Best regards,\n\
         Kate\n\
         Internship Coordinator\n\
         Global Internships\n\n\
         Global Internships (c) {year}\n\
         You're receiving this email because you contacted us through our website\n",
        first = first_name,
        subject = contact.subject,
        site = site_url,
        year = Utc::now().year(),
    );

    let html = format!(
        r#"<html><body style="font-family: sans-serif; color: #333;">
<h2>Thank You for Contacting Us, {first}!</h2>
<p>We've received your message regarding "<strong>{subject}</strong>" and appreciate you taking the time to reach out to us.</p>
<p>Our team will review your inquiry and get back to you as soon as possible, typically within 24-48 hours during business days.</p>
<p>If you have any additional questions or need immediate assistance, please don't hesitate to <a href="{site}/contact">reach out to us again</a>.</p>
<p>Best regards,<br><strong>Kate</strong><br>Internship Coordinator<br>Global Internships</p>
<p style="color: #999; font-size: 12px;">Global Internships &copy; {year}<br>You're receiving this email because you contacted us through our website</p>
</body></html>"#,
        first = first_name,
        subject = contact.subject,
        site = site_url,
        year = Utc::now().year(),
    );

    (plain, html)
}

/// Alert email body for a contact form submission, sent to the admin address
pub fn contact_alert_body(contact: &ContactMessage) -> (String, String) {
    let plain = format!(
        "New Contact Form Submission\n\n\
         A new message has been submitted through the contact form:\n\n\
         Name: {name}\n\
         Email: {email}\n\
         Subject: {subject}\n\n\
         Message:\n{message}\n\n\
         ---\n\
         Reply to: {email}\n\
         Subject: Re: {subject}\n",
        name = contact.name,
        email = contact.email,
        subject = contact.subject,
        message = contact.message,
    );

    let html = format!(
        r#"<html><body style="font-family: sans-serif; color: #333;">
<h2>New Contact Form Submission</h2>
<p>A new message has been submitted through the contact form:</p>
<div style="background-color: #f8f9fa; border-left: 4px solid #2563eb; padding: 16px;">
<p><strong>Name:</strong> {name}</p>
<p><strong>Email:</strong> <a href="mailto:{email}">{email}</a></p>
<p><strong>Subject:</strong> {subject}</p>
<p><strong>Message:</strong><br><span style="white-space: pre-wrap;">{message}</span></p>
</div>
<p style="font-size: 14px;"><a href="mailto:{email}?subject=Re: {subject}">Reply to {name}</a></p>
</body></html>"#,
        name = contact.name,
        email = contact.email,
        subject = contact.subject,
        message = contact.message,
    );

    (plain, html)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signup() -> SignupNotification {
        SignupNotification {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            university: "Imperial College London".to_string(),
            major: "Computer Science".to_string(),
        }
    }

    fn contact() -> ContactMessage {
        ContactMessage {
            name: "Grace Hopper".to_string(),
            email: "grace@example.com".to_string(),
            subject: "Internship question".to_string(),
            message: "How do placements work?".to_string(),
        }
    }

    #[test]
    fn test_signup_confirmation_mentions_student() {
        let (plain, html) = signup_confirmation_body(&signup(), "https://example.com");
        assert!(plain.contains("Welcome, Ada!"));
        assert!(html.contains("Welcome, Ada!"));
        assert!(html.contains("https://example.com/contact"));
    }

    #[test]
    fn test_signup_alert_contains_details() {
        let (plain, html) = signup_alert_body(&signup());
        for body in [&plain, &html] {
            assert!(body.contains("Ada"));
            assert!(body.contains("ada@example.com"));
            assert!(body.contains("Imperial College London"));
            assert!(body.contains("Computer Science"));
        }
        assert_eq!(
            signup_alert_subject(&signup()),
            "New Student Signup: Ada Lovelace"
        );
    }

    #[test]
    fn test_contact_confirmation_greets_first_name() {
        let (plain, _) = contact_confirmation_body(&contact(), "https://example.com");
        assert!(plain.contains("Thank You for Contacting Us, Grace!"));
        assert_eq!(
            contact_confirmation_subject(&contact()),
            "We've Received Your Message: Internship question"
        );
    }

    #[test]
    fn test_contact_alert_contains_message() {
        let (plain, html) = contact_alert_body(&contact());
        assert!(plain.contains("How do placements work?"));
        assert!(html.contains("mailto:grace@example.com"));
        assert_eq!(
            contact_alert_subject(&contact()),
            "New Contact Form: Internship question"
        );
    }
}
