//! Interactive parts of the page: forms, mood tracker, chatbot

use super::html::{
    anchor, button_row, email_input, escape, flash_for, learn_more, select, text_area, text_input,
};
use super::PageView;
use crate::content::{Link, TRACKER_MORE};
use crate::faq::Speaker;
use crate::forms::{CounselingType, FormKind, PartnershipType, VolunteerRole};
use crate::mood::MoodRating;

fn labels<T>(all: &[T], label: impl Fn(&T) -> &'static str) -> Vec<&'static str> {
    all.iter().map(label).collect()
}

fn form_open(kind: FormKind, action: &str) -> String {
    format!(
        "<form class=\"site-form\" id=\"{}-form-fields\" method=\"post\" action=\"{}\">\n",
        kind, action
    )
}

pub fn counseling_form(view: &PageView) -> String {
    let kind = FormKind::Counseling;
    let state = &view.forms.counseling;
    let types = labels(CounselingType::ALL, CounselingType::label);

    let mut html = anchor(kind.anchor());
    html.push_str(&flash_for(view.flash.as_ref(), kind.anchor()));
    html.push_str(&form_open(kind, "/forms/counseling"));
    html.push_str(&text_input("name", "Full Name", &state.name, ""));
    html.push_str(&email_input("email", "Email", &state.email));
    html.push_str(&text_input("phone", "Phone", &state.phone, "+254 XXX XXX XXX"));
    html.push_str(&select("type", "Counseling Type", &types, state.counseling_type.label()));
    html.push_str("<button type=\"submit\">Register</button>\n</form>\n");
    html
}

pub fn volunteer_form(view: &PageView) -> String {
    let kind = FormKind::Volunteer;
    let state = &view.forms.volunteer;
    let roles = labels(VolunteerRole::ALL, VolunteerRole::label);

    let mut html = anchor(kind.anchor());
    html.push_str(&flash_for(view.flash.as_ref(), kind.anchor()));
    html.push_str(&form_open(kind, "/forms/volunteer"));
    html.push_str(&text_input("name", "Full Name", &state.name, ""));
    html.push_str(&email_input("email", "Email", &state.email));
    html.push_str(&text_input("phone", "Phone", &state.phone, "+254 XXX XXX XXX"));
    html.push_str(&text_area("experience", "Experience", &state.experience, "e.g., counseling"));
    html.push_str(&select("role", "Role", &roles, state.role.label()));
    html.push_str("<button type=\"submit\">Register</button>\n</form>\n");
    html
}

pub fn partnership_form(view: &PageView) -> String {
    let kind = FormKind::Partnership;
    let state = &view.forms.partnership;
    let types = labels(PartnershipType::ALL, PartnershipType::label);

    let mut html = anchor(kind.anchor());
    html.push_str(&flash_for(view.flash.as_ref(), kind.anchor()));
    html.push_str(&form_open(kind, "/forms/partnership"));
    html.push_str(&text_input("name", "Full Name", &state.name, ""));
    html.push_str(&text_input(
        "organization",
        "Organization Name (if applicable)",
        &state.organization,
        "",
    ));
    html.push_str(&email_input("email", "Email", &state.email));
    html.push_str(&text_input("phone", "Phone", &state.phone, "+254 XXX XXX XXX"));
    html.push_str(&select("type", "Register As", &types, state.partnership_type.label()));
    html.push_str("<button type=\"submit\">Submit</button>\n</form>\n");
    html
}

pub fn newsletter_form(view: &PageView) -> String {
    let kind = FormKind::Newsletter;

    let mut html = anchor(kind.anchor());
    html.push_str(&flash_for(view.flash.as_ref(), kind.anchor()));
    html.push_str(&format!(
        "<form class=\"newsletter\" method=\"post\" action=\"/forms/newsletter\">\
         <input type=\"email\" name=\"email\" value=\"{}\" placeholder=\"Subscribe to our newsletter\" aria-label=\"Newsletter email\">\
         <button type=\"submit\">Subscribe</button></form>\n",
        escape(&view.forms.newsletter.email)
    ));
    html
}

pub fn mood_tracker(view: &PageView) -> String {
    let mut html = anchor("tracker");
    html.push_str("<h2>Progress Tracker</h2>\n<div class=\"panel\">\n<p>Track your mental health:</p>\n");
    html.push_str("<div class=\"tracker-card\"><h4>Mood Tracker</h4><p>Rate mood (1-5) and add notes.</p></div>\n");
    html.push_str(&flash_for(view.flash.as_ref(), "tracker"));

    html.push_str(&format!(
        "<form class=\"site-form\" method=\"post\" action=\"/mood\">\n\
         <label>How do you feel? (1 = Low, 5 = High)\
         <input type=\"range\" name=\"rating\" min=\"{}\" max=\"{}\" value=\"{}\"></label>\n",
        MoodRating::MIN,
        MoodRating::MAX,
        MoodRating::DEFAULT
    ));
    html.push_str(&text_input("note", "Add a note", "", "e.g., Stressful day"));
    html.push_str("<button type=\"submit\">Log Mood</button>\n</form>\n");

    if !view.recent_moods.is_empty() {
        html.push_str("<ul class=\"mood-history\">\n");
        for entry in &view.recent_moods {
            html.push_str(&format!("<li>{}</li>\n", escape(&entry.to_string())));
        }
        html.push_str("</ul>\n");
    }

    html.push_str(&button_row(&[
        Link {
            label: "Export Mood History",
            href: "/mood/export",
        },
        Link {
            label: "Next: Volunteer",
            href: "#volunteer",
        },
    ]));
    html.push_str("</div>\n");
    html.push_str(&learn_more(&TRACKER_MORE));
    html
}

/// Floating chat panel; open whenever there is something to show
pub fn chatbot(view: &PageView) -> String {
    let open = if view.chat.is_empty() { "" } else { " open" };

    let mut html = format!(
        "<details class=\"chatbot\" id=\"chatbot\"{}><summary aria-label=\"Ask SafeSpace Bot\">\u{1F4AC}</summary>\n\
         <div class=\"chatbot-panel\"><h4>Ask SafeSpace Bot</h4>\n<div class=\"chat-messages\">\n",
        open
    );
    for message in &view.chat {
        let class = match message.speaker {
            Speaker::User => "user",
            Speaker::Bot => "bot",
        };
        html.push_str(&format!(
            "<div class=\"chatbot-message {}\"><strong>{}:</strong> {}</div>\n",
            class,
            message.speaker.label(),
            escape(&message.text)
        ));
    }
    html.push_str(
        "</div>\n<form method=\"post\" action=\"/chat\">\
         <input type=\"text\" name=\"query\" class=\"chatbot-input\" placeholder=\"Ask me anything...\" autocomplete=\"off\">\
         <button type=\"submit\">Send</button></form>\n</div></details>\n",
    );
    html
}
