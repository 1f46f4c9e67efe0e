//! Static sections of the page

use super::html::{anchor, button_link, button_row, card, escape, learn_more};
use crate::content::*;

pub fn header() -> String {
    let mut html = format!(
        "<header class=\"site-header\"><h1>{}</h1><p>{}</p></header>\n",
        escape(ORG_NAME),
        escape(TAGLINE)
    );

    html.push_str("<nav class=\"site-nav\">");
    for link in NAV_LINKS {
        html.push_str(&format!(
            "<a href=\"{}\">{}</a>",
            escape(link.href),
            escape(link.label)
        ));
    }
    html.push_str("</nav>\n");
    html
}

pub fn hero() -> String {
    let mut html = anchor("hero");
    html.push_str(&format!(
        "<section class=\"hero\"><h1>{}</h1><p>{}</p><img src=\"{}\" alt=\"{}\">{}</section>\n",
        escape(HERO_TITLE),
        escape(HERO_TEXT),
        escape(HERO_PHOTO.src),
        escape(HERO_PHOTO.alt),
        button_row(HERO_LINKS),
    ));
    html.push_str(&learn_more(&MISSION_MORE));
    html
}

pub fn about() -> String {
    let mut html = anchor("about");
    html.push_str(&format!("<h2>About {}</h2>\n<div class=\"panel\">", escape(ORG_NAME)));
    for paragraph in ABOUT_PARAGRAPHS {
        html.push_str(&format!("<p>{}</p>", escape(paragraph)));
    }
    html.push_str(&button_link(&Link {
        label: "Explore Our Services",
        href: "#services",
    }));
    html.push_str("</div>\n");
    html.push_str(&learn_more(&HISTORY_MORE));
    html
}

pub fn founders() -> String {
    let mut html = anchor("founders");
    html.push_str("<h2>Our Founders</h2>\n<div class=\"panel\">\n");
    for founder in FOUNDERS {
        html.push_str(&card("founder-card", founder));
    }
    html.push_str("</div>\n");
    html.push_str(&learn_more(&FOUNDERS_MORE));
    html
}

/// Service cards; the counseling form is rendered right after these
pub fn services() -> String {
    let mut html = anchor("services");
    html.push_str("<h2>Our Therapeutic Services</h2>\n");
    html.push_str(&format!("<p>{}</p>\n", escape(SERVICES_INTRO)));
    for service in SERVICES {
        html.push_str(&format!(
            "<div class=\"service-card\"><h3>{} {}</h3><p>{}</p></div>\n",
            service.icon,
            escape(service.title),
            escape(service.description)
        ));
    }
    html
}

pub fn services_footer() -> String {
    let mut html = button_row(&[Link {
        label: "Explore Our Blog",
        href: "#blog",
    }]);
    html.push_str(&learn_more(&SERVICES_MORE));
    html
}

pub fn testimonials() -> String {
    let mut html = anchor("testimonials");
    html.push_str("<h2>What Our Clients Say</h2>\n<div class=\"panel\">\n");
    for t in TESTIMONIALS {
        html.push_str(&format!(
            "<div class=\"testimonial-card\"><p><em>\u{2018}{}\u{2019}</em> - {}</p></div>\n",
            escape(t.quote),
            escape(t.attribution)
        ));
    }
    html.push_str("</div>\n");
    html.push_str(&learn_more(&TESTIMONIALS_MORE));
    html
}

pub fn counseling_sessions() -> String {
    let mut html = anchor("counseling-sessions");
    html.push_str("<h2>Our Counseling Sessions in Action</h2>\n<div class=\"panel gallery\">\n");
    for photo in SESSION_PHOTOS {
        html.push_str(&format!(
            "<figure><img src=\"{}\" alt=\"{}\"><figcaption>{}</figcaption></figure>\n",
            escape(photo.src),
            escape(photo.alt),
            escape(photo.caption)
        ));
    }
    html.push_str("</div>\n");
    html.push_str(&learn_more(&SESSIONS_MORE));
    html
}

pub fn blog() -> String {
    let mut html = anchor("blog");
    html.push_str("<h2>Mental Health Blog</h2>\n<div class=\"panel\">\n<p>Articles by experts for wellbeing:</p>\n");
    for post in BLOG_POSTS {
        html.push_str(&format!(
            "<div class=\"blog-card\"><h4>{}</h4><p><strong>Date:</strong> {}</p><p>{}</p></div>\n",
            escape(post.title),
            escape(post.date),
            escape(post.summary)
        ));
    }
    html.push_str("</div>\n");
    html.push_str(&button_row(&[
        Link {
            label: "Crisis Support",
            href: "#crisis",
        },
        Link {
            label: "Tracker",
            href: "#tracker",
        },
    ]));
    html.push_str(&learn_more(&BLOG_MORE));
    html
}

pub fn crisis() -> String {
    let mut html = anchor("crisis");
    html.push_str("<h2>Crisis Resources</h2>\n<div class=\"panel\">\n<p>Immediate support:</p>\n<ul>\n");
    for (service, availability) in CRISIS_LINES {
        html.push_str(&format!(
            "<li><strong>{}:</strong> {}</li>\n",
            escape(service),
            escape(availability)
        ));
    }
    html.push_str(&format!("</ul>\n<p>{}</p>\n", escape(CRISIS_EMERGENCY)));
    html.push_str(&button_link(&Link {
        label: "Get Help Now",
        href: "#contact",
    }));
    html.push_str("</div>\n");
    html.push_str(&learn_more(&CRISIS_MORE));
    html
}

/// Role cards; the volunteer form follows
pub fn volunteer() -> String {
    let mut html = anchor("volunteer");
    html.push_str("<h2>Volunteer Opportunities</h2>\n<div class=\"panel\">\n<p>Join our mission with training:</p>\n");
    for role in VOLUNTEER_ROLES {
        html.push_str(&card("volunteer-card", role));
    }
    html.push_str("</div>\n");
    html.push_str(&button_row(&[Link {
        label: "Register to Volunteer",
        href: "#volunteer-form",
    }]));
    html
}

pub fn volunteer_footer() -> String {
    let mut html = button_row(&[Link {
        label: "Contact Us",
        href: "#contact",
    }]);
    html.push_str(&learn_more(&VOLUNTEER_MORE));
    html
}

pub fn events() -> String {
    let mut html = anchor("events");
    html.push_str("<h2>Upcoming Events</h2>\n<div class=\"panel\">\n");
    for event in EVENTS {
        html.push_str(&card("event-card", event));
    }
    html.push_str("</div>\n");
    html.push_str(&learn_more(&EVENTS_MORE));
    html
}

/// Partner cards; the partnership form follows
pub fn partnerships() -> String {
    let mut html = anchor("partnerships");
    html.push_str("<h2>Our Partnerships</h2>\n<div class=\"panel\">\n");
    for partner in PARTNERS {
        html.push_str(&card("partnership-card", partner));
    }
    html.push_str(&button_row(&[Link {
        label: "Register as Partner or Donor",
        href: "#partnership-form",
    }]));
    html.push_str("</div>\n");
    html
}

pub fn partner_with_us() -> String {
    let mut html = anchor("partner-with-us");
    html.push_str("<h2>Partner With Us</h2>\n<div class=\"panel\">\n");
    for paragraph in PARTNER_WITH_US {
        html.push_str(&format!("<p>{}</p>\n", escape(paragraph)));
    }
    html.push_str(&format!(
        "<p>Register as a partner or donor using the form above or contact us at <a href=\"mailto:{0}\">{0}</a> for more details.</p>\n",
        escape(PARTNERSHIP_EMAIL)
    ));
    html.push_str(&button_link(&Link {
        label: "Get Started",
        href: "#partnership-form",
    }));
    html.push_str("</div>\n");
    html.push_str(&learn_more(&PARTNERSHIPS_MORE));
    html
}

pub fn faq() -> String {
    let mut html = anchor("faq");
    html.push_str("<h2>Frequently Asked Questions</h2>\n<div class=\"panel\">\n");
    for (question, answer) in STATIC_FAQ {
        html.push_str(&format!(
            "<p><strong>Q: {}</strong> A: {}</p>\n",
            escape(question),
            escape(answer)
        ));
    }
    html.push_str("</div>\n");
    html.push_str(&learn_more(&FAQ_MORE));
    html
}

pub fn contact() -> String {
    let mut html = anchor("contact");
    html.push_str("<h2>Contact Us</h2>\n<div class=\"panel\">\n");
    html.push_str(&format!("<p><strong>\u{1F4CD}</strong> {}</p>\n", escape(CONTACT_ADDRESS)));
    html.push_str(&format!("<p><strong>\u{1F4DE}</strong> {}</p>\n", escape(CONTACT_PHONE)));
    html.push_str(&format!(
        "<p><strong>\u{2709}\u{FE0F}</strong> <a href=\"mailto:{0}\">{0}</a>, 24-hr response.</p>\n",
        escape(CONTACT_EMAIL)
    ));
    html.push_str(&format!("<p><strong>Hours:</strong> {}</p>\n", escape(CONTACT_HOURS)));
    html.push_str(&button_link(&Link {
        label: "Book Consultation",
        href: "#counseling-form",
    }));
    html.push_str("</div>\n");
    html.push_str(&learn_more(&CONTACT_MORE));
    html
}

/// Footer text and social links; the newsletter form is appended after
pub fn footer() -> String {
    let mut html = format!(
        "<footer class=\"footer\"><p>{}</p>\n<div class=\"button-row\">",
        escape(FOOTER_NOTE)
    );
    for link in SOCIAL_LINKS {
        html.push_str(&format!(
            "<a href=\"{}\" target=\"_blank\" rel=\"noopener\" class=\"primary-btn\">{}</a> ",
            escape(link.href),
            escape(link.label)
        ));
    }
    html.push_str("</div>\n");
    html
}
