//! Site Content
//!
//! The literal copy for every section of the page. Nothing here changes at
//! runtime; the renderer walks these tables in order.

pub mod sections;

pub use sections::*;

/// A titled card with a short description
#[derive(Debug, Clone, Copy)]
pub struct Card {
    pub title: &'static str,
    pub body: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct BlogPost {
    pub title: &'static str,
    pub date: &'static str,
    pub summary: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Testimonial {
    pub quote: &'static str,
    pub attribution: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Photo {
    pub src: &'static str,
    pub alt: &'static str,
    pub caption: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
}

/// Collapsible "Learn more" panel under a section
#[derive(Debug, Clone, Copy)]
pub struct LearnMore {
    pub title: &'static str,
    /// (bold lead, rest of the line)
    pub points: &'static [(&'static str, &'static str)],
}

/// Anchors linked from the navigation bar, in page order
pub const NAV_LINKS: &[Link] = &[
    Link { label: "About", href: "#about" },
    Link { label: "Services", href: "#services" },
    Link { label: "Blog", href: "#blog" },
    Link { label: "Tracker", href: "#tracker" },
    Link { label: "Volunteer", href: "#volunteer" },
    Link { label: "Events", href: "#events" },
    Link { label: "Partnerships", href: "#partnerships" },
    Link { label: "FAQ", href: "#faq" },
    Link { label: "Contact", href: "#contact" },
];
