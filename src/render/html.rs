//! Small HTML building blocks

use crate::content::{Card, LearnMore, Link};
use crate::session::Flash;

/// Escape text for use in element content and quoted attribute values
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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

/// Empty marker element that in-page links jump to
pub fn anchor(id: &str) -> String {
    format!("<div id=\"{}\"></div>\n", escape(id))
}

pub fn button_link(link: &Link) -> String {
    format!(
        "<a href=\"{}\" class=\"primary-btn\">{}</a>",
        escape(link.href),
        escape(link.label)
    )
}

pub fn button_row(links: &[Link]) -> String {
    let buttons: Vec<String> = links.iter().map(button_link).collect();
    format!("<div class=\"button-row\">{}</div>\n", buttons.join(" "))
}

pub fn card(class: &str, card: &Card) -> String {
    format!(
        "<div class=\"{}\"><h4>{}</h4><p>{}</p></div>\n",
        class,
        escape(card.title),
        escape(card.body)
    )
}

pub fn learn_more(more: &LearnMore) -> String {
    let mut html = format!(
        "<details class=\"learn-more\"><summary>{}</summary><ul>\n",
        escape(more.title)
    );
    for (lead, rest) in more.points {
        html.push_str(&format!(
            "<li><strong>{}</strong>: {}</li>\n",
            escape(lead),
            escape(rest)
        ));
    }
    html.push_str("</ul></details>\n");
    html
}

/// The flash, if it belongs to the section at `anchor`
pub fn flash_for(flash: Option<&Flash>, anchor: &str) -> String {
    match flash {
        Some(f) if f.anchor == anchor => format!(
            "<div class=\"flash {}\" role=\"status\">{}</div>\n",
            f.level.css_class(),
            escape(&f.message)
        ),
        _ => String::new(),
    }
}

pub fn text_input(name: &str, label: &str, value: &str, placeholder: &str) -> String {
    format!(
        "<label>{label}<input type=\"text\" name=\"{name}\" value=\"{value}\" placeholder=\"{placeholder}\"></label>\n",
        label = escape(label),
        name = name,
        value = escape(value),
        placeholder = escape(placeholder),
    )
}

pub fn email_input(name: &str, label: &str, value: &str) -> String {
    format!(
        "<label>{label}<input type=\"email\" name=\"{name}\" value=\"{value}\" placeholder=\"your.email@example.com\"></label>\n",
        label = escape(label),
        name = name,
        value = escape(value),
    )
}

pub fn text_area(name: &str, label: &str, value: &str, placeholder: &str) -> String {
    format!(
        "<label>{label}<textarea name=\"{name}\" placeholder=\"{placeholder}\">{value}</textarea></label>\n",
        label = escape(label),
        name = name,
        placeholder = escape(placeholder),
        value = escape(value),
    )
}

/// `<select>` posting the visible label as its value
pub fn select(name: &str, label: &str, options: &[&str], selected: &str) -> String {
    let mut html = format!("<label>{}<select name=\"{}\">", escape(label), name);
    for option in options {
        let attr = if *option == selected { " selected" } else { "" };
        html.push_str(&format!(
            "<option value=\"{0}\"{1}>{0}</option>",
            escape(option),
            attr
        ));
    }
    html.push_str("</select></label>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape("<script>alert('x') & \"y\"</script>"),
            "&lt;script&gt;alert(&#39;x&#39;) &amp; &quot;y&quot;&lt;/script&gt;"
        );
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_flash_only_in_its_section() {
        let flash = Flash::error("tracker", "Nope <b>");
        assert!(flash_for(Some(&flash), "tracker").contains("Nope &lt;b&gt;"));
        assert!(flash_for(Some(&flash), "volunteer-form").is_empty());
        assert!(flash_for(None, "tracker").is_empty());
    }

    #[test]
    fn test_select_marks_selected() {
        let html = select("type", "Register As", &["Partner", "Donor"], "Donor");
        assert!(html.contains("<option value=\"Donor\" selected>Donor</option>"));
        assert!(html.contains("<option value=\"Partner\">Partner</option>"));
    }
}
