//! Knowledge base and first-match lookup

use once_cell::sync::Lazy;
use regex::Regex;

use super::FaqError;

/// One question pattern with its canned answer
#[derive(Debug, Clone)]
pub struct KnowledgeEntry {
    pattern: Regex,
    answer: String,
}

impl KnowledgeEntry {
    /// Source text of the question pattern
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }
}

/// Ordered list of question patterns plus a fallback answer.
///
/// Queries are lowercased and searched against each pattern in order. The
/// first pattern found anywhere in the query decides the answer, so when two
/// patterns overlap the earlier one wins.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    entries: Vec<KnowledgeEntry>,
    default_answer: String,
}

const BUILTIN_ENTRIES: &[(&str, &str)] = &[
    (
        r"what is safespace organisation\??",
        "SafeSpace Organisation, founded in 2023 by Jerim Owino and Hamdi Roble, is a non-profit providing accessible, culturally-appropriate mental health care, addressing trauma, depression, and more with counseling and outreach.",
    ),
    (
        r"what services do you offer\??",
        "We offer Individual Counseling, Group Therapy, Family Counseling, Trauma Recovery Therapy, and Online Counseling, using methods like CBT, EMDR, and mindfulness, tailored to diverse mental health needs. Register at the Services section.",
    ),
    (
        r"how can i contact you\??",
        "Contact us at +254 781 095 919 (8 AM-7 PM EAT) or info@safespaceorganisation.org (24-hour response). Visit Greenhouse Plaza, Ngong Road, Nairobi.",
    ),
    (
        r"what are your hours\??",
        "Office hours are Mon-Fri 9 AM-5 PM, Sat 10 AM-2 PM, closed Sundays and holidays. Crisis line is 8 AM-7 PM EAT.",
    ),
    (
        r"how much does it cost\??",
        "Fees range from KSh 500-2,000 per session on a sliding scale, with subsidies and free workshops for low-income clients.",
    ),
    (
        r"who are the founders\??",
        "Our founders are Jerim Owino, a certified psychologist from Maasai Mara University, and Hamdi Roble, a cultural therapy expert with a Master\u{2019}s in Public Health.",
    ),
    (
        r"what events are coming up\??",
        "Upcoming events include a Stress Management Workshop on August 10, 2025, in Nairobi, and a Youth Mental Health Forum on August 15, 2025, in Kisumu. Register at events@safespaceorganisation.org.",
    ),
    (
        r"how can i volunteer\??",
        "Volunteer roles include Outreach Support, Event Volunteer, and Crisis Line Assistant. Register via the Volunteer form with your details and preferred role.",
    ),
    (
        r"what is the crisis line\??",
        "Our Crisis Line is +254 781 095 919 (8 AM-7 PM EAT), with Befrienders Kenya at 1199 available 24/7 for emergencies.",
    ),
    (
        r"how can i partner with you\??",
        "You can partner with us by registering through the Partnership form on our Partnerships page, or donate via the Donor form.",
    ),
];

const BUILTIN_DEFAULT: &str = "I\u{2019}m sorry, I didn\u{2019}t understand. Ask about services, contact, hours, costs, founders, events, volunteering, crisis support, or partnerships, or visit Contact.";

// Constant patterns; `test_builtin_patterns_compile` forces this.
static BUILTIN: Lazy<KnowledgeBase> = Lazy::new(|| {
    let entries = BUILTIN_ENTRIES
        .iter()
        .map(|(pattern, answer)| KnowledgeEntry {
            pattern: Regex::new(pattern).expect("builtin FAQ patterns are valid"),
            answer: (*answer).to_string(),
        })
        .collect();

    KnowledgeBase {
        entries,
        default_answer: BUILTIN_DEFAULT.to_string(),
    }
});

impl KnowledgeBase {
    /// Compile a knowledge base from ordered (pattern, answer) pairs
    pub fn new<P, A>(
        pairs: impl IntoIterator<Item = (P, A)>,
        default_answer: impl Into<String>,
    ) -> Result<Self, FaqError>
    where
        P: AsRef<str>,
        A: Into<String>,
    {
        let entries = pairs
            .into_iter()
            .map(|(pattern, answer)| {
                let pattern = pattern.as_ref();
                Regex::new(pattern)
                    .map(|re| KnowledgeEntry {
                        pattern: re,
                        answer: answer.into(),
                    })
                    .map_err(|source| FaqError::InvalidPattern {
                        pattern: pattern.to_string(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            entries,
            default_answer: default_answer.into(),
        })
    }

    /// The SafeSpace knowledge base
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    /// First entry whose pattern occurs in the lowercased query
    pub fn find(&self, query: &str) -> Option<&KnowledgeEntry> {
        let query = query.to_lowercase();
        self.entries.iter().find(|e| e.pattern.is_match(&query))
    }

    /// Answer for a query, or the default answer when nothing matches
    pub fn answer(&self, query: &str) -> &str {
        self.find(query)
            .map(KnowledgeEntry::answer)
            .unwrap_or(&self.default_answer)
    }

    pub fn default_answer(&self) -> &str {
        &self.default_answer
    }

    pub fn entries(&self) -> &[KnowledgeEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
