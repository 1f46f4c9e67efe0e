//! Section copy

use super::{BlogPost, Card, LearnMore, Link, Photo, Service, Testimonial};

pub const ORG_NAME: &str = "SafeSpace Organisation";
pub const TAGLINE: &str = "Empowering Minds, Nurturing Hope Since 2023";

pub const HERO_TITLE: &str = "Healing Minds, Restoring Lives";
pub const HERO_TEXT: &str = "SafeSpace Organisation offers professional, confidential counseling in a culturally-sensitive environment for all communities.";
pub const HERO_PHOTO: Photo = Photo {
    src: "https://images.unsplash.com/photo-1588195539435-d6b5f19e1c24?auto=format&fit=crop&w=600&q=80",
    alt: "Counseling outreach session",
    caption: "",
};
pub const HERO_LINKS: &[Link] = &[
    Link { label: "About Us", href: "#about" },
    Link { label: "Our Services", href: "#services" },
    Link { label: "Upcoming Events", href: "#events" },
];
pub const MISSION_MORE: LearnMore = LearnMore {
    title: "Learn More About Our Mission",
    points: &[
        ("Mission", "Break mental health stigma and provide affordable care."),
        ("Vision", "A thriving world with emotional support for all."),
        ("Contact", "info@safespaceorganisation.org or +254 781 095 919."),
        ("Impact", "600+ clients in 2025, 90% satisfaction."),
    ],
};

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "SafeSpace Organisation, founded in 2023 by Jerim Owino and Hamdi Roble, provides accessible mental health care. With 15 professionals, we serve Nairobi, Kisumu, Eldoret, and more, addressing trauma, depression, and family issues via multiple channels.",
    "We blend traditions with modern therapies, partnering with NGOs and the Ministry of Health to reach 20+ districts, focusing on inclusivity.",
];
pub const HISTORY_MORE: LearnMore = LearnMore {
    title: "Learn More About Our History",
    points: &[
        ("Founding", "2022 Nakuru pilot aided 50, leading to 2023 launch."),
        ("Growth", "2 to 15 staff, aiming for 20 by 2025 end."),
        ("Awards", "2024 Health Federation Award, 2025 Global Grant."),
        ("Team", "Specialists in child, trauma, and cultural therapy."),
    ],
};

pub const FOUNDERS: &[Card] = &[
    Card {
        title: "Jerim Owino",
        body: "Jerim is a certified psychologist from Maasai Mara University with over 12 years of experience in mental health. Raised in Narok among the Maasai community, he developed a deep understanding of cultural influences on trauma, particularly from his work with pastoralist communities affected by displacement and cattle raids. His expertise lies in trauma counseling and community-based interventions, shaping SafeSpace\u{2019}s rural outreach programs.",
    },
    Card {
        title: "Hamdi Roble",
        body: "Hamdi holds a Master\u{2019}s in Public Health from the University of Nairobi and brings 8 years of experience as a community health advocate. Born in Kisumu, she grew up immersed in Luo cultural practices, which inspired her to integrate storytelling and traditional healing into modern therapy. She has worked with women\u{2019}s groups in rural Kenya, addressing gender-based violence, and leads SafeSpace\u{2019}s efforts to expand services to underserved regions.",
    },
];
pub const FOUNDERS_MORE: LearnMore = LearnMore {
    title: "Learn More About Our Founders",
    points: &[
        ("Jerim", "Trained 50+ community health workers, co-authored a guide on trauma in pastoral communities."),
        ("Hamdi", "Led 15 workshops on gender-based violence, secured funding from local NGOs for rural projects."),
        ("Collaboration", "Developed SafeSpace\u{2019}s culturally-sensitive therapy model after a 2022 pilot."),
        ("Community Work", "Both volunteer monthly in low-income areas, offering free sessions."),
    ],
};

pub const SERVICES_INTRO: &str = "A comprehensive suite of evidence-based therapies by 15 certified professionals with over 75 years of combined experience, tailored to diverse mental health needs.";
pub const SERVICES: &[Service] = &[
    Service {
        icon: "\u{1F464}",
        title: "Individual Counseling",
        description: "This service provides personalized, one-on-one therapy sessions targeting conditions such as chronic depression, generalized anxiety disorder, PTSD, and low self-esteem. Conducted by therapists with 5+ years of experience, sessions use CBT, DBT, ACT, and MBSR. Each 50-minute session is available in-person or via secure video conferencing with flexible scheduling and a free 15-minute initial consultation.",
    },
    Service {
        icon: "\u{1F465}",
        title: "Group Therapy",
        description: "Designed for individuals dealing with grief, addiction recovery, PTSD, and social anxiety. Facilitated by two counselors with 10+ years of group experience, these 90-minute weekly sessions accommodate up to 10 participants with role-playing, peer support, and guided meditations. Offered in-person and online with a 3-month commitment encouraged.",
    },
    Service {
        icon: "\u{1F3E0}",
        title: "Family Counseling",
        description: "Aims to improve family dynamics and resolve conflicts for parenting challenges, marital disputes, intergenerational trauma, and cultural clashes. Led by family therapists trained in systemic and narrative therapy, these 60-minute sessions incorporate culturally-sensitive practices and include a 6-session initial program.",
    },
    Service {
        icon: "\u{1F9E0}",
        title: "Trauma Recovery Therapy",
        description: "Targets individuals and families affected by severe trauma, including survivors of physical violence, sexual abuse, accidents, and natural disasters. Using EMDR, trauma-focused CBT, and somatic experiencing, our specialists provide 75-minute sessions with a 6-session initial phase and ongoing support groups.",
    },
    Service {
        icon: "\u{1F4BB}",
        title: "Online Counseling",
        description: "Offers virtual therapy sessions for individuals facing barriers to in-person care, addressing anxiety, depression, and stress. Delivered by licensed therapists via secure video platforms, each 50-minute session utilizes CBT, mindfulness, and teletherapy techniques, available 24/7 with a free 15-minute consultation.",
    },
];
pub const SERVICES_MORE: LearnMore = LearnMore {
    title: "Learn More About Our Services",
    points: &[
        ("Credentials", "All therapists hold Master\u{2019}s degrees or higher, certified in multiple modalities (e.g., EMDR, ACT)."),
        ("Accessibility", "Sliding scale fees (KSh 500-2,000/session), subsidies for low-income clients, and free community workshops monthly."),
        ("Feedback", "95% of clients report improved wellbeing after 6 sessions, with 85% continuing therapy based on 2024 surveys."),
        ("Innovation", "Piloting AI-assisted therapy tools for rural access, launching in Q4 2025 with a focus on real-time support."),
    ],
};

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Counseling helped me recover from anxiety after my accident!",
        attribution: "Jane K., Nairobi, 2025",
    },
    Testimonial {
        quote: "Group therapy gave me a community during my grief!",
        attribution: "Peter O., Kisumu, 2025",
    },
    Testimonial {
        quote: "Family counseling resolved our conflicts with cultural wisdom!",
        attribution: "Amina H., Eldoret, 2025",
    },
];
pub const TESTIMONIALS_MORE: LearnMore = LearnMore {
    title: "Learn More About Testimonials",
    points: &[
        ("Verification", "Collected with consent from verified clients."),
        ("Diversity", "Reflects urban, rural, and various age groups."),
        ("Impact", "Over 200 testimonials received in 2025, with a yearly report planned."),
    ],
};

pub const SESSION_PHOTOS: &[Photo] = &[
    Photo {
        src: "https://images.unsplash.com/photo-1600585154340-be6161a56a0c?auto=format&fit=crop&w=400&q=80",
        alt: "Counselor leading a supportive group therapy session",
        caption: "A counselor leading a supportive group therapy session in Nairobi.",
    },
    Photo {
        src: "https://images.unsplash.com/photo-1573496359142-b8d87734a5a4?auto=format&fit=crop&w=400&q=80",
        alt: "One-on-one counseling session in a rural outreach program",
        caption: "A one-on-one counseling session during a rural outreach program in Kisumu.",
    },
];
pub const SESSIONS_MORE: LearnMore = LearnMore {
    title: "Learn More About Our Sessions",
    points: &[
        ("Settings", "Conducted in urban centers, rural areas, and via telehealth."),
        ("Diversity", "Includes youth, adults, and families from various backgrounds."),
        ("Safety", "All sessions adhere to strict confidentiality and cultural sensitivity protocols."),
        ("Impact", "Photos reflect our reach to over 600 clients in 2025."),
    ],
};

pub const BLOG_POSTS: &[BlogPost] = &[
    BlogPost {
        title: "Coping with Economic Stress",
        date: "July 20, 2025",
        summary: "Strategies including budgeting and relaxation by Dr. Amina Hassan.",
    },
    BlogPost {
        title: "Cultural Therapy in Organisation",
        date: "July 15, 2025",
        summary: "Integrating storytelling by Hamdi Roble.",
    },
    BlogPost {
        title: "PTSD Survivor Guide",
        date: "July 10, 2025",
        summary: "Symptoms and recovery by Dr. James Otieno.",
    },
];
pub const BLOG_MORE: LearnMore = LearnMore {
    title: "Learn More About Our Blog",
    points: &[
        ("Updates", "Bi-weekly posts, youth series in August 2025."),
        ("Panel", "Psychologists, cultural advisors, and a psychiatrist."),
        ("Engagement", "Submit questions to blog@safespaceorganisation.org."),
        ("Downloads", "Free PDFs under Resources."),
    ],
};

/// (service, availability)
pub const CRISIS_LINES: &[(&str, &str)] = &[
    ("Befrienders Kenya", "1199, 24/7."),
    ("SafeSpace Crisis", "+254 781 095 919, 8 AM-7 PM EAT."),
];
pub const CRISIS_EMERGENCY: &str = "Emergency: Call 999 or visit a hospital.";
pub const CRISIS_MORE: LearnMore = LearnMore {
    title: "Learn More About Crisis Support",
    points: &[
        ("Training", "40 hours annually for volunteers."),
        ("Partnerships", "With Kenyatta Hospital for referrals."),
        ("Confidentiality", "Encrypted calls, strict privacy."),
        ("Resources", "Free crisis pamphlets at locations."),
    ],
};

pub const TRACKER_MORE: LearnMore = LearnMore {
    title: "Learn More About Tracking",
    points: &[
        ("Features", "Export as CSV."),
        ("Usage", "Log daily for 30 days."),
        ("Support", "support@safespaceorganisation.org."),
        ("Privacy", "Entries stay in your browser session and are never stored."),
    ],
};

pub const VOLUNTEER_ROLES: &[Card] = &[
    Card {
        title: "Outreach Support",
        body: "2-4 hr campaigns in Nakuru/Mombasa, 10-hr training.",
    },
    Card {
        title: "Event Volunteer",
        body: "4-6 hr support for August 10/August 15 events.",
    },
    Card {
        title: "Crisis Line Assistant",
        body: "8 AM-7 PM shifts, 20-hr training.",
    },
];
pub const VOLUNTEER_MORE: LearnMore = LearnMore {
    title: "Learn More About Volunteering",
    points: &[
        ("Impact", "1,200 in 2024, 2,000 target 2025."),
        ("Training", "10-hr online, 5-hr in-person."),
        ("Recognition", "Certificates, Volunteer Day Dec 15, 2025."),
        ("Support", "Monthly check-ins."),
    ],
};

pub const EVENTS: &[Card] = &[
    Card {
        title: "Stress Management Workshop",
        body: "August 10, 2025, 9 AM-1 PM, Nairobi Hall. Free, register at events@safespaceorganisation.org.",
    },
    Card {
        title: "Youth Mental Health Forum",
        body: "August 15, 2025, 10 AM-2 PM, Kisumu Center. Ages 13-25.",
    },
];
pub const EVENTS_MORE: LearnMore = LearnMore {
    title: "Learn More About Events",
    points: &[
        ("Registration", "50 per event, email required."),
        ("Workshops", "Handouts, online Q&A."),
        ("Past", "June 2025 Trauma Day, 80 attendees."),
        ("Accessibility", "Sign language, wheelchair access."),
    ],
};

pub const PARTNERS: &[Card] = &[
    Card {
        title: "Kenyatta National Hospital",
        body: "Referrals and trauma programs since 2024.",
    },
    Card {
        title: "Kenya Red Cross",
        body: "Disaster response training since 2023.",
    },
    Card {
        title: "Ministry of Health",
        body: "Policy support and rural funding.",
    },
];

pub const PARTNER_WITH_US: &[&str] = &[
    "We invite schools, businesses, NGOs, and community organizations to join us in expanding mental health care. Your partnership can support training for local health workers, funding mobile clinics, or sponsoring outreach programs in underserved areas.",
    "Benefits: Enhance your CSR profile, gain access to mental health resources, and collaborate on community impact projects.",
];
pub const PARTNERSHIP_EMAIL: &str = "partnership@safespaceorganisation.org";
pub const PARTNERSHIPS_MORE: LearnMore = LearnMore {
    title: "Learn More About Partnerships",
    points: &[
        ("Opportunities", "Joint workshops, co-funded initiatives, or shared research."),
        ("Impact", "Reach 2,000+ additional clients with new partners by 2026."),
        ("Process", "Initial consultation within 72 hours of contact."),
        ("Examples", "Past partners include health NGOs and educational institutions."),
    ],
};

/// (question, answer) shown in the static FAQ section
pub const STATIC_FAQ: &[(&str, &str)] = &[
    ("Ages?", "All ages, specialized programs."),
    ("Confidentiality?", "Yes, encrypted, compliant."),
    ("Payment?", "Cash, M-Pesa, subsidies."),
];
pub const FAQ_MORE: LearnMore = LearnMore {
    title: "Learn More About FAQs",
    points: &[
        ("Support", "faq@safespaceorganisation.org."),
        ("Updates", "Quarterly, last July 2025."),
        ("Resources", "Download FAQ PDF."),
    ],
};

pub const CONTACT_ADDRESS: &str = "Greenhouse Plaza, Ngong Road, Nairobi.";
pub const CONTACT_PHONE: &str = "+254 781 095 919, 8 AM-7 PM EAT.";
pub const CONTACT_EMAIL: &str = "info@safespaceorganisation.org";
pub const CONTACT_HOURS: &str = "Mon-Fri 9 AM-5 PM, Sat 10 AM-2 PM.";
pub const CONTACT_MORE: LearnMore = LearnMore {
    title: "Learn More About Contacting Us",
    points: &[
        ("Appointments", "Online or call, same-day slots."),
        ("Accessibility", "Wheelchair, sign language."),
        ("Follow-Up", "Within one week."),
        ("Map", "On our website."),
    ],
};

pub const FOOTER_NOTE: &str = "\u{00A9} 2023-2025 SafeSpace Organisation | Designed with \u{2764}\u{FE0F}";
pub const SOCIAL_LINKS: &[Link] = &[
    Link { label: "Facebook", href: "https://facebook.com/safespaceorganisation" },
    Link { label: "Instagram", href: "https://instagram.com/safespaceorganisation" },
    Link { label: "Twitter", href: "https://twitter.com/safespaceorganisation" },
    Link { label: "LinkedIn", href: "https://linkedin.com/company/safespaceorganisation" },
];
