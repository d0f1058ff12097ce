//! Site content
//!
//! Everything the page shows. The built-in default is the ITSA SJCEM page;
//! a `site:` block in the config file replaces any of these lists.

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteContent {
    /// Society name; typed out in the hero and shown on the splash
    pub name: String,
    pub tagline: String,
    pub stats: Vec<Stat>,
    pub features: Vec<Feature>,
    pub timeline: Vec<Milestone>,
    pub domains: Vec<Domain>,
    pub events: Vec<EventCard>,
    pub members: Vec<Member>,
    pub contacts: Vec<ContactCard>,
}

/// Hero counter
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Stat {
    pub label: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Feature {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Milestone {
    pub year: String,
    pub text: String,
}

/// Skill domain with a progress bar (percent, 0-100)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Domain {
    pub name: String,
    pub progress: u8,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EventCard {
    pub title: String,
    pub date: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Member {
    pub name: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContactCard {
    pub label: String,
    pub value: String,
}

fn stat(label: &str, count: u32) -> Stat {
    Stat {
        label: label.to_string(),
        count,
    }
}

fn feature(title: &str, description: &str) -> Feature {
    Feature {
        title: title.to_string(),
        description: description.to_string(),
    }
}

fn milestone(year: &str, text: &str) -> Milestone {
    Milestone {
        year: year.to_string(),
        text: text.to_string(),
    }
}

fn domain(name: &str, progress: u8) -> Domain {
    Domain {
        name: name.to_string(),
        progress,
    }
}

fn event(title: &str, date: &str, description: &str) -> EventCard {
    EventCard {
        title: title.to_string(),
        date: date.to_string(),
        description: description.to_string(),
    }
}

fn member(name: &str, role: &str) -> Member {
    Member {
        name: name.to_string(),
        role: role.to_string(),
    }
}

fn contact(label: &str, value: &str) -> ContactCard {
    ContactCard {
        label: label.to_string(),
        value: value.to_string(),
    }
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            name: "ITSA SJCEM".to_string(),
            tagline: "Information Technology Students' Association, \
                      St. John College of Engineering and Management"
                .to_string(),
            stats: vec![
                stat("Members", 250),
                stat("Events", 40),
                stat("Workshops", 25),
                stat("Years", 8),
            ],
            features: vec![
                feature(
                    "Workshops",
                    "Hands-on sessions on the tools and frameworks used in industry.",
                ),
                feature(
                    "Hackathons",
                    "Overnight build sprints where teams ship a working prototype.",
                ),
                feature(
                    "Tech Talks",
                    "Alumni and industry speakers on careers, research and new technology.",
                ),
                feature(
                    "Industry Visits",
                    "Trips to data centres and software companies to see IT at scale.",
                ),
            ],
            timeline: vec![
                milestone("2017", "Association founded by the first IT batch"),
                milestone("2019", "First inter-college hackathon hosted on campus"),
                milestone("2022", "Coding club and open-source chapter launched"),
                milestone("2024", "Annual tech fest crosses 1000 participants"),
            ],
            domains: vec![
                domain("Web Development", 90),
                domain("App Development", 80),
                domain("AI & Machine Learning", 75),
                domain("Cybersecurity", 70),
                domain("Cloud Computing", 65),
            ],
            events: vec![
                event(
                    "CodeSprint Hackathon",
                    "March",
                    "24-hour hackathon open to all engineering students.",
                ),
                event(
                    "Web Dev Bootcamp",
                    "August",
                    "A week of HTML, CSS and JavaScript from zero to deployed site.",
                ),
                event(
                    "AI/ML Workshop",
                    "September",
                    "Train and evaluate your first model with Python notebooks.",
                ),
                event(
                    "Cyber Quest CTF",
                    "January",
                    "Capture-the-flag contest covering web, crypto and forensics.",
                ),
            ],
            members: vec![
                member("Faculty Coordinator", "Guides the association"),
                member("President", "Leads the student committee"),
                member("Vice President", "Coordinates departments"),
                member("Technical Head", "Runs workshops and projects"),
                member("Events Head", "Plans and hosts events"),
                member("Secretary", "Minutes, notices and records"),
            ],
            contacts: vec![
                contact("Email", "itsa@sjcem.edu.in"),
                contact("Location", "SJCEM, Palghar, Maharashtra"),
                contact("Instagram", "@itsa_sjcem"),
            ],
        }
    }
}
