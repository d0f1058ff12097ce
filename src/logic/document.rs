//! Page document layout
//!
//! Lays the site content out as a flat list of rows for a given width.
//! Rows are plain data (no terminal styling); rows whose text depends on
//! time (typed title, counters, progress bars, form) are placeholders the
//! renderer fills in. Section and reveal-block geometry is recorded so the
//! viewport observers and the navigation highlight can work on row numbers.

use super::formatting::wrap_text;
use super::reveal::{effect_for, RevealEffect, RevealKind};
use crate::content::SiteContent;

/// Page sections, in document order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionId {
    Home,
    About,
    Domains,
    Events,
    Team,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 6] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Domains,
        SectionId::Events,
        SectionId::Team,
        SectionId::Contact,
    ];

    /// Navbar label
    pub fn title(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Domains => "Domains",
            SectionId::Events => "Events",
            SectionId::Team => "Team",
            SectionId::Contact => "Contact",
        }
    }

    /// Heading shown at the top of the section body
    pub fn heading(self) -> &'static str {
        match self {
            SectionId::Home => "",
            SectionId::About => "About Us",
            SectionId::Domains => "Our Domains",
            SectionId::Events => "Events",
            SectionId::Team => "Meet the Team",
            SectionId::Contact => "Get in Touch",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<SectionId> {
        Self::ALL.get(index).copied()
    }
}

/// Emphasis of a text row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Normal,
    Muted,
    Accent,
    Strong,
}

/// Contact form fields, in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Message,
    Submit,
}

impl FormField {
    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Message => "Message",
            FormField::Submit => "Send",
        }
    }

    pub fn next(self) -> FormField {
        match self {
            FormField::Name => FormField::Email,
            FormField::Email => FormField::Message,
            FormField::Message => FormField::Submit,
            FormField::Submit => FormField::Name,
        }
    }

    pub fn prev(self) -> FormField {
        match self {
            FormField::Name => FormField::Submit,
            FormField::Email => FormField::Name,
            FormField::Message => FormField::Email,
            FormField::Submit => FormField::Message,
        }
    }
}

/// Content of one row
#[derive(Debug, Clone, PartialEq)]
pub enum DocLine {
    Blank,
    Heading(String),
    Text { text: String, tone: Tone },
    /// Society name, typed in character by character
    TypedTitle,
    /// Hero counters
    Stats,
    /// Progress bar for the domain at this index
    Progress(usize),
    /// Input field of the contact form
    Field(FormField),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DocRow {
    pub line: DocLine,
    /// Reveal block this row belongs to
    pub block: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpan {
    pub id: SectionId,
    pub top: usize,
    pub height: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealBlock {
    pub top: usize,
    pub height: usize,
    pub effect: RevealEffect,
}

/// The laid-out page
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub rows: Vec<DocRow>,
    pub sections: Vec<SectionSpan>,
    pub blocks: Vec<RevealBlock>,
    /// Row of each domain's progress bar, by domain index
    pub progress_rows: Vec<usize>,
    pub width: usize,
}

impl Document {
    /// Lay out `content` for `width` text columns
    pub fn build(content: &SiteContent, width: usize) -> Self {
        let mut builder = DocBuilder::new(width.max(10));

        builder.begin_section(SectionId::Home);
        builder.blank();
        builder.push(DocLine::TypedTitle);
        builder.blank();
        builder.text(&content.tagline, Tone::Muted);
        builder.blank();
        if !content.stats.is_empty() {
            builder.push(DocLine::Stats);
            builder.blank();
        }
        builder.text("Press 1-6 to jump to a section, ? for help.", Tone::Muted);
        builder.blank();
        builder.end_section();

        builder.begin_section(SectionId::About);
        for feature in &content.features {
            builder.begin_block(RevealKind::Feature);
            builder.text(&format!("◆ {}", feature.title), Tone::Strong);
            builder.text(&feature.description, Tone::Normal);
            builder.blank();
            builder.end_block();
        }
        if !content.timeline.is_empty() {
            builder.text("Our Journey", Tone::Accent);
            builder.blank();
            for milestone in &content.timeline {
                builder.begin_block(RevealKind::Timeline);
                builder.text(&format!("{}  {}", milestone.year, milestone.text), Tone::Normal);
                builder.end_block();
            }
            builder.blank();
        }
        builder.end_section();

        builder.begin_section(SectionId::Domains);
        for index in 0..content.domains.len() {
            builder.progress(index);
        }
        builder.blank();
        builder.end_section();

        builder.begin_section(SectionId::Events);
        for event in &content.events {
            builder.begin_block(RevealKind::Card);
            builder.text(&format!("▸ {}", event.title), Tone::Strong);
            builder.text(&event.date, Tone::Accent);
            builder.text(&event.description, Tone::Normal);
            builder.blank();
            builder.end_block();
        }
        builder.end_section();

        builder.begin_section(SectionId::Team);
        for member in &content.members {
            builder.begin_block(RevealKind::Card);
            builder.text(&format!("● {}", member.name), Tone::Strong);
            builder.text(&member.role, Tone::Muted);
            builder.blank();
            builder.end_block();
        }
        builder.end_section();

        builder.begin_section(SectionId::Contact);
        for card in &content.contacts {
            builder.begin_block(RevealKind::Card);
            builder.text(&format!("{}: {}", card.label, card.value), Tone::Normal);
            builder.end_block();
        }
        builder.blank();
        builder.begin_block(RevealKind::Card);
        builder.push(DocLine::Field(FormField::Name));
        builder.push(DocLine::Field(FormField::Email));
        builder.push(DocLine::Field(FormField::Message));
        builder.blank();
        builder.push(DocLine::Field(FormField::Submit));
        builder.end_block();
        builder.blank();
        builder.end_section();

        builder.finish()
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn section(&self, id: SectionId) -> Option<&SectionSpan> {
        self.sections.iter().find(|span| span.id == id)
    }

    /// Reveal block containing the contact form
    pub fn form_block(&self) -> Option<usize> {
        self.rows.iter().find_map(|row| match row.line {
            DocLine::Field(_) => row.block,
            _ => None,
        })
    }
}

struct DocBuilder {
    width: usize,
    rows: Vec<DocRow>,
    sections: Vec<SectionSpan>,
    blocks: Vec<RevealBlock>,
    progress_rows: Vec<usize>,
    open_section: Option<(SectionId, usize)>,
    open_block: Option<usize>,
    animated: usize,
}

impl DocBuilder {
    fn new(width: usize) -> Self {
        Self {
            width,
            rows: Vec::new(),
            sections: Vec::new(),
            blocks: Vec::new(),
            progress_rows: Vec::new(),
            open_section: None,
            open_block: None,
            animated: 0,
        }
    }

    fn push(&mut self, line: DocLine) {
        self.rows.push(DocRow {
            line,
            block: self.open_block,
        });
    }

    fn blank(&mut self) {
        self.push(DocLine::Blank);
    }

    fn text(&mut self, text: &str, tone: Tone) {
        for line in wrap_text(text, self.width) {
            self.push(DocLine::Text { text: line, tone });
        }
    }

    fn progress(&mut self, index: usize) {
        self.progress_rows.push(self.rows.len());
        self.push(DocLine::Progress(index));
    }

    fn begin_section(&mut self, id: SectionId) {
        self.open_section = Some((id, self.rows.len()));
        let heading = id.heading();
        if !heading.is_empty() {
            self.push(DocLine::Heading(heading.to_string()));
            self.blank();
        }
    }

    fn end_section(&mut self) {
        if let Some((id, top)) = self.open_section.take() {
            self.sections.push(SectionSpan {
                id,
                top,
                height: self.rows.len() - top,
            });
        }
    }

    fn begin_block(&mut self, kind: RevealKind) {
        let effect = effect_for(kind, self.animated);
        self.animated += 1;
        self.open_block = Some(self.blocks.len());
        self.blocks.push(RevealBlock {
            top: self.rows.len(),
            height: 0,
            effect,
        });
    }

    fn end_block(&mut self) {
        if let Some(index) = self.open_block.take() {
            let rows = self.rows.len();
            if let Some(block) = self.blocks.get_mut(index) {
                block.height = rows - block.top;
            }
        }
    }

    fn finish(self) -> Document {
        Document {
            rows: self.rows,
            sections: self.sections,
            blocks: self.blocks,
            progress_rows: self.progress_rows,
            width: self.width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_are_contiguous_and_cover_document() {
        let doc = Document::build(&SiteContent::default(), 60);
        assert_eq!(doc.sections.len(), SectionId::ALL.len());

        let mut expected_top = 0;
        for (span, id) in doc.sections.iter().zip(SectionId::ALL) {
            assert_eq!(span.id, id);
            assert_eq!(span.top, expected_top);
            assert!(span.height > 0);
            expected_top += span.height;
        }
        assert_eq!(expected_top, doc.height());
    }

    #[test]
    fn test_blocks_match_row_tags() {
        let doc = Document::build(&SiteContent::default(), 60);
        for (index, block) in doc.blocks.iter().enumerate() {
            assert!(block.height > 0);
            for row in &doc.rows[block.top..block.top + block.height] {
                assert_eq!(row.block, Some(index));
            }
        }
    }

    #[test]
    fn test_block_count_is_width_independent() {
        let content = SiteContent::default();
        let wide = Document::build(&content, 100);
        let narrow = Document::build(&content, 20);
        assert_eq!(wide.blocks.len(), narrow.blocks.len());
        assert_eq!(wide.progress_rows.len(), narrow.progress_rows.len());
        assert!(narrow.height() > wide.height());
    }

    #[test]
    fn test_features_fade_and_cards_alternate() {
        let content = SiteContent::default();
        let doc = Document::build(&content, 60);
        let fades = content.features.len() + content.timeline.len();

        assert!(doc.blocks[..fades]
            .iter()
            .all(|block| block.effect == RevealEffect::FadeIn));

        let first_card = doc.blocks[fades].effect;
        let second_card = doc.blocks[fades + 1].effect;
        assert_ne!(first_card, second_card);
        assert_ne!(first_card, RevealEffect::FadeIn);
    }

    #[test]
    fn test_progress_rows_point_at_progress_lines() {
        let doc = Document::build(&SiteContent::default(), 60);
        for (index, &row) in doc.progress_rows.iter().enumerate() {
            assert_eq!(doc.rows[row].line, DocLine::Progress(index));
        }
    }

    #[test]
    fn test_form_block_exists() {
        let doc = Document::build(&SiteContent::default(), 60);
        let block = doc.form_block().expect("form block");
        assert_eq!(block, doc.blocks.len() - 1);
    }

    #[test]
    fn test_empty_content_still_has_all_sections() {
        let content = SiteContent {
            stats: vec![],
            features: vec![],
            timeline: vec![],
            domains: vec![],
            events: vec![],
            members: vec![],
            contacts: vec![],
            ..SiteContent::default()
        };
        let doc = Document::build(&content, 40);
        assert_eq!(doc.sections.len(), 6);
        assert!(doc.progress_rows.is_empty());
        assert!(!doc.rows.iter().any(|row| row.line == DocLine::Stats));
    }

    #[test]
    fn test_form_field_focus_cycle() {
        let mut field = FormField::Name;
        for _ in 0..4 {
            field = field.next();
        }
        assert_eq!(field, FormField::Name);
        assert_eq!(FormField::Name.prev(), FormField::Submit);
    }

    #[test]
    fn test_section_index_round_trip() {
        for id in SectionId::ALL {
            assert_eq!(SectionId::from_index(id.index()), Some(id));
        }
        assert_eq!(SectionId::from_index(6), None);
    }
}
