// src/renderer.rs
//! Fixed-layout PDF rendering of a [`ResumeRecord`].
//!
//! Rendering happens in two stages: [`story`] flattens the record into an
//! ordered sequence of layout blocks (title, contact line, section headings,
//! paragraphs, spacers), then the composer flows those blocks onto US letter
//! pages with half-inch margins, breaking pages as needed. Rendering is a
//! pure transformation and does not fail for any record that deserialized,
//! however degenerate the field values are.

use anyhow::{anyhow, Result};
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Point, Rgb,
};

use crate::types::resume::{nonempty, Education, Experience, PersonalInfo, ResumeRecord};
use crate::utils::join_nonempty;

const PAGE_WIDTH_MM: f32 = 215.9; // US letter
const PAGE_HEIGHT_MM: f32 = 279.4;
const MARGIN_MM: f32 = 12.7; // 0.5 inch on all sides

const PT_TO_MM: f32 = 0.352_778;
const LINE_FACTOR: f32 = 1.3;

const TITLE_SIZE: f32 = 22.0;
const HEADING_SIZE: f32 = 14.0;
const CONTACT_SIZE: f32 = 10.0;
const BODY_SIZE: f32 = 10.0;

const TITLE_SPACE_AFTER: f32 = 12.0 * PT_TO_MM;
const CONTACT_SPACE_AFTER: f32 = 12.0 * PT_TO_MM;
const HEADING_SPACE_BEFORE: f32 = 12.0 * PT_TO_MM;
const HEADING_SPACE_AFTER: f32 = 6.0 * PT_TO_MM;
const SECTION_SPACER: f32 = 12.0 * PT_TO_MM;
const EXPERIENCE_SPACER: f32 = 8.0 * PT_TO_MM;
const HEADING_BORDER_PAD: f32 = 3.0 * PT_TO_MM;

/// One layout block in the flowed document.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Title(String),
    Contact(String),
    Heading(&'static str),
    LabeledLine { lead: String, rest: String },
    Paragraph(String),
    Spacer(f32),
}

/// Render a resume into a complete PDF byte stream.
pub fn render(resume: &ResumeRecord) -> Result<Vec<u8>> {
    let mut page = Composer::new()?;

    for block in story(resume) {
        match block {
            Block::Title(text) => page.centered(&text, TITLE_SIZE, FontKind::Bold, accent()),
            Block::Contact(text) => page.centered(&text, CONTACT_SIZE, FontKind::Regular, black()),
            Block::Heading(text) => page.heading(text),
            Block::LabeledLine { lead, rest } => page.labeled_line(&lead, &rest, BODY_SIZE),
            Block::Paragraph(text) => page.paragraph(&text, BODY_SIZE),
            Block::Spacer(height) => page.spacer(height),
        }
    }

    page.finish()
}

/// Flatten a record into the ordered block sequence: title, contact line,
/// then the PROFESSIONAL SUMMARY / WORK EXPERIENCE / EDUCATION / SKILLS
/// sections. Single pass, no backtracking.
pub fn story(resume: &ResumeRecord) -> Vec<Block> {
    let mut story = Vec::new();

    story.push(Block::Title(resume.personal_info.name.clone()));
    story.push(Block::Spacer(TITLE_SPACE_AFTER));
    story.push(Block::Contact(contact_line(&resume.personal_info)));
    story.push(Block::Spacer(CONTACT_SPACE_AFTER));

    story.push(Block::Heading("PROFESSIONAL SUMMARY"));
    story.push(Block::Paragraph(resume.summary.clone()));
    story.push(Block::Spacer(SECTION_SPACER));

    story.push(Block::Heading("WORK EXPERIENCE"));
    for exp in resume.experiences.iter().filter(|e| e.is_renderable()) {
        let (lead, rest) = experience_header(exp);
        story.push(Block::LabeledLine { lead, rest });
        for paragraph in description_paragraphs(exp.display_description()) {
            story.push(Block::Paragraph(paragraph));
        }
        story.push(Block::Spacer(EXPERIENCE_SPACER));
    }

    story.push(Block::Heading("EDUCATION"));
    let (lead, rest) = education_line(&resume.education);
    story.push(Block::LabeledLine { lead, rest });
    story.push(Block::Spacer(SECTION_SPACER));

    story.push(Block::Heading("SKILLS"));
    story.push(Block::Paragraph(resume.skills.clone()));

    story
}

/// Contact line under the title: email and phone first, then whichever of
/// location, linkedin and github are present, in that fixed order.
pub fn contact_line(info: &PersonalInfo) -> String {
    let mut parts: Vec<&str> = vec![&info.email, &info.phone];
    parts.extend(nonempty(&info.location));
    parts.extend(nonempty(&info.linkedin));
    parts.extend(nonempty(&info.github));
    parts.join(" | ")
}

/// Experience header as (bold lead, regular remainder). The date range is
/// appended only when both dates are present.
pub fn experience_header(exp: &Experience) -> (String, String) {
    let mut rest = format!(" | {}", exp.company);
    if let (Some(start), Some(end)) = (nonempty(&exp.start_date), nonempty(&exp.end_date)) {
        rest.push_str(&format!(" | {} - {}", start, end));
    }
    (exp.title.clone(), rest)
}

/// Education line as (bold degree, regular remainder).
pub fn education_line(education: &Education) -> (String, String) {
    let rest = join_nonempty(
        " | ",
        [
            nonempty(&education.university).unwrap_or(""),
            nonempty(&education.graduation_year).unwrap_or(""),
            nonempty(&education.gpa).unwrap_or(""),
        ],
    );
    let rest = if rest.is_empty() {
        String::new()
    } else {
        format!(" | {}", rest)
    };
    (education.degree.clone(), rest)
}

/// Split a description into renderable paragraphs.
///
/// Text that already carries the bullet glyph is emitted as a single
/// untouched paragraph. Anything else is split on newlines and every
/// non-blank line becomes its own bulleted paragraph.
pub fn description_paragraphs(description: &str) -> Vec<String> {
    if description.contains('•') {
        return vec![description.to_string()];
    }

    description
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            (!trimmed.is_empty()).then(|| format!("• {}", trimmed))
        })
        .collect()
}

#[derive(Clone, Copy)]
enum FontKind {
    Regular,
    Bold,
}

fn accent() -> Color {
    // darkblue
    Color::Rgb(Rgb::new(0.0, 0.0, 0.545, None))
}

fn black() -> Color {
    Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None))
}

/// Cursor-based page composer: emits lines top to bottom and opens a fresh
/// page whenever the next line would cross the bottom margin.
struct Composer {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    y: f32,
}

impl Composer {
    fn new() -> Result<Self> {
        let (doc, page, layer) = PdfDocument::new(
            "Resume",
            Mm(PAGE_WIDTH_MM),
            Mm(PAGE_HEIGHT_MM),
            "Layer 1",
        );
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| anyhow!("Failed to load builtin font: {}", e))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| anyhow!("Failed to load builtin font: {}", e))?;
        let layer = doc.get_page(page).get_layer(layer);

        Ok(Self {
            doc,
            layer,
            regular,
            bold,
            y: PAGE_HEIGHT_MM - MARGIN_MM,
        })
    }

    fn font(&self, kind: FontKind) -> &IndirectFontRef {
        match kind {
            FontKind::Regular => &self.regular,
            FontKind::Bold => &self.bold,
        }
    }

    fn break_page(&mut self) {
        let (page, layer) = self
            .doc
            .add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.y = PAGE_HEIGHT_MM - MARGIN_MM;
    }

    fn ensure_room(&mut self, needed: f32) {
        if self.y - needed < MARGIN_MM {
            self.break_page();
        }
    }

    fn spacer(&mut self, height: f32) {
        self.y -= height;
        if self.y < MARGIN_MM {
            self.break_page();
        }
    }

    fn write(&self, text: &str, size: f32, kind: FontKind, color: Color, x: f32) {
        self.layer.set_fill_color(color);
        self.layer
            .use_text(text, size, Mm(x), Mm(self.y), self.font(kind));
    }

    /// Left-aligned paragraph, word-wrapped to the content width.
    fn paragraph(&mut self, text: &str, size: f32) {
        let max_width = PAGE_WIDTH_MM - 2.0 * MARGIN_MM;
        let leading = size * LINE_FACTOR * PT_TO_MM;
        for line in wrap_text(text, size, false, max_width) {
            self.ensure_room(leading);
            self.y -= leading;
            self.write(&line, size, FontKind::Regular, black(), MARGIN_MM);
        }
    }

    /// Centered line(s), wrapped if necessary.
    fn centered(&mut self, text: &str, size: f32, kind: FontKind, color: Color) {
        let max_width = PAGE_WIDTH_MM - 2.0 * MARGIN_MM;
        let leading = size * LINE_FACTOR * PT_TO_MM;
        let bold = matches!(kind, FontKind::Bold);
        for line in wrap_text(text, size, bold, max_width) {
            self.ensure_room(leading);
            self.y -= leading;
            let x = (PAGE_WIDTH_MM - text_width_mm(&line, size, bold)) / 2.0;
            self.write(&line, size, kind, color.clone(), x.max(MARGIN_MM));
        }
    }

    /// One line starting with a bold lead, continued in the regular face.
    /// Headers wider than the content width are reflowed word by word.
    fn labeled_line(&mut self, lead: &str, rest: &str, size: f32) {
        let leading = size * LINE_FACTOR * PT_TO_MM;
        let max_width = PAGE_WIDTH_MM - 2.0 * MARGIN_MM;

        if text_width_mm(lead, size, true) + text_width_mm(rest, size, false) <= max_width {
            self.ensure_room(leading);
            self.y -= leading;
            self.write(lead, size, FontKind::Bold, black(), MARGIN_MM);
            if !rest.is_empty() {
                let x = MARGIN_MM + text_width_mm(lead, size, true);
                self.write(rest, size, FontKind::Regular, black(), x);
            }
            return;
        }

        let words = lead
            .split_whitespace()
            .map(|word| (word.to_string(), true))
            .chain(
                rest.split_whitespace()
                    .map(|word| (word.to_string(), false)),
            )
            .collect();
        let space = text_width_mm(" ", size, false);
        for line in flow_words(words, size, max_width) {
            self.ensure_room(leading);
            self.y -= leading;
            let mut x = MARGIN_MM;
            for (word, bold) in line {
                let kind = if bold { FontKind::Bold } else { FontKind::Regular };
                let width = text_width_mm(&word, size, bold);
                self.write(&word, size, kind, black(), x);
                x += width + space;
            }
        }
    }

    /// Bordered, colored section heading with fixed spacing around it.
    fn heading(&mut self, text: &str) {
        let leading = HEADING_SIZE * LINE_FACTOR * PT_TO_MM;
        let ascent = HEADING_SIZE * 0.72 * PT_TO_MM;

        self.spacer(HEADING_SPACE_BEFORE);
        self.ensure_room(leading + 2.0 * HEADING_BORDER_PAD);
        self.y -= leading;

        let top = self.y + ascent + HEADING_BORDER_PAD;
        let bottom = self.y - HEADING_BORDER_PAD;
        self.layer.set_outline_color(accent());
        self.layer.set_outline_thickness(0.75);
        self.layer.add_line(Line {
            points: vec![
                (Point::new(Mm(MARGIN_MM), Mm(bottom)), false),
                (Point::new(Mm(PAGE_WIDTH_MM - MARGIN_MM), Mm(bottom)), false),
                (Point::new(Mm(PAGE_WIDTH_MM - MARGIN_MM), Mm(top)), false),
                (Point::new(Mm(MARGIN_MM), Mm(top)), false),
            ],
            is_closed: true,
        });

        self.write(
            text,
            HEADING_SIZE,
            FontKind::Bold,
            accent(),
            MARGIN_MM + HEADING_BORDER_PAD,
        );
        self.spacer(HEADING_SPACE_AFTER);
    }

    fn finish(self) -> Result<Vec<u8>> {
        let Composer { doc, layer, .. } = self;
        drop(layer);
        doc.save_to_bytes()
            .map_err(|e| anyhow!("Failed to serialize PDF: {}", e))
    }
}

/// Approximate advance width of one character in Helvetica, in em units.
/// Exact metrics are unnecessary here: widths only drive centering and the
/// greedy word-wrap, both of which tolerate a few percent of error.
fn char_em(c: char) -> f32 {
    match c {
        'i' | 'j' | 'l' | '!' | '|' | '\'' | '.' | ',' | ':' | ';' => 0.28,
        'f' | 't' | 'r' | 'I' | ' ' | '(' | ')' | '[' | ']' | '-' => 0.33,
        'm' | 'w' | 'M' | 'W' | '@' => 0.89,
        '•' => 0.35,
        c if c.is_ascii_uppercase() => 0.72,
        c if c.is_ascii_digit() => 0.56,
        _ => 0.52,
    }
}

fn text_width_mm(text: &str, size_pt: f32, bold: bool) -> f32 {
    let weight = if bold { 1.05 } else { 1.0 };
    text.chars().map(char_em).sum::<f32>() * size_pt * weight * PT_TO_MM
}

/// Greedy word wrap against an estimated line width. A single word wider
/// than the line is emitted on its own line rather than broken.
fn wrap_text(text: &str, size: f32, bold: bool, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", current, word)
        };

        if current.is_empty() || text_width_mm(&candidate, size, bold) <= max_width {
            current = candidate;
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Greedy line planning over mixed bold/regular words, for header lines
/// that overflow the content width.
fn flow_words(words: Vec<(String, bool)>, size: f32, max_width: f32) -> Vec<Vec<(String, bool)>> {
    let space = text_width_mm(" ", size, false);
    let mut lines: Vec<Vec<(String, bool)>> = Vec::new();
    let mut current: Vec<(String, bool)> = Vec::new();
    let mut width = 0.0;

    for (word, bold) in words {
        let advance = text_width_mm(&word, size, bold);
        if current.is_empty() {
            width = advance;
        } else if width + space + advance <= max_width {
            width += space + advance;
        } else {
            lines.push(std::mem::take(&mut current));
            width = advance;
        }
        current.push((word, bold));
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn personal_info() -> PersonalInfo {
        PersonalInfo {
            name: "John Doe".to_string(),
            email: "john.doe@email.com".to_string(),
            phone: "+91 98765 43210".to_string(),
            linkedin: None,
            github: None,
            location: None,
        }
    }

    fn minimal_record() -> ResumeRecord {
        ResumeRecord {
            personal_info: personal_info(),
            summary: "Software developer with two years of experience.".to_string(),
            experiences: vec![Experience {
                title: "Software Developer".to_string(),
                company: "Acme Corp".to_string(),
                start_date: Some("Jan 2023".to_string()),
                end_date: Some("Present".to_string()),
                description: "Built web applications".to_string(),
                enhanced_description: None,
            }],
            education: Education {
                degree: "B.Tech in Computer Science".to_string(),
                university: Some("IIT".to_string()),
                graduation_year: Some("2022".to_string()),
                gpa: None,
            },
            skills: "Python, Rust, SQL".to_string(),
        }
    }

    fn position(story: &[Block], block: &Block) -> usize {
        story
            .iter()
            .position(|candidate| candidate == block)
            .unwrap_or_else(|| panic!("block not found: {:?}", block))
    }

    #[test]
    fn test_render_produces_pdf_bytes() {
        let bytes = render(&minimal_record()).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert!(bytes.len() > 500);
    }

    #[test]
    fn test_render_survives_degenerate_record() {
        let record = ResumeRecord {
            personal_info: PersonalInfo {
                name: String::new(),
                email: String::new(),
                phone: String::new(),
                linkedin: None,
                github: None,
                location: None,
            },
            summary: String::new(),
            experiences: vec![],
            education: Education {
                degree: String::new(),
                university: None,
                graduation_year: None,
                gpa: None,
            },
            skills: String::new(),
        };
        let bytes = render(&record).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_render_flows_across_pages() {
        let mut record = minimal_record();
        record.experiences[0].description = (0..200)
            .map(|i| format!("Accomplished item number {} on the project", i))
            .collect::<Vec<_>>()
            .join("\n");
        let bytes = render(&record).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_story_orders_sections() {
        let story = story(&minimal_record());

        let title = position(&story, &Block::Title("John Doe".to_string()));
        let contact = position(
            &story,
            &Block::Contact("john.doe@email.com | +91 98765 43210".to_string()),
        );
        let summary_heading = position(&story, &Block::Heading("PROFESSIONAL SUMMARY"));
        let summary = position(
            &story,
            &Block::Paragraph("Software developer with two years of experience.".to_string()),
        );
        let work_heading = position(&story, &Block::Heading("WORK EXPERIENCE"));
        let job = position(
            &story,
            &Block::LabeledLine {
                lead: "Software Developer".to_string(),
                rest: " | Acme Corp | Jan 2023 - Present".to_string(),
            },
        );
        let bullet = position(
            &story,
            &Block::Paragraph("• Built web applications".to_string()),
        );
        let education_heading = position(&story, &Block::Heading("EDUCATION"));
        let skills_heading = position(&story, &Block::Heading("SKILLS"));
        let skills = position(&story, &Block::Paragraph("Python, Rust, SQL".to_string()));

        let order = [
            title,
            contact,
            summary_heading,
            summary,
            work_heading,
            job,
            bullet,
            education_heading,
            skills_heading,
            skills,
        ];
        assert!(order.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_story_skips_incomplete_experiences() {
        let mut record = minimal_record();
        record.experiences.insert(
            0,
            Experience {
                title: String::new(),
                company: "Ghost Inc".to_string(),
                start_date: None,
                end_date: None,
                description: "never shown".to_string(),
                enhanced_description: None,
            },
        );
        record.experiences.push(Experience {
            title: "Phantom".to_string(),
            company: String::new(),
            start_date: None,
            end_date: None,
            description: "never shown either".to_string(),
            enhanced_description: None,
        });

        let story = story(&record);
        let headers: Vec<_> = story
            .iter()
            .filter(|block| matches!(block, Block::LabeledLine { .. }))
            .collect();

        // one experience header plus the education line
        assert_eq!(headers.len(), 2);
        assert!(!story.iter().any(|block| match block {
            Block::LabeledLine { rest, .. } => rest.contains("Ghost Inc"),
            Block::Paragraph(text) => text.contains("never shown"),
            _ => false,
        }));
    }

    #[test]
    fn test_contact_line_omits_empty_optionals() {
        let mut info = personal_info();
        info.location = Some("Mumbai".to_string());
        assert_eq!(
            contact_line(&info),
            "john.doe@email.com | +91 98765 43210 | Mumbai"
        );
    }

    #[test]
    fn test_contact_line_preserves_fixed_order() {
        let mut info = personal_info();
        info.github = Some("github.com/jd".to_string());
        info.linkedin = Some("linkedin.com/in/jd".to_string());
        info.location = Some("Mumbai".to_string());
        assert_eq!(
            contact_line(&info),
            "john.doe@email.com | +91 98765 43210 | Mumbai | linkedin.com/in/jd | github.com/jd"
        );
    }

    #[test]
    fn test_experience_header_with_both_dates() {
        let exp = Experience {
            title: "Dev".to_string(),
            company: "Acme".to_string(),
            start_date: Some("Jan 2023".to_string()),
            end_date: Some("Dec 2023".to_string()),
            description: String::new(),
            enhanced_description: None,
        };
        let (title, rest) = experience_header(&exp);
        assert_eq!(title, "Dev");
        assert_eq!(rest, " | Acme | Jan 2023 - Dec 2023");
    }

    #[test]
    fn test_experience_header_drops_partial_date_range() {
        let mut exp = Experience {
            title: "Dev".to_string(),
            company: "Acme".to_string(),
            start_date: Some("Jan 2023".to_string()),
            end_date: None,
            description: String::new(),
            enhanced_description: None,
        };
        assert_eq!(experience_header(&exp).1, " | Acme");

        exp.start_date = None;
        exp.end_date = Some("Dec 2023".to_string());
        assert_eq!(experience_header(&exp).1, " | Acme");

        exp.end_date = Some(String::new());
        assert_eq!(experience_header(&exp).1, " | Acme");
    }

    #[test]
    fn test_description_with_bullets_stays_untouched() {
        let source = "• Shipped feature A\n• Shipped feature B";
        assert_eq!(description_paragraphs(source), vec![source.to_string()]);
    }

    #[test]
    fn test_description_without_bullets_is_split_and_prefixed() {
        let source = "Shipped feature A\n\n  Shipped feature B  \n";
        assert_eq!(
            description_paragraphs(source),
            vec![
                "• Shipped feature A".to_string(),
                "• Shipped feature B".to_string(),
            ]
        );
    }

    #[test]
    fn test_empty_description_yields_no_paragraphs() {
        assert!(description_paragraphs("").is_empty());
        assert!(description_paragraphs("   \n  ").is_empty());
    }

    #[test]
    fn test_education_line_joins_present_fields() {
        let education = Education {
            degree: "B.Sc".to_string(),
            university: Some("MIT".to_string()),
            graduation_year: None,
            gpa: Some("3.9".to_string()),
        };
        let (degree, rest) = education_line(&education);
        assert_eq!(degree, "B.Sc");
        assert_eq!(rest, " | MIT | 3.9");
    }

    #[test]
    fn test_education_line_with_degree_only() {
        let education = Education {
            degree: "B.Sc".to_string(),
            university: None,
            graduation_year: None,
            gpa: None,
        };
        assert_eq!(
            education_line(&education),
            ("B.Sc".to_string(), String::new())
        );
    }

    #[test]
    fn test_render_wraps_long_centered_name() {
        let mut record = minimal_record();
        record.personal_info.name =
            "Johannes Maximilian Alexander von Hohenberg-Wittgenstein the Third Esquire"
                .to_string();
        let bytes = render(&record).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_render_wraps_long_experience_header() {
        let mut record = minimal_record();
        record.experiences[0].company =
            "International Consolidated Amalgamated Enterprises of Greater Metropolitan \
             Industrial Holdings and Diversified Technology Services Incorporated"
                .to_string();
        let bytes = render(&record).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_flow_words_breaks_wide_header_and_keeps_faces() {
        let words: Vec<(String, bool)> = "Principal Software Engineer"
            .split_whitespace()
            .map(|w| (w.to_string(), true))
            .chain(
                "| Amalgamated Consolidated Industries | Jan 2020 - Dec 2024"
                    .split_whitespace()
                    .map(|w| (w.to_string(), false)),
            )
            .collect();
        let total = words.len();

        let lines = flow_words(words, BODY_SIZE, 40.0);
        assert!(lines.len() > 1);
        assert_eq!(lines.iter().map(|line| line.len()).sum::<usize>(), total);
        assert!(lines[0][0].1, "lead words keep the bold face");
        let last = lines.last().unwrap();
        assert!(!last.last().unwrap().1, "trailing words are regular");
    }

    #[test]
    fn test_flow_words_fits_short_header_on_one_line() {
        let words = vec![
            ("Dev".to_string(), true),
            ("|".to_string(), false),
            ("Acme".to_string(), false),
        ];
        let lines = flow_words(words, BODY_SIZE, PAGE_WIDTH_MM - 2.0 * MARGIN_MM);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].len(), 3);
    }

    #[test]
    fn test_wrap_text_splits_long_lines() {
        let text = "one two three four five six seven eight nine ten";
        let lines = wrap_text(text, 10.0, false, 30.0);
        assert!(lines.len() > 1);
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn test_wrap_text_keeps_oversized_word_whole() {
        let lines = wrap_text("supercalifragilisticexpialidocious", 10.0, false, 5.0);
        assert_eq!(
            lines,
            vec!["supercalifragilisticexpialidocious".to_string()]
        );
    }
}
