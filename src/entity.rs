/// One unit of parsed output, consumed by a display layer.
///
/// The renderer produces these fresh on every call; they carry no
/// identity beyond value equality.
#[derive(Clone, Debug, PartialEq)]
pub enum MarkupNode {
    /// ATX heading, level 1 or 2, with the marker prefix stripped.
    Heading(u8, String),
    /// Fenced code block: language tag (possibly empty) and the raw
    /// buffered lines in order, leading whitespace intact.
    CodeBlock(String, Vec<String>),
    /// Any other non-blank line, untrimmed.
    Paragraph(String),
}

/// A bundled documentation section.
#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub content: &'static str,
}
