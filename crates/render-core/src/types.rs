//! Output model for rendered documents.

/// Inline-level content within a paragraph or heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedInline {
    /// A run of plain text.
    Text(String),
    /// A strong-emphasis wrapper.
    Strong(Vec<RenderedInline>),
    /// An emphasis wrapper.
    Emphasis(Vec<RenderedInline>),
    /// An underline wrapper.
    Underline(Vec<RenderedInline>),
    /// A hyperlink.
    Link {
        href: String,
        children: Vec<RenderedInline>,
    },
}

/// A block-level element of the rendered output, suitable for direct
/// inclusion in a page's markup tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedBlock {
    Paragraph {
        children: Vec<RenderedInline>,
    },
    Heading {
        level: u8,
        children: Vec<RenderedInline>,
    },
    List {
        ordered: bool,
        children: Vec<RenderedBlock>,
    },
    ListItem {
        children: Vec<RenderedBlock>,
    },
    Quote {
        children: Vec<RenderedBlock>,
    },
    ThematicBreak,
    /// A full-width figure from an embedded asset. `src` carries the
    /// `https:` scheme already.
    Figure {
        src: String,
        alt: String,
        caption: Option<String>,
    },
    /// A floated or centered figure from an `imageEntry` embed.
    PositionedFigure {
        src: String,
        alt: String,
        caption: Option<String>,
        placement: Placement,
    },
    /// A playable video embed.
    Video {
        embed_url: String,
        title: Option<String>,
        description: Option<String>,
    },
    /// A visible inline error block for a video reference whose identifier
    /// could not be extracted.
    VideoError {
        url: String,
    },
}

/// Horizontal flow intent for a positioned figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloatMode {
    Left,
    Right,
    Centered,
}

impl FloatMode {
    pub fn as_str(self) -> &'static str {
        match self {
            FloatMode::Left => "float-left",
            FloatMode::Right => "float-right",
            FloatMode::Centered => "centered",
        }
    }
}

/// Clearance intent for a positioned figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearMode {
    None,
    Both,
}

impl ClearMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ClearMode::None => "clear-none",
            ClearMode::Both => "clear-both",
        }
    }
}

/// The fixed pair of layout-intent tags for a positioned figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub float: FloatMode,
    pub clear: ClearMode,
}

/// Rendering configuration.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Nodes deeper than this are skipped; the source format does not
    /// guarantee acyclicity.
    pub max_depth: usize,
    /// Alt text used when an embedded image carries no title or caption.
    pub fallback_alt: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            max_depth: 64,
            fallback_alt: "Article Image".to_string(),
        }
    }
}
