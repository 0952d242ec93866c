//! Debug visualization of a section list.
//!
//! [`SectionTreeDebug`] renders sections and their rows as a text tree, which
//! is handy in logs when a widget shows something other than what the
//! adapter believes it holds.
//!
//! ```text
//! Sections (2 sections, 3 rows):
//! ├── section 0 header=Feed.DayHeader height=28
//! │  ├── [0, 0] Feed.PostCell (auto)
//! │  └── [0, 1] Feed.PostCell (auto)
//! └── section 1
//!    └── [1, 0] Feed.AdCell (120)
//! ```

use std::fmt::Write as FmtWrite;

use super::index::IndexPath;
use super::item::RowHeight;
use super::section::Section;

/// Style options for tree visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TreeStyle {
    /// ASCII characters for tree branches.
    Ascii,
    /// Unicode box-drawing characters.
    #[default]
    Unicode,
    /// Compact dash-prefixed representation.
    Compact,
}

/// Configuration for section tree output.
#[derive(Debug, Clone)]
pub struct TreeFormatOptions {
    /// The style of tree visualization.
    pub style: TreeStyle,
    /// Whether to show row heights.
    pub show_heights: bool,
    /// Maximum rows listed per section (None for unlimited).
    pub max_rows: Option<usize>,
    /// Indent size for each level.
    pub indent_size: usize,
}

impl Default for TreeFormatOptions {
    fn default() -> Self {
        Self {
            style: TreeStyle::default(),
            show_heights: true,
            max_rows: None,
            indent_size: 2,
        }
    }
}

impl TreeFormatOptions {
    /// Create options for minimal output: ASCII, no heights, ten rows per section.
    pub fn minimal() -> Self {
        Self {
            style: TreeStyle::Ascii,
            show_heights: false,
            max_rows: Some(10),
            ..Default::default()
        }
    }
}

/// Debug utility for visualizing a list of sections.
#[derive(Debug, Clone, Default)]
pub struct SectionTreeDebug {
    options: TreeFormatOptions,
}

impl SectionTreeDebug {
    /// Create a new visualizer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a visualizer with custom options.
    pub fn with_options(options: TreeFormatOptions) -> Self {
        Self { options }
    }

    /// Format the given sections as a tree.
    pub fn format(&self, sections: &[Section]) -> String {
        let total_rows: usize = sections.iter().map(Section::len).sum();
        let mut output = String::new();
        let _ = writeln!(
            output,
            "Sections ({} sections, {} rows):",
            sections.len(),
            total_rows
        );

        if sections.is_empty() {
            let _ = writeln!(output, "  (empty)");
            return output;
        }

        let section_count = sections.len();
        for (index, section) in sections.iter().enumerate() {
            self.format_section_into(index, section, index + 1 == section_count, &mut output);
        }
        output
    }

    fn format_section_into(&self, index: usize, section: &Section, is_last: bool, output: &mut String) {
        output.push_str(&self.build_prefix(&[], is_last));
        let _ = write!(output, "section {index}");
        if let Some(header) = section.header_reuse_identifier() {
            let _ = write!(output, " header={header}");
        }
        if let Some(height) = section.header_height() {
            let _ = write!(output, " height={height}");
        }
        output.push('\n');

        let shown = self
            .options
            .max_rows
            .map_or(section.len(), |max| max.min(section.len()));
        let hidden = section.len() - shown;

        for (row, item) in section.items().iter().take(shown).enumerate() {
            let row_is_last = hidden == 0 && row + 1 == shown;
            output.push_str(&self.build_prefix(&[is_last], row_is_last));
            let _ = write!(output, "{} {}", IndexPath::new(row, index), item.reuse_identifier());
            if self.options.show_heights {
                match item.height() {
                    RowHeight::Automatic => output.push_str(" (auto)"),
                    RowHeight::Fixed(height) => {
                        let _ = write!(output, " ({height})");
                    }
                }
            }
            output.push('\n');
        }

        if hidden > 0 {
            output.push_str(&self.build_prefix(&[is_last], true));
            let _ = writeln!(output, "... {hidden} more");
        }
    }

    /// Build the prefix for a node. `ancestors_last` holds, for each parent
    /// level, whether that parent was the last of its siblings.
    fn build_prefix(&self, ancestors_last: &[bool], is_last: bool) -> String {
        let (branch, tee, corner) = match self.options.style {
            TreeStyle::Ascii => ("|", "+--", "`--"),
            TreeStyle::Unicode => ("\u{2502}", "\u{251c}\u{2500}\u{2500}", "\u{2514}\u{2500}\u{2500}"),
            TreeStyle::Compact => ("", "-", "-"),
        };

        let mut prefix = String::new();
        for &parent_last in ancestors_last {
            prefix.push_str(if parent_last { " " } else { branch });
            for _ in 0..self.options.indent_size {
                prefix.push(' ');
            }
        }
        prefix.push_str(if is_last { corner } else { tee });
        prefix.push(' ');
        prefix
    }
}
