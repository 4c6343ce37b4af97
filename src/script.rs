//! Extraction of fenced Pine Script blocks from chat-style text.
//!
//! Assistant responses embed generated scripts in triple-backtick fences,
//! optionally tagged `pinescript` or `pine`. This module pulls those blocks
//! out with plain string scanning; no parsing of the script itself happens
//! here.

use serde::Serialize;

const FENCE: &str = "```";

/// One fenced code block found in a piece of text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CodeBlock {
    /// The fence tag, lowercased; empty when the fence was untagged.
    pub language: String,
    pub code: String,
}

impl CodeBlock {
    /// Whether the block is (or plausibly is) Pine Script: tagged `pine`/
    /// `pinescript`, or untagged.
    pub fn is_pine(&self) -> bool {
        matches!(self.language.as_str(), "" | "pine" | "pinescript")
    }
}

/// Scans `text` for triple-backtick fences and returns every complete block.
/// An unterminated trailing fence is ignored.
pub fn extract_code_blocks(text: &str) -> Vec<CodeBlock> {
    let mut blocks = Vec::new();
    let mut rest = text;

    while let Some(open) = rest.find(FENCE) {
        let after_open = &rest[open + FENCE.len()..];
        let Some(close) = after_open.find(FENCE) else {
            break;
        };
        let fenced = &after_open[..close];

        // The fence tag is whatever sits between the backticks and the first
        // newline; without a newline the "block" is inline and skipped.
        match fenced.split_once('\n') {
            Some((tag, body)) if tag.trim().chars().all(|c| c.is_alphanumeric()) => {
                blocks.push(CodeBlock {
                    language: tag.trim().to_lowercase(),
                    code: body.trim_end().trim_start_matches('\n').to_string(),
                });
            }
            _ => {}
        }
        rest = &after_open[close + FENCE.len()..];
    }

    blocks
}

/// Convenience filter over [`extract_code_blocks`] for Pine-tagged blocks.
pub fn extract_pine_blocks(text: &str) -> Vec<CodeBlock> {
    extract_code_blocks(text)
        .into_iter()
        .filter(CodeBlock::is_pine)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_tagged_block() {
        let text = "Here is your strategy:\n```pinescript\n//@version=5\nstrategy(\"x\")\n```\nEnjoy!";
        let blocks = extract_code_blocks(text);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].language, "pinescript");
        assert!(blocks[0].code.starts_with("//@version=5"));
        assert!(blocks[0].is_pine());
    }

    #[test]
    fn untagged_block_counts_as_pine() {
        let text = "```\nplot(close)\n```";
        let blocks = extract_pine_blocks(text);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].code, "plot(close)");
    }

    #[test]
    fn foreign_language_is_kept_but_not_pine() {
        let text = "```python\nprint(1)\n```";
        let blocks = extract_code_blocks(text);
        assert_eq!(blocks.len(), 1);
        assert!(!blocks[0].is_pine());
        assert!(extract_pine_blocks(text).is_empty());
    }

    #[test]
    fn unterminated_fence_is_ignored() {
        assert!(extract_code_blocks("```pine\nplot(close)").is_empty());
    }

    #[test]
    fn multiple_blocks_in_order() {
        let text = "```pine\na\n```\ntext\n```pine\nb\n```";
        let blocks = extract_code_blocks(text);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].code, "a");
        assert_eq!(blocks[1].code, "b");
    }
}
