use super::block::ContentBlock;

/// An ordered batch of content blocks plus the running header title
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportDocument {
    pub header_title: String,
    pub blocks: Vec<ContentBlock>,
}

impl ReportDocument {
    pub fn new(header_title: impl Into<String>) -> Self {
        Self {
            header_title: header_title.into(),
            blocks: Vec::new(),
        }
    }

    pub fn push(&mut self, block: ContentBlock) -> &mut Self {
        self.blocks.push(block);
        self
    }

    pub fn extend(&mut self, blocks: impl IntoIterator<Item = ContentBlock>) -> &mut Self {
        self.blocks.extend(blocks);
        self
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
