//! Page-flow engine
//!
//! Walks a [`ReportDocument`] once, front to back. For every block it
//! measures the height the block needs, opens a new page when the block does
//! not fit in what is left of the current one, draws the block and moves the
//! cursor directly below it.
//!
//! Footers need the final page count, so they are painted in a second pass
//! that revisits every page through [`RenderBackend::select_page`].

use crate::config::{PageGeometry, Settings};
use crate::error::RenderError;
use crate::model::{BlockKind, ContentBlock, ReportDocument};

use super::backend::RenderBackend;
use super::components::{
    CodeBlockRenderer, ContentsRenderer, CoverRenderer, DividerRenderer, HeadingRenderer,
    StatusRenderer, TextRenderer,
};
use super::decorator::PageDecorator;
use super::helpers::Theme;

/// Slack when comparing accumulated heights against the page bottom
const FIT_EPSILON: f32 = 1e-3;

/// Where one block ended up
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Position of the block in the document
    pub index: usize,
    pub kind: BlockKind,
    /// 1-based page number
    pub page: usize,
    pub top: f32,
    /// Measured height including the trailing gap
    pub height: f32,
}

impl Placement {
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

/// Outcome of a successful layout pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderSummary {
    pub page_count: usize,
    pub placements: Vec<Placement>,
}

impl RenderSummary {
    /// Placements on a given page, in document order
    pub fn on_page(&self, page: usize) -> impl Iterator<Item = &Placement> {
        self.placements.iter().filter(move |p| p.page == page)
    }
}

/// Per-geometry set of block renderers
struct BlockRenderers<'a> {
    cover: CoverRenderer<'a>,
    contents: ContentsRenderer<'a>,
    headings: HeadingRenderer<'a>,
    text: TextRenderer<'a>,
    code: CodeBlockRenderer<'a>,
    status: StatusRenderer<'a>,
    divider: DividerRenderer<'a>,
}

impl<'a> BlockRenderers<'a> {
    fn new(theme: &'a Theme, geometry: PageGeometry) -> Self {
        Self {
            cover: CoverRenderer::new(theme, geometry),
            contents: ContentsRenderer::new(theme, geometry),
            headings: HeadingRenderer::new(theme, geometry),
            text: TextRenderer::new(theme, geometry),
            code: CodeBlockRenderer::new(theme, geometry),
            status: StatusRenderer::new(theme, geometry),
            divider: DividerRenderer::new(theme, geometry),
        }
    }

    /// Height the block will occupy, trailing gap included
    fn measure(&self, block: &ContentBlock) -> f32 {
        match block {
            ContentBlock::CoverPage(cover) => self.cover.height(cover),
            ContentBlock::TableOfContents(toc) => self.contents.height(toc),
            ContentBlock::SectionHeading(_) => self.headings.section_height(),
            ContentBlock::SubHeading(_) => self.headings.sub_height(),
            ContentBlock::BodyParagraph(text) => self.text.body_height(text),
            ContentBlock::BulletItem { text, indent } => self.text.bullet_height(text, *indent),
            ContentBlock::CodeBlock(text) => self.code.height(text),
            ContentBlock::StatusBadge { .. } => self.status.badge_height(),
            ContentBlock::ChecklistRow { .. } => self.status.checklist_height(),
            ContentBlock::Divider => self.divider.height(),
            ContentBlock::FileHeading { .. } => self.status.file_height(),
            ContentBlock::Definition { description, .. } => {
                self.text.definition_height(description)
            }
            ContentBlock::Spacer(height) => *height,
        }
    }

    fn draw<B: RenderBackend + ?Sized>(
        &self,
        backend: &mut B,
        block: &ContentBlock,
        top: f32,
    ) -> Result<(), RenderError> {
        match block {
            ContentBlock::CoverPage(cover) => self.cover.render(backend, cover, top),
            ContentBlock::TableOfContents(toc) => self.contents.render(backend, toc, top),
            ContentBlock::SectionHeading(title) => self.headings.render_section(backend, title, top),
            ContentBlock::SubHeading(title) => self.headings.render_sub(backend, title, top),
            ContentBlock::BodyParagraph(text) => self.text.render_body(backend, text, top),
            ContentBlock::BulletItem { text, indent } => {
                self.text.render_bullet(backend, text, *indent, top)
            }
            ContentBlock::CodeBlock(text) => self.code.render(backend, text, top),
            ContentBlock::StatusBadge { label, status } => {
                self.status.render_badge(backend, label, *status, top)
            }
            ContentBlock::ChecklistRow { label, done } => {
                self.status.render_checklist(backend, label, *done, top)
            }
            ContentBlock::Divider => self.divider.render(backend, top),
            ContentBlock::FileHeading { path, tag } => {
                self.status.render_file(backend, path, tag.as_deref(), top)
            }
            ContentBlock::Definition { term, description } => {
                self.text.render_definition(backend, term, description, top)
            }
            ContentBlock::Spacer(_) => Ok(()),
        }
    }
}

/// Lays out report documents onto a [`RenderBackend`]
pub struct PageFlowEngine<'a> {
    theme: &'a Theme,
    settings: &'a Settings,
}

impl<'a> PageFlowEngine<'a> {
    pub fn new(theme: &'a Theme, settings: &'a Settings) -> Self {
        Self { theme, settings }
    }

    /// Lay out and decorate every page of `doc`.
    ///
    /// Every block is validated before anything is drawn. The backend is left
    /// with all pages painted; the caller finishes it with `end_document`.
    pub fn render<B: RenderBackend + ?Sized>(
        &self,
        doc: &ReportDocument,
        backend: &mut B,
    ) -> Result<RenderSummary, RenderError> {
        for block in &doc.blocks {
            block.validate()?;
        }

        let decorator = PageDecorator::new(
            self.theme,
            doc.header_title.as_str(),
            self.settings.footer_offset,
            self.settings.marker.as_str(),
            self.settings.timestamp_label(),
        );

        backend.begin_document(&doc.header_title)?;
        let geometry = backend.geometry();
        let renderers = BlockRenderers::new(self.theme, geometry);

        self.start_page(backend, &decorator)?;
        let mut page_has_content = false;
        let mut page_sealed = false;
        let mut placements = Vec::with_capacity(doc.len());

        for (index, block) in doc.blocks.iter().enumerate() {
            let kind = block.kind();
            let required = renderers.measure(block);

            let needs_break = if page_sealed {
                true
            } else if kind.forces_break() {
                page_has_content
            } else {
                page_has_content && required > backend.remaining_height() + FIT_EPSILON
            };

            if needs_break {
                self.start_page(backend, &decorator)?;
            }

            if required > geometry.printable_height() + FIT_EPSILON {
                log::warn!(
                    "{} #{} needs {:.1} mm but a page holds {:.1} mm; it will overflow page {}",
                    kind,
                    index,
                    required,
                    geometry.printable_height(),
                    backend.page_number()
                );
            }

            let top = backend.cursor().y;
            renderers.draw(backend, block, top)?;
            backend.set_cursor(geometry.left, top + required);

            let placement = Placement {
                index,
                kind,
                page: backend.page_number(),
                top,
                height: required,
            };
            log::debug!(
                "Placed {} #{} on page {} at {:.1} mm ({:.1} mm)",
                kind,
                index,
                placement.page,
                top,
                required
            );
            placements.push(placement);

            page_has_content = true;
            page_sealed = kind == BlockKind::CoverPage;
        }

        let page_count = backend.page_count();
        for page in 1..=page_count {
            backend.select_page(page)?;
            decorator.draw_footer(backend, page, page_count)?;
        }

        log::info!(
            "Laid out {} blocks on {} pages",
            placements.len(),
            page_count
        );

        Ok(RenderSummary {
            page_count,
            placements,
        })
    }

    fn start_page<B: RenderBackend + ?Sized>(
        &self,
        backend: &mut B,
        decorator: &PageDecorator<'_>,
    ) -> Result<(), RenderError> {
        backend.begin_page()?;
        decorator.decorate_page(backend)?;
        let geometry = backend.geometry();
        backend.set_cursor(geometry.left, geometry.printable_top);
        log::debug!("Started page {}", backend.page_number());
        Ok(())
    }
}
