use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// One line of the text block printed above the table on the first page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading(String),
    Paragraph(String),
    Bullet(String),
}

pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,
    current_content_id: Option<Ref>,

    page_w: f32,
    page_h: f32,
    margin: f32,
    row_h: f32,
    line_h: f32,

    next_id: i32,
    font_id: Ref,
    bold_font_id: Ref,

    font_size: f32,
    header_font_size: f32,
    heading_font_size: f32,
    title_font_size: f32,
}

impl Default for PdfManager {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfManager {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let bold_font_id = Ref::new(4);

        pdf.type1_font(font_id).base_font(Name(b"Helvetica"));
        pdf.type1_font(bold_font_id).base_font(Name(b"Helvetica-Bold"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            current_content_id: None,

            page_w: 595.0,
            page_h: 842.0,
            margin: 50.0,
            row_h: 20.0,
            line_h: 16.0,

            next_id: 5,
            font_id,
            bold_font_id,

            font_size: 10.0,
            header_font_size: 11.0,
            heading_font_size: 13.0,
            title_font_size: 18.0,
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    fn new_page(&mut self) -> Content {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();

        self.page_refs.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
            .contents(content_id);

        let mut resources = page.resources();
        let mut fonts = resources.fonts();
        fonts.pair(Name(b"F1"), self.font_id);
        fonts.pair(Name(b"F2"), self.bold_font_id);

        self.current_content_id = Some(content_id);

        Content::new()
    }

    fn finalize_page(&mut self, content: Content) {
        if let Some(id) = self.current_content_id {
            self.pdf.stream(id, &content.finish());
        }
    }

    fn build_pages_tree(&mut self) {
        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.clone());
    }

    fn draw_text(&self, content: &mut Content, x: f32, y: f32, size: f32, bold: bool, text: &str) {
        let font = if bold { Name(b"F2") } else { Name(b"F1") };
        content.begin_text();
        content.set_font(font, size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(&latin1(text)));
        content.end_text();
    }

    fn fill_band(&self, content: &mut Content, y: f32, width: f32, grey: f32) {
        content.save_state();
        content.set_fill_rgb(grey, grey, grey + 0.03);
        content.rect(self.margin, y, width, self.row_h);
        content.fill_nonzero();
        content.restore_state();
    }

    fn draw_row(
        &self,
        content: &mut Content,
        y: f32,
        col_widths: &[f32],
        row: &[String],
        size: f32,
        bold: bool,
    ) {
        let mut x = self.margin;

        for (text, w) in row.iter().zip(col_widths) {
            self.draw_text(content, x + 4.0, y + 6.0, size, bold, text);
            content.save_state();
            content.set_stroke_rgb(0.65, 0.65, 0.65);
            content.rect(x, y, *w, self.row_h);
            content.stroke();
            content.restore_state();
            x += w;
        }
    }

    /// Column widths from header + content, scaled down to fit the page.
    fn compute_col_widths(&self, headers: &[&str], rows: &[Vec<String>]) -> Vec<f32> {
        let mut widths: Vec<f32> = headers.iter().map(|h| h.len() as f32 * 6.5 + 8.0).collect();

        for row in rows {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = w.max(cell.len() as f32 * 5.6 + 8.0);
            }
        }

        let total: f32 = widths.iter().sum();
        let max = self.page_w - 2.0 * self.margin;

        if total > max {
            let scale = max / total;
            for w in &mut widths {
                *w *= scale;
            }
        }

        widths
    }

    fn draw_footer(&self, content: &mut Content, page: usize) {
        let pg = format!("Page {}", page);
        self.draw_text(
            content,
            self.page_w - self.margin - 40.0,
            self.margin - 30.0,
            self.font_size,
            false,
            &pg,
        );
    }

    /// Draw the intro blocks from `y` downwards; returns the next free `y`.
    fn draw_blocks(&self, content: &mut Content, mut y: f32, blocks: &[Block]) -> f32 {
        for block in blocks {
            match block {
                Block::Heading(t) => {
                    y -= self.line_h * 0.5;
                    self.draw_text(content, self.margin, y, self.heading_font_size, true, t);
                    y -= self.line_h * 1.3;
                }
                Block::Paragraph(t) => {
                    self.draw_text(content, self.margin, y, self.font_size, false, t);
                    y -= self.line_h;
                }
                Block::Bullet(t) => {
                    let line = format!("-  {t}");
                    self.draw_text(content, self.margin + 12.0, y, self.font_size, false, &line);
                    y -= self.line_h;
                }
            }
        }
        y
    }

    /// Titled document: intro blocks on the first page, then a table that
    /// continues on as many pages as needed (header row repeated).
    pub fn write_document(
        &mut self,
        title: &str,
        blocks: &[Block],
        headers: &[&str],
        rows: &[Vec<String>],
    ) {
        let col_widths = self.compute_col_widths(headers, rows);
        let table_w: f32 = col_widths.iter().sum();
        let header_row: Vec<String> = headers.iter().map(|s| s.to_string()).collect();

        let mut remaining: &[Vec<String>] = rows;
        let mut page_idx = 1;

        loop {
            let mut content = self.new_page();
            self.draw_footer(&mut content, page_idx);

            let mut y = self.page_h - self.margin;
            if page_idx == 1 {
                self.draw_text(&mut content, self.margin, y, self.title_font_size, true, title);
                y -= self.line_h * 2.0;
                y = self.draw_blocks(&mut content, y, blocks);
            }
            y -= self.row_h;

            self.fill_band(&mut content, y, table_w, 0.85);
            self.draw_row(&mut content, y, &col_widths, &header_row, self.header_font_size, true);
            y -= self.row_h;

            let mut consumed = 0;
            for (i, row) in remaining.iter().enumerate() {
                if y < self.margin {
                    break;
                }
                if i % 2 == 0 {
                    self.fill_band(&mut content, y, table_w, 0.96);
                }
                self.draw_row(&mut content, y, &col_widths, row, self.font_size, false);
                y -= self.row_h;
                consumed += 1;
            }

            self.finalize_page(content);
            remaining = &remaining[consumed..];
            page_idx += 1;

            if remaining.is_empty() || (consumed == 0 && page_idx > 2) {
                break;
            }
        }
    }

    pub fn save(mut self, path: &Path) -> std::io::Result<()> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        self.build_pages_tree();

        let bytes = self.pdf.finish();
        let mut f = File::create(path)?;
        f.write_all(&bytes)?;
        Ok(())
    }
}

/// Type1 standard fonts only cover single-byte text.
fn latin1(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| if (c as u32) < 256 { c as u8 } else { b'?' })
        .collect()
}
