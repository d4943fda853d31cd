use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};

const FONT_REGULAR: Name<'static> = Name(b"F1");
const FONT_BOLD: Name<'static> = Name(b"F2");

/// Horizontal placement of a text line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// Encode text for a WinAnsiEncoding Type1 font.
/// Latin-1 maps 1:1; the few cp1252 extras we print (euro sign, typographic
/// quotes, narrow no-break space) are translated; anything else becomes '?'.
pub fn win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '\u{20}'..='\u{7e}' => c as u8,
            '\u{a0}'..='\u{ff}' => c as u32 as u8,
            '\u{202f}' | '\u{2009}' | '\u{2007}' => 0xa0,
            '€' => 0x80,
            '…' => 0x85,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '–' => 0x96,
            '—' => 0x97,
            'Œ' => 0x8c,
            'œ' => 0x9c,
            '\t' => b' ',
            _ => b'?',
        })
        .collect()
}

/// Rough Helvetica advance width: good enough for alignment and column sizing.
pub fn text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * 0.5
}

fn draw_text(content: &mut Content, font: Name, x: f32, y: f32, size: f32, text: &str) {
    let encoded = win_ansi(text);
    content.begin_text();
    content.set_font(font, size);
    content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
    content.show(Str(&encoded));
    content.end_text();
}

fn draw_cell_borders(content: &mut Content, x: f32, y: f32, w: f32, h: f32) {
    content.save_state();
    content.set_stroke_rgb(0.65, 0.65, 0.65);
    content.rect(x, y, w, h);
    content.stroke();
    content.restore_state();
}

fn fill_band(content: &mut Content, x: f32, y: f32, w: f32, h: f32, gray: f32) {
    content.save_state();
    content.set_fill_rgb(gray, gray, gray);
    content.rect(x, y, w, h);
    content.fill_nonzero();
    content.restore_state();
}

fn draw_row(
    content: &mut Content,
    font: Name,
    y: f32,
    row_h: f32,
    col_widths: &[f32],
    x_start: f32,
    row: &[String],
    font_size: f32,
) {
    let mut x = x_start;

    for (text, w) in row.iter().zip(col_widths) {
        draw_text(content, font, x + 5.0, y + 7.0, font_size, text);
        draw_cell_borders(content, x, y, *w, row_h);
        x += w;
    }
}

/// Paginated A4 document built top to bottom with a write cursor.
pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,
    current_content_id: Option<Ref>,
    content: Option<Content>,

    page_w: f32,
    page_h: f32,
    margin: f32,
    row_h: f32,
    cursor_y: f32,

    next_id: i32,
    font_id: Ref,
    bold_font_id: Ref,

    page_label: String,
    font_size: f32,
    header_font_size: f32,
}

impl PdfManager {
    /// `page_label` prefixes the page number printed in every footer.
    pub fn new(page_label: &str) -> Self {
        let mut pdf = Pdf::new();

        // hand-managed object ids
        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let bold_font_id = Ref::new(4);
        let next_id = 5;

        pdf.type1_font(font_id)
            .base_font(Name(b"Helvetica"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
        pdf.type1_font(bold_font_id)
            .base_font(Name(b"Helvetica-Bold"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            current_content_id: None,
            content: None,

            page_w: 595.0,
            page_h: 842.0,
            margin: 30.0,
            row_h: 24.0,
            cursor_y: 0.0,

            next_id,
            font_id,
            bold_font_id,

            page_label: page_label.to_string(),
            font_size: 10.0,
            header_font_size: 10.0,
        }
    }

    /// Usable width between the left and right margins.
    pub fn content_width(&self) -> f32 {
        self.page_w - 2.0 * self.margin
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    /// Close the current page (if any) and open a new one with its footer.
    fn new_page(&mut self) {
        self.finalize_page();

        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();

        self.page_refs.push(page_id);

        {
            let mut page = self.pdf.page(page_id);
            page.parent(self.pages_id)
                .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
                .contents(content_id);

            page.resources()
                .fonts()
                .pair(FONT_REGULAR, self.font_id)
                .pair(FONT_BOLD, self.bold_font_id);
        }

        let mut content = Content::new();
        let footer = format!("{} {}", self.page_label, self.page_refs.len());
        draw_text(
            &mut content,
            FONT_REGULAR,
            self.page_w - self.margin - text_width(&footer, 8.0),
            self.margin - 15.0,
            8.0,
            &footer,
        );

        self.current_content_id = Some(content_id);
        self.content = Some(content);
        self.cursor_y = self.page_h - self.margin;
    }

    /// Write the stream of the current page
    fn finalize_page(&mut self) {
        if let (Some(id), Some(content)) = (self.current_content_id.take(), self.content.take()) {
            self.pdf.stream(id, &content.finish());
        }
    }

    /// Make room for `needed` points below the cursor, breaking the page if required.
    fn reserve(&mut self, needed: f32) {
        if self.content.is_none() || self.cursor_y - needed < self.margin {
            self.new_page();
        }
    }

    /// Vertical gap.
    pub fn space(&mut self, h: f32) {
        self.reserve(0.0);
        self.cursor_y -= h;
    }

    /// One line of text at the cursor.
    pub fn text(&mut self, text: &str, size: f32, bold: bool, align: Align) {
        let line_h = size * 1.5;
        self.reserve(line_h);
        self.cursor_y -= line_h;

        let x = match align {
            Align::Left => self.margin,
            Align::Center => (self.page_w - text_width(text, size)) / 2.0,
            Align::Right => self.page_w - self.margin - text_width(text, size),
        };
        let font = if bold { FONT_BOLD } else { FONT_REGULAR };
        let y = self.cursor_y;

        if let Some(content) = self.content.as_mut() {
            draw_text(content, font, x, y, size, text);
        }
    }

    /// Text wrapped to the content width; explicit newlines are kept.
    pub fn wrapped_text(&mut self, text: &str, size: f32) {
        let max_chars = (self.content_width() / (size * 0.5)).floor().max(1.0) as usize;
        for paragraph in text.lines() {
            for line in textwrap::wrap(paragraph, max_chars) {
                self.text(&line, size, false, Align::Left);
            }
        }
    }

    /// Size columns from header + content, then stretch or shrink them to the page.
    fn compute_col_widths(&self, headers: &[&str], rows: &[Vec<String>]) -> Vec<f32> {
        let mut widths: Vec<f32> = headers
            .iter()
            .map(|h| text_width(h, self.header_font_size) + 10.0)
            .collect();

        for row in rows {
            for (i, cell) in row.iter().enumerate().take(widths.len()) {
                widths[i] = widths[i].max(text_width(cell, self.font_size) + 10.0);
            }
        }

        let total: f32 = widths.iter().sum();
        let max = self.content_width();

        if total > 0.0 {
            let scale = max / total;
            for w in &mut widths {
                *w *= scale;
            }
        }

        widths
    }

    fn table_header(&mut self, header_row: &[String], col_widths: &[f32]) {
        self.cursor_y -= self.row_h;
        let (x, y, row_h, size) = (self.margin, self.cursor_y, self.row_h, self.header_font_size);
        let total: f32 = col_widths.iter().sum();

        if let Some(content) = self.content.as_mut() {
            fill_band(content, x, y, total, row_h, 0.953);
            draw_row(content, FONT_BOLD, y, row_h, col_widths, x, header_row, size);
        }
    }

    /// Full-width table; rows flow onto new pages, repeating the header row.
    pub fn table(&mut self, headers: &[&str], rows: &[Vec<String>]) {
        let col_widths = self.compute_col_widths(headers, rows);
        let header_row: Vec<String> = headers.iter().map(|s| s.to_string()).collect();

        self.reserve(self.row_h * 2.0);
        self.table_header(&header_row, &col_widths);

        for row in rows {
            if self.cursor_y - self.row_h < self.margin {
                self.new_page();
                self.table_header(&header_row, &col_widths);
            }

            self.cursor_y -= self.row_h;
            let (x, y, row_h, size) = (self.margin, self.cursor_y, self.row_h, self.font_size);

            if let Some(content) = self.content.as_mut() {
                draw_row(content, FONT_REGULAR, y, row_h, &col_widths, x, row, size);
            }
        }
    }

    /// Serialize the document.
    pub fn finish(mut self) -> Vec<u8> {
        if self.page_refs.is_empty() {
            self.new_page();
        }
        self.finalize_page();

        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        {
            let mut pages = self.pdf.pages(self.pages_id);
            pages.count(self.page_refs.len() as i32);
            pages.kids(self.page_refs.iter().copied());
        }

        self.pdf.finish()
    }
}
