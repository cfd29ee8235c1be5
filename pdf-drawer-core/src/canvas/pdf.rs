//! Canvas backed by an existing PDF document
//!
//! Drawings are appended to each page as additional content streams. The
//! first time a page is drawn on, its original content is wrapped in a
//! `q`/`Q` pair so that graphics state left behind by the page cannot leak
//! into the overlay.

use super::Canvas;
use crate::error::{DrawError, Result};
use crate::geometry::{PageSize, Rectangle};
use crate::graphics::{checked_real, ExtGState, GraphicsContext, TextRenderMode};
use crate::instructions::{LineParams, RectangleParams, TextParams};
use crate::text::Font;
use chrono::Utc;
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream};
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Page attributes that may be inherited from the page tree
const INHERITABLE_KEYS: [&[u8]; 4] = [b"Resources", b"MediaBox", b"CropBox", b"Rotate"];

const MAX_TREE_DEPTH: usize = 64;

const FONT_PREFIX: &str = "PdrF";
const STATE_PREFIX: &str = "PdrGS";

/// A page box in PDF user space, normalised so `left <= right` and
/// `bottom <= top`
#[derive(Debug, Clone, Copy, PartialEq)]
struct PdfBox {
    left: f64,
    bottom: f64,
    right: f64,
    top: f64,
}

impl PdfBox {
    fn from_array(values: &[Object]) -> Option<Self> {
        if values.len() != 4 {
            return None;
        }
        let mut numbers = [0.0f64; 4];
        for (slot, value) in numbers.iter_mut().zip(values) {
            *slot = value.as_float().ok()? as f64;
        }
        let [x0, y0, x1, y1] = numbers;
        Some(Self {
            left: x0.min(x1),
            bottom: y0.min(y1),
            right: x0.max(x1),
            top: y0.max(y1),
        })
    }

    fn size(&self) -> PageSize {
        PageSize::new(self.right - self.left, self.top - self.bottom)
    }

    /// Convert page-relative coordinates (top-left origin) to user space
    fn to_user_space(self, x: f64, y: f64) -> (f64, f64) {
        (self.left + x, self.top - y)
    }

    /// User space rectangle as `(x, y, width, height)` from its lower-left corner
    fn rect_in_user_space(self, rect: &Rectangle) -> (f64, f64, f64, f64) {
        let (x, y) = self.to_user_space(rect.top_left.x, rect.bottom_right.y);
        (x, y, rect.width(), rect.height())
    }
}

/// Draws into the pages of a loaded `lopdf` document
pub struct PdfCanvas {
    document: Document,
    pages: Vec<ObjectId>,
    /// Pages whose original content is already wrapped in `q`/`Q`
    isolated: HashSet<ObjectId>,
    fonts: HashMap<Font, ObjectId>,
    states: HashMap<(u64, u64), ObjectId>,
    compress: bool,
}

impl PdfCanvas {
    /// Open a PDF file
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let bytes = std::fs::read(path.as_ref())?;
        tracing::debug!(path = %path.as_ref().display(), size = bytes.len(), "Opening PDF");
        Self::from_bytes(&bytes)
    }

    /// Load a PDF held in memory
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let document = Document::load_mem(bytes)?;
        Ok(Self::from_document(document))
    }

    pub fn from_document(document: Document) -> Self {
        let pages = document.get_pages().into_values().collect();
        Self {
            document,
            pages,
            isolated: HashSet::new(),
            fonts: HashMap::new(),
            states: HashMap::new(),
            compress: cfg!(feature = "compression"),
        }
    }

    /// Enable or disable Flate compression of appended content streams
    ///
    /// Has no effect when the `compression` feature is disabled.
    pub fn set_compression(&mut self, compress: bool) {
        self.compress = compress && cfg!(feature = "compression");
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    /// Object id of the page at `page`
    pub fn page_id(&self, page: usize) -> Result<ObjectId> {
        self.pages
            .get(page)
            .copied()
            .ok_or(DrawError::PageIndexOutOfBounds(page, self.pages.len()))
    }

    /// Serialise the document into `writer`
    pub fn save_to<W: Write>(&mut self, writer: &mut W) -> Result<()> {
        self.stamp_metadata()?;
        self.document.save_to(writer)?;
        Ok(())
    }

    /// Look up `key` on the page or the nearest ancestor that has it
    fn inherited(&self, page_id: ObjectId, key: &[u8]) -> Result<Option<&Object>> {
        let mut current = page_id;
        for _ in 0..MAX_TREE_DEPTH {
            let node = self.document.get_dictionary(current)?;
            if let Ok(value) = node.get(key) {
                return Ok(Some(value));
            }
            match node.get(b"Parent").and_then(Object::as_reference) {
                Ok(parent) => current = parent,
                Err(_) => return Ok(None),
            }
        }
        Err(DrawError::InvalidStructure(format!(
            "page tree deeper than {MAX_TREE_DEPTH} levels"
        )))
    }

    fn resolve<'a>(&'a self, object: &'a Object) -> Result<&'a Object> {
        match object {
            Object::Reference(id) => Ok(self.document.get_object(*id)?),
            other => Ok(other),
        }
    }

    fn page_box(&self, page_id: ObjectId, key: &[u8]) -> Result<Option<PdfBox>> {
        let Some(value) = self.inherited(page_id, key)? else {
            return Ok(None);
        };
        let values = self.resolve(value)?.as_array()?;
        PdfBox::from_array(values)
            .map(Some)
            .ok_or_else(|| {
                DrawError::InvalidStructure(format!(
                    "malformed /{} on page {page_id:?}",
                    String::from_utf8_lossy(key)
                ))
            })
    }

    /// The visible page box: CropBox if present, else MediaBox
    fn visible_box(&self, page_id: ObjectId) -> Result<PdfBox> {
        if let Some(crop_box) = self.page_box(page_id, b"CropBox")? {
            return Ok(crop_box);
        }
        self.page_box(page_id, b"MediaBox")?.ok_or_else(|| {
            DrawError::InvalidStructure(format!("page {page_id:?} has no MediaBox"))
        })
    }

    /// A copy of the resources in effect for the page
    fn effective_resources(&self, page_id: ObjectId) -> Result<Dictionary> {
        match self.inherited(page_id, b"Resources")? {
            Some(value) => Ok(self.resolve(value)?.as_dict()?.clone()),
            None => Ok(Dictionary::new()),
        }
    }

    /// Register `target` under `name` in the page's `category` resources
    ///
    /// The page gets its own inline resource dictionary so that shared or
    /// inherited dictionaries of other pages stay untouched.
    fn insert_resource(
        &mut self,
        page_id: ObjectId,
        category: &[u8],
        name: &str,
        target: ObjectId,
    ) -> Result<()> {
        let mut resources = self.effective_resources(page_id)?;
        let mut entries = match resources.get(category) {
            Ok(value) => self.resolve(value)?.as_dict()?.clone(),
            Err(_) => Dictionary::new(),
        };
        entries.set(name, Object::Reference(target));
        resources.set(category, Object::Dictionary(entries));

        self.document
            .get_dictionary_mut(page_id)?
            .set("Resources", Object::Dictionary(resources));
        Ok(())
    }

    /// Resource name of `font` on the page, creating the font object once
    fn font_resource(&mut self, page_id: ObjectId, font: Font) -> Result<String> {
        let font_id = match self.fonts.get(&font) {
            Some(id) => *id,
            None => {
                let mut dict = dictionary! {
                    "Type" => "Font",
                    "Subtype" => "Type1",
                    "BaseFont" => font.pdf_name(),
                };
                if let Some(encoding) = font.encoding_name() {
                    dict.set("Encoding", encoding);
                }
                let id = self.document.add_object(dict);
                self.fonts.insert(font, id);
                id
            }
        };

        let name = format!("{FONT_PREFIX}{}", font_id.0);
        self.insert_resource(page_id, b"Font", &name, font_id)?;
        Ok(name)
    }

    /// Resource name of an opacity state on the page, reusing equal states
    fn state_resource(&mut self, page_id: ObjectId, state: &ExtGState) -> Result<String> {
        let state_id = match self.states.get(&state.cache_key()) {
            Some(id) => *id,
            None => {
                let id = self.document.add_object(state.to_dictionary());
                self.states.insert(state.cache_key(), id);
                id
            }
        };

        let name = format!("{STATE_PREFIX}{}", state_id.0);
        self.insert_resource(page_id, b"ExtGState", &name, state_id)?;
        Ok(name)
    }

    /// Emit a `gs` operator when the opacities are not fully opaque
    fn apply_opacity(
        &mut self,
        page_id: ObjectId,
        ctx: &mut GraphicsContext,
        state: ExtGState,
    ) -> Result<()> {
        if state.uses_transparency() {
            let name = self.state_resource(page_id, &state)?;
            ctx.set_graphics_state(&name);
        }
        Ok(())
    }

    /// References of the page's current content streams
    fn content_refs(&self, page_id: ObjectId) -> Result<Vec<Object>> {
        let page = self.document.get_dictionary(page_id)?;
        match page.get(b"Contents") {
            Err(_) => Ok(Vec::new()),
            Ok(Object::Array(items)) => Ok(items.clone()),
            Ok(Object::Reference(id)) => match self.document.get_object(*id)? {
                Object::Array(items) => Ok(items.clone()),
                _ => Ok(vec![Object::Reference(*id)]),
            },
            Ok(_) => Err(DrawError::InvalidStructure(format!(
                "unsupported /Contents on page {page_id:?}"
            ))),
        }
    }

    fn add_stream(&mut self, data: Vec<u8>, compress: bool) -> Result<ObjectId> {
        let stream = if compress {
            compressed_stream(data)?
        } else {
            Stream::new(Dictionary::new(), data)
        };
        Ok(self.document.add_object(stream))
    }

    /// Append the operations of `ctx` to the page's content
    fn append_content(&mut self, page_id: ObjectId, ctx: &GraphicsContext) -> Result<()> {
        if ctx.is_empty() {
            return Ok(());
        }
        let encoded = ctx.encode()?;

        let mut contents = self.content_refs(page_id)?;
        if !self.isolated.contains(&page_id) && !contents.is_empty() {
            let open = self.add_stream(b"q\n".to_vec(), false)?;
            let close = self.add_stream(b"\nQ\n".to_vec(), false)?;
            contents.insert(0, Object::Reference(open));
            contents.push(Object::Reference(close));
        }
        self.isolated.insert(page_id);

        let overlay = self.add_stream(encoded, self.compress)?;
        contents.push(Object::Reference(overlay));

        self.document
            .get_dictionary_mut(page_id)?
            .set("Contents", Object::Array(contents));
        Ok(())
    }

    /// Copy inherited attributes onto the page itself
    fn flatten_inherited(&mut self, page_id: ObjectId) -> Result<()> {
        let mut missing = Vec::new();
        {
            let page = self.document.get_dictionary(page_id)?;
            for key in INHERITABLE_KEYS {
                if !page.has(key) {
                    if let Some(value) = self.inherited(page_id, key)? {
                        missing.push((key, value.clone()));
                    }
                }
            }
        }

        let page = self.document.get_dictionary_mut(page_id)?;
        for (key, value) in missing {
            page.set(key, value);
        }
        Ok(())
    }

    fn pages_root(&self) -> Result<ObjectId> {
        let catalog_id = self.document.trailer.get(b"Root")?.as_reference()?;
        let catalog = self.document.get_dictionary(catalog_id)?;
        Ok(catalog.get(b"Pages")?.as_reference()?)
    }

    /// Update `/ModDate` and `/Producer` in the document information dictionary
    fn stamp_metadata(&mut self) -> Result<()> {
        let now = Utc::now().format("D:%Y%m%d%H%M%S+00'00").to_string();
        let producer = format!("pdf-drawer {}", env!("CARGO_PKG_VERSION"));

        let existing = match self.document.trailer.get(b"Info") {
            Ok(Object::Reference(id)) if self.document.objects.contains_key(id) => Some(*id),
            _ => None,
        };
        let info_id = match existing {
            Some(id) => id,
            None => {
                let inline = match self.document.trailer.get(b"Info") {
                    Ok(Object::Dictionary(dict)) => dict.clone(),
                    _ => Dictionary::new(),
                };
                let id = self.document.add_object(inline);
                self.document.trailer.set("Info", Object::Reference(id));
                id
            }
        };

        let info = self.document.get_dictionary_mut(info_id)?;
        info.set("ModDate", Object::string_literal(now));
        info.set("Producer", Object::string_literal(producer));
        Ok(())
    }
}

#[cfg(feature = "compression")]
fn compressed_stream(data: Vec<u8>) -> Result<Stream> {
    let compressed = crate::compression::compress(&data)?;
    Ok(Stream::new(
        dictionary! { "Filter" => "FlateDecode" },
        compressed,
    ))
}

#[cfg(not(feature = "compression"))]
fn compressed_stream(data: Vec<u8>) -> Result<Stream> {
    Ok(Stream::new(Dictionary::new(), data))
}

impl Canvas for PdfCanvas {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_size(&self, page: usize) -> Result<PageSize> {
        let page_id = self.page_id(page)?;
        Ok(self.visible_box(page_id)?.size())
    }

    fn draw_rectangle(&mut self, page: usize, params: &RectangleParams) -> Result<()> {
        let page_id = self.page_id(page)?;
        let visible = self.visible_box(page_id)?;
        let stroked = params.border_width > 0.0;
        if !stroked && params.fill_color.is_none() {
            tracing::debug!(page, "Skipping rectangle without border or fill");
            return Ok(());
        }

        let mut ctx = GraphicsContext::new();
        ctx.save_state();
        let state = ExtGState::new()
            .with_alpha_stroke(params.border_opacity)
            .with_alpha_fill(params.fill_opacity);
        self.apply_opacity(page_id, &mut ctx, state)?;

        if stroked {
            ctx.set_line_width(params.border_width)
                .set_stroke_color(params.border_color);
        }
        if let Some(fill) = params.fill_color {
            ctx.set_fill_color(fill);
        }

        let (x, y, width, height) = visible.rect_in_user_space(&params.bounds());
        ctx.rect(x, y, width, height);
        match (stroked, params.fill_color.is_some()) {
            (true, true) => ctx.fill_stroke(),
            (true, false) => ctx.stroke(),
            _ => ctx.fill(),
        };
        ctx.restore_state();

        tracing::debug!(page, x, y, width, height, "Drawing rectangle");
        self.append_content(page_id, &ctx)
    }

    fn draw_line(&mut self, page: usize, params: &LineParams) -> Result<()> {
        let page_id = self.page_id(page)?;
        let visible = self.visible_box(page_id)?;
        if params.width <= 0.0 {
            tracing::debug!(page, "Skipping line with zero width");
            return Ok(());
        }

        let mut ctx = GraphicsContext::new();
        ctx.save_state();
        let state = ExtGState::new().with_alpha_stroke(params.opacity);
        self.apply_opacity(page_id, &mut ctx, state)?;

        let (x0, y0) = visible.to_user_space(params.x0, params.y0);
        let (x1, y1) = visible.to_user_space(params.x1, params.y1);
        ctx.set_line_width(params.width)
            .set_stroke_color(params.color)
            .move_to(x0, y0)
            .line_to(x1, y1)
            .stroke()
            .restore_state();

        tracing::debug!(page, x0, y0, x1, y1, "Drawing line");
        self.append_content(page_id, &ctx)
    }

    fn draw_text(&mut self, page: usize, params: &TextParams) -> Result<()> {
        let page_id = self.page_id(page)?;
        let visible = self.visible_box(page_id)?;
        let font = Font::from_name(&params.font_name)?;
        let font_name = self.font_resource(page_id, font)?;

        let mut ctx = GraphicsContext::new();
        ctx.save_state();

        let mode = match params.fill_color {
            None => {
                let state = ExtGState::new().with_alpha_fill(params.border_opacity);
                self.apply_opacity(page_id, &mut ctx, state)?;
                ctx.set_fill_color(params.border_color);
                TextRenderMode::Fill
            }
            Some(fill) => {
                let state = ExtGState::new()
                    .with_alpha_stroke(params.border_opacity)
                    .with_alpha_fill(params.fill_opacity);
                self.apply_opacity(page_id, &mut ctx, state)?;
                ctx.set_fill_color(fill);
                if params.border_width > 0.0 {
                    ctx.set_line_width(params.border_width)
                        .set_stroke_color(params.border_color);
                    TextRenderMode::FillStroke
                } else {
                    TextRenderMode::Fill
                }
            }
        };

        let (x, y) = visible.to_user_space(params.x, params.y);
        ctx.begin_text()
            .set_font(&font_name, params.font_size)
            .set_text_render_mode(mode)
            .text_position(x, y)
            .show_text(font.text_encoding().encode(&params.text))
            .end_text()
            .restore_state();

        tracing::debug!(page, x, y, font = font.pdf_name(), "Drawing text");
        self.append_content(page_id, &ctx)
    }

    fn crop_page(&mut self, page: usize, crop_box: Rectangle) -> Result<()> {
        let page_id = self.page_id(page)?;
        let visible = self.visible_box(page_id)?;

        let (left, bottom, width, height) = visible.rect_in_user_space(&crop_box);
        let values = [left, bottom, left + width, bottom + height]
            .into_iter()
            .map(checked_real)
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(page, left, bottom, width, height, "Cropping page");
        self.document
            .get_dictionary_mut(page_id)?
            .set("CropBox", Object::Array(values));
        Ok(())
    }

    fn select_pages(&mut self, pages: &[usize]) -> Result<()> {
        if pages.is_empty() {
            return Err(DrawError::InvalidPageSelection(
                "No pages selected".to_string(),
            ));
        }
        let selected = pages
            .iter()
            .map(|&page| self.page_id(page))
            .collect::<Result<Vec<_>>>()?;

        // Intermediate page tree nodes are dropped, so every kept page must
        // carry its own copy of inherited attributes first.
        let unique: HashSet<ObjectId> = selected.iter().copied().collect();
        for &page_id in &unique {
            self.flatten_inherited(page_id)?;
        }

        let root = self.pages_root()?;
        let mut placed = HashSet::new();
        let mut kids = Vec::with_capacity(selected.len());
        for page_id in selected {
            let page_id = if placed.insert(page_id) {
                page_id
            } else {
                let copy = self.document.get_object(page_id)?.clone();
                let copy_id = self.document.add_object(copy);
                if self.isolated.contains(&page_id) {
                    self.isolated.insert(copy_id);
                }
                copy_id
            };
            self.document
                .get_dictionary_mut(page_id)?
                .set("Parent", Object::Reference(root));
            kids.push(page_id);
        }

        let root_node = self.document.get_dictionary_mut(root)?;
        root_node.set(
            "Kids",
            Object::Array(kids.iter().map(|id| Object::Reference(*id)).collect()),
        );
        root_node.set("Count", Object::Integer(kids.len() as i64));
        self.pages = kids;

        let pruned = self.document.prune_objects();
        let objects = &self.document.objects;
        self.fonts.retain(|_, id| objects.contains_key(id));
        self.states.retain(|_, id| objects.contains_key(id));
        self.isolated.retain(|id| objects.contains_key(id));

        tracing::debug!(
            pages = self.pages.len(),
            pruned = pruned.len(),
            "Selected pages"
        );
        Ok(())
    }

    fn save(&mut self, path: &Path) -> Result<()> {
        // Serialise fully before touching the output path
        let mut buffer = Vec::new();
        self.save_to(&mut buffer)?;

        let mut writer = BufWriter::new(File::create(path)?);
        writer.write_all(&buffer)?;
        writer.flush()?;
        tracing::debug!(path = %path.display(), "Saved PDF");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::Content;
    use pretty_assertions::assert_eq;

    /// One page with inherited resources and a MediaBox on the page tree root
    fn single_page_document(media_box: [i64; 4]) -> Document {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let content_id = doc.add_object(Stream::new(
            Dictionary::new(),
            b"0 0 1 rg 0 0 10 10 re f".to_vec(),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => vec![page_id.into()],
                "Count" => 1,
                "Resources" => dictionary! {},
                "MediaBox" => media_box.iter().map(|v| Object::Integer(*v)).collect::<Vec<_>>(),
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc
    }

    fn page_operators(canvas: &PdfCanvas, page: usize) -> Vec<String> {
        let page_id = canvas.page_id(page).unwrap();
        let bytes = canvas.document().get_page_content(page_id).unwrap();
        Content::decode(&bytes)
            .unwrap()
            .operations
            .into_iter()
            .map(|op| op.operator)
            .collect()
    }

    #[test]
    fn test_page_size_from_inherited_media_box() {
        let canvas = PdfCanvas::from_document(single_page_document([0, 0, 612, 792]));
        assert_eq!(canvas.page_count(), 1);
        assert_eq!(canvas.page_size(0).unwrap(), PageSize::letter());
        assert!(matches!(
            canvas.page_size(1),
            Err(DrawError::PageIndexOutOfBounds(1, 1))
        ));
    }

    #[test]
    fn test_pdf_box_normalises_and_converts() {
        let values: Vec<Object> = vec![100.into(), 800.into(), 0.into(), 0.into()];
        let visible = PdfBox::from_array(&values).unwrap();
        assert_eq!(visible.size(), PageSize::new(100.0, 800.0));
        assert_eq!(visible.to_user_space(10.0, 20.0), (10.0, 780.0));

        let rect = Rectangle::new(10.0, 20.0, 110.0, 70.0);
        assert_eq!(visible.rect_in_user_space(&rect), (10.0, 730.0, 100.0, 50.0));

        assert!(PdfBox::from_array(&values[..3]).is_none());
    }

    #[test]
    fn test_original_content_is_wrapped_once() {
        let mut canvas = PdfCanvas::from_document(single_page_document([0, 0, 200, 200]));
        canvas.set_compression(false);

        let line = LineParams::new(0.0, 0.0, 100.0, 100.0);
        canvas.draw_line(0, &line).unwrap();
        canvas.draw_line(0, &line).unwrap();

        let operators = page_operators(&canvas, 0);
        assert_eq!(operators.first().map(String::as_str), Some("q"));
        assert_eq!(operators.iter().filter(|op| *op == "re").count(), 1);
        assert_eq!(operators.iter().filter(|op| *op == "l").count(), 2);

        // q + original + Q + two overlays
        let page_id = canvas.page_id(0).unwrap();
        let contents = canvas.content_refs(page_id).unwrap();
        assert_eq!(contents.len(), 5);
    }

    #[test]
    fn test_opaque_drawing_adds_no_graphics_state() {
        let mut canvas = PdfCanvas::from_document(single_page_document([0, 0, 200, 200]));
        canvas
            .draw_rectangle(0, &RectangleParams::new(10.0, 10.0, 50.0, 50.0))
            .unwrap();
        assert!(canvas.states.is_empty());
        assert!(!page_operators(&canvas, 0).contains(&"gs".to_string()));
    }

    #[test]
    fn test_opacity_states_are_shared() {
        let mut canvas = PdfCanvas::from_document(single_page_document([0, 0, 200, 200]));
        let line = LineParams::new(0.0, 0.0, 10.0, 10.0).with_stroke(1.0, crate::Color::red(), 0.5);
        canvas.draw_line(0, &line).unwrap();
        canvas.draw_line(0, &line).unwrap();
        assert_eq!(canvas.states.len(), 1);

        let page_id = canvas.page_id(0).unwrap();
        let resources = canvas.effective_resources(page_id).unwrap();
        let states = resources.get(b"ExtGState").unwrap().as_dict().unwrap();
        assert_eq!(states.len(), 1);
    }

    #[test]
    fn test_text_registers_font_resource() {
        let mut canvas = PdfCanvas::from_document(single_page_document([0, 0, 200, 200]));
        canvas
            .draw_text(0, &TextParams::new(10.0, 20.0, "Hello").with_font("hebo", 12.0))
            .unwrap();

        let font_id = canvas.fonts[&Font::HelveticaBold];
        let font = canvas.document().get_dictionary(font_id).unwrap();
        assert_eq!(
            font.get(b"BaseFont").unwrap().as_name().unwrap(),
            b"Helvetica-Bold"
        );

        let page_id = canvas.page_id(0).unwrap();
        let resources = canvas.effective_resources(page_id).unwrap();
        let fonts = resources.get(b"Font").unwrap().as_dict().unwrap();
        assert!(fonts.has(format!("{FONT_PREFIX}{}", font_id.0).as_bytes()));
    }

    #[test]
    fn test_unknown_font_fails() {
        let mut canvas = PdfCanvas::from_document(single_page_document([0, 0, 200, 200]));
        let text = TextParams::new(10.0, 20.0, "Hello").with_font("nope", 12.0);
        assert!(matches!(
            canvas.draw_text(0, &text),
            Err(DrawError::FontError(_))
        ));
    }

    #[test]
    fn test_metadata_is_stamped() {
        let mut canvas = PdfCanvas::from_document(single_page_document([0, 0, 200, 200]));
        let mut bytes = Vec::new();
        canvas.save_to(&mut bytes).unwrap();

        let reloaded = Document::load_mem(&bytes).unwrap();
        let info = match reloaded.trailer.get(b"Info").unwrap() {
            Object::Reference(id) => reloaded.get_dictionary(*id).unwrap().clone(),
            Object::Dictionary(dict) => dict.clone(),
            other => panic!("unexpected /Info {other:?}"),
        };
        let mod_date = info.get(b"ModDate").unwrap().as_str().unwrap();
        assert!(mod_date.starts_with(b"D:"));
        let producer = info.get(b"Producer").unwrap().as_str().unwrap();
        assert!(producer.starts_with(b"pdf-drawer"));
    }
}
