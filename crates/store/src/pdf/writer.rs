//! PDF Writer
//!
//! File structure: header, numbered indirect objects, the cross-reference
//! table, and the trailer. Streams are written uncompressed.

use super::document::{create_catalog, create_page, create_pages, DocumentInfo, PdfVersion};
use super::fonts::create_standard_font_dict;
use super::objects::{write_object, PdfDictionary, PdfObject, PdfStream};
use super::options::PdfExportOptions;
use super::renderer::PdfRenderer;
use render_model::PageRender;
use std::io::{self, Write};
use thiserror::Error;

/// Error type for PDF operations
#[derive(Debug, Error)]
pub enum PdfError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid document: {0}")]
    InvalidDocument(String),
}

/// Result type for PDF operations
pub type Result<T> = std::result::Result<T, PdfError>;

/// Low-level writer tracking object offsets for the xref table
pub struct PdfWriter<W: Write> {
    writer: W,
    position: u64,
    /// Byte offset of each written object, indexed by object number - 1
    offsets: Vec<Option<u64>>,
    version: PdfVersion,
}

impl<W: Write> PdfWriter<W> {
    pub fn new(writer: W, version: PdfVersion) -> Self {
        Self {
            writer,
            position: 0,
            offsets: Vec::new(),
            version,
        }
    }

    fn write_bytes(&mut self, data: &[u8]) -> Result<()> {
        self.writer.write_all(data)?;
        self.position += data.len() as u64;
        Ok(())
    }

    /// Reserve the next object number
    pub fn allocate_object(&mut self) -> u32 {
        self.offsets.push(None);
        self.offsets.len() as u32
    }

    /// Write the PDF header with a binary marker comment
    pub fn write_header(&mut self) -> Result<()> {
        let header = format!("%PDF-{}\n", self.version.as_str());
        self.write_bytes(header.as_bytes())?;
        self.write_bytes(&[b'%', 0xE2, 0xE3, 0xCF, 0xD3, b'\n'])
    }

    /// Write an indirect object under a previously allocated number
    pub fn write_object(&mut self, obj_num: u32, object: &PdfObject) -> Result<()> {
        let slot = obj_num
            .checked_sub(1)
            .and_then(|i| self.offsets.get_mut(i as usize))
            .ok_or_else(|| {
                PdfError::InvalidDocument(format!("object {obj_num} was never allocated"))
            })?;
        if slot.is_some() {
            return Err(PdfError::InvalidDocument(format!(
                "object {obj_num} written twice"
            )));
        }
        *slot = Some(self.position);

        let mut body = format!("{obj_num} 0 obj\n").into_bytes();
        write_object(&mut body, object)?;
        body.extend_from_slice(b"\nendobj\n");
        self.write_bytes(&body)
    }

    /// Write the cross-reference table and trailer, then flush
    pub fn finish(mut self, catalog_ref: u32, info_ref: u32) -> Result<W> {
        let xref_offset = self.position;
        let size = self.offsets.len() + 1;

        let mut xref = format!("xref\n0 {size}\n0000000000 65535 f \n");
        for (i, offset) in self.offsets.iter().enumerate() {
            let offset = offset.ok_or_else(|| {
                PdfError::InvalidDocument(format!("object {} allocated but not written", i + 1))
            })?;
            xref.push_str(&format!("{offset:010} 00000 n \n"));
        }
        self.write_bytes(xref.as_bytes())?;

        let mut trailer = PdfDictionary::new();
        trailer.insert("Size", PdfObject::Integer(size as i64));
        trailer.insert("Root", PdfObject::Reference(catalog_ref));
        trailer.insert("Info", PdfObject::Reference(info_ref));

        let mut tail = b"trailer\n".to_vec();
        write_object(&mut tail, &trailer.into())?;
        tail.extend_from_slice(format!("\nstartxref\n{xref_offset}\n%%EOF\n").as_bytes());
        self.write_bytes(&tail)?;

        self.writer.flush()?;
        Ok(self.writer)
    }
}

/// High-level PDF document writer
pub struct PdfDocumentWriter {
    options: PdfExportOptions,
}

impl PdfDocumentWriter {
    pub fn new(options: PdfExportOptions) -> Self {
        Self { options }
    }

    /// Write a complete PDF document
    pub fn write<W: Write>(&self, pages: &[PageRender], writer: W) -> Result<W> {
        if pages.is_empty() {
            return Err(PdfError::InvalidDocument("No pages to export".to_string()));
        }

        let mut pdf = PdfWriter::new(writer, self.options.version);
        pdf.write_header()?;

        let catalog_ref = pdf.allocate_object();
        let pages_ref = pdf.allocate_object();
        let info_ref = pdf.allocate_object();

        // Fonts must be known before the resource dictionary is built
        let mut renderer = PdfRenderer::new();
        let contents: Vec<_> = pages.iter().map(|page| renderer.render_page(page)).collect();

        let font_refs: Vec<_> = renderer
            .fonts()
            .fonts()
            .map(|(name, font)| (name, font, pdf.allocate_object()))
            .collect();
        let page_refs: Vec<(u32, u32)> = pages
            .iter()
            .map(|_| (pdf.allocate_object(), pdf.allocate_object()))
            .collect();

        pdf.write_object(catalog_ref, &create_catalog(pages_ref).into())?;
        let kids: Vec<u32> = page_refs.iter().map(|(page, _)| *page).collect();
        pdf.write_object(pages_ref, &create_pages(&kids).into())?;
        pdf.write_object(info_ref, &self.document_info().to_dictionary().into())?;

        let mut font_resources = PdfDictionary::new();
        for (name, font, font_ref) in &font_refs {
            pdf.write_object(*font_ref, &create_standard_font_dict(*font).into())?;
            font_resources.insert(name.clone(), PdfObject::Reference(*font_ref));
        }

        for ((page, content), (page_ref, content_ref)) in pages.iter().zip(contents).zip(&page_refs) {
            let stream = PdfStream::new(content.into_bytes());
            pdf.write_object(*content_ref, &stream.into())?;

            let mut resources = PdfDictionary::new();
            if !font_resources.is_empty() {
                resources.insert("Font", font_resources.clone());
            }
            resources.insert(
                "ProcSet",
                PdfObject::Array(vec![PdfObject::name("PDF"), PdfObject::name("Text")]),
            );

            let page_dict = create_page(pages_ref, *content_ref, page.width, page.height, resources);
            pdf.write_object(*page_ref, &page_dict.into())?;
        }

        pdf.finish(catalog_ref, info_ref)
    }

    /// Write a complete PDF document to bytes
    pub fn write_to_bytes(&self, pages: &[PageRender]) -> Result<Vec<u8>> {
        self.write(pages, Vec::new())
    }

    fn document_info(&self) -> DocumentInfo {
        DocumentInfo {
            title: self.options.title.clone(),
            author: self.options.author.clone(),
            subject: self.options.subject.clone(),
            creation_date: self.options.creation_date,
            ..DocumentInfo::new()
        }
    }
}
