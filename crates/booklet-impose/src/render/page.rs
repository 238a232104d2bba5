//! Output document assembly
//!
//! `BookletWriter` turns composed sheet sides into pages of a new lopdf
//! document. Each page image becomes an Image XObject drawn with a single
//! `cm` transform, so the output is plain and deterministic: the same input
//! always serializes to the same bytes.

use crate::compose::{ComposedSide, PlacedImage, SheetSink};
use crate::types::Result;
use image::DynamicImage;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

/// Builds the output booklet one sheet side at a time
pub struct BookletWriter {
    output: Document,
    pages_tree_id: ObjectId,
    page_refs: Vec<Object>,
}

impl Default for BookletWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl BookletWriter {
    pub fn new() -> Self {
        let mut output = Document::with_version("1.7");
        let pages_tree_id = output.new_object_id();
        Self {
            output,
            pages_tree_id,
            page_refs: Vec::new(),
        }
    }

    /// Number of output pages written so far
    pub fn page_count(&self) -> usize {
        self.page_refs.len()
    }

    /// Append one sheet side as a new output page
    pub fn add_side(&mut self, side: &ComposedSide) -> Result<ObjectId> {
        let mut page_dict = Dictionary::new();
        page_dict.set("Type", Object::Name(b"Page".to_vec()));
        page_dict.set("Parent", Object::Reference(self.pages_tree_id));
        page_dict.set(
            "MediaBox",
            Object::Array(vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Real(side.width_pt),
                Object::Real(side.height_pt),
            ]),
        );

        let mut content_ops = Vec::new();
        let mut xobjects = Dictionary::new();

        for (idx, placement) in side.placements.iter().enumerate() {
            let xobject_name = format!("Im{}", idx);
            let xobject_id = self.add_image(&placement.image)?;
            xobjects.set(xobject_name.as_bytes(), Object::Reference(xobject_id));
            content_ops.push(placement_command(&xobject_name, placement));
        }

        let mut resources = Dictionary::new();
        resources.set("XObject", Object::Dictionary(xobjects));

        let content = content_ops.join("");
        let content_id = self
            .output
            .add_object(Stream::new(Dictionary::new(), content.into_bytes()));

        page_dict.set("Contents", Object::Reference(content_id));
        page_dict.set("Resources", Object::Dictionary(resources));

        let page_id = self.output.add_object(page_dict);
        self.page_refs.push(Object::Reference(page_id));
        Ok(page_id)
    }

    /// Embed a page image, keeping grayscale images single-channel.
    ///
    /// The stream is Flate-compressed here so only compressed pixels are held
    /// for the rest of the run.
    fn add_image(&mut self, image: &DynamicImage) -> Result<ObjectId> {
        let (color_space, width, height, data): (&[u8], u32, u32, Vec<u8>) = match image {
            DynamicImage::ImageLuma8(gray) => {
                (&b"DeviceGray"[..], gray.width(), gray.height(), gray.as_raw().clone())
            }
            other => {
                let rgb = other.to_rgb8();
                (&b"DeviceRGB"[..], rgb.width(), rgb.height(), rgb.into_raw())
            }
        };

        let dict = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"XObject".to_vec())),
            ("Subtype", Object::Name(b"Image".to_vec())),
            ("Width", Object::Integer(width as i64)),
            ("Height", Object::Integer(height as i64)),
            ("ColorSpace", Object::Name(color_space.to_vec())),
            ("BitsPerComponent", Object::Integer(8)),
        ]);
        let mut stream = Stream::new(dict, data);
        stream.compress()?;
        Ok(self.output.add_object(stream))
    }

    /// Create pages tree and catalog, compress streams, hand back the document
    pub fn finish(mut self) -> Document {
        let count = self.page_refs.len() as i64;
        let pages_dict = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Pages".to_vec())),
            ("Kids", Object::Array(self.page_refs)),
            ("Count", Object::Integer(count)),
        ]);
        self.output
            .objects
            .insert(self.pages_tree_id, Object::Dictionary(pages_dict));

        let catalog_id = self.output.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Catalog".to_vec())),
            ("Pages", Object::Reference(self.pages_tree_id)),
        ]));
        self.output.trailer.set("Root", catalog_id);

        self.output.compress();
        self.output
    }
}

impl SheetSink for BookletWriter {
    fn emit_side(&mut self, side: ComposedSide) -> Result<()> {
        self.add_side(&side)?;
        Ok(())
    }
}

/// `cm` + `Do` drawing the image scaled into its rectangle
fn placement_command(name: &str, placement: &PlacedImage) -> String {
    let (x, y, width, height) = placement.draw_rect();
    format!("q {} 0 0 {} {} {} cm /{} Do Q\n", width, height, x, y, name)
}
