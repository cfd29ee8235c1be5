//! Overlay Demo
//!
//! Builds a two-page letter document in memory, draws on it through the API
//! and through an instruction file, then keeps only the second page.

use lopdf::{dictionary, Document, Object, Stream};
use pdf_drawer::{Color, LineParams, PdfDrawer, RectangleParams, Result, TextParams};
use std::fs;

fn blank_document(pages: usize) -> Result<Vec<u8>> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let kids: Vec<Object> = (0..pages)
        .map(|_| {
            let content_id = doc.add_object(Stream::new(dictionary! {}, Vec::new()));
            doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            })
            .into()
        })
        .collect();

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Count" => kids.len() as i64,
            "Kids" => kids,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)?;
    Ok(bytes)
}

fn main() -> Result<()> {
    println!("pdf-drawer Overlay Demo");
    println!("=======================\n");

    let mut drawer = PdfDrawer::from_bytes(&blank_document(2)?)?;

    drawer.draw_rectangle(
        2,
        &RectangleParams::new(50.0, 50.0, 300.0, 150.0)
            .with_border(3.0, Color::blue(), 1.0)
            .with_fill(Color::rgb(1.0, 0.9, 0.2), 0.6),
    )?;
    drawer.draw_line(
        2,
        &LineParams::new(50.0, 170.0, 300.0, 170.0).with_stroke(1.5, Color::red(), 0.7),
    )?;
    drawer.draw_text(
        2,
        &TextParams::new(60.0, 110.0, "Drawn with pdf-drawer").with_font("hebo", 18.0),
    )?;

    fs::create_dir_all("demo_output")?;
    let instructions = "demo_output/overlay_demo.tsv";
    fs::write(
        instructions,
        "% A caption under the box\n\
         T\t2\t50\t200\tLoaded from an instruction file\ttiit\t12\t0.5\trgb(0,0,0)\t1\trgb(0.2,0.6,0.2)\n\
         R\t2\t40\t40\t310\t210\t0.5\trgb(0.5,0.5,0.5)\n",
    )?;
    let summary = drawer.process_instruction_file(instructions)?;
    println!("Applied {} instructions from {instructions}", summary.applied);

    drawer.select_pages(&[2])?;
    drawer.save("demo_output/overlay_demo.pdf")?;

    println!("✓ Saved demo_output/overlay_demo.pdf");
    Ok(())
}
