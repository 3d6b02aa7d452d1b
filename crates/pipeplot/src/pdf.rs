use crate::common::prepare_svg_tree;

pub fn render_from_string(svg_content: &str) -> Result<Vec<u8>, String> {
    let tree = prepare_svg_tree(svg_content.as_bytes())?;
    svg2pdf::to_pdf(
        &tree,
        svg2pdf::ConversionOptions::default(),
        svg2pdf::PageOptions::default(),
    )
    .map_err(|e| format!("Failed to convert SVG to PDF: {e:?}"))
}
