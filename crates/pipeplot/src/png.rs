use crate::common::prepare_svg_tree;

pub fn render_from_string(svg_content: &str) -> Result<Vec<u8>, String> {
    let tree = prepare_svg_tree(svg_content.as_bytes())?;
    let pixmap_size = tree.size().to_int_size();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(pixmap_size.width(), pixmap_size.height())
        .ok_or("Unable to init image".to_string())?;
    resvg::render(
        &tree,
        resvg::usvg::Transform::identity(),
        &mut pixmap.as_mut(),
    );
    pixmap.encode_png().map_err(|e| e.to_string())
}
