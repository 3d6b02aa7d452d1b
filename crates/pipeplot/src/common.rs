use usvg::{fontdb, Tree};

pub fn prepare_svg_tree(svg_data: &[u8]) -> Result<Tree, String> {
    let mut options = usvg::Options::default();
    let db = options.fontdb_mut();
    db.load_system_fonts();
    if !has_fonts(db) {
        log::warn!("No system fonts found; text labels will be missing from the image");
    }
    let tree = usvg::Tree::from_data(svg_data, &options).map_err(|e| e.to_string())?;
    Ok(tree)
}

fn has_fonts(db: &fontdb::Database) -> bool {
    db.faces().next().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_font_database_is_detected() {
        assert!(!has_fonts(&fontdb::Database::new()));
    }

    #[test]
    fn tree_is_built_without_fonts_for_shapes() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="20" height="10"><rect width="5" height="5"/></svg>"#;
        let tree = prepare_svg_tree(svg.as_bytes()).unwrap();
        assert_eq!(tree.size().width(), 20.0);
    }
}
