use crate::pipeplot::{Color, Legend, Pipe, PipePlot, Shape};

const LABEL_FONT_SIZE: f64 = 14.0;
const LABEL_PADDING: f64 = 6.0;
const LEGEND_SYMBOL_WIDTH: f64 = 40.0;

pub fn generate_string(pipe_plot: &PipePlot) -> String {
    let mut generator = Generator::new(&pipe_plot.font_family);
    generator.generate(pipe_plot);
    generator.buffer
}

struct Generator {
    font_family: String,
    buffer: String,
}

impl Generator {
    fn new(font_family: &str) -> Self {
        Self {
            font_family: font_family.to_string(),
            buffer: String::new(),
        }
    }

    fn generate(&mut self, pipe_plot: &PipePlot) {
        self.start_svg(pipe_plot.width as f64, pipe_plot.height as f64);
        self.add_background();

        for pipe in &pipe_plot.pipes {
            self.plot_pipe(pipe);
        }

        self.plot_legend(&pipe_plot.legend);
        self.end_svg();
    }

    fn plot_legend(&mut self, legend: &Legend) {
        let x = legend.xpos as f64;
        let row_height = legend.height as f64;
        let mut y = legend.ypos as f64;

        if let Some(title) = &legend.title {
            self.add_text((x, y + row_height / 2.0), title, "start");
            y += row_height;
        }

        for entry in &legend.entries {
            let symbol_height = row_height / 2.0;
            let symbol_y = y + (row_height - symbol_height) / 2.0;
            let dims = (LEGEND_SYMBOL_WIDTH, symbol_height);
            match entry.shape {
                Shape::Rect => self.add_rect((x, symbol_y), dims, &entry.color, 1.0),
                Shape::HLine(stroke) => {
                    self.add_hline((x, symbol_y), dims, &entry.color, stroke as f64)
                }
            }
            let text_x = x + LEGEND_SYMBOL_WIDTH + LABEL_PADDING;
            self.add_text((text_x, y + row_height / 2.0), &entry.label, "start");
            y += row_height;
        }
    }

    fn plot_pipe(&mut self, pipe: &Pipe) {
        let x = pipe.xpos as f64;
        let y = pipe.ypos as f64;
        let pipe_height = pipe.height as f64;

        let mut x_cur = x;
        for seg in &pipe.segs {
            let dims = (seg.width as f64, pipe_height);
            match seg.shape {
                Shape::Rect => self.add_rect((x_cur, y), dims, &seg.color, 1.0),
                Shape::HLine(stroke) => self.add_hline((x_cur, y), dims, &seg.color, stroke as f64),
            }
            x_cur += seg.width as f64;
        }

        // Bands go on top of the pipe so that overlapping ones stay visible
        for band in &pipe.bands {
            let band_x = x + band.pos as f64;
            let dims = (band.width as f64, pipe_height);
            self.add_rect((band_x, y), dims, &band.color, band.opacity);
        }

        if let Some(label) = &pipe.label {
            self.add_text((x, y - LABEL_PADDING - LABEL_FONT_SIZE / 2.0), label, "start");
        }
    }

    fn add_rect(&mut self, pos: (f64, f64), dims: (f64, f64), color: &Color, opacity: f64) {
        let (x, y) = pos;
        let (w, h) = dims;

        let pos = format!("x=\"{}\" y=\"{}\"", x, y);
        let dim = format!("height=\"{}\" width=\"{}\"", h, w);
        let style = format!("fill=\"{}\" stroke=\"{}\" stroke-width=\"0\"", color, color);

        self.emit(format!(
            "<rect {} {} {} opacity=\"{}\" />",
            pos, dim, style, opacity
        ));
    }

    fn add_hline(&mut self, pos: (f64, f64), dims: (f64, f64), color: &Color, stroke: f64) {
        let x1 = pos.0;
        let x2 = pos.0 + dims.0;
        let y1 = pos.1 + dims.1 / 2.0;
        let y2 = y1;

        let x1y1 = format!("x1=\"{}\" y1=\"{}\"", x1, y1);
        let x2y2 = format!("x2=\"{}\" y2=\"{}\"", x2, y2);
        let style = format!("stroke=\"{}\" stroke-width=\"{}\"", color, stroke);

        self.emit(format!("<line {} {} {} />", x1y1, x2y2, style));
    }

    fn add_text(&mut self, pos: (f64, f64), text: &str, anchor: &str) {
        let point = format!("x=\"{}\" y=\"{}\"", pos.0, pos.1);
        let style = format!(
            "font-family=\"{}\" font-weight=\"bold\" font-size=\"{}px\" text-anchor=\"{}\" dominant-baseline=\"middle\"",
            escape(&self.font_family),
            LABEL_FONT_SIZE,
            anchor
        );
        self.emit(format!("<text {} {}>{}</text>", point, style, escape(text)));
    }

    fn start_svg(&mut self, width: f64, height: f64) {
        self.emit(r#"<?xml version="1.0"?>"#.to_string());
        self.emit(format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" width="{}" height="{}">"#,
            width, height
        ));
    }

    fn end_svg(&mut self) {
        self.emit("</svg>".to_string());
    }

    fn add_background(&mut self) {
        self.emit(r#"<rect width="100%" height="100%" fill="white"/>"#.to_string());
    }

    fn emit(&mut self, line: String) {
        self.buffer.push_str(&line);
        self.buffer.push('\n');
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
